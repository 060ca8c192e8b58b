/// Receiver of glyph outline segments.
///
/// One method per HarfBuzz draw callback. Calls arrive in path order and
/// carry the coordinates exactly as HarfBuzz produced them.
pub trait OutlineSink {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn close_path(&mut self);
}

impl<S: OutlineSink + ?Sized> OutlineSink for &mut S {
    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y);
    }

    fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        (**self).quadratic_to(cx, cy, x, y);
    }

    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        (**self).cubic_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }
}

/// Forwards every segment to two sinks, `first` before `second`.
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: OutlineSink, B: OutlineSink> OutlineSink for Tee<A, B> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.first.move_to(x, y);
        self.second.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.first.line_to(x, y);
        self.second.line_to(x, y);
    }

    fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.first.quadratic_to(cx, cy, x, y);
        self.second.quadratic_to(cx, cy, x, y);
    }

    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.first.cubic_to(c1x, c1y, c2x, c2y, x, y);
        self.second.cubic_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn close_path(&mut self) {
        self.first.close_path();
        self.second.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{BoundsSink, PathCommand, PathRecorder};

    #[test]
    fn test_tee_forwards_to_both() {
        let mut tee = Tee::new(PathRecorder::new(), BoundsSink::new());
        tee.move_to(-2.0, 3.0);
        tee.line_to(4.0, -1.0);
        tee.close_path();

        let (recorder, bounds) = tee.into_inner();
        assert_eq!(
            recorder.commands(),
            &[
                PathCommand::MoveTo { x: -2.0, y: 3.0 },
                PathCommand::LineTo { x: 4.0, y: -1.0 },
                PathCommand::Close,
            ]
        );
        let extents = bounds.extents().unwrap();
        assert_eq!(extents.min_x, -2.0);
        assert_eq!(extents.max_y, 3.0);
    }

    #[test]
    fn test_mut_ref_sink() {
        fn feed<S: OutlineSink>(mut sink: S) {
            sink.cubic_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0);
        }

        let mut recorder = PathRecorder::new();
        feed(&mut recorder);
        assert_eq!(recorder.commands().len(), 1);
    }
}
