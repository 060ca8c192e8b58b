use super::sink::OutlineSink;

/// Axis-aligned extents of an outline, in the units the points arrived in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Extents {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Sink that only measures. Control points count towards the extents, so
/// the result is the control box rather than the tight curve bounds.
#[derive(Debug, Clone)]
pub struct BoundsSink {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    seen: bool,
}

impl BoundsSink {
    pub fn new() -> Self {
        Self {
            min_x: f32::MAX,
            min_y: f32::MAX,
            max_x: -f32::MAX,
            max_y: -f32::MAX,
            seen: false,
        }
    }

    /// `None` until at least one point has been received.
    pub fn extents(&self) -> Option<Extents> {
        self.seen.then_some(Extents {
            min_x: self.min_x,
            min_y: self.min_y,
            max_x: self.max_x,
            max_y: self.max_y,
        })
    }

    fn add(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.seen = true;
    }
}

impl Default for BoundsSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineSink for BoundsSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.add(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.add(x, y);
    }

    fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.add(cx, cy);
        self.add(x, y);
    }

    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.add(c1x, c1y);
        self.add(c2x, c2y);
        self.add(x, y);
    }

    fn close_path(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounds() {
        let sink = BoundsSink::new();
        assert!(sink.extents().is_none());
    }

    #[test]
    fn test_close_only_has_no_extents() {
        let mut sink = BoundsSink::new();
        sink.close_path();
        assert!(sink.extents().is_none());
    }

    #[test]
    fn test_bounds_include_control_points() {
        let mut sink = BoundsSink::new();
        sink.move_to(0.0, 0.0);
        sink.quadratic_to(5.0, 20.0, 10.0, 0.0);
        sink.cubic_to(-4.0, 1.0, 2.0, -6.0, 3.0, 3.0);

        let extents = sink.extents().unwrap();
        assert_eq!(
            extents,
            Extents {
                min_x: -4.0,
                min_y: -6.0,
                max_x: 10.0,
                max_y: 20.0,
            }
        );
        assert_eq!(extents.width(), 14.0);
        assert_eq!(extents.height(), 26.0);
    }
}
