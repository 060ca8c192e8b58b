use std::fmt;

use super::sink::OutlineSink;

/// A single outline segment as delivered by HarfBuzz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    QuadTo {
        cx: f32,
        cy: f32,
        x: f32,
        y: f32,
    },
    CubicTo {
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    },
    Close,
}

impl PathCommand {
    /// Every point carried by the command, control points first.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> {
        let (pts, len): ([(f32, f32); 3], usize) = match *self {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                ([(x, y), (0.0, 0.0), (0.0, 0.0)], 1)
            }
            PathCommand::QuadTo { cx, cy, x, y } => ([(cx, cy), (x, y), (0.0, 0.0)], 2),
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => ([(c1x, c1y), (c2x, c2y), (x, y)], 3),
            PathCommand::Close => ([(0.0, 0.0); 3], 0),
        };
        pts.into_iter().take(len)
    }
}

/// SVG path data syntax.
impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M{} {}", x, y),
            PathCommand::LineTo { x, y } => write!(f, "L{} {}", x, y),
            PathCommand::QuadTo { cx, cy, x, y } => write!(f, "Q{} {} {} {}", cx, cy, x, y),
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => write!(f, "C{} {} {} {} {} {}", c1x, c1y, c2x, c2y, x, y),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// Joins commands into a single SVG `d` attribute value.
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|cmd| cmd.to_string())
        .collect::<Vec<_>>()
        .join("")
}

/// Sink that keeps every segment it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct PathRecorder {
    commands: Vec<PathCommand>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl OutlineSink for PathRecorder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo { cx, cy, x, y });
    }

    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
