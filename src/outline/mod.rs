mod bounds;
mod funcs;
mod path;
pub mod relay;
mod sink;

pub use bounds::{BoundsSink, Extents};
pub use funcs::DrawFuncs;
pub use path::{to_svg_path, PathCommand, PathRecorder};
pub use sink::{OutlineSink, Tee};
