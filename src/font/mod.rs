mod face;
mod shaper;

pub use face::{Blob, Face, Font, FontError};
pub use shaper::{ShapedGlyph, Shaper};

/// DejaVu Sans, bundled under `tests/fixtures`.
#[cfg(test)]
pub(crate) fn test_font_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}
