use std::path::PathBuf;

use hb_outline::font::{Font, Shaper};
use hb_outline::outline::PathCommand;
use hb_outline::report::{outline_text, render, OutputFormat};

fn fixture_font() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}

#[test]
fn test_outline_capital_a() {
    let font = Font::open(&fixture_font(), 0, 48.0).unwrap();
    let mut shaper = Shaper::new().unwrap();
    let outlines = outline_text(&font, &mut shaper, "Ao").unwrap();

    let a = &outlines[0];
    assert_eq!(a.glyph.glyph_id, 36);
    assert_eq!(a.commands.len(), 15);
    assert_eq!(
        a.commands.first(),
        Some(&PathCommand::MoveTo {
            x: 1050.0,
            y: 1941.0
        })
    );
    assert_eq!(a.commands.last(), Some(&PathCommand::Close));
    // "A" is built from straight segments only.
    assert!(a
        .commands
        .iter()
        .all(|cmd| !matches!(cmd, PathCommand::QuadTo { .. } | PathCommand::CubicTo { .. })));
}

#[test]
fn test_outline_every_path_is_closed() {
    let font = Font::open(&fixture_font(), 0, 24.0).unwrap();
    let mut shaper = Shaper::with_features(&["-kern"]).unwrap();
    let outlines = outline_text(&font, &mut shaper, "Rust & HarfBuzz").unwrap();

    assert_eq!(outlines.len(), 15);
    for outline in outlines.iter().filter(|o| !o.commands.is_empty()) {
        let moves = outline
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo { .. }))
            .count();
        let closes = outline
            .commands
            .iter()
            .filter(|c| **c == PathCommand::Close)
            .count();
        assert_eq!(moves, closes, "glyph {}", outline.glyph.glyph_id);
        assert!(outline.extents.is_some());
    }
}

#[test]
fn test_render_svg_from_font() {
    let font = Font::open(&fixture_font(), 0, 48.0).unwrap();
    let mut shaper = Shaper::new().unwrap();
    let outlines = outline_text(&font, &mut shaper, "o").unwrap();
    let svg = render(&outlines, OutputFormat::Svg);

    assert!(svg.starts_with("<path data-glyph=\""));
    assert!(svg.contains(" d=\"M"));
    assert!(svg.trim_end().ends_with("Z\"/>"));
}
