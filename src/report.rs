use std::fmt::Write;

use compact_str::CompactString;

use crate::font::{Font, FontError, ShapedGlyph, Shaper};
use crate::outline::{
    to_svg_path, BoundsSink, DrawFuncs, Extents, PathCommand, PathRecorder, Tee,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One outline command per line, grouped by glyph
    Commands,
    /// One SVG `<path>` element per glyph
    Svg,
}

/// Outline of one shaped glyph, in the font's scaled units.
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    pub glyph: ShapedGlyph,
    pub name: Option<CompactString>,
    pub commands: Vec<PathCommand>,
    pub extents: Option<Extents>,
}

/// Shapes `text` and decomposes every resulting glyph once.
pub fn outline_text(
    font: &Font,
    shaper: &mut Shaper,
    text: &str,
) -> Result<Vec<GlyphOutline>, FontError> {
    let funcs = DrawFuncs::<Tee<PathRecorder, BoundsSink>>::new()?;

    let outlines = shaper
        .shape(font, text)
        .into_iter()
        .map(|glyph| {
            let mut sink = Tee::new(PathRecorder::new(), BoundsSink::new());
            font.draw_glyph(glyph.glyph_id, &funcs, &mut sink);
            let (recorder, bounds) = sink.into_inner();
            GlyphOutline {
                name: font.glyph_name(glyph.glyph_id),
                commands: recorder.into_commands(),
                extents: bounds.extents(),
                glyph,
            }
        })
        .collect();
    Ok(outlines)
}

pub fn render(outlines: &[GlyphOutline], format: OutputFormat) -> String {
    let mut out = String::new();
    for outline in outlines {
        match format {
            OutputFormat::Commands => write_commands(&mut out, outline),
            OutputFormat::Svg => write_svg(&mut out, outline),
        }
    }
    out
}

fn write_commands(out: &mut String, outline: &GlyphOutline) {
    let g = &outline.glyph;
    let _ = write!(out, "glyph {}", g.glyph_id);
    if let Some(name) = &outline.name {
        let _ = write!(out, " ({})", name);
    }
    let _ = write!(
        out,
        " cluster={} advance=({},{}) offset=({},{})",
        g.cluster, g.x_advance, g.y_advance, g.x_offset, g.y_offset
    );
    match outline.extents {
        Some(e) => {
            let _ = writeln!(
                out,
                " extents=[{} {} {} {}]",
                e.min_x, e.min_y, e.max_x, e.max_y
            );
        }
        None => out.push_str(" extents=none\n"),
    }
    for cmd in &outline.commands {
        let _ = writeln!(out, "  {}", cmd);
    }
}

fn write_svg(out: &mut String, outline: &GlyphOutline) {
    let _ = writeln!(
        out,
        "<path data-glyph=\"{}\" d=\"{}\"/>",
        outline.glyph.glyph_id,
        to_svg_path(&outline.commands)
    );
}
