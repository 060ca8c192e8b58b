pub mod cli;
pub mod config;
pub mod constants;
pub mod ffi;
pub mod font;
pub mod outline;
pub mod report;

use log::info;

use crate::cli::Settings;
use crate::font::{Font, Shaper};

pub fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let font = Font::open(&settings.font, settings.index, settings.size)?;
    let mut shaper = Shaper::with_features(settings.features.as_slice())?;

    let outlines = report::outline_text(&font, &mut shaper, &settings.text)?;
    info!("Decomposed {} glyphs", outlines.len());

    print!("{}", report::render(&outlines, settings.format));
    Ok(())
}
