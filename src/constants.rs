/// Pixel size used when neither the command line nor the config sets one.
pub const DEFAULT_FONT_SIZE: f32 = 48.0;
pub const DEFAULT_FACE_INDEX: u32 = 0;

pub const CONFIG_DIR_NAME: &str = "hb-outline";
pub const CONFIG_FILE_NAME: &str = "config.toml";
