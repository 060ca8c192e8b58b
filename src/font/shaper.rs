use std::ffi::c_char;
use std::ptr::NonNull;

use super::face::{Font, FontError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    pub glyph_id: u32,
    pub cluster: u32,
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

struct HbBuffer {
    ptr: NonNull<harfbuzz_sys::hb_buffer_t>,
}

impl HbBuffer {
    fn new() -> Option<Self> {
        let ptr = NonNull::new(unsafe { harfbuzz_sys::hb_buffer_create() })?;
        // The inert empty buffer is what comes back when allocation fails.
        let usable = unsafe { harfbuzz_sys::hb_buffer_allocation_successful(ptr.as_ptr()) };
        (usable != 0).then_some(Self { ptr })
    }

    /// Clears the previous run and loads `text` with guessed direction,
    /// script and language.
    fn load(&mut self, text: &str) {
        let buf = self.ptr.as_ptr();
        unsafe {
            harfbuzz_sys::hb_buffer_reset(buf);
            harfbuzz_sys::hb_buffer_add_utf8(
                buf,
                text.as_ptr() as *const c_char,
                text.len() as i32,
                0,
                text.len() as i32,
            );
            harfbuzz_sys::hb_buffer_guess_segment_properties(buf);
        }
    }

    fn len(&self) -> u32 {
        unsafe { harfbuzz_sys::hb_buffer_get_length(self.ptr.as_ptr()) }
    }

    fn direction(&self) -> harfbuzz_sys::hb_direction_t {
        unsafe { harfbuzz_sys::hb_buffer_get_direction(self.ptr.as_ptr()) }
    }

    /// Infos and positions of the last shaped run, paired up.
    fn glyphs(&self) -> impl Iterator<Item = ShapedGlyph> + '_ {
        let buf = self.ptr.as_ptr();
        let mut info_len = 0u32;
        let mut pos_len = 0u32;
        let (infos, positions) = unsafe {
            let infos = harfbuzz_sys::hb_buffer_get_glyph_infos(buf, &mut info_len);
            let positions = harfbuzz_sys::hb_buffer_get_glyph_positions(buf, &mut pos_len);
            (raw_slice(infos, info_len), raw_slice(positions, pos_len))
        };
        infos.iter().zip(positions).map(|(info, pos)| ShapedGlyph {
            glyph_id: info.codepoint,
            cluster: info.cluster,
            x_advance: pos.x_advance,
            y_advance: pos.y_advance,
            x_offset: pos.x_offset,
            y_offset: pos.y_offset,
        })
    }
}

unsafe fn raw_slice<'a, T>(ptr: *const T, len: u32) -> &'a [T] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(ptr, len as usize)
    }
}

impl Drop for HbBuffer {
    fn drop(&mut self) {
        unsafe { harfbuzz_sys::hb_buffer_destroy(self.ptr.as_ptr()) };
    }
}

/// Parses HarfBuzz feature syntax: `liga`, `-kern`, `ss01=2`, `aalt[3:5]=2`.
fn parse_feature(s: &str) -> Option<harfbuzz_sys::hb_feature_t> {
    let mut feature = harfbuzz_sys::hb_feature_t {
        tag: 0,
        value: 0,
        start: 0,
        end: 0,
    };
    let ok = unsafe {
        harfbuzz_sys::hb_feature_from_string(
            s.as_ptr() as *const c_char,
            s.len() as i32,
            &mut feature,
        )
    };
    (ok != 0).then_some(feature)
}

/// Shapes UTF-8 text with a reusable HarfBuzz buffer.
///
/// Direction, script and language are guessed from the text, so
/// right-to-left runs come back in visual order.
pub struct Shaper {
    buffer: HbBuffer,
    features: Vec<harfbuzz_sys::hb_feature_t>,
}

impl Shaper {
    pub fn new() -> Result<Self, FontError> {
        Self::with_features::<&str>(&[])
    }

    /// Unparseable feature strings are skipped with a warning.
    pub fn with_features<S: AsRef<str>>(feature_strings: &[S]) -> Result<Self, FontError> {
        let mut features = Vec::with_capacity(feature_strings.len());
        for feature_str in feature_strings {
            match parse_feature(feature_str.as_ref()) {
                Some(feature) => features.push(feature),
                None => log::warn!("Ignoring invalid feature {:?}", feature_str.as_ref()),
            }
        }

        let buffer = HbBuffer::new().ok_or(FontError::CreationFailed("buffer"))?;
        log::debug!("Shaper created with {} features", features.len());
        Ok(Self { buffer, features })
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn shape(&mut self, font: &Font, text: &str) -> Vec<ShapedGlyph> {
        if text.is_empty() {
            return Vec::new();
        }
        self.buffer.load(text);

        unsafe {
            harfbuzz_sys::hb_shape(
                font.as_ptr(),
                self.buffer.ptr.as_ptr(),
                self.features.as_ptr(),
                self.features.len() as u32,
            );
        }

        log::debug!(
            "Shaped {} bytes into {} glyphs (direction {})",
            text.len(),
            self.buffer.len(),
            self.buffer.direction()
        );
        self.buffer.glyphs().collect()
    }
}
