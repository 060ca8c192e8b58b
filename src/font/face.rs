use std::ffi::{c_char, c_void, CStr, CString};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use compact_str::CompactString;

use crate::ffi;
use crate::outline::{DrawFuncs, OutlineSink};

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Font file not found: {0}")]
    NotFound(PathBuf),
    #[error("Font path is not valid UTF-8 or contains a NUL byte")]
    InvalidPath,
    #[error("Font file is empty or unreadable")]
    EmptyBlob,
    #[error("Face index {index} out of range, file has {count} faces")]
    FaceIndexOutOfRange { index: u32, count: u32 },
    #[error("Face {0} has no glyphs")]
    NoGlyphs(u32),
    #[error("Font size {0} is not a positive finite value")]
    InvalidSize(f32),
    #[error("Failed to create HarfBuzz {0}")]
    CreationFailed(&'static str),
}

/// Raw font file bytes owned by HarfBuzz.
pub struct Blob {
    ptr: NonNull<harfbuzz_sys::hb_blob_t>,
}

impl Blob {
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        if !path.exists() {
            return Err(FontError::NotFound(path.to_path_buf()));
        }
        let c_path = path
            .to_str()
            .and_then(|s| CString::new(s).ok())
            .ok_or(FontError::InvalidPath)?;

        let ptr = unsafe { harfbuzz_sys::hb_blob_create_from_file(c_path.as_ptr()) };
        let blob = NonNull::new(ptr)
            .map(|ptr| Self { ptr })
            .ok_or(FontError::CreationFailed("blob"))?;

        // HarfBuzz hands back the empty blob instead of failing.
        if blob.len() == 0 {
            return Err(FontError::EmptyBlob);
        }
        log::debug!("Loaded {} bytes from {}", blob.len(), path.display());
        Ok(blob)
    }

    pub fn len(&self) -> u32 {
        unsafe { harfbuzz_sys::hb_blob_get_length(self.ptr.as_ptr()) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for Blob {
    fn drop(&mut self) {
        unsafe { harfbuzz_sys::hb_blob_destroy(self.ptr.as_ptr()) };
    }
}

/// One face out of a font file. Holds its own reference to the blob.
pub struct Face {
    ptr: NonNull<harfbuzz_sys::hb_face_t>,
    index: u32,
}

impl Face {
    pub fn new(blob: &Blob, index: u32) -> Result<Self, FontError> {
        // HarfBuzz silently falls back to face 0 for a bad index.
        let count = unsafe { harfbuzz_sys::hb_face_count(blob.ptr.as_ptr()) };
        if index >= count {
            return Err(FontError::FaceIndexOutOfRange { index, count });
        }

        let ptr = unsafe { harfbuzz_sys::hb_face_create(blob.ptr.as_ptr(), index) };
        let face = NonNull::new(ptr)
            .map(|ptr| Self { ptr, index })
            .ok_or(FontError::CreationFailed("face"))?;

        if face.glyph_count() == 0 {
            return Err(FontError::NoGlyphs(index));
        }
        Ok(face)
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn glyph_count(&self) -> u32 {
        unsafe { harfbuzz_sys::hb_face_get_glyph_count(self.ptr.as_ptr()) }
    }
}

impl Drop for Face {
    fn drop(&mut self) {
        unsafe { harfbuzz_sys::hb_face_destroy(self.ptr.as_ptr()) };
    }
}

/// Sized font using HarfBuzz's OpenType functions.
pub struct Font {
    ptr: NonNull<harfbuzz_sys::hb_font_t>,
    size: f32,
}

impl Font {
    /// Scale is `size * 64` on both axes, so outline coordinates come back
    /// in 26.6 fixed-point units of `size`. The scaled value must land in
    /// `1..=i32::MAX`; anything else would zero or mirror the outlines.
    pub fn new(face: &Face, size: f32) -> Result<Self, FontError> {
        let scale = scale_for_size(size).ok_or(FontError::InvalidSize(size))?;

        let ptr = unsafe { harfbuzz_sys::hb_font_create(face.ptr.as_ptr()) };
        let ptr = NonNull::new(ptr).ok_or(FontError::CreationFailed("font"))?;

        unsafe {
            harfbuzz_sys::hb_ot_font_set_funcs(ptr.as_ptr());
            harfbuzz_sys::hb_font_set_scale(ptr.as_ptr(), scale, scale);
        }
        Ok(Self { ptr, size })
    }

    pub fn open(path: &Path, index: u32, size: f32) -> Result<Self, FontError> {
        let blob = Blob::from_file(path)?;
        let face = Face::new(&blob, index)?;
        log::info!(
            "Opened face {} of {} ({} glyphs) at size {}",
            index,
            path.display(),
            face.glyph_count(),
            size
        );
        Self::new(&face, size)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn as_ptr(&self) -> *mut harfbuzz_sys::hb_font_t {
        self.ptr.as_ptr()
    }

    pub fn glyph_name(&self, glyph: u32) -> Option<CompactString> {
        let mut buf = [0 as c_char; 64];
        let found = unsafe {
            harfbuzz_sys::hb_font_get_glyph_name(
                self.ptr.as_ptr(),
                glyph,
                buf.as_mut_ptr(),
                buf.len() as u32,
            )
        };
        if found == 0 {
            return None;
        }
        let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
        Some(CompactString::from(name.to_string_lossy()))
    }

    /// Decomposes `glyph` and relays every segment to `sink`.
    pub fn draw_glyph<S: OutlineSink>(&self, glyph: u32, funcs: &DrawFuncs<S>, sink: &mut S) {
        let draw_data = (sink as *mut S).cast::<c_void>();
        unsafe { ffi::hb_font_draw_glyph(self.ptr.as_ptr(), glyph, funcs.as_ptr(), draw_data) };
    }
}

fn scale_for_size(size: f32) -> Option<i32> {
    let scale = size * 64.0;
    // NaN fails both comparisons.
    if scale >= 1.0 && scale <= i32::MAX as f32 {
        Some(scale as i32)
    } else {
        None
    }
}

impl Drop for Font {
    fn drop(&mut self) {
        unsafe { harfbuzz_sys::hb_font_destroy(self.ptr.as_ptr()) };
    }
}
