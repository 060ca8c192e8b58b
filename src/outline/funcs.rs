use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::relay::{
    relay_close_path, relay_cubic_to, relay_line_to, relay_move_to, relay_quadratic_to,
};
use super::sink::OutlineSink;
use crate::ffi::{self, hb_draw_funcs_t};
use crate::font::FontError;

/// Immutable HarfBuzz draw-funcs table wired to the relays for `S`.
///
/// The table is only ever handed a `&mut S` through
/// [`crate::font::Font::draw_glyph`], which is what ties the erased
/// `draw_data` pointer back to the sink type.
pub struct DrawFuncs<S> {
    ptr: NonNull<hb_draw_funcs_t>,
    _sink: PhantomData<fn(&mut S)>,
}

impl<S: OutlineSink> DrawFuncs<S> {
    pub fn new() -> Result<Self, FontError> {
        // On allocation failure HarfBuzz returns its inert empty table, which
        // is already immutable and would ignore every setter below.
        let ptr = NonNull::new(unsafe { ffi::hb_draw_funcs_create() })
            .filter(|p| unsafe { ffi::hb_draw_funcs_is_immutable(p.as_ptr()) } == 0)
            .ok_or(FontError::CreationFailed("draw funcs"))?;

        unsafe {
            let dfuncs = ptr.as_ptr();
            ffi::hb_draw_funcs_set_move_to_func(
                dfuncs,
                Some(relay_move_to::<S>),
                ptr::null_mut(),
                None,
            );
            ffi::hb_draw_funcs_set_line_to_func(
                dfuncs,
                Some(relay_line_to::<S>),
                ptr::null_mut(),
                None,
            );
            ffi::hb_draw_funcs_set_quadratic_to_func(
                dfuncs,
                Some(relay_quadratic_to::<S>),
                ptr::null_mut(),
                None,
            );
            ffi::hb_draw_funcs_set_cubic_to_func(
                dfuncs,
                Some(relay_cubic_to::<S>),
                ptr::null_mut(),
                None,
            );
            ffi::hb_draw_funcs_set_close_path_func(
                dfuncs,
                Some(relay_close_path::<S>),
                ptr::null_mut(),
                None,
            );
            ffi::hb_draw_funcs_make_immutable(dfuncs);
        }

        log::debug!("Created draw funcs for {}", std::any::type_name::<S>());
        Ok(Self {
            ptr,
            _sink: PhantomData,
        })
    }
}

impl<S> DrawFuncs<S> {
    pub fn as_ptr(&self) -> *mut hb_draw_funcs_t {
        self.ptr.as_ptr()
    }

    pub fn is_immutable(&self) -> bool {
        unsafe { ffi::hb_draw_funcs_is_immutable(self.ptr.as_ptr()) != 0 }
    }
}

impl<S> Drop for DrawFuncs<S> {
    fn drop(&mut self) {
        unsafe { ffi::hb_draw_funcs_destroy(self.ptr.as_ptr()) };
    }
}

// SAFETY: the table is made immutable before `new` returns and HarfBuzz
// reference counts it atomically. No sink state lives in it.
unsafe impl<S> Send for DrawFuncs<S> {}
unsafe impl<S> Sync for DrawFuncs<S> {}
