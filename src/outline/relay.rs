//! `extern "C"` callbacks registered with HarfBuzz.
//!
//! Each callback reinterprets `draw_data` as the sink it was monomorphized
//! for and makes exactly one call on it with the coordinates unchanged. The
//! funcs object, draw state and user data pointers are ignored and may be
//! null.
//!
//! # Safety
//!
//! For every callback, `draw_data` must point to a live `S` that is not
//! aliased for the duration of the call. [`crate::font::Font::draw_glyph`]
//! upholds this by passing a `&mut S`.

use std::ffi::c_void;

use super::sink::OutlineSink;
use crate::ffi::{hb_draw_funcs_t, hb_draw_state_t};

pub unsafe extern "C" fn relay_move_to<S: OutlineSink>(
    _dfuncs: *mut hb_draw_funcs_t,
    draw_data: *mut c_void,
    _state: *mut hb_draw_state_t,
    to_x: f32,
    to_y: f32,
    _user_data: *mut c_void,
) {
    // SAFETY: see module docs.
    let sink = unsafe { &mut *draw_data.cast::<S>() };
    sink.move_to(to_x, to_y);
}

pub unsafe extern "C" fn relay_line_to<S: OutlineSink>(
    _dfuncs: *mut hb_draw_funcs_t,
    draw_data: *mut c_void,
    _state: *mut hb_draw_state_t,
    to_x: f32,
    to_y: f32,
    _user_data: *mut c_void,
) {
    // SAFETY: see module docs.
    let sink = unsafe { &mut *draw_data.cast::<S>() };
    sink.line_to(to_x, to_y);
}

#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn relay_quadratic_to<S: OutlineSink>(
    _dfuncs: *mut hb_draw_funcs_t,
    draw_data: *mut c_void,
    _state: *mut hb_draw_state_t,
    control_x: f32,
    control_y: f32,
    to_x: f32,
    to_y: f32,
    _user_data: *mut c_void,
) {
    // SAFETY: see module docs.
    let sink = unsafe { &mut *draw_data.cast::<S>() };
    sink.quadratic_to(control_x, control_y, to_x, to_y);
}

#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn relay_cubic_to<S: OutlineSink>(
    _dfuncs: *mut hb_draw_funcs_t,
    draw_data: *mut c_void,
    _state: *mut hb_draw_state_t,
    control1_x: f32,
    control1_y: f32,
    control2_x: f32,
    control2_y: f32,
    to_x: f32,
    to_y: f32,
    _user_data: *mut c_void,
) {
    // SAFETY: see module docs.
    let sink = unsafe { &mut *draw_data.cast::<S>() };
    sink.cubic_to(control1_x, control1_y, control2_x, control2_y, to_x, to_y);
}

pub unsafe extern "C" fn relay_close_path<S: OutlineSink>(
    _dfuncs: *mut hb_draw_funcs_t,
    draw_data: *mut c_void,
    _state: *mut hb_draw_state_t,
    _user_data: *mut c_void,
) {
    // SAFETY: see module docs.
    let sink = unsafe { &mut *draw_data.cast::<S>() };
    sink.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{PathCommand, PathRecorder};
    use std::ptr;

    fn data<S>(sink: &mut S) -> *mut c_void {
        (sink as *mut S).cast()
    }

    #[test]
    fn test_each_callback_forwards_once() {
        let mut recorder = PathRecorder::new();
        let handle = data(&mut recorder);

        unsafe {
            relay_move_to::<PathRecorder>(
                ptr::null_mut(),
                handle,
                ptr::null_mut(),
                1.0,
                2.0,
                ptr::null_mut(),
            );
            relay_line_to::<PathRecorder>(
                ptr::null_mut(),
                handle,
                ptr::null_mut(),
                3.0,
                4.0,
                ptr::null_mut(),
            );
            relay_quadratic_to::<PathRecorder>(
                ptr::null_mut(),
                handle,
                ptr::null_mut(),
                5.0,
                6.0,
                7.0,
                8.0,
                ptr::null_mut(),
            );
            relay_cubic_to::<PathRecorder>(
                ptr::null_mut(),
                handle,
                ptr::null_mut(),
                1.0,
                1.0,
                2.0,
                2.0,
                3.0,
                3.0,
                ptr::null_mut(),
            );
            relay_close_path::<PathRecorder>(
                ptr::null_mut(),
                handle,
                ptr::null_mut(),
                ptr::null_mut(),
            );
        }

        assert_eq!(
            recorder.commands(),
            &[
                PathCommand::MoveTo { x: 1.0, y: 2.0 },
                PathCommand::LineTo { x: 3.0, y: 4.0 },
                PathCommand::QuadTo {
                    cx: 5.0,
                    cy: 6.0,
                    x: 7.0,
                    y: 8.0
                },
                PathCommand::CubicTo {
                    c1x: 1.0,
                    c1y: 1.0,
                    c2x: 2.0,
                    c2y: 2.0,
                    x: 3.0,
                    y: 3.0
                },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_ignored_pointers_are_not_read() {
        // Dangling but non-null values for the ignored arguments.
        let bogus = 0x10 as *mut c_void;
        let mut recorder = PathRecorder::new();
        let handle = data(&mut recorder);

        unsafe {
            relay_move_to::<PathRecorder>(bogus.cast(), handle, bogus.cast(), 9.0, -9.0, bogus);
            relay_close_path::<PathRecorder>(bogus.cast(), handle, bogus.cast(), bogus);
        }

        assert_eq!(
            recorder.commands(),
            &[PathCommand::MoveTo { x: 9.0, y: -9.0 }, PathCommand::Close]
        );
    }
}
