//! The `hb-draw.h` API, which `harfbuzz-sys` does not export.
//!
//! Declared against the library `harfbuzz-sys` links; everything else is
//! called through `harfbuzz_sys` directly.

#![allow(non_camel_case_types)]

use std::ffi::c_void;
use std::marker::{PhantomData, PhantomPinned};

use harfbuzz_sys::{hb_bool_t, hb_codepoint_t, hb_destroy_func_t, hb_font_t};

#[repr(C)]
pub struct hb_draw_funcs_t {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Never read on the Rust side; only its address crosses the boundary.
#[repr(C)]
pub struct hb_draw_state_t {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

pub type hb_draw_move_to_func_t = Option<
    unsafe extern "C" fn(
        dfuncs: *mut hb_draw_funcs_t,
        draw_data: *mut c_void,
        st: *mut hb_draw_state_t,
        to_x: f32,
        to_y: f32,
        user_data: *mut c_void,
    ),
>;

pub type hb_draw_line_to_func_t = hb_draw_move_to_func_t;

pub type hb_draw_quadratic_to_func_t = Option<
    unsafe extern "C" fn(
        dfuncs: *mut hb_draw_funcs_t,
        draw_data: *mut c_void,
        st: *mut hb_draw_state_t,
        control_x: f32,
        control_y: f32,
        to_x: f32,
        to_y: f32,
        user_data: *mut c_void,
    ),
>;

pub type hb_draw_cubic_to_func_t = Option<
    unsafe extern "C" fn(
        dfuncs: *mut hb_draw_funcs_t,
        draw_data: *mut c_void,
        st: *mut hb_draw_state_t,
        control1_x: f32,
        control1_y: f32,
        control2_x: f32,
        control2_y: f32,
        to_x: f32,
        to_y: f32,
        user_data: *mut c_void,
    ),
>;

pub type hb_draw_close_path_func_t = Option<
    unsafe extern "C" fn(
        dfuncs: *mut hb_draw_funcs_t,
        draw_data: *mut c_void,
        st: *mut hb_draw_state_t,
        user_data: *mut c_void,
    ),
>;

extern "C" {
    pub fn hb_draw_funcs_create() -> *mut hb_draw_funcs_t;
    pub fn hb_draw_funcs_destroy(dfuncs: *mut hb_draw_funcs_t);
    pub fn hb_draw_funcs_make_immutable(dfuncs: *mut hb_draw_funcs_t);
    pub fn hb_draw_funcs_is_immutable(dfuncs: *mut hb_draw_funcs_t) -> hb_bool_t;

    pub fn hb_draw_funcs_set_move_to_func(
        dfuncs: *mut hb_draw_funcs_t,
        func: hb_draw_move_to_func_t,
        user_data: *mut c_void,
        destroy: hb_destroy_func_t,
    );
    pub fn hb_draw_funcs_set_line_to_func(
        dfuncs: *mut hb_draw_funcs_t,
        func: hb_draw_line_to_func_t,
        user_data: *mut c_void,
        destroy: hb_destroy_func_t,
    );
    pub fn hb_draw_funcs_set_quadratic_to_func(
        dfuncs: *mut hb_draw_funcs_t,
        func: hb_draw_quadratic_to_func_t,
        user_data: *mut c_void,
        destroy: hb_destroy_func_t,
    );
    pub fn hb_draw_funcs_set_cubic_to_func(
        dfuncs: *mut hb_draw_funcs_t,
        func: hb_draw_cubic_to_func_t,
        user_data: *mut c_void,
        destroy: hb_destroy_func_t,
    );
    pub fn hb_draw_funcs_set_close_path_func(
        dfuncs: *mut hb_draw_funcs_t,
        func: hb_draw_close_path_func_t,
        user_data: *mut c_void,
        destroy: hb_destroy_func_t,
    );

    pub fn hb_font_draw_glyph(
        font: *mut hb_font_t,
        glyph: hb_codepoint_t,
        dfuncs: *mut hb_draw_funcs_t,
        draw_data: *mut c_void,
    );
}
