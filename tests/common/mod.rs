//! Recording fake OpenGL driver.
//!
//! Entry points are handed out through `proc_address` and record every call
//! into a thread-local log, so tests running in parallel do not interfere.

#![allow(dead_code)]

use glfb::capabilities::{Capabilities, Version};
use glfb::{gl, Context, Framebuffer};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::{ptr, slice};

/// A recorded driver call. Pointer arguments are recorded by value.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub name: &'static str,
    pub args: Vec<i64>,
}

struct Driver {
    calls: Vec<Call>,
    integers: HashMap<u32, Vec<i32>>,
    strings: HashMap<u32, &'static CStr>,
    extensions: Vec<&'static CStr>,
    status: u32,
    next_id: u32,
    error: u32,
    errors_raised: usize,
}

impl Driver {
    fn new() -> Self {
        let mut integers = HashMap::new();
        integers.insert(gl::MAJOR_VERSION, vec![4]);
        integers.insert(gl::MINOR_VERSION, vec![5]);
        integers.insert(gl::NUM_EXTENSIONS, vec![0]);
        integers.insert(gl::VIEWPORT, vec![0, 0, 800, 600]);
        integers.insert(gl::MAX_VIEWPORT_DIMS, vec![16384, 16384]);
        integers.insert(gl::MAX_DRAW_BUFFERS, vec![8]);
        integers.insert(gl::MAX_DUAL_SOURCE_DRAW_BUFFERS, vec![1]);
        let mut strings = HashMap::new();
        strings.insert(gl::VERSION, leak("4.5.0 Fake"));
        Driver {
            calls: Vec::new(),
            integers,
            strings,
            extensions: Vec::new(),
            status: gl::FRAMEBUFFER_COMPLETE,
            next_id: 1,
            error: gl::NO_ERROR,
            errors_raised: 0,
        }
    }
}

thread_local! {
    static DRIVER: RefCell<Driver> = RefCell::new(Driver::new());
}

fn leak(string: &str) -> &'static CStr {
    Box::leak(CString::new(string).unwrap().into_boxed_c_str())
}

fn record(name: &'static str, args: Vec<i64>) {
    DRIVER.with(|driver| driver.borrow_mut().calls.push(Call { name, args }));
}

macro_rules! record {
    ($name:expr $(, $arg:expr)*) => {
        record($name, vec![$($arg as i64),*])
    };
}

fn next_id() -> u32 {
    DRIVER.with(|driver| {
        let mut driver = driver.borrow_mut();
        let id = driver.next_id;
        driver.next_id += 1;
        id
    })
}

unsafe fn list(n: i32, values: *const u32) -> Vec<i64> {
    let mut args = vec![n as i64];
    if n > 0 && !values.is_null() {
        args.extend(slice::from_raw_parts(values, n as usize).iter().map(|&v| v as i64));
    }
    args
}

// Queries

extern "system" fn get_error() -> u32 {
    DRIVER.with(|driver| std::mem::replace(&mut driver.borrow_mut().error, gl::NO_ERROR))
}

extern "system" fn get_integerv(pname: u32, data: *mut i32) {
    DRIVER.with(|driver| {
        let mut driver = driver.borrow_mut();
        match driver.integers.get(&pname).cloned() {
            Some(values) => {
                for (i, value) in values.iter().enumerate() {
                    unsafe { *data.add(i) = *value; }
                }
            }
            None => {
                driver.error = gl::INVALID_ENUM;
                driver.errors_raised += 1;
            }
        }
    });
}

extern "system" fn get_string(name: u32) -> *const u8 {
    DRIVER.with(|driver| {
        driver
            .borrow()
            .strings
            .get(&name)
            .map_or(ptr::null(), |s| s.as_ptr() as *const u8)
    })
}

extern "system" fn get_stringi(_name: u32, index: u32) -> *const u8 {
    DRIVER.with(|driver| {
        driver
            .borrow()
            .extensions
            .get(index as usize)
            .map_or(ptr::null(), |s| s.as_ptr() as *const u8)
    })
}

// State

extern "system" fn clear(mask: u32) {
    record!("glClear", mask);
}

extern "system" fn viewport(x: i32, y: i32, w: i32, h: i32) {
    record!("glViewport", x, y, w, h);
}

extern "system" fn pixel_storei(pname: u32, param: i32) {
    record!("glPixelStorei", pname, param);
}

extern "system" fn bind_buffer(target: u32, buffer: u32) {
    record!("glBindBuffer", target, buffer);
}

// Framebuffers

extern "system" fn gen_framebuffers(n: i32, ids: *mut u32) {
    for i in 0 .. n as usize {
        unsafe { *ids.add(i) = next_id(); }
    }
    record!("glGenFramebuffers", n);
}

extern "system" fn delete_framebuffers(n: i32, ids: *const u32) {
    record("glDeleteFramebuffers", unsafe { list(n, ids) });
}

extern "system" fn bind_framebuffer(target: u32, id: u32) {
    record!("glBindFramebuffer", target, id);
}

extern "system" fn bind_framebuffer_ext(target: u32, id: u32) {
    record!("glBindFramebufferEXT", target, id);
}

extern "system" fn framebuffer_texture_2d(
    target: u32,
    attachment: u32,
    textarget: u32,
    texture: u32,
    level: i32,
) {
    record!("glFramebufferTexture2D", target, attachment, textarget, texture, level);
}

extern "system" fn framebuffer_renderbuffer(
    target: u32,
    attachment: u32,
    rbtarget: u32,
    renderbuffer: u32,
) {
    record!("glFramebufferRenderbuffer", target, attachment, rbtarget, renderbuffer);
}

fn status() -> u32 {
    DRIVER.with(|driver| driver.borrow().status)
}

extern "system" fn check_framebuffer_status(target: u32) -> u32 {
    record!("glCheckFramebufferStatus", target);
    status()
}

extern "system" fn check_named_framebuffer_status(id: u32, target: u32) -> u32 {
    record!("glCheckNamedFramebufferStatus", id, target);
    status()
}

extern "system" fn check_named_framebuffer_status_ext(id: u32, target: u32) -> u32 {
    record!("glCheckNamedFramebufferStatusEXT", id, target);
    status()
}

extern "system" fn draw_buffers(n: i32, bufs: *const u32) {
    record("glDrawBuffers", unsafe { list(n, bufs) });
}

extern "system" fn named_framebuffer_draw_buffers(id: u32, n: i32, bufs: *const u32) {
    let mut args = vec![id as i64];
    args.extend(unsafe { list(n, bufs) });
    record("glNamedFramebufferDrawBuffers", args);
}

extern "system" fn framebuffer_draw_buffers_ext(id: u32, n: i32, bufs: *const u32) {
    let mut args = vec![id as i64];
    args.extend(unsafe { list(n, bufs) });
    record("glFramebufferDrawBuffersEXT", args);
}

extern "system" fn draw_buffer(buf: u32) {
    record!("glDrawBuffer", buf);
}

extern "system" fn named_framebuffer_draw_buffer(id: u32, buf: u32) {
    record!("glNamedFramebufferDrawBuffer", id, buf);
}

extern "system" fn framebuffer_draw_buffer_ext(id: u32, buf: u32) {
    record!("glFramebufferDrawBufferEXT", id, buf);
}

extern "system" fn read_buffer(buf: u32) {
    record!("glReadBuffer", buf);
}

extern "system" fn named_framebuffer_read_buffer(id: u32, buf: u32) {
    record!("glNamedFramebufferReadBuffer", id, buf);
}

extern "system" fn framebuffer_read_buffer_ext(id: u32, buf: u32) {
    record!("glFramebufferReadBufferEXT", id, buf);
}

extern "system" fn blit_framebuffer(
    sx0: i32,
    sy0: i32,
    sx1: i32,
    sy1: i32,
    dx0: i32,
    dy0: i32,
    dx1: i32,
    dy1: i32,
    mask: u32,
    filter: u32,
) {
    record!("glBlitFramebuffer", sx0, sy0, sx1, sy1, dx0, dy0, dx1, dy1, mask, filter);
}

extern "system" fn blit_named_framebuffer(
    read: u32,
    draw: u32,
    sx0: i32,
    sy0: i32,
    sx1: i32,
    sy1: i32,
    dx0: i32,
    dy0: i32,
    dx1: i32,
    dy1: i32,
    mask: u32,
    filter: u32,
) {
    record!(
        "glBlitNamedFramebuffer",
        read, draw, sx0, sy0, sx1, sy1, dx0, dy0, dx1, dy1, mask, filter
    );
}

extern "system" fn invalidate_framebuffer(target: u32, n: i32, atts: *const u32) {
    let mut args = vec![target as i64];
    args.extend(unsafe { list(n, atts) });
    record("glInvalidateFramebuffer", args);
}

extern "system" fn invalidate_sub_framebuffer(
    target: u32,
    n: i32,
    atts: *const u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    let mut args = vec![target as i64];
    args.extend(unsafe { list(n, atts) });
    args.extend([x, y, w, h].iter().map(|&v| v as i64));
    record("glInvalidateSubFramebuffer", args);
}

extern "system" fn invalidate_named_framebuffer_data(id: u32, n: i32, atts: *const u32) {
    let mut args = vec![id as i64];
    args.extend(unsafe { list(n, atts) });
    record("glInvalidateNamedFramebufferData", args);
}

extern "system" fn invalidate_named_framebuffer_sub_data(
    id: u32,
    n: i32,
    atts: *const u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    let mut args = vec![id as i64];
    args.extend(unsafe { list(n, atts) });
    args.extend([x, y, w, h].iter().map(|&v| v as i64));
    record("glInvalidateNamedFramebufferSubData", args);
}

// Pixel transfer

/// Byte written into every pixel read back through `glReadnPixelsARB`.
pub const READ_FILL: u8 = 0xab;

extern "system" fn read_pixels(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    format: u32,
    ty: u32,
    _data: *mut c_void,
) {
    record!("glReadPixels", x, y, w, h, format, ty);
}

extern "system" fn readn_pixels(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    format: u32,
    ty: u32,
    size: i32,
    data: *mut c_void,
) {
    if size > 0 && !data.is_null() {
        unsafe { ptr::write_bytes(data as *mut u8, READ_FILL, size as usize); }
    }
    record!("glReadnPixelsARB", x, y, w, h, format, ty, size);
}

// Textures

extern "system" fn gen_textures(n: i32, ids: *mut u32) {
    for i in 0 .. n as usize {
        unsafe { *ids.add(i) = next_id(); }
    }
    record!("glGenTextures", n);
}

extern "system" fn delete_textures(n: i32, ids: *const u32) {
    record("glDeleteTextures", unsafe { list(n, ids) });
}

extern "system" fn bind_texture(target: u32, id: u32) {
    record!("glBindTexture", target, id);
}

extern "system" fn tex_image_1d(
    target: u32,
    level: i32,
    internal_format: i32,
    width: i32,
    border: i32,
    format: u32,
    ty: u32,
    _pixels: *const c_void,
) {
    record!("glTexImage1D", target, level, internal_format, width, border, format, ty);
}

extern "system" fn tex_image_2d(
    target: u32,
    level: i32,
    internal_format: i32,
    width: i32,
    height: i32,
    border: i32,
    format: u32,
    ty: u32,
    _pixels: *const c_void,
) {
    record!(
        "glTexImage2D",
        target, level, internal_format, width, height, border, format, ty
    );
}

extern "system" fn tex_image_3d(
    target: u32,
    level: i32,
    internal_format: i32,
    width: i32,
    height: i32,
    depth: i32,
    border: i32,
    format: u32,
    ty: u32,
    _pixels: *const c_void,
) {
    record!(
        "glTexImage3D",
        target, level, internal_format, width, height, depth, border, format, ty
    );
}

extern "system" fn copy_tex_image_1d(
    target: u32,
    level: i32,
    internal_format: u32,
    x: i32,
    y: i32,
    w: i32,
    border: i32,
) {
    record!("glCopyTexImage1D", target, level, internal_format, x, y, w, border);
}

extern "system" fn copy_tex_image_2d(
    target: u32,
    level: i32,
    internal_format: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    border: i32,
) {
    record!("glCopyTexImage2D", target, level, internal_format, x, y, w, h, border);
}

extern "system" fn copy_tex_sub_image_1d(
    target: u32,
    level: i32,
    xoffset: i32,
    x: i32,
    y: i32,
    w: i32,
) {
    record!("glCopyTexSubImage1D", target, level, xoffset, x, y, w);
}

extern "system" fn copy_tex_sub_image_2d(
    target: u32,
    level: i32,
    xoffset: i32,
    yoffset: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    record!("glCopyTexSubImage2D", target, level, xoffset, yoffset, x, y, w, h);
}

extern "system" fn copy_tex_sub_image_3d(
    target: u32,
    level: i32,
    xoffset: i32,
    yoffset: i32,
    zoffset: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    record!(
        "glCopyTexSubImage3D",
        target, level, xoffset, yoffset, zoffset, x, y, w, h
    );
}

extern "system" fn copy_texture_sub_image_1d(
    texture: u32,
    level: i32,
    xoffset: i32,
    x: i32,
    y: i32,
    w: i32,
) {
    record!("glCopyTextureSubImage1D", texture, level, xoffset, x, y, w);
}

extern "system" fn copy_texture_sub_image_2d(
    texture: u32,
    level: i32,
    xoffset: i32,
    yoffset: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    record!("glCopyTextureSubImage2D", texture, level, xoffset, yoffset, x, y, w, h);
}

extern "system" fn copy_texture_sub_image_3d(
    texture: u32,
    level: i32,
    xoffset: i32,
    yoffset: i32,
    zoffset: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    record!(
        "glCopyTextureSubImage3D",
        texture, level, xoffset, yoffset, zoffset, x, y, w, h
    );
}

extern "system" fn copy_texture_sub_image_1d_ext(
    texture: u32,
    target: u32,
    level: i32,
    xoffset: i32,
    x: i32,
    y: i32,
    w: i32,
) {
    record!("glCopyTextureSubImage1DEXT", texture, target, level, xoffset, x, y, w);
}

extern "system" fn copy_texture_sub_image_2d_ext(
    texture: u32,
    target: u32,
    level: i32,
    xoffset: i32,
    yoffset: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    record!(
        "glCopyTextureSubImage2DEXT",
        texture, target, level, xoffset, yoffset, x, y, w, h
    );
}

extern "system" fn copy_texture_sub_image_3d_ext(
    texture: u32,
    target: u32,
    level: i32,
    xoffset: i32,
    yoffset: i32,
    zoffset: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    record!(
        "glCopyTextureSubImage3DEXT",
        texture, target, level, xoffset, yoffset, zoffset, x, y, w, h
    );
}

// Renderbuffers

extern "system" fn gen_renderbuffers(n: i32, ids: *mut u32) {
    for i in 0 .. n as usize {
        unsafe { *ids.add(i) = next_id(); }
    }
    record!("glGenRenderbuffers", n);
}

extern "system" fn delete_renderbuffers(n: i32, ids: *const u32) {
    record("glDeleteRenderbuffers", unsafe { list(n, ids) });
}

extern "system" fn bind_renderbuffer(target: u32, id: u32) {
    record!("glBindRenderbuffer", target, id);
}

extern "system" fn bind_renderbuffer_ext(target: u32, id: u32) {
    record!("glBindRenderbufferEXT", target, id);
}

extern "system" fn renderbuffer_storage(target: u32, format: u32, w: i32, h: i32) {
    record!("glRenderbufferStorage", target, format, w, h);
}

extern "system" fn renderbuffer_storage_multisample(
    target: u32,
    samples: i32,
    format: u32,
    w: i32,
    h: i32,
) {
    record!("glRenderbufferStorageMultisample", target, samples, format, w, h);
}

/// Loader handing out the fake entry points.
pub fn proc_address(name: &str) -> *const c_void {
    match name {
        "glGetError" => get_error as *const c_void,
        "glGetIntegerv" => get_integerv as *const c_void,
        "glGetString" => get_string as *const c_void,
        "glGetStringi" => get_stringi as *const c_void,
        "glClear" => clear as *const c_void,
        "glViewport" => viewport as *const c_void,
        "glPixelStorei" => pixel_storei as *const c_void,
        "glBindBuffer" => bind_buffer as *const c_void,
        "glGenFramebuffers" => gen_framebuffers as *const c_void,
        "glDeleteFramebuffers" => delete_framebuffers as *const c_void,
        "glBindFramebuffer" => bind_framebuffer as *const c_void,
        "glFramebufferTexture2D" => framebuffer_texture_2d as *const c_void,
        "glFramebufferRenderbuffer" => framebuffer_renderbuffer as *const c_void,
        "glCheckFramebufferStatus" => check_framebuffer_status as *const c_void,
        "glCheckNamedFramebufferStatus" => check_named_framebuffer_status as *const c_void,
        "glCheckNamedFramebufferStatusEXT" => {
            check_named_framebuffer_status_ext as *const c_void
        }
        "glDrawBuffers" => draw_buffers as *const c_void,
        "glNamedFramebufferDrawBuffers" => named_framebuffer_draw_buffers as *const c_void,
        "glFramebufferDrawBuffersEXT" => framebuffer_draw_buffers_ext as *const c_void,
        "glDrawBuffer" => draw_buffer as *const c_void,
        "glNamedFramebufferDrawBuffer" => named_framebuffer_draw_buffer as *const c_void,
        "glFramebufferDrawBufferEXT" => framebuffer_draw_buffer_ext as *const c_void,
        "glReadBuffer" => read_buffer as *const c_void,
        "glNamedFramebufferReadBuffer" => named_framebuffer_read_buffer as *const c_void,
        "glFramebufferReadBufferEXT" => framebuffer_read_buffer_ext as *const c_void,
        "glBlitFramebuffer" => blit_framebuffer as *const c_void,
        "glBlitNamedFramebuffer" => blit_named_framebuffer as *const c_void,
        "glInvalidateFramebuffer" => invalidate_framebuffer as *const c_void,
        "glInvalidateSubFramebuffer" => invalidate_sub_framebuffer as *const c_void,
        "glInvalidateNamedFramebufferData" => {
            invalidate_named_framebuffer_data as *const c_void
        }
        "glInvalidateNamedFramebufferSubData" => {
            invalidate_named_framebuffer_sub_data as *const c_void
        }
        "glReadPixels" => read_pixels as *const c_void,
        "glReadnPixelsARB" => readn_pixels as *const c_void,
        "glGenTextures" => gen_textures as *const c_void,
        "glDeleteTextures" => delete_textures as *const c_void,
        "glBindTexture" => bind_texture as *const c_void,
        "glTexImage1D" => tex_image_1d as *const c_void,
        "glTexImage2D" => tex_image_2d as *const c_void,
        "glTexImage3D" => tex_image_3d as *const c_void,
        "glCopyTexImage1D" => copy_tex_image_1d as *const c_void,
        "glCopyTexImage2D" => copy_tex_image_2d as *const c_void,
        "glCopyTexSubImage1D" => copy_tex_sub_image_1d as *const c_void,
        "glCopyTexSubImage2D" => copy_tex_sub_image_2d as *const c_void,
        "glCopyTexSubImage3D" => copy_tex_sub_image_3d as *const c_void,
        "glCopyTextureSubImage1D" => copy_texture_sub_image_1d as *const c_void,
        "glCopyTextureSubImage2D" => copy_texture_sub_image_2d as *const c_void,
        "glCopyTextureSubImage3D" => copy_texture_sub_image_3d as *const c_void,
        "glCopyTextureSubImage1DEXT" => copy_texture_sub_image_1d_ext as *const c_void,
        "glCopyTextureSubImage2DEXT" => copy_texture_sub_image_2d_ext as *const c_void,
        "glCopyTextureSubImage3DEXT" => copy_texture_sub_image_3d_ext as *const c_void,
        "glGenRenderbuffers" => gen_renderbuffers as *const c_void,
        "glDeleteRenderbuffers" => delete_renderbuffers as *const c_void,
        "glBindRenderbuffer" => bind_renderbuffer as *const c_void,
        "glRenderbufferStorage" => renderbuffer_storage as *const c_void,
        "glRenderbufferStorageMultisample" => {
            renderbuffer_storage_multisample as *const c_void
        }
        _ => ptr::null(),
    }
}

/// Framebuffer object entry points that legacy drivers only export with an
/// `EXT` suffix.
const EXT_ONLY: &[&str] = &[
    "glGenFramebuffers",
    "glDeleteFramebuffers",
    "glBindFramebuffer",
    "glFramebufferTexture2D",
    "glFramebufferRenderbuffer",
    "glCheckFramebufferStatus",
    "glGenRenderbuffers",
    "glDeleteRenderbuffers",
    "glBindRenderbuffer",
    "glRenderbufferStorage",
];

/// Loader of a driver exposing framebuffer objects through
/// `EXT_framebuffer_object` only.
pub fn legacy_proc_address(name: &str) -> *const c_void {
    match name {
        "glBindFramebufferEXT" => bind_framebuffer_ext as *const c_void,
        "glBindRenderbufferEXT" => bind_renderbuffer_ext as *const c_void,
        _ => match name.strip_suffix("EXT") {
            Some(core) if EXT_ONLY.contains(&core) => proc_address(core),
            _ if EXT_ONLY.contains(&name) => ptr::null(),
            _ => proc_address(name),
        },
    }
}

/// Restores the default driver state of this thread.
pub fn reset() {
    DRIVER.with(|driver| *driver.borrow_mut() = Driver::new());
}

/// Sets the values returned by `glGetIntegerv(pname)`.
pub fn set_integer(pname: u32, values: &[i32]) {
    DRIVER.with(|driver| {
        driver.borrow_mut().integers.insert(pname, values.to_vec());
    });
}

/// Makes `glGetIntegerv(pname)` leave its output untouched.
pub fn unset_integer(pname: u32) {
    DRIVER.with(|driver| {
        driver.borrow_mut().integers.remove(&pname);
    });
}

/// Sets the value returned by `glGetString(name)`.
pub fn set_string(name: u32, value: &str) {
    let value = leak(value);
    DRIVER.with(|driver| {
        driver.borrow_mut().strings.insert(name, value);
    });
}

/// Sets the extensions returned by `glGetStringi(GL_EXTENSIONS, i)`.
pub fn set_extensions(names: &[&str]) {
    let extensions: Vec<_> = names.iter().map(|name| leak(name)).collect();
    set_integer(gl::NUM_EXTENSIONS, &[extensions.len() as i32]);
    DRIVER.with(|driver| driver.borrow_mut().extensions = extensions);
}

/// Sets the value returned by framebuffer status checks.
pub fn set_status(status: u32) {
    DRIVER.with(|driver| driver.borrow_mut().status = status);
}

/// Returns how many errors the driver raised since the last reset.
pub fn raised_errors() -> usize {
    DRIVER.with(|driver| driver.borrow().errors_raised)
}

/// Removes and returns the calls recorded so far.
pub fn take_calls() -> Vec<Call> {
    DRIVER.with(|driver| std::mem::replace(&mut driver.borrow_mut().calls, Vec::new()))
}

/// Returns the arguments of every recorded call named `name`, in order,
/// without clearing the log.
pub fn calls_named(name: &str) -> Vec<Vec<i64>> {
    DRIVER.with(|driver| {
        driver
            .borrow()
            .calls
            .iter()
            .filter(|call| call.name == name)
            .map(|call| call.args.clone())
            .collect()
    })
}

/// Shorthand for building an expected call.
pub fn call(name: &'static str, args: &[i64]) -> Call {
    Call { name, args: args.to_vec() }
}

/// Creates a context trusting the given version and extensions, along with
/// the default framebuffer. The call log starts out empty.
pub fn context(version: (u32, u32), extensions: &[&str]) -> (Framebuffer, Context) {
    reset();
    let _ = env_logger::builder().is_test(true).try_init();
    let capabilities = Capabilities::new(
        Version::new(version.0, version.1),
        extensions.iter().cloned(),
    );
    let context = Context::with_capabilities(proc_address, capabilities).unwrap();
    let framebuffer = context.default_framebuffer();
    take_calls();
    (framebuffer, context)
}
