//! Cached-state OpenGL framebuffer operations.
//!
//! A [`Context`] remembers which framebuffers are bound for reading and
//! drawing and which viewport is set, so redundant driver calls are skipped.
//! Operations dispatch to direct state access, `EXT_direct_state_access` or
//! bind-then-call entry points, chosen once from what the driver supports.
//!
//! [`Context`]: struct.Context.html

#[macro_use] extern crate anyhow;
#[macro_use] extern crate bitflags;
#[macro_use] extern crate log;

mod context;
mod queue;
mod state;

pub mod capabilities;
pub mod framebuffer;
pub mod gl;
pub mod image;
pub mod implementation;
pub mod math;
pub mod renderbuffer;
pub mod texture;

use anyhow::Result;
use std::os;

/// Initialize the library, returning the default framebuffer and a context
/// to operate on it.
///
/// Extensions listed in `GLFB_DISABLE_EXTENSIONS` are treated as
/// unsupported.
pub fn init<F>(query_proc_address: F) -> Result<(Framebuffer, Context)>
    where F: FnMut(&str) -> *const os::raw::c_void
{
    init_with(query_proc_address, &Config::from_env())
}

/// Initialize the library with explicit configuration.
pub fn init_with<F>(
    query_proc_address: F,
    config: &Config,
) -> Result<(Framebuffer, Context)>
    where F: FnMut(&str) -> *const os::raw::c_void
{
    let context = Context::new(query_proc_address, config)?;
    let framebuffer = context.default_framebuffer();
    Ok((framebuffer, context))
}

#[doc(inline)]
pub use capabilities::Capabilities;

#[doc(inline)]
pub use capabilities::Config;

#[doc(inline)]
pub use context::Context;

#[doc(inline)]
pub use framebuffer::ColorAttachment;

#[doc(inline)]
pub use framebuffer::DepthAttachment;

#[doc(inline)]
pub use framebuffer::Framebuffer;

#[doc(inline)]
pub use image::Image2;

#[doc(inline)]
pub use math::{Range2, Vector2, Vector3};

#[doc(inline)]
pub use renderbuffer::Renderbuffer;

#[doc(inline)]
pub use texture::Texture;
