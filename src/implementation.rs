//! Selection of driver entry points.
//!
//! Several OpenGL entry points do the same thing through different means:
//! direct state access functions that name the object explicitly, their
//! `EXT_direct_state_access` counterparts, and the classic functions acting
//! on whatever object is currently bound. The variant used by a context is
//! chosen once, from its [`Capabilities`], when the context is created.
//!
//! [`Capabilities`]: ../capabilities/struct.Capabilities.html

use anyhow::Result;
use crate::capabilities::{extension, Capabilities};

/// How framebuffers are bound.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Bind {
    /// Separate `GL_READ_FRAMEBUFFER` and `GL_DRAW_FRAMEBUFFER` bindings.
    Separate,

    /// A single `GL_FRAMEBUFFER` binding serving as both read and draw
    /// target.
    Single,
}

/// How framebuffer contents are blitted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Blit {
    /// Bind read and draw framebuffers, then `glBlitFramebuffer`.
    Default,

    /// `glBlitNamedFramebuffer`.
    Named,

    /// Blitting needs separate read and draw bindings.
    Unavailable,
}

/// How operations on a named object are dispatched.
///
/// Shared by framebuffer status checks, draw and read buffer mapping and
/// copies into texture sub-images.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Access {
    /// Bind the object, then call the classic entry point.
    Default,

    /// ARB / OpenGL 4.5 direct state access.
    Named,

    /// `EXT_direct_state_access`.
    NamedExt,
}

/// How framebuffer contents are invalidated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Invalidate {
    /// Invalidation is a hint; without driver support it does nothing.
    NoOp,

    /// Bind, then `glInvalidate(Sub)Framebuffer`.
    Default,

    /// `glInvalidateNamedFramebuffer(Sub)Data`.
    Named,
}

/// How pixels are read back.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Read {
    /// `glReadPixels`.
    Default,

    /// `glReadnPixelsARB`, bounded by the destination size.
    Robust,
}

/// The driver entry points chosen for a context.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Implementation {
    /// Framebuffer binding.
    pub bind: Bind,

    /// Framebuffer blits.
    pub blit: Blit,

    /// Status checks, draw/read buffer mapping and texture sub-image copies.
    pub access: Access,

    /// Framebuffer invalidation.
    pub invalidate: Invalidate,

    /// Pixel read-back.
    pub read: Read,

    /// Whether a pixel pack buffer binding exists that must be cleared
    /// before reading into client memory.
    pub pixel_pack_buffer: bool,
}

impl Implementation {
    /// Chooses entry points for a context with the given capabilities.
    ///
    /// Fails if the context has no framebuffer object support at all.
    pub fn select(caps: &Capabilities) -> Result<Self> {
        let separate = caps.supports(extension::ARB_FRAMEBUFFER_OBJECT)
            || caps.supports(extension::EXT_FRAMEBUFFER_BLIT);
        ensure!(
            separate || caps.supports(extension::EXT_FRAMEBUFFER_OBJECT),
            "OpenGL {} has no framebuffer object support",
            caps.version(),
        );
        let bind = if separate { Bind::Separate } else { Bind::Single };

        let (access, blit) = if caps.supports(extension::ARB_DIRECT_STATE_ACCESS) {
            (Access::Named, Blit::Named)
        } else if caps.supports(extension::EXT_DIRECT_STATE_ACCESS) {
            (Access::NamedExt, Blit::Default)
        } else {
            (Access::Default, Blit::Default)
        };
        let blit = if bind == Bind::Single { Blit::Unavailable } else { blit };

        let invalidate = if !caps.supports(extension::ARB_INVALIDATE_SUBDATA) {
            Invalidate::NoOp
        } else if caps.supports(extension::ARB_DIRECT_STATE_ACCESS) {
            Invalidate::Named
        } else {
            Invalidate::Default
        };

        let read = if caps.supports(extension::ARB_ROBUSTNESS) {
            Read::Robust
        } else {
            Read::Default
        };

        let pixel_pack_buffer = caps.supports(extension::ARB_PIXEL_BUFFER_OBJECT);

        let implementation = Self {
            bind,
            blit,
            access,
            invalidate,
            read,
            pixel_pack_buffer,
        };
        info!("Using {:?}", implementation);
        Ok(implementation)
    }
}
