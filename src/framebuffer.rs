//! Framebuffer objects and the values describing framebuffer operations.

use crate::gl;
use crate::math::{Range2, Vector2, ZeroInit};
use crate::queue;
use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture;
use std::{cmp, fmt, hash, ops};

/// Maximum number of color attachments of a framebuffer created by this
/// crate. OpenGL 3.0 guarantees at least this many.
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

/// OpenGL framebuffer ID type.
pub(crate) type Id = u32;

/// ID of the default framebuffer.
pub(crate) const DEFAULT: Id = 0;

/// Framebuffer binding target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Target {
    /// Corresponds to `GL_READ_FRAMEBUFFER`.
    Read,

    /// Corresponds to `GL_DRAW_FRAMEBUFFER`.
    Draw,
}

impl Target {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Target::Read => gl::READ_FRAMEBUFFER,
            Target::Draw => gl::DRAW_FRAMEBUFFER,
        }
    }
}

bitflags! {
    /// Buffers affected by a clear or blit.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct Mask: u32 {
        /// Corresponds to `GL_COLOR_BUFFER_BIT`.
        const COLOR = gl::COLOR_BUFFER_BIT;

        /// Corresponds to `GL_DEPTH_BUFFER_BIT`.
        const DEPTH = gl::DEPTH_BUFFER_BIT;

        /// Corresponds to `GL_STENCIL_BUFFER_BIT`.
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

/// Interpolation applied when a blit stretches the image.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BlitFilter {
    /// Corresponds to `GL_NEAREST`.
    Nearest,

    /// Corresponds to `GL_LINEAR`. Only valid for color blits.
    Linear,
}

impl BlitFilter {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            BlitFilter::Nearest => gl::NEAREST,
            BlitFilter::Linear => gl::LINEAR,
        }
    }
}

/// Framebuffer completeness status.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    /// Corresponds to `GL_FRAMEBUFFER_COMPLETE`.
    Complete,

    /// Corresponds to `GL_FRAMEBUFFER_UNDEFINED`.
    Undefined,

    /// Corresponds to `GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT`.
    IncompleteAttachment,

    /// Corresponds to `GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT`.
    IncompleteMissingAttachment,

    /// Corresponds to `GL_FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER`.
    IncompleteDrawBuffer,

    /// Corresponds to `GL_FRAMEBUFFER_INCOMPLETE_READ_BUFFER`.
    IncompleteReadBuffer,

    /// Corresponds to `GL_FRAMEBUFFER_UNSUPPORTED`.
    Unsupported,

    /// Corresponds to `GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE`.
    IncompleteMultisample,

    /// Corresponds to `GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS`.
    IncompleteLayerTargets,

    /// Any other value, including zero when the check itself failed.
    Unknown(u32),
}

impl Status {
    pub(crate) fn from_gl_enum(value: u32) -> Self {
        match value {
            gl::FRAMEBUFFER_COMPLETE => Status::Complete,
            gl::FRAMEBUFFER_UNDEFINED => Status::Undefined,
            gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => Status::IncompleteAttachment,
            gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
                Status::IncompleteMissingAttachment
            }
            gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => Status::IncompleteDrawBuffer,
            gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => Status::IncompleteReadBuffer,
            gl::FRAMEBUFFER_UNSUPPORTED => Status::Unsupported,
            gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => Status::IncompleteMultisample,
            gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => Status::IncompleteLayerTargets,
            x => Status::Unknown(x),
        }
    }
}

/// A color buffer that fragment outputs are written to or pixels are read
/// from.
///
/// `Attachment` applies to framebuffer objects, the others to the default
/// framebuffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorBuffer {
    /// Corresponds to `GL_NONE`.
    None,

    /// Corresponds to `GL_COLOR_ATTACHMENTi`.
    Attachment(u32),

    /// Corresponds to `GL_FRONT`.
    Front,

    /// Corresponds to `GL_BACK`.
    Back,

    /// Corresponds to `GL_FRONT_LEFT`.
    FrontLeft,

    /// Corresponds to `GL_FRONT_RIGHT`.
    FrontRight,

    /// Corresponds to `GL_BACK_LEFT`.
    BackLeft,

    /// Corresponds to `GL_BACK_RIGHT`.
    BackRight,
}

impl ColorBuffer {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            ColorBuffer::None => gl::NONE,
            ColorBuffer::Attachment(i) => gl::COLOR_ATTACHMENT0 + i,
            ColorBuffer::Front => gl::FRONT,
            ColorBuffer::Back => gl::BACK,
            ColorBuffer::FrontLeft => gl::FRONT_LEFT,
            ColorBuffer::FrontRight => gl::FRONT_RIGHT,
            ColorBuffer::BackLeft => gl::BACK_LEFT,
            ColorBuffer::BackRight => gl::BACK_RIGHT,
        }
    }
}

/// A buffer whose contents may be discarded by invalidation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Invalidation {
    /// A color attachment; the index is ignored for the default framebuffer.
    Color(u32),

    /// The depth buffer.
    Depth,

    /// The stencil buffer.
    Stencil,

    /// Both depth and stencil buffers.
    DepthStencil,
}

impl Invalidation {
    /// Appends the OpenGL enums naming this buffer.
    ///
    /// The default framebuffer names its buffers differently from
    /// framebuffer objects.
    pub(crate) fn push_gl_enums(self, default: bool, out: &mut Vec<u32>) {
        match (self, default) {
            (Invalidation::Color(_), true) => out.push(gl::COLOR),
            (Invalidation::Depth, true) => out.push(gl::DEPTH),
            (Invalidation::Stencil, true) => out.push(gl::STENCIL),
            (Invalidation::DepthStencil, true) => {
                out.push(gl::DEPTH);
                out.push(gl::STENCIL);
            }
            (Invalidation::Color(i), false) => out.push(gl::COLOR_ATTACHMENT0 + i),
            (Invalidation::Depth, false) => out.push(gl::DEPTH_ATTACHMENT),
            (Invalidation::Stencil, false) => out.push(gl::STENCIL_ATTACHMENT),
            (Invalidation::DepthStencil, false) => out.push(gl::DEPTH_STENCIL_ATTACHMENT),
        }
    }
}

/// Framebuffer color attachment.
#[derive(Debug)]
pub enum ColorAttachment {
    /// Render to a renderbuffer.
    Renderbuffer(Renderbuffer),

    /// Render to level 0 of a 2D texture.
    Texture2(Texture),

    /// No color attachment.
    None,
}

impl Default for ColorAttachment {
    fn default() -> Self {
        ColorAttachment::None
    }
}

/// Framebuffer depth attachment.
#[derive(Debug)]
pub enum DepthAttachment {
    /// Depth renderbuffer.
    Renderbuffer(Renderbuffer),

    /// Level 0 of a 2D depth texture.
    Texture2(Texture),

    /// Combined depth and stencil renderbuffer.
    DepthStencil(Renderbuffer),

    /// No depth attachment.
    None,
}

impl Default for DepthAttachment {
    fn default() -> Self {
        DepthAttachment::None
    }
}

/// Returns the framebuffer name back to the context upon destruction.
struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(self.id);
    }
}

/// A framebuffer: either the default framebuffer of the window system or
/// a framebuffer object.
///
/// Operations on framebuffers are performed through the [`Context`], which
/// tracks what is currently bound.
///
/// [`Context`]: ../struct.Context.html
pub struct Framebuffer {
    /// The OpenGL framebuffer ID.
    id: Id,

    /// Region rendered to while the framebuffer is bound for drawing.
    pub(crate) viewport: Range2,

    /// Color attachments, kept alive for as long as the framebuffer.
    color_attachments: [ColorAttachment; MAX_COLOR_ATTACHMENTS],

    /// Depth attachment.
    depth_attachment: DepthAttachment,

    /// Returns the framebuffer back to the context upon destruction.
    ///
    /// The default framebuffer is never destroyed.
    _destructor: Option<Destructor>,
}

impl Framebuffer {
    /// Constructor.
    ///
    /// The caller is responsible for setting up the framebuffer.
    pub(crate) fn new(
        id: Id,
        size: Vector2,
        color_attachments: [ColorAttachment; MAX_COLOR_ATTACHMENTS],
        depth_attachment: DepthAttachment,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            id,
            viewport: Range2::from_size(ZeroInit.into(), size),
            color_attachments,
            depth_attachment,
            _destructor: Some(Destructor { id, tx }),
        }
    }

    /// Returns the default framebuffer with the given viewport.
    pub(crate) fn implicit(viewport: Range2) -> Self {
        Self {
            id: DEFAULT,
            viewport,
            color_attachments: Default::default(),
            depth_attachment: DepthAttachment::None,
            _destructor: None,
        }
    }

    /// Returns the OpenGL framebuffer ID.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns `true` for the default framebuffer.
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT
    }

    /// Returns the region rendered to while the framebuffer is bound.
    pub fn viewport(&self) -> Range2 {
        self.viewport
    }

    /// Returns the color attachments.
    pub fn color_attachments(&self) -> &[ColorAttachment] {
        &self.color_attachments
    }

    /// Returns the depth attachment.
    pub fn depth_attachment(&self) -> &DepthAttachment {
        &self.depth_attachment
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Framebuffer<'a> {
            id: Id,
            viewport: Range2,
            color_attachments: &'a [ColorAttachment],
            depth_attachment: &'a DepthAttachment,
        }

        Framebuffer {
            id: self.id,
            viewport: self.viewport,
            color_attachments: &self.color_attachments,
            depth_attachment: &self.depth_attachment,
        }.fmt(f)
    }
}

impl cmp::PartialEq<Self> for Framebuffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Framebuffer {}

impl hash::Hash for Framebuffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
