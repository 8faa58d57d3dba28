//! Cached binding state of a context.
//!
//! Driver calls that change bindings are comparatively expensive, so the
//! context remembers what it last bound and only calls the driver when the
//! binding actually changes. Every method here only updates the cache and
//! reports whether the driver must be called; it never calls the driver
//! itself.

use crate::framebuffer::{self, Target};
use crate::implementation::Bind;
use crate::math::{Range2, Vector2, ZeroInit};
use crate::texture;
use vec_map::VecMap;

/// Framebuffer and texture binding cache.
#[derive(Clone, Debug)]
pub struct State {
    /// Binding mode of the context.
    mode: Bind,

    /// Framebuffer bound for reading, `None` if unknown.
    read_binding: Option<framebuffer::Id>,

    /// Framebuffer bound for drawing, `None` if unknown.
    draw_binding: Option<framebuffer::Id>,

    /// Current viewport, `None` if unknown.
    viewport: Option<Range2>,

    /// Texture bound to each texture target, keyed by `texture::Kind::index`.
    textures: VecMap<texture::Id>,

    /// Cached `GL_MAX_VIEWPORT_DIMS`, zero until queried.
    pub max_viewport_size: Vector2,

    /// Cached `GL_MAX_DRAW_BUFFERS`, zero until queried.
    pub max_draw_buffers: i32,

    /// Cached `GL_MAX_DUAL_SOURCE_DRAW_BUFFERS`, zero until queried.
    pub max_dual_source_draw_buffers: i32,
}

impl State {
    /// Constructor.
    ///
    /// All bindings start out unknown.
    pub fn new(mode: Bind) -> Self {
        Self {
            mode,
            read_binding: None,
            draw_binding: None,
            viewport: None,
            textures: VecMap::new(),
            max_viewport_size: ZeroInit.into(),
            max_draw_buffers: 0,
            max_dual_source_draw_buffers: 0,
        }
    }

    /// Returns the framebuffer bound for reading, if known.
    pub fn read_binding(&self) -> Option<framebuffer::Id> {
        self.read_binding
    }

    /// Returns the framebuffer bound for drawing, if known.
    pub fn draw_binding(&self) -> Option<framebuffer::Id> {
        self.draw_binding
    }

    /// Returns the current viewport, if known.
    pub fn viewport(&self) -> Option<Range2> {
        self.viewport
    }

    /// Records `id` as bound to `target`.
    ///
    /// Returns `true` if the driver must be called. In single binding mode
    /// both targets always refer to the same framebuffer.
    pub fn bind(&mut self, target: Target, id: framebuffer::Id) -> bool {
        match self.mode {
            Bind::Single => {
                debug_assert_eq!(self.read_binding, self.draw_binding);
                if self.read_binding == Some(id) {
                    return false;
                }
                self.read_binding = Some(id);
                self.draw_binding = Some(id);
                true
            }
            Bind::Separate => {
                let binding = match target {
                    Target::Read => &mut self.read_binding,
                    Target::Draw => &mut self.draw_binding,
                };
                if *binding == Some(id) {
                    return false;
                }
                *binding = Some(id);
                true
            }
        }
    }

    /// Makes sure `id` is bound to some target without caring which.
    ///
    /// Returns the target `id` ends up bound to, preferring an existing
    /// read then draw binding, and whether the driver must be called to bind
    /// it for reading.
    pub fn bind_any(&mut self, id: framebuffer::Id) -> (Target, bool) {
        if self.read_binding == Some(id) {
            return (Target::Read, false);
        }
        if self.mode == Bind::Separate && self.draw_binding == Some(id) {
            return (Target::Draw, false);
        }
        (Target::Read, self.bind(Target::Read, id))
    }

    /// Records `viewport` as the current viewport.
    ///
    /// Returns `true` if the driver must be called.
    pub fn set_viewport(&mut self, viewport: Range2) -> bool {
        if self.viewport == Some(viewport) {
            return false;
        }
        self.viewport = Some(viewport);
        true
    }

    /// Records `id` as bound to the texture target of `kind`.
    ///
    /// Returns `true` if the driver must be called.
    pub fn bind_texture(&mut self, kind: texture::Kind, id: texture::Id) -> bool {
        let index = kind.index();
        if self.textures.get(index) == Some(&id) {
            return false;
        }
        self.textures.insert(index, id);
        true
    }

    /// Forgets a deleted framebuffer.
    ///
    /// The driver reverts bindings of a deleted framebuffer to the default
    /// framebuffer.
    pub fn framebuffer_deleted(&mut self, id: framebuffer::Id) {
        if self.read_binding == Some(id) {
            self.read_binding = Some(framebuffer::DEFAULT);
        }
        if self.draw_binding == Some(id) {
            self.draw_binding = Some(framebuffer::DEFAULT);
        }
    }

    /// Forgets a deleted texture.
    ///
    /// The driver reverts bindings of a deleted texture to zero.
    pub fn texture_deleted(&mut self, id: texture::Id) {
        for (_, bound) in self.textures.iter_mut() {
            if *bound == id {
                *bound = 0;
            }
        }
    }

    /// Forgets all bindings, for example after foreign code used the
    /// context. Cached limits are kept.
    pub fn reset(&mut self) {
        self.read_binding = None;
        self.draw_binding = None;
        self.viewport = None;
        self.textures.clear();
    }
}
