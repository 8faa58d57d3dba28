//! Context.

use anyhow::Result;
use arrayvec::ArrayVec;
use crate::capabilities::{extension, Capabilities, Config};
use crate::framebuffer::{
    self,
    BlitFilter,
    ColorAttachment,
    ColorBuffer,
    DepthAttachment,
    Framebuffer,
    Invalidation,
    Mask,
    Status,
    Target,
    MAX_COLOR_ATTACHMENTS,
};
use crate::gl;
use crate::image::{Image2, PixelStorage};
use crate::implementation::{Access, Bind, Blit, Implementation, Invalidate, Read};
use crate::math::{IdentityInit, Range2, Vector2, Vector3, ZeroInit};
use crate::queue::Queue;
use crate::renderbuffer::{self, Renderbuffer};
use crate::state::State;
use crate::texture::{self, CubeFace, Kind, Texture};
use std::{cell::RefCell, os, rc::Rc};

/// An OpenGL context together with the state cached for it.
///
/// All framebuffer operations go through the context so that redundant
/// binding and viewport changes are skipped. The context must be current on
/// the calling thread whenever one of its methods is called.
#[derive(Clone)]
pub struct Context {
    /// Function pointers to the OpenGL backend.
    backend: gl::Backend,

    /// What the driver supports.
    capabilities: Rc<Capabilities>,

    /// Driver entry points chosen for this context.
    implementation: Implementation,

    /// Bindings as last set through this context.
    state: Rc<RefCell<State>>,

    /// Dropped framebuffers arrive here to be deleted.
    framebuffer_queue: Queue<framebuffer::Id>,

    /// Dropped textures arrive here to be deleted.
    texture_queue: Queue<texture::Id>,

    /// Dropped renderbuffers arrive here to be deleted.
    renderbuffer_queue: Queue<renderbuffer::Id>,
}

impl Context {
    /// Loads the driver entry points and detects what the driver supports.
    pub fn new<F>(query_proc_address: F, config: &Config) -> Result<Self>
        where F: FnMut(&str) -> *const os::raw::c_void
    {
        let backend = gl::Backend::load(query_proc_address);
        let mut capabilities = Capabilities::detect(&backend);
        capabilities.configure(config);
        Self::from_backend(backend, capabilities)
    }

    /// Loads the driver entry points, trusting the given capabilities
    /// instead of querying the driver.
    pub fn with_capabilities<F>(
        query_proc_address: F,
        capabilities: Capabilities,
    ) -> Result<Self>
        where F: FnMut(&str) -> *const os::raw::c_void
    {
        Self::from_backend(gl::Backend::load(query_proc_address), capabilities)
    }

    fn from_backend(backend: gl::Backend, capabilities: Capabilities) -> Result<Self> {
        let implementation = Implementation::select(&capabilities)?;
        Ok(Self {
            backend,
            capabilities: Rc::new(capabilities),
            implementation,
            state: Rc::new(RefCell::new(State::new(implementation.bind))),
            framebuffer_queue: Queue::new(),
            texture_queue: Queue::new(),
            renderbuffer_queue: Queue::new(),
        })
    }

    /// Returns the default framebuffer, with the viewport currently set in
    /// the driver.
    pub fn default_framebuffer(&self) -> Framebuffer {
        let mut viewport = [0i32; 4];
        self.backend.get_integerv(gl::VIEWPORT, &mut viewport);
        let viewport = Range2::from_size(
            Vector2::new(viewport[0], viewport[1]),
            Vector2::new(viewport[2], viewport[3]),
        );
        self.state.borrow_mut().set_viewport(viewport);
        Framebuffer::implicit(viewport)
    }

    /// Returns what the driver supports.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the driver entry points in use.
    pub fn implementation(&self) -> Implementation {
        self.implementation
    }

    /// Returns the ID of the framebuffer bound to `target`, if known.
    pub fn bound_framebuffer(&self, target: Target) -> Option<u32> {
        let state = self.state.borrow();
        match target {
            Target::Read => state.read_binding(),
            Target::Draw => state.draw_binding(),
        }
    }

    /// Returns the viewport last set in the driver, if known.
    pub fn current_viewport(&self) -> Option<Range2> {
        self.state.borrow().viewport()
    }

    /// Forgets all cached bindings.
    ///
    /// Call after code outside this crate used the context.
    pub fn reset_state(&self) {
        debug!("Resetting cached state");
        self.state.borrow_mut().reset();
    }

    /// Deletes the driver objects of dropped framebuffers, textures and
    /// renderbuffers.
    pub fn collect_garbage(&self) {
        while let Some(id) = self.framebuffer_queue.next() {
            self.state.borrow_mut().framebuffer_deleted(id);
            self.backend.delete_framebuffer(id);
        }
        while let Some(id) = self.texture_queue.next() {
            self.state.borrow_mut().texture_deleted(id);
            self.backend.delete_texture(id);
        }
        while let Some(id) = self.renderbuffer_queue.next() {
            self.backend.delete_renderbuffer(id);
        }
    }

    // Limits

    /// Maximum supported viewport dimensions.
    ///
    /// Queried once, then cached.
    pub fn max_viewport_size(&self) -> Vector2 {
        let mut state = self.state.borrow_mut();
        if state.max_viewport_size == Vector2::from(ZeroInit) {
            let mut value = [0i32; 2];
            self.backend.get_integerv(gl::MAX_VIEWPORT_DIMS, &mut value);
            state.max_viewport_size = value.into();
        }
        state.max_viewport_size
    }

    /// Maximum number of simultaneously mapped draw buffers.
    ///
    /// Queried once, then cached.
    pub fn max_draw_buffers(&self) -> i32 {
        let mut state = self.state.borrow_mut();
        if state.max_draw_buffers == 0 {
            state.max_draw_buffers = self.backend.get_integer(gl::MAX_DRAW_BUFFERS);
        }
        state.max_draw_buffers
    }

    /// Maximum number of draw buffers usable with dual-source blending.
    ///
    /// Zero if dual-source blending is unsupported. Queried once, then
    /// cached.
    pub fn max_dual_source_draw_buffers(&self) -> i32 {
        if !self.capabilities.supports(extension::ARB_BLEND_FUNC_EXTENDED) {
            return 0;
        }
        let mut state = self.state.borrow_mut();
        if state.max_dual_source_draw_buffers == 0 {
            state.max_dual_source_draw_buffers =
                self.backend.get_integer(gl::MAX_DUAL_SOURCE_DRAW_BUFFERS);
        }
        state.max_dual_source_draw_buffers
    }

    // Binding

    fn target_gl_enum(&self, target: Target) -> u32 {
        match self.implementation.bind {
            Bind::Separate => target.as_gl_enum(),
            Bind::Single => gl::FRAMEBUFFER,
        }
    }

    fn bind_internal(&self, id: framebuffer::Id, target: Target) {
        let needed = self.state.borrow_mut().bind(target, id);
        if needed {
            self.backend.bind_framebuffer(self.target_gl_enum(target), id);
        } else {
            trace!("Framebuffer {} already bound to {:?}", id, target);
        }
    }

    /// Binds to whichever target is cheapest and returns its OpenGL enum.
    fn bind_any_internal(&self, id: framebuffer::Id) -> u32 {
        let (target, needed) = self.state.borrow_mut().bind_any(id);
        let target = self.target_gl_enum(target);
        if needed {
            self.backend.bind_framebuffer(target, id);
        }
        target
    }

    fn apply_viewport(&self, framebuffer: &Framebuffer) {
        let mut state = self.state.borrow_mut();
        debug_assert_eq!(state.draw_binding(), Some(framebuffer.id()));
        if state.set_viewport(framebuffer.viewport) {
            let viewport = framebuffer.viewport;
            self.backend.viewport(
                viewport.left(),
                viewport.bottom(),
                viewport.size_x(),
                viewport.size_y(),
            );
        }
    }

    fn bind_texture_internal(&self, texture: &Texture) {
        let needed = self.state.borrow_mut().bind_texture(texture.kind(), texture.id());
        if needed {
            self.backend.bind_texture(texture.kind().as_gl_enum(), texture.id());
        }
    }

    /// Binds the framebuffer for drawing and applies its viewport.
    pub fn bind(&self, framebuffer: &Framebuffer) {
        self.bind_internal(framebuffer.id(), Target::Draw);
        self.apply_viewport(framebuffer);
    }

    /// Sets the region of the framebuffer rendered to.
    ///
    /// Takes effect immediately if the framebuffer is bound for drawing,
    /// otherwise the next time it is bound.
    pub fn set_viewport(&self, framebuffer: &mut Framebuffer, viewport: Range2) {
        framebuffer.viewport = viewport;
        let bound = self.state.borrow().draw_binding() == Some(framebuffer.id());
        if bound {
            self.apply_viewport(framebuffer);
        }
    }

    // Framebuffer operations

    /// Clears the buffers selected by `mask` to their clear values.
    pub fn clear(&self, framebuffer: &Framebuffer, mask: Mask) {
        self.bind_internal(framebuffer.id(), Target::Draw);
        self.backend.clear(mask.bits());
    }

    fn apply_pack(&self, storage: PixelStorage) {
        self.backend.pixel_store(gl::PACK_ALIGNMENT, storage.alignment);
        self.backend.pixel_store(gl::PACK_ROW_LENGTH, storage.row_length);
        self.backend.pixel_store(gl::PACK_SKIP_PIXELS, storage.skip.x);
        self.backend.pixel_store(gl::PACK_SKIP_ROWS, storage.skip.y);
    }

    /// Reads a block of pixels from the framebuffer's read buffer into
    /// `image`.
    ///
    /// The image keeps its format, type and pixel storage; its size becomes
    /// the size of `rectangle`. Its memory is reused if large enough.
    pub fn read(&self, framebuffer: &Framebuffer, rectangle: Range2, image: &mut Image2) {
        self.bind_internal(framebuffer.id(), Target::Read);

        let size = rectangle.size();
        let data_size = image.data_size_for(size);
        let mut data = image.release();
        if data.len() < data_size {
            data = vec![0; data_size];
        }

        if self.implementation.pixel_pack_buffer {
            self.backend.bind_buffer(gl::PIXEL_PACK_BUFFER, 0);
        }
        self.apply_pack(image.storage());

        let format = image.format().as_gl_enum();
        let ty = image.ty().as_gl_enum();
        let (x, y) = (rectangle.left(), rectangle.bottom());
        match self.implementation.read {
            Read::Default => {
                self.backend.read_pixels(
                    x,
                    y,
                    size.x,
                    size.y,
                    format,
                    ty,
                    data.as_mut_ptr() as *mut _,
                );
            }
            Read::Robust => {
                self.backend.readn_pixels(
                    x,
                    y,
                    size.x,
                    size.y,
                    format,
                    ty,
                    data.len(),
                    data.as_mut_ptr() as *mut _,
                );
            }
        }
        image.set_data(size, data);
    }

    /// Reads a block of pixels, returning the filled image.
    pub fn read_into(
        &self,
        framebuffer: &Framebuffer,
        rectangle: Range2,
        mut image: Image2,
    ) -> Image2 {
        self.read(framebuffer, rectangle, &mut image);
        image
    }

    /// Copies a block of pixels between framebuffers.
    ///
    /// `mask` selects which buffers are copied. Linear filtering is only
    /// valid for color buffers.
    pub fn blit(
        &self,
        source: &Framebuffer,
        destination: &Framebuffer,
        source_rectangle: Range2,
        destination_rectangle: Range2,
        mask: Mask,
        filter: BlitFilter,
    ) -> Result<()> {
        ensure!(
            filter == BlitFilter::Nearest || !mask.intersects(Mask::DEPTH | Mask::STENCIL),
            "depth and stencil blits must use nearest filtering",
        );
        match self.implementation.blit {
            Blit::Unavailable => {
                bail!("framebuffer blits need separate read and draw bindings")
            }
            Blit::Named => {
                self.backend.blit_named_framebuffer(
                    source.id(),
                    destination.id(),
                    source_rectangle.corners(),
                    destination_rectangle.corners(),
                    mask.bits(),
                    filter.as_gl_enum(),
                );
            }
            Blit::Default => {
                self.bind_internal(source.id(), Target::Read);
                self.bind_internal(destination.id(), Target::Draw);
                self.backend.blit_framebuffer(
                    source_rectangle.corners(),
                    destination_rectangle.corners(),
                    mask.bits(),
                    filter.as_gl_enum(),
                );
            }
        }
        Ok(())
    }

    // Texture copies

    /// Replaces the storage of a texture image with a copy of framebuffer
    /// pixels.
    ///
    /// Valid for 1D textures (the rectangle must be one pixel high), 2D
    /// textures, 1D array textures and rectangle textures (level 0 only).
    /// Cube maps are copied one face at a time with [`copy_image_cube`].
    ///
    /// [`copy_image_cube`]: #method.copy_image_cube
    pub fn copy_image(
        &self,
        framebuffer: &Framebuffer,
        rectangle: Range2,
        texture: &mut Texture,
        level: i32,
        format: texture::Format,
    ) -> Result<()> {
        let target = texture.kind().as_gl_enum();
        let (x, y) = (rectangle.left(), rectangle.bottom());
        match texture.kind() {
            Kind::Texture1 => {
                ensure!(
                    rectangle.size_y() == 1,
                    "height must be 1 for 1D textures, got {}",
                    rectangle.size_y(),
                );
                self.bind_internal(framebuffer.id(), Target::Read);
                self.bind_texture_internal(texture);
                self.backend.copy_tex_image_1d(
                    target,
                    level,
                    format.as_gl_enum(),
                    x,
                    y,
                    rectangle.size_x(),
                );
            }
            Kind::Texture2 | Kind::Texture1Array | Kind::Rectangle => {
                ensure!(
                    texture.kind() != Kind::Rectangle || level == 0,
                    "rectangle textures have no level {}",
                    level,
                );
                self.bind_internal(framebuffer.id(), Target::Read);
                self.bind_texture_internal(texture);
                self.backend.copy_tex_image_2d(
                    target,
                    level,
                    format.as_gl_enum(),
                    x,
                    y,
                    rectangle.size_x(),
                    rectangle.size_y(),
                );
            }
            Kind::CubeMap => bail!("cube map textures are copied one face at a time"),
            kind => bail!("{:?} textures cannot be replaced by a framebuffer copy", kind),
        }
        if level == 0 {
            texture.set_storage(Vector3::new(rectangle.size_x(), rectangle.size_y(), 1), format);
        }
        Ok(())
    }

    /// Replaces the storage of one cube map face with a copy of framebuffer
    /// pixels.
    pub fn copy_image_cube(
        &self,
        framebuffer: &Framebuffer,
        rectangle: Range2,
        texture: &mut Texture,
        face: CubeFace,
        level: i32,
        format: texture::Format,
    ) -> Result<()> {
        ensure!(
            texture.kind() == Kind::CubeMap,
            "expected a cube map texture, got {:?}",
            texture.kind(),
        );
        self.bind_internal(framebuffer.id(), Target::Read);
        self.bind_texture_internal(texture);
        self.backend.copy_tex_image_2d(
            face.as_gl_enum(),
            level,
            format.as_gl_enum(),
            rectangle.left(),
            rectangle.bottom(),
            rectangle.size_x(),
            rectangle.size_y(),
        );
        if level == 0 {
            texture.set_storage(Vector3::new(rectangle.size_x(), rectangle.size_y(), 1), format);
        }
        Ok(())
    }

    /// Copies framebuffer pixels into part of an existing texture image.
    ///
    /// How `offset` is interpreted depends on the texture kind:
    ///
    /// * 1D: `x` only; the rectangle must be one pixel high.
    /// * 2D, 1D array and rectangle (level 0 only): `x` and `y`.
    /// * Cube map: `x` and `y`, with `z` selecting the face in
    ///   [`CubeFace::ALL`] order.
    /// * 3D, 2D array and cube map array: `x`, `y` and `z`.
    ///
    /// [`CubeFace::ALL`]: texture/enum.CubeFace.html#associatedconstant.ALL
    pub fn copy_sub_image(
        &self,
        framebuffer: &Framebuffer,
        rectangle: Range2,
        texture: &Texture,
        level: i32,
        offset: Vector3,
    ) -> Result<()> {
        match texture.kind() {
            Kind::Texture1 => {
                ensure!(
                    rectangle.size_y() == 1,
                    "height must be 1 for 1D textures, got {}",
                    rectangle.size_y(),
                );
                self.bind_internal(framebuffer.id(), Target::Read);
                self.copy_sub_1d(rectangle, texture, level, offset.x);
            }
            Kind::Texture2 | Kind::Texture1Array | Kind::Rectangle => {
                ensure!(
                    texture.kind() != Kind::Rectangle || level == 0,
                    "rectangle textures have no level {}",
                    level,
                );
                self.bind_internal(framebuffer.id(), Target::Read);
                self.copy_sub_2d(rectangle, texture, level, offset.xy());
            }
            Kind::CubeMap => {
                let face = CubeFace::from_index(offset.z).ok_or_else(|| {
                    anyhow!("cube map face index must be in 0..6, got {}", offset.z)
                })?;
                self.bind_internal(framebuffer.id(), Target::Read);
                self.copy_sub_cube(rectangle, texture, face, level, offset.xy());
            }
            Kind::Texture3 | Kind::Texture2Array | Kind::CubeMapArray => {
                self.bind_internal(framebuffer.id(), Target::Read);
                self.copy_sub_3d(rectangle, texture, level, offset);
            }
        }
        Ok(())
    }

    fn copy_sub_1d(&self, rectangle: Range2, texture: &Texture, level: i32, offset: i32) {
        let (x, y, w) = (rectangle.left(), rectangle.bottom(), rectangle.size_x());
        let target = texture.kind().as_gl_enum();
        match self.implementation.access {
            Access::Default => {
                self.bind_texture_internal(texture);
                self.backend.copy_tex_sub_image_1d(target, level, offset, x, y, w);
            }
            Access::Named => {
                self.backend.copy_texture_sub_image_1d(texture.id(), level, offset, x, y, w);
            }
            Access::NamedExt => {
                self.backend.copy_texture_sub_image_1d_ext(
                    texture.id(),
                    target,
                    level,
                    offset,
                    x,
                    y,
                    w,
                );
            }
        }
    }

    fn copy_sub_2d(&self, rectangle: Range2, texture: &Texture, level: i32, offset: Vector2) {
        let (x, y) = (rectangle.left(), rectangle.bottom());
        let (w, h) = (rectangle.size_x(), rectangle.size_y());
        let target = texture.kind().as_gl_enum();
        let offset = [offset.x, offset.y];
        match self.implementation.access {
            Access::Default => {
                self.bind_texture_internal(texture);
                self.backend.copy_tex_sub_image_2d(target, level, offset, x, y, w, h);
            }
            Access::Named => {
                self.backend.copy_texture_sub_image_2d(texture.id(), level, offset, x, y, w, h);
            }
            Access::NamedExt => {
                self.backend.copy_texture_sub_image_2d_ext(
                    texture.id(),
                    target,
                    level,
                    offset,
                    x,
                    y,
                    w,
                    h,
                );
            }
        }
    }

    fn copy_sub_cube(
        &self,
        rectangle: Range2,
        texture: &Texture,
        face: CubeFace,
        level: i32,
        offset: Vector2,
    ) {
        let (x, y) = (rectangle.left(), rectangle.bottom());
        let (w, h) = (rectangle.size_x(), rectangle.size_y());
        match self.implementation.access {
            Access::Default => {
                self.bind_texture_internal(texture);
                self.backend.copy_tex_sub_image_2d(
                    face.as_gl_enum(),
                    level,
                    [offset.x, offset.y],
                    x,
                    y,
                    w,
                    h,
                );
            }
            Access::Named => {
                // Named access addresses cube map faces as layers.
                self.backend.copy_texture_sub_image_3d(
                    texture.id(),
                    level,
                    [offset.x, offset.y, face.index()],
                    x,
                    y,
                    w,
                    h,
                );
            }
            Access::NamedExt => {
                self.backend.copy_texture_sub_image_2d_ext(
                    texture.id(),
                    face.as_gl_enum(),
                    level,
                    [offset.x, offset.y],
                    x,
                    y,
                    w,
                    h,
                );
            }
        }
    }

    fn copy_sub_3d(&self, rectangle: Range2, texture: &Texture, level: i32, offset: Vector3) {
        let (x, y) = (rectangle.left(), rectangle.bottom());
        let (w, h) = (rectangle.size_x(), rectangle.size_y());
        let target = texture.kind().as_gl_enum();
        let offset = [offset.x, offset.y, offset.z];
        match self.implementation.access {
            Access::Default => {
                self.bind_texture_internal(texture);
                self.backend.copy_tex_sub_image_3d(target, level, offset, x, y, w, h);
            }
            Access::Named => {
                self.backend.copy_texture_sub_image_3d(texture.id(), level, offset, x, y, w, h);
            }
            Access::NamedExt => {
                self.backend.copy_texture_sub_image_3d_ext(
                    texture.id(),
                    target,
                    level,
                    offset,
                    x,
                    y,
                    w,
                    h,
                );
            }
        }
    }

    // Invalidation

    fn invalidation_enums(
        &self,
        framebuffer: &Framebuffer,
        attachments: &[Invalidation],
    ) -> Vec<u32> {
        let mut enums = Vec::with_capacity(attachments.len());
        for attachment in attachments {
            attachment.push_gl_enums(framebuffer.is_default(), &mut enums);
        }
        enums
    }

    /// Hints that the contents of `attachments` are no longer needed.
    ///
    /// Does nothing if the driver cannot invalidate framebuffers.
    pub fn invalidate(&self, framebuffer: &Framebuffer, attachments: &[Invalidation]) {
        match self.implementation.invalidate {
            Invalidate::NoOp => {
                trace!("Framebuffer invalidation unsupported, ignoring");
            }
            Invalidate::Default => {
                let enums = self.invalidation_enums(framebuffer, attachments);
                let target = self.bind_any_internal(framebuffer.id());
                self.backend.invalidate_framebuffer(target, &enums);
            }
            Invalidate::Named => {
                let enums = self.invalidation_enums(framebuffer, attachments);
                self.backend.invalidate_named_framebuffer_data(framebuffer.id(), &enums);
            }
        }
    }

    /// Hints that the contents of `attachments` within `rectangle` are no
    /// longer needed.
    ///
    /// Does nothing if the driver cannot invalidate framebuffers.
    pub fn invalidate_sub(
        &self,
        framebuffer: &Framebuffer,
        attachments: &[Invalidation],
        rectangle: Range2,
    ) {
        let (x, y) = (rectangle.left(), rectangle.bottom());
        let (w, h) = (rectangle.size_x(), rectangle.size_y());
        match self.implementation.invalidate {
            Invalidate::NoOp => {
                trace!("Framebuffer invalidation unsupported, ignoring");
            }
            Invalidate::Default => {
                let enums = self.invalidation_enums(framebuffer, attachments);
                let target = self.bind_any_internal(framebuffer.id());
                self.backend.invalidate_sub_framebuffer(target, &enums, x, y, w, h);
            }
            Invalidate::Named => {
                let enums = self.invalidation_enums(framebuffer, attachments);
                self.backend.invalidate_named_framebuffer_sub_data(
                    framebuffer.id(),
                    &enums,
                    x,
                    y,
                    w,
                    h,
                );
            }
        }
    }

    // Status and buffer mapping

    /// Checks whether the framebuffer is complete for `target`.
    pub fn check_status(&self, framebuffer: &Framebuffer, target: Target) -> Status {
        let status = match self.implementation.access {
            Access::Default => {
                self.bind_internal(framebuffer.id(), target);
                self.backend.check_framebuffer_status(self.target_gl_enum(target))
            }
            Access::Named => {
                self.backend.check_named_framebuffer_status(
                    framebuffer.id(),
                    target.as_gl_enum(),
                )
            }
            Access::NamedExt => {
                self.backend.check_named_framebuffer_status_ext(
                    framebuffer.id(),
                    target.as_gl_enum(),
                )
            }
        };
        Status::from_gl_enum(status)
    }

    /// Maps fragment shader outputs to color buffers.
    ///
    /// Output `i` is written to `buffers[i]`.
    pub fn map_draw_buffers(
        &self,
        framebuffer: &Framebuffer,
        buffers: &[ColorBuffer],
    ) -> Result<()> {
        ensure!(
            buffers.len() <= MAX_COLOR_ATTACHMENTS,
            "at most {} draw buffers can be mapped, got {}",
            MAX_COLOR_ATTACHMENTS,
            buffers.len(),
        );
        let enums: ArrayVec<u32, MAX_COLOR_ATTACHMENTS> =
            buffers.iter().map(|buffer| buffer.as_gl_enum()).collect();
        match self.implementation.access {
            Access::Default => {
                self.bind_internal(framebuffer.id(), Target::Draw);
                self.backend.draw_buffers(&enums);
            }
            Access::Named => {
                self.backend.named_framebuffer_draw_buffers(framebuffer.id(), &enums);
            }
            Access::NamedExt => {
                self.backend.framebuffer_draw_buffers_ext(framebuffer.id(), &enums);
            }
        }
        Ok(())
    }

    /// Maps the first fragment shader output to `buffer`.
    pub fn map_draw_buffer(&self, framebuffer: &Framebuffer, buffer: ColorBuffer) {
        match self.implementation.access {
            Access::Default => {
                self.bind_internal(framebuffer.id(), Target::Draw);
                self.backend.draw_buffer(buffer.as_gl_enum());
            }
            Access::Named => {
                self.backend.named_framebuffer_draw_buffer(
                    framebuffer.id(),
                    buffer.as_gl_enum(),
                );
            }
            Access::NamedExt => {
                self.backend.framebuffer_draw_buffer_ext(
                    framebuffer.id(),
                    buffer.as_gl_enum(),
                );
            }
        }
    }

    /// Selects the color buffer pixels are read from.
    pub fn map_read_buffer(&self, framebuffer: &Framebuffer, buffer: ColorBuffer) {
        match self.implementation.access {
            Access::Default => {
                self.bind_internal(framebuffer.id(), Target::Read);
                self.backend.read_buffer(buffer.as_gl_enum());
            }
            Access::Named => {
                self.backend.named_framebuffer_read_buffer(
                    framebuffer.id(),
                    buffer.as_gl_enum(),
                );
            }
            Access::NamedExt => {
                self.backend.framebuffer_read_buffer_ext(
                    framebuffer.id(),
                    buffer.as_gl_enum(),
                );
            }
        }
    }

    // Object creation

    /// Create a texture backed by uninitialized GPU memory.
    ///
    /// Components of `size` beyond the dimensionality of `kind` are
    /// ignored. Cube map faces must be square and cube map array depths a
    /// multiple of six.
    pub fn texture<F>(&self, kind: Kind, size: Vector3, format: F) -> Result<Texture>
        where F: Into<texture::Format>
    {
        let format = format.into();
        let unit = Vector3::from(IdentityInit);
        let size = match kind {
            Kind::Texture1 => Vector3 { x: size.x, ..unit },
            Kind::Texture2 | Kind::Texture1Array | Kind::Rectangle | Kind::CubeMap => {
                Vector3 { x: size.x, y: size.y, ..unit }
            }
            Kind::Texture3 | Kind::Texture2Array | Kind::CubeMapArray => size,
        };
        ensure!(
            size.x > 0 && size.y > 0 && size.z > 0,
            "texture dimensions must be positive, got {:?}",
            size,
        );
        ensure!(
            !(kind == Kind::CubeMap || kind == Kind::CubeMapArray) || size.x == size.y,
            "cube map faces must be square, got {}x{}",
            size.x,
            size.y,
        );
        ensure!(
            kind != Kind::CubeMapArray || size.z % 6 == 0,
            "cube map array depth must be a multiple of 6, got {}",
            size.z,
        );

        let id = self.backend.gen_texture();
        let texture = Texture::new(id, kind, size, format, self.texture_queue.tx());
        self.bind_texture_internal(&texture);

        let target = kind.as_gl_enum();
        let internal_format = format.as_gl_enum();
        let (transfer_format, ty) = format.transfer_gl_enums();
        match kind {
            Kind::Texture1 => {
                self.backend.tex_image_1d(target, internal_format, size.x, transfer_format, ty);
            }
            Kind::Texture2 | Kind::Texture1Array | Kind::Rectangle => {
                self.backend.tex_image_2d(
                    target,
                    internal_format,
                    size.x,
                    size.y,
                    transfer_format,
                    ty,
                );
            }
            Kind::CubeMap => {
                for face in CubeFace::ALL.iter() {
                    self.backend.tex_image_2d(
                        face.as_gl_enum(),
                        internal_format,
                        size.x,
                        size.y,
                        transfer_format,
                        ty,
                    );
                }
            }
            Kind::Texture3 | Kind::Texture2Array | Kind::CubeMapArray => {
                self.backend.tex_image_3d(
                    target,
                    internal_format,
                    size.x,
                    size.y,
                    size.z,
                    transfer_format,
                    ty,
                );
            }
        }
        Ok(texture)
    }

    /// Create a renderbuffer.
    ///
    /// Storage is multisampled when `samples` is greater than one.
    pub fn renderbuffer<F>(&self, size: Vector2, samples: u32, format: F) -> Renderbuffer
        where F: Into<texture::Format>
    {
        let format = format.into();
        let id = self.backend.gen_renderbuffer();
        self.backend.bind_renderbuffer(id);
        if samples > 1 {
            self.backend.renderbuffer_storage_multisample(
                samples as _,
                format.as_gl_enum(),
                size.x,
                size.y,
            );
        } else {
            self.backend.renderbuffer_storage(format.as_gl_enum(), size.x, size.y);
        }
        Renderbuffer::new(id, size, samples, format, self.renderbuffer_queue.tx())
    }

    /// Create a framebuffer object.
    ///
    /// Fragment output `i` is mapped to color attachment `i`. The viewport
    /// covers `size`. The framebuffer is left bound for drawing.
    pub fn framebuffer(
        &self,
        size: Vector2,
        color_attachments: [ColorAttachment; MAX_COLOR_ATTACHMENTS],
        depth_attachment: DepthAttachment,
    ) -> Result<Framebuffer> {
        for attachment in color_attachments.iter() {
            if let ColorAttachment::Texture2(ref texture) = *attachment {
                ensure!(
                    texture.kind() == Kind::Texture2,
                    "color attachment must be a 2D texture, got {:?}",
                    texture.kind(),
                );
            }
        }
        if let DepthAttachment::Texture2(ref texture) = depth_attachment {
            ensure!(
                texture.kind() == Kind::Texture2,
                "depth attachment must be a 2D texture, got {:?}",
                texture.kind(),
            );
        }

        let id = self.backend.gen_framebuffer();
        self.bind_internal(id, Target::Draw);
        let target = self.target_gl_enum(Target::Draw);

        let mut draw_buffers = ArrayVec::<u32, MAX_COLOR_ATTACHMENTS>::new();
        for (index, attachment) in color_attachments.iter().enumerate() {
            let point = gl::COLOR_ATTACHMENT0 + index as u32;
            match *attachment {
                ColorAttachment::Renderbuffer(ref renderbuffer) => {
                    self.backend.framebuffer_renderbuffer(target, point, renderbuffer.id());
                    draw_buffers.push(point);
                }
                ColorAttachment::Texture2(ref texture) => {
                    self.backend.framebuffer_texture2d(target, point, texture.id());
                    draw_buffers.push(point);
                }
                ColorAttachment::None => draw_buffers.push(gl::NONE),
            }
        }
        while draw_buffers.last() == Some(&gl::NONE) {
            draw_buffers.pop();
        }

        match depth_attachment {
            DepthAttachment::Renderbuffer(ref renderbuffer) => {
                self.backend.framebuffer_renderbuffer(
                    target,
                    gl::DEPTH_ATTACHMENT,
                    renderbuffer.id(),
                );
            }
            DepthAttachment::Texture2(ref texture) => {
                self.backend.framebuffer_texture2d(target, gl::DEPTH_ATTACHMENT, texture.id());
            }
            DepthAttachment::DepthStencil(ref renderbuffer) => {
                self.backend.framebuffer_renderbuffer(
                    target,
                    gl::DEPTH_STENCIL_ATTACHMENT,
                    renderbuffer.id(),
                );
            }
            DepthAttachment::None => {}
        }
        self.backend.draw_buffers(&draw_buffers);

        debug!("Created framebuffer {} of size {:?}", id, size);
        Ok(Framebuffer::new(
            id,
            size,
            color_attachments,
            depth_attachment,
            self.framebuffer_queue.tx(),
        ))
    }
}
