use std::{ffi, os, ptr, rc};

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl.rs"));

/// Function pointers to the OpenGL driver.
///
/// Every method corresponds to exactly one driver entry point. Calls are
/// traced under the `gl` log target and followed by an error check.
#[derive(Clone)]
pub struct Backend {
    gl: rc::Rc<Gl>,
}

impl Backend {
    /// Constructor.
    pub fn load<F>(mut func: F) -> Self
        where F: FnMut(&str) -> *const os::raw::c_void
    {
        let gl = rc::Rc::new(Gl::load_with(|sym| func(sym) as *const _));
        Backend { gl }
    }

    // Error checking

    /// Corresponds to `glGetError` plus an error check.
    pub fn check_error(&self) {
        let error = unsafe { self.gl.GetError() };
        if error != 0 {
            error!(target: "gl", "0x{:x}", error);
        }
    }

    // Queries

    /// Corresponds to `glGetIntegerv` for a single value.
    pub(crate) fn get_integer(&self, pname: u32) -> i32 {
        let mut value = [0i32; 1];
        self.get_integerv(pname, &mut value);
        value[0]
    }

    /// Corresponds to `glGetIntegerv`.
    ///
    /// The driver writes as many values as `pname` has; `values` must be
    /// large enough to hold them.
    pub(crate) fn get_integerv(&self, pname: u32, values: &mut [i32]) {
        trace!(target: "gl", "glGetIntegerv{:?} ", (pname,));
        unsafe {
            self.gl.GetIntegerv(pname, values.as_mut_ptr());
        }
        trace!(target: "gl", "=> {:?}", values);
        self.check_error();
    }

    /// Corresponds to `glGetString`.
    pub fn get_string(&self, name: u32) -> Option<String> {
        trace!(target: "gl", "glGetString{:?} ", (name,));
        let string = unsafe {
            let ptr = self.gl.GetString(name);
            if ptr.is_null() {
                None
            } else {
                let cstr = ffi::CStr::from_ptr(ptr as *const os::raw::c_char);
                Some(cstr.to_string_lossy().into_owned())
            }
        };
        trace!(target: "gl", "=> {:?}", string);
        self.check_error();
        string
    }

    /// Corresponds to `glGetStringi`.
    pub fn get_stringi(&self, name: u32, index: u32) -> Option<String> {
        let string = unsafe {
            let ptr = self.gl.GetStringi(name, index);
            if ptr.is_null() {
                None
            } else {
                let cstr = ffi::CStr::from_ptr(ptr as *const os::raw::c_char);
                Some(cstr.to_string_lossy().into_owned())
            }
        };
        trace!(target: "gl", "glGetStringi{:?} => {:?}", (name, index), string);
        self.check_error();
        string
    }

    // Pipeline state operations

    /// Corresponds to `glClear`.
    pub fn clear(&self, mask: u32) {
        trace!(target: "gl", "glClear{:?}", (mask,));
        unsafe {
            self.gl.Clear(mask);
        }
        self.check_error();
    }

    /// Corresponds to `glViewport`.
    pub fn viewport(&self, x: i32, y: i32, w: i32, h: i32) {
        trace!(target: "gl", "glViewport{:?}", (x, y, w, h));
        unsafe {
            self.gl.Viewport(x, y, w, h);
        }
        self.check_error();
    }

    /// Corresponds to `glPixelStorei`.
    pub fn pixel_store(&self, pname: u32, value: i32) {
        trace!(target: "gl", "glPixelStorei{:?}", (pname, value));
        unsafe {
            self.gl.PixelStorei(pname, value);
        }
        self.check_error();
    }

    // Buffer operations

    /// Corresponds to `glBindBuffer`.
    pub fn bind_buffer(&self, ty: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindBuffer{:?}", (ty, id));
            self.gl.BindBuffer(ty, id);
        }
        self.check_error();
    }

    // Framebuffer operations

    /// Corresponds to `glGenFramebuffers(1)`.
    pub fn gen_framebuffer(&self) -> u32 {
        trace!(target: "gl", "glGenFramebuffers(1) ");
        let mut id = 0;
        unsafe {
            self.gl.GenFramebuffers(1, &mut id as *mut _);
        }
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteFramebuffers(1)`.
    pub fn delete_framebuffer(&self, id: u32) {
        trace!(target: "gl", "glDeleteFramebuffers{:?}", (1, id));
        unsafe {
            self.gl.DeleteFramebuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindFramebuffer`, or `glBindFramebufferEXT` on
    /// drivers that only export the extension entry point.
    pub fn bind_framebuffer(&self, target: u32, id: u32) {
        if self.gl.BindFramebuffer.is_loaded() {
            trace!(target: "gl", "glBindFramebuffer{:?}", (target, id));
            unsafe {
                self.gl.BindFramebuffer(target, id);
            }
        } else {
            trace!(target: "gl", "glBindFramebufferEXT{:?}", (target, id));
            unsafe {
                self.gl.BindFramebufferEXT(target, id);
            }
        }
        self.check_error();
    }

    /// Corresponds to `glFramebufferTexture2D`.
    pub fn framebuffer_texture2d(
        &self,
        target: u32,
        attachment: u32,
        texture: u32,
    ) {
        trace!(
            target: "gl",
            "glFramebufferTexture2D{:?}",
            (target, attachment, TEXTURE_2D, texture, 0),
        );
        unsafe {
            self.gl.FramebufferTexture2D(
                target,
                attachment,
                TEXTURE_2D,
                texture,
                0,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glFramebufferRenderbuffer`.
    pub fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer: u32,
    ) {
        trace!(
            target: "gl",
            "glFramebufferRenderbuffer{:?}",
            (target, attachment, RENDERBUFFER, renderbuffer),
        );
        unsafe {
            self.gl.FramebufferRenderbuffer(
                target,
                attachment,
                RENDERBUFFER,
                renderbuffer,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCheckFramebufferStatus`.
    pub fn check_framebuffer_status(&self, target: u32) -> u32 {
        trace!(target: "gl", "glCheckFramebufferStatus{:?} ", (target,));
        let status = unsafe { self.gl.CheckFramebufferStatus(target) };
        trace!(target: "gl", "=> 0x{:x}", status);
        self.check_error();
        status
    }

    /// Corresponds to `glCheckNamedFramebufferStatus`.
    pub fn check_named_framebuffer_status(&self, id: u32, target: u32) -> u32 {
        trace!(target: "gl", "glCheckNamedFramebufferStatus{:?} ", (id, target));
        let status = unsafe { self.gl.CheckNamedFramebufferStatus(id, target) };
        trace!(target: "gl", "=> 0x{:x}", status);
        self.check_error();
        status
    }

    /// Corresponds to `glCheckNamedFramebufferStatusEXT`.
    pub fn check_named_framebuffer_status_ext(&self, id: u32, target: u32) -> u32 {
        trace!(target: "gl", "glCheckNamedFramebufferStatusEXT{:?} ", (id, target));
        let status = unsafe { self.gl.CheckNamedFramebufferStatusEXT(id, target) };
        trace!(target: "gl", "=> 0x{:x}", status);
        self.check_error();
        status
    }

    /// Corresponds to `glDrawBuffers`.
    pub fn draw_buffers(&self, buffers: &[u32]) {
        trace!(target: "gl", "glDrawBuffers{:?}", (buffers.len(), buffers));
        unsafe {
            self.gl.DrawBuffers(buffers.len() as _, buffers.as_ptr());
        }
        self.check_error();
    }

    /// Corresponds to `glNamedFramebufferDrawBuffers`.
    pub fn named_framebuffer_draw_buffers(&self, id: u32, buffers: &[u32]) {
        trace!(
            target: "gl",
            "glNamedFramebufferDrawBuffers{:?}",
            (id, buffers.len(), buffers),
        );
        unsafe {
            self.gl.NamedFramebufferDrawBuffers(
                id,
                buffers.len() as _,
                buffers.as_ptr(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glFramebufferDrawBuffersEXT`.
    pub fn framebuffer_draw_buffers_ext(&self, id: u32, buffers: &[u32]) {
        trace!(
            target: "gl",
            "glFramebufferDrawBuffersEXT{:?}",
            (id, buffers.len(), buffers),
        );
        unsafe {
            self.gl.FramebufferDrawBuffersEXT(
                id,
                buffers.len() as _,
                buffers.as_ptr(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glDrawBuffer`.
    pub fn draw_buffer(&self, buffer: u32) {
        trace!(target: "gl", "glDrawBuffer{:?}", (buffer,));
        unsafe {
            self.gl.DrawBuffer(buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedFramebufferDrawBuffer`.
    pub fn named_framebuffer_draw_buffer(&self, id: u32, buffer: u32) {
        trace!(target: "gl", "glNamedFramebufferDrawBuffer{:?}", (id, buffer));
        unsafe {
            self.gl.NamedFramebufferDrawBuffer(id, buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glFramebufferDrawBufferEXT`.
    pub fn framebuffer_draw_buffer_ext(&self, id: u32, buffer: u32) {
        trace!(target: "gl", "glFramebufferDrawBufferEXT{:?}", (id, buffer));
        unsafe {
            self.gl.FramebufferDrawBufferEXT(id, buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glReadBuffer`.
    pub fn read_buffer(&self, buffer: u32) {
        trace!(target: "gl", "glReadBuffer{:?}", (buffer,));
        unsafe {
            self.gl.ReadBuffer(buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedFramebufferReadBuffer`.
    pub fn named_framebuffer_read_buffer(&self, id: u32, buffer: u32) {
        trace!(target: "gl", "glNamedFramebufferReadBuffer{:?}", (id, buffer));
        unsafe {
            self.gl.NamedFramebufferReadBuffer(id, buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glFramebufferReadBufferEXT`.
    pub fn framebuffer_read_buffer_ext(&self, id: u32, buffer: u32) {
        trace!(target: "gl", "glFramebufferReadBufferEXT{:?}", (id, buffer));
        unsafe {
            self.gl.FramebufferReadBufferEXT(id, buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glBlitFramebuffer`.
    ///
    /// Rectangles are `[x0, y0, x1, y1]`.
    pub fn blit_framebuffer(
        &self,
        src: [i32; 4],
        dst: [i32; 4],
        mask: u32,
        filter: u32,
    ) {
        trace!(target: "gl", "glBlitFramebuffer{:?}", (src, dst, mask, filter));
        unsafe {
            self.gl.BlitFramebuffer(
                src[0], src[1], src[2], src[3],
                dst[0], dst[1], dst[2], dst[3],
                mask,
                filter,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glBlitNamedFramebuffer`.
    ///
    /// Rectangles are `[x0, y0, x1, y1]`.
    pub fn blit_named_framebuffer(
        &self,
        read: u32,
        draw: u32,
        src: [i32; 4],
        dst: [i32; 4],
        mask: u32,
        filter: u32,
    ) {
        trace!(
            target: "gl",
            "glBlitNamedFramebuffer{:?}",
            (read, draw, src, dst, mask, filter),
        );
        unsafe {
            self.gl.BlitNamedFramebuffer(
                read,
                draw,
                src[0], src[1], src[2], src[3],
                dst[0], dst[1], dst[2], dst[3],
                mask,
                filter,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glInvalidateFramebuffer`.
    pub fn invalidate_framebuffer(&self, target: u32, attachments: &[u32]) {
        trace!(target: "gl", "glInvalidateFramebuffer{:?}", (target, attachments));
        unsafe {
            self.gl.InvalidateFramebuffer(
                target,
                attachments.len() as _,
                attachments.as_ptr(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glInvalidateSubFramebuffer`.
    pub fn invalidate_sub_framebuffer(
        &self,
        target: u32,
        attachments: &[u32],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glInvalidateSubFramebuffer{:?}",
            (target, attachments, x, y, w, h),
        );
        unsafe {
            self.gl.InvalidateSubFramebuffer(
                target,
                attachments.len() as _,
                attachments.as_ptr(),
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glInvalidateNamedFramebufferData`.
    pub fn invalidate_named_framebuffer_data(&self, id: u32, attachments: &[u32]) {
        trace!(
            target: "gl",
            "glInvalidateNamedFramebufferData{:?}",
            (id, attachments),
        );
        unsafe {
            self.gl.InvalidateNamedFramebufferData(
                id,
                attachments.len() as _,
                attachments.as_ptr(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glInvalidateNamedFramebufferSubData`.
    pub fn invalidate_named_framebuffer_sub_data(
        &self,
        id: u32,
        attachments: &[u32],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glInvalidateNamedFramebufferSubData{:?}",
            (id, attachments, x, y, w, h),
        );
        unsafe {
            self.gl.InvalidateNamedFramebufferSubData(
                id,
                attachments.len() as _,
                attachments.as_ptr(),
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    // Pixel transfer operations

    /// Corresponds to `glReadPixels`.
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        format: u32,
        ty: u32,
        data: *mut os::raw::c_void,
    ) {
        trace!(target: "gl", "glReadPixels{:?}", (x, y, w, h, format, ty, data));
        unsafe {
            self.gl.ReadPixels(x, y, w, h, format, ty, data);
        }
        self.check_error();
    }

    /// Corresponds to `glReadnPixelsARB`.
    pub fn readn_pixels(
        &self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        format: u32,
        ty: u32,
        size: usize,
        data: *mut os::raw::c_void,
    ) {
        trace!(
            target: "gl",
            "glReadnPixelsARB{:?}",
            (x, y, w, h, format, ty, size, data),
        );
        unsafe {
            self.gl.ReadnPixelsARB(x, y, w, h, format, ty, buffer_size(size), data);
        }
        self.check_error();
    }

    // Texture operations

    /// Corresponds to `glGenTextures(1)`.
    pub fn gen_texture(&self) -> u32 {
        let mut id = 0;
        unsafe {
            trace!(target: "gl", "glGenTextures(1) ");
            self.gl.GenTextures(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteTextures(1)`.
    pub fn delete_texture(&self, id: u32) {
        trace!(target: "gl", "glDeleteTextures{:?}", (1, id));
        unsafe {
            self.gl.DeleteTextures(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindTexture`.
    pub fn bind_texture(&self, ty: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindTexture{:?}", (ty, id));
            self.gl.BindTexture(ty, id);
        }
        self.check_error();
    }

    /// Corresponds to `glTexImage1D` with no initial data.
    pub fn tex_image_1d(
        &self,
        target: u32,
        internal_format: u32,
        width: i32,
        format: u32,
        ty: u32,
    ) {
        trace!(
            target: "gl",
            "glTexImage1D{:?}",
            (target, 0, internal_format, width, 0, format, ty),
        );
        unsafe {
            self.gl.TexImage1D(
                target,
                0,
                internal_format as _,
                width,
                0,
                format,
                ty,
                ptr::null(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glTexImage2D` with no initial data.
    pub fn tex_image_2d(
        &self,
        target: u32,
        internal_format: u32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
    ) {
        trace!(
            target: "gl",
            "glTexImage2D{:?}",
            (target, 0, internal_format, width, height, 0, format, ty),
        );
        unsafe {
            self.gl.TexImage2D(
                target,
                0,
                internal_format as _,
                width,
                height,
                0,
                format,
                ty,
                ptr::null(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glTexImage3D` with no initial data.
    pub fn tex_image_3d(
        &self,
        target: u32,
        internal_format: u32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        ty: u32,
    ) {
        trace!(
            target: "gl",
            "glTexImage3D{:?}",
            (target, 0, internal_format, width, height, depth, 0, format, ty),
        );
        unsafe {
            self.gl.TexImage3D(
                target,
                0,
                internal_format as _,
                width,
                height,
                depth,
                0,
                format,
                ty,
                ptr::null(),
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTexImage1D`.
    pub fn copy_tex_image_1d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        x: i32,
        y: i32,
        w: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTexImage1D{:?}",
            (target, level, internal_format, x, y, w, 0),
        );
        unsafe {
            self.gl.CopyTexImage1D(target, level, internal_format, x, y, w, 0);
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTexImage2D`.
    pub fn copy_tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTexImage2D{:?}",
            (target, level, internal_format, x, y, w, h, 0),
        );
        unsafe {
            self.gl.CopyTexImage2D(target, level, internal_format, x, y, w, h, 0);
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTexSubImage1D`.
    pub fn copy_tex_sub_image_1d(
        &self,
        target: u32,
        level: i32,
        offset: i32,
        x: i32,
        y: i32,
        w: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTexSubImage1D{:?}",
            (target, level, offset, x, y, w),
        );
        unsafe {
            self.gl.CopyTexSubImage1D(target, level, offset, x, y, w);
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTexSubImage2D`.
    pub fn copy_tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        offset: [i32; 2],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTexSubImage2D{:?}",
            (target, level, offset, x, y, w, h),
        );
        unsafe {
            self.gl.CopyTexSubImage2D(
                target,
                level,
                offset[0],
                offset[1],
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTexSubImage3D`.
    pub fn copy_tex_sub_image_3d(
        &self,
        target: u32,
        level: i32,
        offset: [i32; 3],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTexSubImage3D{:?}",
            (target, level, offset, x, y, w, h),
        );
        unsafe {
            self.gl.CopyTexSubImage3D(
                target,
                level,
                offset[0],
                offset[1],
                offset[2],
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTextureSubImage1D`.
    pub fn copy_texture_sub_image_1d(
        &self,
        texture: u32,
        level: i32,
        offset: i32,
        x: i32,
        y: i32,
        w: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTextureSubImage1D{:?}",
            (texture, level, offset, x, y, w),
        );
        unsafe {
            self.gl.CopyTextureSubImage1D(texture, level, offset, x, y, w);
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTextureSubImage2D`.
    pub fn copy_texture_sub_image_2d(
        &self,
        texture: u32,
        level: i32,
        offset: [i32; 2],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTextureSubImage2D{:?}",
            (texture, level, offset, x, y, w, h),
        );
        unsafe {
            self.gl.CopyTextureSubImage2D(
                texture,
                level,
                offset[0],
                offset[1],
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTextureSubImage3D`.
    pub fn copy_texture_sub_image_3d(
        &self,
        texture: u32,
        level: i32,
        offset: [i32; 3],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTextureSubImage3D{:?}",
            (texture, level, offset, x, y, w, h),
        );
        unsafe {
            self.gl.CopyTextureSubImage3D(
                texture,
                level,
                offset[0],
                offset[1],
                offset[2],
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTextureSubImage1DEXT`.
    pub fn copy_texture_sub_image_1d_ext(
        &self,
        texture: u32,
        target: u32,
        level: i32,
        offset: i32,
        x: i32,
        y: i32,
        w: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTextureSubImage1DEXT{:?}",
            (texture, target, level, offset, x, y, w),
        );
        unsafe {
            self.gl.CopyTextureSubImage1DEXT(texture, target, level, offset, x, y, w);
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTextureSubImage2DEXT`.
    pub fn copy_texture_sub_image_2d_ext(
        &self,
        texture: u32,
        target: u32,
        level: i32,
        offset: [i32; 2],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTextureSubImage2DEXT{:?}",
            (texture, target, level, offset, x, y, w, h),
        );
        unsafe {
            self.gl.CopyTextureSubImage2DEXT(
                texture,
                target,
                level,
                offset[0],
                offset[1],
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyTextureSubImage3DEXT`.
    pub fn copy_texture_sub_image_3d_ext(
        &self,
        texture: u32,
        target: u32,
        level: i32,
        offset: [i32; 3],
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) {
        trace!(
            target: "gl",
            "glCopyTextureSubImage3DEXT{:?}",
            (texture, target, level, offset, x, y, w, h),
        );
        unsafe {
            self.gl.CopyTextureSubImage3DEXT(
                texture,
                target,
                level,
                offset[0],
                offset[1],
                offset[2],
                x,
                y,
                w,
                h,
            );
        }
        self.check_error();
    }

    // Renderbuffer operations

    /// Corresponds to `glGenRenderbuffers(1)`.
    pub fn gen_renderbuffer(&self) -> u32 {
        trace!(target: "gl", "glGenRenderbuffers(1) ");
        let mut id = 0;
        unsafe {
            self.gl.GenRenderbuffers(1, &mut id as *mut _);
        }
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteRenderbuffers(1)`.
    pub fn delete_renderbuffer(&self, id: u32) {
        trace!(target: "gl", "glDeleteRenderbuffers{:?}", (1, id));
        unsafe {
            self.gl.DeleteRenderbuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindRenderbuffer`, or `glBindRenderbufferEXT` on
    /// drivers that only export the extension entry point.
    pub fn bind_renderbuffer(&self, id: u32) {
        if self.gl.BindRenderbuffer.is_loaded() {
            trace!(target: "gl", "glBindRenderbuffer{:?}", (RENDERBUFFER, id));
            unsafe {
                self.gl.BindRenderbuffer(RENDERBUFFER, id);
            }
        } else {
            trace!(target: "gl", "glBindRenderbufferEXT{:?}", (RENDERBUFFER, id));
            unsafe {
                self.gl.BindRenderbufferEXT(RENDERBUFFER, id);
            }
        }
        self.check_error();
    }

    /// Corresponds to `glRenderbufferStorage`.
    pub fn renderbuffer_storage(&self, format: u32, width: i32, height: i32) {
        trace!(
            target: "gl",
            "glRenderbufferStorage{:?}",
            (RENDERBUFFER, format, width, height),
        );
        unsafe {
            self.gl.RenderbufferStorage(RENDERBUFFER, format, width, height);
        }
        self.check_error();
    }

    /// Corresponds to `glRenderbufferStorageMultisample`.
    pub fn renderbuffer_storage_multisample(
        &self,
        samples: i32,
        format: u32,
        width: i32,
        height: i32,
    ) {
        trace!(
            target: "gl",
            "glRenderbufferStorageMultisample{:?}",
            (RENDERBUFFER, samples, format, width, height),
        );
        unsafe {
            self.gl.RenderbufferStorageMultisample(
                RENDERBUFFER,
                samples,
                format,
                width,
                height,
            );
        }
        self.check_error();
    }
}

/// Converts a buffer length to `GLsizei`. Lengths beyond its range are
/// clamped, so the driver never writes more than `size` bytes.
fn buffer_size(size: usize) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}
