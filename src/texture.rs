//! GPU-visible pixel container.

use crate::gl;
use crate::math::Vector3;
use crate::queue;
use std::{cmp, fmt, hash, ops, sync};

/// OpenGL texture ID type.
pub(crate) type Id = u32;

/// Texture format descriptors.
pub mod format {
    /// 32-bit float format.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum F32 {
        /// Corresponds to `GL_DEPTH_COMPONENT32F`.
        Depth,

        /// Corresponds to `GL_R32F`.
        R,

        /// Corresponds to `GL_RG32F`.
        Rg,

        /// Corresponds to `GL_RGB32F`.
        Rgb,

        /// Corresponds to `GL_RGBA32F`.
        Rgba,
    }

    /// 8-bit fixed format.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum U8 {
        /// Corresponds to `GL_R8`.
        R,

        /// Corresponds to `GL_RG8`.
        Rg,

        /// Corresponds to `GL_RGB8`.
        Rgb,

        /// Correponds to `GL_RGBA8`.
        Rgba,
    }

    /// Packed depth and stencil formats.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum DepthStencil {
        /// Corresponds to `GL_DEPTH24_STENCIL8`.
        D24S8,

        /// Corresponds to `GL_DEPTH32F_STENCIL8`.
        D32FS8,
    }
}

/// Internal format of texture data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// 32-bit float.
    F32(format::F32),

    /// 8-bit fixed.
    U8(format::U8),

    /// Packed depth and stencil.
    DepthStencil(format::DepthStencil),
}

impl Format {
    pub(crate) fn as_gl_enum(&self) -> u32 {
        match *self {
            Format::F32(format::F32::Depth) => gl::DEPTH_COMPONENT32F,
            Format::F32(format::F32::R) => gl::R32F,
            Format::F32(format::F32::Rg) => gl::RG32F,
            Format::F32(format::F32::Rgb) => gl::RGB32F,
            Format::F32(format::F32::Rgba) => gl::RGBA32F,

            Format::U8(format::U8::R) => gl::R8,
            Format::U8(format::U8::Rg) => gl::RG8,
            Format::U8(format::U8::Rgb) => gl::RGB8,
            Format::U8(format::U8::Rgba) => gl::RGBA8,

            Format::DepthStencil(format::DepthStencil::D24S8) => gl::DEPTH24_STENCIL8,
            Format::DepthStencil(format::DepthStencil::D32FS8) => gl::DEPTH32F_STENCIL8,
        }
    }

    /// Returns a `(format, type)` pair the driver accepts when allocating
    /// storage of this format without initial data.
    pub(crate) fn transfer_gl_enums(&self) -> (u32, u32) {
        match *self {
            Format::F32(format::F32::Depth) => (gl::DEPTH_COMPONENT, gl::FLOAT),
            Format::F32(_) => (gl::RGBA, gl::FLOAT),
            Format::U8(_) => (gl::RGBA, gl::UNSIGNED_BYTE),
            Format::DepthStencil(format::DepthStencil::D24S8) => {
                (gl::DEPTH_STENCIL, gl::UNSIGNED_INT_24_8)
            }
            Format::DepthStencil(format::DepthStencil::D32FS8) => {
                (gl::DEPTH_STENCIL, gl::FLOAT_32_UNSIGNED_INT_24_8_REV)
            }
        }
    }
}

impl From<format::F32> for Format {
    fn from(format: format::F32) -> Self {
        Format::F32(format)
    }
}

impl From<format::U8> for Format {
    fn from(format: format::U8) -> Self {
        Format::U8(format)
    }
}

impl From<format::DepthStencil> for Format {
    fn from(format: format::DepthStencil) -> Self {
        Format::DepthStencil(format)
    }
}

/// Texture dimensionality and layout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Corresponds to `GL_TEXTURE_1D`.
    Texture1,

    /// Corresponds to `GL_TEXTURE_2D`.
    Texture2,

    /// Corresponds to `GL_TEXTURE_3D`.
    Texture3,

    /// Corresponds to `GL_TEXTURE_1D_ARRAY`.
    Texture1Array,

    /// Corresponds to `GL_TEXTURE_2D_ARRAY`.
    Texture2Array,

    /// Corresponds to `GL_TEXTURE_RECTANGLE`. Has no mip levels.
    Rectangle,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP`.
    CubeMap,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP_ARRAY`.
    CubeMapArray,
}

impl Kind {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Texture1 => gl::TEXTURE_1D,
            Kind::Texture2 => gl::TEXTURE_2D,
            Kind::Texture3 => gl::TEXTURE_3D,
            Kind::Texture1Array => gl::TEXTURE_1D_ARRAY,
            Kind::Texture2Array => gl::TEXTURE_2D_ARRAY,
            Kind::Rectangle => gl::TEXTURE_RECTANGLE,
            Kind::CubeMap => gl::TEXTURE_CUBE_MAP,
            Kind::CubeMapArray => gl::TEXTURE_CUBE_MAP_ARRAY,
        }
    }

    /// Dense index used to key per-target binding caches.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Face of a cube map texture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CubeFace {
    /// Corresponds to `GL_TEXTURE_CUBE_MAP_POSITIVE_X`.
    PositiveX,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP_NEGATIVE_X`.
    NegativeX,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP_POSITIVE_Y`.
    PositiveY,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP_NEGATIVE_Y`.
    NegativeY,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP_POSITIVE_Z`.
    PositiveZ,

    /// Corresponds to `GL_TEXTURE_CUBE_MAP_NEGATIVE_Z`.
    NegativeZ,
}

impl CubeFace {
    /// All faces in layer order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Returns the face at layer `index`, if any.
    pub fn from_index(index: i32) -> Option<Self> {
        if (0 .. 6).contains(&index) {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the layer index of the face.
    pub fn index(self) -> i32 {
        self as i32
    }

    pub(crate) fn as_gl_enum(self) -> u32 {
        gl::TEXTURE_CUBE_MAP_POSITIVE_X + self as u32
    }
}

/// Returns the texture back to the context upon destruction.
pub(crate) struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(self.id);
    }
}

/// GPU-visible texture.
#[derive(Clone)]
pub struct Texture {
    /// The OpenGL texture ID.
    id: Id,

    kind: Kind,
    size: Vector3,
    format: Format,

    /// Returns the texture back to the context upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl Texture {
    pub(crate) fn new(
        id: Id,
        kind: Kind,
        size: Vector3,
        format: Format,
        tx: queue::Sender<Id>,
    ) -> Self {
        Texture {
            id,
            kind,
            size,
            format,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    /// Returns the OpenGL texture ID.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the texture kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the internal pixel format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the width of the texture in pixels.
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Returns the height of the texture in pixels, or the layer count of a
    /// 1D array texture.
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Returns the depth of the texture in pixels, or the layer count of an
    /// array texture.
    pub fn depth(&self) -> i32 {
        self.size.z
    }

    /// Records storage replaced by a framebuffer copy.
    pub(crate) fn set_storage(&mut self, size: Vector3, format: Format) {
        self.size = size;
        self.format = format;
    }
}

impl cmp::Eq for Texture {}

impl cmp::PartialEq<Self> for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Texture(u32, Kind);

        Texture(self.id, self.kind).fmt(f)
    }
}

impl hash::Hash for Texture {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
