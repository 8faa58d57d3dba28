//! CPU-visible pixel container.

use crate::gl;
use crate::math::{Vector2, ZeroInit};

/// Channel layout of pixel data in client memory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelFormat {
    /// `[R; R; R; R; R, ...]`
    Red,

    /// `[R, G; R, G; R, ...]`
    Rg,

    /// `[R, G, B; R, G, ...]`
    Rgb,

    /// `[B, G, R; B, G, ...]`
    Bgr,

    /// `[R, G, B, A; R, ...]`
    Rgba,

    /// `[B, G, R, A; B, ...]`
    Bgra,

    /// Integer `[R; R; R, ...]`
    RedInteger,

    /// Integer `[R, G; R, G, ...]`
    RgInteger,

    /// Integer `[R, G, B; R, ...]`
    RgbInteger,

    /// Integer `[R, G, B, A; R, ...]`
    RgbaInteger,

    /// Depth values.
    DepthComponent,

    /// Stencil indices.
    StencilIndex,

    /// Packed depth and stencil, used with a packed pixel type.
    DepthStencil,
}

impl PixelFormat {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            PixelFormat::Red => gl::RED,
            PixelFormat::Rg => gl::RG,
            PixelFormat::Rgb => gl::RGB,
            PixelFormat::Bgr => gl::BGR,
            PixelFormat::Rgba => gl::RGBA,
            PixelFormat::Bgra => gl::BGRA,
            PixelFormat::RedInteger => gl::RED_INTEGER,
            PixelFormat::RgInteger => gl::RG_INTEGER,
            PixelFormat::RgbInteger => gl::RGB_INTEGER,
            PixelFormat::RgbaInteger => gl::RGBA_INTEGER,
            PixelFormat::DepthComponent => gl::DEPTH_COMPONENT,
            PixelFormat::StencilIndex => gl::STENCIL_INDEX,
            PixelFormat::DepthStencil => gl::DEPTH_STENCIL,
        }
    }

    /// Number of channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Red
            | PixelFormat::RedInteger
            | PixelFormat::DepthComponent
            | PixelFormat::StencilIndex
            | PixelFormat::DepthStencil => 1,
            PixelFormat::Rg | PixelFormat::RgInteger => 2,
            PixelFormat::Rgb | PixelFormat::Bgr | PixelFormat::RgbInteger => 3,
            PixelFormat::Rgba | PixelFormat::Bgra | PixelFormat::RgbaInteger => 4,
        }
    }
}

/// Data type of pixel data in client memory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelType {
    /// Corresponds to `GL_UNSIGNED_BYTE`.
    UnsignedByte,

    /// Corresponds to `GL_BYTE`.
    Byte,

    /// Corresponds to `GL_UNSIGNED_SHORT`.
    UnsignedShort,

    /// Corresponds to `GL_SHORT`.
    Short,

    /// Corresponds to `GL_UNSIGNED_INT`.
    UnsignedInt,

    /// Corresponds to `GL_INT`.
    Int,

    /// Corresponds to `GL_HALF_FLOAT`.
    HalfFloat,

    /// Corresponds to `GL_FLOAT`.
    Float,

    /// Corresponds to `GL_UNSIGNED_SHORT_5_6_5`. Packed.
    UnsignedShort565,

    /// Corresponds to `GL_UNSIGNED_SHORT_4_4_4_4`. Packed.
    UnsignedShort4444,

    /// Corresponds to `GL_UNSIGNED_SHORT_5_5_5_1`. Packed.
    UnsignedShort5551,

    /// Corresponds to `GL_UNSIGNED_INT_2_10_10_10_REV`. Packed.
    UnsignedInt2101010Rev,

    /// Corresponds to `GL_UNSIGNED_INT_24_8`. Packed.
    UnsignedInt248,

    /// Corresponds to `GL_FLOAT_32_UNSIGNED_INT_24_8_REV`. Packed.
    Float32UnsignedInt248Rev,
}

impl PixelType {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            PixelType::UnsignedByte => gl::UNSIGNED_BYTE,
            PixelType::Byte => gl::BYTE,
            PixelType::UnsignedShort => gl::UNSIGNED_SHORT,
            PixelType::Short => gl::SHORT,
            PixelType::UnsignedInt => gl::UNSIGNED_INT,
            PixelType::Int => gl::INT,
            PixelType::HalfFloat => gl::HALF_FLOAT,
            PixelType::Float => gl::FLOAT,
            PixelType::UnsignedShort565 => gl::UNSIGNED_SHORT_5_6_5,
            PixelType::UnsignedShort4444 => gl::UNSIGNED_SHORT_4_4_4_4,
            PixelType::UnsignedShort5551 => gl::UNSIGNED_SHORT_5_5_5_1,
            PixelType::UnsignedInt2101010Rev => gl::UNSIGNED_INT_2_10_10_10_REV,
            PixelType::UnsignedInt248 => gl::UNSIGNED_INT_24_8,
            PixelType::Float32UnsignedInt248Rev => gl::FLOAT_32_UNSIGNED_INT_24_8_REV,
        }
    }

    /// Size in bytes of one channel, or of the whole pixel for packed types.
    pub fn size(self) -> usize {
        match self {
            PixelType::UnsignedByte | PixelType::Byte => 1,
            PixelType::UnsignedShort
            | PixelType::Short
            | PixelType::HalfFloat
            | PixelType::UnsignedShort565
            | PixelType::UnsignedShort4444
            | PixelType::UnsignedShort5551 => 2,
            PixelType::UnsignedInt
            | PixelType::Int
            | PixelType::Float
            | PixelType::UnsignedInt2101010Rev
            | PixelType::UnsignedInt248 => 4,
            PixelType::Float32UnsignedInt248Rev => 8,
        }
    }

    /// Returns `true` if all channels of a pixel share one value.
    pub fn is_packed(self) -> bool {
        match self {
            PixelType::UnsignedShort565
            | PixelType::UnsignedShort4444
            | PixelType::UnsignedShort5551
            | PixelType::UnsignedInt2101010Rev
            | PixelType::UnsignedInt248
            | PixelType::Float32UnsignedInt248Rev => true,
            _ => false,
        }
    }
}

/// Returns the size in bytes of a single pixel.
pub fn pixel_size(format: PixelFormat, ty: PixelType) -> usize {
    if ty.is_packed() {
        ty.size()
    } else {
        format.channels() * ty.size()
    }
}

/// Layout of pixel rows in client memory.
///
/// Applied to the driver's pack state before reading pixels.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PixelStorage {
    /// Row alignment in bytes: 1, 2, 4 or 8.
    ///
    /// Default: 4.
    pub alignment: i32,

    /// Pixels per row; zero means the image width.
    ///
    /// Default: 0.
    pub row_length: i32,

    /// Pixels (`x`) and rows (`y`) skipped at the start of the data.
    ///
    /// Default: zero.
    pub skip: Vector2,
}

impl Default for PixelStorage {
    fn default() -> Self {
        Self {
            alignment: 4,
            row_length: 0,
            skip: ZeroInit.into(),
        }
    }
}

impl PixelStorage {
    /// Returns `(offset, row stride)` in bytes for an image of `size`
    /// pixels.
    pub fn data_properties(&self, pixel_size: usize, size: Vector2) -> (usize, usize) {
        let row_length = if self.row_length > 0 {
            self.row_length
        } else {
            size.x
        };
        let alignment = self.alignment.max(1) as usize;
        let row = row_length.max(0) as usize * pixel_size;
        let stride = (row + alignment - 1) / alignment * alignment;
        let offset = self.skip.y.max(0) as usize * stride
            + self.skip.x.max(0) as usize * pixel_size;
        (offset, stride)
    }

    /// Returns the bytes needed to hold an image of `size` pixels,
    /// including skipped data and row padding.
    pub fn data_size(&self, pixel_size: usize, size: Vector2) -> usize {
        let (offset, stride) = self.data_properties(pixel_size, size);
        offset + stride * size.y.max(0) as usize
    }
}

/// A two-dimensional image in client memory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image2 {
    storage: PixelStorage,
    format: PixelFormat,
    ty: PixelType,
    size: Vector2,
    data: Vec<u8>,
}

impl Image2 {
    /// Creates an empty image to read pixels into.
    pub fn new(format: PixelFormat, ty: PixelType) -> Self {
        Self::with_storage(PixelStorage::default(), format, ty)
    }

    /// Creates an empty image with non-default pixel storage.
    pub fn with_storage(storage: PixelStorage, format: PixelFormat, ty: PixelType) -> Self {
        Self {
            storage,
            format,
            ty,
            size: ZeroInit.into(),
            data: Vec::new(),
        }
    }

    /// Returns the pixel storage parameters.
    pub fn storage(&self) -> PixelStorage {
        self.storage
    }

    /// Returns the channel layout.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the channel data type.
    pub fn ty(&self) -> PixelType {
        self.ty
    }

    /// Returns the image size in pixels.
    pub fn size(&self) -> Vector2 {
        self.size
    }

    /// Returns the size in bytes of a single pixel.
    pub fn pixel_size(&self) -> usize {
        pixel_size(self.format, self.ty)
    }

    /// Returns the bytes needed to hold this image at `size`.
    pub fn data_size_for(&self, size: Vector2) -> usize {
        self.storage.data_size(self.pixel_size(), size)
    }

    /// Returns the raw pixel data.
    ///
    /// May be longer than the image needs if storage was reused.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Takes the pixel data out of the image, leaving it empty.
    pub fn release(&mut self) -> Vec<u8> {
        self.size = ZeroInit.into();
        ::std::mem::replace(&mut self.data, Vec::new())
    }

    pub(crate) fn set_data(&mut self, size: Vector2, data: Vec<u8>) {
        debug_assert!(data.len() >= self.data_size_for(size));
        self.size = size;
        self.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_sizes() {
        assert_eq!(pixel_size(PixelFormat::Rgba, PixelType::UnsignedByte), 4);
        assert_eq!(pixel_size(PixelFormat::Rgb, PixelType::Float), 12);
        assert_eq!(pixel_size(PixelFormat::Rg, PixelType::HalfFloat), 4);
        assert_eq!(pixel_size(PixelFormat::Rgb, PixelType::UnsignedShort565), 2);
        assert_eq!(pixel_size(PixelFormat::DepthStencil, PixelType::UnsignedInt248), 4);
        assert_eq!(
            pixel_size(PixelFormat::DepthStencil, PixelType::Float32UnsignedInt248Rev),
            8,
        );
    }

    #[test]
    fn rows_are_padded_to_alignment() {
        let storage = PixelStorage::default();
        // 3 RGB8 pixels are 9 bytes, padded to 12.
        assert_eq!(storage.data_properties(3, Vector2::new(3, 2)), (0, 12));
        assert_eq!(storage.data_size(3, Vector2::new(3, 2)), 24);

        let packed = PixelStorage { alignment: 1, ..PixelStorage::default() };
        assert_eq!(packed.data_size(3, Vector2::new(3, 2)), 18);
    }

    #[test]
    fn row_length_and_skip() {
        let storage = PixelStorage {
            alignment: 4,
            row_length: 16,
            skip: Vector2::new(2, 3),
        };
        // 16 RGBA8 pixels per row = 64 bytes; skip 3 rows and 2 pixels.
        assert_eq!(storage.data_properties(4, Vector2::new(8, 4)), (3 * 64 + 8, 64));
        assert_eq!(storage.data_size(4, Vector2::new(8, 4)), 3 * 64 + 8 + 4 * 64);
    }

    #[test]
    fn empty_size_needs_no_data() {
        let image = Image2::new(PixelFormat::Rgba, PixelType::UnsignedByte);
        assert_eq!(image.data_size_for(Vector2::new(0, 0)), 0);
        assert_eq!(image.data_size_for(Vector2::new(5, 0)), 0);
    }

    #[test]
    fn release_empties_the_image() {
        let mut image = Image2::new(PixelFormat::Red, PixelType::UnsignedByte);
        image.set_data(Vector2::new(2, 2), vec![1; 8]);
        assert_eq!(image.size(), Vector2::new(2, 2));
        assert_eq!(image.release().len(), 8);
        assert!(image.data().is_empty());
        assert_eq!(image.size(), Vector2::new(0, 0));
    }
}
