//! Integer vectors and rectangles plus numeric helpers.

pub mod algorithms;
pub mod tags;

#[doc(inline)]
pub use self::tags::{IdentityInit, ZeroInit};

/// Two-component integer vector.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Vector2 {
    /// X component.
    pub x: i32,

    /// Y component.
    pub y: i32,
}

impl Vector2 {
    /// Constructor.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<ZeroInit> for Vector2 {
    fn from(_: ZeroInit) -> Self {
        Self::new(0, 0)
    }
}

impl From<[i32; 2]> for Vector2 {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Three-component integer vector.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Vector3 {
    /// X component.
    pub x: i32,

    /// Y component.
    pub y: i32,

    /// Z component.
    pub z: i32,
}

impl Vector3 {
    /// Constructor.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the X and Y components.
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl From<ZeroInit> for Vector3 {
    fn from(_: ZeroInit) -> Self {
        Self::new(0, 0, 0)
    }
}

/// All components set to one, the size of a single texel.
impl From<IdentityInit> for Vector3 {
    fn from(_: IdentityInit) -> Self {
        Self::new(1, 1, 1)
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0)
    }
}

/// Axis-aligned integer rectangle with a bottom-left origin.
///
/// `min` is inclusive, `max` is exclusive, matching how OpenGL addresses
/// framebuffer pixels.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Range2 {
    /// Bottom-left corner.
    pub min: Vector2,

    /// Top-right corner.
    pub max: Vector2,
}

impl Range2 {
    /// Constructor.
    pub const fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from its bottom-left corner and size.
    pub fn from_size(min: Vector2, size: Vector2) -> Self {
        Self {
            min,
            max: Vector2::new(min.x + size.x, min.y + size.y),
        }
    }

    /// Left edge.
    pub fn left(&self) -> i32 {
        self.min.x
    }

    /// Bottom edge.
    pub fn bottom(&self) -> i32 {
        self.min.y
    }

    /// Right edge.
    pub fn right(&self) -> i32 {
        self.max.x
    }

    /// Top edge.
    pub fn top(&self) -> i32 {
        self.max.y
    }

    /// Width.
    pub fn size_x(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height.
    pub fn size_y(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Width and height.
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.size_x(), self.size_y())
    }

    pub(crate) fn corners(&self) -> [i32; 4] {
        [self.left(), self.bottom(), self.right(), self.top()]
    }
}

impl From<ZeroInit> for Range2 {
    fn from(_: ZeroInit) -> Self {
        Self::new(ZeroInit.into(), ZeroInit.into())
    }
}
