//! Construction tags.
//!
//! Tags are zero-sized values passed to a constructor to select how the
//! constructed value is initialized, for example `Vector2::from(ZeroInit)`.

/// Zero initialization tag.
///
/// Selects construction with all elements set to zero.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ZeroInit;

/// Identity initialization tag.
///
/// Selects construction with the transformation set to identity. For a
/// size this means every component is one.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IdentityInit;
