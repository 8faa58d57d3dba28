//! GPU-visible pixel container optimized as a render target.

use crate::math::Vector2;
use crate::queue;
use crate::texture;
use std::{cmp, fmt, hash, ops, sync};

pub(crate) type Id = u32;

struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        let _ = self.tx.send(self.id);
    }
}

/// Buffer optimized as a render target.
#[derive(Clone)]
pub struct Renderbuffer {
    id: Id,
    size: Vector2,
    samples: u32,
    format: texture::Format,
    _destructor: sync::Arc<Destructor>,
}

impl Renderbuffer {
    /// Constructor.
    pub(crate) fn new(
        id: Id,
        size: Vector2,
        samples: u32,
        format: texture::Format,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            id,
            size,
            samples,
            format,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    /// Returns the OpenGL renderbuffer ID.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the size in pixels.
    pub fn size(&self) -> Vector2 {
        self.size
    }

    /// Returns the sample count; 0 or 1 for single-sampled storage.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Returns the internal pixel format.
    pub fn format(&self) -> texture::Format {
        self.format
    }
}

impl fmt::Debug for Renderbuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Renderbuffer {
            id: Id,
            samples: u32,
        }

        Renderbuffer { id: self.id, samples: self.samples }.fmt(f)
    }
}

impl cmp::PartialEq<Self> for Renderbuffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Renderbuffer {}

impl hash::Hash for Renderbuffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
