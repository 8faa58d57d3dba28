//! Driver version and extension support.

use crate::gl;
use std::{collections::HashSet, env, fmt};

/// Environment variable holding extensions to treat as unsupported.
pub const DISABLE_EXTENSIONS_VAR: &str = "GLFB_DISABLE_EXTENSIONS";

/// OpenGL version number.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version {
    /// Major version.
    pub major: u32,

    /// Minor version.
    pub minor: u32,
}

impl Version {
    /// Constructor.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses the leading `major.minor` of a `GL_VERSION` string.
    ///
    /// The string may carry a vendor suffix, e.g. `"4.6.0 NVIDIA 535.54"`.
    pub fn parse(string: &str) -> Option<Self> {
        let number = string.split_whitespace().next()?;
        let mut parts = number.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts
            .next()?
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .ok()?;
        Some(Self { major, minor })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// An OpenGL extension.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Extension {
    /// Name as advertised by the driver.
    pub name: &'static str,

    /// Core version the functionality was promoted to, if any.
    pub core: Option<Version>,
}

/// Extensions that influence which driver entry points are used.
pub mod extension {
    use super::{Extension, Version};

    /// `GL_ARB_framebuffer_object`.
    pub const ARB_FRAMEBUFFER_OBJECT: Extension = Extension {
        name: "GL_ARB_framebuffer_object",
        core: Some(Version::new(3, 0)),
    };

    /// `GL_EXT_framebuffer_object`.
    pub const EXT_FRAMEBUFFER_OBJECT: Extension = Extension {
        name: "GL_EXT_framebuffer_object",
        core: None,
    };

    /// `GL_EXT_framebuffer_blit`.
    pub const EXT_FRAMEBUFFER_BLIT: Extension = Extension {
        name: "GL_EXT_framebuffer_blit",
        core: Some(Version::new(3, 0)),
    };

    /// `GL_ARB_pixel_buffer_object`.
    pub const ARB_PIXEL_BUFFER_OBJECT: Extension = Extension {
        name: "GL_ARB_pixel_buffer_object",
        core: Some(Version::new(2, 1)),
    };

    /// `GL_ARB_blend_func_extended`.
    pub const ARB_BLEND_FUNC_EXTENDED: Extension = Extension {
        name: "GL_ARB_blend_func_extended",
        core: Some(Version::new(3, 3)),
    };

    /// `GL_ARB_invalidate_subdata`.
    pub const ARB_INVALIDATE_SUBDATA: Extension = Extension {
        name: "GL_ARB_invalidate_subdata",
        core: Some(Version::new(4, 3)),
    };

    /// `GL_ARB_direct_state_access`.
    pub const ARB_DIRECT_STATE_ACCESS: Extension = Extension {
        name: "GL_ARB_direct_state_access",
        core: Some(Version::new(4, 5)),
    };

    /// `GL_EXT_direct_state_access`.
    pub const EXT_DIRECT_STATE_ACCESS: Extension = Extension {
        name: "GL_EXT_direct_state_access",
        core: None,
    };

    /// `GL_ARB_robustness`.
    pub const ARB_ROBUSTNESS: Extension = Extension {
        name: "GL_ARB_robustness",
        core: None,
    };
}

/// Context creation options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Extensions to treat as unsupported even if the driver advertises
    /// them or the context version includes them.
    pub disabled_extensions: Vec<String>,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// [`DISABLE_EXTENSIONS_VAR`] holds a whitespace-separated list of
    /// extension names.
    ///
    /// [`DISABLE_EXTENSIONS_VAR`]: constant.DISABLE_EXTENSIONS_VAR.html
    pub fn from_env() -> Self {
        let disabled_extensions = env::var(DISABLE_EXTENSIONS_VAR)
            .map(|list| Self::parse_list(&list))
            .unwrap_or_default();
        Self { disabled_extensions }
    }

    fn parse_list(list: &str) -> Vec<String> {
        list.split_whitespace().map(String::from).collect()
    }
}

/// What the driver supports.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Capabilities {
    version: Version,
    extensions: HashSet<String>,
    disabled: HashSet<String>,
}

impl Capabilities {
    /// Constructor.
    pub fn new<I, S>(version: Version, extensions: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        Self {
            version,
            extensions: extensions.into_iter().map(Into::into).collect(),
            disabled: HashSet::new(),
        }
    }

    /// Queries the version and extension list of the current context.
    pub fn detect(backend: &gl::Backend) -> Self {
        let reported = backend
            .get_string(gl::VERSION)
            .and_then(|string| Version::parse(&string));
        // `GL_MAJOR_VERSION` is unknown to pre-3.0 drivers.
        let version = match reported {
            Some(version) if version < Version::new(3, 0) => version,
            _ => {
                let major = backend.get_integer(gl::MAJOR_VERSION);
                if major > 0 {
                    let minor = backend.get_integer(gl::MINOR_VERSION);
                    Version::new(major as u32, minor as u32)
                } else {
                    reported.unwrap_or(Version::new(1, 0))
                }
            }
        };

        let extensions: HashSet<String> = if version >= Version::new(3, 0) {
            let count = backend.get_integer(gl::NUM_EXTENSIONS);
            (0 .. count.max(0) as u32)
                .filter_map(|index| backend.get_stringi(gl::EXTENSIONS, index))
                .collect()
        } else {
            backend
                .get_string(gl::EXTENSIONS)
                .map(|list| list.split_whitespace().map(String::from).collect())
                .unwrap_or_default()
        };

        info!("OpenGL {} with {} extensions", version, extensions.len());
        Self {
            version,
            extensions,
            disabled: HashSet::new(),
        }
    }

    /// Applies the extension overrides of `config`.
    pub fn configure(&mut self, config: &Config) {
        for name in &config.disabled_extensions {
            self.disable(name);
        }
    }

    /// Treats an extension as unsupported.
    pub fn disable(&mut self, name: &str) {
        debug!("Disabling extension {}", name);
        self.disabled.insert(name.to_owned());
    }

    /// Returns the context version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns `true` if the context version is at least `version`.
    pub fn is_version_at_least(&self, version: Version) -> bool {
        self.version >= version
    }

    /// Returns `true` if the driver advertises the extension by name.
    pub fn advertises(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Returns `true` if the functionality of `extension` is available,
    /// either through the core version or as an advertised extension, and
    /// has not been disabled.
    pub fn supports(&self, extension: Extension) -> bool {
        if self.disabled.contains(extension.name) {
            return false;
        }
        let core = extension.core.map_or(false, |v| self.is_version_at_least(v));
        core || self.advertises(extension.name)
    }
}
