extern crate gl_generator;

use gl_generator::{Registry, Api, Profile, Fallbacks, StructGenerator};

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("gl.rs");
    let mut file = std::fs::File::create(path).unwrap();
    Registry::new(
        Api::Gl,
        (4, 5),
        Profile::Compatibility,
        Fallbacks::All,
        [
            "GL_EXT_direct_state_access",
            "GL_EXT_framebuffer_object",
            "GL_ARB_robustness",
        ],
    )
        .write_bindings(StructGenerator, &mut file)
        .unwrap();
}
