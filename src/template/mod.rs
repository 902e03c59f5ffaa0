//! Compose template rendering.
//!
//! # Example
//!
//! ```
//! use gns3_manager::template::{render_str, Substitutions};
//!
//! let subs = Substitutions::new().with("QEMU_VERSION", "6.2.0");
//! let out = render_str("qemu=${QEMU_VERSION} extra=${EXTRA}", &subs);
//! assert_eq!(out, "qemu=6.2.0 extra=${EXTRA}");
//! ```

pub mod render;

pub use render::{
    extract_placeholders, placeholder_token, render, render_str, RenderedFile, Substitutions,
};
