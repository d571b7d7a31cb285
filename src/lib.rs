//! ogimg - Open Graph preview image generator
//!
//! A library for procedurally generating fixed-size social preview
//! images: synthesized backgrounds, grain texture, and layered text
//! compositing, written out as PNG files.

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use error::{OgError, Result};
pub use render::{
    render_page, write_manifest, write_png, FontFace, FontSet, ManifestEntry, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
pub use types::{
    gradient_pages, load_pages, pattern_pages, Background, Colour, GradientPoint, PageConfig,
    Pattern,
};
pub use validation::{validate_pages, Diagnostic, Severity};
