//! Core domain types for ogimg.
//!
//! - `Colour` - RGBA colour values and blending
//! - `PageConfig` - per-page generation parameters
//! - `Background` / `Pattern` / `GradientPoint` - background styles

mod colour;
mod page;

pub use colour::Colour;
pub use page::{
    gradient_pages, load_pages, pattern_pages, Background, GradientPoint, PageConfig, Pattern,
};
