//! Layer creation and alpha compositing.
//!
//! Every overlay (grid, pattern shape, each text pass) is drawn onto its
//! own transparent layer and folded onto the accumulating base image with
//! source-over blending, later layers on top.

use image::RgbaImage;

use crate::types::Colour;

/// A fully transparent layer of the given size.
pub fn layer(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Colour::TRANSPARENT.to_pixel())
}

/// An opaque canvas filled with a single colour.
pub fn fill(width: u32, height: u32, colour: Colour) -> RgbaImage {
    RgbaImage::from_pixel(width, height, colour.to_pixel())
}

/// Composite `overlay` onto `base` in place (source-over).
///
/// Both images must share dimensions; mismatched overlays are a caller
/// bug and panic.
pub fn composite_over(base: &mut RgbaImage, overlay: &RgbaImage) {
    assert_eq!(
        base.dimensions(),
        overlay.dimensions(),
        "composite layers must match the base dimensions"
    );

    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        let s = Colour::new(src[0], src[1], src[2], src[3]);
        if s.is_transparent() {
            continue;
        }
        let d = Colour::new(dst[0], dst[1], dst[2], dst[3]);
        *dst = s.over(d).to_pixel();
    }
}
