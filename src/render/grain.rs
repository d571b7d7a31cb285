//! Grain noise compositing.
//!
//! One uniform sample per pixel, applied to all three colour channels,
//! so the grain reads as brightness flicker rather than colour speckle.
//! Alpha is untouched. Seed the RNG for reproducible output.

use image::RgbaImage;
use rand::Rng;

/// Add grain to `img` in place.
///
/// `intensity` scales the noise amplitude; at 1.0 a pixel can move the
/// full ±127 levels. Channels clamp to [0, 255].
pub fn apply<R: Rng>(img: &mut RgbaImage, intensity: f32, rng: &mut R) {
    for pixel in img.pixels_mut() {
        let noise = ((rng.gen::<f32>() - 0.5) * 255.0 * intensity).round() as i32;
        for channel in pixel.0.iter_mut().take(3) {
            *channel = (*channel as i32 + noise).clamp(0, 255) as u8;
        }
    }
}
