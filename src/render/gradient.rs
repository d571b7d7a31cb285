//! Mesh-gradient background synthesis.
//!
//! Inverse-distance-weighted (Shepard) interpolation over a handful of
//! anchor points. Every anchor contributes at every pixel; the anchor
//! radius is a softening floor on the distance, not a cutoff, so weights
//! stay finite and the result is a convex combination of the anchor
//! colours. A wide Gaussian blur then melts any residual structure.
//!
//! Anchor radii must be positive. The interpolation does not clamp; a
//! non-positive radius is caught by `validate` instead.

use image::RgbaImage;
use imageproc::filter::gaussian_blur_f32;

use crate::types::GradientPoint;

/// Blur radius applied after interpolation.
const BLUR_SIGMA: f32 = 80.0;

/// Render a mesh-gradient background (interpolation plus blur).
pub fn render(width: u32, height: u32, points: &[GradientPoint]) -> RgbaImage {
    gaussian_blur_f32(&field(width, height, points), BLUR_SIGMA)
}

/// The raw interpolated field, before blurring.
///
/// Exposed separately so the anchor-colour properties can be checked
/// without the blur averaging neighbouring pixels in.
pub fn field(width: u32, height: u32, points: &[GradientPoint]) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (px, py) = (x as f32, y as f32);

        let mut sum = [0.0f32; 4];
        let mut total = 0.0f32;

        for point in points {
            let dx = px - point.position.0;
            let dy = py - point.position.1;
            let distance = (dx * dx + dy * dy).sqrt();

            let weight = 1.0 / (distance + point.radius);
            let rgba = point.colour.to_rgba();
            for (acc, channel) in sum.iter_mut().zip(rgba) {
                *acc += weight * channel as f32;
            }
            total += weight;
        }

        for (out, acc) in pixel.0.iter_mut().zip(sum) {
            *out = (acc / total).round() as u8;
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, GradientPoint};

    fn anchors() -> Vec<GradientPoint> {
        vec![
            GradientPoint::new(20.0, 20.0, Colour::YELLOW, 10.0),
            GradientPoint::new(180.0, 30.0, Colour::COBALT, 10.0),
            GradientPoint::new(100.0, 170.0, Colour::TEAL, 10.0),
            GradientPoint::new(30.0, 160.0, Colour::WARM, 10.0),
        ]
    }

    #[test]
    fn test_field_dimensions() {
        let img = field(200, 200, &anchors());
        assert_eq!(img.dimensions(), (200, 200));
    }

    #[test]
    fn test_field_is_convex_combination() {
        let points = anchors();
        let img = field(64, 64, &points);

        for channel in 0..3usize {
            let min = points.iter().map(|p| p.colour.to_rgba()[channel]).min().unwrap();
            let max = points.iter().map(|p| p.colour.to_rgba()[channel]).max().unwrap();

            for pixel in img.pixels() {
                let v = pixel.0[channel];
                // Rounding can land one step outside the channel range.
                assert!(v >= min.saturating_sub(1) && v <= max.saturating_add(1));
            }
        }
    }

    #[test]
    fn test_field_nearest_anchor_dominates() {
        let points = anchors();
        let img = field(200, 200, &points);

        let distance = |a: [u8; 4], b: [u8; 4]| -> f32 {
            a.iter()
                .zip(b)
                .take(3)
                .map(|(&x, y)| (x as f32 - y as f32).powi(2))
                .sum::<f32>()
                .sqrt()
        };

        for anchor in &points {
            let sampled = img
                .get_pixel(anchor.position.0 as u32, anchor.position.1 as u32)
                .0;
            let own = distance(sampled, anchor.colour.to_rgba());

            for other in points.iter().filter(|p| p.position != anchor.position) {
                let theirs = distance(sampled, other.colour.to_rgba());
                assert!(
                    own < theirs,
                    "anchor at {:?} not dominant: {} vs {}",
                    anchor.position,
                    own,
                    theirs
                );
            }
        }
    }

    #[test]
    fn test_field_single_anchor_is_flat() {
        let points = vec![GradientPoint::new(10.0, 10.0, Colour::TEAL, 50.0)];
        let img = field(32, 32, &points);
        for pixel in img.pixels() {
            assert_eq!(pixel.0, Colour::TEAL.to_rgba());
        }
    }

    #[test]
    fn test_render_blur_preserves_dimensions() {
        let img = render(120, 80, &anchors());
        assert_eq!(img.dimensions(), (120, 80));
    }
}
