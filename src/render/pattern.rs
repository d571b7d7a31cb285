//! Pattern background synthesis (flat fill, grid, decorative shape).
//!
//! The overlay (grid plus one parametric shape) is drawn at low alpha on
//! a transparent layer and composited over the flat fill, then the opaque
//! accent bar is painted across the top rows. Output is deterministic
//! for a given configuration.

use std::f32::consts::PI;

use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::types::{Colour, Pattern};

use super::compose::{composite_over, fill, layer};

/// Grid line spacing in pixels.
const GRID_SPACING: u32 = 40;

/// Grid line alpha.
const GRID_ALPHA: u8 = 20;

/// Alpha for decorative shapes.
const SHAPE_ALPHA: u8 = 60;

/// Spiral polar radius cap.
const SPIRAL_MAX_RADIUS: f32 = 300.0;

/// Height of the opaque accent bar along the top edge.
const ACCENT_BAR_HEIGHT: u32 = 9;

/// Render a pattern-style background.
pub fn render(
    width: u32,
    height: u32,
    background: Colour,
    accent: Colour,
    pattern: Pattern,
) -> RgbaImage {
    let mut base = fill(width, height, background);

    let mut overlay = layer(width, height);
    draw_grid(&mut overlay, Colour::DARK.with_alpha(GRID_ALPHA));
    draw_pattern(&mut overlay, accent.with_alpha(SHAPE_ALPHA), pattern);
    composite_over(&mut base, &overlay);

    draw_filled_rect_mut(
        &mut base,
        Rect::at(0, 0).of_size(width, ACCENT_BAR_HEIGHT),
        accent.to_pixel(),
    );

    base
}

/// Faint vertical/horizontal grid lines at fixed spacing.
fn draw_grid(layer: &mut RgbaImage, colour: Colour) {
    let (width, height) = layer.dimensions();
    let pixel = colour.to_pixel();

    for x in (0..width).step_by(GRID_SPACING as usize) {
        draw_line_segment_mut(
            layer,
            (x as f32, 0.0),
            (x as f32, (height - 1) as f32),
            pixel,
        );
    }
    for y in (0..height).step_by(GRID_SPACING as usize) {
        draw_line_segment_mut(
            layer,
            (0.0, y as f32),
            ((width - 1) as f32, y as f32),
            pixel,
        );
    }
}

/// One decorative shape per pattern kind.
fn draw_pattern(layer: &mut RgbaImage, colour: Colour, pattern: Pattern) {
    let (width, height) = layer.dimensions();
    let (w, h) = (width as f32, height as f32);

    match pattern {
        Pattern::Circles => {
            // Concentric rings near the bottom-right corner.
            let (cx, cy) = ((width - 100) as i32, (height - 100) as i32);
            for r in (50..400).step_by(50) {
                draw_ring(layer, (cx, cy), r, colour);
            }
        }
        Pattern::Spiral => {
            let points = spiral_points(w - 150.0, h - 150.0);
            if points.len() > 1 {
                stroke_polyline(layer, &points, colour);
            }
        }
        Pattern::Waves => {
            for offset_mult in 0..3 {
                let points = wave_points(width, h, offset_mult as f32 * 100.0);
                stroke_polyline(layer, &points, colour);
            }
        }
        Pattern::Geometric => {
            // Regular hexagon, closed with a repeated first vertex.
            let (cx, cy) = (w - 250.0, h - 250.0);
            let size = 120.0;
            let points: Vec<(f32, f32)> = (0..7)
                .map(|i| {
                    let angle = (PI / 3.0) * i as f32;
                    (cx + size * angle.cos(), cy + size * angle.sin())
                })
                .collect();
            stroke_polyline(layer, &points, colour);
        }
    }
}

/// Sample the polar spiral into a polyline.
///
/// Radius grows as `0.15·θ·15` and the walk stops as soon as it would
/// exceed the cap, so the final point always stays within it.
pub fn spiral_points(cx: f32, cy: f32) -> Vec<(f32, f32)> {
    let tightness = 0.15;
    let mut points = Vec::new();

    let mut angle: f32 = 0.0;
    while angle < PI * 8.0 {
        let radius = tightness * angle * 15.0;
        if radius > SPIRAL_MAX_RADIUS {
            break;
        }
        points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
        angle += 0.1;
    }

    points
}

/// Sample one sine curve across the full width.
fn wave_points(width: u32, h: f32, phase_offset: f32) -> Vec<(f32, f32)> {
    (0..width)
        .step_by(5)
        .map(|x| {
            let y = h - 150.0 + ((x as f32 + phase_offset) / 60.0).sin() * 80.0;
            (x as f32, y)
        })
        .collect()
}

/// A circle outline with a 2px stroke.
fn draw_ring(layer: &mut RgbaImage, center: (i32, i32), radius: i32, colour: Colour) {
    let pixel = colour.to_pixel();
    draw_hollow_circle_mut(layer, center, radius, pixel);
    if radius > 1 {
        draw_hollow_circle_mut(layer, center, radius - 1, pixel);
    }
}

/// Draw a polyline with an approximate 2px stroke.
///
/// Each segment is drawn twice, the duplicate offset one pixel
/// perpendicular to the segment's dominant axis.
fn stroke_polyline(layer: &mut RgbaImage, points: &[(f32, f32)], colour: Colour) {
    let pixel = colour.to_pixel();

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        draw_line_segment_mut(layer, start, end, pixel);

        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let offset = if dx.abs() >= dy.abs() { (0.0, 1.0) } else { (1.0, 0.0) };
        draw_line_segment_mut(
            layer,
            (start.0 + offset.0, start.1 + offset.1),
            (end.0 + offset.0, end.1 + offset.1),
            pixel,
        );
    }
}
