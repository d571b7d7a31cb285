//! Font loading and glyph drawing.
//!
//! The compositor prefers a system TrueType face; when none of the
//! candidate paths load, it falls back to a builtin 5x7 bitmap face.
//! The fallback draws at the same coordinates with the same layer
//! structure, so layout is preserved even though fidelity drops.

use std::fs;

use ab_glyph::{FontArc, PxScale};
use image::RgbaImage;
use imageproc::drawing::draw_text_mut;

use crate::types::Colour;

/// Candidate paths for the bold (title) face.
const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

/// Candidate paths for the regular (subtitle/domain) face.
const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// A loaded font face, or the builtin fallback.
#[derive(Debug, Clone)]
pub enum FontFace {
    Truetype(FontArc),
    Builtin,
}

impl FontFace {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin)
    }
}

/// The pair of faces the text compositor draws with.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub bold: FontFace,
    pub regular: FontFace,
}

impl FontSet {
    /// Load the preferred faces, falling back to the builtin face for
    /// any that fail. Any failure cause (missing file, bad data) is
    /// treated the same.
    pub fn load() -> Self {
        Self {
            bold: load_face(BOLD_CANDIDATES),
            regular: load_face(REGULAR_CANDIDATES),
        }
    }

    /// A set using only the builtin face. Used when TrueType loading is
    /// unavailable and by tests forcing the fallback path.
    pub fn builtin() -> Self {
        Self {
            bold: FontFace::Builtin,
            regular: FontFace::Builtin,
        }
    }
}

fn load_face(candidates: &[&str]) -> FontFace {
    for path in candidates {
        if let Ok(data) = fs::read(path) {
            if let Ok(font) = FontArc::try_from_vec(data) {
                return FontFace::Truetype(font);
            }
        }
    }
    FontFace::Builtin
}

/// Draw `text` onto `layer` at (x, y) with the given face, size, and
/// colour. (x, y) is the top-left of the text box for both face kinds.
pub fn draw_text(
    layer: &mut RgbaImage,
    face: &FontFace,
    text: &str,
    x: i32,
    y: i32,
    size: u32,
    colour: Colour,
) {
    match face {
        FontFace::Truetype(font) => {
            draw_text_mut(
                layer,
                colour.to_pixel(),
                x,
                y,
                PxScale::from(size as f32),
                font,
                text,
            );
        }
        FontFace::Builtin => draw_bitmap_text(layer, text, x, y, size, colour),
    }
}

/// Glyph cell width of the builtin face.
const CELL_WIDTH: u32 = 5;

/// Glyph cell height of the builtin face.
const CELL_HEIGHT: u32 = 7;

/// Draw text using the builtin 5x7 bitmap face, scaled up to roughly
/// match the requested pixel size.
fn draw_bitmap_text(layer: &mut RgbaImage, text: &str, x: i32, y: i32, size: u32, colour: Colour) {
    // Cell height plus one row of leading is ~8px at scale 1.
    let scale = (size / (CELL_HEIGHT + 1)).max(1) as i32;
    let advance = (CELL_WIDTH as i32 + 1) * scale;
    let pixel = colour.to_pixel();
    let (width, height) = layer.dimensions();

    for (index, ch) in text.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        let rows = bitmap_glyph(ch);
        let origin_x = x + index as i32 * advance;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..CELL_WIDTH {
                if bits & (1 << (CELL_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                // One filled scale x scale block per set bit.
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = origin_x + col as i32 * scale + sx;
                        let py = y + row as i32 * scale + sy;
                        if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                            layer.put_pixel(px as u32, py as u32, pixel);
                        }
                    }
                }
            }
        }
    }
}

/// Row bitmap for one builtin glyph. Lowercase maps to uppercase;
/// characters outside the table render as a hollow box.
fn bitmap_glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '&' => [0x08, 0x14, 0x14, 0x08, 0x15, 0x12, 0x0D],
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}
