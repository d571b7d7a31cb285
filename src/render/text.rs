//! Text compositing: title, subtitle, and domain label.
//!
//! Each pass draws onto its own transparent layer which is composited
//! onto the accumulating image, later passes on top. The title treatment
//! follows the background style: pattern pages get the chromatic
//! aberration effect, mesh pages a plain drop shadow.

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::types::{Background, Colour, PageConfig};

use super::compose::{composite_over, layer};
use super::font::{draw_text, FontFace, FontSet};

/// Left margin for all text.
const TEXT_X: i32 = 80;

/// Horizontal shift of the chromatic tint passes.
const CHROMATIC_OFFSET: i32 = 3;

/// Alpha of the chromatic tint passes.
const TINT_ALPHA: u8 = 80;

/// Drop shadow offset for mesh-style titles.
const SHADOW_OFFSET: (i32, i32) = (4, 2);

const SUBTITLE_SIZE: u32 = 36;
const SUBTITLE_ALPHA: u8 = 150;

const DOMAIN_SIZE: u32 = 32;
const DOMAIN_ALPHA: u8 = 130;

/// Gap between the title box and the subtitle.
const SUBTITLE_GAP: i32 = 30;

/// Compose all text for `page` onto `base`.
pub fn compose(base: &mut RgbaImage, page: &PageConfig, fonts: &FontSet) {
    let (width, height) = base.dimensions();
    let title_y = page.background.title_y();

    // Title, on its own layer.
    let mut title_layer = layer(width, height);
    match &page.background {
        Background::Pattern { accent, .. } => draw_chromatic_title(
            &mut title_layer,
            &fonts.bold,
            &page.title,
            title_y,
            page.title_size,
            *accent,
        ),
        Background::Mesh { .. } => draw_shadowed_title(
            &mut title_layer,
            &fonts.bold,
            &page.title,
            title_y,
            page.title_size,
        ),
    }
    composite_over(base, &title_layer);

    // Subtitle sits below the title box.
    if let Some(subtitle) = &page.subtitle {
        let subtitle_y = title_y + page.title_size as i32 + SUBTITLE_GAP;
        let mut subtitle_layer = layer(width, height);
        draw_text(
            &mut subtitle_layer,
            &fonts.regular,
            subtitle,
            TEXT_X,
            subtitle_y,
            SUBTITLE_SIZE,
            Colour::DARK.with_alpha(SUBTITLE_ALPHA),
        );
        composite_over(base, &subtitle_layer);
    }

    // Domain block near the bottom edge: accent square, then the label.
    let domain_y = height as i32 - 100;
    draw_filled_rect_mut(
        base,
        Rect::at(TEXT_X, domain_y - 45).of_size(40, 40),
        page.background.accent().to_pixel(),
    );

    let mut domain_layer = layer(width, height);
    draw_text(
        &mut domain_layer,
        &fonts.regular,
        &page.domain,
        TEXT_X,
        domain_y,
        DOMAIN_SIZE,
        Colour::DARK.with_alpha(DOMAIN_ALPHA),
    );
    composite_over(base, &domain_layer);
}

/// Chromatic aberration: tinted duplicates offset left and right, solid
/// dark on top.
fn draw_chromatic_title(
    layer: &mut RgbaImage,
    face: &FontFace,
    title: &str,
    y: i32,
    size: u32,
    accent: Colour,
) {
    draw_text(
        layer,
        face,
        title,
        TEXT_X - CHROMATIC_OFFSET,
        y,
        size,
        Colour::COBALT.with_alpha(TINT_ALPHA),
    );
    draw_text(
        layer,
        face,
        title,
        TEXT_X + CHROMATIC_OFFSET,
        y,
        size,
        accent.with_alpha(TINT_ALPHA),
    );
    draw_text(layer, face, title, TEXT_X, y, size, Colour::DARK);
}

/// Dark drop shadow, white title on top.
fn draw_shadowed_title(layer: &mut RgbaImage, face: &FontFace, title: &str, y: i32, size: u32) {
    draw_text(
        layer,
        face,
        title,
        TEXT_X + SHADOW_OFFSET.0,
        y + SHADOW_OFFSET.1,
        size,
        Colour::DARK,
    );
    draw_text(layer, face, title, TEXT_X, y, size, Colour::WHITE);
}
