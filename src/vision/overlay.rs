// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Grid and zone-highlight overlay rendering
//!
//! Pure drawing utilities over the fixed 3x3 grid. The highlight rectangles
//! are grid cells picked by the text-to-zone mapper, not detections; the
//! rendering deliberately keeps that fixed-grid honesty.

use anyhow::Result;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::collections::BTreeSet;
use std::io::Cursor;

use crate::mapper::{zone_to_region, ZoneLabel};

/// Grid line color (muted yellow)
const GRID_COLOR: Rgb<u8> = Rgb([200, 200, 100]);
/// Grid line width in pixels
const GRID_LINE_WIDTH: u32 = 2;

/// Highlight outline color (green)
const HIGHLIGHT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Highlight outline thickness in pixels
const HIGHLIGHT_THICKNESS: u32 = 3;

/// Render the 3x3 reference grid onto a copy of the image
///
/// Lines sit on the interior cell boundaries used by
/// [`zone_to_region`], so the grid matches the highlight regions exactly.
pub fn draw_grid(image: &DynamicImage) -> RgbImage {
    let mut out = image.to_rgb8();
    let (w, h) = out.dimensions();
    let cell_w = w / 3;
    let cell_h = h / 3;

    for i in 1..3u32 {
        fill_rect(&mut out, i * cell_w, 0, GRID_LINE_WIDTH, h, GRID_COLOR);
        fill_rect(&mut out, 0, i * cell_h, w, GRID_LINE_WIDTH, GRID_COLOR);
    }

    out
}

/// Render green outlines around each detected zone onto a copy of the image
pub fn draw_zone_highlights(image: &DynamicImage, zones: &BTreeSet<ZoneLabel>) -> RgbImage {
    let mut out = image.to_rgb8();
    let (w, h) = out.dimensions();

    for zone in zones {
        let r = zone_to_region(*zone, w, h);
        let t = HIGHLIGHT_THICKNESS;
        // top, bottom, left, right bands of the outline
        fill_rect(&mut out, r.x, r.y, r.width, t, HIGHLIGHT_COLOR);
        fill_rect(
            &mut out,
            r.x,
            (r.y + r.height).saturating_sub(t),
            r.width,
            t,
            HIGHLIGHT_COLOR,
        );
        fill_rect(&mut out, r.x, r.y, t, r.height, HIGHLIGHT_COLOR);
        fill_rect(
            &mut out,
            (r.x + r.width).saturating_sub(t),
            r.y,
            t,
            r.height,
            HIGHLIGHT_COLOR,
        );
    }

    out
}

/// Encode a rendered overlay as PNG bytes for the HTTP surface
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image.clone()).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Fill a rectangle, clamped to the image bounds
fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    for px in x..(x + width).min(w) {
        for py in y..(y + height).min(h) {
            img.put_pixel(px, py, color);
        }
    }
}
