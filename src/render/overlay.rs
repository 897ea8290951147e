//! Help overlay: a translucent band across the top of the surface with key summaries

use crate::render::canvas::Canvas;
use crate::render::font::{GLYPH_HEIGHT, draw_text, text_width};
use crate::spatial::rect::Rect;

const BAND_ALPHA: f64 = 160.0 / 255.0;
const BAND_COLOR: [u8; 4] = [0, 0, 0, 255];
const TEXT_COLOR: [u8; 4] = [235, 235, 240, 255];
const TEXT_SCALE: u32 = 2;
const PADDING: u32 = 6;
const LINE_GAP: u32 = 4;

/// Break `text` into lines no wider than `max_width` pixels at `scale`
///
/// Entries separated by two or more spaces are kept whole; an entry wider than
/// the limit gets a line of its own.
pub fn wrap(text: &str, max_width: u32, scale: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for entry in text.split("  ").map(str::trim).filter(|entry| !entry.is_empty()) {
        let candidate = if current.is_empty() {
            entry.to_string()
        } else {
            format!("{current}  {entry}")
        };
        if current.is_empty() || text_width(&candidate, scale) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, entry.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Height in pixels of a band holding `line_count` lines
pub fn band_height(line_count: usize) -> u32 {
    let line_height = GLYPH_HEIGHT * TEXT_SCALE + LINE_GAP;
    PADDING * 2 + line_height * line_count as u32
}

/// Shade a band across the top of the surface and print the help text in it
///
/// Each entry of `sections` is wrapped to the surface width independently.
pub fn draw_help(canvas: &mut Canvas, sections: &[&str]) {
    let max_width = canvas.width().saturating_sub(PADDING * 2);
    let lines: Vec<String> = sections
        .iter()
        .flat_map(|section| wrap(section, max_width, TEXT_SCALE))
        .collect();
    if lines.is_empty() {
        return;
    }

    let band = Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(band_height(lines.len())),
    );
    canvas.shade_rect(&band, BAND_COLOR, BAND_ALPHA);

    let line_height = i64::from(GLYPH_HEIGHT * TEXT_SCALE + LINE_GAP);
    let mut y = i64::from(PADDING);
    for line in &lines {
        draw_text(canvas, i64::from(PADDING), y, line, TEXT_SCALE, TEXT_COLOR);
        y += line_height;
    }
}
