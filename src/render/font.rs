//! Minimal 3x5 bitmap font for labels and the help overlay
//!
//! Covers digits, letters (case-insensitive) and the punctuation used by key
//! summaries. Characters without a glyph advance the pen like a space.

use crate::render::canvas::Canvas;

/// Glyph width in font pixels
pub const GLYPH_WIDTH: u32 = 3;
/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 5;

type Glyph = [u8; 5];

// One row per entry, most significant of the low three bits is the left column
const DIGITS: [Glyph; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const LETTERS: [Glyph; 26] = [
    [0b010, 0b101, 0b111, 0b101, 0b101],
    [0b110, 0b101, 0b110, 0b101, 0b110],
    [0b011, 0b100, 0b100, 0b100, 0b011],
    [0b110, 0b101, 0b101, 0b101, 0b110],
    [0b111, 0b100, 0b110, 0b100, 0b111],
    [0b111, 0b100, 0b110, 0b100, 0b100],
    [0b011, 0b100, 0b101, 0b101, 0b011],
    [0b101, 0b101, 0b111, 0b101, 0b101],
    [0b111, 0b010, 0b010, 0b010, 0b111],
    [0b001, 0b001, 0b001, 0b101, 0b010],
    [0b101, 0b101, 0b110, 0b101, 0b101],
    [0b100, 0b100, 0b100, 0b100, 0b111],
    [0b101, 0b111, 0b111, 0b101, 0b101],
    [0b110, 0b101, 0b101, 0b101, 0b101],
    [0b010, 0b101, 0b101, 0b101, 0b010],
    [0b110, 0b101, 0b110, 0b100, 0b100],
    [0b010, 0b101, 0b101, 0b110, 0b011],
    [0b110, 0b101, 0b110, 0b101, 0b101],
    [0b011, 0b100, 0b010, 0b001, 0b110],
    [0b111, 0b010, 0b010, 0b010, 0b010],
    [0b101, 0b101, 0b101, 0b101, 0b111],
    [0b101, 0b101, 0b101, 0b101, 0b010],
    [0b101, 0b101, 0b111, 0b111, 0b101],
    [0b101, 0b101, 0b010, 0b101, 0b101],
    [0b101, 0b101, 0b010, 0b010, 0b010],
    [0b111, 0b001, 0b010, 0b100, 0b111],
];

fn glyph(c: char) -> Option<Glyph> {
    let c = c.to_ascii_uppercase();
    if let Some(digit) = c.to_digit(10) {
        return DIGITS.get(digit as usize).copied();
    }
    if c.is_ascii_uppercase() {
        return LETTERS.get(usize::from(c as u8 - b'A')).copied();
    }
    Some(match c {
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '[' => [0b110, 0b100, 0b100, 0b100, 0b110],
        ']' => [0b011, 0b001, 0b001, 0b001, 0b011],
        '<' => [0b001, 0b010, 0b100, 0b010, 0b001],
        '>' => [0b100, 0b010, 0b001, 0b010, 0b100],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '?' => [0b111, 0b001, 0b010, 0b000, 0b010],
        _ => return None,
    })
}

/// Width in surface pixels of `text` at `scale`, zero for empty text
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    (chars * (GLYPH_WIDTH + 1)).saturating_sub(1) * scale.max(1)
}

/// Size in surface pixels of a rendered number at `scale`
pub fn text_size(value: u64, scale: u32) -> (u32, u32) {
    (text_width(&value.to_string(), scale), GLYPH_HEIGHT * scale.max(1))
}

/// Draw `text` with its top-left corner at `(x, y)`, clipped to the surface
pub fn draw_text(canvas: &mut Canvas, x: i64, y: i64, text: &str, scale: u32, color: [u8; 4]) {
    let scale = i64::from(scale.max(1));
    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b100 >> col) != 0 {
                        let px = pen_x + i64::from(col) * scale;
                        let py = y + row as i64 * scale;
                        for dy in 0..scale {
                            for dx in 0..scale {
                                canvas.put(px + dx, py + dy, color);
                            }
                        }
                    }
                }
            }
        }
        pen_x += i64::from(GLYPH_WIDTH + 1) * scale;
    }
}

/// Draw a decimal number with its top-left corner at `(x, y)`
pub fn draw_number(canvas: &mut Canvas, x: i64, y: i64, value: u64, scale: u32, color: [u8; 4]) {
    draw_text(canvas, x, y, &value.to_string(), scale, color);
}
