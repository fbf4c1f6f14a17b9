//! Bitmap Text Rendering
//!
//! This module provides procedural text rendering using a 5x7 bitmap font.
//! Characters are rendered using SDL2 rectangles, supporting scaling, colors,
//! centering, and a pulsing glow used by the title screen.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Horizontal advance per character in font units (5 pixels + 1 spacing).
const CHAR_ADVANCE: u32 = 6;

/// 5x7 bitmap font patterns (1 = pixel on, 0 = pixel off)
///
/// Lookup is case-insensitive; unknown characters render as a full block.
fn glyph_pattern(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '*' => [0b00100, 0b10101, 0b01110, 0b11111, 0b01110, 0b10101, 0b00100],
        '\'' => [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '"' => [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown
    }
}

/// Renders bitmap text using procedural rectangles (5x7 font)
///
/// # Parameters
///
/// - `canvas`: SDL2 canvas to render to
/// - `text`: Text string to render (case-insensitive)
/// - `x`, `y`: Top-left position in pixels
/// - `color`: Text color
/// - `scale`: Scaling factor (1 = 5x7 pixels, 2 = 10x14 pixels, etc.)
///
/// # Returns
///
/// - `Ok(())` on success
/// - `Err(String)` if SDL2 rendering fails
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = CHAR_ADVANCE * scale;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + (i as i32 * char_width as i32);
        let pattern = glyph_pattern(c);

        // Draw the character pixel by pixel
        for (row, &pattern_row) in pattern.iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + (col * pixel_size),
                        y + (row as i32 * pixel_size),
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Pixel width of `text` at `scale`, without the trailing character gap.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    count * CHAR_ADVANCE * scale - scale
}

/// Height of one line of text at `scale`.
pub fn text_height(scale: u32) -> u32 {
    7 * scale
}

/// Renders text horizontally centered on `center_x`.
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    center_x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let x = center_x - text_width(text, scale) as i32 / 2;
    draw_simple_text(canvas, text, x, y, color, scale)
}

/// Renders centered text with a glow halo behind it.
///
/// The glow is the same text stamped at offsets up to `glow_amount` pixels
/// in each direction (every other pixel, to keep the fill cost down), with
/// the main color drawn last on top.
pub fn draw_text_glow(
    canvas: &mut Canvas<Window>,
    text: &str,
    center_x: i32,
    y: i32,
    color: Color,
    glow_color: Color,
    glow_amount: i32,
    scale: u32,
) -> Result<(), String> {
    let x = center_x - text_width(text, scale) as i32 / 2;

    let mut dx = -glow_amount;
    while dx <= glow_amount {
        let mut dy = -glow_amount;
        while dy <= glow_amount {
            if dx != 0 || dy != 0 {
                draw_simple_text(canvas, text, x + dx, y + dy, glow_color, scale)?;
            }
            dy += 2;
        }
        dx += 2;
    }

    draw_simple_text(canvas, text, x, y, color, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 2), 10); // 5 pixels * scale
        assert_eq!(text_width("AB", 2), 22); // 2 chars * 12 - trailing gap
        assert_eq!(text_width("BOXING", 1), 35);
    }

    #[test]
    fn test_text_height_scales() {
        assert_eq!(text_height(1), 7);
        assert_eq!(text_height(4), 28);
    }

    #[test]
    fn test_glyph_lookup_is_case_insensitive() {
        assert_eq!(glyph_pattern('a'), glyph_pattern('A'));
        assert_eq!(glyph_pattern('z'), glyph_pattern('Z'));
    }

    #[test]
    fn test_unknown_glyph_is_full_block() {
        assert_eq!(glyph_pattern('~'), [0b11111; 7]);
    }

    #[test]
    fn test_star_glyph_is_symmetric() {
        let star = glyph_pattern('*');
        for row in &star {
            // Each row reads the same left-to-right and right-to-left
            let mut mirrored = 0u8;
            for bit in 0..5 {
                if (row >> bit) & 1 == 1 {
                    mirrored |= 1 << (4 - bit);
                }
            }
            assert_eq!(*row, mirrored);
        }
    }
}
