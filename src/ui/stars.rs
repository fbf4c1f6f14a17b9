//! Star ratings for character abilities
//!
//! Each ability shows a row of five star glyphs: the first `rank` stars in
//! the filled color, the rest in the unfilled color.

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::text::draw_simple_text;

/// Number of star slots in a rating row.
pub const STAR_SLOTS: usize = 5;

/// Horizontal distance between star centers, matching the select layout.
const STAR_SPACING: i32 = 22;

const STAR_SCALE: u32 = 3;

const FILLED_COLOR: Color = Color::RGB(234, 179, 8);
const UNFILLED_COLOR: Color = Color::RGB(100, 100, 100);

/// Which of the five slots are filled for a given rank.
///
/// Ranks above five fill everything; rank zero fills nothing.
pub fn star_states(rank: u8) -> [bool; STAR_SLOTS] {
    let mut states = [false; STAR_SLOTS];
    let filled = (rank as usize).min(STAR_SLOTS);
    for state in states.iter_mut().take(filled) {
        *state = true;
    }
    states
}

/// Renders a five-slot star row starting at `x`, `y`.
pub fn draw_star_rating(
    canvas: &mut Canvas<Window>,
    x: i32,
    y: i32,
    rank: u8,
) -> Result<(), String> {
    for (slot, filled) in star_states(rank).iter().enumerate() {
        let color = if *filled { FILLED_COLOR } else { UNFILLED_COLOR };
        draw_simple_text(canvas, "*", x + slot as i32 * STAR_SPACING, y, color, STAR_SCALE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_four_fills_four_of_five() {
        assert_eq!(star_states(4), [true, true, true, true, false]);
    }

    #[test]
    fn test_rank_five_leaves_no_empty_slots() {
        assert_eq!(star_states(5), [true; 5]);
    }

    #[test]
    fn test_rank_zero_fills_nothing() {
        assert_eq!(star_states(0), [false; 5]);
    }

    #[test]
    fn test_oversized_rank_clamps_to_five() {
        assert_eq!(star_states(9), [true; 5]);
    }
}
