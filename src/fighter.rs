//! Fighter entity
//!
//! A fighter is a colored rectangle with HUD-facing state: health, aura,
//! rounds won, and the block/charge flags driven by input. Nothing in this
//! version deals damage, so health and aura stay at full; the HUD meters
//! clamp to 0-100 at the display boundary regardless.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const FIGHTER_WIDTH: u32 = 100;
pub const FIGHTER_HEIGHT: u32 = 200;

/// Starting (and, without a damage model, permanent) meter value.
pub const FULL_METER: i32 = 100;

/// Degrees the aura ring turns per tick while charging.
const AURA_PHASE_STEP: i32 = 1;

/// Angular gap between the orbiting aura markers.
const AURA_MARKER_SPACING: i32 = 30;

const AURA_RING_RADIUS: f32 = 60.0;
const AURA_MARKER_SIZE: u32 = 10;
const AURA_COLOR: Color = Color::RGB(147, 0, 211);

pub struct Fighter {
    pub name: String,
    pub color: Color,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub aura: i32,
    pub rounds_won: u32,
    pub is_blocking: bool,
    pub is_charging: bool,
    aura_phase: i32,
}

impl Fighter {
    pub fn new(name: &str, color: Color, x: i32, y: i32) -> Self {
        Fighter {
            name: name.to_string(),
            color,
            x,
            y,
            health: FULL_METER,
            aura: FULL_METER,
            rounds_won: 0,
            is_blocking: false,
            is_charging: false,
            aura_phase: 0,
        }
    }

    /// Advances one tick of animation state. The aura ring only turns while
    /// the charge key is held; the phase wraps at 360 degrees.
    pub fn update(&mut self) {
        if self.is_charging {
            self.aura_phase = (self.aura_phase + AURA_PHASE_STEP) % 360;
        }
    }

    /// Current aura ring rotation in degrees, 0-359.
    pub fn aura_phase(&self) -> i32 {
        self.aura_phase
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.color);
        canvas.fill_rect(Rect::new(self.x, self.y, FIGHTER_WIDTH, FIGHTER_HEIGHT))?;

        if self.is_charging {
            self.render_aura_ring(canvas)?;
        }

        Ok(())
    }

    /// Twelve markers orbiting the fighter's center, rotated by the phase.
    fn render_aura_ring(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(AURA_COLOR);
        let center_x = (self.x + FIGHTER_WIDTH as i32 / 2) as f32;
        let center_y = (self.y + FIGHTER_HEIGHT as i32 / 2) as f32;

        for base_angle in (0..360).step_by(AURA_MARKER_SPACING as usize) {
            let radians = ((base_angle + self.aura_phase) as f32).to_radians();
            let marker_x = center_x + AURA_RING_RADIUS * radians.cos();
            let marker_y = center_y + AURA_RING_RADIUS * radians.sin();
            canvas.fill_rect(Rect::new(
                marker_x as i32 - AURA_MARKER_SIZE as i32 / 2,
                marker_y as i32 - AURA_MARKER_SIZE as i32 / 2,
                AURA_MARKER_SIZE,
                AURA_MARKER_SIZE,
            ))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fighter() -> Fighter {
        Fighter::new("CRUSHER", Color::RGB(37, 99, 235), 200, 400)
    }

    #[test]
    fn test_new_fighter_starts_at_full_meters() {
        let fighter = test_fighter();
        assert_eq!(fighter.health, FULL_METER);
        assert_eq!(fighter.aura, FULL_METER);
        assert_eq!(fighter.rounds_won, 0);
        assert!(!fighter.is_blocking);
        assert!(!fighter.is_charging);
    }

    #[test]
    fn test_aura_phase_only_advances_while_charging() {
        let mut fighter = test_fighter();
        fighter.update();
        assert_eq!(fighter.aura_phase(), 0);

        fighter.is_charging = true;
        fighter.update();
        fighter.update();
        assert_eq!(fighter.aura_phase(), 2);

        fighter.is_charging = false;
        fighter.update();
        assert_eq!(fighter.aura_phase(), 2);
    }

    #[test]
    fn test_aura_phase_wraps_at_360() {
        let mut fighter = test_fighter();
        fighter.is_charging = true;
        for _ in 0..360 {
            fighter.update();
        }
        assert_eq!(fighter.aura_phase(), 0);

        fighter.update();
        assert_eq!(fighter.aura_phase(), 1);
    }
}
