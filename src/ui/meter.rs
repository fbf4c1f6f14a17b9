//! HUD meter component for health and aura bars
//!
//! A meter is a fixed-width track with a fill proportional to the value it
//! displays. Meters are stateless components: create one per style and call
//! `render()` with a position and value for each fighter.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Highest value a meter displays. Health and aura both run 0-100.
pub const METER_MAX: i32 = 100;

/// Configuration for meter appearance
///
/// The default style is the health bar (red track, green fill). Use
/// [`Meter::aura`] for the aura preset or build a custom style.
#[derive(Debug, Clone)]
pub struct MeterStyle {
    /// Track width in pixels (the full-value fill width)
    pub width: u32,

    /// Track height in pixels
    pub height: u32,

    /// Track color (shown where the value is depleted)
    pub track_color: Color,

    /// Fill color for the value portion
    pub fill_color: Color,

    /// Border color
    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for MeterStyle {
    fn default() -> Self {
        MeterStyle {
            width: 400,
            height: 30,
            track_color: Color::RGB(255, 0, 0),  // Red
            fill_color: Color::RGB(0, 255, 0),   // Green
            border_color: Color::RGB(255, 255, 255),
            border_thickness: 3,
        }
    }
}

/// A track-and-fill bar drawn at a fixed HUD position
///
/// With the default 400-pixel track and a 0-100 value range, the fill grows
/// by exactly 4 pixels per point.
pub struct Meter {
    style: MeterStyle,
}

impl Meter {
    /// Creates a meter with the default (health) styling
    pub fn new() -> Self {
        Meter {
            style: MeterStyle::default(),
        }
    }

    /// Creates a meter with the aura styling: a slimmer bar with a blue
    /// track and yellow fill
    pub fn aura() -> Self {
        Meter::with_style(MeterStyle {
            height: 20,
            track_color: Color::RGB(0, 81, 255),
            fill_color: Color::RGB(255, 204, 0),
            border_thickness: 2,
            ..Default::default()
        })
    }

    /// Creates a meter with custom styling
    pub fn with_style(style: MeterStyle) -> Self {
        Meter { style }
    }

    /// Fill width in pixels for a value, clamped to the 0-100 range.
    ///
    /// The fill is linear in the value: width * value / 100.
    pub fn fill_width(&self, value: i32) -> u32 {
        let clamped = value.clamp(0, METER_MAX) as u32;
        self.style.width * clamped / METER_MAX as u32
    }

    /// Renders the meter at a fixed position
    ///
    /// # Parameters
    ///
    /// - `canvas`: SDL2 canvas to render to
    /// - `x`, `y`: Top-left corner of the track
    /// - `value`: Displayed value, clamped to 0-100
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        value: i32,
    ) -> Result<(), String> {
        // Track (full width, shows the depleted portion)
        canvas.set_draw_color(self.style.track_color);
        canvas.fill_rect(Rect::new(x, y, self.style.width, self.style.height))?;

        // Fill (value portion)
        let fill = self.fill_width(value);
        if fill > 0 {
            canvas.set_draw_color(self.style.fill_color);
            canvas.fill_rect(Rect::new(x, y, fill, self.style.height))?;
        }

        // Border, drawn last so it sits on top of the fill edge
        if self.style.border_thickness > 0 {
            canvas.set_draw_color(self.style.border_color);
            for inset in 0..self.style.border_thickness {
                let shrink = inset * 2;
                if shrink >= self.style.width || shrink >= self.style.height {
                    break;
                }
                canvas.draw_rect(Rect::new(
                    x + inset as i32,
                    y + inset as i32,
                    self.style.width - shrink,
                    self.style.height - shrink,
                ))?;
            }
        }

        Ok(())
    }

    /// Gets a reference to the current style
    pub fn style(&self) -> &MeterStyle {
        &self.style
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self::new()
    }
}
