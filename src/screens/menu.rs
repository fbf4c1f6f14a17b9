//! Main menu screen
//!
//! Title with a pulsing glow, two floating fighter silhouettes, the
//! three-item list, and the studio footer. Selection wraps in both
//! directions; confirm either starts the character select, does nothing
//! (OPTIONS is reserved), or exits.

use chrono::Datelike;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::audio::MusicTrack;
use crate::input::{InputContext, ScreenAction};
use crate::text::{draw_simple_text, draw_text_centered, draw_text_glow, text_height, text_width};

use super::{
    AppContext, Screen, ARCADE_BLUE, ARCADE_RED, ARCADE_YELLOW, BLACK, GRAY, SCREEN_HEIGHT,
    SCREEN_WIDTH, WHITE,
};

pub const MENU_ITEMS: [&str; 3] = ["START FIGHT", "OPTIONS", "EXIT"];

const TITLE_TOP: &str = "UNTITLED";
const TITLE_BOTTOM: &str = "BOXING";
const TITLE_SCALE: u32 = 8;
const ITEM_SCALE: u32 = 4;
const FIRST_ITEM_Y: i32 = 300;
const ITEM_SPACING: i32 = 60;

pub struct MenuScreen {
    selected: usize,
    animation_counter: u32,
}

impl MenuScreen {
    pub fn new() -> Self {
        MenuScreen {
            selected: 0,
            animation_counter: 0,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Applies one action. Returns the next screen once the menu is done.
    pub fn handle_action(&mut self, action: &ScreenAction) -> Option<Screen> {
        match action {
            ScreenAction::Quit => Some(Screen::Exit),
            ScreenAction::MenuUp => {
                self.selected = (self.selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                None
            }
            ScreenAction::MenuDown => {
                self.selected = (self.selected + 1) % MENU_ITEMS.len();
                None
            }
            ScreenAction::Confirm => match self.selected {
                0 => Some(Screen::CharacterSelect),
                2 => Some(Screen::Exit),
                _ => None, // OPTIONS is reserved; selection stays put
            },
            _ => None,
        }
    }

    pub fn update(&mut self) {
        self.animation_counter = self.animation_counter.wrapping_add(1);
    }

    pub fn run(&mut self, ctx: &mut AppContext) -> Result<Screen, String> {
        ctx.input.set_context(InputContext::Menu);
        ctx.audio.play_music(MusicTrack::Menu);

        loop {
            let actions = ctx.input.poll_actions(ctx.event_pump);
            for action in &actions {
                let before = self.selected;
                let outcome = self.handle_action(action);
                if self.selected != before {
                    ctx.audio.play_hover();
                }
                if matches!(action, ScreenAction::Confirm) {
                    ctx.audio.play_select();
                }
                if let Some(screen) = outcome {
                    return Ok(screen);
                }
            }

            self.update();
            self.render(ctx.canvas)?;
            ctx.canvas.present();
            ctx.clock.wait_for_next_tick();
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(BLACK);
        canvas.clear();

        let center_x = SCREEN_WIDTH as i32 / 2;

        // Title glow breathes with the animation counter
        let pulse = ((self.animation_counter as f32 * 0.1).sin() + 1.0) * 0.5;
        let glow_amount = (3.0 + pulse * 5.0) as i32;
        draw_text_glow(
            canvas, TITLE_TOP, center_x, 100, WHITE, ARCADE_YELLOW, glow_amount, TITLE_SCALE,
        )?;
        draw_text_glow(
            canvas, TITLE_BOTTOM, center_x, 170, WHITE, ARCADE_YELLOW, glow_amount, TITLE_SCALE,
        )?;

        // Floating silhouettes, one rising while the other dips
        let float_offset = ((self.animation_counter as f32 * 0.05).sin() * 10.0) as i32;
        render_silhouette(canvas, 50, 250 + float_offset, ARCADE_BLUE)?;
        render_silhouette(
            canvas,
            SCREEN_WIDTH as i32 - 200,
            250 - float_offset,
            ARCADE_RED,
        )?;

        for (index, item) in MENU_ITEMS.iter().enumerate() {
            let item_y = FIRST_ITEM_Y + index as i32 * ITEM_SPACING;
            if index == self.selected {
                self.render_selected_item(canvas, item, center_x, item_y)?;
            } else {
                draw_text_centered(canvas, item, center_x, item_y, WHITE, ITEM_SCALE)?;
            }
        }

        let footer = format!("(C) {} G19 STUDIOS", chrono::Local::now().year());
        draw_text_centered(
            canvas,
            &footer,
            center_x,
            SCREEN_HEIGHT as i32 - 30,
            GRAY,
            2,
        )?;

        Ok(())
    }

    /// Highlight box plus side arrows around the selected label.
    fn render_selected_item(
        &self,
        canvas: &mut Canvas<Window>,
        item: &str,
        center_x: i32,
        item_y: i32,
    ) -> Result<(), String> {
        let label_width = text_width(item, ITEM_SCALE) as i32;
        let highlight = Rect::new(
            center_x - label_width / 2 - 15,
            item_y - 5,
            (label_width + 30) as u32,
            text_height(ITEM_SCALE) + 10,
        );
        canvas.set_draw_color(ARCADE_RED);
        canvas.draw_rect(highlight)?;

        draw_text_centered(canvas, item, center_x, item_y, ARCADE_YELLOW, ITEM_SCALE)?;
        draw_simple_text(canvas, ">", highlight.left() - 32, item_y, ARCADE_YELLOW, ITEM_SCALE)?;
        draw_simple_text(canvas, "<", highlight.right() + 12, item_y, ARCADE_YELLOW, ITEM_SCALE)?;
        Ok(())
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn render_silhouette(
    canvas: &mut Canvas<Window>,
    x: i32,
    y: i32,
    color: Color,
) -> Result<(), String> {
    let body = Rect::new(x, y, 150, 300);
    canvas.set_draw_color(color);
    canvas.fill_rect(body)?;
    canvas.set_draw_color(BLACK);
    canvas.draw_rect(body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_on_first_item() {
        let menu = MenuScreen::new();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_selection_wraps_both_directions() {
        let mut menu = MenuScreen::new();
        menu.handle_action(&ScreenAction::MenuUp);
        assert_eq!(menu.selected_index(), 2);

        menu.handle_action(&ScreenAction::MenuDown);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_repeated_down_lands_on_modulo_index() {
        let mut menu = MenuScreen::new();
        for _ in 0..4 {
            menu.handle_action(&ScreenAction::MenuDown);
        }
        // 4 presses from index 0 over 3 items
        assert_eq!(menu.selected_index(), 4 % MENU_ITEMS.len());
    }

    #[test]
    fn test_down_down_up_lands_on_second_item() {
        let mut menu = MenuScreen::new();
        menu.handle_action(&ScreenAction::MenuDown);
        menu.handle_action(&ScreenAction::MenuDown);
        menu.handle_action(&ScreenAction::MenuUp);
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn test_confirm_on_start_fight_opens_character_select() {
        let mut menu = MenuScreen::new();
        // Wander around first; only the final selection matters
        menu.handle_action(&ScreenAction::MenuDown);
        menu.handle_action(&ScreenAction::MenuUp);
        let outcome = menu.handle_action(&ScreenAction::Confirm);
        assert_eq!(outcome, Some(Screen::CharacterSelect));
    }

    #[test]
    fn test_confirm_on_options_is_a_no_op() {
        let mut menu = MenuScreen::new();
        menu.handle_action(&ScreenAction::MenuDown);
        let outcome = menu.handle_action(&ScreenAction::Confirm);
        assert_eq!(outcome, None);
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn test_confirm_on_exit_leaves_the_game() {
        let mut menu = MenuScreen::new();
        menu.handle_action(&ScreenAction::MenuUp); // wraps to EXIT
        let outcome = menu.handle_action(&ScreenAction::Confirm);
        assert_eq!(outcome, Some(Screen::Exit));
    }

    #[test]
    fn test_window_close_exits_from_any_selection() {
        let mut menu = MenuScreen::new();
        menu.handle_action(&ScreenAction::MenuDown);
        let outcome = menu.handle_action(&ScreenAction::Quit);
        assert_eq!(outcome, Some(Screen::Exit));
    }
}
