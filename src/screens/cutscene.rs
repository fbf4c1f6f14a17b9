//! Story interlude between campaign stages
//!
//! A few lines of text on black and a prompt. Kept deliberately dumb: no
//! timers, no animation, just wait for the player to read.

use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::input::{InputContext, ScreenAction};
use crate::text::draw_simple_text;

use super::{AppContext, BLACK, WHITE};

const LINE_X: i32 = 100;
const FIRST_LINE_Y: i32 = 250;
const LINE_SPACING: i32 = 40;
const LINE_SCALE: u32 = 3;

const INTERLUDE_LINES: [&str; 4] = [
    "AFTER DEFEATING YOUR FIRST OPPONENT,",
    "YOU PREPARE FOR THE ULTIMATE SHOWDOWN.",
    "NEXT OPPONENT: SHADOW VIPER.",
    "PRESS ENTER TO CONTINUE OR ESC FOR MENU.",
];

/// How the player left the interlude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutsceneOutcome {
    Continue,
    BackToMenu,
    Exit,
}

pub struct CutsceneScreen {
    lines: &'static [&'static str],
}

impl CutsceneScreen {
    /// The interlude shown between the first and second campaign stage.
    pub fn interlude() -> Self {
        CutsceneScreen {
            lines: &INTERLUDE_LINES,
        }
    }

    pub fn handle_action(&self, action: &ScreenAction) -> Option<CutsceneOutcome> {
        match action {
            ScreenAction::Quit => Some(CutsceneOutcome::Exit),
            ScreenAction::Confirm => Some(CutsceneOutcome::Continue),
            ScreenAction::Cancel => Some(CutsceneOutcome::BackToMenu),
            _ => None,
        }
    }

    pub fn run(&self, ctx: &mut AppContext) -> Result<CutsceneOutcome, String> {
        ctx.input.set_context(InputContext::Cutscene);

        loop {
            let actions = ctx.input.poll_actions(ctx.event_pump);
            for action in &actions {
                if let Some(outcome) = self.handle_action(action) {
                    if *action == ScreenAction::Confirm {
                        ctx.audio.play_select();
                    }
                    return Ok(outcome);
                }
            }

            self.render(ctx.canvas)?;
            ctx.canvas.present();
            ctx.clock.wait_for_next_tick();
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(BLACK);
        canvas.clear();

        for (row, line) in self.lines.iter().enumerate() {
            draw_simple_text(
                canvas,
                line,
                LINE_X,
                FIRST_LINE_Y + row as i32 * LINE_SPACING,
                WHITE,
                LINE_SCALE,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_continues_the_campaign() {
        let scene = CutsceneScreen::interlude();
        assert_eq!(
            scene.handle_action(&ScreenAction::Confirm),
            Some(CutsceneOutcome::Continue)
        );
    }

    #[test]
    fn test_escape_bails_to_menu() {
        let scene = CutsceneScreen::interlude();
        assert_eq!(
            scene.handle_action(&ScreenAction::Cancel),
            Some(CutsceneOutcome::BackToMenu)
        );
    }

    #[test]
    fn test_other_input_keeps_waiting() {
        let scene = CutsceneScreen::interlude();
        assert_eq!(scene.handle_action(&ScreenAction::MenuDown), None);
        assert_eq!(scene.handle_action(&ScreenAction::BlockPressed), None);
    }

    #[test]
    fn test_window_close_exits() {
        let scene = CutsceneScreen::interlude();
        assert_eq!(
            scene.handle_action(&ScreenAction::Quit),
            Some(CutsceneOutcome::Exit)
        );
    }
}
