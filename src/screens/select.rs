//! Character select screen
//!
//! A carousel over the roster. Browsing left/right wraps around and kicks
//! off a cosmetic slide: the incoming pane starts one screen-width off to
//! the side and eases to rest. While the slide is live, further directional
//! input is ignored (at most one transition in flight), but confirm, cancel,
//! and window-close stay active throughout.

use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::input::{InputContext, ScreenAction};
use crate::roster::Character;
use crate::text::{draw_simple_text, draw_text_centered, text_width};
use crate::ui::draw_star_rating;

use super::{AppContext, Screen, ARCADE_YELLOW, BLACK, GRAY, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE};

/// Longest backstory excerpt shown before truncating with `...`.
const BACKSTORY_LIMIT: usize = 90;

/// Characters per wrapped backstory line at the detail text scale.
const WRAP_WIDTH: usize = 48;

const DETAIL_SCALE: u32 = 2;
const NAME_SCALE: u32 = 4;

/// Cosmetic slide for carousel browsing
///
/// Idle at offset zero; active while easing back from a full screen-width
/// displacement. The offset decays geometrically and snaps to rest once it
/// gets close, so the effect can be disabled entirely by never starting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    offset: i32,
}

impl SlideTransition {
    const SNAP_DISTANCE: i32 = 5;

    pub fn idle() -> Self {
        SlideTransition { offset: 0 }
    }

    pub fn is_active(&self) -> bool {
        self.offset != 0
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Starts a slide from `offset` pixels away.
    pub fn start(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// Eases toward rest; snaps to zero under the snap distance.
    pub fn update(&mut self) {
        if self.offset == 0 {
            return;
        }
        self.offset = (self.offset as f32 * 0.8) as i32;
        if self.offset.abs() < Self::SNAP_DISTANCE {
            self.offset = 0;
        }
    }
}

pub struct CharacterSelectScreen {
    roster: Vec<Character>,
    current: usize,
    slide: SlideTransition,
}

impl CharacterSelectScreen {
    /// The roster loader guarantees at least one character.
    pub fn new(roster: Vec<Character>) -> Self {
        CharacterSelectScreen {
            roster,
            current: 0,
            slide: SlideTransition::idle(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_character(&self) -> &Character {
        &self.roster[self.current]
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_active()
    }

    /// Applies one action. Returns the next screen once a choice is made.
    pub fn handle_action(&mut self, action: &ScreenAction) -> Option<Screen> {
        match action {
            ScreenAction::Quit => Some(Screen::Exit),
            ScreenAction::Cancel => Some(Screen::Menu),
            ScreenAction::Confirm => Some(Screen::Gameplay {
                character: self.current_character().clone(),
            }),
            ScreenAction::MenuRight if !self.slide.is_active() => {
                self.current = (self.current + 1) % self.roster.len();
                self.slide.start(-(SCREEN_WIDTH as i32));
                None
            }
            ScreenAction::MenuLeft if !self.slide.is_active() => {
                self.current = (self.current + self.roster.len() - 1) % self.roster.len();
                self.slide.start(SCREEN_WIDTH as i32);
                None
            }
            _ => None,
        }
    }

    pub fn update(&mut self) {
        self.slide.update();
    }

    pub fn run(&mut self, ctx: &mut AppContext) -> Result<Screen, String> {
        ctx.input.set_context(InputContext::CharacterSelect);

        loop {
            let actions = ctx.input.poll_actions(ctx.event_pump);
            for action in &actions {
                let before = self.current;
                let outcome = self.handle_action(action);
                if self.current != before {
                    ctx.audio.play_hover();
                }
                if matches!(action, ScreenAction::Confirm) {
                    ctx.audio.play_select();
                }
                if let Some(screen) = outcome {
                    if let Screen::Gameplay { character } = &screen {
                        println!("Character selected: {}", character.name);
                    }
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

        let offset = self.slide.offset();
        let character = self.current_character();

        // Portrait block with a white frame
        let portrait = Rect::new(50 + offset, 100, 250, 400);
        canvas.set_draw_color(character.display_color());
        canvas.fill_rect(portrait)?;
        canvas.set_draw_color(WHITE);
        for inset in 0..3 {
            canvas.draw_rect(Rect::new(
                portrait.x() - inset,
                portrait.y() - inset,
                portrait.width() + inset as u32 * 2,
                portrait.height() + inset as u32 * 2,
            ))?;
        }

        let text_x = 350 + offset;
        draw_simple_text(canvas, &character.name, text_x, 100, ARCADE_YELLOW, NAME_SCALE)?;

        for (line_index, line) in wrap_line(&summary_line(&character.backstory), WRAP_WIDTH)
            .iter()
            .enumerate()
        {
            draw_simple_text(
                canvas,
                line,
                text_x,
                150 + line_index as i32 * 25,
                WHITE,
                DETAIL_SCALE,
            )?;
        }

        self.render_ability(canvas, text_x, 250, "PASSIVE", &character.passive.name, character.passive.rank)?;
        self.render_ability(canvas, text_x, 320, "SPECIAL", &character.special.name, character.special.rank)?;

        draw_text_centered(
            canvas,
            "USE < OR > TO NAVIGATE, ENTER TO SELECT",
            SCREEN_WIDTH as i32 / 2,
            SCREEN_HEIGHT as i32 - 50,
            GRAY,
            DETAIL_SCALE,
        )?;

        Ok(())
    }

    fn render_ability(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        kind: &str,
        name: &str,
        rank: u8,
    ) -> Result<(), String> {
        let label = format!("{}: {}", kind, name);
        draw_simple_text(canvas, &label, x, y, WHITE, DETAIL_SCALE)?;
        let stars_x = x + text_width(&label, DETAIL_SCALE) as i32 + 20;
        draw_star_rating(canvas, stars_x, y - 4, rank)
    }
}

/// Backstory excerpt: at most [`BACKSTORY_LIMIT`] characters plus `...`.
fn summary_line(backstory: &str) -> String {
    if backstory.chars().count() <= BACKSTORY_LIMIT {
        return backstory.to_string();
    }
    let cut: String = backstory.chars().take(BACKSTORY_LIMIT).collect();
    format!("{}...", cut)
}

/// Greedy word wrap; a word longer than the width gets its own line.
fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
