//! Fight level screen
//!
//! One round of boxing: two fighters, health and aura bars, the countdown,
//! round-win markers, and an animated arena background. The same component
//! runs every campaign stage; what differs between stages is carried by
//! [`LevelConfig`]. When the clock runs out the level freezes into an
//! end-of-round prompt that waits on confirm or cancel.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::assets::{self, BackgroundAnimation};
use crate::audio::MusicTrack;
use crate::clock::TICKS_PER_SECOND;
use crate::config::GameConfig;
use crate::fighter::Fighter;
use crate::input::{InputContext, ScreenAction};
use crate::roster::Character;
use crate::text::{draw_text_centered, text_height};
use crate::ui::Meter;

use super::{AppContext, BLACK, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE};

const ROUND_MARKER_COLOR: Color = Color::RGB(255, 204, 0);
const ROUND_MARKER_SIZE: u32 = 14;
const ROUND_MARKER_SPACING: i32 = 30;

const PLAYER_CORNER: (i32, i32) = (200, 400);
const OPPONENT_CORNER: (i32, i32) = (900, 400);

const TIMER_SCALE: u32 = 6;

/// Per-stage settings for the fight level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub opponent_name: String,
    pub opponent_color: Color,
    /// Directory of numbered background frames; `None` means a solid fill.
    pub background_dir: Option<String>,
    pub round_time_seconds: f32,
}

impl LevelConfig {
    /// The two campaign stages: the CPU warm-up in the underground arena,
    /// then the showdown against SHADOW VIPER.
    pub fn campaign(config: &GameConfig) -> Vec<LevelConfig> {
        vec![
            LevelConfig {
                opponent_name: "CPU".to_string(),
                opponent_color: Color::RGB(255, 0, 0),
                background_dir: Some("assets/backgrounds/underground".to_string()),
                round_time_seconds: config.round_time_seconds,
            },
            LevelConfig {
                opponent_name: "SHADOW VIPER".to_string(),
                opponent_color: Color::RGB(147, 0, 211),
                background_dir: None,
                round_time_seconds: config.round_time_seconds,
            },
        ]
    }
}

/// How a fight level hands control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Round finished and the player confirmed; the campaign moves on.
    Complete,
    /// Player backed out; return to the main menu.
    BackToMenu,
    /// Window closed.
    Exit,
}

/// Round countdown, counted in whole ticks so the expiry frame is exact.
///
/// The display shows whole seconds, truncated, and never goes negative.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    remaining_ticks: u32,
    active: bool,
}

impl RoundTimer {
    pub fn new(seconds: f32) -> Self {
        let ticks = (seconds.max(0.0) * TICKS_PER_SECOND as f32).round() as u32;
        RoundTimer {
            remaining_ticks: ticks,
            active: ticks > 0,
        }
    }

    /// Counts one tick down. Returns true on the tick the timer runs out.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_seconds(&self) -> f32 {
        self.remaining_ticks as f32 / TICKS_PER_SECOND as f32
    }

    /// Whole seconds for the countdown display.
    pub fn display_seconds(&self) -> u32 {
        self.remaining_ticks / TICKS_PER_SECOND
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelPhase {
    Fighting,
    RoundOver,
}

pub struct FightLevel<'a> {
    player: Fighter,
    opponent: Fighter,
    timer: RoundTimer,
    background: BackgroundAnimation<'a>,
    phase: LevelPhase,
    health_meter: Meter,
    aura_meter: Meter,
}

impl<'a> FightLevel<'a> {
    /// Builds the level, loading its background frames once up front.
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        player_character: &Character,
        config: LevelConfig,
        rounds_carried: u32,
    ) -> FightLevel<'a> {
        let background = match &config.background_dir {
            Some(dir) => BackgroundAnimation::new(
                assets::load_frame_sequence(texture_creator, dir),
                BLACK,
            ),
            None => BackgroundAnimation::solid(BLACK),
        };
        Self::with_background(player_character, config, rounds_carried, background)
    }

    /// Level construction with the background already decided; this is the
    /// seam the tests drive.
    pub fn with_background(
        player_character: &Character,
        config: LevelConfig,
        rounds_carried: u32,
        background: BackgroundAnimation<'a>,
    ) -> FightLevel<'a> {
        let mut player = Fighter::new(
            &player_character.name,
            player_character.display_color(),
            PLAYER_CORNER.0,
            PLAYER_CORNER.1,
        );
        player.rounds_won = rounds_carried;
        let opponent = Fighter::new(
            &config.opponent_name,
            config.opponent_color,
            OPPONENT_CORNER.0,
            OPPONENT_CORNER.1,
        );

        FightLevel {
            player,
            opponent,
            timer: RoundTimer::new(config.round_time_seconds),
            background,
            phase: LevelPhase::Fighting,
            health_meter: Meter::new(),
            aura_meter: Meter::aura(),
        }
    }

    pub fn is_round_over(&self) -> bool {
        self.phase == LevelPhase::RoundOver
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    /// Applies one action. Block and charge only work mid-round; once the
    /// round is over only confirm, cancel, and close are live.
    pub fn handle_action(&mut self, action: &ScreenAction) -> Option<LevelOutcome> {
        match self.phase {
            LevelPhase::Fighting => match action {
                ScreenAction::Quit => Some(LevelOutcome::Exit),
                ScreenAction::Cancel => Some(LevelOutcome::BackToMenu),
                ScreenAction::BlockPressed => {
                    self.player.is_blocking = true;
                    None
                }
                ScreenAction::BlockReleased => {
                    self.player.is_blocking = false;
                    None
                }
                ScreenAction::ChargePressed => {
                    self.player.is_charging = true;
                    None
                }
                ScreenAction::ChargeReleased => {
                    self.player.is_charging = false;
                    None
                }
                _ => None,
            },
            LevelPhase::RoundOver => match action {
                ScreenAction::Quit => Some(LevelOutcome::Exit),
                ScreenAction::Cancel => Some(LevelOutcome::BackToMenu),
                ScreenAction::Confirm => Some(LevelOutcome::Complete),
                _ => None,
            },
        }
    }

    /// Advances one tick. Everything freezes once the round is over; the
    /// prompt keeps redrawing the same frame.
    pub fn update(&mut self) {
        if self.phase != LevelPhase::Fighting {
            return;
        }

        self.player.update();
        self.opponent.update();
        self.background.update();

        if self.timer.tick() {
            self.player.rounds_won += 1;
            self.phase = LevelPhase::RoundOver;
            println!("Round over: {} wins", self.player.name);
        }
    }

    pub fn run(&mut self, ctx: &mut AppContext) -> Result<LevelOutcome, String> {
        ctx.audio.play_music(MusicTrack::Fight);
        println!(
            "Round start: {} vs {} (arena: {})",
            self.player.name,
            self.opponent.name,
            if self.background.is_animated() {
                "animated"
            } else {
                "plain"
            },
        );

        loop {
            ctx.input.set_context(match self.phase {
                LevelPhase::Fighting => InputContext::Fighting,
                LevelPhase::RoundOver => InputContext::RoundEnd,
            });

            let actions = ctx.input.poll_actions(ctx.event_pump);
            for action in &actions {
                if let Some(outcome) = self.handle_action(action) {
                    return Ok(outcome);
                }
            }

            self.update();
            self.render(ctx.canvas)?;
            ctx.canvas.present();
            ctx.clock.wait_for_next_tick();
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.background.render(canvas)?;
        self.player.render(canvas)?;
        self.opponent.render(canvas)?;
        self.render_hud(canvas)?;

        if self.phase == LevelPhase::RoundOver {
            self.render_round_banner(canvas)?;
        }

        Ok(())
    }

    fn render_hud(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.health_meter.render(canvas, 50, 50, self.player.health)?;
        self.health_meter.render(canvas, 750, 50, self.opponent.health)?;
        self.aura_meter.render(canvas, 50, 90, self.player.aura)?;
        self.aura_meter.render(canvas, 750, 90, self.opponent.aura)?;

        let countdown = self.timer.display_seconds().to_string();
        draw_text_centered(
            canvas,
            &countdown,
            SCREEN_WIDTH as i32 / 2,
            60 - text_height(TIMER_SCALE) as i32 / 2,
            WHITE,
            TIMER_SCALE,
        )?;

        self.render_round_markers(canvas)
    }

    /// Win markers grow outward from each fighter's top corner.
    fn render_round_markers(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(ROUND_MARKER_COLOR);
        let half = ROUND_MARKER_SIZE as i32 / 2;

        for marker in 0..self.player.rounds_won as i32 {
            canvas.fill_rect(Rect::new(
                50 + marker * ROUND_MARKER_SPACING - half,
                130 - half,
                ROUND_MARKER_SIZE,
                ROUND_MARKER_SIZE,
            ))?;
        }
        for marker in 0..self.opponent.rounds_won as i32 {
            canvas.fill_rect(Rect::new(
                SCREEN_WIDTH as i32 - 50 - marker * ROUND_MARKER_SPACING - half,
                130 - half,
                ROUND_MARKER_SIZE,
                ROUND_MARKER_SIZE,
            ))?;
        }

        Ok(())
    }

    fn render_round_banner(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let center_y = SCREEN_HEIGHT as i32 / 2;

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, 160));
        canvas.fill_rect(Rect::new(0, center_y - 80, SCREEN_WIDTH, 160))?;
        canvas.set_blend_mode(BlendMode::None);

        draw_text_centered(
            canvas,
            "YOU WIN!",
            SCREEN_WIDTH as i32 / 2,
            center_y - 50,
            ROUND_MARKER_COLOR,
            TIMER_SCALE,
        )?;
        draw_text_centered(
            canvas,
            "PRESS ENTER TO CONTINUE, ESC FOR MENU",
            SCREEN_WIDTH as i32 / 2,
            center_y + 20,
            WHITE,
            2,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::builtin_roster;

    fn one_second_level() -> FightLevel<'static> {
        let config = LevelConfig {
            opponent_name: "CPU".to_string(),
            opponent_color: Color::RGB(255, 0, 0),
            background_dir: None,
            round_time_seconds: 1.0,
        };
        FightLevel::with_background(
            &builtin_roster()[0],
            config,
            0,
            BackgroundAnimation::solid(BLACK),
        )
    }

    #[test]
    fn test_timer_counts_down_to_exactly_zero() {
        let mut timer = RoundTimer::new(5.0);
        assert_eq!(timer.display_seconds(), 5);
        assert!(timer.is_active());

        for _ in 0..5 * TICKS_PER_SECOND - 1 {
            timer.tick();
        }
        assert!(timer.is_active());

        // The final tick expires the round
        assert!(timer.tick());
        assert_eq!(timer.display_seconds(), 0);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_timer_never_goes_negative() {
        let mut timer = RoundTimer::new(1.0);
        for _ in 0..TICKS_PER_SECOND * 3 {
            timer.tick();
        }
        assert_eq!(timer.display_seconds(), 0);
        assert_eq!(timer.remaining_seconds(), 0.0);
        assert!(!timer.tick());
    }

    #[test]
    fn test_timer_display_truncates_partial_seconds() {
        let mut timer = RoundTimer::new(5.0);
        timer.tick();
        // 4.98s remaining displays as 4
        assert_eq!(timer.display_seconds(), 4);
    }

    #[test]
    fn test_round_ends_after_configured_duration() {
        let mut level = one_second_level();
        for _ in 0..TICKS_PER_SECOND - 1 {
            level.update();
        }
        assert!(!level.is_round_over());

        level.update();
        assert!(level.is_round_over());
        assert_eq!(level.player().rounds_won, 1);
    }

    #[test]
    fn test_round_wins_carry_into_later_stages() {
        let config = LevelConfig {
            opponent_name: "SHADOW VIPER".to_string(),
            opponent_color: Color::RGB(147, 0, 211),
            background_dir: None,
            round_time_seconds: 1.0,
        };
        let level = FightLevel::with_background(
            &builtin_roster()[0],
            config,
            1,
            BackgroundAnimation::solid(BLACK),
        );
        assert_eq!(level.player().rounds_won, 1);
    }

    #[test]
    fn test_block_and_charge_follow_key_state() {
        let mut level = one_second_level();

        level.handle_action(&ScreenAction::BlockPressed);
        level.handle_action(&ScreenAction::ChargePressed);
        assert!(level.player().is_blocking);
        assert!(level.player().is_charging);

        level.handle_action(&ScreenAction::BlockReleased);
        level.handle_action(&ScreenAction::ChargeReleased);
        assert!(!level.player().is_blocking);
        assert!(!level.player().is_charging);
    }

    #[test]
    fn test_charging_turns_the_aura_ring() {
        let mut level = one_second_level();
        level.handle_action(&ScreenAction::ChargePressed);
        level.update();
        level.update();
        assert_eq!(level.player().aura_phase(), 2);
    }

    #[test]
    fn test_level_freezes_once_round_is_over() {
        let mut level = one_second_level();
        level.handle_action(&ScreenAction::ChargePressed);
        for _ in 0..TICKS_PER_SECOND {
            level.update();
        }
        assert!(level.is_round_over());

        let phase_at_end = level.player().aura_phase();
        level.update();
        level.update();
        assert_eq!(level.player().aura_phase(), phase_at_end);
        assert_eq!(level.player().rounds_won, 1);
    }

    #[test]
    fn test_prompt_accepts_confirm_and_cancel_only() {
        let mut level = one_second_level();
        for _ in 0..TICKS_PER_SECOND {
            level.update();
        }
        assert!(level.is_round_over());

        // Block input no longer toggles anything
        assert_eq!(level.handle_action(&ScreenAction::BlockPressed), None);
        assert!(!level.player().is_blocking);

        assert_eq!(
            level.handle_action(&ScreenAction::Confirm),
            Some(LevelOutcome::Complete)
        );
        assert_eq!(
            level.handle_action(&ScreenAction::Cancel),
            Some(LevelOutcome::BackToMenu)
        );
    }

    #[test]
    fn test_escape_mid_round_returns_to_menu() {
        let mut level = one_second_level();
        assert_eq!(
            level.handle_action(&ScreenAction::Cancel),
            Some(LevelOutcome::BackToMenu)
        );
    }

    #[test]
    fn test_window_close_wins_over_everything() {
        let mut level = one_second_level();
        assert_eq!(
            level.handle_action(&ScreenAction::Quit),
            Some(LevelOutcome::Exit)
        );
    }

    #[test]
    fn test_campaign_stages() {
        let stages = LevelConfig::campaign(&GameConfig::default());
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].opponent_name, "CPU");
        assert!(stages[0].background_dir.is_some());
        assert_eq!(stages[1].opponent_name, "SHADOW VIPER");
        assert_eq!(stages[1].background_dir, None);
        assert_eq!(stages[0].round_time_seconds, 5.0);
    }
}
