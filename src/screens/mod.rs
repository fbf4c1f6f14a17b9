//! Screens module - the top-level flow of the game
//!
//! Each screen owns its state, runs its own frame loop against the shared
//! [`AppContext`], and returns the next [`Screen`] synchronously. The state
//! machine in [`run`] just hands control from one screen to the next until
//! it reaches `Exit`.
//!
//! Submodules:
//! - `menu` - title screen with the START FIGHT / OPTIONS / EXIT list
//! - `select` - character carousel
//! - `fight` - one round of boxing, parameterized per level
//! - `cutscene` - interlude text between campaign levels

pub mod cutscene;
pub mod fight;
pub mod menu;
pub mod select;

pub use cutscene::{CutsceneOutcome, CutsceneScreen};
pub use fight::{FightLevel, LevelConfig, LevelOutcome};
pub use menu::MenuScreen;
pub use select::CharacterSelectScreen;

use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::audio::AudioPlayer;
use crate::clock::FrameClock;
use crate::config::GameConfig;
use crate::input::InputSystem;
use crate::roster::Character;

pub const SCREEN_WIDTH: u32 = 1200;
pub const SCREEN_HEIGHT: u32 = 800;

// Shared palette
pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const BLACK: Color = Color::RGB(0, 0, 0);
pub const GRAY: Color = Color::RGB(100, 100, 100);
pub const ARCADE_RED: Color = Color::RGB(234, 56, 76);
pub const ARCADE_BLUE: Color = Color::RGB(37, 99, 235);
pub const ARCADE_YELLOW: Color = Color::RGB(234, 179, 8);

/// Everything a screen needs for one run of its frame loop.
///
/// Screens keep their own state in their own struct; the context only
/// bundles the long-lived resources created in `main`.
pub struct AppContext<'a> {
    pub canvas: &'a mut Canvas<Window>,
    pub event_pump: &'a mut EventPump,
    pub texture_creator: &'a TextureCreator<WindowContext>,
    pub input: InputSystem,
    pub audio: &'a mut AudioPlayer,
    pub config: &'a GameConfig,
    pub roster: &'a [Character],
    pub clock: FrameClock,
}

/// Top-level screen states.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu,
    CharacterSelect,
    Gameplay { character: Character },
    Exit,
}

/// Runs the screen state machine until the player exits.
pub fn run(ctx: &mut AppContext) -> Result<(), String> {
    let mut screen = Screen::Menu;
    loop {
        screen = match screen {
            Screen::Menu => MenuScreen::new().run(ctx)?,
            Screen::CharacterSelect => {
                CharacterSelectScreen::new(ctx.roster.to_vec()).run(ctx)?
            }
            Screen::Gameplay { character } => run_campaign(ctx, &character)?,
            Screen::Exit => {
                ctx.audio.stop_music();
                return Ok(());
            }
        };
    }
}

/// The campaign behind START FIGHT: the opening bout, an interlude, then
/// the showdown. Round wins carry across the levels, and finishing (or
/// backing out of) the campaign lands on the menu.
fn run_campaign(ctx: &mut AppContext, character: &Character) -> Result<Screen, String> {
    let stages = LevelConfig::campaign(ctx.config);
    let last_stage = stages.len() - 1;
    let mut rounds_carried = 0;

    for (stage, level_config) in stages.into_iter().enumerate() {
        let mut level =
            FightLevel::new(ctx.texture_creator, character, level_config, rounds_carried);
        match level.run(ctx)? {
            LevelOutcome::Complete => rounds_carried += 1,
            LevelOutcome::BackToMenu => return Ok(Screen::Menu),
            LevelOutcome::Exit => return Ok(Screen::Exit),
        }

        if stage < last_stage {
            match CutsceneScreen::interlude().run(ctx)? {
                CutsceneOutcome::Continue => {}
                CutsceneOutcome::BackToMenu => return Ok(Screen::Menu),
                CutsceneOutcome::Exit => return Ok(Screen::Exit),
            }
        }
    }

    println!("Campaign complete: {} takes the title!", character.name);
    Ok(Screen::Menu)
}
