mod assets;
mod audio;
mod clock;
mod config;
mod fighter;
mod input;
mod roster;
mod screens;
mod text;
mod ui;

use audio::AudioPlayer;
use clock::FrameClock;
use config::{GameConfig, Options};
use input::InputSystem;
use screens::{AppContext, SCREEN_HEIGHT, SCREEN_WIDTH};

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("UNTITLED BOXING", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps the layout stable if the OS resizes the window
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let game_config = GameConfig::load_or_default(config::GAME_CONFIG_PATH);
    let options = Options::load();
    let roster = roster::load_roster(roster::ROSTER_PATH);
    let mut audio = AudioPlayer::init(&sdl_context, &options);

    println!("Controls:");
    println!("UP/DOWN - Navigate the menu");
    println!("LEFT/RIGHT - Browse fighters");
    println!("ENTER - Confirm");
    println!("SPACE - Block (hold)");
    println!("LSHIFT - Charge aura (hold)");
    println!("ESC - Back");

    let mut ctx = AppContext {
        canvas: &mut canvas,
        event_pump: &mut event_pump,
        texture_creator: &texture_creator,
        input: InputSystem::new(),
        audio: &mut audio,
        config: &game_config,
        roster: &roster,
        clock: FrameClock::new(),
    };

    screens::run(&mut ctx)?;

    println!("Thanks for playing!");
    Ok(())
}
