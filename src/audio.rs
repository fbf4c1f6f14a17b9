//! Music and sound cues
//!
//! Best-effort audio on top of SDL2_mixer. Availability is decided once at
//! startup: if the audio device, the mixer, or an individual file cannot be
//! opened, the matching capability is disabled for the whole session and
//! every playback call becomes a no-op. The game itself never fails over
//! audio.

use sdl2::mixer::{
    self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext, DEFAULT_CHANNELS, DEFAULT_FORMAT,
    MAX_VOLUME,
};

use crate::config::Options;

const MENU_THEME_PATH: &str = "assets/music/menu_theme.ogg";
const FIGHT_THEME_PATH: &str = "assets/music/fight_theme.ogg";
const HOVER_CUE_PATH: &str = "assets/sounds/hover.wav";
const SELECT_CUE_PATH: &str = "assets/sounds/select.wav";

/// The looping background tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Fight,
}

/// Owns the mixer state and the loaded audio assets.
pub struct AudioPlayer {
    _audio_subsystem: Option<sdl2::AudioSubsystem>,
    _mixer_context: Option<Sdl2MixerContext>,
    menu_theme: Option<Music<'static>>,
    fight_theme: Option<Music<'static>>,
    hover_cue: Option<Chunk>,
    select_cue: Option<Chunk>,
    playing: Option<MusicTrack>,
}

impl AudioPlayer {
    /// Opens the mixer and loads every track and cue that exists.
    ///
    /// Any failure along the way returns a silent player instead of an
    /// error.
    pub fn init(sdl_context: &sdl2::Sdl, options: &Options) -> AudioPlayer {
        let audio_subsystem = match sdl_context.audio() {
            Ok(subsystem) => subsystem,
            Err(e) => {
                eprintln!("Audio device unavailable: {}. Continuing without sound.", e);
                return AudioPlayer::disabled();
            }
        };

        let mixer_context = match mixer::init(InitFlag::OGG) {
            Ok(context) => context,
            Err(e) => {
                eprintln!("Mixer init failed: {}. Continuing without sound.", e);
                return AudioPlayer::disabled();
            }
        };

        if let Err(e) = mixer::open_audio(44_100, DEFAULT_FORMAT, DEFAULT_CHANNELS, 1_024) {
            eprintln!("Could not open audio: {}. Continuing without sound.", e);
            return AudioPlayer::disabled();
        }
        mixer::allocate_channels(8);

        Music::set_volume(scaled_volume(options.music_volume));

        let player = AudioPlayer {
            _audio_subsystem: Some(audio_subsystem),
            _mixer_context: Some(mixer_context),
            menu_theme: load_music(MENU_THEME_PATH),
            fight_theme: load_music(FIGHT_THEME_PATH),
            hover_cue: load_chunk(HOVER_CUE_PATH, options.sound_volume),
            select_cue: load_chunk(SELECT_CUE_PATH, options.sound_volume),
            playing: None,
        };

        println!(
            "Audio ready (music: {}, sound cues: {})",
            if player.music_available() { "on" } else { "off" },
            if player.sound_available() { "on" } else { "off" },
        );
        player
    }

    /// A player with every capability off. Also used by tests.
    pub fn disabled() -> AudioPlayer {
        AudioPlayer {
            _audio_subsystem: None,
            _mixer_context: None,
            menu_theme: None,
            fight_theme: None,
            hover_cue: None,
            select_cue: None,
            playing: None,
        }
    }

    pub fn music_available(&self) -> bool {
        self.menu_theme.is_some() || self.fight_theme.is_some()
    }

    pub fn sound_available(&self) -> bool {
        self.hover_cue.is_some() || self.select_cue.is_some()
    }

    /// Starts a track looping. Re-requesting the track that is already
    /// playing keeps it running rather than restarting it.
    pub fn play_music(&mut self, track: MusicTrack) {
        if self.playing == Some(track) {
            return;
        }
        let selected = match track {
            MusicTrack::Menu => self.menu_theme.as_ref(),
            MusicTrack::Fight => self.fight_theme.as_ref(),
        };
        if let Some(music) = selected {
            match music.play(-1) {
                Ok(()) => self.playing = Some(track),
                Err(e) => eprintln!("Music playback failed: {}", e),
            }
        }
    }

    pub fn stop_music(&mut self) {
        if self.playing.take().is_some() {
            Music::halt();
        }
    }

    /// Cue for moving the menu or carousel selection.
    pub fn play_hover(&self) {
        play_cue(&self.hover_cue);
    }

    /// Cue for confirming a selection.
    pub fn play_select(&self) {
        play_cue(&self.select_cue);
    }
}

fn scaled_volume(volume: f32) -> i32 {
    (volume.clamp(0.0, 1.0) * MAX_VOLUME as f32) as i32
}

fn load_music(path: &str) -> Option<Music<'static>> {
    match Music::from_file(path) {
        Ok(music) => Some(music),
        Err(e) => {
            eprintln!("Warning: no music at {}: {}", path, e);
            None
        }
    }
}

fn load_chunk(path: &str, volume: f32) -> Option<Chunk> {
    match Chunk::from_file(path) {
        Ok(mut chunk) => {
            chunk.set_volume(scaled_volume(volume));
            Some(chunk)
        }
        Err(e) => {
            eprintln!("Warning: no sound cue at {}: {}", path, e);
            None
        }
    }
}

fn play_cue(cue: &Option<Chunk>) {
    if let Some(chunk) = cue {
        if let Err(e) = Channel::all().play(chunk, 0) {
            eprintln!("Sound cue failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_player_reports_no_capabilities() {
        let player = AudioPlayer::disabled();
        assert!(!player.music_available());
        assert!(!player.sound_available());
    }

    #[test]
    fn test_disabled_player_playback_is_a_no_op() {
        let mut player = AudioPlayer::disabled();
        player.play_music(MusicTrack::Menu);
        player.play_music(MusicTrack::Fight);
        player.play_hover();
        player.play_select();
        player.stop_music();
        assert_eq!(player.playing, None);
    }

    #[test]
    fn test_volume_scaling_clamps() {
        assert_eq!(scaled_volume(0.0), 0);
        assert_eq!(scaled_volume(1.0), MAX_VOLUME);
        assert_eq!(scaled_volume(-0.5), 0);
        assert_eq!(scaled_volume(2.0), MAX_VOLUME);
        assert_eq!(scaled_volume(0.5), MAX_VOLUME / 2);
    }
}
