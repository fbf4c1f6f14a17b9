//! Asset loading and background animation
//!
//! Every loader here is best-effort: a missing or undecodable asset degrades
//! to a fallback (solid background) instead of failing the game. Whether a
//! level has an animated background is decided once, at level construction,
//! by how many frames the loader finds.

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

/// How many ticks each background frame is held before advancing.
pub const FRAME_HOLD_TICKS: u32 = 10;

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Loads a numbered PNG frame sequence from a directory.
///
/// Frames are named `frame_00.png`, `frame_01.png`, ... and load until the
/// first gap. An empty result means the background is unavailable and the
/// caller should fall back to a solid fill.
pub fn load_frame_sequence<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    dir: &str,
) -> Vec<Texture<'a>> {
    let mut frames = Vec::new();
    loop {
        let path = format!("{}/frame_{:02}.png", dir, frames.len());
        if !Path::new(&path).is_file() {
            break;
        }
        match load_texture(texture_creator, &path) {
            Ok(texture) => frames.push(texture),
            Err(e) => {
                eprintln!("Warning: {}", e);
                break;
            }
        }
    }
    if frames.is_empty() {
        println!("No background frames under {}, using solid fill", dir);
    } else {
        println!("Loaded {} background frames from {}", frames.len(), dir);
    }
    frames
}

/// Tick counter that steps a looping frame index
///
/// Holds each frame for [`FRAME_HOLD_TICKS`] ticks, then wraps around. A
/// cycle over fewer than two frames never advances.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    frame_count: usize,
    index: usize,
    ticks: u32,
}

impl FrameCycle {
    pub fn new(frame_count: usize) -> Self {
        FrameCycle {
            frame_count,
            index: 0,
            ticks: 0,
        }
    }

    pub fn update(&mut self) {
        if self.frame_count < 2 {
            return;
        }
        self.ticks += 1;
        if self.ticks >= FRAME_HOLD_TICKS {
            self.ticks = 0;
            self.index = (self.index + 1) % self.frame_count;
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// A looping full-screen background
///
/// Either a frame sequence stretched over the whole canvas, or a solid
/// fallback color when no frames are available.
pub struct BackgroundAnimation<'a> {
    frames: Vec<Texture<'a>>,
    cycle: FrameCycle,
    fallback: Color,
}

impl<'a> BackgroundAnimation<'a> {
    pub fn new(frames: Vec<Texture<'a>>, fallback: Color) -> Self {
        let cycle = FrameCycle::new(frames.len());
        BackgroundAnimation {
            frames,
            cycle,
            fallback,
        }
    }

    /// A background with no frames, always the fallback color.
    pub fn solid(fallback: Color) -> Self {
        Self::new(Vec::new(), fallback)
    }

    pub fn is_animated(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn update(&mut self) {
        self.cycle.update();
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        match self.frames.get(self.cycle.index()) {
            Some(frame) => canvas.copy(frame, None, None),
            None => {
                canvas.set_draw_color(self.fallback);
                canvas.clear();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cycle_holds_then_advances() {
        let mut cycle = FrameCycle::new(3);
        for _ in 0..FRAME_HOLD_TICKS - 1 {
            cycle.update();
        }
        assert_eq!(cycle.index(), 0);
        cycle.update();
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_frame_cycle_wraps_around() {
        let mut cycle = FrameCycle::new(3);
        for _ in 0..FRAME_HOLD_TICKS * 3 {
            cycle.update();
        }
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_single_frame_never_advances() {
        let mut cycle = FrameCycle::new(1);
        for _ in 0..FRAME_HOLD_TICKS * 5 {
            cycle.update();
        }
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_solid_background_is_not_animated() {
        let background = BackgroundAnimation::solid(Color::RGB(0, 0, 0));
        assert!(!background.is_animated());
    }
}
