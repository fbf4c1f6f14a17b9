//! The playable character roster
//!
//! Three fighters ship built in. An optional `assets/config/roster.json`
//! can replace them: it must parse to a non-empty list with every ability
//! rank in the 1-5 range, otherwise the built-in roster is used.

use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::config::ConfigError;

pub const ROSTER_PATH: &str = "assets/config/roster.json";

/// Highest ability rank; also the number of star slots on the select screen.
pub const MAX_ABILITY_RANK: u8 = 5;

/// A named ability with a 1-5 star rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub rank: u8,
}

/// One playable fighter
///
/// The color is kept as an `(r, g, b)` tuple so the roster can round-trip
/// through JSON; use [`Character::display_color`] when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub backstory: String,
    pub passive: Ability,
    pub special: Ability,
    pub color: (u8, u8, u8),
}

impl Character {
    pub fn display_color(&self) -> Color {
        Color::RGB(self.color.0, self.color.1, self.color.2)
    }
}

/// The three built-in fighters.
pub fn builtin_roster() -> Vec<Character> {
    vec![
        Character {
            name: "Den \"Phantom\" Lai".to_string(),
            backstory: "Once a child of the streets of Neo Kowloon... vanished after a gang war."
                .to_string(),
            passive: Ability {
                name: "Fade Step".to_string(),
                rank: 4,
            },
            special: Ability {
                name: "Phase Strike".to_string(),
                rank: 5,
            },
            color: (37, 99, 235),
        },
        Character {
            name: "Kal \"Ghostline\" El".to_string(),
            backstory: "Ex-agent betrayed and rebuilt by tech rebels... now hunts his enemies."
                .to_string(),
            passive: Ability {
                name: "Echo Reflex".to_string(),
                rank: 5,
            },
            special: Ability {
                name: "Blackout Field".to_string(),
                rank: 4,
            },
            color: (100, 100, 100),
        },
        Character {
            name: "Kira \"Razorfang\" Aoyama".to_string(),
            backstory: "An experimental weapon from NeonGene Corp... seeks the truth of his past."
                .to_string(),
            passive: Ability {
                name: "Neural Reflex Sync".to_string(),
                rank: 5,
            },
            special: Ability {
                name: "Phantom Edge".to_string(),
                rank: 5,
            },
            color: (234, 56, 76),
        },
    ]
}

fn load_from_file(path: &str) -> Result<Vec<Character>, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let roster: Vec<Character> = serde_json::from_str(&contents)?;
    Ok(roster)
}

/// A usable roster has at least one character and only ranks 1-5.
pub fn roster_is_valid(roster: &[Character]) -> bool {
    !roster.is_empty()
        && roster.iter().all(|character| {
            (1..=MAX_ABILITY_RANK).contains(&character.passive.rank)
                && (1..=MAX_ABILITY_RANK).contains(&character.special.rank)
        })
}

/// Loads the roster override if present and valid, else the built-in three.
pub fn load_roster(path: &str) -> Vec<Character> {
    match load_from_file(path) {
        Ok(roster) if roster_is_valid(&roster) => {
            println!("Loaded {} characters from {}", roster.len(), path);
            roster
        }
        Ok(_) => {
            eprintln!(
                "Warning: {} rejected (empty, or rank outside 1-{}), using built-in roster",
                path, MAX_ABILITY_RANK
            );
            builtin_roster()
        }
        Err(ConfigError::Io(_)) => builtin_roster(),
        Err(e) => {
            eprintln!("Warning: ignoring {}: {}", path, e);
            builtin_roster()
        }
    }
}
