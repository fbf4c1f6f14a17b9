//! HUD Components
//!
//! This module provides the screen-space HUD elements drawn over the fight
//! and select screens. These components follow a stateless, procedural
//! rendering pattern:
//!
//! - Positions are passed in at render time (no entity references stored)
//! - Rendering uses SDL2 primitives and the bitmap font only
//! - Style configuration is separate from rendering logic
//!
//! # Available Components
//!
//! - [`Meter`] - Track-and-fill bars for health and aura
//! - [`draw_star_rating`] - 1-5 star ability ratings on the select screen

pub mod meter;
pub mod stars;

pub use meter::{Meter, MeterStyle};
pub use stars::{draw_star_rating, star_states, STAR_SLOTS};
