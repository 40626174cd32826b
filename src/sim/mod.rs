//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (platform list order decides landing ties)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{landing_platform, lands_on, patrol_should_turn, platform_under};
pub use rect::Rect;
pub use state::{
    Asteroid, Bone, GameEvent, GameState, HazardKind, Platform, Player, Robot, SpawnKind,
};
pub use tick::{TickInput, tick};
