//! Data Bones - A browser platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `renderer`: Draw command list consumed by the host's canvas
//! - `platform`: Browser/native platform abstraction (held keys, frame hosts)
//! - `tuning`: Data-driven game balance
//! - `game`: One-call-per-frame facade tying the above together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, SessionStats};
pub use tuning::Tuning;

/// Fixed world geometry. Levels are not configurable, so these never change
/// at runtime; balance values live in [`Tuning`] instead.
pub mod consts {
    /// Play area dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player ("Byte") box size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Where the player starts and respawns after a hit
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = WORLD_HEIGHT - 50.0;

    /// Collectible ("bone") box size
    pub const BONE_SIZE: f32 = 20.0;
    /// Falling hazard ("asteroid") box size
    pub const ASTEROID_SIZE: f32 = 30.0;
    /// Patrol hazard ("robot") box size
    pub const ROBOT_SIZE: f32 = 40.0;

    /// Asteroids spawn anywhere above this margin from the floor
    pub const ASTEROID_FLOOR_MARGIN: f32 = 100.0;

    /// Static platforms as (x, y, width, height), in iteration order
    pub const PLATFORMS: [(f32, f32, f32, f32); 3] = [
        (0.0, WORLD_HEIGHT - 20.0, 200.0, 20.0),
        (300.0, WORLD_HEIGHT - 100.0, 200.0, 20.0),
        (600.0, WORLD_HEIGHT - 200.0, 200.0, 20.0),
    ];

    /// Message shown after a hazard hit
    pub const GAME_OVER_MESSAGE: &str = "Game Over! Press any key to restart.";
}
