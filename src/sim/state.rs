//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there is no
//! module-level state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// The player character ("Byte")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (positive is falling)
    pub vel_y: f32,
    /// Resting on a platform or the floor
    pub grounded: bool,
    /// Reveal mode ("deep search"): hidden bones are parked
    pub revealing: bool,
    /// Slow-time mode ("think mode"): hazards move at reduced speed
    pub slow_time: bool,
    /// Frames of slow-time left
    pub slow_time_ticks: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            grounded: false,
            revealing: false,
            slow_time: false,
            slow_time_ticks: 0,
        }
    }
}

impl Player {
    /// Teleport back to the start position, at rest
    pub fn respawn(&mut self) {
        self.rect.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.vel_y = 0.0;
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

/// A collectible data bone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bone {
    pub id: u32,
    pub rect: Rect,
    /// Only collectable while the player is revealing
    pub hidden: bool,
    /// Set aside while reveal mode is active; parked bones neither collide
    /// nor draw
    pub parked: bool,
}

impl Bone {
    /// Collectable by an overlapping player right now
    pub fn collectable(&self, revealing: bool) -> bool {
        !self.parked && (!self.hidden || revealing)
    }

    /// Drawn as a dim translucent overlay rather than gold
    pub fn dimmed(&self, revealing: bool) -> bool {
        self.hidden && !revealing
    }
}

/// A falling hazard drifting leftward across the play area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub rect: Rect,
    /// Leftward pixels per frame at full speed
    pub speed: f32,
}

impl Asteroid {
    /// Right edge has reached or passed the left boundary
    pub fn off_screen(&self) -> bool {
        self.rect.pos.x <= -self.rect.size.x
    }
}

/// A patrol hazard walking back and forth along a platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    pub id: u32,
    pub rect: Rect,
    /// Signed horizontal pixels per frame at full speed
    pub speed: f32,
}

/// Hazard kinds, for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Asteroid,
    Robot,
}

/// Entity kinds created by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Bone,
    Asteroid,
    Robot,
}

/// Things that happened during a tick (cleared at the start of each tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// Touched down on a platform (by index) or the floor (`None`)
    Landed { platform: Option<usize> },
    RevealStarted { parked: usize },
    RevealEnded { restored: usize },
    SlowTimeStarted,
    SlowTimeEnded,
    BoneCollected { id: u32, hidden: bool },
    PlayerHit { hazard: HazardKind, lost_score: u64 },
    Spawned { kind: SpawnKind, id: u32 },
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving every spawn
    pub rng: Pcg32,
    /// Balance parameters
    pub tuning: Tuning,
    /// Bones collected since the last hit
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed at startup, never mutated
    pub platforms: Vec<Platform>,
    /// Active and parked bones, active ones ahead of freshly restored ones
    pub bones: Vec<Bone>,
    pub asteroids: Vec<Asteroid>,
    pub robots: Vec<Robot>,
    /// User-visible message (game over)
    pub message: Option<String>,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
    /// Whether any key was held on the previous tick (for press edges)
    pub keys_were_held: bool,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new world with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new world with the given seed and tuning, spawning one of
    /// each entity kind before the first tick
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self::empty(seed, tuning);
        state.spawn_bone();
        state.spawn_asteroid();
        state.spawn_robot();
        state
    }

    /// A world with platforms and player but no spawned entities
    pub fn empty(seed: u64, tuning: Tuning) -> Self {
        let platforms = PLATFORMS
            .iter()
            .map(|&(x, y, w, h)| Platform {
                rect: Rect::new(x, y, w, h),
            })
            .collect();

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            platforms,
            bones: Vec::new(),
            asteroids: Vec::new(),
            robots: Vec::new(),
            message: None,
            events: Vec::new(),
            keys_were_held: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Bones currently eligible for collision and drawing
    pub fn active_bones(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter().filter(|b| !b.parked)
    }

    /// Bones set aside by reveal mode
    pub fn parked_bones(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter().filter(|b| b.parked)
    }

    /// Hazard hit: everything but the platforms and the player goes back to
    /// a fresh start
    pub fn reset_after_hit(&mut self, hazard: HazardKind) {
        log::info!("Hit by {:?}, score {} lost", hazard, self.score);
        self.events.push(GameEvent::PlayerHit {
            hazard,
            lost_score: self.score,
        });
        self.score = 0;
        self.player.respawn();
        self.asteroids.clear();
        self.robots.clear();
        self.bones.clear();
        self.message = Some(GAME_OVER_MESSAGE.to_string());
    }
}
