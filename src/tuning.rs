//! Game balance parameters
//!
//! Everything that tunes the feel of a run without touching level geometry.
//! Loaded once at startup; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// Balance knobs for physics, modes, and spawning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal pixels per frame per held direction key
    pub move_speed: f32,
    /// Vertical acceleration per frame (positive is down)
    pub gravity: f32,
    /// Velocity applied on jump (negative is up)
    pub jump_power: f32,

    // === Slow-time ("think mode") ===
    /// Frames the mode stays active once triggered
    pub slow_time_frames: u32,
    /// Hazard speed multiplier while active
    pub slow_time_factor: f32,

    // === Spawning (frame cadence) ===
    pub bone_interval: u64,
    pub asteroid_interval: u64,
    pub robot_interval: u64,
    /// Chance a new bone is hidden (0.0 - 1.0)
    pub hidden_bone_chance: f64,

    // === Hazards ===
    /// Asteroid speed is uniform in `[min, min + spread)`
    pub asteroid_min_speed: f32,
    pub asteroid_speed_spread: f32,
    /// Signed initial robot speed (negative walks left)
    pub robot_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            gravity: 0.5,
            jump_power: -12.0,

            slow_time_frames: 120, // 2 seconds at 60 FPS
            slow_time_factor: 0.5,

            bone_interval: 60,
            asteroid_interval: 120,
            robot_interval: 180,
            hidden_bone_chance: 0.3,

            asteroid_min_speed: 3.0,
            asteroid_speed_spread: 2.0,
            robot_speed: -2.0,
        }
    }
}

impl Tuning {
    /// Environment variable naming a JSON tuning file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    const ENV_PATH: &'static str = "DATA_BONES_TUNING";

    /// DOM id of an inline `<script type="application/json">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "tuning";

    /// Parse overrides from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Clamp values that would stall or break the simulation
    pub fn sanitized(mut self) -> Self {
        self.bone_interval = self.bone_interval.max(1);
        self.asteroid_interval = self.asteroid_interval.max(1);
        self.robot_interval = self.robot_interval.max(1);
        self.slow_time_frames = self.slow_time_frames.max(1);
        self.hidden_bone_chance = self.hidden_bone_chance.clamp(0.0, 1.0);
        self.slow_time_factor = self.slow_time_factor.max(0.0);
        self.move_speed = self.move_speed.max(0.0);
        self.asteroid_min_speed = self.asteroid_min_speed.max(0.0);
        self.asteroid_speed_spread = self.asteroid_speed_spread.max(0.0);
        self
    }

    /// Load tuning from the page's inline JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::parse_or_default(&json),
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Load tuning from the file named by `DATA_BONES_TUNING` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::parse_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    fn parse_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
