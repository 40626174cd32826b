//! Entity spawning
//!
//! Every spawn draws from the world's seeded RNG, so a seed plus an input
//! sequence replays the same session.

use rand::Rng;

use super::rect::Rect;
use super::state::{Asteroid, Bone, GameEvent, GameState, Robot, SpawnKind};
use crate::consts::*;

impl GameState {
    /// Pick a random platform rectangle
    fn random_platform(&mut self) -> Rect {
        let index = self.rng.random_range(0..self.platforms.len());
        self.platforms[index].rect
    }

    /// Place a bone somewhere on a random platform
    pub fn spawn_bone(&mut self) {
        let platform = self.random_platform();
        let x = platform.left() + self.rng.random::<f32>() * (platform.size.x - BONE_SIZE);
        let hidden = self.rng.random_bool(self.tuning.hidden_bone_chance);

        let id = self.next_entity_id();
        self.bones.push(Bone {
            id,
            rect: Rect::new(x, platform.top() - BONE_SIZE, BONE_SIZE, BONE_SIZE),
            hidden,
            parked: false,
        });
        self.events.push(GameEvent::Spawned {
            kind: SpawnKind::Bone,
            id,
        });
    }

    /// Launch an asteroid from the right edge of the world
    pub fn spawn_asteroid(&mut self) {
        let y = self.rng.random::<f32>() * (WORLD_HEIGHT - ASTEROID_FLOOR_MARGIN);
        let speed =
            self.tuning.asteroid_min_speed + self.rng.random::<f32>() * self.tuning.asteroid_speed_spread;

        let id = self.next_entity_id();
        self.asteroids.push(Asteroid {
            id,
            rect: Rect::new(WORLD_WIDTH, y, ASTEROID_SIZE, ASTEROID_SIZE),
            speed,
        });
        self.events.push(GameEvent::Spawned {
            kind: SpawnKind::Asteroid,
            id,
        });
    }

    /// Drop a robot on the right end of a random platform
    pub fn spawn_robot(&mut self) {
        let platform = self.random_platform();

        let id = self.next_entity_id();
        self.robots.push(Robot {
            id,
            rect: Rect::new(
                platform.right() - ROBOT_SIZE,
                platform.top() - ROBOT_SIZE,
                ROBOT_SIZE,
                ROBOT_SIZE,
            ),
            speed: self.tuning.robot_speed,
        });
        self.events.push(GameEvent::Spawned {
            kind: SpawnKind::Robot,
            id,
        });
    }

    /// Spawn whatever is due on the current tick
    pub fn spawn_due(&mut self) {
        let t = self.time_ticks;
        if t % self.tuning.bone_interval == 0 {
            self.spawn_bone();
        }
        if t % self.tuning.asteroid_interval == 0 {
            self.spawn_asteroid();
        }
        if t % self.tuning.robot_interval == 0 {
            self.spawn_robot();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn empty_state(seed: u64) -> GameState {
        GameState::empty(seed, Tuning::default())
    }

    #[test]
    fn test_bones_rest_on_a_platform() {
        let mut state = empty_state(3);
        for _ in 0..200 {
            state.spawn_bone();
        }
        for bone in &state.bones {
            let resting_on = state.platforms.iter().find(|p| {
                bone.rect.bottom() == p.rect.top()
                    && bone.rect.left() >= p.rect.left()
                    && bone.rect.right() <= p.rect.right()
            });
            assert!(resting_on.is_some(), "bone {:?} floats", bone.rect);
            assert!(!bone.parked);
        }
    }

    #[test]
    fn test_hidden_chance_extremes() {
        let mut state = empty_state(3);
        state.tuning.hidden_bone_chance = 0.0;
        for _ in 0..50 {
            state.spawn_bone();
        }
        assert!(state.bones.iter().all(|b| !b.hidden));

        state.bones.clear();
        state.tuning.hidden_bone_chance = 1.0;
        for _ in 0..50 {
            state.spawn_bone();
        }
        assert!(state.bones.iter().all(|b| b.hidden));
    }

    #[test]
    fn test_asteroid_spawn_range() {
        let mut state = empty_state(11);
        for _ in 0..200 {
            state.spawn_asteroid();
        }
        for a in &state.asteroids {
            assert_eq!(a.rect.left(), WORLD_WIDTH);
            assert!(a.rect.top() >= 0.0 && a.rect.top() < WORLD_HEIGHT - ASTEROID_FLOOR_MARGIN);
            assert!(a.speed >= 3.0 && a.speed < 5.0);
        }
    }

    #[test]
    fn test_robot_starts_at_platform_right_edge() {
        let mut state = empty_state(5);
        for _ in 0..30 {
            state.spawn_robot();
        }
        for r in &state.robots {
            assert_eq!(r.speed, -2.0);
            let home = state
                .platforms
                .iter()
                .find(|p| p.rect.top() == r.rect.bottom())
                .expect("robot should stand on a platform");
            assert_eq!(r.rect.right(), home.rect.right());
        }
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = empty_state(1);
        let mut counts = (0, 0, 0);
        for t in 1..=360 {
            state.time_ticks = t;
            let (b, a, r) = (state.bones.len(), state.asteroids.len(), state.robots.len());
            state.spawn_due();
            counts.0 += state.bones.len() - b;
            counts.1 += state.asteroids.len() - a;
            counts.2 += state.robots.len() - r;
        }
        assert_eq!(counts, (6, 3, 2));
    }
}
