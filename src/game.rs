//! Game facade
//!
//! One call per display frame: interpret keys, tick the world, flatten it
//! into a [`Frame`]. Hosts own the loop; this type never schedules itself.

use serde::{Deserialize, Serialize};

use crate::platform::{FrameHost, HeldKeys};
use crate::renderer::{Frame, build_frame};
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Running totals across a session, for logs and the headless summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub frames: u64,
    pub bones_collected: u64,
    pub hidden_bones_collected: u64,
    pub hits: u64,
    pub best_score: u64,
}

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    stats: SessionStats,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::with_tuning(seed, tuning),
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Start over with a fresh world, keeping the tuning
    pub fn restart(&mut self, seed: u64) {
        let tuning = self.state.tuning.clone();
        self.state = GameState::with_tuning(seed, tuning);
        self.stats = SessionStats::default();
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Advance one frame with the given held keys
    pub fn frame(&mut self, keys: &HeldKeys) -> Frame {
        let input = keys.directives();
        tick(&mut self.state, &input);
        self.record_events();
        build_frame(&self.state)
    }

    /// One full pass for a host: read its keys, tick, hand back the frame
    pub fn run_frame<H: FrameHost>(&mut self, host: &mut H) {
        let frame = self.frame(host.held_keys());
        host.present(&frame);
    }

    fn record_events(&mut self) {
        self.stats.frames += 1;
        for event in &self.state.events {
            match *event {
                GameEvent::BoneCollected { hidden, .. } => {
                    self.stats.bones_collected += 1;
                    if hidden {
                        self.stats.hidden_bones_collected += 1;
                    }
                }
                GameEvent::PlayerHit { lost_score, .. } => {
                    self.stats.hits += 1;
                    self.stats.best_score = self.stats.best_score.max(lost_score);
                }
                GameEvent::Spawned { .. } => {}
                _ => log::debug!("Frame {}: {:?}", self.state.time_ticks, event),
            }
        }
        self.stats.best_score = self.stats.best_score.max(self.state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScriptedHost;

    #[test]
    fn test_frame_ticks_once() {
        let mut game = Game::new(5, Tuning::default());
        let frame = game.frame(&HeldKeys::new());
        assert_eq!(game.state().time_ticks, 1);
        assert_eq!(game.stats().frames, 1);
        assert_eq!(frame.score, game.state().score);
    }

    #[test]
    fn test_run_frame_through_host() {
        let script: Vec<HeldKeys> = (0..30)
            .map(|_| ["ArrowRight"].into_iter().collect::<HeldKeys>())
            .collect();
        let mut host = ScriptedHost::new(script);
        let mut game = Game::new(5, Tuning::default());

        while host.remaining() > 0 {
            game.run_frame(&mut host);
        }

        assert_eq!(host.presented(), 30);
        assert_eq!(game.state().time_ticks, 30);
        assert!(host.last_frame().is_some());
    }

    #[test]
    fn test_restart_resets_world_and_stats() {
        let mut game = Game::new(5, Tuning::default());
        for _ in 0..10 {
            game.frame(&HeldKeys::new());
        }
        game.restart(6);
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.state().seed, 6);
        assert_eq!(game.stats(), &SessionStats::default());
        assert_eq!(game.state().bones.len(), 1);
    }

    #[test]
    fn test_stats_follow_events() {
        let mut game = Game::new(5, Tuning::default());
        game.state.score = 3;
        game.state.reset_after_hit(crate::sim::HazardKind::Asteroid);
        game.record_events();
        assert_eq!(game.stats().hits, 1);
        assert_eq!(game.stats().best_score, 3);
    }
}
