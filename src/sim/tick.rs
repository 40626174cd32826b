//! Per-frame simulation tick
//!
//! Core game loop that advances the world by exactly one display frame.
//! Order within a tick: input, physics, platforms, slow-time countdown,
//! hazards, bones, spawning.

use super::collision::{landing_platform, patrol_should_turn};
use super::state::{GameEvent, GameState, HazardKind};
use crate::consts::*;

/// Directives for a single tick, already interpreted from held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump if grounded; ignored (not queued) while airborne
    pub jump: bool,
    /// Reveal ("deep search") key held
    pub reveal: bool,
    /// Slow-time ("think mode") key held
    pub slow_time: bool,
    /// Any key at all is held, recognized or not
    pub any_key: bool,
}

/// Advance the world by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    // A fresh key press dismisses the game-over message
    if input.any_key && !state.keys_were_held && state.message.take().is_some() {
        log::debug!("Message dismissed");
    }
    state.keys_were_held = input.any_key;

    apply_input(state, input);
    integrate_player(state);
    resolve_platforms(state);
    update_slow_time(state);

    if let Some(hazard) = update_hazards(state) {
        state.reset_after_hit(hazard);
    }

    collect_bones(state);
    state.spawn_due();
}

/// Horizontal movement, jump, and the two mode keys
fn apply_input(state: &mut GameState, input: &TickInput) {
    let speed = state.tuning.move_speed;
    let player = &mut state.player;

    if input.left {
        player.rect.pos.x -= speed;
    }
    if input.right {
        player.rect.pos.x += speed;
    }
    if input.jump && player.grounded {
        player.vel_y = state.tuning.jump_power;
        player.grounded = false;
        state.events.push(GameEvent::Jumped);
    }

    apply_reveal(state, input.reveal);

    let player = &mut state.player;
    if input.slow_time && !player.slow_time {
        player.slow_time = true;
        player.slow_time_ticks = state.tuning.slow_time_frames as i32;
        log::debug!("Slow-time for {} frames", player.slow_time_ticks);
        state.events.push(GameEvent::SlowTimeStarted);
    }
}

/// Park hidden bones on the press edge; restore them every frame the key is up
fn apply_reveal(state: &mut GameState, held: bool) {
    if held && !state.player.revealing {
        state.player.revealing = true;
        let mut parked = 0;
        for bone in state.bones.iter_mut().filter(|b| b.hidden && !b.parked) {
            bone.parked = true;
            parked += 1;
        }
        state.events.push(GameEvent::RevealStarted { parked });
    } else if !held {
        let was_revealing = std::mem::replace(&mut state.player.revealing, false);

        let restored = state.bones.iter().filter(|b| b.parked).count();
        if restored > 0 {
            // Stable: active bones keep their order ahead of the restored ones
            state.bones.sort_by_key(|b| b.parked);
            for bone in &mut state.bones {
                bone.parked = false;
            }
        }
        if was_revealing {
            state.events.push(GameEvent::RevealEnded { restored });
        }
    }
}

/// Gravity, vertical motion, and world bounds
fn integrate_player(state: &mut GameState) {
    let gravity = state.tuning.gravity;
    let player = &mut state.player;
    let was_grounded = player.grounded;

    player.grounded = false;
    player.vel_y += gravity;
    player.rect.pos.y += player.vel_y;

    player.rect.pos.x = player.rect.pos.x.clamp(0.0, WORLD_WIDTH - player.rect.size.x);

    if player.rect.bottom() > WORLD_HEIGHT {
        player.rect.set_bottom(WORLD_HEIGHT);
        player.vel_y = 0.0;
        player.grounded = true;
        if !was_grounded {
            state.events.push(GameEvent::Landed { platform: None });
        }
    }
}

/// Snap onto a platform the player fell onto from above this frame
fn resolve_platforms(state: &mut GameState) {
    let player = &mut state.player;
    let Some(index) = landing_platform(&player.rect, player.vel_y, &state.platforms) else {
        return;
    };

    // One frame of gravity means the player was already standing here
    let was_resting = player.vel_y <= state.tuning.gravity;
    player.rect.set_bottom(state.platforms[index].rect.top());
    player.vel_y = 0.0;
    player.grounded = true;
    if !was_resting {
        state.events.push(GameEvent::Landed {
            platform: Some(index),
        });
    }
}

/// Count slow-time down; it expires on its own, never on key release
fn update_slow_time(state: &mut GameState) {
    let player = &mut state.player;
    if player.slow_time {
        player.slow_time_ticks -= 1;
        if player.slow_time_ticks <= 0 {
            player.slow_time = false;
            state.events.push(GameEvent::SlowTimeEnded);
        }
    }
}

/// Hazard speed multiplier for this frame
fn hazard_speed_scale(state: &GameState) -> f32 {
    if state.player.slow_time {
        state.tuning.slow_time_factor
    } else {
        1.0
    }
}

/// Move asteroids then robots, stopping at the first one touching the player
fn update_hazards(state: &mut GameState) -> Option<HazardKind> {
    let scale = hazard_speed_scale(state);
    let player = state.player.rect;

    // Filter before moving so a fresh spawn always gets one update
    state.asteroids.retain(|a| !a.off_screen());
    for asteroid in &mut state.asteroids {
        asteroid.rect.pos.x -= asteroid.speed * scale;
        if asteroid.rect.overlaps(&player) {
            return Some(HazardKind::Asteroid);
        }
    }

    for robot in &mut state.robots {
        robot.rect.pos.x += robot.speed * scale;
        if patrol_should_turn(&robot.rect, &state.platforms) {
            robot.speed = -robot.speed;
        }
        if robot.rect.overlaps(&player) {
            return Some(HazardKind::Robot);
        }
    }

    None
}

/// Pick up every collectable bone the player overlaps
fn collect_bones(state: &mut GameState) {
    let player = state.player.rect;
    let revealing = state.player.revealing;
    let mut collected = Vec::new();

    state.bones.retain(|bone| {
        if bone.collectable(revealing) && bone.rect.overlaps(&player) {
            collected.push(GameEvent::BoneCollected {
                id: bone.id,
                hidden: bone.hidden,
            });
            false
        } else {
            true
        }
    });

    state.score += collected.len() as u64;
    state.events.extend(collected);
}
