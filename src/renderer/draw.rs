//! Draw command list
//!
//! Each frame the world is flattened into a clear followed by filled
//! rectangles, back to front: platforms, player, bones, asteroids, robots.
//! Any surface that can fill a rectangle can present it.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Rect};

/// An sRGB fill color with opacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity (0.0 - 1.0)
    pub a: f32,
}

impl Color {
    /// Opaque color from `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string for a canvas `fillStyle`
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Entity palette
pub mod palette {
    use super::Color;

    pub const PLATFORM: Color = Color::hex(0x4b0082);
    pub const PLAYER: Color = Color::hex(0x00ccff);
    /// Player while slow-time is active
    pub const PLAYER_SLOW_TIME: Color = Color::hex(0x00ffcc);
    pub const BONE: Color = Color::hex(0xffd700);
    /// Hidden bone while not revealing
    pub const BONE_HIDDEN: Color = Color::rgba(255, 255, 255, 0.2);
    pub const ASTEROID: Color = Color::hex(0x808080);
    pub const ROBOT: Color = Color::hex(0xff4500);
}

/// A single drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear,
    FillRect { rect: Rect, color: Color },
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub score: u64,
    /// Score label for the HUD
    pub hud_text: String,
    /// Game-over message, if one is showing
    pub message: Option<String>,
}

/// Flatten the world into a frame
pub fn build_frame(state: &GameState) -> Frame {
    let revealing = state.player.revealing;
    let mut commands = Vec::with_capacity(
        2 + state.platforms.len() + state.bones.len() + state.asteroids.len() + state.robots.len(),
    );
    commands.push(DrawCommand::Clear);

    let mut fill = |rect: Rect, color: Color| commands.push(DrawCommand::FillRect { rect, color });

    for platform in &state.platforms {
        fill(platform.rect, palette::PLATFORM);
    }

    let player_color = if state.player.slow_time {
        palette::PLAYER_SLOW_TIME
    } else {
        palette::PLAYER
    };
    fill(state.player.rect, player_color);

    for bone in state.active_bones() {
        let color = if bone.dimmed(revealing) {
            palette::BONE_HIDDEN
        } else {
            palette::BONE
        };
        fill(bone.rect, color);
    }

    for asteroid in &state.asteroids {
        fill(asteroid.rect, palette::ASTEROID);
    }

    for robot in &state.robots {
        fill(robot.rect, palette::ROBOT);
    }

    Frame {
        commands,
        score: state.score,
        hud_text: format!("Data Bones: {}", state.score),
        message: state.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Bone;
    use crate::tuning::Tuning;

    fn colors(frame: &Frame) -> Vec<Color> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { color, .. } => Some(*color),
                DrawCommand::Clear => None,
            })
            .collect()
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(palette::PLATFORM.to_css(), "#4b0082");
        assert_eq!(palette::ROBOT.to_css(), "#ff4500");
        assert_eq!(palette::BONE_HIDDEN.to_css(), "rgba(255, 255, 255, 0.2)");
    }

    #[test]
    fn test_frame_order() {
        let state = GameState::new(1);
        let frame = build_frame(&state);

        assert_eq!(frame.commands[0], DrawCommand::Clear);
        let colors = colors(&frame);
        assert_eq!(&colors[..3], &[palette::PLATFORM; 3]);
        assert_eq!(colors[3], palette::PLAYER);
        assert_eq!(colors.len(), 3 + 1 + 1 + 1 + 1);
        assert_eq!(colors[5], palette::ASTEROID);
        assert_eq!(colors[6], palette::ROBOT);
        assert_eq!(frame.hud_text, "Data Bones: 0");
        assert_eq!(frame.message, None);
    }

    #[test]
    fn test_player_tint_in_slow_time() {
        let mut state = GameState::empty(1, Tuning::default());
        state.player.slow_time = true;
        assert_eq!(colors(&build_frame(&state))[3], palette::PLAYER_SLOW_TIME);
    }

    #[test]
    fn test_bone_colors_and_parked_bones_skipped() {
        let mut state = GameState::empty(1, Tuning::default());
        for (hidden, parked) in [(false, false), (true, false), (true, true)] {
            let id = state.next_entity_id();
            state.bones.push(Bone {
                id,
                rect: Rect::new(id as f32 * 30.0, 0.0, 20.0, 20.0),
                hidden,
                parked,
            });
        }

        let frame_colors = colors(&build_frame(&state));
        assert_eq!(&frame_colors[4..], &[palette::BONE, palette::BONE_HIDDEN]);

        state.player.revealing = true;
        let frame_colors = colors(&build_frame(&state));
        assert_eq!(&frame_colors[4..], &[palette::BONE, palette::BONE]);
    }
}
