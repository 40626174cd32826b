//! Collision tests between the player, platforms, and patrol robots
//!
//! All shapes are axis-aligned boxes; the interesting part is telling a
//! landing from above apart from brushing a platform's side.

use super::rect::Rect;
use super::state::Platform;

/// Did a player box that moved down by `vel_y` this frame cross onto
/// `platform` from above?
///
/// Requires an overlap, downward motion, and a pre-step bottom edge at or
/// above the platform top.
pub fn lands_on(player: &Rect, vel_y: f32, platform: &Rect) -> bool {
    player.overlaps(platform) && vel_y > 0.0 && player.bottom() - vel_y <= platform.top()
}

/// The last platform in iteration order that `player` lands on, if any
pub fn landing_platform(player: &Rect, vel_y: f32, platforms: &[Platform]) -> Option<usize> {
    platforms
        .iter()
        .rposition(|p| lands_on(player, vel_y, &p.rect))
}

/// The first platform whose top is exactly level with the bottom of `body`
pub fn platform_under<'a>(body: &Rect, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms.iter().find(|p| body.bottom() == p.rect.top())
}

/// Should a patrol robot turn around? True when it stands on a platform
/// and has walked past either end of it.
pub fn patrol_should_turn(body: &Rect, platforms: &[Platform]) -> bool {
    platform_under(body, platforms).is_some_and(|p| body.exceeds_horizontally(&p.rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(x: f32, y: f32) -> Platform {
        Platform {
            rect: Rect::new(x, y, 200.0, 20.0),
        }
    }

    #[test]
    fn test_lands_from_above() {
        let p = platform(300.0, 500.0).rect;
        // Bottom moved 498 -> 504 this frame
        let player = Rect::new(320.0, 464.0, 40.0, 40.0);
        assert!(lands_on(&player, 6.0, &p));
    }

    #[test]
    fn test_rising_player_does_not_land() {
        let p = platform(300.0, 500.0).rect;
        let player = Rect::new(320.0, 464.0, 40.0, 40.0);
        assert!(!lands_on(&player, -6.0, &p));
        assert!(!lands_on(&player, 0.0, &p));
    }

    #[test]
    fn test_side_entry_does_not_land() {
        let p = platform(300.0, 500.0).rect;
        // Already level with the platform body, pre-step bottom well below its top
        let player = Rect::new(290.0, 480.0, 40.0, 40.0);
        assert!(!lands_on(&player, 2.0, &p));
    }

    #[test]
    fn test_last_platform_wins() {
        let platforms = [platform(300.0, 500.0), platform(300.0, 502.0)];
        let player = Rect::new(320.0, 465.0, 40.0, 40.0);
        assert_eq!(landing_platform(&player, 6.0, &platforms), Some(1));
        assert_eq!(landing_platform(&player, -1.0, &platforms), None);
    }

    #[test]
    fn test_patrol_turns_at_edges() {
        let platforms = [platform(300.0, 500.0)];
        let inside = Rect::new(400.0, 460.0, 40.0, 40.0);
        let past_left = Rect::new(298.0, 460.0, 40.0, 40.0);
        let past_right = Rect::new(462.0, 460.0, 40.0, 40.0);
        let airborne = Rect::new(298.0, 450.0, 40.0, 40.0);

        assert!(!patrol_should_turn(&inside, &platforms));
        assert!(patrol_should_turn(&past_left, &platforms));
        assert!(patrol_should_turn(&past_right, &platforms));
        assert!(!patrol_should_turn(&airborne, &platforms));
    }
}
