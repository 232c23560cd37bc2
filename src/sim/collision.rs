//! Player-vs-rectangle collision resolution
//!
//! Platforms, the floor and walls all share one collider shape (an
//! axis-aligned rectangle); what differs is the resolution policy, tagged
//! by [`SurfaceKind`]. Supports only ever stop downward motion, blocks
//! only ever stop horizontal motion.

use crate::consts::{BOUNCE_RETAIN, PLAYER_SIZE};

use super::rect::Aabb;
use super::state::Player;

/// Resolution policy for a static rectangle collider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Landable from above only: a falling player snaps onto the top edge
    /// and bounces. Upward or sideways motion passes through.
    OneWaySupport,
    /// Solid on both horizontal sides: pushes the player out and zeroes
    /// horizontal velocity. No vertical effect.
    TwoSidedBlock,
}

/// A static rectangle collider with its resolution policy
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub rect: Aabb,
    pub kind: SurfaceKind,
}

impl Collider {
    /// A one-way support (platform, floor)
    pub fn support(rect: Aabb) -> Self {
        Self {
            rect,
            kind: SurfaceKind::OneWaySupport,
        }
    }

    /// A two-sided horizontal blocker (wall)
    pub fn block(rect: Aabb) -> Self {
        Self {
            rect,
            kind: SurfaceKind::TwoSidedBlock,
        }
    }
}

/// Resolve the player against one collider, mutating position, velocity
/// and the grounded flag in place.
///
/// Colliders are resolved one at a time in level order; a later collider
/// sees the corrections applied by earlier ones in the same frame.
pub fn resolve_player(player: &mut Player, collider: &Collider) {
    let player_box = player.aabb();
    if !player_box.intersects(&collider.rect) {
        return;
    }

    match collider.kind {
        SurfaceKind::OneWaySupport => {
            // Only a falling player lands; rising or sliding players pass
            // straight through.
            if player.vel.y > 0.0 {
                player.pos.y = collider.rect.top() - PLAYER_SIZE;
                player.vel.y = -player.vel.y * BOUNCE_RETAIN;
                player.grounded = true;
            }
        }
        SurfaceKind::TwoSidedBlock => {
            let wall = &collider.rect;
            if player.vel.x > 0.0
                && player_box.right() > wall.left()
                && player_box.left() < wall.left()
            {
                // Hitting the wall's left face
                player.pos.x = wall.left() - PLAYER_SIZE;
                player.vel.x = 0.0;
            } else if player.vel.x < 0.0
                && player_box.left() < wall.right()
                && player_box.right() > wall.right()
            {
                // Hitting the wall's right face
                player.pos.x = wall.right();
                player.vel.x = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn falling_player_over(rect: &Aabb) -> Player {
        let mut player = Player::new(Vec2::new(rect.left(), rect.top() - PLAYER_SIZE + 5.0));
        player.vel = Vec2::new(0.0, 6.0);
        player
    }

    #[test]
    fn test_support_lands_falling_player() {
        let support = Collider::support(Aabb::at(100.0, 550.0, 200.0, 20.0));
        let mut player = falling_player_over(&support.rect);

        resolve_player(&mut player, &support);

        assert_eq!(player.aabb().bottom(), support.rect.top());
        assert!((player.vel.y - (-6.0 * BOUNCE_RETAIN)).abs() < 1e-6);
        assert!(player.grounded);
    }

    #[test]
    fn test_support_ignores_rising_player() {
        let support = Collider::support(Aabb::at(100.0, 550.0, 200.0, 20.0));
        let mut player = falling_player_over(&support.rect);
        player.vel.y = -6.0;
        let before = player.pos;

        resolve_player(&mut player, &support);

        assert_eq!(player.pos, before);
        assert_eq!(player.vel.y, -6.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_support_miss_when_clear() {
        let support = Collider::support(Aabb::at(100.0, 550.0, 200.0, 20.0));
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.vel = Vec2::new(0.0, 6.0);

        resolve_player(&mut player, &support);

        assert!(!player.grounded);
        assert_eq!(player.vel.y, 6.0);
    }

    #[test]
    fn test_block_stops_rightward_motion() {
        let wall = Collider::block(Aabb::at(600.0, 420.0, 20.0, 180.0));
        // Player straddling the wall's left edge, moving right
        let mut player = Player::new(Vec2::new(600.0 - PLAYER_SIZE + 5.0, 450.0));
        player.vel = Vec2::new(5.0, 0.0);

        resolve_player(&mut player, &wall);

        assert_eq!(player.aabb().right(), wall.rect.left());
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_block_stops_leftward_motion() {
        let wall = Collider::block(Aabb::at(600.0, 420.0, 20.0, 180.0));
        // Player straddling the wall's right edge, moving left
        let mut player = Player::new(Vec2::new(615.0, 450.0));
        player.vel = Vec2::new(-5.0, 0.0);

        resolve_player(&mut player, &wall);

        assert_eq!(player.aabb().left(), wall.rect.right());
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_block_has_no_vertical_effect() {
        let wall = Collider::block(Aabb::at(600.0, 420.0, 20.0, 180.0));
        let mut player = Player::new(Vec2::new(600.0 - PLAYER_SIZE + 5.0, 450.0));
        player.vel = Vec2::new(5.0, 3.0);

        resolve_player(&mut player, &wall);

        assert_eq!(player.vel.y, 3.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_block_ignores_stationary_player() {
        let wall = Collider::block(Aabb::at(600.0, 420.0, 20.0, 180.0));
        let mut player = Player::new(Vec2::new(600.0 - PLAYER_SIZE + 5.0, 450.0));
        let before = player.pos;

        resolve_player(&mut player, &wall);

        assert_eq!(player.pos, before);
    }
}
