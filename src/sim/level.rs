//! The fixed level layout
//!
//! One hand-placed level, built once at startup from literal tables. The
//! course runs left to right for roughly 4800 pixels and ends at a goal
//! perch past the last platform.

use glam::Vec2;

use super::rect::Aabb;
use super::state::{Coin, Obstacle, Platform, Wall};

/// Static level data: geometry, spawn points and the goal
#[derive(Debug, Clone)]
pub struct Level {
    /// Where the player appears at startup and after a reset
    pub spawn: Vec2,
    /// One-way platforms, in resolution order
    pub platforms: Vec<Platform>,
    /// Full-width ground strip
    pub floor: Platform,
    /// Two-sided blockers
    pub walls: Vec<Wall>,
    /// Obstacles in their spawn state
    pub obstacles: Vec<Obstacle>,
    /// Top-left corners of the default coin set
    pub coin_spawns: Vec<Vec2>,
    /// Touching this with the coin set empty completes the level
    pub goal: Aabb,
}

impl Level {
    /// Build the active coin set from the spawn table
    pub fn coins(&self) -> Vec<Coin> {
        self.coin_spawns.iter().map(|&pos| Coin::new(pos)).collect()
    }
}

impl Default for Level {
    fn default() -> Self {
        let platforms = vec![
            Platform::new(Aabb::at(100.0, 550.0, 200.0, 20.0)),
            Platform::new(Aabb::at(350.0, 500.0, 150.0, 20.0)),
            Platform::new(Aabb::at(600.0, 400.0, 200.0, 20.0)),
            Platform::new(Aabb::at(900.0, 350.0, 150.0, 20.0)),
            Platform::new(Aabb::at(1250.0, 300.0, 250.0, 20.0)),
            Platform::new(Aabb::at(1700.0, 450.0, 200.0, 20.0)),
            Platform::new(Aabb::at(2100.0, 380.0, 200.0, 20.0)),
            Platform::new(Aabb::at(2600.0, 550.0, 150.0, 20.0)),
            Platform::new(Aabb::at(3100.0, 400.0, 200.0, 20.0)),
            Platform::new(Aabb::at(3700.0, 350.0, 150.0, 20.0)),
            Platform::new(Aabb::at(4200.0, 300.0, 200.0, 20.0)),
        ];

        let walls = vec![
            Wall::new(Aabb::at(600.0, 420.0, 20.0, 180.0)),
            Wall::new(Aabb::at(1600.0, 450.0, 20.0, 200.0)),
            Wall::new(Aabb::at(3100.0, 400.0, 20.0, 200.0)),
            Wall::new(Aabb::at(3700.0, 350.0, 20.0, 200.0)),
        ];

        let obstacles = vec![
            Obstacle::new(Aabb::at(800.0, 530.0, 50.0, 50.0), 700.0, 1100.0),
            Obstacle::new(Aabb::at(1500.0, 530.0, 50.0, 50.0), 1400.0, 1800.0),
            Obstacle::new(Aabb::at(2300.0, 530.0, 50.0, 50.0), 2200.0, 2500.0),
            Obstacle::new(Aabb::at(3200.0, 530.0, 50.0, 50.0), 3100.0, 3400.0),
            Obstacle::new(Aabb::at(4000.0, 530.0, 50.0, 50.0), 3900.0, 4200.0),
        ];

        let coin_spawns = vec![
            Vec2::new(500.0, 500.0),
            Vec2::new(1200.0, 400.0),
            Vec2::new(2000.0, 450.0),
        ];

        Self {
            spawn: Vec2::new(400.0, 300.0),
            platforms,
            floor: Platform::new(Aabb::at(0.0, 580.0, 9000.0, 20.0)),
            walls,
            obstacles,
            coin_spawns,
            goal: Aabb::at(4700.0, 250.0, 100.0, 20.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_counts() {
        let level = Level::default();
        assert_eq!(level.platforms.len(), 11);
        assert_eq!(level.walls.len(), 4);
        assert_eq!(level.obstacles.len(), 5);
        assert_eq!(level.coin_spawns.len(), 3);
        assert_eq!(level.coins().len(), 3);
    }

    #[test]
    fn test_obstacles_spawn_inside_their_limits() {
        let level = Level::default();
        for obstacle in &level.obstacles {
            assert!(obstacle.rect.left() >= obstacle.left_limit);
            assert!(obstacle.rect.right() <= obstacle.right_limit);
        }
    }

    #[test]
    fn test_floor_spans_the_course() {
        let level = Level::default();
        assert!(level.floor.rect.left() <= 0.0);
        assert!(level.floor.rect.right() >= level.goal.right());
    }

    #[test]
    fn test_goal_sits_past_the_last_platform() {
        let level = Level::default();
        let last = level
            .platforms
            .iter()
            .map(|p| p.rect.right())
            .fold(0.0, f32::max);
        assert!(level.goal.left() > last);
    }
}
