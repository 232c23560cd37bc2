//! Game state and core simulation types
//!
//! Everything the step function mutates lives in [`GameState`]; the static
//! layout it reads lives in [`Level`].

use glam::Vec2;

use crate::consts::*;

use super::collision::Collider;
use super::level::Level;
use super::rect::Aabb;

/// The player ball
///
/// `pos` is the top-left corner of the bounding box; the ball is drawn
/// centered inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set when the most recent vertical collision resolved as a landing.
    /// Enables jumping. Cleared only by jumping or a reset - walking off a
    /// ledge leaves it set.
    pub grounded: bool,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    /// Center of the ball, for rendering
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_RADIUS)
    }
}

/// A static rectangle the player can land on (one-way). The floor is a
/// platform spanning the whole level.
#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Aabb,
}

impl Platform {
    pub fn new(rect: Aabb) -> Self {
        Self { rect }
    }

    pub fn collider(&self) -> Collider {
        Collider::support(self.rect)
    }
}

/// A static rectangle that blocks horizontal motion of the player and of
/// patrolling obstacles.
#[derive(Debug, Clone)]
pub struct Wall {
    pub rect: Aabb,
}

impl Wall {
    pub fn new(rect: Aabb) -> Self {
        Self { rect }
    }

    pub fn collider(&self) -> Collider {
        Collider::block(self.rect)
    }
}

/// A patrolling block. Touching it kills the player (full reset).
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub rect: Aabb,
    /// Signed horizontal speed, magnitude [`OBSTACLE_SPEED`]
    pub vel_x: f32,
    /// Patrol bounds for the left/right edges of the block
    pub left_limit: f32,
    pub right_limit: f32,
}

impl Obstacle {
    pub fn new(rect: Aabb, left_limit: f32, right_limit: f32) -> Self {
        Self {
            rect,
            vel_x: OBSTACLE_SPEED,
            left_limit,
            right_limit,
        }
    }

    /// Advance one patrol step and flip direction at the limits.
    ///
    /// The limit test runs after the move and uses `<=`/`>=`, so the block
    /// can overshoot a limit by up to one frame's speed before turning
    /// around.
    pub fn patrol(&mut self) {
        self.rect.pos.x += self.vel_x;
        if self.rect.left() <= self.left_limit || self.rect.right() >= self.right_limit {
            self.vel_x = -self.vel_x;
        }
    }
}

/// A collectible coin. Collision uses the bounding box of the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    /// Top-left of the coin's bounding box
    pub pos: Vec2,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(COIN_SIZE))
    }

    /// Center of the coin, for rendering
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(COIN_RADIUS)
    }
}

/// Complete game state: the static level plus everything a tick mutates
#[derive(Debug, Clone)]
pub struct GameState {
    /// Static layout (platforms, walls, goal, spawn points)
    pub level: Level,
    pub player: Player,
    /// Live obstacles. These survive resets - the patrol keeps running
    /// across attempts.
    pub obstacles: Vec<Obstacle>,
    /// Active (uncollected) coins
    pub coins: Vec<Coin>,
    /// Coins collected this attempt
    pub coin_count: u32,
    /// Terminal latch; freezes the simulation until a reset
    pub level_completed: bool,
    /// Camera center in world coordinates
    pub camera: Vec2,
    /// Frames simulated since startup. Not part of an attempt, so resets
    /// leave it alone.
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh state for a level
    pub fn new(level: Level) -> Self {
        let player = Player::new(level.spawn);
        let obstacles = level.obstacles.clone();
        let coins = level.coins();
        let camera = level.spawn;
        Self {
            level,
            player,
            obstacles,
            coins,
            coin_count: 0,
            level_completed: false,
            camera,
            time_ticks: 0,
        }
    }

    /// Reinitialize the current attempt: player back at spawn with zero
    /// velocity, flags and counter cleared, camera on spawn, coin set
    /// rebuilt in full. Obstacles are deliberately untouched.
    ///
    /// Idempotent: resetting twice is the same as resetting once.
    pub fn reset(&mut self) {
        self.player = Player::new(self.level.spawn);
        self.level_completed = false;
        self.coin_count = 0;
        self.camera = self.level.spawn;
        self.coins = self.level.coins();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_aabb_tracks_position() {
        let player = Player::new(Vec2::new(400.0, 300.0));
        let aabb = player.aabb();
        assert_eq!(aabb.pos, Vec2::new(400.0, 300.0));
        assert_eq!(aabb.size, Vec2::splat(PLAYER_SIZE));
        assert_eq!(player.center(), Vec2::new(420.0, 320.0));
    }

    #[test]
    fn test_obstacle_flips_at_right_limit() {
        let mut obstacle = Obstacle::new(Aabb::at(1046.0, 530.0, 50.0, 50.0), 700.0, 1100.0);
        obstacle.patrol();
        // Moved to 1048, right edge 1098 < 1100: still heading right
        assert_eq!(obstacle.vel_x, OBSTACLE_SPEED);
        obstacle.patrol();
        // Right edge now 1100: flip
        assert_eq!(obstacle.vel_x, -OBSTACLE_SPEED);
    }

    #[test]
    fn test_obstacle_flips_at_left_limit() {
        let mut obstacle = Obstacle::new(Aabb::at(704.0, 530.0, 50.0, 50.0), 700.0, 1100.0);
        obstacle.vel_x = -OBSTACLE_SPEED;
        obstacle.patrol();
        assert_eq!(obstacle.rect.left(), 702.0);
        assert_eq!(obstacle.vel_x, -OBSTACLE_SPEED);
        obstacle.patrol();
        // Left edge now 700: flip
        assert_eq!(obstacle.vel_x, OBSTACLE_SPEED);
    }

    #[test]
    fn test_reset_restores_attempt_state() {
        let mut state = GameState::new(Level::default());
        state.player.pos = Vec2::new(2000.0, 100.0);
        state.player.vel = Vec2::new(5.0, -3.0);
        state.player.grounded = true;
        state.level_completed = true;
        state.coin_count = 2;
        state.coins.clear();
        state.camera = Vec2::new(2200.0, 300.0);

        state.reset();

        assert_eq!(state.player.pos, state.level.spawn);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.grounded);
        assert!(!state.level_completed);
        assert_eq!(state.coin_count, 0);
        assert_eq!(state.camera, state.level.spawn);
        assert_eq!(state.coins.len(), state.level.coin_spawns.len());
    }

    #[test]
    fn test_reset_leaves_obstacles_alone() {
        let mut state = GameState::new(Level::default());
        for _ in 0..100 {
            for obstacle in &mut state.obstacles {
                obstacle.patrol();
            }
        }
        let patrolled = state.obstacles.clone();

        state.reset();

        assert_eq!(state.obstacles, patrolled);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = GameState::new(Level::default());
        state.player.pos = Vec2::new(1234.0, 56.0);
        state.coin_count = 3;

        state.reset();
        let once = state.clone();
        state.reset();

        assert_eq!(state.player, once.player);
        assert_eq!(state.coins, once.coins);
        assert_eq!(state.coin_count, once.coin_count);
        assert_eq!(state.level_completed, once.level_completed);
        assert_eq!(state.camera, once.camera);
    }
}
