//! Bounce - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: User preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// All lengths are in pixels; velocities and accelerations are in pixels
/// per frame at the fixed 60 Hz step. Screen coordinates are y-down.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Player ball radius; its bounding box is twice this on a side
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SIZE: f32 = PLAYER_RADIUS * 2.0;

    /// Horizontal run speed while a direction key is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Jump impulse (negative = up)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Per-frame downward acceleration
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal velocity multiplier while no direction key is held
    pub const GROUND_FRICTION: f32 = 0.9;
    /// Vertical energy retained on a landing bounce
    pub const BOUNCE_RETAIN: f32 = 0.7;

    /// Obstacle patrol speed magnitude
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Obstacles are square blocks
    pub const OBSTACLE_SIZE: f32 = 50.0;

    /// Coin radius; collision uses its bounding box
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_SIZE: f32 = COIN_RADIUS * 2.0;

    /// View dimensions the camera maps to the canvas
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// The camera leads the player by this much horizontally
    pub const CAMERA_LEAD: f32 = 200.0;
    /// The camera's fixed vertical center
    pub const CAMERA_HEIGHT: f32 = 300.0;
}
