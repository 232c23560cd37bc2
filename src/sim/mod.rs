//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (level order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Collider, SurfaceKind, resolve_player};
pub use level::Level;
pub use rect::Aabb;
pub use state::{Coin, GameState, Obstacle, Platform, Player, Wall};
pub use tick::{TickInput, tick};
