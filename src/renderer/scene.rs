//! Scene assembly
//!
//! Turns a [`GameState`] into one triangle list per frame, in the game's
//! fixed draw order: player, platforms, floor, walls, obstacles, coins,
//! goal.

use crate::consts::{COIN_RADIUS, PLAYER_RADIUS};
use crate::sim::GameState;

use super::shapes;
use super::vertex::{Palette, Vertex};

/// Segment counts for the round shapes
const PLAYER_SEGMENTS: u32 = 32;
const COIN_SEGMENTS: u32 = 20;

/// Build the frame's vertex list from the current game state
pub fn build_scene(state: &GameState, palette: &Palette) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    vertices.extend(shapes::circle(
        state.player.center(),
        PLAYER_RADIUS,
        palette.player,
        PLAYER_SEGMENTS,
    ));

    for platform in &state.level.platforms {
        vertices.extend(shapes::rect(&platform.rect, palette.platform));
    }
    vertices.extend(shapes::rect(&state.level.floor.rect, palette.platform));

    for wall in &state.level.walls {
        vertices.extend(shapes::rect(&wall.rect, palette.wall));
    }

    for obstacle in &state.obstacles {
        vertices.extend(shapes::rect(&obstacle.rect, palette.obstacle));
    }

    for coin in &state.coins {
        vertices.extend(shapes::circle(
            coin.center(),
            COIN_RADIUS,
            palette.coin,
            COIN_SEGMENTS,
        ));
    }

    vertices.extend(shapes::rect(&state.level.goal, palette.goal));

    vertices
}
