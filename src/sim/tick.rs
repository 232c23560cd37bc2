//! Fixed timestep simulation step
//!
//! One call advances the world by one 60 Hz frame. The step is pure with
//! respect to its inputs: same state plus same input flags always produces
//! the same next state.

use glam::Vec2;

use crate::consts::*;

use super::collision::resolve_player;
use super::state::GameState;

/// Raw input flags for a single frame
///
/// `left`/`right` reflect held keys; `jump` and `reset` are one-shot and
/// must be cleared by the caller after the frame is simulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub reset: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // A reset request is honored in every state, including while the
    // completed latch is set.
    if input.reset {
        state.reset();
    }

    // Completed latch freezes the whole step until a reset
    if state.level_completed {
        return;
    }

    state.time_ticks += 1;

    // Horizontal control; friction decays the old speed toward (but never
    // exactly to) zero when neither key is held. Left wins if both are.
    if input.left {
        state.player.vel.x = -MOVE_SPEED;
    } else if input.right {
        state.player.vel.x = MOVE_SPEED;
    } else {
        state.player.vel.x *= GROUND_FRICTION;
    }

    // Jump, only from the ground
    if input.jump && state.player.grounded {
        state.player.vel.y = JUMP_STRENGTH;
        state.player.grounded = false;
    }

    // Gravity
    state.player.vel.y += GRAVITY;

    // Integrate (single explicit Euler step)
    let vel = state.player.vel;
    state.player.pos += vel;

    // Supports first, in level order (a later platform can override an
    // earlier correction in the same frame), then the floor, then walls.
    for platform in &state.level.platforms {
        resolve_player(&mut state.player, &platform.collider());
    }
    resolve_player(&mut state.player, &state.level.floor.collider());
    for wall in &state.level.walls {
        resolve_player(&mut state.player, &wall.collider());
    }

    // Obstacles: patrol, bounce off walls, kill on contact. The limit
    // flip and a wall flip can both fire in one frame and cancel out;
    // that quirk is part of the game's behavior and stays.
    for i in 0..state.obstacles.len() {
        {
            let obstacle = &mut state.obstacles[i];
            obstacle.patrol();
            for wall in &state.level.walls {
                if obstacle.rect.intersects(&wall.rect) {
                    obstacle.vel_x = -obstacle.vel_x;
                }
            }
        }
        if state.player.aabb().intersects(&state.obstacles[i].rect) {
            // Instant death: same full reset as the reset key. Remaining
            // obstacles still update this frame, now against the
            // respawned player.
            state.reset();
        }
    }

    // Coins: one retain pass, each hit coin counts once and disappears
    let player_box = state.player.aabb();
    let collected = &mut state.coin_count;
    state.coins.retain(|coin| {
        if coin.aabb().intersects(&player_box) {
            *collected += 1;
            false
        } else {
            true
        }
    });

    // Goal only opens once every coin is gone
    if state.coins.is_empty() && player_box.intersects(&state.level.goal) {
        state.level_completed = true;
    }

    // Camera leads the runner; it freezes on the completion frame
    if !state.level_completed {
        state.camera = Vec2::new(state.player.pos.x + CAMERA_LEAD, CAMERA_HEIGHT);
    }
}
