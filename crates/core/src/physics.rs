//! Physics and collision - gravity, ground contact, walls and money
//!
//! The player is an axis-aligned box sampled at two x positions: its left
//! edge `x` and its right edge `x + PLAYER_WIDTH - 1`. Each sample reads the
//! top of the column underneath.
//!
//! Ground contact uses the taller of the two sampled columns (smallest top y):
//! the player is grounded when its bottom reaches that top, and it is snapped
//! exactly onto it. The result does not depend on which edge is looked at
//! first.
//!
//! Vertical motion uses `step = dt_ms * TIMESTEP_SCALE` simulation units:
//! position integrates velocity, then gravity accrues unless grounded.

use arrayvec::ArrayVec;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::scroll::ScrollBuffer;
use crate::types::{
    InputSnapshot, GRAVITY_ACCELERATION, JUMP_VELOCITY, LEFT_STEP, PLAYER_HEIGHT,
    PLAYER_START_OFFSET, PLAYER_WIDTH, RIGHT_STEP, SCREEN_WIDTH, TIMESTEP_SCALE,
};

/// The player character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Screen-space x of the left edge
    pub x: i32,
    /// Screen-space y of the top edge
    pub y: f32,
    /// Vertical velocity (negative = up)
    pub velocity: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_OFFSET,
            y: 0.0,
            velocity: 0.0,
        }
    }
}

impl Player {
    pub fn new(x: i32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
        }
    }

    pub fn right_edge(&self) -> i32 {
        self.x + PLAYER_WIDTH as i32 - 1
    }

    pub fn bottom(&self) -> f32 {
        self.y + PLAYER_HEIGHT as f32
    }

    /// The two x positions used for ground and money checks.
    pub fn sample_xs(&self) -> [i32; 2] {
        [self.x, self.right_edge()]
    }

    /// Fully scrolled off the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x <= -(PLAYER_WIDTH as i32)
    }
}

/// Vertical state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Airborne,
    Grounded,
}

/// Top the player would rest on, if it is touching the ground.
pub fn ground_contact(buffer: &ScrollBuffer, player: &Player) -> Option<i32> {
    let top = player
        .sample_xs()
        .iter()
        .map(|&x| buffer.column_top_at(x))
        .min()?;
    (player.bottom() >= top as f32).then_some(top)
}

/// Whether the column at `probe_x` rises above the player's bottom.
pub fn will_intersect(buffer: &ScrollBuffer, player: &Player, probe_x: i32) -> bool {
    player.bottom() > buffer.column_top_at(probe_x) as f32
}

/// Advance the player by `dt_ms` of simulated time.
pub fn apply_forces(buffer: &ScrollBuffer, player: &mut Player, dt_ms: u32) -> PlayerState {
    if will_intersect(buffer, player, player.right_edge()) {
        player.x -= 1;
    }

    let step = dt_ms as f32 * TIMESTEP_SCALE;
    player.y += player.velocity * step;

    if let Some(top) = ground_contact(buffer, player) {
        player.y = (top - PLAYER_HEIGHT as i32) as f32;
        player.velocity = 0.0;
        return PlayerState::Grounded;
    }

    player.velocity += GRAVITY_ACCELERATION * step;
    PlayerState::Airborne
}

/// Apply one frame of polled input.
///
/// Movement is refused when it would walk into a taller column or leave the
/// screen; a jump only starts from the ground.
pub fn apply_input(buffer: &ScrollBuffer, player: &mut Player, input: InputSnapshot) {
    if input.right
        && player.x < (SCREEN_WIDTH - PLAYER_WIDTH) as i32
        && !will_intersect(buffer, player, player.x + PLAYER_WIDTH as i32)
    {
        player.x += RIGHT_STEP;
    }

    if input.left && player.x > 0 && !will_intersect(buffer, player, player.x - 1) {
        player.x -= LEFT_STEP;
    }

    if input.jump && ground_contact(buffer, player).is_some() {
        player.velocity = JUMP_VELOCITY;
    }
}

/// Collect money overlapping the player's vertical span.
///
/// Checks the column under each edge; a column is collected at most once, so
/// a frame yields at most two pickups.
pub fn collect_pickups(buffer: &mut ScrollBuffer, player: &Player) -> ArrayVec<Column, 2> {
    let mut collected = ArrayVec::new();

    let player_top = player.y;
    let player_bottom = player.bottom() - 1.0;

    for x in player.sample_xs() {
        let slot = buffer.slot_at(x);
        let Ok(column) = buffer.strip().column(slot).copied() else {
            continue;
        };
        if !column.has_pickup {
            continue;
        }

        let money_top = column.pickup_top() as f32;
        let money_bottom = column.top() as f32;
        if player_top <= money_bottom && player_bottom >= money_top {
            if let Ok(true) = buffer.clear_pickup(slot) {
                debug!("collected money from column {}", column.index);
                collected.push(column);
            }
        }
    }

    collected
}
