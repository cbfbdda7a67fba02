use serde::{Deserialize, Serialize};

use crate::game_state::Game;
use crate::physics::{Player, PlayerState};
use crate::types::BUFFER_COLUMNS;

/// Plain-data copy of a run, cheap to hand to views and serializers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frame: u64,
    pub seed: u64,
    pub score: f64,
    pub display_score: u64,
    pub terminated: bool,
    pub player: Player,
    pub player_state: PlayerState,
    pub scroll_offset: u32,
    pub recycles: u64,
    /// Absolute index of the column in slot 0
    pub first_column: u64,
    pub heights: [u8; BUFFER_COLUMNS],
    pub pickups: [bool; BUFFER_COLUMNS],
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let buffer = game.buffer();
        let mut heights = [0u8; BUFFER_COLUMNS];
        let mut pickups = [false; BUFFER_COLUMNS];
        for (slot, column) in buffer.strip().iter().take(BUFFER_COLUMNS).enumerate() {
            heights[slot] = column.height;
            pickups[slot] = column.has_pickup;
        }

        Self {
            frame: game.frame(),
            seed: buffer.seed(),
            score: game.score(),
            display_score: game.display_score(),
            terminated: game.is_over(),
            player: *game.player(),
            player_state: game.player_state(),
            scroll_offset: buffer.offset(),
            recycles: buffer.recycles(),
            first_column: buffer.strip().first().map_or(0, |c| c.index),
            heights,
            pickups,
        }
    }
}
