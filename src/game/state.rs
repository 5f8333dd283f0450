//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been started yet.
    Idle,
    /// Waiting for the player to pick a chest.
    Picking,
    /// A chest is playing its open animation; input is locked.
    Opening,
    /// Every chest is open and the final score is published.
    RoundOver,
}

/// Counters for the round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    /// Round generation, bumped by every round start.
    pub round: u32,
    /// Chests opened so far this round.
    pub opened_count: usize,
    /// Points collected so far this round.
    pub score: u64,
    /// Number of chests on the board.
    pub chest_count: usize,
}

impl RoundState {
    pub(crate) const fn new(chest_count: usize) -> Self {
        Self {
            round: 0,
            opened_count: 0,
            score: 0,
            chest_count,
        }
    }

    /// Clears the counters and moves to the next generation.
    pub(crate) const fn begin_next(&mut self) {
        self.round = self.round.wrapping_add(1);
        self.opened_count = 0;
        self.score = 0;
    }

    /// Returns whether every chest has been opened.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.opened_count >= self.chest_count
    }

    /// Chests still closed this round.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.chest_count.saturating_sub(self.opened_count)
    }
}
