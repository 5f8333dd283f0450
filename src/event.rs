//! Presentation events emitted by the game.

use alloc::string::String;

use crate::animation::LidAnimation;
use crate::outcome::Outcome;

/// A visible change the frontend should render.
///
/// Events are queued in the order the changes happen and drained with
/// [`Game::drain_events`](crate::Game::drain_events).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new round started.
    RoundStarted {
        /// Round generation.
        round: u32,
    },
    /// A chest became interactable.
    ChestEnabled {
        /// Chest index.
        index: usize,
    },
    /// A chest stopped accepting input.
    ChestDisabled {
        /// Chest index.
        index: usize,
    },
    /// A chest was opened.
    ChestOpened {
        /// Chest index.
        index: usize,
        /// Revealed outcome.
        outcome: Outcome,
        /// Lid animation to play.
        animation: LidAnimation,
    },
    /// A chest was closed and its label removed.
    ChestReset {
        /// Chest index.
        index: usize,
        /// Lid animation to play.
        animation: LidAnimation,
    },
    /// The score line changed.
    ScoreChanged {
        /// New score line (empty when idle).
        text: String,
    },
    /// The bonus banner appeared.
    BonusBannerShown {
        /// Banner text.
        text: String,
    },
    /// The bonus banner disappeared.
    BonusBannerHidden,
    /// The play trigger accepts input.
    PlayEnabled,
    /// The play trigger ignores input.
    PlayDisabled,
    /// Every chest was opened and the final score published.
    RoundCompleted {
        /// Round generation.
        round: u32,
        /// Final score.
        score: u64,
    },
}
