//! Error types for game operations.

use thiserror::Error;

/// Errors produced when validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The chest count is zero.
    #[error("chest count must be at least one")]
    NoChests,
    /// The win chance is not within `0..=1`.
    #[error("win chance must be between 0 and 1")]
    WinChanceOutOfRange,
    /// The bonus chance is not within `0..=1`.
    #[error("win bonus chance must be between 0 and 1")]
    BonusChanceOutOfRange,
}

/// Errors that can occur when opening a single chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChestError {
    /// The chest was already opened this round.
    #[error("chest is already opened")]
    AlreadyOpened,
}

/// Reasons a chest click is ignored.
///
/// None of these change game state. Frontends are expected to drop them
/// silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickError {
    /// No chest at that index.
    #[error("chest not found")]
    ChestNotFound,
    /// No round is in progress (not started yet, or already complete).
    #[error("no round in progress")]
    RoundNotActive,
    /// Another chest is still playing its open animation.
    #[error("input is locked while a chest is opening")]
    InputLocked,
    /// The chest is not interactable.
    #[error("chest is disabled")]
    ChestDisabled,
    /// The chest was already opened this round.
    #[error("chest is already opened")]
    AlreadyOpened,
}

impl From<ChestError> for ClickError {
    fn from(err: ChestError) -> Self {
        match err {
            ChestError::AlreadyOpened => Self::AlreadyOpened,
        }
    }
}

/// Errors that can occur when pressing the play trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The play trigger is disabled while a round is in progress.
    #[error("play trigger is disabled")]
    Disabled,
}
