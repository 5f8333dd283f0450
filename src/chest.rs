//! Chest entity and its visual proxy.

use core::time::Duration;

use crate::animation::{LidAnimation, LidPose};
use crate::error::ChestError;
use crate::outcome::Outcome;

/// Number of chests per layout row.
pub const CHESTS_PER_ROW: usize = 3;
/// Horizontal distance between chest slots.
pub const SLOT_SPACING_X: f32 = 130.0;
/// Vertical distance between chest rows.
pub const SLOT_SPACING_Y: f32 = 170.0;

/// Tint and opacity signalling whether a chest can be clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affordance {
    /// RGB tint multiplied into the sprites.
    pub tint: u32,
    /// Sprite opacity.
    pub alpha: f32,
}

impl Affordance {
    /// Look of an interactable chest.
    pub const ENABLED: Self = Self {
        tint: 0x00FF_FFFF,
        alpha: 1.0,
    };
    /// Look of a chest that ignores input.
    pub const DISABLED: Self = Self {
        tint: 0x0099_9999,
        alpha: 0.6,
    };
}

/// Position of a chest in the grid layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Horizontal offset from the grid origin.
    pub x: f32,
    /// Vertical offset from the grid origin.
    pub y: f32,
}

impl Slot {
    /// Slot for the chest at `index`, filling rows left to right.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        let column = (index % CHESTS_PER_ROW) as f32;
        let row = (index / CHESTS_PER_ROW) as f32;
        Self {
            x: column * SLOT_SPACING_X,
            y: row * SLOT_SPACING_Y,
        }
    }
}

/// A single chest on the board.
///
/// Chests start closed and disabled. Whether a chest may be enabled is the
/// controller's call; the chest only guards against being opened twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Chest {
    index: usize,
    slot: Slot,
    opened: bool,
    enabled: bool,
    outcome: Option<Outcome>,
    lid: LidPose,
    animation_duration: Duration,
}

impl Chest {
    /// Creates a closed, disabled chest.
    #[must_use]
    pub fn new(index: usize, animation_duration: Duration) -> Self {
        Self {
            index,
            slot: Slot::for_index(index),
            opened: false,
            enabled: false,
            outcome: None,
            lid: LidPose::CLOSED,
            animation_duration,
        }
    }

    /// Position of the chest in the layout.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Grid slot of the chest.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns whether the chest was opened this round.
    #[must_use]
    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    /// Returns whether the chest accepts clicks.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Outcome revealed by the chest, if opened.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Result label displayed under the chest, if opened.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::label)
    }

    /// Pose the lid rests in after its latest animation.
    #[must_use]
    pub const fn lid(&self) -> LidPose {
        self.lid
    }

    /// Current tint and opacity.
    #[must_use]
    pub const fn affordance(&self) -> Affordance {
        if self.enabled {
            Affordance::ENABLED
        } else {
            Affordance::DISABLED
        }
    }

    /// Opens the chest with the given outcome.
    ///
    /// The chest is disabled and the returned animation should be played by
    /// the frontend.
    ///
    /// # Errors
    ///
    /// Returns an error if the chest is already opened. The chest is left
    /// untouched in that case.
    pub fn open(&mut self, outcome: Outcome) -> Result<LidAnimation, ChestError> {
        if self.opened {
            return Err(ChestError::AlreadyOpened);
        }

        self.opened = true;
        self.enabled = false;
        self.outcome = Some(outcome);

        let animation = LidAnimation::open(outcome, self.animation_duration);
        self.lid = animation.final_pose();
        Ok(animation)
    }

    /// Makes the chest interactable.
    pub const fn enable(&mut self) {
        self.enabled = true;
    }

    /// Makes the chest ignore input.
    pub const fn disable(&mut self) {
        self.enabled = false;
    }

    /// Closes the chest and clears its outcome for a new round.
    ///
    /// Enabled state is left alone.
    #[must_use = "the close animation should be played"]
    pub fn reset(&mut self) -> LidAnimation {
        self.opened = false;
        self.outcome = None;
        self.lid = LidPose::CLOSED;
        LidAnimation::close(self.animation_duration)
    }
}
