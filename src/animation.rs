//! Lid animation descriptors handed to the presentation layer.
//!
//! The engine never tweens anything itself. It describes where the chest lid
//! should end up and how long it should take; frontends interpolate.

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;
use core::time::Duration;

use crate::outcome::Outcome;

/// Easing curve for a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Quadratic ease-out.
    Power2Out,
}

/// Position of the chest lid relative to its closed resting place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LidPose {
    /// Vertical offset in layout units (negative is up).
    pub lift: f32,
    /// Rotation in radians (negative opens towards the back).
    pub rotation: f32,
}

impl LidPose {
    /// The closed lid.
    pub const CLOSED: Self = Self {
        lift: 0.0,
        rotation: 0.0,
    };

    /// Returns the pose with the given lift and rotation.
    #[must_use]
    pub const fn new(lift: f32, rotation: f32) -> Self {
        Self { lift, rotation }
    }
}

/// A single step towards a target pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Pose at the end of the step.
    pub to: LidPose,
    /// How long the step takes.
    pub duration: Duration,
    /// Easing applied over the step.
    pub easing: Easing,
}

/// Sequence of tweens played one after another.
#[derive(Debug, Clone, PartialEq)]
pub struct LidAnimation {
    /// Steps in playback order.
    pub steps: Vec<Tween>,
}

impl LidAnimation {
    /// Builds the open animation for an outcome.
    ///
    /// A bonus swings the lid fully back, a win opens it halfway, and a loss
    /// lifts the lid slightly before it drops shut again.
    #[must_use]
    pub fn open(outcome: Outcome, duration: Duration) -> Self {
        let steps = match outcome {
            Outcome::Bonus => vec![tween(LidPose::new(0.0, -PI / 2.0), duration)],
            Outcome::Win => vec![tween(LidPose::new(0.0, -PI / 4.0), duration)],
            Outcome::Lost => {
                let half = duration / 2;
                vec![
                    tween(LidPose::new(-30.0, -PI / 16.0), half),
                    tween(LidPose::CLOSED, duration.saturating_sub(half)),
                ]
            }
        };
        Self { steps }
    }

    /// Builds the animation returning the lid to its closed pose.
    #[must_use]
    pub fn close(duration: Duration) -> Self {
        Self {
            steps: vec![tween(LidPose::CLOSED, duration)],
        }
    }

    /// Total playback time of all steps.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }

    /// Pose the lid rests in once playback finishes.
    #[must_use]
    pub fn final_pose(&self) -> LidPose {
        self.steps.last().map_or(LidPose::CLOSED, |step| step.to)
    }
}

const fn tween(to: LidPose, duration: Duration) -> Tween {
    Tween {
        to,
        duration,
        easing: Easing::Power2Out,
    }
}
