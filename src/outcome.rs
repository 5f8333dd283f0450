//! Chest outcomes and the two-stage outcome draw.

use crate::options::GameOptions;
use crate::source::UniformSource;

/// Result of opening a chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Nothing won.
    Lost,
    /// A regular win.
    Win,
    /// A win upgraded to the bonus.
    Bonus,
}

impl Outcome {
    /// Draws an outcome.
    ///
    /// The first draw decides between a loss and a win: values at or above
    /// `win_chance` lose. Only a win takes a second draw, which turns it into
    /// a bonus when below `win_bonus_chance`.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::{Outcome, ScriptedSource};
    ///
    /// let mut source = ScriptedSource::new([0.1, 0.1]);
    /// assert_eq!(Outcome::draw(&mut source, 0.5, 0.25), Outcome::Bonus);
    /// ```
    pub fn draw<S: UniformSource + ?Sized>(
        source: &mut S,
        win_chance: f64,
        win_bonus_chance: f64,
    ) -> Self {
        if source.next_unit() >= win_chance {
            return Self::Lost;
        }
        if source.next_unit() < win_bonus_chance {
            Self::Bonus
        } else {
            Self::Win
        }
    }

    /// Points this outcome adds to the round score.
    #[must_use]
    pub const fn points(self, options: &GameOptions) -> u64 {
        match self {
            Self::Lost => 0,
            Self::Win => options.win_points,
            Self::Bonus => options.bonus_points,
        }
    }

    /// Label shown under an opened chest.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lost => "LOSE",
            Self::Win => "WIN",
            Self::Bonus => "BONUS",
        }
    }

    /// Returns `true` for [`Outcome::Win`] and [`Outcome::Bonus`].
    #[must_use]
    pub const fn is_win(self) -> bool {
        !matches!(self, Self::Lost)
    }
}
