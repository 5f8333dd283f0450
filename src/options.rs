//! Game configuration options.

use core::time::Duration;

use crate::error::OptionsError;

/// Configuration options for a chest game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use chestrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_chest_count(9)
///     .with_win_chance(0.4)
///     .with_win_points(50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of chests laid out for every round.
    pub chest_count: usize,
    /// Probability that an opened chest wins (0 to 1).
    pub win_chance: f64,
    /// Probability that a win is upgraded to a bonus (0 to 1).
    pub win_bonus_chance: f64,
    /// Duration of the chest open animation.
    ///
    /// Input stays locked for this long after every click.
    pub animation_duration: Duration,
    /// How long the bonus banner stays on screen.
    pub bonus_banner_duration: Duration,
    /// Points awarded for a win.
    pub win_points: u64,
    /// Points awarded for a bonus.
    pub bonus_points: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            chest_count: 6,
            win_chance: 0.5,
            win_bonus_chance: 0.25,
            animation_duration: Duration::from_secs(1),
            bonus_banner_duration: Duration::from_secs(2),
            win_points: 100,
            bonus_points: 200,
        }
    }
}

impl GameOptions {
    /// Sets the number of chests.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_chest_count(3);
    /// assert_eq!(options.chest_count, 3);
    /// ```
    #[must_use]
    pub const fn with_chest_count(mut self, count: usize) -> Self {
        self.chest_count = count;
        self
    }

    /// Sets the win probability.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_chance(0.75);
    /// assert_eq!(options.win_chance, 0.75);
    /// ```
    #[must_use]
    pub const fn with_win_chance(mut self, chance: f64) -> Self {
        self.win_chance = chance;
        self
    }

    /// Sets the probability of a win turning into a bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_bonus_chance(0.1);
    /// assert_eq!(options.win_bonus_chance, 0.1);
    /// ```
    #[must_use]
    pub const fn with_win_bonus_chance(mut self, chance: f64) -> Self {
        self.win_bonus_chance = chance;
        self
    }

    /// Sets the chest open animation duration.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use chestrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_animation_duration(Duration::from_millis(500));
    /// assert_eq!(options.animation_duration, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets how long the bonus banner is shown.
    #[must_use]
    pub const fn with_bonus_banner_duration(mut self, duration: Duration) -> Self {
        self.bonus_banner_duration = duration;
        self
    }

    /// Sets the points awarded for a win.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_points(10);
    /// assert_eq!(options.win_points, 10);
    /// ```
    #[must_use]
    pub const fn with_win_points(mut self, points: u64) -> Self {
        self.win_points = points;
        self
    }

    /// Sets the points awarded for a bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_bonus_points(1_000);
    /// assert_eq!(options.bonus_points, 1_000);
    /// ```
    #[must_use]
    pub const fn with_bonus_points(mut self, points: u64) -> Self {
        self.bonus_points = points;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no chests or a probability lies outside
    /// `0..=1` (NaN included).
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.chest_count == 0 {
            return Err(OptionsError::NoChests);
        }
        if !(0.0..=1.0).contains(&self.win_chance) {
            return Err(OptionsError::WinChanceOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.win_bonus_chance) {
            return Err(OptionsError::BonusChanceOutOfRange);
        }
        Ok(())
    }
}
