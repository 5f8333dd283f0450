//! Score line and bonus banner state.

use alloc::format;
use alloc::string::String;

/// Passive text sink for the score line and the bonus banner.
///
/// Holds only what was last rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDisplay {
    score_text: String,
    banner_text: String,
    banner_visible: bool,
}

impl ScoreDisplay {
    /// Creates an idle display with the banner hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the score line.
    ///
    /// Negative points render the idle (empty) line.
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::ScoreDisplay;
    ///
    /// let mut display = ScoreDisplay::new();
    /// display.show_score(300);
    /// assert_eq!(display.score_text(), "You won 300 $!");
    /// display.show_score(-1);
    /// assert_eq!(display.score_text(), "");
    /// ```
    pub fn show_score(&mut self, points: i64) {
        if points >= 0 {
            self.score_text = format!("You won {points} $!");
        } else {
            self.score_text.clear();
        }
    }

    /// Renders the idle score line.
    pub fn clear_score(&mut self) {
        self.show_score(-1);
    }

    /// Shows the full-screen bonus banner.
    pub fn show_bonus_banner(&mut self, points: u64) {
        self.banner_text = format!("YOU WON THE BONUS - {points}$!");
        self.banner_visible = true;
    }

    /// Hides the bonus banner. The banner text is kept.
    pub const fn hide_bonus_banner(&mut self) {
        self.banner_visible = false;
    }

    /// Last rendered score line.
    #[must_use]
    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// Last rendered banner text.
    #[must_use]
    pub fn banner_text(&self) -> &str {
        &self.banner_text
    }

    /// Returns whether the banner is on screen.
    #[must_use]
    pub const fn is_banner_visible(&self) -> bool {
        self.banner_visible
    }
}
