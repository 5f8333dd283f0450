use crate::error::ClickError;
use crate::event::GameEvent;
use crate::outcome::Outcome;
use crate::source::UniformSource;

use super::continuation::Continuation;
use super::{Game, GameState};

impl<S: UniformSource> Game<S> {
    /// Opens the chest at `index`.
    ///
    /// Every chest is disabled until the open animation finishes, an outcome
    /// is drawn and its points are added to the score. The rest of the click
    /// (re-enabling chests, the bonus banner, publishing the final score) runs
    /// once [`Game::advance`] moves the clock past the animation duration.
    ///
    /// Returns the drawn outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, another chest is still
    /// opening, or the chest is unknown, disabled, or already opened. The game
    /// is left untouched in every error case; callers routing pointer input
    /// should ignore these.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn click_chest(&self, index: usize) -> Result<Outcome, ClickError> {
        let mut state = self.state.lock();
        let blocked = match *state {
            GameState::Picking => None,
            GameState::Opening => Some(ClickError::InputLocked),
            GameState::Idle | GameState::RoundOver => Some(ClickError::RoundNotActive),
        };
        if let Some(err) = blocked {
            log::trace!("click on chest {index} ignored: {err}");
            return Err(err);
        }

        let mut chests = self.chests.lock();
        let chest = chests.get(index).ok_or(ClickError::ChestNotFound)?;
        if chest.is_opened() {
            return Err(ClickError::AlreadyOpened);
        }
        if !chest.is_enabled() {
            return Err(ClickError::ChestDisabled);
        }

        let mut round = self.round.lock();
        if round.is_complete() {
            return Err(ClickError::RoundNotActive);
        }

        let outcome = Outcome::draw(
            &mut *self.source.lock(),
            self.options.win_chance,
            self.options.win_bonus_chance,
        );
        let animation = chests[index].open(outcome)?;

        // The opened chest was enabled a moment ago and reports as disabled too.
        for chest in chests
            .iter_mut()
            .filter(|chest| chest.is_enabled() || chest.index() == index)
        {
            chest.disable();
            self.emit(GameEvent::ChestDisabled {
                index: chest.index(),
            });
        }
        self.emit(GameEvent::ChestOpened {
            index,
            outcome,
            animation,
        });

        round.opened_count += 1;
        round.score = round.score.saturating_add(outcome.points(&self.options));

        self.timers.lock().schedule(
            self.options.animation_duration,
            Continuation::SettleOpen {
                round: round.round,
                index,
                outcome,
            },
        );
        *state = GameState::Opening;

        log::debug!(
            "round {}: chest {index} opened ({outcome:?}), {}/{} opened, score {}",
            round.round,
            round.opened_count,
            round.chest_count,
            round.score
        );

        Ok(outcome)
    }
}
