use alloc::string::String;

use crate::error::PlayError;
use crate::event::GameEvent;

use super::continuation::Continuation;
use super::{Game, GameState};

impl<S> Game<S> {
    /// Starts a new round.
    ///
    /// Counters are zeroed, every chest is closed and enabled, the play
    /// trigger is disabled and the score line goes idle. Continuations still
    /// pending from the previous round are cancelled. This works from any
    /// state; use [`Game::press_play`] to route player input.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn start_round(&self) {
        let mut state = self.state.lock();

        let mut round = self.round.lock();
        round.begin_next();
        let generation = round.round;
        drop(round);

        let cancelled = self
            .timers
            .lock()
            .retain(|task| !matches!(task, Continuation::SettleOpen { .. }));
        if cancelled > 0 {
            log::debug!("round {generation}: cancelled {cancelled} pending continuation(s)");
        }

        self.emit(GameEvent::RoundStarted { round: generation });

        let mut chests = self.chests.lock();
        for chest in chests.iter_mut() {
            let was_opened = chest.is_opened();
            let animation = chest.reset();
            if was_opened {
                self.emit(GameEvent::ChestReset {
                    index: chest.index(),
                    animation,
                });
            }
        }

        self.set_play_enabled(false);

        for chest in chests.iter_mut().filter(|chest| !chest.is_opened()) {
            if !chest.is_enabled() {
                chest.enable();
                self.emit(GameEvent::ChestEnabled {
                    index: chest.index(),
                });
            }
        }

        self.display.lock().clear_score();
        self.emit(GameEvent::ScoreChanged {
            text: String::new(),
        });

        *state = GameState::Picking;
        log::debug!("round {generation} started");
    }

    /// Handles a press on the play trigger.
    ///
    /// # Errors
    ///
    /// Returns an error if the trigger is disabled, which is the case while a
    /// round is in progress.
    pub fn press_play(&self) -> Result<(), PlayError> {
        if !self.is_play_enabled() {
            log::trace!("play pressed while disabled");
            return Err(PlayError::Disabled);
        }
        self.start_round();
        Ok(())
    }
}
