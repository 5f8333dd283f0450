use core::sync::atomic::Ordering;
use core::time::Duration;

use alloc::string::ToString;

use crate::event::GameEvent;
use crate::outcome::Outcome;

use super::{Game, GameState};

/// Work deferred until an animation or banner window has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Continuation {
    /// Finish a chest click once its open animation is over.
    SettleOpen {
        round: u32,
        index: usize,
        outcome: Outcome,
    },
    /// Hide the bonus banner shown with this sequence number.
    HideBanner { banner: u32 },
}

impl<S> Game<S> {
    /// Advances the game clock by `elapsed`, running every continuation that
    /// falls due, in due order.
    ///
    /// Continuations scheduled while advancing run in the same call if they
    /// fall due before the new time. Returns how many continuations took
    /// effect; stale ones from a previous round or banner are dropped without
    /// being counted.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let until = self.now().saturating_add(elapsed);
        let mut applied = 0;

        {
            let mut timers = self.timers.lock();
            if timers.is_empty() {
                timers.settle_at(until);
                return applied;
            }
        }

        loop {
            let task = self.timers.lock().pop_due(until);
            let Some(task) = task else {
                break;
            };
            if self.run_continuation(task) {
                applied += 1;
            }
        }

        self.timers.lock().settle_at(until);
        applied
    }

    fn run_continuation(&self, task: Continuation) -> bool {
        match task {
            Continuation::SettleOpen {
                round,
                index,
                outcome,
            } => self.settle_open(round, index, outcome),
            Continuation::HideBanner { banner } => self.hide_banner(banner),
        }
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    fn settle_open(&self, round: u32, index: usize, outcome: Outcome) -> bool {
        let mut state = self.state.lock();
        let current = *self.round.lock();
        if current.round != round {
            log::trace!("dropping continuation for chest {index} from round {round}");
            return false;
        }

        let mut chests = self.chests.lock();
        for chest in chests
            .iter_mut()
            .filter(|chest| !chest.is_opened() && !chest.is_enabled())
        {
            chest.enable();
            self.emit(GameEvent::ChestEnabled {
                index: chest.index(),
            });
        }
        drop(chests);

        if outcome == Outcome::Bonus {
            self.show_banner(outcome.points(&self.options));
        }

        if current.is_complete() {
            let mut display = self.display.lock();
            display.show_score(i64::try_from(current.score).unwrap_or(i64::MAX));
            self.emit(GameEvent::ScoreChanged {
                text: display.score_text().to_string(),
            });
            drop(display);

            self.set_play_enabled(true);
            self.emit(GameEvent::RoundCompleted {
                round,
                score: current.score,
            });
            *state = GameState::RoundOver;
            log::debug!("round {round} complete with score {}", current.score);
        } else {
            *state = GameState::Picking;
        }

        true
    }

    fn show_banner(&self, points: u64) {
        let banner = self.banner_seq.fetch_add(1, Ordering::SeqCst).wrapping_add(1);

        let mut display = self.display.lock();
        display.show_bonus_banner(points);
        self.emit(GameEvent::BonusBannerShown {
            text: display.banner_text().to_string(),
        });
        drop(display);

        self.timers.lock().schedule(
            self.options.bonus_banner_duration,
            Continuation::HideBanner { banner },
        );
    }

    fn hide_banner(&self, banner: u32) -> bool {
        if self.banner_seq.load(Ordering::SeqCst) != banner {
            log::trace!("dropping hide for superseded banner {banner}");
            return false;
        }

        let mut display = self.display.lock();
        if !display.is_banner_visible() {
            return false;
        }
        display.hide_bonus_banner();
        drop(display);

        self.emit(GameEvent::BonusBannerHidden);
        true
    }
}
