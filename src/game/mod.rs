//! Game engine and state management.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use core::time::Duration;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::chest::Chest;
use crate::display::ScoreDisplay;
use crate::error::OptionsError;
use crate::event::GameEvent;
use crate::options::GameOptions;
use crate::schedule::TimerQueue;
use crate::source::UniformSource;

mod click;
mod continuation;
mod round;
pub mod state;

use continuation::Continuation;
pub use state::{GameState, RoundState};

/// A chest game engine that manages chests, scoring, and round flow.
///
/// The game owns the chests, the round counters, the score display, the
/// timer queue for deferred continuations, and the uniform source used for
/// outcome draws. Frontends feed it input ([`Game::click_chest`],
/// [`Game::press_play`]), advance its clock ([`Game::advance`]), and render
/// the drained [`GameEvent`]s.
pub struct Game<S = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Counters for the current round.
    round: Mutex<RoundState>,
    /// Chests in layout order.
    chests: Mutex<Vec<Chest>>,
    /// Score line and bonus banner.
    display: Mutex<ScoreDisplay>,
    /// Whether the play trigger accepts input.
    play_enabled: AtomicBool,
    /// Sequence of the banner currently shown.
    banner_seq: AtomicU32,
    /// Deferred continuations.
    timers: Mutex<TimerQueue<Continuation>>,
    /// Presentation events not yet drained.
    events: Mutex<Vec<GameEvent>>,
    /// Source for outcome draws.
    source: Mutex<S>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use chestrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.chests().len(), 6);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_source(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: UniformSource> Game<S> {
    /// Creates a new game drawing outcomes from `source`.
    ///
    /// Chests start closed and disabled, and the play trigger is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn with_source(options: GameOptions, source: S) -> Result<Self, OptionsError> {
        options.validate()?;

        let chests = (0..options.chest_count)
            .map(|index| Chest::new(index, options.animation_duration))
            .collect();

        log::debug!(
            "chest game created: {} chests, win chance {}, bonus chance {}",
            options.chest_count,
            options.win_chance,
            options.win_bonus_chance
        );

        Ok(Self {
            round: Mutex::new(RoundState::new(options.chest_count)),
            options,
            state: Mutex::new(GameState::Idle),
            chests: Mutex::new(chests),
            display: Mutex::new(ScoreDisplay::new()),
            play_enabled: AtomicBool::new(true),
            banner_seq: AtomicU32::new(0),
            timers: Mutex::new(TimerQueue::new()),
            events: Mutex::new(Vec::new()),
            source: Mutex::new(source),
        })
    }
}

impl<S> Game<S> {
    fn emit(&self, event: GameEvent) {
        self.events.lock().push(event);
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the counters of the current round.
    pub fn round_state(&self) -> RoundState {
        *self.round.lock()
    }

    /// Returns the number of chests opened this round.
    pub fn opened_count(&self) -> usize {
        self.round.lock().opened_count
    }

    /// Returns the points collected this round.
    pub fn score(&self) -> u64 {
        self.round.lock().score
    }

    /// Returns a snapshot of all chests in layout order.
    pub fn chests(&self) -> Vec<Chest> {
        self.chests.lock().clone()
    }

    /// Returns a snapshot of the chest at `index`.
    pub fn chest(&self, index: usize) -> Option<Chest> {
        self.chests.lock().get(index).cloned()
    }

    /// Returns a snapshot of the score display.
    pub fn display(&self) -> ScoreDisplay {
        self.display.lock().clone()
    }

    /// Returns whether the play trigger accepts input.
    pub fn is_play_enabled(&self) -> bool {
        self.play_enabled.load(Ordering::SeqCst)
    }

    /// Returns the number of continuations waiting on the clock.
    pub fn pending_continuations(&self) -> usize {
        self.timers.lock().len()
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.lock().now()
    }

    /// Takes all presentation events queued since the last call.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    fn set_play_enabled(&self, enabled: bool) {
        let previous = self.play_enabled.swap(enabled, Ordering::SeqCst);
        if previous != enabled {
            self.emit(if enabled {
                GameEvent::PlayEnabled
            } else {
                GameEvent::PlayDisabled
            });
        }
    }
}
