//! A chest picking mini-game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: the
//! player picks closed chests one at a time, each reveals a random
//! [`Outcome`], points accumulate, and once every chest is open the final
//! score is published and the play trigger starts the next round.
//!
//! Rendering stays outside the crate. The game emits [`GameEvent`]s and lid
//! animation descriptors, and deferred work (re-enabling chests after an
//! animation, hiding the bonus banner) runs on a virtual clock the host moves
//! with [`Game::advance`].
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use chestrs::{Game, GameOptions, GameState};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42).unwrap();
//!
//! game.press_play().unwrap();
//! game.click_chest(0).unwrap();
//! assert_eq!(game.state(), GameState::Opening);
//!
//! game.advance(Duration::from_secs(1));
//! assert_eq!(game.state(), GameState::Picking);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod animation;
pub mod chest;
pub mod display;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod outcome;
pub mod schedule;
pub mod source;
mod sync;

// Re-export main types
pub use animation::{Easing, LidAnimation, LidPose, Tween};
pub use chest::{Affordance, Chest, Slot};
pub use display::ScoreDisplay;
pub use error::{ChestError, ClickError, OptionsError, PlayError};
pub use event::GameEvent;
pub use game::{Game, GameState, RoundState};
pub use options::GameOptions;
pub use outcome::Outcome;
pub use source::{ScriptedSource, UniformSource};
