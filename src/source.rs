//! Uniform random sources used for outcome draws.

use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// A source of uniform values in `[0, 1)`.
///
/// The game draws every outcome through this trait so tests can replace the
/// seeded generator with a fixed sequence.
pub trait UniformSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl UniformSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// A source that replays a fixed list of values, wrapping around at the end.
///
/// An empty list always yields `0.0`.
///
/// # Example
///
/// ```
/// use chestrs::{ScriptedSource, UniformSource};
///
/// let mut source = ScriptedSource::new([0.1, 0.9]);
/// assert_eq!(source.next_unit(), 0.1);
/// assert_eq!(source.next_unit(), 0.9);
/// assert_eq!(source.next_unit(), 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `values` in order.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Returns how many values have been consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
