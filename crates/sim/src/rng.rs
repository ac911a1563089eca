//! Random sources backing the [`RandomSource`] port

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sambucks_ports::RandomSource;

/// Seeded generator used by the running dashboard
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create with a specific seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of draws in a loop
///
/// Lets a test pin every random decision, e.g. a constant 0.5 for a
/// zero-drift walk.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`; an empty script behaves like `constant(0.0)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values: Vec<f64> = values.into();
        for v in values.iter_mut() {
            *v = v.clamp(0.0, 1.0 - f64::EPSILON);
        }
        if values.is_empty() {
            values.push(0.0);
        }
        Self {
            values,
            position: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
