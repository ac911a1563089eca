use sambucks_core::MIN_SERIES_VALUE;
use std::collections::VecDeque;

/// Bounded FIFO buffer of recent values driving the chart
///
/// Appending beyond capacity evicts exactly the oldest value.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingSeries {
    values: VecDeque<f64>,
    capacity: usize,
}

impl RollingSeries {
    /// Empty series; capacity is at least one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Series holding a single starting value
    pub fn from_value(capacity: usize, start: f64) -> Self {
        let mut series = Self::with_capacity(capacity);
        series.push(start);
        series
    }

    /// Full series oscillating gently around `base`, so the chart has
    /// history from the first frame.
    pub fn warmed(capacity: usize, base: f64) -> Self {
        let mut series = Self::with_capacity(capacity);
        for i in 0..series.capacity {
            series.push(base + (i as f64 / 8.0).sin() * 2.0);
        }
        series
    }

    /// Append a value (floored), evicting the oldest when over capacity
    pub fn push(&mut self, value: f64) {
        self.values.push_back(value.max(MIN_SERIES_VALUE));
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn first(&self) -> Option<f64> {
        self.values.front().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Smallest and largest value, `None` when empty
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
