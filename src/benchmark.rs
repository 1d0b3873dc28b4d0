use crate::error::{Error, Result};
use std::convert::TryFrom;

/// The ordered input sizes to measure. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSizes {
    sizes: Vec<u64>,
}

impl InputSizes {
    /// The sizes `start, start + step, ...` up to and including `end` when it falls on a step.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInputSizes` if `step` is zero, `start > end` or `step` does not fit
    /// in a `usize`.
    pub fn new(start: u64, end: u64, step: u64) -> Result<InputSizes> {
        let invalid = || Error::InvalidInputSizes { start, end, step };
        if step == 0 || start > end {
            return Err(invalid());
        }
        let step_by = usize::try_from(step).map_err(|_| invalid())?;
        Ok(InputSizes {
            sizes: (start..=end).step_by(step_by).collect(),
        })
    }

    /// An explicit list of sizes, measured in the given order.
    pub fn list<I: IntoIterator<Item = u64>>(sizes: I) -> InputSizes {
        InputSizes {
            sizes: sizes.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sizes.iter().copied()
    }
}

impl Default for InputSizes {
    /// 10, 12, ..., 30
    fn default() -> InputSizes {
        InputSizes {
            sizes: (10..=30).step_by(2).collect(),
        }
    }
}

/// Struct containing the configuration options for a run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub input_sizes: InputSizes,
    /// Timed invocations per input size; the recorded duration is their mean.
    pub sample_size: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> BenchmarkConfig {
        BenchmarkConfig {
            input_sizes: InputSizes::default(),
            sample_size: 1,
        }
    }
}

/// Results of one run: input sizes, Fibonacci values and durations in seconds, kept in lockstep.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Measurements {
    sizes: Vec<u64>,
    results: Vec<u64>,
    seconds: Vec<f64>,
}

impl Measurements {
    pub fn new() -> Measurements {
        Measurements::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Measurements {
        Measurements {
            sizes: Vec::with_capacity(capacity),
            results: Vec::with_capacity(capacity),
            seconds: Vec::with_capacity(capacity),
        }
    }

    /// Records one processed size. The only way to grow the sequences.
    pub fn push(&mut self, n: u64, result: u64, seconds: f64) {
        self.sizes.push(n);
        self.results.push(result);
        self.seconds.push(seconds);
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn results(&self) -> &[u64] {
        &self.results
    }

    pub fn seconds(&self) -> &[f64] {
        &self.seconds
    }

    /// Iterates over `(n, result, seconds)` rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = (u64, u64, f64)> + '_ {
        self.sizes
            .iter()
            .zip(&self.results)
            .zip(&self.seconds)
            .map(|((&n, &result), &seconds)| (n, result, seconds))
    }
}
