//! This module defines the trait used to plug a way of measuring the workload into the demo. It
//! also includes the [WallTime](struct.WallTime.html) struct, the default wall-clock
//! measurement.

use std::time::{Duration, Instant};

/// Trait for all types which define something the demo can measure.
///
/// `start` is called right before the workload runs to produce some intermediate value (for
/// example, the wall-clock time at that moment) and `end` is called right after it with the
/// value returned by `start`.
pub trait Measurement {
    /// Intermediate value produced by `start` and consumed by `end`.
    type Intermediate;

    /// The measured value, eg. the elapsed wall-clock time between `start` and `end`.
    type Value;

    /// Called before running the workload.
    fn start(&self) -> Self::Intermediate;

    /// Called after running the workload to get the measured value.
    fn end(&self, i: Self::Intermediate) -> Self::Value;

    /// Combine two values, used when a size is measured more than once.
    fn add(&self, v1: &Self::Value, v2: &Self::Value) -> Self::Value;

    /// Return a "zero" value for the Value type which can be added to another value.
    fn zero(&self) -> Self::Value;

    /// Converts the measured value to seconds.
    fn to_seconds(&self, value: &Self::Value) -> f64;
}

/// `WallTime` is the default measurement. It measures elapsed time from the given instant.
pub struct WallTime;
impl Measurement for WallTime {
    type Intermediate = Instant;
    type Value = Duration;

    fn start(&self) -> Self::Intermediate {
        Instant::now()
    }
    fn end(&self, i: Self::Intermediate) -> Self::Value {
        i.elapsed()
    }
    fn add(&self, v1: &Self::Value, v2: &Self::Value) -> Self::Value {
        *v1 + *v2
    }
    fn zero(&self) -> Self::Value {
        Duration::from_secs(0)
    }
    fn to_seconds(&self, val: &Self::Value) -> f64 {
        val.as_secs_f64()
    }
}
