//! Wall-clock timing of assembly runs.

use std::time::{Duration, Instant};

/// Value produced by a measured call, with the time the call took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Runs `f` between two reads of a monotonic clock.
///
/// `f` must return a fully materialized value; errors pass through untimed.
pub fn measure<T, E, F>(f: F) -> Result<Timed<T>, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let value = f()?;
    let elapsed = start.elapsed();
    Ok(Timed { value, elapsed })
}
