//! Throttled progress logging for long-running simulations

use std::time::Instant;

/// Emits a `debug` event every `freq`-th tick, with the tick count and the
/// time elapsed since the previous emitted event.
///
/// ```
/// use aoc_solutions::utils::progress::Throttle;
///
/// let mut throttle = Throttle::new("rocks", 1000);
/// for rock in 0..5000 {
///     throttle.tick(|| format!("rock {}", rock));
/// }
/// assert_eq!(throttle.count(), 5000);
/// ```
#[derive(Debug)]
pub struct Throttle {
    label: &'static str,
    freq: u64,
    count: u64,
    last: Instant,
}

impl Throttle {
    pub fn new(label: &'static str, freq: u64) -> Self {
        Self {
            label,
            freq: freq.max(1),
            count: 0,
            last: Instant::now(),
        }
    }

    /// Count one tick; the message is only built when an event is emitted.
    pub fn tick<F>(&mut self, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.count % self.freq == 0 && tracing::enabled!(tracing::Level::DEBUG) {
            let now = Instant::now();
            let split = now.duration_since(self.last);
            self.last = now;
            tracing::debug!(
                label = self.label,
                tick = self.count,
                split_ms = split.as_secs_f64() * 1000.0,
                "{}",
                message()
            );
        }
        self.count += 1;
    }

    /// Number of ticks so far
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frequency_is_treated_as_every_tick() {
        let mut throttle = Throttle::new("test", 0);
        throttle.tick(|| "first".to_string());
        throttle.tick(|| "second".to_string());
        assert_eq!(throttle.count(), 2);
    }
}
