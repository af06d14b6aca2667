//! Time and randomness sources
//!
//! Browser-backed in the app; tests pass their own `RandomSource`.

use chrono::{Local, NaiveDate};

/// Milliseconds since the Unix epoch, as `Date.now()` reports it
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Today's date in the browser's timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`
    fn below(&mut self, bound: u32) -> u32 {
        let value = (self.next_f64() * bound as f64).floor() as u32;
        value.min(bound.saturating_sub(1))
    }
}

/// `Math.random()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SequenceRandom;
    use super::*;

    #[test]
    fn below_stays_in_range() {
        let mut rng = SequenceRandom::new(vec![0.0, 0.5, 0.999_999]);
        assert_eq!(rng.below(360), 0);
        assert_eq!(rng.below(360), 180);
        assert_eq!(rng.below(360), 359);
    }
}
