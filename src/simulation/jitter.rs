//! Randomness sources for the time-to-fill estimate.
//!
//! The simulator never calls a random number generator directly; it asks a
//! [`JitterSource`] for a duration in `[0, max_ms]`. Production code uses
//! [`RandomJitter`], tests inject [`ZeroJitter`] or [`FixedJitter`] to get
//! bit-identical results.

use rand::Rng;

/// Produces a bounded random duration in milliseconds
pub trait JitterSource: Send + Sync {
    /// Return a value in `[0, max_ms]`
    fn jitter_ms(&self, max_ms: f64) -> f64;
}

/// Uniform jitter drawn from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter_ms(&self, max_ms: f64) -> f64 {
        if max_ms.is_finite() && max_ms > 0.0 {
            rand::rng().random_range(0.0..max_ms)
        } else {
            0.0
        }
    }
}

/// Always returns zero
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn jitter_ms(&self, _max_ms: f64) -> f64 {
        0.0
    }
}

/// Always returns the same value, capped at `max_ms`
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter_ms(&self, max_ms: f64) -> f64 {
        self.0.min(max_ms)
    }
}

/// Adapts any `Fn(max_ms) -> ms` closure
pub struct FnJitter<F>(pub F);

impl<F> JitterSource for FnJitter<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn jitter_ms(&self, max_ms: f64) -> f64 {
        (self.0)(max_ms)
    }
}

/// Clamp whatever a source returned into `[0, max_ms]`; NaN maps to zero
pub(crate) fn bounded_jitter(source: &dyn JitterSource, max_ms: f64) -> f64 {
    let max_ms = max_ms.max(0.0);
    let value = source.jitter_ms(max_ms);
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max_ms)
    }
}
