//! Gain smoothing for zipper-free dry/wet changes.
//!
//! Gain coefficients need smooth transitions to avoid audible "zipper
//! noise" when a control moves. This module provides [`GainRamp`], a
//! one-pole smoother with a fixed pole chosen for mix controls: fast
//! enough to track a knob, slow enough to mask block-rate steps.
//!
//! ## Usage
//!
//! ```rust
//! use sostenido_core::GainRamp;
//!
//! let mut gain = GainRamp::new(0.0);
//! gain.set_target(1.0);
//!
//! // In the audio callback, advance once per sample
//! for _ in 0..512 {
//!     let g = gain.advance();
//!     // multiply the signal by g...
//! }
//! assert!(gain.get() > 0.99);
//! ```

use crate::flush_denormal;

/// Fraction of the remaining distance covered each sample.
///
/// The pole sits at `1.0 - RAMP_COEFF = 0.99`, a time constant of roughly
/// 100 samples (about 2 ms at 48 kHz). The residual error decays as
/// `0.99^n`, so the ramp is effectively settled after ~500 samples.
pub const RAMP_COEFF: f32 = 0.01;

/// A gain value with built-in one-pole smoothing.
///
/// Unlike a general smoothed parameter, the pole here is fixed: the ramp
/// does not depend on sample rate and needs no reconfiguration. Every call
/// to [`advance`](Self::advance) moves the current value 1% of the way to
/// the target:
///
/// ```text
/// gain[n] = target * 0.01 + gain[n-1] * 0.99
/// ```
///
/// Advance it unconditionally every sample, whatever the surrounding
/// effect is doing, so a control change is always absorbed as a ramp and
/// never as a step.
#[derive(Debug, Clone)]
pub struct GainRamp {
    /// Current smoothed value
    current: f32,
    /// Target value we're ramping towards
    target: f32,
}

impl GainRamp {
    /// Create a new ramp resting at `initial` (current == target).
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    /// Set the target value (the ramp will smooth towards this).
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Set target and immediately snap to it (no smoothing).
    ///
    /// Useful for initialization and reset paths.
    #[inline]
    pub fn set_immediate(&mut self, value: f32) {
        self.target = value;
        self.current = value;
    }

    /// Get the next smoothed value (advances by one sample).
    ///
    /// Call this once per sample in your audio processing loop.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.current = flush_denormal(self.target * RAMP_COEFF + self.current * (1.0 - RAMP_COEFF));
        self.current
    }

    /// Get the current smoothed value without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Get the target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check if the ramp has reached its target (within epsilon).
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < 1e-6
    }

    /// Skip ahead to the target value immediately.
    #[inline]
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }
}

impl Default for GainRamp {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::powf;

    #[test]
    fn ramp_converges() {
        let mut gain = GainRamp::new(0.0);
        gain.set_target(1.0);

        for _ in 0..2000 {
            gain.advance();
        }

        assert!(
            (gain.get() - 1.0).abs() < 1e-6,
            "Should converge to target, got {}",
            gain.get()
        );
        assert!(gain.is_settled());
    }

    #[test]
    fn ramp_error_decays_geometrically() {
        // Residual error after n samples is exactly 0.99^n of the initial
        // error.
        let mut gain = GainRamp::new(0.0);
        gain.set_target(1.0);

        let n = 100;
        for _ in 0..n {
            gain.advance();
        }

        let expected = 1.0 - powf(0.99, n as f32);
        assert!(
            (gain.get() - expected).abs() < 1e-4,
            "After {} samples expected {}, got {}",
            n,
            expected,
            gain.get()
        );
    }

    #[test]
    fn ramp_is_monotonic_towards_target() {
        let mut gain = GainRamp::new(1.0);
        gain.set_target(0.0);

        let mut prev = gain.get();
        for _ in 0..500 {
            let cur = gain.advance();
            assert!(cur <= prev, "Decay must be monotonic: {} > {}", cur, prev);
            prev = cur;
        }
    }

    #[test]
    fn ramp_decay_to_zero_flushes_denormals() {
        let mut gain = GainRamp::new(1.0);
        gain.set_target(0.0);

        // 0.99^n underflows f32 denormal range around n = 9000; the flush
        // must land the value on exactly 0.0 rather than a denormal.
        for _ in 0..20_000 {
            gain.advance();
        }
        assert_eq!(gain.get(), 0.0);
    }

    #[test]
    fn set_immediate_skips_ramping() {
        let mut gain = GainRamp::new(0.0);
        gain.set_immediate(0.7);
        assert_eq!(gain.get(), 0.7);
        assert_eq!(gain.target(), 0.7);
        assert!(gain.is_settled());
    }

    #[test]
    fn snap_to_target() {
        let mut gain = GainRamp::new(0.0);
        gain.set_target(0.3);
        gain.advance();
        gain.snap_to_target();
        assert_eq!(gain.get(), 0.3);
    }
}
