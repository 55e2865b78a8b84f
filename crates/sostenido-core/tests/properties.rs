//! Property-based tests for sostenido-core primitives.

use proptest::prelude::*;
use sostenido_core::{GainRamp, db_to_linear, flush_denormal, linear_to_db};

proptest! {
    /// The ramp converges towards any finite target from any finite start
    /// and never overshoots it.
    #[test]
    fn ramp_converges_without_overshoot(
        start in -10.0_f32..=10.0,
        target in -10.0_f32..=10.0,
    ) {
        let mut ramp = GainRamp::new(start);
        ramp.set_target(target);

        let mut prev_err = (start - target).abs();
        for _ in 0..4000 {
            let v = ramp.advance();
            let err = (v - target).abs();
            prop_assert!(err <= prev_err + 1e-6, "error grew: {prev_err} -> {err}");
            prev_err = err;
        }
        prop_assert!(prev_err < 1e-3, "did not converge: residual {prev_err}");
    }

    /// dB/linear conversions are inverse over the audio range.
    #[test]
    fn db_roundtrip(db in -80.0_f32..=40.0) {
        let round = linear_to_db(db_to_linear(db));
        prop_assert!((round - db).abs() < 1e-2, "{db} dB -> {round} dB");
    }

    /// db_to_linear is monotonic: louder in dB means louder linear.
    /// (A gap guard keeps 1-ulp pairs from tripping over expf rounding.)
    #[test]
    fn db_to_linear_monotonic(a in -80.0_f32..=40.0, b in -80.0_f32..=40.0) {
        if b - a > 1e-3 {
            prop_assert!(db_to_linear(a) < db_to_linear(b));
        }
    }

    /// Denormal flushing only touches values too small to hear.
    #[test]
    fn flush_preserves_audible_values(x in -2.0_f32..=2.0) {
        if x.abs() < 1e-20 {
            prop_assert_eq!(flush_denormal(x), 0.0);
        } else {
            prop_assert_eq!(flush_denormal(x), x);
        }
    }
}
