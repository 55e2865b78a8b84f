//! The dry/wet blend control law.
//!
//! A single knob in `[0, 100]` steers both gains. The two halves are
//! exponential rather than linear so the audible loudness change feels
//! even across the knob: each step away from the center moves the fading
//! side by 0.8 dB.
//!
//! | Blend | Dry target | Wet target |
//! |-------|------------|------------|
//! | 0 | 1.0 | 0.0 |
//! | 0..50 | 1.0 | `10^((blend-50)*0.04)` |
//! | 50 | 1.0 | 1.0 |
//! | 50..100 | `10^((blend-50)*-0.04)` | 1.0 |
//! | 100 | 0.0 | 1.0 |
//!
//! At 50 both sides sit at unity, so the center is a +3 dB-ish sum rather
//! than an equal-power crossfade. That overlap is part of the control's
//! character and intentionally kept. Values outside `[0, 100]` (including
//! NaN) fall through to the dry-only targets.

use libm::powf;

/// Exponent per unit of blend on the fading side.
///
/// `10^(0.04 * x)` is `10^(0.8x / 20)`, i.e. 0.8 dB per blend step.
const EXP_PER_STEP: f32 = 0.04;

/// Compute `(dry, wet)` gain targets for a blend control value.
///
/// The returned targets feed the per-sample gain ramps; they are not
/// applied instantaneously.
///
/// # Example
///
/// ```rust
/// use sostenido_retain::blend_targets;
///
/// let (dry, wet) = blend_targets(25.0);
/// assert_eq!(dry, 1.0);
/// assert!((wet - 0.1).abs() < 1e-4); // -20 dB
/// ```
#[inline]
pub fn blend_targets(blend: f32) -> (f32, f32) {
    if blend > 0.0 && blend < 50.0 {
        (1.0, powf(10.0, (blend - 50.0) * EXP_PER_STEP))
    } else if blend > 50.0 && blend < 100.0 {
        (powf(10.0, (blend - 50.0) * -EXP_PER_STEP), 1.0)
    } else if blend == 50.0 {
        (1.0, 1.0)
    } else if blend == 100.0 {
        (0.0, 1.0)
    } else {
        // blend == 0, out of range, or NaN: fully dry
        (1.0, 0.0)
    }
}
