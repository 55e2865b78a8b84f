//! The capture/loop engine.
//!
//! [`Retain`] owns two fixed-capacity tape buffers and a small state
//! machine. A trigger starts a capture pass: incoming audio is written
//! into the tape with linear fade-in/fade-out shaping at the edges. When
//! the tape is full, playback takes over and loops the captured snippet
//! indefinitely, superposing the faded tail with the faded head at the
//! seam so the join is inaudible. The dry input and the looped wet signal
//! are mixed under two independently ramped gains driven by the blend
//! control.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

use sostenido_core::{GainRamp, ParamDescriptor, ParameterInfo, StereoEffect};

use crate::blend::blend_targets;

/// Capacity of each tape buffer in samples.
///
/// Bounds the supported sample rate: the 5-second loop fits up to 192 kHz.
pub const MAX_TAPE_SAMPLES: usize = 960_000;

/// Loop duration in seconds, fixed for the instance lifetime.
const LOOP_SECONDS: f32 = 5.0;

/// Fade duration in seconds, also the crossfade width at the loop seam.
const FADE_SECONDS: f32 = 1.0;

/// Configuration errors reported at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetainError {
    /// The loop length derived from the sample rate does not fit the tape.
    LoopExceedsCapacity {
        /// Loop length that the sample rate asks for, in samples.
        requested: usize,
        /// Tape capacity in samples.
        capacity: usize,
    },
    /// The sample rate is not a positive finite number, or is too low to
    /// derive a non-empty loop.
    InvalidSampleRate(f32),
}

#[cfg(feature = "std")]
impl std::fmt::Display for RetainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LoopExceedsCapacity {
                requested,
                capacity,
            } => write!(
                f,
                "loop of {requested} samples exceeds tape capacity of {capacity}"
            ),
            Self::InvalidSampleRate(rate) => write!(f, "invalid sample rate {rate}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RetainError {}

/// Which part of the capture/loop cycle the engine is executing.
///
/// Exactly one of the write and read paths runs per sample; the phases
/// make the illegal flag combinations of a two-boolean encoding
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetainPhase {
    /// Nothing captured yet; wet output is silence. Only reachable
    /// between a reset and the first trigger.
    Idle,
    /// Incoming audio is being written into the tape with fade shaping.
    Capturing,
    /// The captured snippet is being read back in a crossfaded loop.
    Looping,
}

/// Stereo sound retainer: capture a fixed-length snippet, loop it forever.
///
/// One instance serves one stereo pair; both channels share cursors,
/// phase, and gains. Loop and fade lengths are derived from the sample
/// rate at construction and stay fixed. All memory is allocated up front;
/// processing is allocation-free and lock-free.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Blend | 0–100% | 50.0 |
/// | 1 | Trigger | 0/1 | 0.0 |
///
/// ## Controls
///
/// The blend knob steers the dry/wet mix through the exponential law in
/// [`blend_targets`]; both gains are ramped per sample so knob moves never
/// click. The trigger is level-sensed once per block: any value above zero
/// while the engine is not already capturing (or waiting to) arms a new
/// capture pass. A trigger level that stays high re-arms after every
/// completed cycle; release it to keep the current loop.
///
/// # Example
///
/// ```rust
/// use sostenido_core::StereoEffect;
/// use sostenido_retain::{Retain, RetainPhase};
///
/// let mut retain = Retain::new(48000.0).unwrap();
/// retain.set_blend(100.0); // listen to the loop only
/// retain.set_trigger(1.0);
///
/// let silence = vec![0.0_f32; 256];
/// let mut out_l = vec![0.0_f32; 256];
/// let mut out_r = vec![0.0_f32; 256];
/// retain.process_block(&silence, &silence, &mut out_l, &mut out_r);
/// assert_eq!(retain.phase(), RetainPhase::Capturing);
/// ```
#[derive(Debug, Clone)]
pub struct Retain {
    sample_rate: f32,
    loop_samples: usize,
    fade_samples: usize,

    write_pos: usize,
    read_pos: usize,
    phase: RetainPhase,
    /// Trigger latched while a loop plays out; capture starts at the wrap.
    armed: bool,

    blend: f32,
    trigger: f32,
    dry_gain: GainRamp,
    wet_gain: GainRamp,

    buffer_l: Vec<f32>,
    buffer_r: Vec<f32>,
}

impl Retain {
    /// Create a retainer with the standard tape capacity
    /// ([`MAX_TAPE_SAMPLES`]).
    ///
    /// # Errors
    ///
    /// [`RetainError::LoopExceedsCapacity`] when the 5-second loop at
    /// `sample_rate` does not fit the tape (rates above 192 kHz), and
    /// [`RetainError::InvalidSampleRate`] for non-positive or non-finite
    /// rates.
    pub fn new(sample_rate: f32) -> Result<Self, RetainError> {
        Self::with_capacity(sample_rate, MAX_TAPE_SAMPLES)
    }

    /// Create a retainer with a custom tape capacity in samples.
    ///
    /// Useful for tests and memory-constrained targets. The derived loop
    /// length must fit `capacity`; construction fails rather than
    /// truncating the loop.
    pub fn with_capacity(sample_rate: f32, capacity: usize) -> Result<Self, RetainError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(RetainError::InvalidSampleRate(sample_rate));
        }

        let loop_samples = (LOOP_SECONDS * sample_rate) as usize;
        let fade_samples = (FADE_SECONDS * sample_rate) as usize;
        if loop_samples == 0 {
            return Err(RetainError::InvalidSampleRate(sample_rate));
        }
        if loop_samples > capacity {
            return Err(RetainError::LoopExceedsCapacity {
                requested: loop_samples,
                capacity,
            });
        }
        // The seam superposition reads tail and head simultaneously; both
        // fade regions must fit the loop without overlapping.
        debug_assert!(fade_samples * 2 <= loop_samples);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "retain_config: loop {loop_samples} samples, fade {fade_samples} samples, capacity {capacity}"
        );

        Ok(Self {
            sample_rate,
            loop_samples,
            fade_samples,
            write_pos: 0,
            read_pos: 0,
            phase: RetainPhase::Idle,
            armed: false,
            blend: 50.0,
            trigger: 0.0,
            dry_gain: GainRamp::new(0.0),
            wet_gain: GainRamp::new(0.0),
            buffer_l: vec![0.0; capacity],
            buffer_r: vec![0.0; capacity],
        })
    }

    /// Set the blend control (0 = fully dry, 100 = fully wet).
    ///
    /// The value is stored as given; anything outside `[0, 100]` resolves
    /// to the dry-only gain targets rather than being clamped.
    pub fn set_blend(&mut self, blend: f32) {
        self.blend = blend;
    }

    /// Get the current blend control value.
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Set the trigger level. Any value above zero fires a capture.
    ///
    /// The level is sensed once at the start of each block, so the exact
    /// capture start is block-granular. Holding the level above zero
    /// re-arms capture after each completed cycle.
    pub fn set_trigger(&mut self, level: f32) {
        self.trigger = level;
    }

    /// Which phase of the capture/loop cycle the engine is in.
    pub fn phase(&self) -> RetainPhase {
        self.phase
    }

    /// Loop length in samples (5 seconds at the configured rate).
    pub fn loop_samples(&self) -> usize {
        self.loop_samples
    }

    /// Fade length in samples (1 second at the configured rate).
    pub fn fade_samples(&self) -> usize {
        self.fade_samples
    }

    /// True while a capture is running or latched to start at the next
    /// loop wrap.
    pub fn is_listening(&self) -> bool {
        self.armed || self.phase == RetainPhase::Capturing
    }

    /// Current playback position on the tape, for playhead displays.
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    /// Current record position on the tape, for capture-progress displays.
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    /// Fade coefficient for a write position.
    ///
    /// Linear ramp up over the first `fade_samples` positions, unity in
    /// the middle, linear ramp down over the last `fade_samples`. A zero
    /// fade length disables shaping entirely.
    #[inline]
    fn capture_coeff(&self, pos: usize) -> f32 {
        if self.fade_samples == 0 {
            return 1.0;
        }
        if pos < self.fade_samples {
            pos as f32 / self.fade_samples as f32
        } else if pos >= self.loop_samples - self.fade_samples {
            (self.loop_samples - 1 - pos) as f32 / self.fade_samples as f32
        } else {
            1.0
        }
    }

    /// Block-rate control refresh: sense the trigger and aim the gain
    /// ramps at the targets for the current blend value.
    fn refresh_block_controls(&mut self) {
        if self.trigger > 0.0 && !self.is_listening() {
            match self.phase {
                // Nothing captured yet: start writing right away. The
                // write cursor is not rewound here; only a reset does.
                RetainPhase::Idle => self.phase = RetainPhase::Capturing,
                // Let the current pass finish; capture takes over at the
                // wrap so the hand-off lands exactly on the loop boundary.
                RetainPhase::Looping => self.armed = true,
                RetainPhase::Capturing => {}
            }
        }

        let (dry, wet) = blend_targets(self.blend);
        self.dry_gain.set_target(dry);
        self.wet_gain.set_target(wet);
    }

    /// Advance the engine by one sample pair.
    ///
    /// Gain ramps move every sample no matter the phase, so blend changes
    /// ramp even while capturing.
    #[inline]
    fn tick(&mut self, in_l: f32, in_r: f32) -> (f32, f32) {
        let wet_gain = self.wet_gain.advance();
        let dry_gain = self.dry_gain.advance();

        let mut wet_l = 0.0;
        let mut wet_r = 0.0;

        match self.phase {
            RetainPhase::Idle => {}
            RetainPhase::Capturing => {
                if self.write_pos < self.loop_samples {
                    let coeff = self.capture_coeff(self.write_pos);
                    self.buffer_l[self.write_pos] = in_l * coeff;
                    self.buffer_r[self.write_pos] = in_r * coeff;
                    self.write_pos += 1;
                } else {
                    // Tape full: playback resumes on the next sample with
                    // the read cursor wherever the previous pass left it.
                    self.write_pos = 0;
                    self.phase = RetainPhase::Looping;
                }
            }
            RetainPhase::Looping => {
                let seam_start = self.loop_samples - self.fade_samples;
                if self.read_pos >= seam_start && !self.armed {
                    // Seam: the fading tail plus the fading head of the
                    // next pass, stored pre-shaped at capture time.
                    let head = self.read_pos - seam_start;
                    wet_l = self.buffer_l[self.read_pos] + self.buffer_l[head];
                    wet_r = self.buffer_r[self.read_pos] + self.buffer_r[head];
                } else {
                    wet_l = self.buffer_l[self.read_pos];
                    wet_r = self.buffer_r[self.read_pos];
                }
                self.read_pos += 1;
                if self.read_pos >= self.loop_samples {
                    if self.armed {
                        self.armed = false;
                        self.read_pos = 0;
                        self.phase = RetainPhase::Capturing;
                    } else {
                        // The head was already folded into the seam, so
                        // every pass after the first skips it.
                        self.read_pos = self.fade_samples;
                    }
                }
            }
        }

        (
            in_l * dry_gain + wet_l * wet_gain,
            in_r * dry_gain + wet_r * wet_gain,
        )
    }
}

impl StereoEffect for Retain {
    #[inline]
    fn process(&mut self, left: f32, right: f32) -> (f32, f32) {
        self.refresh_block_controls();
        self.tick(left, right)
    }

    fn process_block(
        &mut self,
        input_l: &[f32],
        input_r: &[f32],
        output_l: &mut [f32],
        output_r: &mut [f32],
    ) {
        debug_assert_eq!(input_l.len(), input_r.len());
        debug_assert_eq!(input_l.len(), output_l.len());
        debug_assert_eq!(input_l.len(), output_r.len());

        // An empty block changes nothing, not even the trigger latch.
        if input_l.is_empty() {
            return;
        }

        self.refresh_block_controls();
        for i in 0..input_l.len() {
            let (l, r) = self.tick(input_l[i], input_r[i]);
            output_l[i] = l;
            output_r[i] = r;
        }
    }

    /// Re-derive loop and fade lengths for a new rate and reset.
    ///
    /// Rates that are non-finite, non-positive, or whose loop would not
    /// fit the existing tape are ignored (there is no error channel here;
    /// construction is where misconfiguration fails loudly).
    fn set_sample_rate(&mut self, sample_rate: f32) {
        let valid = sample_rate.is_finite() && sample_rate > 0.0;
        let loop_samples = if valid {
            (LOOP_SECONDS * sample_rate) as usize
        } else {
            0
        };
        if !valid || loop_samples == 0 || loop_samples > self.buffer_l.len() {
            debug_assert!(false, "unusable sample rate {sample_rate}");
            return;
        }
        self.sample_rate = sample_rate;
        self.loop_samples = loop_samples;
        self.fade_samples = (FADE_SECONDS * sample_rate) as usize;
        self.reset();
    }

    /// Wipe the tape and return to [`RetainPhase::Idle`].
    ///
    /// Cursors rewind to zero and both gains restart from silence. The
    /// blend and trigger controls are host-owned and keep their values.
    fn reset(&mut self) {
        self.buffer_l.fill(0.0);
        self.buffer_r.fill(0.0);
        self.write_pos = 0;
        self.read_pos = 0;
        self.phase = RetainPhase::Idle;
        self.armed = false;
        self.dry_gain.set_immediate(0.0);
        self.wet_gain.set_immediate(0.0);

        #[cfg(feature = "tracing")]
        tracing::debug!("retain_reset");
    }
}

impl ParameterInfo for Retain {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::percent("Blend", "Blend", 50.0)),
            1 => Some(ParamDescriptor::toggle("Trigger", "Trig")),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.blend,
            1 => self.trigger,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_blend(value),
            1 => self.set_trigger(value),
            _ => {}
        }
    }
}
