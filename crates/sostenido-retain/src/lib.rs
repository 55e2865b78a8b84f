//! Sostenido Retain - a stereo sound retainer
//!
//! A retainer listens to the incoming stereo signal, captures a
//! fixed-length snippet into an internal tape with fade-in/fade-out
//! shaping, then plays that snippet back as a seamless crossfaded loop
//! for as long as you like, blended with the live dry signal:
//!
//! - [`Retain`] - The capture/loop engine
//! - [`RetainPhase`] - Which phase the engine is in (idle, capturing,
//!   looping)
//! - [`RetainError`] - Construction-time configuration errors
//! - [`blend_targets`] - The dry/wet control law
//!
//! ## Example
//!
//! ```rust
//! use sostenido_core::StereoEffect;
//! use sostenido_retain::Retain;
//!
//! let mut retain = Retain::new(48000.0).unwrap();
//! retain.set_blend(75.0);
//! retain.set_trigger(1.0); // start capturing on the next block
//!
//! let input = vec![0.1_f32; 512];
//! let mut out_l = vec![0.0_f32; 512];
//! let mut out_r = vec![0.0_f32; 512];
//! retain.process_block(&input, &input, &mut out_l, &mut out_r);
//! retain.set_trigger(0.0);
//! ```
//!
//! ## Real-time behavior
//!
//! The tape buffers are allocated once at construction; processing never
//! allocates, locks, or blocks. Controls are plain stored values the host
//! refreshes between blocks, so the engine is safe to drive from an audio
//! callback.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod blend;
pub mod retain;

// Re-export main types at crate root
pub use blend::blend_targets;
pub use retain::{MAX_TAPE_SAMPLES, Retain, RetainError, RetainPhase};
