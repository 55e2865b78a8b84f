//! Sostenido Core - DSP primitives for the sostenido retainer
//!
//! This crate provides the building blocks the retain engine is made of,
//! designed for real-time audio processing with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`StereoEffect`] - Object-safe trait for block-based stereo effects
//! - [`StereoEffectExt`] - Extension trait for effect chaining
//! - [`Chain`] - Zero-cost effect chain combinator
//!
//! ## Parameter Smoothing
//!
//! - [`GainRamp`] - Fixed-pole exponential gain smoother for click-free
//!   dry/wet changes
//!
//! ## Parameter Introspection
//!
//! - [`ParameterInfo`] - Runtime parameter discovery for hosts and GUIs
//! - [`ParamDescriptor`] / [`ParamUnit`] - Parameter metadata
//!
//! ## Utilities
//!
//! - Math functions: [`db_to_linear`], [`linear_to_db`], [`flush_denormal`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sostenido-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod math;
pub mod param;
pub mod param_info;

// Re-export main types at crate root
pub use effect::{Chain, StereoEffect, StereoEffectExt};
pub use math::{db_to_linear, flush_denormal, linear_to_db};
pub use param::GainRamp;
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
