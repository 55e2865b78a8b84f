//! Parameter introspection for discoverable effect controls.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types
//! that enable runtime discovery and manipulation of effect parameters:
//!
//! - **GUI applications**: Automatically generate parameter controls
//! - **Hardware controllers**: Map MIDI CC or encoder knobs to parameters
//! - **Preset systems**: Save and restore parameter state
//!
//! # Design
//!
//! The system uses index-based parameter access for efficiency and
//! simplicity. Each parameter is described by a [`ParamDescriptor`]
//! containing metadata for display and validation.
//!
//! # no_std Support
//!
//! This module is fully `no_std` compatible with no heap allocations.

/// Trait for effects that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index; the index must be stable
/// for the lifetime of the effect instance. Use
/// [`param_count`](Self::param_count) to determine valid indices.
///
/// # Example
///
/// ```rust
/// use sostenido_core::{ParamDescriptor, ParameterInfo};
///
/// struct Fader {
///     level: f32,
/// }
///
/// impl ParameterInfo for Fader {
///     fn param_count(&self) -> usize { 1 }
///
///     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
///         match index {
///             0 => Some(ParamDescriptor::percent("Level", "Level", 100.0)),
///             _ => None,
///         }
///     }
///
///     fn get_param(&self, index: usize) -> f32 {
///         match index {
///             0 => self.level,
///             _ => 0.0,
///         }
///     }
///
///     fn set_param(&mut self, index: usize, value: f32) {
///         match index {
///             0 => self.level = value.clamp(0.0, 100.0),
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-bounds indices (implementations should
    /// handle these gracefully).
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations should clamp the value to the valid range specified
    /// in the parameter descriptor. Out-of-bounds indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against both [`ParamDescriptor::name`] and
    /// [`ParamDescriptor::short_name`].
    ///
    /// # Returns
    ///
    /// `Some(index)` if found, `None` if no parameter matches.
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        for i in 0..self.param_count() {
            if let Some(desc) = self.param_info(i)
                && (desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name))
            {
                return Some(i);
            }
        }
        None
    }
}

/// Unit type for formatting a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Decibels (dB) - for gain, threshold, and level parameters.
    Decibels,

    /// Percentage (%) - for mix, blend, and normalized parameters.
    Percent,

    /// No unit - for dimensionless, trigger, or custom parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sostenido_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Percent.suffix(), " %");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Decibels => " dB",
            Self::Percent => " %",
            Self::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// The `short_name` field should be 8 characters or less for compatibility
/// with hardware displays (LCD screens on MIDI controllers and pedals).
///
/// # Step Size
///
/// The `step` field indicates the recommended increment for encoder-based
/// control. For continuous parameters, use a small value like `0.01`. For
/// discrete parameters, use `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Blend").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the effect is initialized.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,
}

impl ParamDescriptor {
    /// Percentage parameter over 0-100 with the given default.
    pub const fn percent(name: &'static str, short_name: &'static str, default: f32) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Percent,
            min: 0.0,
            max: 100.0,
            default,
            step: 1.0,
        }
    }

    /// Momentary or on/off parameter: 0 = off, anything above 0 = on.
    pub const fn toggle(name: &'static str, short_name: &'static str) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: 1.0,
            default: 0.0,
            step: 1.0,
        }
    }

    /// Clamp a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoParams {
        mix: f32,
        fire: f32,
    }

    impl ParameterInfo for TwoParams {
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
                0 => self.mix,
                1 => self.fire,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            match index {
                0 => self.mix = value.clamp(0.0, 100.0),
                1 => self.fire = value,
                _ => {}
            }
        }
    }

    #[test]
    fn descriptor_lookup() {
        let fx = TwoParams { mix: 0.0, fire: 0.0 };
        assert_eq!(fx.param_count(), 2);
        assert_eq!(fx.param_info(0).unwrap().unit, ParamUnit::Percent);
        assert_eq!(fx.param_info(1).unwrap().max, 1.0);
        assert!(fx.param_info(2).is_none());
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let fx = TwoParams { mix: 0.0, fire: 0.0 };
        assert_eq!(fx.find_param_by_name("blend"), Some(0));
        assert_eq!(fx.find_param_by_name("TRIG"), Some(1));
        assert_eq!(fx.find_param_by_name("resonance"), None);
    }

    #[test]
    fn descriptor_clamp() {
        let desc = ParamDescriptor::percent("Blend", "Blend", 50.0);
        assert_eq!(desc.clamp(-5.0), 0.0);
        assert_eq!(desc.clamp(105.0), 100.0);
        assert_eq!(desc.clamp(42.0), 42.0);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(ParamUnit::Decibels.suffix(), " dB");
        assert_eq!(ParamUnit::Percent.suffix(), " %");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
