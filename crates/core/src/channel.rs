//! Shared numeric helpers for color channels: range checks, clamping,
//! rounding and hue wraparound.

use crate::error::ColorError;

/// Channel names for the RGB representations, in storage order.
pub(crate) const RGB_NAMES: [&str; 3] = ["red", "green", "blue"];

/// Clamps `v` to [0, 1].
///
/// NaN maps to 0.0 so that a clamped channel is always representable.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Clamps `v` to [0, 255].
pub fn clamp_byte(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 255.0)
    }
}

/// Scales a unit channel to [0, 255] and rounds half away from zero.
pub fn unit_to_byte(v: f64) -> f64 {
    (v * 255.0).round()
}

/// Reduces a hue into [0, 1). A hue of exactly 1.0 (or 2.0, ...) becomes 0.0.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can round up to 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Checks that `value` lies in `[min, max]` and is finite.
pub(crate) fn check_range(
    channel: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ColorError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(ColorError::ChannelOutOfRange {
            channel,
            value,
            min,
            max,
        })
    }
}

/// Checks that `value` lies in [0, 1].
pub(crate) fn check_unit(channel: &'static str, value: f64) -> Result<f64, ColorError> {
    check_range(channel, value, 0.0, 1.0)
}

/// Checks that an integer channel lies in [0, 255].
pub(crate) fn check_byte(channel: &'static str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
        channel,
        value: value as f64,
        min: 0.0,
        max: 255.0,
    })
}

/// Rounds a real-valued channel into [0, 255], warning when the input was
/// not already an integer.
pub(crate) fn round_byte(channel: &'static str, value: f64) -> Result<u8, ColorError> {
    let rounded = value.round();
    if value.is_finite() && rounded != value {
        tracing::warn!(channel, input = value, rounded, "non-integer channel rounded");
    }
    check_range(channel, rounded, 0.0, 255.0).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_unit_limits_both_ends() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn clamp_unit_maps_nan_to_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    }

    #[test]
    fn clamp_byte_limits_both_ends() {
        assert_eq!(clamp_byte(-3.0), 0.0);
        assert_eq!(clamp_byte(300.0), 255.0);
        assert_eq!(clamp_byte(f64::NAN), 0.0);
    }

    #[test]
    fn unit_to_byte_rounds_half_up() {
        assert_eq!(unit_to_byte(0.5), 128.0);
        assert_eq!(unit_to_byte(1.0), 255.0);
        assert_eq!(unit_to_byte(0.0), 0.0);
    }

    #[test]
    fn wrap_hue_reduces_modulo_one() {
        assert_eq!(wrap_hue(2.0), 0.0);
        assert_eq!(wrap_hue(1.5), 0.5);
        assert_eq!(wrap_hue(1.0), 0.0);
        assert_eq!(wrap_hue(0.75), 0.75);
    }

    #[test]
    fn check_byte_rejects_out_of_range() {
        assert_eq!(check_byte("red", 255), Ok(255));
        assert!(check_byte("red", 256).is_err());
        assert!(check_byte("red", -1).is_err());
    }

    #[test]
    fn check_unit_rejects_nan_and_infinity() {
        assert!(check_unit("red", f64::NAN).is_err());
        assert!(check_unit("red", f64::INFINITY).is_err());
        assert!(check_unit("red", 1.0).is_ok());
        assert!(check_unit("red", 1.000_001).is_err());
    }

    #[test]
    fn round_byte_rounds_and_validates() {
        assert_eq!(round_byte("green", 122.4), Ok(122));
        assert_eq!(round_byte("green", 254.6), Ok(255));
        assert!(round_byte("green", 255.6).is_err());
        assert!(round_byte("green", f64::NAN).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wrap_hue_always_in_half_open_unit(h in 0.0_f64..1e6) {
                let w = wrap_hue(h);
                prop_assert!((0.0..1.0).contains(&w), "wrap_hue({h}) = {w}");
            }

            #[test]
            fn clamp_unit_always_in_unit(v in -1e9_f64..1e9) {
                let c = clamp_unit(v);
                prop_assert!((0.0..=1.0).contains(&c));
            }
        }
    }
}
