//! Color generators: uniformly random colors and the color wheel.
//!
//! Both draw from an explicit [`RandomSource`]. The convenience constructors
//! without a source ([`random_color`], [`ColorWheel::new`]) seed a fresh
//! [`Xorshift64`] from entropy, so every sequence owns its generator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::wrap_hue;
use crate::error::ColorError;
use crate::hsv::Hsv;
use crate::params::{param_f64, param_u64};
use crate::prng::{RandomSource, Xorshift64};

/// Returns an HSV color with hue, saturation and value each drawn uniformly
/// from [0, 1).
pub fn random_color_with<R: RandomSource>(rng: &mut R) -> Hsv {
    let h = rng.next_f64();
    let s = rng.next_f64();
    let v = rng.next_f64();
    Hsv::from_parts(h, s, v)
}

/// Returns a random HSV color from a freshly seeded generator.
pub fn random_color() -> Hsv {
    random_color_with(&mut Xorshift64::from_entropy())
}

/// Default saturation of wheel colors.
const DEFAULT_SATURATION: f64 = 1.0;
/// Default value (brightness) of wheel colors.
const DEFAULT_VALUE: f64 = 0.8;
/// Smallest hue step between successive wheel colors.
const DEFAULT_MIN_SHIFT: f64 = 0.1;
/// Upper bound (exclusive) of the hue step.
const DEFAULT_MAX_SHIFT: f64 = 0.3;

/// Tunable parameters of a [`ColorWheel`].
///
/// Use [`Default`] for the standard wheel: saturation 1, value 0.8 and hue
/// steps in [0.1, 0.3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Saturation of every generated color, in [0, 1].
    pub saturation: f64,
    /// Value of every generated color, in [0, 1].
    pub value: f64,
    /// Minimum hue advance per step.
    pub min_shift: f64,
    /// Exclusive maximum hue advance per step.
    pub max_shift: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
            min_shift: DEFAULT_MIN_SHIFT,
            max_shift: DEFAULT_MAX_SHIFT,
        }
    }
}

impl WheelConfig {
    /// Reads a config from JSON params, falling back to defaults for missing
    /// or mistyped keys. The result is validated.
    pub fn from_json(params: &Value) -> Result<Self, ColorError> {
        let config = Self {
            saturation: param_f64(params, "saturation", DEFAULT_SATURATION),
            value: param_f64(params, "value", DEFAULT_VALUE),
            min_shift: param_f64(params, "min_shift", DEFAULT_MIN_SHIFT),
            max_shift: param_f64(params, "max_shift", DEFAULT_MAX_SHIFT),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks saturation and value are in [0, 1] and that
    /// `0 < min_shift <= max_shift < 1`.
    pub fn validate(&self) -> Result<(), ColorError> {
        for (name, v) in [("saturation", self.saturation), ("value", self.value)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ColorError::InvalidParam {
                    name,
                    reason: format!("{v} is outside [0, 1]"),
                });
            }
        }
        if !(self.min_shift > 0.0 && self.min_shift < 1.0) {
            return Err(ColorError::InvalidParam {
                name: "min_shift",
                reason: format!("{} is outside (0, 1)", self.min_shift),
            });
        }
        if !(self.max_shift >= self.min_shift && self.max_shift < 1.0) {
            return Err(ColorError::InvalidParam {
                name: "max_shift",
                reason: format!(
                    "{} must be in [min_shift = {}, 1)",
                    self.max_shift, self.min_shift
                ),
            });
        }
        Ok(())
    }
}

/// An endless stream of colors spread around the hue circle.
///
/// Each step advances the hue by a random shift in
/// `[min_shift, max_shift)`, wrapping modulo 1. Saturation and value stay
/// fixed. The stream never ends and cannot be restarted.
#[derive(Debug, Clone)]
pub struct ColorWheel<R = Xorshift64> {
    phase: f64,
    config: WheelConfig,
    rng: R,
}

impl ColorWheel<Xorshift64> {
    /// Creates a default wheel starting at `start`, seeded from entropy.
    pub fn new(start: f64) -> Self {
        Self {
            phase: wrap_start(start),
            config: WheelConfig::default(),
            rng: Xorshift64::from_entropy(),
        }
    }

    /// Creates a wheel from JSON params.
    ///
    /// Reads `start` (default 0) and `seed` alongside the [`WheelConfig`]
    /// keys. A missing or zero seed draws from entropy.
    pub fn from_json(params: &Value) -> Result<Self, ColorError> {
        let config = WheelConfig::from_json(params)?;
        let rng = match param_u64(params, "seed", 0) {
            0 => Xorshift64::from_entropy(),
            seed => Xorshift64::new(seed),
        };
        Self::with_config(param_f64(params, "start", 0.0), config, rng)
    }
}

impl Default for ColorWheel<Xorshift64> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Reduces a starting phase into [0, 1); non-finite phases start at 0.
fn wrap_start(start: f64) -> f64 {
    if start.is_finite() {
        wrap_hue(start)
    } else {
        0.0
    }
}

impl<R: RandomSource> ColorWheel<R> {
    /// Creates a default wheel driven by `rng`.
    pub fn with_rng(start: f64, rng: R) -> Self {
        Self {
            phase: wrap_start(start),
            config: WheelConfig::default(),
            rng,
        }
    }

    /// Creates a wheel with custom parameters.
    ///
    /// Returns `ColorError::InvalidParam` if the config does not validate.
    pub fn with_config(start: f64, config: WheelConfig, rng: R) -> Result<Self, ColorError> {
        config.validate()?;
        Ok(Self {
            phase: wrap_start(start),
            config,
            rng,
        })
    }

    /// Current hue, i.e. the hue of the most recently produced color.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }
}

impl<R: RandomSource> Iterator for ColorWheel<R> {
    type Item = Hsv;

    fn next(&mut self) -> Option<Hsv> {
        let shift = self
            .rng
            .next_range(self.config.min_shift, self.config.max_shift);
        self.phase = wrap_hue(self.phase + shift);
        Some(Hsv::from_parts(
            self.phase,
            self.config.saturation,
            self.config.value,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandomSource> std::iter::FusedIterator for ColorWheel<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use serde_json::json;

    #[test]
    fn random_color_channels_in_unit_range() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..1000 {
            let c = random_color_with(&mut rng);
            for ch in c.to_array() {
                assert!((0.0..1.0).contains(&ch), "channel {ch} out of range");
            }
        }
    }

    #[test]
    fn random_color_is_deterministic_for_a_seed() {
        let a = random_color_with(&mut Xorshift64::new(99));
        let b = random_color_with(&mut Xorshift64::new(99));
        assert_eq!(a.to_array(), b.to_array());
    }

    #[test]
    fn successive_random_colors_differ() {
        let mut rng = Xorshift64::new(5);
        let a = random_color_with(&mut rng);
        let b = random_color_with(&mut rng);
        assert_ne!(a.to_array(), b.to_array());
        assert_ne!(random_color().to_array(), random_color().to_array());
    }

    #[test]
    fn wheel_hue_steps_stay_within_bounds() {
        let mut wheel = ColorWheel::with_rng(0.0, Xorshift64::new(2024));
        let mut replay = Xorshift64::new(2024);
        let mut prev = wheel.phase();
        for i in 0..10_000 {
            let c = wheel.next().unwrap();
            let step = replay.next_range(0.1, 0.3);
            assert!((0.1..0.3).contains(&step), "step {step} out of [0.1, 0.3) at draw {i}");
            assert_eq!(c.hue(), wrap_hue(prev + step), "draw {i}");
            prev = c.hue();
        }
    }

    #[test]
    fn wheel_colors_have_fixed_saturation_and_value() {
        let wheel = ColorWheel::with_rng(0.5, Xorshift64::new(1));
        for c in wheel.take(100) {
            assert_eq!(c.saturation(), 1.0);
            assert_eq!(c.value(), 0.8);
            assert!((0.0..1.0).contains(&c.hue()));
            assert_eq!(c.to_hex().to_string().len(), 6);
        }
    }

    #[test]
    fn wheel_start_is_reduced_modulo_one() {
        assert_eq!(ColorWheel::with_rng(1.25, Xorshift64::new(1)).phase(), 0.25);
        assert_eq!(ColorWheel::with_rng(3.0, Xorshift64::new(1)).phase(), 0.0);
        assert_eq!(ColorWheel::with_rng(f64::NAN, Xorshift64::new(1)).phase(), 0.0);
    }

    #[test]
    fn wheel_with_same_seed_repeats() {
        let a: Vec<_> = ColorWheel::with_rng(0.0, Xorshift64::new(8))
            .take(20)
            .map(|c| c.hue())
            .collect();
        let b: Vec<_> = ColorWheel::with_rng(0.0, Xorshift64::new(8))
            .take(20)
            .map(|c| c.hue())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn wheel_borrows_an_external_source() {
        let mut rng = Xorshift64::new(3);
        let first = ColorWheel::with_rng(0.0, &mut rng).next().unwrap();
        let mut replay = Xorshift64::new(3);
        let expected = 0.0 + replay.next_range(0.1, 0.3);
        assert_eq!(first.hue(), expected);
    }

    #[test]
    fn default_wheel_produces_colors() {
        let c = ColorWheel::<Xorshift64>::default().next().unwrap();
        assert!((0.1..0.3).contains(&c.hue()), "hue {}", c.hue());
    }

    #[test]
    fn config_from_json_reads_overrides() {
        let config = WheelConfig::from_json(&json!({"value": 0.5, "max_shift": 0.2})).unwrap();
        assert_eq!(config.value, 0.5);
        assert_eq!(config.max_shift, 0.2);
        assert_eq!(config.saturation, DEFAULT_SATURATION);
        assert_eq!(config.min_shift, DEFAULT_MIN_SHIFT);
    }

    #[test]
    fn config_from_json_uses_defaults_for_empty_object() {
        assert_eq!(WheelConfig::from_json(&json!({})).unwrap(), WheelConfig::default());
    }

    #[test]
    fn config_rejects_out_of_domain_values() {
        assert!(WheelConfig::from_json(&json!({"saturation": 1.5})).is_err());
        assert!(WheelConfig::from_json(&json!({"value": -0.1})).is_err());
        assert!(WheelConfig::from_json(&json!({"min_shift": 0.0})).is_err());
        assert!(WheelConfig::from_json(&json!({"min_shift": 0.5, "max_shift": 0.4})).is_err());
        assert!(WheelConfig::from_json(&json!({"max_shift": 1.0})).is_err());
    }

    #[test]
    fn wheel_from_json_applies_config() {
        let params = json!({"saturation": 0.5, "value": 1.0});
        let wheel = ColorWheel::from_json(&params).unwrap();
        for c in wheel.take(10) {
            assert_eq!(c.saturation(), 0.5);
            assert_eq!(c.value(), 1.0);
        }
    }

    #[test]
    fn wheel_from_json_reads_seed_and_start() {
        let params = json!({"seed": 7, "start": 1.25});
        let wheel = ColorWheel::from_json(&params).unwrap();
        assert_eq!(wheel.phase(), 0.25);
        let hues: Vec<f64> = wheel.take(5).map(|c| c.hue()).collect();
        let expected: Vec<f64> = ColorWheel::with_rng(0.25, Xorshift64::new(7))
            .take(5)
            .map(|c| c.hue())
            .collect();
        assert_eq!(hues, expected);
    }

    #[test]
    fn wheel_from_json_rejects_bad_config() {
        let err = ColorWheel::from_json(&json!({"seed": 7, "value": 2.0})).unwrap_err();
        assert!(matches!(err, ColorError::InvalidParam { name: "value", .. }));
    }

    #[test]
    fn config_serde_round_trip() {
        let config = WheelConfig {
            saturation: 0.9,
            value: 0.7,
            min_shift: 0.05,
            max_shift: 0.15,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WheelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wheel_hues_always_in_half_open_unit(seed: u64, start in 0.0_f64..10.0) {
                let wheel = ColorWheel::with_rng(start, Xorshift64::new(seed));
                for c in wheel.take(200) {
                    prop_assert!((0.0..1.0).contains(&c.hue()), "hue {}", c.hue());
                }
            }

            #[test]
            fn custom_shift_bounds_are_honored(
                seed: u64,
                min in 0.01_f64..0.4,
                width in 0.0_f64..0.4,
            ) {
                let config = WheelConfig { min_shift: min, max_shift: min + width, ..WheelConfig::default() };
                let mut wheel = ColorWheel::with_config(0.0, config, Xorshift64::new(seed)).unwrap();
                let mut replay = Xorshift64::new(seed);
                let mut prev = wheel.phase();
                for _ in 0..200 {
                    let hue = wheel.next().unwrap().hue();
                    let step = replay.next_range(min, min + width);
                    prop_assert!(step >= min && (step < min + width || step == min), "step {step}");
                    prop_assert_eq!(hue, wrap_hue(prev + step));
                    prev = hue;
                }
            }
        }
    }
}
