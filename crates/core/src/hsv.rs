//! Hue, saturation and value.
//!
//! Hue is circular: any hue of 1.0 or more wraps modulo 1 at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::{check_unit, wrap_hue};
use crate::color::{fmt_channels, Color, CHANNELS};
use crate::convert::hsv_to_rgb_float;
use crate::error::ColorError;
use crate::rgb::Rgb;
use crate::rgb_float::RgbFloat;

/// A color as hue in [0, 1), saturation in [0, 1] and value in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "HsvRepr")]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

#[derive(Deserialize)]
struct HsvRepr {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl TryFrom<HsvRepr> for Hsv {
    type Error = ColorError;

    fn try_from(repr: HsvRepr) -> Result<Self, Self::Error> {
        Hsv::new(repr.hue, repr.saturation, repr.value)
    }
}

/// Hue has no upper bound since it wraps; only negative or non-finite fails.
fn check_hue(hue: f64) -> Result<f64, ColorError> {
    if hue.is_finite() && hue >= 0.0 {
        Ok(wrap_hue(hue))
    } else {
        Err(ColorError::ChannelOutOfRange {
            channel: "hue",
            value: hue,
            min: 0.0,
            max: 1.0,
        })
    }
}

impl Hsv {
    /// Creates a color from hue, saturation and value.
    ///
    /// A hue of 1.0 or more wraps (2.0 becomes 0.0, 1.5 becomes 0.5).
    /// Negative or non-finite hue, and saturation or value outside [0, 1],
    /// return `ColorError::ChannelOutOfRange`.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_hue(hue)?,
            saturation: check_unit("saturation", saturation)?,
            value: check_unit("value", value)?,
        })
    }

    /// Builds from channels already known to be in range.
    pub(crate) fn from_parts(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation,
            value,
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the hue, wrapping values of 1.0 or more.
    pub fn set_hue(&mut self, hue: f64) -> Result<(), ColorError> {
        self.hue = check_hue(hue)?;
        Ok(())
    }

    pub fn set_saturation(&mut self, saturation: f64) -> Result<(), ColorError> {
        self.saturation = check_unit("saturation", saturation)?;
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) -> Result<(), ColorError> {
        self.value = check_unit("value", value)?;
        Ok(())
    }

    /// Returns `[hue, saturation, value]`.
    pub fn to_array(self) -> [f64; CHANNELS] {
        [self.hue, self.saturation, self.value]
    }
}

impl Color for Hsv {
    type Channel = f64;

    fn to_rgb(&self) -> Rgb {
        self.to_rgb_float().to_rgb()
    }

    fn to_rgb_float(&self) -> RgbFloat {
        hsv_to_rgb_float(*self)
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }

    fn from_color<C: Color + ?Sized>(other: &C) -> Self {
        other.to_hsv()
    }

    fn channels(&self) -> [f64; CHANNELS] {
        self.to_array()
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_channels(f, &self.channels())
    }
}

impl IntoIterator for Hsv {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, CHANNELS>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

/// Shorthand for [`Hsv::new`].
pub fn hsv(hue: f64, saturation: f64, value: f64) -> Result<Hsv, ColorError> {
    Hsv::new(hue, saturation, value)
}
