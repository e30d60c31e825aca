//! Floating-point RGB, channels in [0, 1].
//!
//! This is the interchange format: every cross-representation read and every
//! blend operation goes through it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::{check_unit, clamp_unit, RGB_NAMES};
use crate::color::{fmt_channels, Color, CHANNELS};
use crate::convert::{rgb_float_to_hsv, rgb_float_to_rgb};
use crate::error::ColorError;
use crate::hsv::Hsv;
use crate::rgb::Rgb;

/// Red, green and blue as reals in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "RgbFloatRepr")]
pub struct RgbFloat {
    red: f64,
    green: f64,
    blue: f64,
}

#[derive(Deserialize)]
struct RgbFloatRepr {
    red: f64,
    green: f64,
    blue: f64,
}

impl TryFrom<RgbFloatRepr> for RgbFloat {
    type Error = ColorError;

    fn try_from(repr: RgbFloatRepr) -> Result<Self, Self::Error> {
        RgbFloat::new(repr.red, repr.green, repr.blue)
    }
}

impl RgbFloat {
    /// Creates a color from unit channels.
    ///
    /// Returns `ColorError::ChannelOutOfRange` if any channel is outside
    /// [0, 1] or not finite.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        Ok(Self {
            red: check_unit(RGB_NAMES[0], red)?,
            green: check_unit(RGB_NAMES[1], green)?,
            blue: check_unit(RGB_NAMES[2], blue)?,
        })
    }

    /// Creates a color, clamping each channel into [0, 1] (NaN becomes 0).
    pub fn clamped(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
        }
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn set_red(&mut self, red: f64) -> Result<(), ColorError> {
        self.red = check_unit(RGB_NAMES[0], red)?;
        Ok(())
    }

    pub fn set_green(&mut self, green: f64) -> Result<(), ColorError> {
        self.green = check_unit(RGB_NAMES[1], green)?;
        Ok(())
    }

    pub fn set_blue(&mut self, blue: f64) -> Result<(), ColorError> {
        self.blue = check_unit(RGB_NAMES[2], blue)?;
        Ok(())
    }

    /// Returns `[red, green, blue]`.
    pub fn to_array(self) -> [f64; CHANNELS] {
        [self.red, self.green, self.blue]
    }
}

impl Color for RgbFloat {
    type Channel = f64;

    fn to_rgb(&self) -> Rgb {
        rgb_float_to_rgb(*self)
    }

    fn to_rgb_float(&self) -> RgbFloat {
        *self
    }

    fn to_hsv(&self) -> Hsv {
        rgb_float_to_hsv(*self)
    }

    fn from_color<C: Color + ?Sized>(other: &C) -> Self {
        other.to_rgb_float()
    }

    fn channels(&self) -> [f64; CHANNELS] {
        self.to_array()
    }
}

impl fmt::Display for RgbFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_channels(f, &self.channels())
    }
}

impl IntoIterator for RgbFloat {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, CHANNELS>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

/// Shorthand for [`RgbFloat::new`].
pub fn rgbf(red: f64, green: f64, blue: f64) -> Result<RgbFloat, ColorError> {
    RgbFloat::new(red, green, blue)
}
