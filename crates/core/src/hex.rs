//! Six-digit hexadecimal colors such as `"bada55"`.
//!
//! Precision is limited to 8 bits per channel; converting a float or HSV
//! color to hex quantizes it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::channel::RGB_NAMES;
use crate::color::{Color, CHANNELS};
use crate::error::ColorError;
use crate::hsv::Hsv;
use crate::rgb::Rgb;
use crate::rgb_float::RgbFloat;

const HEX_DIGITS: &str = "0123456789abcdef";

/// A color written as three lowercase two-digit hex channels.
///
/// The default value is `"000000"`. Renders without separators or a leading
/// `#`.
#[derive(Debug, Clone, Copy, Default, Eq, Hash)]
pub struct Hex {
    rgb: Rgb,
}

/// Parses one two-digit channel, which must already be lowercase hex.
fn parse_channel(channel: &'static str, digits: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(digits, 16)
        .map_err(|e| ColorError::InvalidHex(format!("invalid {channel} component: {e}")))
}

fn check_channel_digits(channel: &'static str, digits: &str) -> Result<u8, ColorError> {
    let digits = digits.to_lowercase();
    if digits.chars().count() != 2 {
        return Err(ColorError::InvalidHex(format!(
            "{channel} component must be 2 hex digits, got {digits:?}"
        )));
    }
    if !digits.chars().all(|c| HEX_DIGITS.contains(c)) {
        return Err(ColorError::InvalidHex(format!(
            "{channel} component is not a hex number: {digits:?}"
        )));
    }
    parse_channel(channel, &digits)
}

impl Hex {
    /// Parses a 6-digit hex color like `"ff00aa"` (case insensitive, no `#`).
    ///
    /// Returns `ColorError::InvalidHex` if the input is not exactly six
    /// characters from `0-9a-f`.
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.to_lowercase();
        let len = hex.chars().count();
        if len != 6 {
            return Err(ColorError::InvalidHex(format!(
                "expected 6 hex digits, got {len}"
            )));
        }
        if let Some(bad) = hex.chars().find(|c| !HEX_DIGITS.contains(*c)) {
            return Err(ColorError::InvalidHex(format!(
                "not a valid hex number: unexpected {bad:?}"
            )));
        }
        Ok(Self {
            rgb: Rgb::from_u8(
                parse_channel(RGB_NAMES[0], &hex[0..2])?,
                parse_channel(RGB_NAMES[1], &hex[2..4])?,
                parse_channel(RGB_NAMES[2], &hex[4..6])?,
            ),
        })
    }

    /// Wraps an integer RGB color. Lossless.
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Red channel as two lowercase hex digits.
    pub fn red(&self) -> String {
        format!("{:02x}", self.rgb.red())
    }

    /// Green channel as two lowercase hex digits.
    pub fn green(&self) -> String {
        format!("{:02x}", self.rgb.green())
    }

    /// Blue channel as two lowercase hex digits.
    pub fn blue(&self) -> String {
        format!("{:02x}", self.rgb.blue())
    }

    pub fn set_red(&mut self, digits: &str) -> Result<(), ColorError> {
        let [_, g, b] = self.rgb.to_array();
        self.rgb = Rgb::from_u8(check_channel_digits(RGB_NAMES[0], digits)?, g, b);
        Ok(())
    }

    pub fn set_green(&mut self, digits: &str) -> Result<(), ColorError> {
        let [r, _, b] = self.rgb.to_array();
        self.rgb = Rgb::from_u8(r, check_channel_digits(RGB_NAMES[1], digits)?, b);
        Ok(())
    }

    pub fn set_blue(&mut self, digits: &str) -> Result<(), ColorError> {
        let [r, g, _] = self.rgb.to_array();
        self.rgb = Rgb::from_u8(r, g, check_channel_digits(RGB_NAMES[2], digits)?);
        Ok(())
    }
}

impl Color for Hex {
    type Channel = String;

    fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    fn to_rgb_float(&self) -> RgbFloat {
        self.rgb.to_rgb_float()
    }

    fn to_hsv(&self) -> Hsv {
        self.rgb.to_hsv()
    }

    fn to_hex(&self) -> Hex {
        *self
    }

    fn from_color<C: Color + ?Sized>(other: &C) -> Self {
        other.to_hex()
    }

    fn channels(&self) -> [String; CHANNELS] {
        [self.red(), self.green(), self.blue()]
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb.to_array();
        write!(f, "{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::new(s)
    }
}

impl IntoIterator for Hex {
    type Item = String;
    type IntoIter = std::array::IntoIter<String, CHANNELS>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels().into_iter()
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hex::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Shorthand for [`Hex::new`].
pub fn hex(hex: &str) -> Result<Hex, ColorError> {
    Hex::new(hex)
}
