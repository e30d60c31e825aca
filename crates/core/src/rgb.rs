//! 8-bit integer RGB, channels in [0, 255].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::{check_byte, round_byte, RGB_NAMES};
use crate::color::{fmt_channels, Color, CHANNELS};
use crate::convert::{rgb_float_to_hsv, rgb_to_rgb_float};
use crate::error::ColorError;
use crate::hex::Hex;
use crate::hsv::Hsv;
use crate::rgb_float::RgbFloat;

/// Red, green and blue as integers in [0, 255].
///
/// The default value is black. Out-of-range channels are rejected at
/// construction, so every `Rgb` is valid.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a color from integer channels.
    ///
    /// Returns `ColorError::ChannelOutOfRange` if any channel is outside [0, 255].
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, ColorError> {
        Ok(Self {
            red: check_byte(RGB_NAMES[0], red)?,
            green: check_byte(RGB_NAMES[1], green)?,
            blue: check_byte(RGB_NAMES[2], blue)?,
        })
    }

    /// Creates a color from real-valued channels, rounding each to the
    /// nearest integer.
    ///
    /// A non-integer input emits a warning but is accepted as long as the
    /// rounded value is within [0, 255].
    pub fn from_f64(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        Ok(Self {
            red: round_byte(RGB_NAMES[0], red)?,
            green: round_byte(RGB_NAMES[1], green)?,
            blue: round_byte(RGB_NAMES[2], blue)?,
        })
    }

    /// Creates a color from bytes. Infallible, usable in constants.
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn set_red(&mut self, red: i64) -> Result<(), ColorError> {
        self.red = check_byte(RGB_NAMES[0], red)?;
        Ok(())
    }

    pub fn set_green(&mut self, green: i64) -> Result<(), ColorError> {
        self.green = check_byte(RGB_NAMES[1], green)?;
        Ok(())
    }

    pub fn set_blue(&mut self, blue: i64) -> Result<(), ColorError> {
        self.blue = check_byte(RGB_NAMES[2], blue)?;
        Ok(())
    }

    /// Returns `[red, green, blue]`.
    pub const fn to_array(self) -> [u8; CHANNELS] {
        [self.red, self.green, self.blue]
    }
}

impl Color for Rgb {
    type Channel = u8;

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_rgb_float(&self) -> RgbFloat {
        rgb_to_rgb_float(*self)
    }

    fn to_hsv(&self) -> Hsv {
        rgb_float_to_hsv(self.to_rgb_float())
    }

    fn to_hex(&self) -> Hex {
        Hex::from_rgb(*self)
    }

    fn from_color<C: Color + ?Sized>(other: &C) -> Self {
        other.to_rgb()
    }

    fn channels(&self) -> [u8; CHANNELS] {
        self.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_channels(f, &self.channels())
    }
}

impl IntoIterator for Rgb {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, CHANNELS>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

/// Shorthand for [`Rgb::new`].
pub fn rgb(red: i64, green: i64, blue: i64) -> Result<Rgb, ColorError> {
    Rgb::new(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_full_range() {
        let c = Rgb::new(100, 100, 100).unwrap();
        assert_eq!(c.red(), 100);
        assert_eq!(c.green(), 100);
        assert_eq!(c.blue(), 100);
        assert!(Rgb::new(255, 0, 0).is_ok());
        assert!(Rgb::new(0, 0, 0).is_ok());
    }

    #[test]
    fn new_rejects_above_255() {
        let err = Rgb::new(256, 0, 0).unwrap_err();
        assert!(err.is_validation());
        assert!(Rgb::new(300, 300, 300).is_err());
    }

    #[test]
    fn new_rejects_negative() {
        assert!(Rgb::new(-50, 50, 50).is_err());
    }

    #[test]
    fn error_names_offending_channel() {
        match Rgb::new(0, 0, 999).unwrap_err() {
            ColorError::ChannelOutOfRange { channel, .. } => assert_eq!(channel, "blue"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_f64_rounds_to_nearest() {
        let c = Rgb::from_f64(204.0, 122.4, 122.6).unwrap();
        assert_eq!(c.to_array(), [204, 122, 123]);
    }

    #[test]
    fn from_f64_warns_about_fractional_channels() {
        let (c, logged) = crate::test_log::warnings(|| Rgb::from_f64(204.0, 122.4, 122.0));
        assert_eq!(c.unwrap().to_array(), [204, 122, 122]);
        assert!(logged.contains("non-integer channel rounded"), "{logged}");
        assert!(logged.contains("input=122.4"), "{logged}");
        assert_eq!(logged.lines().count(), 1, "{logged}");
    }

    #[test]
    fn from_f64_is_silent_for_whole_numbers() {
        let (_, logged) = crate::test_log::warnings(|| Rgb::from_f64(1.0, 2.0, 3.0));
        assert!(logged.is_empty(), "{logged}");
    }

    #[test]
    fn from_f64_rejects_when_rounded_value_out_of_range() {
        assert!(Rgb::from_f64(255.4, 0.0, 0.0).is_ok());
        assert!(Rgb::from_f64(255.5, 0.0, 0.0).is_err());
        assert!(Rgb::from_f64(-0.6, 0.0, 0.0).is_err());
        assert!(Rgb::from_f64(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Rgb::default().to_array(), [0, 0, 0]);
    }

    #[test]
    fn setters_validate() {
        let mut c = Rgb::default();
        c.set_red(10).unwrap();
        c.set_green(20).unwrap();
        c.set_blue(30).unwrap();
        assert_eq!(c.to_array(), [10, 20, 30]);
        assert!(c.set_green(256).is_err());
        assert_eq!(c.green(), 20, "failed setter must not modify the channel");
    }

    #[test]
    fn iterates_channels_in_order() {
        let c = Rgb::new(1, 2, 3).unwrap();
        let v: Vec<u8> = c.into_iter().collect();
        assert_eq!(v, vec![1, 2, 3]);
        // re-iterable since Rgb is Copy
        assert_eq!(c.into_iter().sum::<u8>(), 6);
    }

    #[test]
    fn to_hex_formats_each_channel() {
        let hex = Rgb::new(100, 100, 100).unwrap().to_hex();
        assert_eq!(hex.red(), "64");
        assert_eq!(hex.green(), "64");
        assert_eq!(hex.blue(), "64");
    }

    #[test]
    fn to_rgb_float_divides_by_255() {
        let f = Rgb::new(255, 0, 51).unwrap().to_rgb_float();
        assert_eq!(f.red(), 1.0);
        assert_eq!(f.green(), 0.0);
        assert!((f.blue() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_named_channels() {
        let c = Rgb::new(1, 2, 3).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"red":1,"green":2,"blue":3}"#);
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let result: Result<Rgb, _> = serde_json::from_str(r#"{"red":256,"green":0,"blue":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn shorthand_matches_new() {
        assert_eq!(rgb(5, 6, 7).unwrap(), Rgb::new(5, 6, 7).unwrap());
    }
}
