#![deny(unsafe_code)]
//! Color value types, conversions and blend modes.
//!
//! Four representations share the [`Color`] contract: [`Rgb`] (8-bit
//! integers), [`RgbFloat`] (unit floats, the interchange format), [`Hsv`] and
//! [`Hex`]. Any color converts to any other and compares equal to any other
//! when both round to the same 8-bit RGB. The [`Blend`] trait adds arithmetic
//! and photo-editing blend modes; [`ColorWheel`] and [`random_color`] generate
//! colors from an explicit [`RandomSource`].

pub mod blend;
pub mod channel;
pub mod color;
pub mod convert;
pub mod error;
pub mod generate;
pub mod hex;
pub mod hsv;
pub mod params;
pub mod prng;
pub mod rgb;
pub mod rgb_float;

#[cfg(test)]
mod test_log;

pub use blend::{Blend, BlendMode, UnclampedRgb};
pub use color::Color;
pub use error::ColorError;
pub use generate::{random_color, random_color_with, ColorWheel, WheelConfig};
pub use hex::{hex, Hex};
pub use hsv::{hsv, Hsv};
pub use prng::{RandomSource, Xorshift64};
pub use rgb::{rgb, Rgb};
pub use rgb_float::{rgbf, RgbFloat};
