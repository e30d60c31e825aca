//! The capability contract shared by every color representation.
//!
//! Exactly four types implement [`Color`]: [`Rgb`], [`RgbFloat`], [`Hsv`] and
//! [`Hex`]. Each can convert to any of the others, expose its three channels,
//! and compare against any other color. Equality is decided in 8-bit RGB:
//! two colors are equal when they round to the same `Rgb` channels.

use std::fmt;

use crate::hex::Hex;
use crate::hsv::Hsv;
use crate::rgb::Rgb;
use crate::rgb_float::RgbFloat;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Rgb {}
    impl Sealed for super::RgbFloat {}
    impl Sealed for super::Hsv {}
    impl Sealed for super::Hex {}
}

/// Number of channels in every representation.
pub const CHANNELS: usize = 3;

/// A color in one of the four supported representations.
#[allow(clippy::len_without_is_empty)]
pub trait Color: sealed::Sealed + fmt::Debug + fmt::Display {
    /// The scalar type of one channel (`u8`, `f64` or a two-digit hex string).
    type Channel: PartialEq + fmt::Display;

    /// Converts to 8-bit integer RGB.
    fn to_rgb(&self) -> Rgb;

    /// Converts to floating-point RGB, the interchange format for arithmetic.
    fn to_rgb_float(&self) -> RgbFloat;

    /// Converts to hue/saturation/value.
    fn to_hsv(&self) -> Hsv;

    /// Converts to a hex color. Always routed through integer RGB.
    fn to_hex(&self) -> Hex {
        Hex::from_rgb(self.to_rgb())
    }

    /// Builds this representation from any other color.
    fn from_color<C: Color + ?Sized>(other: &C) -> Self
    where
        Self: Sized;

    /// Returns the three channels in storage order.
    fn channels(&self) -> [Self::Channel; CHANNELS];

    /// Returns true if any channel equals `value`.
    fn contains(&self, value: &Self::Channel) -> bool {
        self.channels().iter().any(|c| c == value)
    }

    /// Number of channels, always [`CHANNELS`].
    fn len(&self) -> usize {
        CHANNELS
    }
}

/// Writes channels joined by `", "`, the default textual form of a color.
pub(crate) fn fmt_channels<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    channels: &[T; CHANNELS],
) -> fmt::Result {
    write!(f, "{}, {}, {}", channels[0], channels[1], channels[2])
}

/// Cross-representation equality and copy-conversion for each color type.
macro_rules! impl_color_interop {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<C: Color> PartialEq<C> for $ty {
                fn eq(&self, other: &C) -> bool {
                    self.to_rgb().to_array() == other.to_rgb().to_array()
                }
            }

            impl<C: Color> From<&C> for $ty {
                fn from(other: &C) -> Self {
                    <$ty as Color>::from_color(other)
                }
            }
        )*
    };
}

impl_color_interop!(Rgb, RgbFloat, Hsv, Hex);
