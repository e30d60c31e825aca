//! ROYGBIV.

use chromatic_core::Rgb;

use crate::NamedColors;

pub const RED: Rgb = Rgb::from_u8(255, 0, 0);
pub const ORANGE: Rgb = Rgb::from_u8(255, 165, 0);
pub const YELLOW: Rgb = Rgb::from_u8(255, 255, 0);
pub const GREEN: Rgb = Rgb::from_u8(0, 128, 0);
pub const BLUE: Rgb = Rgb::from_u8(0, 0, 255);
pub const INDIGO: Rgb = Rgb::from_u8(75, 0, 130);
pub const VIOLET: Rgb = Rgb::from_u8(238, 130, 238);

/// The seven rainbow colors in spectral order.
pub const RAINBOW: NamedColors = NamedColors::new(
    "rainbow",
    &[
        ("red", RED),
        ("orange", ORANGE),
        ("yellow", YELLOW),
        ("green", GREEN),
        ("blue", BLUE),
        ("indigo", INDIGO),
        ("violet", VIOLET),
    ],
);
