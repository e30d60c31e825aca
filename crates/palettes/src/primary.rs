//! Black, white and the additive primaries.

use chromatic_core::Rgb;

use crate::NamedColors;

pub const BLACK: Rgb = Rgb::from_u8(0, 0, 0);
pub const WHITE: Rgb = Rgb::from_u8(255, 255, 255);
pub const RED: Rgb = Rgb::from_u8(255, 0, 0);
pub const GREEN: Rgb = Rgb::from_u8(0, 255, 0);
pub const BLUE: Rgb = Rgb::from_u8(0, 0, 255);

pub const PRIMARY: NamedColors = NamedColors::new(
    "primary",
    &[
        ("black", BLACK),
        ("white", WHITE),
        ("red", RED),
        ("green", GREEN),
        ("blue", BLUE),
    ],
);
