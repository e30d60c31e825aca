//! Arithmetic and photo-editing blend modes between two colors.
//!
//! Both operands are normalized to [`RgbFloat`] first, whatever their
//! representation. Each operation comes in two forms:
//!
//! - **raw** (`raw_add`, `raw_multiply`, ...): returns an [`UnclampedRgb`]
//!   with no clamping, so channels may leave [0, 1].
//! - **blend** (`add`, `multiply`, `screen`, ...): clamps every channel into
//!   [0, 1] and returns the same representation as the left operand.
//!
//! In the per-channel formulas `a` is the left operand (`self`) and `b` the
//! right operand (`other`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channel::{clamp_unit, RGB_NAMES};
use crate::color::{Color, CHANNELS};
use crate::error::ColorError;
use crate::rgb_float::RgbFloat;

/// A binary blend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `a * b`, darkens.
    Multiply,
    /// `a + b`, brightens.
    Add,
    /// `a - b`.
    Subtract,
    /// `a / b`.
    Divide,
    /// `1 - (1 - a)(1 - b)`.
    Screen,
    /// `|a - b|`.
    Difference,
    /// Contrast S-curve keyed on `b`.
    Overlay,
    /// `b / (1 - a)`.
    ColorDodge,
    /// Same as [`BlendMode::Add`].
    LinearDodge,
    /// `1 - (1 - b) / a`.
    ColorBurn,
    /// `a + b - 1`.
    LinearBurn,
}

impl BlendMode {
    /// Every blend mode, in declaration order.
    pub const ALL: [BlendMode; 11] = [
        BlendMode::Multiply,
        BlendMode::Add,
        BlendMode::Subtract,
        BlendMode::Divide,
        BlendMode::Screen,
        BlendMode::Difference,
        BlendMode::Overlay,
        BlendMode::ColorDodge,
        BlendMode::LinearDodge,
        BlendMode::ColorBurn,
        BlendMode::LinearBurn,
    ];

    /// Returns the snake_case name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Add => "add",
            BlendMode::Subtract => "subtract",
            BlendMode::Divide => "divide",
            BlendMode::Screen => "screen",
            BlendMode::Difference => "difference",
            BlendMode::Overlay => "overlay",
            BlendMode::ColorDodge => "color_dodge",
            BlendMode::LinearDodge => "linear_dodge",
            BlendMode::ColorBurn => "color_burn",
            BlendMode::LinearBurn => "linear_burn",
        }
    }

    /// Computes one channel without clamping.
    ///
    /// Divide here is plain `a / b` and follows IEEE rules for a zero
    /// divisor; [`BlendMode::raw_channel`] is the checked entry point.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BlendMode::Multiply => a * b,
            BlendMode::Add | BlendMode::LinearDodge => a + b,
            BlendMode::Subtract => a - b,
            BlendMode::Divide => a / b,
            BlendMode::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            BlendMode::Difference => (a - b).abs(),
            BlendMode::Overlay => {
                if b > 0.5 {
                    1.0 - (1.0 - 2.0 * (b - 0.5)) * (1.0 - a)
                } else {
                    2.0 * b * a
                }
            }
            BlendMode::ColorDodge => {
                if a >= 1.0 {
                    if b > 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    b / (1.0 - a)
                }
            }
            BlendMode::ColorBurn => {
                if a <= 0.0 {
                    if b >= 1.0 {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    1.0 - (1.0 - b) / a
                }
            }
            BlendMode::LinearBurn => a + b - 1.0,
        }
    }

    /// Computes one channel without clamping.
    ///
    /// Only [`BlendMode::Divide`] can fail, when `b` is exactly zero.
    pub fn raw_channel(self, channel: &'static str, a: f64, b: f64) -> Result<f64, ColorError> {
        if self == BlendMode::Divide && b == 0.0 {
            return Err(ColorError::DivisionByZero { channel });
        }
        Ok(self.apply(a, b))
    }

    /// Computes one channel clamped into [0, 1].
    ///
    /// Divide uses `1 / (a / b)` here rather than `a / b`, and fails if either
    /// division hits zero (`b == 0`, or `a == 0` making the reciprocal blow up).
    pub fn blend_channel(self, channel: &'static str, a: f64, b: f64) -> Result<f64, ColorError> {
        match self {
            BlendMode::Divide => {
                if b == 0.0 {
                    return Err(ColorError::DivisionByZero { channel });
                }
                let ratio = a / b;
                if ratio == 0.0 {
                    return Err(ColorError::DivisionByZero { channel });
                }
                Ok(clamp_unit(1.0 / ratio))
            }
            _ => Ok(clamp_unit(self.apply(a, b))),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ColorError::InvalidParam {
                name: "blend_mode",
                reason: format!("unknown blend mode {s:?}"),
            })
    }
}

/// The unclamped result of a raw operation.
///
/// Channels may fall outside [0, 1]. Use [`UnclampedRgb::clamp`] or
/// [`UnclampedRgb::to_rgb_float`] to get back into a valid color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnclampedRgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl UnclampedRgb {
    /// Returns `[red, green, blue]`.
    pub fn to_array(self) -> [f64; CHANNELS] {
        [self.red, self.green, self.blue]
    }

    /// Returns true when every channel is already in [0, 1].
    pub fn in_range(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Clamps each channel into [0, 1].
    pub fn clamp(self) -> RgbFloat {
        RgbFloat::clamped(self.red, self.green, self.blue)
    }

    /// Validates the channels as an [`RgbFloat`], failing if any is out of range.
    pub fn to_rgb_float(self) -> Result<RgbFloat, ColorError> {
        RgbFloat::new(self.red, self.green, self.blue)
    }
}

impl fmt::Display for UnclampedRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::color::fmt_channels(f, &self.to_array())
    }
}

fn zip_channels<F>(a: RgbFloat, b: RgbFloat, mut op: F) -> Result<[f64; CHANNELS], ColorError>
where
    F: FnMut(&'static str, f64, f64) -> Result<f64, ColorError>,
{
    let a = a.to_array();
    let b = b.to_array();
    Ok([
        op(RGB_NAMES[0], a[0], b[0])?,
        op(RGB_NAMES[1], a[1], b[1])?,
        op(RGB_NAMES[2], a[2], b[2])?,
    ])
}

/// Blend operations, available on every [`Color`].
pub trait Blend: Color + Sized {
    /// Applies `mode` without clamping.
    fn raw_blend_with<C: Color>(
        &self,
        mode: BlendMode,
        other: &C,
    ) -> Result<UnclampedRgb, ColorError> {
        let [red, green, blue] =
            zip_channels(self.to_rgb_float(), other.to_rgb_float(), |ch, a, b| {
                mode.raw_channel(ch, a, b)
            })?;
        Ok(UnclampedRgb { red, green, blue })
    }

    /// Applies `mode`, clamps, and converts back to this representation.
    fn blend_with<C: Color>(&self, mode: BlendMode, other: &C) -> Result<Self, ColorError> {
        let [r, g, b] = zip_channels(self.to_rgb_float(), other.to_rgb_float(), |ch, a, b| {
            mode.blend_channel(ch, a, b)
        })?;
        Ok(Self::from_color(&RgbFloat::clamped(r, g, b)))
    }

    fn raw_add<C: Color>(&self, other: &C) -> UnclampedRgb {
        infallible_raw(self, BlendMode::Add, other)
    }

    fn raw_subtract<C: Color>(&self, other: &C) -> UnclampedRgb {
        infallible_raw(self, BlendMode::Subtract, other)
    }

    fn raw_multiply<C: Color>(&self, other: &C) -> UnclampedRgb {
        infallible_raw(self, BlendMode::Multiply, other)
    }

    /// Divides channel by channel. Fails with `ColorError::DivisionByZero`
    /// if any channel of `other` is exactly zero.
    fn raw_divide<C: Color>(&self, other: &C) -> Result<UnclampedRgb, ColorError> {
        self.raw_blend_with(BlendMode::Divide, other)
    }

    fn multiply<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::Multiply, other)
    }

    fn add<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::Add, other)
    }

    fn subtract<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::Subtract, other)
    }

    /// Clamped `1 / (a / b)`. Fails when either division hits zero.
    fn divide<C: Color>(&self, other: &C) -> Result<Self, ColorError> {
        self.blend_with(BlendMode::Divide, other)
    }

    fn screen<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::Screen, other)
    }

    fn difference<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::Difference, other)
    }

    fn overlay<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::Overlay, other)
    }

    /// Difference against white.
    fn invert(&self) -> Self {
        self.difference(&RgbFloat::clamped(1.0, 1.0, 1.0))
    }

    fn color_dodge<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::ColorDodge, other)
    }

    fn linear_dodge<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::LinearDodge, other)
    }

    fn color_burn<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::ColorBurn, other)
    }

    fn linear_burn<C: Color>(&self, other: &C) -> Self {
        infallible_blend(self, BlendMode::LinearBurn, other)
    }
}

impl<T: Color> Blend for T {}

/// Channel-wise application of a mode other than divide.
fn infallible_raw<S: Color, C: Color>(lhs: &S, mode: BlendMode, rhs: &C) -> UnclampedRgb {
    let [ar, ag, ab] = lhs.to_rgb_float().to_array();
    let [br, bg, bb] = rhs.to_rgb_float().to_array();
    UnclampedRgb {
        red: mode.apply(ar, br),
        green: mode.apply(ag, bg),
        blue: mode.apply(ab, bb),
    }
}

/// Channel-wise clamped blend for modes that never fail.
fn infallible_blend<S: Color, C: Color>(lhs: &S, mode: BlendMode, rhs: &C) -> S {
    S::from_color(&infallible_raw(lhs, mode, rhs).clamp())
}
