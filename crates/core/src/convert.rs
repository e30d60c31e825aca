//! Conversion formulas between color representations.
//!
//! All conversions are pure functions. The RGB float <-> HSV pair is the
//! only non-trivial transform; every other conversion composes through it or
//! through the integer/float scaling below. Hex never converts directly to
//! HSV, it always goes through integer RGB.

use crate::channel::{clamp_byte, clamp_unit, unit_to_byte, wrap_hue};
use crate::hsv::Hsv;
use crate::rgb::Rgb;
use crate::rgb_float::RgbFloat;

/// Converts 8-bit RGB to unit RGB by dividing each channel by 255.
pub fn rgb_to_rgb_float(c: Rgb) -> RgbFloat {
    let [r, g, b] = c.to_array();
    RgbFloat::clamped(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

/// Converts unit RGB to 8-bit RGB, multiplying by 255 and rounding to the
/// nearest integer.
pub fn rgb_float_to_rgb(c: RgbFloat) -> Rgb {
    let [r, g, b] = c.to_array().map(|v| clamp_byte(unit_to_byte(v)) as u8);
    Rgb::from_u8(r, g, b)
}

/// Clamps a computed HSV channel into [0, 1], warning if it had drifted.
fn settle(channel: &'static str, v: f64) -> f64 {
    let clamped = clamp_unit(v);
    if clamped != v {
        tracing::warn!(channel, input = v, clamped, "hsv conversion result clamped");
    }
    clamped
}

/// Converts unit RGB to HSV.
///
/// Value is the channel maximum, saturation is chroma over value, and hue is
/// taken from the dominant channel. Achromatic colors get hue 0. Any channel
/// that lands outside [0, 1] is clamped with a warning.
pub fn rgb_float_to_hsv(c: RgbFloat) -> Hsv {
    let [r, g, b] = c.to_array();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    if max == min {
        return Hsv::from_parts(0.0, 0.0, settle("value", v));
    }
    let chroma = max - min;
    let s = chroma / max;
    let rc = (max - r) / chroma;
    let gc = (max - g) / chroma;
    let bc = (max - b) / chroma;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    Hsv::from_parts(
        wrap_hue(h / 6.0),
        settle("saturation", s),
        settle("value", v),
    )
}

/// Converts HSV to unit RGB by sector interpolation.
///
/// The hue circle is split into six sectors; within each, one channel is at
/// `v`, one at `p = v(1-s)`, and the third interpolates between them.
pub fn hsv_to_rgb_float(c: Hsv) -> RgbFloat {
    let [h, s, v] = c.to_array();
    if s == 0.0 {
        return RgbFloat::clamped(v, v, v);
    }
    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    RgbFloat::clamped(r, g, b)
}
