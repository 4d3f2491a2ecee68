//! Stateless trigonometric calculator.
//!
//! Fully separate from the order workflow: read an angle, compute, report.
//! Angles are accepted in the closed range [0, 360] degrees. Tangent is
//! reported as infinite near its undefined points (90 deg, 270 deg) instead
//! of a numerically meaningless huge value.

use crate::error::{OrderpadError, Result};
use std::fmt;

/// Cosine magnitudes below this are treated as zero for tangent purposes.
pub const COS_EPSILON: f64 = 1e-10;

const DISPLAY_DECIMALS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tangent {
    Finite(f64),
    Infinite,
}

impl fmt::Display for Tangent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tangent::Finite(v) => write!(f, "{:.4}", round4(*v)),
            Tangent::Infinite => f.write_str("infinite"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigReading {
    pub angle_degrees: f64,
    pub sin: f64,
    pub cos: f64,
    pub tan: Tangent,
}

impl TrigReading {
    pub fn sin_display(&self) -> String {
        format!("{:.4}", round4(self.sin))
    }

    pub fn cos_display(&self) -> String {
        format!("{:.4}", round4(self.cos))
    }

    pub fn tan_display(&self) -> String {
        self.tan.to_string()
    }
}

/// Compute sine, cosine and tangent for an angle in degrees.
///
/// Rejects non-finite input and anything outside [0, 360]; prior output is
/// the caller's to keep, nothing here is printed or stored.
pub fn compute(angle_degrees: f64) -> Result<TrigReading> {
    if !angle_degrees.is_finite() || !(0.0..=360.0).contains(&angle_degrees) {
        return Err(OrderpadError::AngleOutOfRange(angle_degrees));
    }

    let radians = angle_degrees.to_radians();
    let sin = radians.sin();
    let cos = radians.cos();
    let tan = if cos.abs() < COS_EPSILON {
        Tangent::Infinite
    } else {
        Tangent::Finite(sin / cos)
    };

    Ok(TrigReading {
        angle_degrees,
        sin,
        cos,
        tan,
    })
}

/// Round to 4 decimals, normalizing negative zero so sin(360 deg) displays
/// as 0.0000 rather than -0.0000.
pub fn round4(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMALS as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Directional glyph for the rotation indicator, one of eight 45-degree
/// sectors counterclockwise from "east".
pub fn rotation_glyph(angle_degrees: f64) -> char {
    const ARROWS: [char; 8] = ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'];
    let sector = (((angle_degrees + 22.5) / 45.0).floor() as usize) % 8;
    ARROWS[sector]
}
