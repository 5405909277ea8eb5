//! Length units used by the layout controls.
//!
//! The boundary control works in screen pixels and the ruler works in
//! inches. Keeping them as distinct types means a pixel height can never be
//! handed to something expecting an inch margin without going through
//! [`Inches::to_pixels`] or [`Pixels::to_inches`].

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Assumed display density. Not queried from the device.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// A length in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pixels(pub f64);

/// A length in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl Pixels {
    pub const ZERO: Pixels = Pixels(0.0);

    pub fn get(self) -> f64 {
        self.0
    }

    /// Convert to inches at the given zoom.
    pub fn to_inches(self, zoom: Zoom) -> Inches {
        Inches(self.0 / (PIXELS_PER_INCH * zoom.get()))
    }
}

impl Inches {
    pub const ZERO: Inches = Inches(0.0);

    pub fn get(self) -> f64 {
        self.0
    }

    /// Convert to pixels at the given zoom.
    pub fn to_pixels(self, zoom: Zoom) -> Pixels {
        Pixels(self.0 * PIXELS_PER_INCH * zoom.get())
    }
}

macro_rules! impl_length_ops {
    ($ty:ident, $suffix:literal) => {
        impl Add for $ty {
            type Output = $ty;
            fn add(self, rhs: $ty) -> $ty {
                $ty(self.0 + rhs.0)
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            fn sub(self, rhs: $ty) -> $ty {
                $ty(self.0 - rhs.0)
            }
        }

        impl From<f64> for $ty {
            fn from(value: f64) -> Self {
                $ty(value)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    };
}

impl_length_ops!(Pixels, "px");
impl_length_ops!(Inches, "in");

/// Display zoom factor. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Zoom(f64);

impl Zoom {
    pub const ACTUAL_SIZE: Zoom = Zoom(1.0);

    pub fn new(factor: f64) -> Result<Self, LayoutError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Zoom(factor))
        } else {
            Err(LayoutError::InvalidZoom(factor))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Pixels covered by one inch at this zoom.
    pub fn pixels_per_inch(self) -> f64 {
        PIXELS_PER_INCH * self.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom::ACTUAL_SIZE
    }
}

impl TryFrom<f64> for Zoom {
    type Error = LayoutError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Zoom::new(value)
    }
}

impl From<Zoom> for f64 {
    fn from(zoom: Zoom) -> f64 {
        zoom.0
    }
}
