//! One-dimensional constrained positions.
//!
//! [`ConstrainedAxis`] is the single place where a pointer delta becomes a
//! clamped position. Both the header/footer boundary and the ruler margin
//! markers go through it, differing only in bounds, scale, and whether the
//! value grows toward or away from the pointer.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, ensure_finite};

/// Screen axis a handle moves along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
}

/// A pointer position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Result<Self, LayoutError> {
        let min = ensure_finite("min", min)?;
        let max = ensure_finite("max", max)?;
        if min > max {
            return Err(LayoutError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp `value` into the interval. NaN clamps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Which way a position grows relative to pointer movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Moving the pointer toward +x / +y increases the value.
    #[default]
    Forward,
    /// Moving the pointer toward +x / +y decreases the value. Used for edges
    /// measured from the far side (footer, trailing margin).
    Inverted,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverted => -1.0,
        }
    }
}

/// Pointer-delta to clamped-position mapping shared by every draggable
/// handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstrainedAxis {
    pub axis: Axis,
    pub bounds: Bounds,
    pub direction: Direction,
    /// Position units per screen pixel. `1.0` for pixel positions,
    /// `1 / (96 * zoom)` for inch positions.
    pub scale: f64,
}

impl ConstrainedAxis {
    /// A pixel-unit axis.
    pub fn new(axis: Axis, bounds: Bounds, direction: Direction) -> Self {
        Self {
            axis,
            bounds,
            direction,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Compute the next position.
    ///
    /// `reference` is the handle's live edge in viewport pixels, so the
    /// delta is measured against where the handle is drawn now rather than
    /// where the drag started.
    pub fn step(&self, previous: f64, pointer: PointerSample, reference: f64) -> f64 {
        let delta = (pointer.along(self.axis) - reference) * self.scale * self.direction.sign();
        self.bounds.clamp(previous + delta)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        self.bounds.clamp(value)
    }
}
