//! Ruler tick generation.
//!
//! One tick per quarter inch from 0 up to the axis length. Whole inches get
//! a full-height tick and a numeric label, half inches a medium tick, and
//! the remaining quarters a short one.

use crate::units::{Inches, Pixels, Zoom};

/// Ticks per inch.
pub const TICKS_PER_INCH: usize = 4;

/// Longest axis a ruler accepts. Well past any paper size, and keeps the
/// tick list small enough to allocate.
pub const MAX_AXIS_LENGTH: Inches = Inches(1000.0);

/// Tolerance for float lengths like `8.5 * 4` landing a hair under a whole
/// tick count.
const TICK_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickKind {
    Whole,
    Half,
    Quarter,
}

impl TickKind {
    fn for_index(index: usize) -> Self {
        match index % TICKS_PER_INCH {
            0 => TickKind::Whole,
            2 => TickKind::Half,
            _ => TickKind::Quarter,
        }
    }

    /// Tick height as a fraction of the ruler thickness.
    pub fn height_fraction(self) -> f64 {
        match self {
            TickKind::Whole => 1.0,
            TickKind::Half => 0.6,
            TickKind::Quarter => 0.35,
        }
    }

    /// Stroke weight in pixels.
    pub fn weight(self) -> f64 {
        match self {
            TickKind::Whole => 1.5,
            TickKind::Half => 1.0,
            TickKind::Quarter => 0.75,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Quarter-inch index from the start of the axis.
    pub index: usize,
    pub position: Inches,
    pub kind: TickKind,
    /// Set only for whole-inch ticks.
    pub label: Option<u32>,
    /// Offset along the ruler as a percentage of the axis length.
    pub offset_percent: f64,
    /// Offset along the ruler at the zoom the ticks were generated for.
    pub offset_px: Pixels,
}

/// Generate the ticks for an axis of `axis_length`.
///
/// A non-positive, non-finite, or longer than [`MAX_AXIS_LENGTH`] length
/// yields no ticks.
pub fn generate_ticks(axis_length: Inches, zoom: Zoom) -> Vec<Tick> {
    let length = axis_length.get();
    if !length.is_finite() || length <= 0.0 || length > MAX_AXIS_LENGTH.get() {
        return Vec::new();
    }

    let last = (length * TICKS_PER_INCH as f64 + TICK_EPSILON).floor() as usize;
    (0..=last)
        .map(|index| {
            let position = Inches(index as f64 / TICKS_PER_INCH as f64);
            let kind = TickKind::for_index(index);
            let label = match kind {
                TickKind::Whole => Some((index / TICKS_PER_INCH) as u32),
                _ => None,
            };
            Tick {
                index,
                position,
                kind,
                label,
                offset_percent: position.get() / length * 100.0,
                offset_px: position.to_pixels(zoom),
            }
        })
        .collect()
}

/// Only the labelled (whole-inch) ticks.
pub fn labels(ticks: &[Tick]) -> impl Iterator<Item = (u32, &Tick)> {
    ticks.iter().filter_map(|t| t.label.map(|l| (l, t)))
}
