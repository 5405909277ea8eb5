//! Page geometry and a reference host for the layout controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryEdge;
use crate::error::{LayoutError, ensure_non_negative};
use crate::ruler::{DEFAULT_MARGIN, MarginChange, MarginSide, RulerConfig, RulerOrientation};
use crate::units::{Inches, Pixels, Zoom};

/// Named paper sizes, portrait dimensions in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    Legal,
    A4,
    A5,
}

impl PageSize {
    pub fn dimensions(self) -> (Inches, Inches) {
        match self {
            PageSize::Letter => (Inches(8.5), Inches(11.0)),
            PageSize::Legal => (Inches(8.5), Inches(14.0)),
            PageSize::A4 => (Inches(8.27), Inches(11.69)),
            PageSize::A5 => (Inches(5.83), Inches(8.27)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
        }
    }
}

impl FromStr for PageSize {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            _ => Err(LayoutError::UnknownPageSize(s.to_string())),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMargins {
    pub top: Inches,
    pub bottom: Inches,
    pub left: Inches,
    pub right: Inches,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN)
    }
}

impl PageMargins {
    pub fn uniform(margin: Inches) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        ensure_non_negative("margins.top", self.top.0)?;
        ensure_non_negative("margins.bottom", self.bottom.0)?;
        ensure_non_negative("margins.left", self.left.0)?;
        ensure_non_negative("margins.right", self.right.0)?;
        Ok(())
    }

    /// The (leading, trailing) pair a ruler of `orientation` edits.
    pub fn pair(&self, orientation: RulerOrientation) -> (Inches, Inches) {
        match orientation {
            RulerOrientation::Horizontal => (self.left, self.right),
            RulerOrientation::Vertical => (self.top, self.bottom),
        }
    }

    fn slot_mut(&mut self, orientation: RulerOrientation, side: MarginSide) -> &mut Inches {
        match (orientation, side) {
            (RulerOrientation::Horizontal, MarginSide::Leading) => &mut self.left,
            (RulerOrientation::Horizontal, MarginSide::Trailing) => &mut self.right,
            (RulerOrientation::Vertical, MarginSide::Leading) => &mut self.top,
            (RulerOrientation::Vertical, MarginSide::Trailing) => &mut self.bottom,
        }
    }
}

/// Page geometry owned by the document view.
///
/// Applies the reports the controls emit. Content size floors at zero
/// because opposing margins are not validated against each other.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
    pub header_height: Pixels,
    pub footer_height: Pixels,
    pub zoom: Zoom,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(PageSize::Letter, Orientation::Portrait)
    }
}

impl PageLayout {
    pub fn new(size: PageSize, orientation: Orientation) -> Self {
        Self {
            size,
            orientation,
            margins: PageMargins::default(),
            header_height: Pixels(60.0),
            footer_height: Pixels(60.0),
            zoom: Zoom::ACTUAL_SIZE,
        }
    }

    pub fn width(&self) -> Inches {
        let (w, h) = self.size.dimensions();
        match self.orientation {
            Orientation::Portrait => w,
            Orientation::Landscape => h,
        }
    }

    pub fn height(&self) -> Inches {
        let (w, h) = self.size.dimensions();
        match self.orientation {
            Orientation::Portrait => h,
            Orientation::Landscape => w,
        }
    }

    pub fn axis_length(&self, orientation: RulerOrientation) -> Inches {
        match orientation {
            RulerOrientation::Horizontal => self.width(),
            RulerOrientation::Vertical => self.height(),
        }
    }

    pub fn content_width(&self) -> Inches {
        Inches((self.width().0 - self.margins.left.0 - self.margins.right.0).max(0.0))
    }

    pub fn content_height(&self) -> Inches {
        Inches((self.height().0 - self.margins.top.0 - self.margins.bottom.0).max(0.0))
    }

    /// Ruler configuration matching this page along `orientation`.
    pub fn ruler_config(&self, orientation: RulerOrientation) -> RulerConfig {
        let (leading, trailing) = self.margins.pair(orientation);
        RulerConfig {
            orientation,
            axis_length: self.axis_length(orientation),
            zoom: self.zoom,
            leading_margin: leading,
            trailing_margin: trailing,
        }
    }

    pub fn apply_margin(&mut self, change: MarginChange) {
        *self.margins.slot_mut(change.orientation, change.side) = change.value;
    }

    pub fn apply_boundary(&mut self, edge: BoundaryEdge, height: Pixels) {
        match edge {
            BoundaryEdge::Header => self.header_height = height,
            BoundaryEdge::Footer => self.footer_height = height,
        }
    }

    /// Switch paper size or orientation, keeping margins.
    pub fn set_size(&mut self, size: PageSize, orientation: Orientation) {
        self.size = size;
        self.orientation = orientation;
    }
}
