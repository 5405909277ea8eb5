//! Page ruler with two draggable margin markers.
//!
//! Both markers sit on the same axis. The leading marker is measured from
//! the start of the axis; the trailing marker stores an inset from the far
//! end and is drawn at `axis_length - trailing`. Each is clamped to half the
//! axis on its own. Nothing stops the two from meeting in the middle.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, Bounds, ConstrainedAxis, Direction, PointerSample};
use crate::drag::{DragTracker, PositionSink};
use crate::error::{LayoutError, ensure_non_negative};
use crate::listener::{ListenerRegistry, ListenerScope};
use crate::ticks::{MAX_AXIS_LENGTH, Tick, generate_ticks};
use crate::units::{Inches, Pixels, Zoom};

pub const DEFAULT_MARGIN: Inches = Inches(1.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulerOrientation {
    /// Left and right margins along the page width.
    #[default]
    Horizontal,
    /// Top and bottom margins along the page height.
    Vertical,
}

impl RulerOrientation {
    pub fn axis(self) -> Axis {
        match self {
            RulerOrientation::Horizontal => Axis::X,
            RulerOrientation::Vertical => Axis::Y,
        }
    }

    /// Human name of a margin on this ruler.
    pub fn side_name(self, side: MarginSide) -> &'static str {
        match (self, side) {
            (RulerOrientation::Horizontal, MarginSide::Leading) => "left",
            (RulerOrientation::Horizontal, MarginSide::Trailing) => "right",
            (RulerOrientation::Vertical, MarginSide::Leading) => "top",
            (RulerOrientation::Vertical, MarginSide::Trailing) => "bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginSide {
    Leading,
    Trailing,
}

impl MarginSide {
    fn direction(self) -> Direction {
        match self {
            MarginSide::Leading => Direction::Forward,
            MarginSide::Trailing => Direction::Inverted,
        }
    }
}

/// One margin report from the ruler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginChange {
    pub orientation: RulerOrientation,
    pub side: MarginSide,
    pub value: Inches,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub orientation: RulerOrientation,
    pub axis_length: Inches,
    pub zoom: Zoom,
    pub leading_margin: Inches,
    pub trailing_margin: Inches,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            orientation: RulerOrientation::Horizontal,
            axis_length: Inches(8.5),
            zoom: Zoom::ACTUAL_SIZE,
            leading_margin: DEFAULT_MARGIN,
            trailing_margin: DEFAULT_MARGIN,
        }
    }
}

impl RulerConfig {
    pub fn horizontal(axis_length: Inches) -> Self {
        Self {
            orientation: RulerOrientation::Horizontal,
            axis_length,
            ..Self::default()
        }
    }

    pub fn vertical(axis_length: Inches) -> Self {
        Self {
            orientation: RulerOrientation::Vertical,
            axis_length,
            ..Self::default()
        }
    }

    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_margins(mut self, leading: Inches, trailing: Inches) -> Self {
        self.leading_margin = leading;
        self.trailing_margin = trailing;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        margin_bounds(self.axis_length)?;
        ensure_non_negative("leading_margin", self.leading_margin.0)?;
        ensure_non_negative("trailing_margin", self.trailing_margin.0)?;
        Ok(())
    }
}

fn margin_bounds(axis_length: Inches) -> Result<Bounds, LayoutError> {
    let length = axis_length.get();
    if !length.is_finite() || length <= 0.0 || length > MAX_AXIS_LENGTH.get() {
        return Err(LayoutError::InvalidAxisLength(length));
    }
    Bounds::new(0.0, length / 2.0)
}

#[derive(Debug)]
struct MarginMarker {
    value: Inches,
    tracker: DragTracker,
}

impl MarginMarker {
    fn new(value: Inches) -> Self {
        Self {
            value,
            tracker: DragTracker::new(),
        }
    }
}

/// Ruler with leading and trailing margin markers.
pub struct RulerControl<S> {
    orientation: RulerOrientation,
    axis_length: Inches,
    zoom: Zoom,
    bounds: Bounds,
    leading: MarginMarker,
    trailing: MarginMarker,
    ticks: Vec<Tick>,
    sink: S,
}

impl<S: PositionSink<MarginChange>> RulerControl<S> {
    pub fn new(config: &RulerConfig, sink: S) -> Result<Self, LayoutError> {
        config.validate()?;
        let bounds = margin_bounds(config.axis_length)?;
        Ok(Self {
            orientation: config.orientation,
            axis_length: config.axis_length,
            zoom: config.zoom,
            bounds,
            leading: MarginMarker::new(Inches(bounds.clamp(config.leading_margin.0))),
            trailing: MarginMarker::new(Inches(bounds.clamp(config.trailing_margin.0))),
            ticks: generate_ticks(config.axis_length, config.zoom),
            sink,
        })
    }

    pub fn orientation(&self) -> RulerOrientation {
        self.orientation
    }

    pub fn axis_length(&self) -> Inches {
        self.axis_length
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Bounds shared by both markers: `[0, axis_length / 2]`.
    pub fn margin_bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn margin(&self, side: MarginSide) -> Inches {
        self.marker(side).value
    }

    pub fn leading(&self) -> Inches {
        self.leading.value
    }

    pub fn trailing(&self) -> Inches {
        self.trailing.value
    }

    /// Usable length between the markers, floored at zero.
    pub fn content_length(&self) -> Inches {
        Inches((self.axis_length.0 - self.leading.value.0 - self.trailing.value.0).max(0.0))
    }

    /// Marker position measured from the start of the axis.
    pub fn display_offset(&self, side: MarginSide) -> Inches {
        match side {
            MarginSide::Leading => self.leading.value,
            MarginSide::Trailing => self.axis_length - self.trailing.value,
        }
    }

    pub fn display_percent(&self, side: MarginSide) -> f64 {
        self.display_offset(side).get() / self.axis_length.get() * 100.0
    }

    /// Viewport coordinate of a marker given the ruler's start edge.
    pub fn marker_screen_edge(&self, side: MarginSide, ruler_origin: Pixels) -> Pixels {
        ruler_origin + self.display_offset(side).to_pixels(self.zoom)
    }

    /// Map a pointer offset from the ruler's start edge to an axis position.
    pub fn inches_at(&self, relative_offset: Pixels) -> Inches {
        let inches = relative_offset.to_inches(self.zoom).get();
        if inches.is_nan() {
            return Inches::ZERO;
        }
        Inches(inches.clamp(0.0, self.axis_length.get()))
    }

    pub fn is_dragging(&self, side: MarginSide) -> bool {
        self.marker(side).tracker.is_active()
    }

    pub fn is_any_dragging(&self) -> bool {
        self.leading.tracker.is_active() || self.trailing.tracker.is_active()
    }

    pub fn listener_registry(&self, side: MarginSide) -> &ListenerRegistry {
        self.marker(side).tracker.registry()
    }

    /// Document-level listeners held by both markers.
    pub fn listener_count(&self) -> usize {
        self.leading.tracker.listener_count() + self.trailing.tracker.listener_count()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Pointer-down on a marker.
    pub fn begin_drag(&mut self, side: MarginSide, pointer: PointerSample, listeners: ListenerScope) {
        let axis = self.orientation.axis();
        tracing::debug!(
            margin = self.orientation.side_name(side),
            value = %self.margin(side),
            "margin drag"
        );
        let marker = self.marker_mut(side);
        let value = marker.value.get();
        marker.tracker.begin(axis, pointer, value, listeners);
    }

    /// Document-level pointer-move for one marker.
    ///
    /// `ruler_origin` is the ruler's start edge in viewport pixels, or `None`
    /// if the ruler element could not be measured.
    pub fn on_pointer_move(
        &mut self,
        side: MarginSide,
        pointer: PointerSample,
        ruler_origin: Option<Pixels>,
    ) -> Option<Inches> {
        let constraint = self.constraint(side);
        let reference = ruler_origin.map(|origin| self.marker_screen_edge(side, origin).get());
        let marker = self.marker_mut(side);
        let next = marker
            .tracker
            .on_move(&constraint, marker.value.get(), pointer, reference)?;
        marker.value = Inches(next);
        self.report(side);
        Some(Inches(next))
    }

    /// Document-level pointer-up for one marker.
    pub fn end_drag(&mut self, side: MarginSide) -> bool {
        self.marker_mut(side).tracker.end()
    }

    /// Host-driven margin update. Clamped, not reported back.
    pub fn set_margin(&mut self, side: MarginSide, value: Inches) -> Inches {
        let clamped = Inches(self.bounds.clamp(value.get()));
        self.marker_mut(side).value = clamped;
        clamped
    }

    /// Change the axis length and regenerate ticks.
    ///
    /// Margins that no longer fit in half the new axis are clamped and
    /// reported, since the host's copy is now out of range.
    pub fn set_axis_length(&mut self, axis_length: Inches) -> Result<(), LayoutError> {
        let bounds = margin_bounds(axis_length)?;
        self.axis_length = axis_length;
        self.bounds = bounds;
        self.ticks = generate_ticks(axis_length, self.zoom);
        tracing::debug!(%axis_length, ticks = self.ticks.len(), "ruler resized");

        for side in [MarginSide::Leading, MarginSide::Trailing] {
            let marker = self.marker_mut(side);
            let clamped = Inches(bounds.clamp(marker.value.get()));
            if clamped != marker.value {
                marker.value = clamped;
                self.report(side);
            }
        }
        Ok(())
    }

    /// Change the zoom and regenerate ticks.
    pub fn set_zoom(&mut self, zoom: Zoom) {
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        self.ticks = generate_ticks(self.axis_length, zoom);
    }

    fn constraint(&self, side: MarginSide) -> ConstrainedAxis {
        ConstrainedAxis::new(self.orientation.axis(), self.bounds, side.direction())
            .with_scale(1.0 / self.zoom.pixels_per_inch())
    }

    fn report(&mut self, side: MarginSide) {
        let change = MarginChange {
            orientation: self.orientation,
            side,
            value: self.marker(side).value,
        };
        self.sink.position_changed(change);
    }

    fn marker(&self, side: MarginSide) -> &MarginMarker {
        match side {
            MarginSide::Leading => &self.leading,
            MarginSide::Trailing => &self.trailing,
        }
    }

    fn marker_mut(&mut self, side: MarginSide) -> &mut MarginMarker {
        match side {
            MarginSide::Leading => &mut self.leading,
            MarginSide::Trailing => &mut self.trailing,
        }
    }
}

impl<S> std::fmt::Debug for RulerControl<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulerControl")
            .field("orientation", &self.orientation)
            .field("axis_length", &self.axis_length)
            .field("zoom", &self.zoom)
            .field("leading", &self.leading)
            .field("trailing", &self.trailing)
            .finish_non_exhaustive()
    }
}
