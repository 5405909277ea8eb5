//! Draggable header/footer boundary.
//!
//! A horizontal strip whose vertical position sets the header or footer
//! height in pixels. The header grows as the pointer moves down. The footer
//! is measured from the bottom of the page, so it grows as the pointer moves
//! up.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, Bounds, ConstrainedAxis, Direction, PointerSample};
use crate::drag::{DragTracker, PositionSink};
use crate::error::{LayoutError, ensure_non_negative};
use crate::listener::{ListenerRegistry, ListenerScope};
use crate::units::Pixels;

pub const DEFAULT_MIN_HEIGHT: Pixels = Pixels(30.0);
pub const DEFAULT_MAX_HEIGHT: Pixels = Pixels(150.0);

/// Which page edge the boundary belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryEdge {
    #[default]
    Header,
    Footer,
}

impl BoundaryEdge {
    pub fn direction(self) -> Direction {
        match self {
            BoundaryEdge::Header => Direction::Forward,
            BoundaryEdge::Footer => Direction::Inverted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryEdge::Header => "header",
            BoundaryEdge::Footer => "footer",
        }
    }
}

/// How an external position reset interacts with an active drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Apply the reset immediately, even mid-drag. The next move continues
    /// from the reset value.
    #[default]
    AlwaysOverride,
    /// Hold the reset until the active session ends, then apply it.
    DeferWhileDragging,
}

/// Outcome of [`BoundaryControl::sync_initial_position`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// The position was replaced with the (clamped) value.
    Applied(Pixels),
    /// Same value as the last sync; nothing happened.
    Unchanged,
    /// A drag is active and the policy defers resets.
    Deferred,
}

/// Idle or dragging, for styling the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryVisual {
    #[default]
    Idle,
    Dragging,
}

impl BoundaryVisual {
    /// CSS class for the strip.
    pub fn class_name(self) -> &'static str {
        match self {
            BoundaryVisual::Idle => "boundary-idle",
            BoundaryVisual::Dragging => "boundary-dragging",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub edge: BoundaryEdge,
    pub initial_position: Pixels,
    pub min_height: Pixels,
    pub max_height: Pixels,
    pub reset_policy: ResetPolicy,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            edge: BoundaryEdge::Header,
            initial_position: Pixels(60.0),
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            reset_policy: ResetPolicy::AlwaysOverride,
        }
    }
}

impl BoundaryConfig {
    pub fn header(initial_position: Pixels) -> Self {
        Self {
            edge: BoundaryEdge::Header,
            initial_position,
            ..Self::default()
        }
    }

    pub fn footer(initial_position: Pixels) -> Self {
        Self {
            edge: BoundaryEdge::Footer,
            initial_position,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, min_height: Pixels, max_height: Pixels) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Check the range. `initial_position` is not checked: like a host
    /// sync, it is clamped into the range when the control is built.
    pub fn validate(&self) -> Result<Bounds, LayoutError> {
        let min = ensure_non_negative("min_height", self.min_height.0)?;
        let max = ensure_non_negative("max_height", self.max_height.0)?;
        Bounds::new(min, max)
    }
}

/// Header or footer height boundary.
pub struct BoundaryControl<S> {
    edge: BoundaryEdge,
    constraint: ConstrainedAxis,
    position: Pixels,
    last_initial: Pixels,
    pending_reset: Option<Pixels>,
    policy: ResetPolicy,
    tracker: DragTracker,
    sink: S,
}

impl<S: PositionSink<Pixels>> BoundaryControl<S> {
    /// Build a boundary. `sink` receives every position reported during a
    /// drag.
    pub fn new(config: &BoundaryConfig, sink: S) -> Result<Self, LayoutError> {
        let bounds = config.validate()?;
        let constraint = ConstrainedAxis::new(Axis::Y, bounds, config.edge.direction());
        let position = Pixels(constraint.clamp(config.initial_position.0));
        Ok(Self {
            edge: config.edge,
            constraint,
            position,
            last_initial: config.initial_position,
            pending_reset: None,
            policy: config.reset_policy,
            tracker: DragTracker::new(),
            sink,
        })
    }

    pub fn edge(&self) -> BoundaryEdge {
        self.edge
    }

    pub fn position(&self) -> Pixels {
        self.position
    }

    pub fn bounds(&self) -> Bounds {
        self.constraint.bounds
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.policy
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn visual(&self) -> BoundaryVisual {
        if self.is_dragging() {
            BoundaryVisual::Dragging
        } else {
            BoundaryVisual::Idle
        }
    }

    /// Registry for the listener scope handed to [`Self::begin_drag`].
    pub fn listener_registry(&self) -> &ListenerRegistry {
        self.tracker.registry()
    }

    pub fn listener_count(&self) -> usize {
        self.tracker.listener_count()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Pointer-down on the strip.
    pub fn begin_drag(&mut self, pointer: PointerSample, listeners: ListenerScope) {
        tracing::debug!(edge = self.edge.as_str(), position = %self.position, "boundary drag");
        self.tracker.begin(Axis::Y, pointer, self.position.0, listeners);
    }

    /// Document-level pointer-move.
    ///
    /// `handle_edge` is the strip's current top edge in viewport pixels, or
    /// `None` if it could not be read. Returns the reported position.
    pub fn on_pointer_move(
        &mut self,
        pointer: PointerSample,
        handle_edge: Option<Pixels>,
    ) -> Option<Pixels> {
        let next = self.tracker.on_move(
            &self.constraint,
            self.position.0,
            pointer,
            handle_edge.map(Pixels::get),
        )?;
        self.position = Pixels(next);
        self.sink.position_changed(self.position);
        Some(self.position)
    }

    /// Document-level pointer-up. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let ended = self.tracker.end();
        if ended && let Some(pending) = self.pending_reset.take() {
            self.apply_reset(pending);
        }
        ended
    }

    /// React to the host changing the initial position.
    ///
    /// Does not call the sink: the host already knows the value it set.
    pub fn sync_initial_position(&mut self, initial: Pixels) -> SyncOutcome {
        if initial == self.last_initial {
            return SyncOutcome::Unchanged;
        }
        self.last_initial = initial;

        if self.is_dragging() && self.policy == ResetPolicy::DeferWhileDragging {
            tracing::debug!(edge = self.edge.as_str(), %initial, "deferring reset");
            self.pending_reset = Some(initial);
            return SyncOutcome::Deferred;
        }
        SyncOutcome::Applied(self.apply_reset(initial))
    }

    fn apply_reset(&mut self, initial: Pixels) -> Pixels {
        self.position = Pixels(self.constraint.clamp(initial.0));
        tracing::debug!(edge = self.edge.as_str(), position = %self.position, "position reset");
        self.position
    }
}

impl<S> std::fmt::Debug for BoundaryControl<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryControl")
            .field("edge", &self.edge)
            .field("position", &self.position)
            .field("bounds", &self.constraint.bounds)
            .field("dragging", &self.tracker.is_active())
            .finish()
    }
}
