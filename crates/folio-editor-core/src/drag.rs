//! Pointer drag state machine.
//!
//! A [`DragTracker`] is either idle or holds one [`DragSession`]. The session
//! owns the [`ListenerScope`] for its document-level listeners, so ending the
//! session (or dropping the tracker) releases them.
//!
//! ```text
//! Idle --begin--> Active --move--> Active (report clamped value)
//!   ^                |
//!   +------end-------+
//! ```

use crate::axis::{Axis, ConstrainedAxis, PointerSample};
use crate::listener::{ListenerRegistry, ListenerScope};

/// Receives every accepted position while a drag is in progress.
///
/// Implemented for any `FnMut(V)`, so a closure works as a sink.
pub trait PositionSink<V> {
    fn position_changed(&mut self, value: V);
}

impl<V, F: FnMut(V)> PositionSink<V> for F {
    fn position_changed(&mut self, value: V) {
        self(value)
    }
}

/// A sink that drops every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl<V> PositionSink<V> for NoopSink {
    fn position_changed(&mut self, _value: V) {}
}

/// Ephemeral state for one press-move-release gesture.
#[derive(Debug)]
pub struct DragSession {
    pub axis: Axis,
    /// Pointer coordinate along `axis` at pointer-down.
    pub start_pointer: f64,
    /// Handle position at pointer-down.
    pub start_position: f64,
    /// Number of move events accepted so far.
    pub moves: usize,
    _listeners: ListenerScope,
}

/// Per-handle drag state machine.
#[derive(Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
    registry: ListenerRegistry,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that scopes for this tracker's listeners must come from.
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Live document-level listeners held by this tracker.
    pub fn listener_count(&self) -> usize {
        self.registry.live()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a session.
    ///
    /// If a session is already active (a missed pointer-up) it is replaced,
    /// and its listeners are released before the new ones take over.
    pub fn begin(
        &mut self,
        axis: Axis,
        pointer: PointerSample,
        position: f64,
        listeners: ListenerScope,
    ) {
        debug_assert!(
            listeners.belongs_to(&self.registry),
            "listener scope must come from this tracker's registry"
        );
        if self.session.take().is_some() {
            tracing::debug!("replacing stale drag session");
        }
        let start_pointer = pointer.along(axis);
        tracing::debug!(?axis, start_pointer, position, "drag begin");
        self.session = Some(DragSession {
            axis,
            start_pointer,
            start_position: position,
            moves: 0,
            _listeners: listeners,
        });
    }

    /// Compute the next position for a move event.
    ///
    /// Returns `None` when no session is active or when `reference` is
    /// missing (the handle is no longer mounted), in which case the frame is
    /// skipped.
    pub fn on_move(
        &mut self,
        constraint: &ConstrainedAxis,
        previous: f64,
        pointer: PointerSample,
        reference: Option<f64>,
    ) -> Option<f64> {
        let session = self.session.as_mut()?;
        let Some(reference) = reference else {
            tracing::trace!("handle geometry unavailable, skipping move");
            return None;
        };
        let next = constraint.step(previous, pointer, reference);
        session.moves += 1;
        tracing::trace!(previous, next, moves = session.moves, "drag move");
        Some(next)
    }

    /// End the session. Returns whether one was active.
    ///
    /// Safe to call repeatedly.
    pub fn end(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(moves = session.moves, "drag end");
                true
            }
            None => false,
        }
    }
}
