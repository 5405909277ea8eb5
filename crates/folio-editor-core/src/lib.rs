//! folio-editor-core: page-layout interaction logic without DOM dependencies.
//!
//! This crate provides:
//! - `ConstrainedAxis` - pointer delta to clamped position, shared by every handle
//! - `DragTracker` - per-handle press/move/release state machine
//! - `ListenerScope` - scoped ownership of document-level listeners
//! - `BoundaryControl` - header/footer height strip (pixels)
//! - `RulerControl` - margin ruler with tick generation (inches)
//! - `PageLayout` and `LayoutConfig` - page geometry and configuration

pub mod axis;
pub mod boundary;
pub mod config;
pub mod drag;
pub mod error;
pub mod listener;
pub mod page;
pub mod ruler;
pub mod ticks;
pub mod units;

pub use axis::{Axis, Bounds, ConstrainedAxis, Direction, PointerSample};
pub use boundary::{
    BoundaryConfig, BoundaryControl, BoundaryEdge, BoundaryVisual, ResetPolicy, SyncOutcome,
};
pub use config::{BoundaryRange, LayoutConfig, PageConfig};
pub use drag::{DragSession, DragTracker, NoopSink, PositionSink};
pub use error::LayoutError;
pub use listener::{ListenerRegistry, ListenerScope};
pub use page::{Orientation, PageLayout, PageMargins, PageSize};
pub use ruler::{MarginChange, MarginSide, RulerConfig, RulerControl, RulerOrientation};
pub use ticks::{MAX_AXIS_LENGTH, Tick, TickKind, generate_ticks};
pub use units::{Inches, PIXELS_PER_INCH, Pixels, Zoom};
