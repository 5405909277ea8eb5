//! DOM binding for a header or footer boundary.
//!
//! The boundary is two elements: the strip whose inline `height` is the
//! header/footer height, and the handle the user drags. The handle's top
//! edge is re-measured on every move, so CSS may place it anywhere as long
//! as it follows the strip.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_editor_core::{
    Axis, BoundaryConfig, BoundaryControl, BoundaryEdge, BoundaryVisual, Pixels, SyncOutcome,
};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement};

use crate::dom::{html_element_by_id, js_error, pointer_sample, set_px, start_edge, toggle_class};
use crate::listeners::DocumentListeners;
use crate::pending::{HostCallback, PendingReports, host_callback};

struct Inner {
    control: BoundaryControl<PendingReports<Pixels>>,
    strip: HtmlElement,
    handle: HtmlElement,
}

impl Inner {
    fn render(&self) -> Result<(), JsValue> {
        set_px(&self.strip, "height", self.control.position())?;
        let visual = self.control.visual();
        for state in [BoundaryVisual::Idle, BoundaryVisual::Dragging] {
            toggle_class(&self.handle, state.class_name(), state == visual)?;
        }
        Ok(())
    }

    fn render_or_warn(&self) {
        if let Err(err) = self.render() {
            tracing::warn!(?err, edge = self.control.edge().as_str(), "boundary render failed");
        }
    }
}

/// A header or footer boundary bound to DOM elements.
///
/// Dropping it removes the handle listener and, if a drag is in progress,
/// the document listeners too.
pub struct BrowserBoundary {
    inner: Rc<RefCell<Inner>>,
    _mousedown: EventListener,
}

impl BrowserBoundary {
    /// Bind to the strip and handle with the given element ids.
    pub fn attach(
        strip_id: &str,
        handle_id: &str,
        config: &BoundaryConfig,
        on_position_change: impl FnMut(Pixels) + 'static,
    ) -> Result<Self, JsValue> {
        let strip = html_element_by_id(strip_id)?;
        let handle = html_element_by_id(handle_id)?;
        Self::new(strip, handle, config, on_position_change)
    }

    pub fn new(
        strip: HtmlElement,
        handle: HtmlElement,
        config: &BoundaryConfig,
        on_position_change: impl FnMut(Pixels) + 'static,
    ) -> Result<Self, JsValue> {
        let reports = PendingReports::default();
        let callback = host_callback(on_position_change);
        let control = BoundaryControl::new(config, reports.clone()).map_err(js_error)?;
        let inner = Rc::new(RefCell::new(Inner {
            control,
            strip,
            handle: handle.clone(),
        }));
        inner.borrow().render()?;

        let weak = Rc::downgrade(&inner);
        let mousedown = EventListener::new_with_options(
            &handle,
            "mousedown",
            EventListenerOptions::enable_prevent_default(),
            move |event| begin_drag(&weak, event, &reports, &callback),
        );

        Ok(Self {
            inner,
            _mousedown: mousedown,
        })
    }

    pub fn edge(&self) -> BoundaryEdge {
        self.inner.borrow().control.edge()
    }

    pub fn position(&self) -> Pixels {
        self.inner.borrow().control.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().control.is_dragging()
    }

    /// Document-level listeners currently registered by this boundary.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().control.listener_count()
    }

    /// Push a new initial position from the host.
    ///
    /// Does not invoke the position callback.
    pub fn set_initial_position(&self, initial: Pixels) -> SyncOutcome {
        let mut inner = self.inner.borrow_mut();
        let outcome = inner.control.sync_initial_position(initial);
        inner.render_or_warn();
        outcome
    }
}

fn begin_drag(
    inner: &Weak<RefCell<Inner>>,
    event: &Event,
    reports: &PendingReports<Pixels>,
    callback: &HostCallback<Pixels>,
) {
    let Some(pointer) = pointer_sample(event) else {
        return;
    };
    event.prevent_default();

    let move_inner = inner.clone();
    let move_reports = reports.clone();
    let move_callback = callback.clone();
    let up_inner = inner.clone();
    let listeners = DocumentListeners::attach(
        move |event| {
            let Some(inner) = move_inner.upgrade() else {
                return;
            };
            let Some(pointer) = pointer_sample(event) else {
                return;
            };
            {
                let mut inner = inner.borrow_mut();
                let edge = start_edge(&inner.handle, Axis::Y);
                if inner.control.on_pointer_move(pointer, edge).is_none() {
                    return;
                }
                inner.render_or_warn();
            }
            move_reports.flush(&move_callback);
        },
        move |_| {
            let Some(inner) = up_inner.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            inner.control.end_drag();
            inner.render_or_warn();
        },
    );
    let listeners = match listeners {
        Ok(listeners) => listeners,
        Err(err) => {
            tracing::warn!(?err, "could not attach drag listeners");
            return;
        }
    };

    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    let scope = listeners.into_scope(inner.control.listener_registry());
    inner.control.begin_drag(pointer, scope);
    inner.render_or_warn();
}
