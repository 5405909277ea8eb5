//! DOM binding for a page ruler.
//!
//! Expects a ruler track element and two marker elements. Markers are
//! positioned with an inline percent offset (`left` for a horizontal ruler,
//! `top` for a vertical one). Ticks are rendered into a container the
//! binding creates inside the track.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_editor_core::{
    Inches, MarginChange, MarginSide, Pixels, RulerConfig, RulerControl, RulerOrientation, Tick,
    TickKind, Zoom,
};
use gloo_events::{EventListener, EventListenerOptions};
use smol_str::{SmolStr, format_smolstr};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement};

use crate::dom::{
    document, html_element_by_id, js_error, pointer_sample, set_percent, start_edge, toggle_class,
};
use crate::listeners::DocumentListeners;
use crate::pending::{HostCallback, PendingReports, host_callback};

/// Class set on a marker while it is being dragged.
pub const DRAGGING_CLASS: &str = "dragging";

/// Class of the tick container created inside the track.
pub const TICKS_CLASS: &str = "ruler-ticks";

fn offset_property(orientation: RulerOrientation) -> &'static str {
    match orientation {
        RulerOrientation::Horizontal => "left",
        RulerOrientation::Vertical => "top",
    }
}

/// Length property of a tick across the ruler's thickness.
fn extent_property(orientation: RulerOrientation) -> &'static str {
    match orientation {
        RulerOrientation::Horizontal => "height",
        RulerOrientation::Vertical => "width",
    }
}

fn tick_class(kind: TickKind) -> SmolStr {
    let kind = match kind {
        TickKind::Whole => "whole",
        TickKind::Half => "half",
        TickKind::Quarter => "quarter",
    };
    format_smolstr!("tick tick-{kind}")
}

struct Inner {
    control: RulerControl<PendingReports<MarginChange>>,
    track: HtmlElement,
    leading: HtmlElement,
    trailing: HtmlElement,
    ticks: HtmlElement,
}

impl Inner {
    fn marker(&self, side: MarginSide) -> &HtmlElement {
        match side {
            MarginSide::Leading => &self.leading,
            MarginSide::Trailing => &self.trailing,
        }
    }

    fn render_markers(&self) -> Result<(), JsValue> {
        let property = offset_property(self.control.orientation());
        for side in [MarginSide::Leading, MarginSide::Trailing] {
            let marker = self.marker(side);
            set_percent(marker, property, self.control.display_percent(side))?;
            toggle_class(marker, DRAGGING_CLASS, self.control.is_dragging(side))?;
        }
        Ok(())
    }

    fn render_ticks(&self) -> Result<(), JsValue> {
        let document = document()?;
        let orientation = self.control.orientation();
        self.ticks.set_text_content(None);
        for tick in self.control.ticks() {
            let element = tick_element(&document, tick, orientation)?;
            self.ticks.append_child(&element)?;
        }
        Ok(())
    }

    fn render_or_warn(&self) {
        if let Err(err) = self.render_markers() {
            tracing::warn!(?err, "ruler render failed");
        }
    }
}

fn tick_element(
    document: &web_sys::Document,
    tick: &Tick,
    orientation: RulerOrientation,
) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    element.set_class_name(&tick_class(tick.kind));
    set_percent(&element, offset_property(orientation), tick.offset_percent)?;
    set_percent(
        &element,
        extent_property(orientation),
        tick.kind.height_fraction() * 100.0,
    )?;
    if let Some(label) = tick.label {
        let span = document.create_element("span")?;
        span.set_class_name("tick-label");
        span.set_text_content(Some(&label.to_string()));
        element.append_child(&span)?;
    }
    Ok(element)
}

/// A ruler with two margin markers bound to DOM elements.
pub struct BrowserRuler {
    inner: Rc<RefCell<Inner>>,
    reports: PendingReports<MarginChange>,
    callback: HostCallback<MarginChange>,
    _mousedown: [EventListener; 2],
}

impl BrowserRuler {
    /// Bind to the track and marker elements with the given ids.
    pub fn attach(
        track_id: &str,
        leading_id: &str,
        trailing_id: &str,
        config: &RulerConfig,
        on_margin_change: impl FnMut(MarginChange) + 'static,
    ) -> Result<Self, JsValue> {
        let track = html_element_by_id(track_id)?;
        let leading = html_element_by_id(leading_id)?;
        let trailing = html_element_by_id(trailing_id)?;
        Self::new(track, leading, trailing, config, on_margin_change)
    }

    pub fn new(
        track: HtmlElement,
        leading: HtmlElement,
        trailing: HtmlElement,
        config: &RulerConfig,
        on_margin_change: impl FnMut(MarginChange) + 'static,
    ) -> Result<Self, JsValue> {
        let reports = PendingReports::default();
        let callback = host_callback(on_margin_change);
        let control = RulerControl::new(config, reports.clone()).map_err(js_error)?;

        let ticks = document()?.create_element("div")?.dyn_into::<HtmlElement>()?;
        ticks.set_class_name(TICKS_CLASS);
        track.append_child(&ticks)?;

        let inner = Rc::new(RefCell::new(Inner {
            control,
            track,
            leading: leading.clone(),
            trailing: trailing.clone(),
            ticks,
        }));
        {
            let inner = inner.borrow();
            inner.render_ticks()?;
            inner.render_markers()?;
        }

        let mousedown = [
            (MarginSide::Leading, leading),
            (MarginSide::Trailing, trailing),
        ]
        .map(|(side, marker)| {
            let weak = Rc::downgrade(&inner);
            let reports = reports.clone();
            let callback = callback.clone();
            EventListener::new_with_options(
                &marker,
                "mousedown",
                EventListenerOptions::enable_prevent_default(),
                move |event| begin_drag(&weak, side, event, &reports, &callback),
            )
        });

        Ok(Self {
            inner,
            reports,
            callback,
            _mousedown: mousedown,
        })
    }

    pub fn orientation(&self) -> RulerOrientation {
        self.inner.borrow().control.orientation()
    }

    pub fn margin(&self, side: MarginSide) -> Inches {
        self.inner.borrow().control.margin(side)
    }

    pub fn is_dragging(&self, side: MarginSide) -> bool {
        self.inner.borrow().control.is_dragging(side)
    }

    /// Document-level listeners currently registered by either marker.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().control.listener_count()
    }

    pub fn tick_count(&self) -> usize {
        self.inner.borrow().control.ticks().len()
    }

    /// Axis position under a viewport coordinate, for click-to-place.
    pub fn inches_at_client(&self, client: f64) -> Option<Inches> {
        let inner = self.inner.borrow();
        let axis = inner.control.orientation().axis();
        let origin = start_edge(&inner.track, axis)?;
        Some(inner.control.inches_at(Pixels(client) - origin))
    }

    /// Host-driven margin update. Not reported back.
    pub fn set_margin(&self, side: MarginSide, value: Inches) -> Inches {
        let mut inner = self.inner.borrow_mut();
        let value = inner.control.set_margin(side, value);
        inner.render_or_warn();
        value
    }

    /// Resize the axis. Margins pushed out of range are clamped and reported.
    pub fn set_axis_length(&self, axis_length: Inches) -> Result<(), JsValue> {
        {
            let mut inner = self.inner.borrow_mut();
            inner.control.set_axis_length(axis_length).map_err(js_error)?;
            inner.render_ticks()?;
            inner.render_markers()?;
        }
        self.reports.flush(&self.callback);
        Ok(())
    }

    pub fn set_zoom(&self, zoom: Zoom) -> Result<(), JsValue> {
        let mut inner = self.inner.borrow_mut();
        inner.control.set_zoom(zoom);
        inner.render_ticks()
    }
}

fn begin_drag(
    inner: &Weak<RefCell<Inner>>,
    side: MarginSide,
    event: &Event,
    reports: &PendingReports<MarginChange>,
    callback: &HostCallback<MarginChange>,
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
                let axis = inner.control.orientation().axis();
                let origin = start_edge(&inner.track, axis);
                if inner.control.on_pointer_move(side, pointer, origin).is_none() {
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
            inner.control.end_drag(side);
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
    let scope = listeners.into_scope(inner.control.listener_registry(side));
    inner.control.begin_drag(side, pointer, scope);
    inner.render_or_warn();
}
