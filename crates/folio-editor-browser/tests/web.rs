//! WASM browser tests for folio-editor-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use std::cell::{Cell, OnceCell, RefCell};
use std::rc::Rc;

use folio_editor_browser::{
    BoundaryConfig, BrowserBoundary, BrowserRuler, Inches, MarginChange, MarginSide, Pixels,
    RulerConfig, RulerOrientation, SyncOutcome, Zoom, init_logging,
};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent, MouseEventInit};

thread_local! {
    static NEXT_ID: Cell<usize> = const { Cell::new(0) };
}

fn unique_id(prefix: &str) -> String {
    NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id + 1);
        format!("{prefix}-{id}")
    })
}

fn element(parent: &web_sys::Node, id: &str, style: &str) -> HtmlElement {
    let el = gloo_utils::document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_id(id);
    el.set_attribute("style", style).unwrap();
    parent.append_child(&el).unwrap();
    el
}

fn mouse(target: &EventTarget, kind: &str, x: f64, y: f64) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x as i32);
    init.set_client_y(y as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

fn doc() -> EventTarget {
    gloo_utils::document().into()
}

fn top(el: &HtmlElement) -> f64 {
    el.get_bounding_client_rect().top()
}

fn left(el: &HtmlElement) -> f64 {
    el.get_bounding_client_rect().left()
}

fn style(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

// === Boundary ===

struct Mounted {
    root: HtmlElement,
    strip: HtmlElement,
    handle: HtmlElement,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn mount_header() -> Mounted {
    let body = gloo_utils::body();
    let root = element(
        &body,
        &unique_id("page"),
        "position:absolute;top:0;left:0;width:600px;height:800px",
    );
    let strip = element(
        &root,
        &unique_id("header"),
        "position:absolute;top:0;left:0;width:100%;height:60px",
    );
    let handle = element(
        &strip,
        &unique_id("header-handle"),
        "position:absolute;bottom:0;left:0;width:100%;height:0",
    );
    Mounted { root, strip, handle }
}

fn mount_footer() -> Mounted {
    let body = gloo_utils::body();
    let root = element(
        &body,
        &unique_id("page"),
        "position:absolute;top:0;left:0;width:600px;height:800px",
    );
    let strip = element(
        &root,
        &unique_id("footer"),
        "position:absolute;bottom:0;left:0;width:100%;height:60px",
    );
    let handle = element(
        &strip,
        &unique_id("footer-handle"),
        "position:absolute;top:0;left:0;width:100%;height:0",
    );
    Mounted { root, strip, handle }
}

type Reports<T> = Rc<RefCell<Vec<T>>>;

fn recorder<T: 'static>() -> (Reports<T>, impl FnMut(T) + 'static) {
    let reports: Reports<T> = Rc::default();
    let sink = reports.clone();
    (reports, move |value: T| sink.borrow_mut().push(value))
}

#[wasm_bindgen_test]
fn test_init_logging_twice() {
    init_logging();
    init_logging();
}

#[wasm_bindgen_test]
fn test_attach_by_id() {
    let mounted = mount_header();
    let boundary = BrowserBoundary::attach(
        &mounted.strip.id(),
        &mounted.handle.id(),
        &BoundaryConfig::header(Pixels(80.0)),
        |_| {},
    )
    .unwrap();
    assert_eq!(boundary.position(), Pixels(80.0));
    assert_eq!(style(&mounted.strip, "height"), "80px");
    assert!(mounted.handle.class_list().contains("boundary-idle"));

    assert!(
        BrowserBoundary::attach("no-such-strip", "no-such-handle", &BoundaryConfig::default(), |_| {})
            .is_err()
    );
}

#[wasm_bindgen_test]
fn test_invalid_config_is_an_error() {
    let mounted = mount_header();
    let config = BoundaryConfig::header(Pixels(60.0)).with_range(Pixels(200.0), Pixels(100.0));
    let result = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &config,
        |_| {},
    );
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_header_drag_clamps_to_max() {
    let mounted = mount_header();
    let (reports, sink) = recorder();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        sink,
    )
    .unwrap();

    let y = top(&mounted.handle);
    let not_cancelled = mouse(&mounted.handle, "mousedown", 10.0, y);
    assert!(!not_cancelled, "mousedown default should be prevented");
    assert!(boundary.is_dragging());
    assert_eq!(boundary.listener_count(), 2);
    assert!(mounted.handle.class_list().contains("boundary-dragging"));

    mouse(&doc(), "mousemove", 10.0, y + 200.0);
    assert_eq!(*reports.borrow(), vec![Pixels(150.0)]);
    assert_eq!(style(&mounted.strip, "height"), "150px");

    mouse(&doc(), "mouseup", 10.0, y + 200.0);
    assert!(!boundary.is_dragging());
    assert_eq!(boundary.listener_count(), 0);
    assert!(mounted.handle.class_list().contains("boundary-idle"));
    assert!(!mounted.handle.class_list().contains("boundary-dragging"));
}

#[wasm_bindgen_test]
fn test_footer_grows_upward() {
    let mounted = mount_footer();
    let (reports, sink) = recorder();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::footer(Pixels(60.0)),
        sink,
    )
    .unwrap();

    let y = top(&mounted.handle);
    mouse(&mounted.handle, "mousedown", 10.0, y);
    mouse(&doc(), "mousemove", 10.0, y - 10.0);
    // The handle followed the strip, so this move is measured from its new
    // edge.
    let y = top(&mounted.handle);
    mouse(&doc(), "mousemove", 10.0, y - 5.0);
    mouse(&doc(), "mouseup", 10.0, y - 5.0);

    assert_eq!(*reports.borrow(), vec![Pixels(70.0), Pixels(75.0)]);
    assert_eq!(boundary.position(), Pixels(75.0));
    assert_eq!(style(&mounted.strip, "height"), "75px");
}

#[wasm_bindgen_test]
fn test_moves_without_drag_are_ignored() {
    let mounted = mount_header();
    let (reports, sink) = recorder();
    let _boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        sink,
    )
    .unwrap();

    mouse(&doc(), "mousemove", 10.0, 300.0);
    mouse(&doc(), "mouseup", 10.0, 300.0);
    assert!(reports.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_release_twice_reports_nothing_more() {
    let mounted = mount_header();
    let (reports, sink) = recorder();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        sink,
    )
    .unwrap();

    let y = top(&mounted.handle);
    mouse(&mounted.handle, "mousedown", 10.0, y);
    mouse(&doc(), "mousemove", 10.0, y + 20.0);
    mouse(&doc(), "mouseup", 10.0, y + 20.0);
    mouse(&doc(), "mouseup", 10.0, y + 20.0);
    mouse(&doc(), "mousemove", 10.0, y + 40.0);

    assert_eq!(*reports.borrow(), vec![Pixels(80.0)]);
    assert_eq!(boundary.listener_count(), 0);
}

#[wasm_bindgen_test]
fn test_repeated_drags_do_not_leak_listeners() {
    let mounted = mount_header();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        |_| {},
    )
    .unwrap();

    for _ in 0..5 {
        let y = top(&mounted.handle);
        mouse(&mounted.handle, "mousedown", 10.0, y);
        assert_eq!(boundary.listener_count(), 2);
        mouse(&doc(), "mousemove", 10.0, y + 1.0);
        mouse(&doc(), "mouseup", 10.0, y + 1.0);
        assert_eq!(boundary.listener_count(), 0);
    }
    assert_eq!(boundary.position(), Pixels(65.0));
}

#[wasm_bindgen_test]
fn test_drop_mid_drag_removes_document_listeners() {
    let mounted = mount_header();
    let (reports, sink) = recorder();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        sink,
    )
    .unwrap();

    let y = top(&mounted.handle);
    mouse(&mounted.handle, "mousedown", 10.0, y);
    drop(boundary);

    mouse(&doc(), "mousemove", 10.0, y + 50.0);
    mouse(&doc(), "mouseup", 10.0, y + 50.0);
    assert!(reports.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_external_reset_does_not_report() {
    let mounted = mount_header();
    let (reports, sink) = recorder();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        sink,
    )
    .unwrap();

    assert_eq!(
        boundary.set_initial_position(Pixels(100.0)),
        SyncOutcome::Applied(Pixels(100.0))
    );
    assert_eq!(boundary.set_initial_position(Pixels(100.0)), SyncOutcome::Unchanged);
    assert_eq!(style(&mounted.strip, "height"), "100px");
    assert!(reports.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_callback_may_reset_the_boundary() {
    let mounted = mount_header();
    let slot: Rc<OnceCell<BrowserBoundary>> = Rc::default();
    let seen: Reports<Pixels> = Rc::default();

    let callback_slot = slot.clone();
    let callback_seen = seen.clone();
    let boundary = BrowserBoundary::new(
        mounted.strip.clone(),
        mounted.handle.clone(),
        &BoundaryConfig::header(Pixels(60.0)),
        move |height: Pixels| {
            callback_seen.borrow_mut().push(height);
            // Host snaps to 10px steps and pushes the result back.
            let snapped = Pixels((height.get() / 10.0).round() * 10.0);
            if let Some(boundary) = callback_slot.get() {
                boundary.set_initial_position(snapped);
            }
        },
    )
    .unwrap();
    assert!(slot.set(boundary).is_ok());

    let y = top(&mounted.handle);
    mouse(&mounted.handle, "mousedown", 10.0, y);
    mouse(&doc(), "mousemove", 10.0, y + 13.0);
    mouse(&doc(), "mouseup", 10.0, y + 13.0);

    assert_eq!(*seen.borrow(), vec![Pixels(73.0)]);
    let boundary = slot.get().unwrap();
    assert_eq!(boundary.position(), Pixels(70.0));
    assert_eq!(style(&mounted.strip, "height"), "70px");
}

// === Ruler ===

struct MountedRuler {
    track: HtmlElement,
    leading: HtmlElement,
    trailing: HtmlElement,
}

impl Drop for MountedRuler {
    fn drop(&mut self) {
        self.track.remove();
    }
}

fn mount_ruler() -> MountedRuler {
    let body = gloo_utils::body();
    // 8.5in at 96px per inch.
    let track = element(
        &body,
        &unique_id("ruler"),
        "position:absolute;top:0;left:0;width:816px;height:20px",
    );
    let leading = element(
        &track,
        &unique_id("margin-left"),
        "position:absolute;top:0;width:0;height:100%",
    );
    let trailing = element(
        &track,
        &unique_id("margin-right"),
        "position:absolute;top:0;width:0;height:100%",
    );
    MountedRuler {
        track,
        leading,
        trailing,
    }
}

fn letter_ruler(mounted: &MountedRuler, sink: impl FnMut(MarginChange) + 'static) -> BrowserRuler {
    BrowserRuler::new(
        mounted.track.clone(),
        mounted.leading.clone(),
        mounted.trailing.clone(),
        &RulerConfig::horizontal(Inches(8.5)),
        sink,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_ruler_renders_ticks_and_markers() {
    let mounted = mount_ruler();
    let ruler = letter_ruler(&mounted, |_| {});

    assert_eq!(ruler.tick_count(), 35);
    let ticks = mounted.track.query_selector(".ruler-ticks").unwrap().unwrap();
    assert_eq!(ticks.child_element_count(), 35);
    assert_eq!(ticks.query_selector_all(".tick-label").unwrap().length(), 9);

    let nodes = ticks.query_selector_all(".tick").unwrap();
    let rows: Vec<String> = (0..5)
        .map(|i| {
            let tick = nodes.item(i).unwrap().dyn_into::<HtmlElement>().unwrap();
            let label = tick.text_content().unwrap_or_default();
            format!("{} [{}]", tick.class_name(), label)
        })
        .collect();
    insta::assert_snapshot!(rows.join("\n"), @r"
    tick tick-whole [0]
    tick tick-quarter []
    tick tick-half []
    tick tick-quarter []
    tick tick-whole [1]
    ");
    let last = nodes.item(34).unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(style(&last, "left"), "100%");

    assert!(style(&mounted.leading, "left").starts_with("11.76"));
    assert!(style(&mounted.trailing, "left").starts_with("88.23"));
}

#[wasm_bindgen_test]
fn test_ruler_drags_both_markers() {
    let mounted = mount_ruler();
    let (reports, sink) = recorder();
    let ruler = letter_ruler(&mounted, sink);
    let origin = left(&mounted.track);

    mouse(&mounted.leading, "mousedown", origin + 96.0, 5.0);
    assert!(ruler.is_dragging(MarginSide::Leading));
    assert!(!ruler.is_dragging(MarginSide::Trailing));
    assert!(mounted.leading.class_list().contains("dragging"));
    mouse(&doc(), "mousemove", origin + 144.0, 5.0);
    mouse(&doc(), "mouseup", origin + 144.0, 5.0);

    // Trailing marker sits at 7.5in; dragging it left widens the margin.
    mouse(&mounted.trailing, "mousedown", origin + 720.0, 5.0);
    mouse(&doc(), "mousemove", origin + 624.0, 5.0);
    mouse(&doc(), "mousemove", origin, 5.0);
    mouse(&doc(), "mouseup", origin, 5.0);

    let changes: Vec<_> = reports
        .borrow()
        .iter()
        .map(|c: &MarginChange| (c.orientation, c.side, c.value))
        .collect();
    assert_eq!(
        changes,
        vec![
            (RulerOrientation::Horizontal, MarginSide::Leading, Inches(1.5)),
            (RulerOrientation::Horizontal, MarginSide::Trailing, Inches(2.0)),
            (RulerOrientation::Horizontal, MarginSide::Trailing, Inches(4.25)),
        ]
    );
    assert_eq!(ruler.margin(MarginSide::Leading), Inches(1.5));
    assert_eq!(ruler.margin(MarginSide::Trailing), Inches(4.25));
    assert_eq!(style(&mounted.trailing, "left"), "50%");
    assert_eq!(ruler.listener_count(), 0);
    assert!(!mounted.leading.class_list().contains("dragging"));
}

#[wasm_bindgen_test]
fn test_ruler_zoom_scales_drag() {
    let mounted = mount_ruler();
    let (reports, sink) = recorder();
    let ruler = letter_ruler(&mounted, sink);
    ruler.set_zoom(Zoom::new(2.0).unwrap()).unwrap();
    let origin = left(&mounted.track);

    // 1in at 2x zoom is 192px from the origin.
    mouse(&mounted.leading, "mousedown", origin + 192.0, 5.0);
    mouse(&doc(), "mousemove", origin + 288.0, 5.0);
    mouse(&doc(), "mouseup", origin + 288.0, 5.0);

    assert_eq!(reports.borrow().last().map(|c: &MarginChange| c.value), Some(Inches(1.5)));
    assert_eq!(ruler.inches_at_client(origin + 96.0), Some(Inches(0.5)));
}

#[wasm_bindgen_test]
fn test_ruler_resize_reports_clamped_margins() {
    let mounted = mount_ruler();
    let (reports, sink) = recorder();
    let ruler = letter_ruler(&mounted, sink);
    ruler.set_margin(MarginSide::Leading, Inches(3.0));
    ruler.set_margin(MarginSide::Trailing, Inches(4.0));
    assert!(reports.borrow().is_empty());

    ruler.set_axis_length(Inches(5.0)).unwrap();
    let values: Vec<_> = reports.borrow().iter().map(|c: &MarginChange| (c.side, c.value)).collect();
    assert_eq!(
        values,
        vec![
            (MarginSide::Leading, Inches(2.5)),
            (MarginSide::Trailing, Inches(2.5)),
        ]
    );
    assert_eq!(ruler.tick_count(), 21);
    assert!(ruler.set_axis_length(Inches(0.0)).is_err());
}

#[wasm_bindgen_test]
fn test_ruler_repeated_drags_do_not_leak_listeners() {
    let mounted = mount_ruler();
    let ruler = letter_ruler(&mounted, |_| {});
    let origin = left(&mounted.track);

    for side in [MarginSide::Leading, MarginSide::Trailing].repeat(3) {
        let target = match side {
            MarginSide::Leading => &mounted.leading,
            MarginSide::Trailing => &mounted.trailing,
        };
        mouse(target, "mousedown", origin + 100.0, 5.0);
        assert_eq!(ruler.listener_count(), 2);
        mouse(&doc(), "mouseup", origin + 100.0, 5.0);
        assert_eq!(ruler.listener_count(), 0);
    }
}
