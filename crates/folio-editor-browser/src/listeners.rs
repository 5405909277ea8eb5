//! Document-level listeners for an active drag.
//!
//! Registered on pointer-down and handed to the control's
//! [`ListenerScope`]. When the session ends the scope drops them, which
//! removes both from the document.

use folio_editor_core::{ListenerRegistry, ListenerScope};
use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::dom::document;

/// The `mousemove`/`mouseup` pair for one drag session.
pub struct DocumentListeners {
    _move: EventListener,
    _up: EventListener,
}

impl DocumentListeners {
    /// Listeners per session.
    pub const COUNT: usize = 2;

    pub fn attach<M, U>(on_move: M, on_up: U) -> Result<Self, JsValue>
    where
        M: FnMut(&Event) + 'static,
        U: FnMut(&Event) + 'static,
    {
        let document = document()?;
        Ok(Self {
            _move: EventListener::new(&document, "mousemove", on_move),
            _up: EventListener::new(&document, "mouseup", on_up),
        })
    }

    /// Hand the listeners to a scope counted against `registry`.
    pub fn into_scope(self, registry: &ListenerRegistry) -> ListenerScope {
        registry.scope(self, Self::COUNT)
    }
}
