//! Browser DOM layer for the folio page-layout controls.
//!
//! Binds the controls from `folio-editor-core` to DOM elements. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `boundary`: header/footer strip with a draggable handle
//! - `ruler`: margin ruler with two markers and rendered ticks
//! - `listeners`: document `mousemove`/`mouseup` pair held for one drag
//! - `logging`: console subscriber and panic hook
//!
//! Each control keeps its core state in an `Rc<RefCell<_>>` shared with its
//! event listeners through `Weak` references. Host callbacks run after that
//! borrow is released, so a callback may call straight back into the
//! control.
//!
//! # Re-exports
//!
//! This crate re-exports `folio-editor-core` for convenience, so consumers
//! only need to depend on `folio-editor-browser`.

// Re-export core crate
pub use folio_editor_core;
pub use folio_editor_core::*;

pub mod boundary;
pub mod dom;
pub mod listeners;
pub mod logging;
mod pending;
pub mod ruler;

pub use boundary::BrowserBoundary;
pub use listeners::DocumentListeners;
pub use logging::{init_logging, init_logging_with};
pub use ruler::BrowserRuler;
