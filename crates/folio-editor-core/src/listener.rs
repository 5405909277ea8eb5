//! Scoped ownership of document-level listeners.
//!
//! A drag session needs global move/up listeners for exactly as long as it
//! is active. The platform layer creates the listeners and hands them to a
//! [`ListenerScope`]; dropping the scope drops the listeners (which
//! unregisters them) and updates the owning [`ListenerRegistry`] count.
//! Because release happens in `Drop`, a control torn down mid-drag still
//! cleans up.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Per-control count of live document-level listeners.
///
/// Cloning shares the count.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    live: Rc<Cell<usize>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently held by scopes from this registry.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Take ownership of `count` platform listeners bundled in `listeners`.
    ///
    /// The listeners stay registered until the returned scope is dropped.
    pub fn scope<L: 'static>(&self, listeners: L, count: usize) -> ListenerScope {
        self.live.set(self.live.get() + count);
        tracing::trace!(count, live = self.live.get(), "listener scope acquired");
        ListenerScope {
            listeners: Some(Box::new(listeners)),
            count,
            registry: self.clone(),
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("live", &self.live.get())
            .finish()
    }
}

/// Guard owning a set of registered listeners.
pub struct ListenerScope {
    listeners: Option<Box<dyn Any>>,
    count: usize,
    registry: ListenerRegistry,
}

impl ListenerScope {
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether this scope is counted against `registry`.
    pub fn belongs_to(&self, registry: &ListenerRegistry) -> bool {
        Rc::ptr_eq(&self.registry.live, &registry.live)
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        // Drop the listeners before updating the count so the count never
        // reads lower than what is actually registered.
        drop(self.listeners.take());
        let live = self.registry.live.get().saturating_sub(self.count);
        self.registry.live.set(live);
        tracing::trace!(count = self.count, live, "listener scope released");
    }
}

impl fmt::Debug for ListenerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerScope")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
