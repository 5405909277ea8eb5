//! Report buffering between a control and its host callback.
//!
//! The core control calls its sink while the browser wrapper holds a mutable
//! borrow of it. The host callback may call back into the wrapper (to push a
//! new initial position, say), so reports are queued here and delivered in
//! order after the borrow is released.

use std::cell::RefCell;
use std::rc::Rc;

use folio_editor_core::PositionSink;

pub(crate) struct PendingReports<V> {
    queue: Rc<RefCell<Vec<V>>>,
}

impl<V> Clone for PendingReports<V> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<V> Default for PendingReports<V> {
    fn default() -> Self {
        Self {
            queue: Rc::default(),
        }
    }
}

impl<V> PositionSink<V> for PendingReports<V> {
    fn position_changed(&mut self, value: V) {
        self.queue.borrow_mut().push(value);
    }
}

/// Host callback shared between the wrapper and its listeners.
pub(crate) type HostCallback<V> = Rc<RefCell<Box<dyn FnMut(V)>>>;

pub(crate) fn host_callback<V>(callback: impl FnMut(V) + 'static) -> HostCallback<V> {
    Rc::new(RefCell::new(Box::new(callback)))
}

impl<V> PendingReports<V> {
    /// Deliver queued reports to `callback`, in order, until none are left.
    ///
    /// A flush from inside the callback leaves the queue alone; the outer
    /// flush picks up whatever the callback caused on its next pass.
    pub(crate) fn flush(&self, callback: &HostCallback<V>) {
        let Ok(mut callback) = callback.try_borrow_mut() else {
            tracing::trace!("host callback busy, reports stay queued");
            return;
        };
        loop {
            let reports = std::mem::take(&mut *self.queue.borrow_mut());
            if reports.is_empty() {
                break;
            }
            for report in reports {
                callback(report);
            }
        }
    }
}
