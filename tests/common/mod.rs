//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use std::cell::RefCell;
use std::rc::Rc;

/// Tracks callback invocations for testing.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Count of redraw requests
    pub redraws: Rc<RefCell<usize>>,
    /// Node count observed at each redraw
    pub node_counts: Rc<RefCell<Vec<usize>>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redraw_count(&self) -> usize {
        *self.redraws.borrow()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        *self.redraws.borrow_mut() = 0;
        self.node_counts.borrow_mut().clear();
    }
}
