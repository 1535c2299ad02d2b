//! Listener registry
//!
//! One registry serves a whole wrapped driver graph. Each operation holds at
//! most one before and one after listener; the exception channel is a single
//! slot. Lookups hand out a clone of the stored `Arc` so no lock is held
//! while a listener runs.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::point::Operation;
use super::EventListener;

/// Listener storage shared by every proxy of one wrapped driver
#[derive(Default)]
pub struct Listeners {
    before: RwLock<HashMap<Operation, Arc<dyn EventListener>>>,
    after: RwLock<HashMap<Operation, Arc<dyn EventListener>>>,
    exception: RwLock<Option<Arc<dyn EventListener>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous before-listener of `operation`
    pub fn set_before(&self, operation: Operation, listener: Arc<dyn EventListener>) {
        self.before.write().insert(operation, listener);
    }

    /// Replaces any previous after-listener of `operation`
    pub fn set_after(&self, operation: Operation, listener: Arc<dyn EventListener>) {
        self.after.write().insert(operation, listener);
    }

    pub fn before(&self, operation: Operation) -> Option<Arc<dyn EventListener>> {
        self.before.read().get(&operation).cloned()
    }

    pub fn after(&self, operation: Operation) -> Option<Arc<dyn EventListener>> {
        self.after.read().get(&operation).cloned()
    }

    pub fn remove_before(&self, operation: Operation) {
        self.before.write().remove(&operation);
    }

    pub fn remove_after(&self, operation: Operation) {
        self.after.write().remove(&operation);
    }

    pub fn set_exception(&self, listener: Arc<dyn EventListener>) {
        *self.exception.write() = Some(listener);
    }

    pub fn exception(&self) -> Option<Arc<dyn EventListener>> {
        self.exception.read().clone()
    }

    pub fn remove_exception(&self) {
        *self.exception.write() = None;
    }

    /// Number of registered listeners across all phases
    pub fn len(&self) -> usize {
        self.before.read().len()
            + self.after.read().len()
            + usize::from(self.exception.read().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
