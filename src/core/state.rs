//! Reactive state management

use std::sync::{Arc, RwLock};

/// Listener invoked with the new value after each committed change
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Shared state container - notifies listeners when changed
pub struct State<T: Clone + Send + Sync + 'static> {
    value: Arc<RwLock<T>>,
    listeners: Arc<RwLock<Vec<Listener<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> State<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Replace the value and notify listeners
    pub fn set(&self, new_value: T) {
        let snapshot = {
            let mut value = self.value.write().unwrap();
            *value = new_value;
            value.clone()
        };
        self.notify(&snapshot);
    }

    /// Mutate the value in place and notify listeners
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        let snapshot = {
            let mut value = self.value.write().unwrap();
            f(&mut *value);
            value.clone()
        };
        self.notify(&snapshot);
    }

    /// Mutate only if `f` commits. The check and the mutation run under one
    /// lock acquisition; listeners fire only on commit.
    pub fn update_if<F: FnOnce(&mut T) -> bool>(&self, f: F) -> bool {
        let snapshot = {
            let mut value = self.value.write().unwrap();
            if !f(&mut *value) {
                return false;
            }
            value.clone()
        };
        self.notify(&snapshot);
        true
    }

    /// Subscribe to changes; the callback receives the new value
    pub fn subscribe<F: Fn(&T) + Send + Sync + 'static>(&self, callback: F) {
        let mut listeners = self.listeners.write().unwrap();
        listeners.push(Box::new(callback));
    }

    fn notify(&self, value: &T) {
        let listeners = self.listeners.read().unwrap();
        for listener in listeners.iter() {
            listener(value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
