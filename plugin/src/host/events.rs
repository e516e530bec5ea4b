//! Ordered callback registry keyed by host event.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::collections::HashMap;

use super::{FieldChange, HostCallback, HostEvent};

#[derive(Default)]
pub struct EventRegistry {
    listeners: HashMap<HostEvent, Vec<HostCallback>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback. Returns `true` when it is the first for `event`.
    pub fn subscribe(&mut self, event: HostEvent, callback: HostCallback) -> bool {
        let list = self.listeners.entry(event).or_default();
        list.push(callback);
        list.len() == 1
    }

    /// Invoke every callback for `event` in subscription order. Returns how
    /// many ran.
    pub fn dispatch(&mut self, event: HostEvent, change: &FieldChange) -> usize {
        let Some(list) = self.listeners.get_mut(&event) else {
            return 0;
        };
        for callback in list.iter_mut() {
            callback(change);
        }
        list.len()
    }

    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("change", &self.listener_count(HostEvent::Change))
            .field("input", &self.listener_count(HostEvent::Input))
            .finish()
    }
}
