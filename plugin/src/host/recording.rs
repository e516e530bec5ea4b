//! In-memory host used by tests to observe `set`/`emit` traffic.

use std::cell::RefCell;
use std::rc::Rc;

use super::events::EventRegistry;
use super::{FieldChange, FieldPluginHost, HostCallback, HostEvent, HostRuntime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum HostCall {
    Set(String),
    Emit(HostEvent, String),
}

#[derive(Default)]
struct HostRecord {
    story_name: Option<String>,
    field: String,
    calls: Vec<HostCall>,
}

/// Cloneable handle; clones share one record.
#[derive(Clone, Default)]
pub(crate) struct RecordingHost {
    record: Rc<RefCell<HostRecord>>,
    registry: Rc<RefCell<EventRegistry>>,
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_story(self, name: &str) -> Self {
        self.record.borrow_mut().story_name = Some(name.to_owned());
        self
    }

    pub(crate) fn with_field(self, value: &str) -> Self {
        value.clone_into(&mut self.record.borrow_mut().field);
        self
    }

    pub(crate) fn calls(&self) -> Vec<HostCall> {
        self.record.borrow().calls.clone()
    }

    pub(crate) fn emits(&self) -> Vec<HostCall> {
        self.calls().into_iter().filter(|c| matches!(c, HostCall::Emit(..))).collect()
    }

    pub(crate) fn sets(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Set(v) => Some(v),
                HostCall::Emit(..) => None,
            })
            .collect()
    }

    pub(crate) fn clear_calls(&self) {
        self.record.borrow_mut().calls.clear();
    }

    /// Simulate a host-originated field change.
    pub(crate) fn fire_change(&self, value: &str) -> usize {
        value.clone_into(&mut self.record.borrow_mut().field);
        let change = FieldChange { field: value.to_owned() };
        self.registry.borrow_mut().dispatch(HostEvent::Change, &change)
    }

    pub(crate) fn listener_count(&self, event: HostEvent) -> usize {
        self.registry.borrow().listener_count(event)
    }
}

impl FieldPluginHost for RecordingHost {
    fn story_name(&self) -> Option<String> {
        self.record.borrow().story_name.clone()
    }

    fn field(&self) -> String {
        self.record.borrow().field.clone()
    }

    fn set(&self, value: &str) {
        let mut record = self.record.borrow_mut();
        value.clone_into(&mut record.field);
        record.calls.push(HostCall::Set(value.to_owned()));
    }

    fn emit(&self, event: HostEvent, value: &str) {
        self.record.borrow_mut().calls.push(HostCall::Emit(event, value.to_owned()));
    }

    fn on(&self, event: HostEvent, callback: HostCallback) {
        self.registry.borrow_mut().subscribe(event, callback);
    }
}

/// Runtime whose ready callback fires only when the test says so.
#[derive(Default)]
pub(crate) struct ManualRuntime {
    access_token: RefCell<Option<String>>,
    ready: RefCell<Option<Box<dyn FnOnce(RecordingHost)>>>,
}

impl ManualRuntime {
    pub(crate) fn access_token(&self) -> Option<String> {
        self.access_token.borrow().clone()
    }

    pub(crate) fn has_pending_ready(&self) -> bool {
        self.ready.borrow().is_some()
    }

    /// Deliver `handle` to the registered ready callback, if any.
    pub(crate) fn become_ready(&self, handle: RecordingHost) -> bool {
        let callback = self.ready.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback(handle);
                true
            }
            None => false,
        }
    }
}

impl HostRuntime for ManualRuntime {
    type Handle = RecordingHost;

    fn init(&self, access_token: &str) {
        *self.access_token.borrow_mut() = Some(access_token.to_owned());
    }

    fn on_ready(&self, callback: Box<dyn FnOnce(RecordingHost)>) {
        *self.ready.borrow_mut() = Some(callback);
    }
}
