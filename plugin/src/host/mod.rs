//! Host editor plugin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The CMS editor owns the authoritative field value and loads this plugin
//! in an iframe. `FieldPluginHost` is the handle it yields once ready,
//! `HostRuntime` is the global used to initialize and wait for that handle.
//! `storyblok` binds both to the editor's JS API; `bridge` wires a ready
//! handle into the plugin context.

pub mod bridge;
pub mod events;
pub mod storyblok;

#[cfg(test)]
pub(crate) mod recording;

/// Host notifications this plugin subscribes to or emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Change,
    Input,
}

impl HostEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Input => "input",
        }
    }
}

/// Payload of a host-originated field notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldChange {
    /// New field value; a missing value arrives as the empty string.
    pub field: String,
}

/// Callback registered for a host event.
pub type HostCallback = Box<dyn FnMut(&FieldChange)>;

/// Ready plugin handle exposed by the host editor.
pub trait FieldPluginHost {
    /// Name of the record being edited, if the host exposes one.
    fn story_name(&self) -> Option<String>;

    /// Current persisted field value.
    fn field(&self) -> String;

    /// Stage a new field value.
    fn set(&self, value: &str);

    /// Notify the host of an event carrying `value`.
    fn emit(&self, event: HostEvent, value: &str);

    /// Subscribe to a host-originated event.
    fn on(&self, event: HostEvent, callback: HostCallback);
}

/// Host-side global used to initialize the plugin and await its handle.
pub trait HostRuntime {
    type Handle: FieldPluginHost + 'static;

    fn init(&self, access_token: &str);

    /// Register the one-time ready callback. It never runs if the host
    /// never becomes ready.
    fn on_ready(&self, callback: Box<dyn FnOnce(Self::Handle)>);
}
