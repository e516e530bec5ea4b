//! Plugin UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `PluginUi` and `BriefForm` signals from Leptos context.
//! Actions are handed in as callbacks by `App`, which owns the plugin
//! context. Element ids match the stylesheet and the host page markup.

pub mod brief_form;
pub mod brief_section;
pub mod error_banner;
pub mod message_modal;
