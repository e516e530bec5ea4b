//! Visibility state for the plugin chrome (loading, error, brief, modal).
//!
//! DESIGN
//! ======
//! The four flags are independent except for loading: entering it hides the
//! error banner and disables both action buttons. Every helper is idempotent
//! for the same argument.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state rendered by the plugin components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluginUi {
    pub loading: bool,
    pub buttons_disabled: bool,
    pub error_visible: bool,
    pub error_text: String,
    pub brief_visible: bool,
    pub brief_text: String,
    pub modal_visible: bool,
    pub modal_title: String,
    pub modal_message: String,
}

impl PluginUi {
    pub fn show_modal(&mut self, title: &str, message: &str) {
        title.clone_into(&mut self.modal_title);
        message.clone_into(&mut self.modal_message);
        self.modal_visible = true;
    }

    pub fn hide_modal(&mut self) {
        self.modal_visible = false;
    }

    pub fn show_error(&mut self, message: &str) {
        message.clone_into(&mut self.error_text);
        self.error_visible = true;
    }

    /// Hide the error banner and clear its text.
    pub fn hide_error(&mut self) {
        self.error_visible = false;
        self.error_text.clear();
    }

    /// Toggle the loading indicator together with both action buttons.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.buttons_disabled = loading;
        if loading {
            self.hide_error();
        }
    }

    /// Put `text` in the brief display and reveal the section.
    pub fn show_brief(&mut self, text: &str) {
        text.clone_into(&mut self.brief_text);
        self.brief_visible = true;
    }

    /// Mirror a host-side field value. Empty values clear the text but leave
    /// the section visibility alone.
    pub fn mirror_field(&mut self, value: &str) {
        value.clone_into(&mut self.brief_text);
        if !value.is_empty() {
            self.brief_visible = true;
        }
    }

    pub fn hide_brief(&mut self) {
        self.brief_visible = false;
    }
}
