//! Plugin context: the host handle slot plus the generate and insert flows.
//!
//! DESIGN
//! ======
//! One `PluginContext` is built at startup and shared (behind `Rc`) with the
//! host bridge and the views. It owns nothing the host owns: the field value
//! lives in the editor, the context only mirrors it into `PluginUi`.
//!
//! Generation pushes the brief into the field with `set` only. Insertion is
//! the one path that also emits `change`/`input` to the host.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{FieldChange, FieldPluginHost, HostEvent};
use crate::net::api::{BriefBackend, BriefError};
use crate::state::form::BriefForm;
use crate::state::store::Store;
use crate::state::ui::PluginUi;

pub const INSERTED_TITLE: &str = "Brief Inserted!";
pub const INSERTED_MESSAGE: &str =
    "The brief has been inserted into the field. Remember to save your Storyblok entry to persist changes.";
pub const NO_BRIEF_MESSAGE: &str = "No brief to insert. Please generate one first.";

pub struct PluginContext<H, B, U, F> {
    host: RefCell<Option<H>>,
    backend: B,
    ui: U,
    form: F,
}

impl<H, B, U, F> PluginContext<H, B, U, F>
where
    H: FieldPluginHost + 'static,
    B: BriefBackend,
    U: Store<PluginUi>,
    F: Store<BriefForm>,
{
    pub fn new(backend: B, ui: U, form: F) -> Self {
        Self { host: RefCell::new(None), backend, ui, form }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Whether the host has delivered its plugin handle.
    pub fn is_attached(&self) -> bool {
        self.host.borrow().is_some()
    }

    /// Capture the ready handle and sync the form and display with it.
    pub fn on_host_ready(self: &Rc<Self>, handle: H)
    where
        U: 'static,
        F: 'static,
        B: 'static,
    {
        if let Some(name) = handle.story_name().filter(|n| !n.is_empty()) {
            self.form.mutate(|form| form.title = name);
        }

        let current = handle.field();
        handle.set(&current);

        let weak = Rc::downgrade(self);
        handle.on(
            HostEvent::Change,
            Box::new(move |change: &FieldChange| {
                if let Some(ctx) = weak.upgrade() {
                    ctx.ui.mutate(|ui| ui.mirror_field(&change.field));
                }
            }),
        );

        if !current.is_empty() {
            self.ui.mutate(|ui| ui.show_brief(&current));
        }

        *self.host.borrow_mut() = Some(handle);
        log::info!("field plugin attached");
    }

    /// Request a brief for the current form values and display the outcome.
    pub async fn generate(&self) {
        let _loading = LoadingGuard::enter(&self.ui);
        let request = self.form.peek(BriefForm::to_request);
        let outcome = self.backend.generate(&request).await;
        self.finish_generation(outcome);
    }

    fn finish_generation(&self, outcome: Result<String, BriefError>) {
        match outcome {
            Ok(brief) => {
                self.ui.mutate(|ui| ui.show_brief(&brief));
                if let Some(host) = self.host.borrow().as_ref() {
                    host.set(&brief);
                }
            }
            Err(e) => {
                log::error!("error generating brief: {e}");
                let message = format!("Failed to generate brief: {e}");
                self.ui.mutate(|ui| {
                    ui.show_error(&message);
                    ui.hide_brief();
                });
            }
        }
    }

    /// Write the displayed brief into the field and notify the host.
    pub fn insert(&self) {
        let text = self.ui.peek(|ui| ui.brief_text.clone());
        let host = self.host.borrow();
        let Some(host) = host.as_ref().filter(|_| !text.is_empty()) else {
            self.ui.mutate(|ui| ui.show_error(NO_BRIEF_MESSAGE));
            return;
        };

        host.set(&text);
        let value = host.field();
        host.emit(HostEvent::Change, &value);
        host.emit(HostEvent::Input, &value);
        self.ui.mutate(|ui| ui.show_modal(INSERTED_TITLE, INSERTED_MESSAGE));
    }

    pub fn dismiss_modal(&self) {
        self.ui.mutate(PluginUi::hide_modal);
    }
}

/// Holds the loading state for its lifetime; dropping it always exits
/// loading, including when the generation future is dropped mid-request.
struct LoadingGuard<'a, U: Store<PluginUi>> {
    ui: &'a U,
}

impl<'a, U: Store<PluginUi>> LoadingGuard<'a, U> {
    fn enter(ui: &'a U) -> Self {
        ui.mutate(|ui| ui.set_loading(true));
        Self { ui }
    }
}

impl<U: Store<PluginUi>> Drop for LoadingGuard<'_, U> {
    fn drop(&mut self) {
        self.ui.mutate(|ui| ui.set_loading(false));
    }
}
