//! Root plugin component.
//!
//! Builds the plugin context, attaches it to the editor (browser only), and
//! provides the UI/form signals the components read.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::brief_form::BriefFormPanel;
use crate::components::brief_section::BriefSection;
use crate::components::error_banner::ErrorBanner;
use crate::components::message_modal::MessageModal;
use crate::config::PluginConfig;
use crate::context::PluginContext;
use crate::host::storyblok::StoryblokHandle;
use crate::net::api::HttpBriefBackend;
use crate::state::form::BriefForm;
use crate::state::ui::PluginUi;

/// Context type used in the browser.
pub type BrowserContext =
    PluginContext<StoryblokHandle, HttpBriefBackend, RwSignal<PluginUi>, RwSignal<BriefForm>>;

/// Root plugin component.
///
/// Action buttons do nothing until the editor delivers its plugin handle.
#[component]
pub fn App() -> impl IntoView {
    let config = PluginConfig::from_build_env();
    let ui = RwSignal::new(PluginUi::default());
    let form = RwSignal::new(BriefForm::default());
    provide_context(ui);
    provide_context(form);

    let ctx: Rc<BrowserContext> =
        Rc::new(PluginContext::new(HttpBriefBackend::new(config.backend_url.clone()), ui, form));

    #[cfg(feature = "csr")]
    {
        match crate::host::storyblok::StoryblokRuntime::detect() {
            Some(runtime) => crate::host::bridge::attach(&runtime, &ctx, &config.access_token),
            None => log::warn!("Storyblok global not found; field plugin stays inert"),
        }
    }

    let ctx = StoredValue::new_local(ctx);

    let on_generate = Callback::new(move |()| {
        let ctx = ctx.get_value();
        if !ctx.is_attached() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            ctx.generate().await;
        });
    });

    let on_insert = Callback::new(move |()| {
        let ctx = ctx.get_value();
        if ctx.is_attached() {
            ctx.insert();
        }
    });

    let on_close = Callback::new(move |()| ctx.get_value().dismiss_modal());

    view! {
        <main class="brief-plugin">
            <h1 class="brief-plugin__title">"Content Brief Generator"</h1>
            <BriefFormPanel on_generate=on_generate/>
            <ErrorBanner/>
            <BriefSection on_insert=on_insert/>
            <MessageModal on_close=on_close/>
        </main>
    }
}
