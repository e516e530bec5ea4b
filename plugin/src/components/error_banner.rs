//! Inline error banner.

use leptos::prelude::*;

use crate::state::ui::PluginUi;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<PluginUi>>();

    view! {
        <div id="errorMessage" class="brief-error" role="alert" class:hidden=move || !ui.with(|u| u.error_visible)>
            <strong>"Error: "</strong>
            <span id="errorText">{move || ui.with(|u| u.error_text.clone())}</span>
        </div>
    }
}
