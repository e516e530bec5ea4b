//! Generated brief display with the Insert button.

use leptos::prelude::*;

use crate::state::ui::PluginUi;

#[component]
pub fn BriefSection(on_insert: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<PluginUi>>();

    view! {
        <section id="briefSection" class="brief-section" class:hidden=move || !ui.with(|u| u.brief_visible)>
            <h2 class="brief-section__title">"Generated brief"</h2>
            <pre id="briefOutput" class="brief-section__output">{move || ui.with(|u| u.brief_text.clone())}</pre>
            <button
                id="insertBriefBtn"
                class="brief-button"
                disabled=move || ui.with(|u| u.buttons_disabled)
                on:click=move |_| on_insert.run(())
            >
                "Insert Brief"
            </button>
        </section>
    }
}
