//! Brief inputs, the Generate button, and the loading indicator.

use leptos::prelude::*;

use crate::state::form::{BriefForm, DEFAULT_AUDIENCE, DEFAULT_CONTENT_TYPE, DEFAULT_TONE};
use crate::state::ui::PluginUi;

#[component]
pub fn BriefFormPanel(on_generate: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<BriefForm>>();
    let ui = expect_context::<RwSignal<PluginUi>>();

    view! {
        <div class="brief-form">
            <label class="brief-form__label" for="title">"Content title"</label>
            <input
                id="title"
                class="brief-form__input"
                type="text"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
            <label class="brief-form__label" for="contentType">"Content type"</label>
            <input
                id="contentType"
                class="brief-form__input"
                type="text"
                placeholder=DEFAULT_CONTENT_TYPE
                prop:value=move || form.with(|f| f.content_type.clone())
                on:input=move |ev| form.update(|f| f.content_type = event_target_value(&ev))
            />
            <label class="brief-form__label" for="keywords">"Keywords (comma separated)"</label>
            <input
                id="keywords"
                class="brief-form__input"
                type="text"
                placeholder="seo, content strategy"
                prop:value=move || form.with(|f| f.keywords.clone())
                on:input=move |ev| form.update(|f| f.keywords = event_target_value(&ev))
            />
            <label class="brief-form__label" for="tone">"Tone"</label>
            <input
                id="tone"
                class="brief-form__input"
                type="text"
                placeholder=DEFAULT_TONE
                prop:value=move || form.with(|f| f.tone.clone())
                on:input=move |ev| form.update(|f| f.tone = event_target_value(&ev))
            />
            <label class="brief-form__label" for="audience">"Audience"</label>
            <input
                id="audience"
                class="brief-form__input"
                type="text"
                placeholder=DEFAULT_AUDIENCE
                prop:value=move || form.with(|f| f.audience.clone())
                on:input=move |ev| form.update(|f| f.audience = event_target_value(&ev))
            />
            <label class="brief-form__label" for="additionalNotes">"Additional notes"</label>
            <textarea
                id="additionalNotes"
                class="brief-form__input brief-form__input--notes"
                rows="3"
                prop:value=move || form.with(|f| f.additional_notes.clone())
                on:input=move |ev| form.update(|f| f.additional_notes = event_target_value(&ev))
            ></textarea>
            <button
                id="generateBriefBtn"
                class="brief-button"
                disabled=move || ui.with(|u| u.buttons_disabled)
                on:click=move |_| on_generate.run(())
            >
                "Generate Brief"
            </button>
            <div id="loading" class="brief-loading" class:hidden=move || !ui.with(|u| u.loading)>
                "Generating brief..."
            </div>
        </div>
    }
}
