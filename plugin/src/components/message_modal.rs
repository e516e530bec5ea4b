//! Confirmation modal with a single dismiss control.

use leptos::prelude::*;

use crate::state::ui::PluginUi;

#[component]
pub fn MessageModal(on_close: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<PluginUi>>();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div id="messageModal" class="message-modal__backdrop" class:hidden=move || !ui.with(|u| u.modal_visible)>
            <div class="message-modal" on:keydown=on_keydown tabindex="0">
                <h2 id="modalTitle" class="message-modal__title">{move || ui.with(|u| u.modal_title.clone())}</h2>
                <p id="modalMessage" class="message-modal__message">
                    {move || ui.with(|u| u.modal_message.clone())}
                </p>
                <button id="modalCloseBtn" class="brief-button" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
