use leptos::prelude::*;

use super::icons::CloseIcon;

/// Overlay dialog. Clicking the backdrop or the close button calls `on_close`.
///
/// Clicks inside the panel keep bubbling so the router still intercepts
/// links placed in the dialog.
#[component]
pub fn Modal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal"
            role="dialog"
            aria-modal="true"
            on:click=move |ev| {
                // only a click on the backdrop itself closes
                if ev.target() == ev.current_target() {
                    on_close.run(());
                }
            }
        >
            <div class=format!("modal__panel {class}")>
                <button class="modal__close" aria-label="Fermer" on:click=move |_| on_close.run(())>
                    <CloseIcon size=20/>
                </button>
                {children()}
            </div>
        </div>
    }
}
