use leptos::html::Div;
use leptos::prelude::*;

use crate::reveal::{use_scroll_reveal, RevealOptions};

/// Fades its children in when they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = 30)] offset_px: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    use_scroll_reveal(
        node_ref,
        RevealOptions {
            delay_ms,
            offset_px,
            ..RevealOptions::default()
        },
    );

    view! {
        <div node_ref=node_ref class=class>
            {children()}
        </div>
    }
}
