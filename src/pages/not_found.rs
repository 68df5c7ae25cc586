use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Introuvable"/>
        <div class="page page--centered not-found">
            <div class="not-found__code">"404"</div>
            <h2>"Page Introuvable"</h2>
            <p class="muted">"La page que vous cherchez n'existe pas."</p>
            <a href="/" class="btn btn--primary">"Retour à l'Accueil"</a>
        </div>
    }
}
