use leptos::prelude::*;

/// Dark banner opening every inner page.
#[component]
pub fn PageHero(
    #[prop(optional)] eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    /// Faint background photograph
    #[prop(optional)]
    image: &'static str,
    /// Colour modifier, e.g. a service accent
    #[prop(optional)]
    accent: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class=if accent.is_empty() { "page-hero".to_string() } else { format!("page-hero page-hero--{accent}") }>
            {(!image.is_empty()).then(|| view! {
                <div class="page-hero__image" style=format!("background-image: url({image})")></div>
            })}
            <div class="container page-hero__inner">
                {(!eyebrow.is_empty()).then(|| view! { <span class="pill">{eyebrow}</span> })}
                <h1 class="page-hero__title">{title}</h1>
                {(!subtitle.is_empty()).then(|| view! { <p class="page-hero__subtitle">{subtitle}</p> })}
                {children.map(|c| c())}
            </div>
            <svg class="page-hero__wave" viewBox="0 0 1440 60" fill="none" aria-hidden="true">
                <path d="M0 60H1440V20C1440 20 1100 60 720 35C340 10 0 45 0 45V60Z" fill="white"/>
            </svg>
        </section>
    }
}
