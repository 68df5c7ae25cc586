use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{filter_projects, project_categories, ALL, PORTFOLIO_STATS};
use crate::components::icons::ArrowRightIcon;
use crate::components::{FilterBar, PageHero, ProjectGrid, ProjectGridEmpty, Reveal};

const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/1117452/pexels-photo-1117452.jpeg?auto=compress&cs=tinysrgb&w=1600";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (category, set_category) = signal(ALL.to_string());
    let (query, set_query) = signal(String::new());

    let filtered = Memo::new(move |_| filter_projects(&category.get(), &query.get()));

    let reset = move |()| {
        set_category.set(ALL.to_string());
        set_query.set(String::new());
    };

    view! {
        <Title text="Réalisations"/>
        <div class="page">
            <PageHero
                eyebrow="Notre Portfolio"
                title="Nos Réalisations"
                subtitle="Découvrez plus de 200 projets réalisés avec excellence à travers tout le Cameroun."
                image=HERO_IMAGE
            >
                <div class="hero-stats">
                    {PORTFOLIO_STATS
                        .iter()
                        .map(|s| view! {
                            <div class="hero-stats__item">
                                <div class="hero-stats__value">{s.value}</div>
                                <div class="hero-stats__label">{s.label}</div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </PageHero>

            <section class="filter-section">
                <div class="container">
                    <FilterBar
                        options=project_categories().to_vec()
                        active=category
                        on_select=move |c| set_category.set(c)
                        query=query
                        on_query=move |q| set_query.set(q)
                    />
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    {move || {
                        let projects = filtered.get();
                        if projects.is_empty() {
                            view! { <ProjectGridEmpty on_reset=reset/> }.into_any()
                        } else {
                            view! { <ProjectGrid projects=projects/> }.into_any()
                        }
                    }}
                </div>
            </section>

            <section class="section">
                <Reveal class="container section-header">
                    <h2 class="section-title">"Votre Projet Sera Notre Prochaine Réalisation"</h2>
                    <p>"Faites confiance à notre expertise pour concrétiser votre vision."</p>
                    <a href="/contact" class="btn btn--primary">
                        "Démarrer Mon Projet " <ArrowRightIcon size=18/>
                    </a>
                </Reveal>
            </section>
        </div>
    }
}
