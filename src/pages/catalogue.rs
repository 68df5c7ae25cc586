use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{filter_plans, plan_types, ArchitecturalPlan, ALL, PHONE_PRIMARY};
use crate::components::icons::{ArrowRightIcon, CheckIcon, PhoneIcon};
use crate::components::{FilterBar, PlanCard, PlanEstimator, Reveal};

const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/8293670/pexels-photo-8293670.jpeg?auto=compress&cs=tinysrgb&w=1600";

const HIGHLIGHTS: &[&str] = &[
    "Plans certifiés",
    "Personnalisables",
    "Estimation instantanée",
    "Permis inclus",
];

const STEPS: &[(&str, &str)] = &[
    ("Choisissez", "Sélectionnez un plan qui correspond à votre projet"),
    ("Personnalisez", "Ajustez la surface et les options selon vos besoins"),
    ("Estimez", "Obtenez une estimation de coût instantanée"),
    ("Contactez", "Envoyez votre demande à notre équipe"),
];

#[component]
pub fn CataloguePage() -> impl IntoView {
    let (plan_type, set_plan_type) = signal(ALL.to_string());
    let (selected, set_selected) = signal(None::<&'static ArchitecturalPlan>);

    let filtered = Memo::new(move |_| filter_plans(&plan_type.get()));

    view! {
        <Title text="Catalogue"/>
        <div class="page">
            <section class="hero hero--compact" style=format!("background-image: url({HERO_IMAGE})")>
                <div class="hero__overlay"></div>
                <div class="hero__content">
                    <p class="eyebrow">"Plans Architecturaux"</p>
                    <h1 class="hero__title hero__title--small">"Catalogue Architectural"</h1>
                    <p class="hero__lead">
                        "Choisissez parmi nos plans, personnalisez selon vos besoins et obtenez une estimation de coût instantanée."
                    </p>
                    <div class="pill-row">
                        {HIGHLIGHTS
                            .iter()
                            .map(|h| view! { <span class="pill pill--light"><CheckIcon size=12/> {*h}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="section section--tinted">
                <ol class="container steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, desc))| view! {
                            <li class="steps__item">
                                <span class="steps__number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal class="section-header">
                        <span class="eyebrow eyebrow--ruled">"Plans"</span>
                        <h2 class="section-title">"Nos Plans Architecturaux"</h2>
                    </Reveal>

                    <Reveal class="filter-centered">
                        <FilterBar
                            options=plan_types()
                            active=plan_type
                            on_select=move |t| set_plan_type.set(t)
                            label="Type :"
                        />
                    </Reveal>

                    <div class="card-grid card-grid--three">
                        <For
                            each=move || filtered.get()
                            key=|plan| plan.id
                            children=move |plan| view! {
                                <Reveal>
                                    <PlanCard plan=plan on_select=move |p| set_selected.set(Some(p))/>
                                </Reveal>
                            }
                        />
                    </div>
                </div>
            </section>

            <section class="section section--muted">
                <Reveal class="container container--narrow">
                    <div class="custom-plan">
                        <h2>"Plan sur Mesure ?"</h2>
                        <p>
                            "Vous avez une vision unique ? Nos architectes conçoivent des plans personnalisés selon vos spécifications et votre budget."
                        </p>
                        <div class="button-row">
                            <a href="/contact" class="btn btn--primary btn--large">
                                "Plan Personnalisé " <ArrowRightIcon size=18/>
                            </a>
                            <a href=PHONE_PRIMARY.tel class="btn btn--outline-light btn--large">
                                <PhoneIcon size=18/> {PHONE_PRIMARY.display}
                            </a>
                        </div>
                    </div>
                </Reveal>
            </section>

            {move || selected.get().map(|plan| view! {
                <PlanEstimator plan=plan on_close=move |()| set_selected.set(None)/>
            })}
        </div>
    }
}
