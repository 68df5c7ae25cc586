use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{ABOUT_STATS, COMPANY_NAME, MILESTONES, TEAM, VALUES};
use crate::components::icons::{ArrowRightIcon, AwardIcon, EyeIcon, HeartIcon, TargetIcon, UsersIcon};
use crate::components::{PageHero, Reveal};

const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/30688596/pexels-photo-30688596.jpeg?auto=compress&cs=tinysrgb&w=1600";
const STORY_IMAGE: &str =
    "https://images.pexels.com/photos/3860937/pexels-photo-3860937.jpeg?auto=compress&cs=tinysrgb&w=700";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="À Propos"/>
        <div class="page">
            <PageHero
                eyebrow="Notre Histoire"
                title="À Propos de New Generation BTP"
                subtitle="Un bureau d'étude multi-services fondé sur l'ambition, l'expertise et la passion de construire l'avenir du Cameroun."
                image=HERO_IMAGE
            />
            <Story/>
            <MissionVision/>
            <Values/>
            <Team/>
            <Timeline/>

            <section class="cta-strip">
                <div class="container container--narrow">
                    <h2>"Prêt à Travailler avec Nous ?"</h2>
                    <p>"Contactez notre équipe pour discuter de votre projet."</p>
                    <a href="/contact" class="btn btn--light btn--large">
                        "Nous Contacter " <ArrowRightIcon size=18/>
                    </a>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Story() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container split">
                <Reveal>
                    <img src=STORY_IMAGE alt="Notre histoire" class="split__image" loading="lazy"/>
                </Reveal>
                <Reveal delay_ms=150>
                    <span class="pill pill--soft">"Notre Histoire"</span>
                    <h2 class="section-title section-title--left">"De l'Ambition à l'Excellence"</h2>
                    <div class="prose">
                        <p>
                            <strong>{COMPANY_NAME}</strong>
                            " a été pensée en 2016 par un groupe d'étudiants de divers domaines d'ingénierie. Avant la sortie de l'école, 5 étudiants se sont désolidarisés, laissant M. DJOMO Aubin seul, lui qui était la tête pensante du projet."
                        </p>
                        <p>
                            "En 2017, M. DJOMO Aubin, par sa grande vision et son ambition dans le domaine de l'ingénierie, ouvre la direction générale et recrute ainsi plusieurs ingénieurs qualifiés en génie civil, génie électrique, topographie, froid et clim et architecture, ainsi qu'une DRH, un DG, une responsable de la communication, une assistante de direction et des commerciaux."
                        </p>
                        <p>
                            "Tout cela dans le but de travailler en équipe et de propulser cette jeune entreprise jusqu'à nos jours. Aujourd'hui, "
                            <strong>{COMPANY_NAME}</strong>
                            " est un bureau d'étude multi-services reconnu, avec plus de 200 projets réalisés à travers tout le Cameroun."
                        </p>
                    </div>
                    <div class="mini-stats">
                        {ABOUT_STATS
                            .iter()
                            .map(|s| view! {
                                <div class="mini-stats__item">
                                    <div class="mini-stats__value">{s.value}</div>
                                    <div class="mini-stats__label">{s.label}</div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn MissionVision() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">"Notre Mission & Vision"</h2>
                </Reveal>
                <div class="card-grid card-grid--two">
                    <Reveal>
                        <div class="statement">
                            <div class="statement__icon"><TargetIcon size=24/></div>
                            <h3>"Notre Mission"</h3>
                            <p>
                                "Fournir des services d'ingénierie de haute qualité, accessibles et adaptés aux besoins des particuliers, entreprises et institutions au Cameroun. Nous nous engageons à valoriser l'expertise technique locale et à contribuer au développement des infrastructures nationales."
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=150>
                        <div class="statement">
                            <div class="statement__icon"><EyeIcon size=24/></div>
                            <h3>"Notre Vision"</h3>
                            <p>
                                "Devenir le bureau d'étude de référence en Afrique Centrale, reconnu pour son excellence technique, sa polyvalence et son engagement envers ses clients. À long terme, être une plateforme intégrée de services d'ingénierie et d'architecture qui accompagne le développement durable du Cameroun."
                            </p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ValueIcon(index: usize) -> impl IntoView {
    match index {
        0 => view! { <AwardIcon size=30/> }.into_any(),
        1 => view! { <HeartIcon size=30/> }.into_any(),
        2 => view! { <UsersIcon size=30/> }.into_any(),
        _ => view! { <TargetIcon size=30/> }.into_any(),
    }
}

#[component]
fn Values() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <Reveal class="section-header">
                    <span class="pill pill--soft">"Ce qui nous anime"</span>
                    <h2 class="section-title">"Nos Valeurs"</h2>
                </Reveal>
                <div class="card-grid card-grid--four">
                    {VALUES
                        .iter()
                        .enumerate()
                        .zip((0u32..).step_by(100))
                        .map(|((i, value), delay)| view! {
                            <Reveal delay_ms=delay>
                                <div class="value-card">
                                    <div class="value-card__icon"><ValueIcon index=i/></div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            </Reveal>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Team() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                <Reveal class="section-header">
                    <span class="pill pill--soft">"Notre Équipe"</span>
                    <h2 class="section-title">"Des Experts à Votre Service"</h2>
                    <p class="section-subtitle">
                        "Une équipe pluridisciplinaire d'ingénieurs et de professionnels qualifiés, unis par la passion de l'excellence."
                    </p>
                </Reveal>
                <div class="card-grid card-grid--four">
                    {TEAM
                        .iter()
                        .zip((0u32..).step_by(80))
                        .map(|(member, delay)| view! {
                            <Reveal delay_ms=delay>
                                <div class="team-card">
                                    <div class=format!("avatar avatar--{}", member.tone)>{member.initials}</div>
                                    <h3>{member.name}</h3>
                                    <p class="team-card__role">{member.role}</p>
                                    <p class="team-card__desc">{member.description}</p>
                                </div>
                            </Reveal>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container container--narrow">
                <Reveal class="section-header">
                    <span class="pill pill--soft">"Notre Parcours"</span>
                    <h2 class="section-title">"Chronologie"</h2>
                </Reveal>
                <div class="timeline">
                    {MILESTONES
                        .iter()
                        .zip((0u32..).step_by(100))
                        .map(|(m, delay)| view! {
                            <Reveal delay_ms=delay class="timeline__item">
                                <div class="timeline__bullet">{m.short_year()}</div>
                                <div class="timeline__card">
                                    <div class="timeline__year">{m.year}</div>
                                    <h4>{m.title}</h4>
                                    <p>{m.description}</p>
                                </div>
                            </Reveal>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
