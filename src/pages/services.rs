use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::catalog::{related_services, service_by_id, services, Service, PHONE_PRIMARY};
use crate::components::icons::{ArrowRightIcon, CheckCircleIcon, ChevronRightIcon, PhoneIcon, ServiceIcon};
use crate::components::{PageHero, Reveal};

const LIST_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=1600&auto=format&fit=crop";

/// Number of other services suggested beside a detail page.
const RELATED_COUNT: usize = 3;

#[component]
pub fn ServicesListPage() -> impl IntoView {
    view! {
        <Title text="Services"/>
        <div class="page">
            <PageHero
                eyebrow="Expertise Multi-Disciplines"
                title="Nos Services"
                subtitle="De la conception à la livraison, notre équipe pluridisciplinaire couvre tous les aspects de vos projets de construction et d'ingénierie."
                image=LIST_HERO_IMAGE
            />

            <section class="section">
                <div class="container card-grid card-grid--two">
                    {services()
                        .iter()
                        .zip((0u32..).step_by(80))
                        .map(|(service, delay)| view! {
                            <Reveal delay_ms=delay>
                                <ServiceSummary service=service/>
                            </Reveal>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section section--muted">
                <Reveal class="container section-header">
                    <h2 class="section-title">"Besoin d'un Service Spécifique ?"</h2>
                    <p>"Contactez-nous pour une étude personnalisée de votre projet."</p>
                    <div class="button-row">
                        <a href="/contact" class="btn btn--primary">"Demander un Devis " <ArrowRightIcon size=18/></a>
                        <a href=PHONE_PRIMARY.tel class="btn btn--secondary">
                            <PhoneIcon size=18/> {PHONE_PRIMARY.display}
                        </a>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}

#[component]
fn ServiceSummary(service: &'static Service) -> impl IntoView {
    view! {
        <div class=format!("card service-summary service-summary--{}", service.accent)>
            <div class="service-summary__icon">
                <ServiceIcon kind=service.icon size=28/>
            </div>
            <div class="service-summary__body">
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <div class="tag-list">
                    {service
                        .features
                        .iter()
                        .take(3)
                        .map(|f| view! { <span class="tag">{*f}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <a href=service.href() class="link-arrow">"En savoir plus " <ArrowRightIcon size=16/></a>
            </div>
        </div>
    }
}

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let service = move || params.read().get("id").and_then(|id| service_by_id(&id));

    move || match service() {
        Some(service) => view! { <ServiceDetail service=service/> }.into_any(),
        None => view! {
            <Title text="Service introuvable"/>
            <div class="page page--centered">
                <h2 class="section-title">"Service introuvable"</h2>
                <a href="/services" class="btn btn--primary">"Voir tous les services"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ServiceDetail(service: &'static Service) -> impl IntoView {
    let related = related_services(service.id, RELATED_COUNT);

    view! {
        <Title text=service.title/>
        <div class="page">
            <PageHero
                title=service.title
                subtitle=service.short_desc
                image=service.image
                accent=service.accent
            >
                <nav class="breadcrumb" aria-label="Fil d'Ariane">
                    <a href="/">"Accueil"</a>
                    <ChevronRightIcon size=14/>
                    <a href="/services">"Services"</a>
                    <ChevronRightIcon size=14/>
                    <span>{service.title}</span>
                </nav>
                <div class="page-hero__badge">
                    <ServiceIcon kind=service.icon size=32/>
                </div>
            </PageHero>

            <section class="section">
                <div class="container detail-layout">
                    <Reveal class="detail-layout__main">
                        <h2 class="section-title section-title--left">"À Propos de Ce Service"</h2>
                        <p class="lead">{service.description}</p>

                        <h3 class="subheading">"Ce que nous proposons"</h3>
                        <ul class="feature-list">
                            {service
                                .features
                                .iter()
                                .map(|f| view! {
                                    <li>
                                        <CheckCircleIcon size=20 class="feature-list__icon"/>
                                        <span>{*f}</span>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>

                        <img src=service.image alt=service.title class="detail-layout__image" loading="lazy"/>
                    </Reveal>

                    <aside class="detail-layout__aside">
                        <Reveal>
                            <div class="aside-cta">
                                <h3>"Intéressé par ce service ?"</h3>
                                <p>"Contactez-nous pour une consultation gratuite et un devis personnalisé."</p>
                                <a href="/contact" class="btn btn--primary btn--block">"Demander un Devis"</a>
                                <a href=PHONE_PRIMARY.tel class="aside-cta__phone">
                                    <PhoneIcon size=16/> {PHONE_PRIMARY.display}
                                </a>
                            </div>
                        </Reveal>

                        <Reveal delay_ms=150>
                            <div class="aside-related">
                                <h3>"Autres Services"</h3>
                                {related
                                    .into_iter()
                                    .map(|s| view! {
                                        <a href=s.href() class=format!("aside-related__item service-summary--{}", s.accent)>
                                            <span class="aside-related__icon">
                                                <ServiceIcon kind=s.icon size=18/>
                                            </span>
                                            <span>{s.title}</span>
                                            <ChevronRightIcon size=16 class="aside-related__chevron"/>
                                        </a>
                                    })
                                    .collect::<Vec<_>>()}
                                <a href="/services" class="link-arrow">
                                    "Voir tous les services " <ArrowRightIcon size=14/>
                                </a>
                            </div>
                        </Reveal>
                    </aside>
                </div>
            </section>
        </div>
    }
}
