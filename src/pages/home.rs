use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{services, HOME_STATS, FOUNDED, PHONE_PRIMARY};
use crate::components::icons::{ArrowRightIcon, PhoneIcon};
use crate::components::{Reveal, ServiceCard};

const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/5298215/pexels-photo-5298215.jpeg?auto=compress&cs=tinysrgb&w=1600";
const CTA_IMAGE: &str =
    "https://images.pexels.com/photos/8961125/pexels-photo-8961125.jpeg?auto=compress&cs=tinysrgb&w=1200";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Accueil"/>
        <div class="home">
            <section class="hero" style=format!("background-image: url({HERO_IMAGE})")>
                <div class="hero__overlay"></div>
                <div class="hero__content">
                    <p class="eyebrow">"Bureau d'Étude Multi-Services · Fondé en " {FOUNDED}</p>
                    <h1 class="hero__title">
                        "Bâtissons l'Avenir" <br/>
                        <span class="text-accent">"Ensemble"</span>
                    </h1>
                    <p class="hero__lead">
                        "Votre partenaire de confiance pour tous vos projets de construction, d'ingénierie et d'architecture au Cameroun."
                    </p>
                    <div class="hero__actions">
                        <a href="/contact" class="btn btn--primary btn--large">
                            "Demander un Devis Gratuit " <ArrowRightIcon size=18/>
                        </a>
                        <a href="/realisations" class="btn btn--outline-light btn--large">
                            "Voir nos Réalisations"
                        </a>
                    </div>
                </div>
            </section>

            <section class="stats-strip">
                <div class="container stats-strip__grid">
                    {HOME_STATS
                        .iter()
                        .map(|s| view! {
                            <div class="stat">
                                <div class="stat__value">{s.value}</div>
                                <div class="stat__label">{s.label}</div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal class="section-header" offset_px=20>
                        <span class="eyebrow eyebrow--ruled">"Expertise"</span>
                        <h2 class="section-title">"Nos Domaines d'Expertise"</h2>
                    </Reveal>

                    <div class="card-grid card-grid--four">
                        {services()
                            .iter()
                            .zip((0u32..).step_by(50))
                            .map(|(service, delay)| view! {
                                <Reveal delay_ms=delay offset_px=20>
                                    <ServiceCard service=service/>
                                </Reveal>
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <Reveal class="section-footer" offset_px=20>
                        <a href="/services" class="btn btn--secondary">
                            "Voir tous nos Services " <ArrowRightIcon size=16/>
                        </a>
                    </Reveal>
                </div>
            </section>

            <section class="cta-band" style=format!("background-image: url({CTA_IMAGE})")>
                <div class="cta-band__overlay"></div>
                <div class="cta-band__content">
                    <Reveal>
                        <h2>"Vous avez un projet de construction ?"</h2>
                        <p>
                            "Contactez-nous pour une consultation gratuite. Notre équipe est disponible pour vous accompagner à chaque étape."
                        </p>
                        <div class="hero__actions">
                            <a href="/contact" class="btn btn--primary btn--large">
                                "Demander un Devis " <ArrowRightIcon size=18/>
                            </a>
                            <a href=PHONE_PRIMARY.tel class="btn btn--outline-light btn--large">
                                <PhoneIcon size=18/> {PHONE_PRIMARY.display}
                            </a>
                        </div>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
