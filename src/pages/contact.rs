use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::catalog::{
    ADDRESS, EMAIL, EMAIL_HREF, INTERVENTION_ZONES, MAP_EMBED_URL, OPENING_HOURS, PHONE_PRIMARY,
    PHONE_SECONDARY, WHATSAPP_URL,
};
use crate::components::icons::{
    CheckCircleIcon, ClockIcon, MailIcon, MapPinIcon, MessageCircleIcon, PhoneIcon, SendIcon,
    SpinnerIcon,
};
use crate::components::{PageHero, Reveal};
use crate::contact::{
    validate, ContactField, ContactForm, FieldErrors, PlanQuery, SubmitContact, BUDGET_CHOICES,
    SERVICE_CHOICES,
};

const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/9301291/pexels-photo-9301291.jpeg?auto=compress&cs=tinysrgb&w=1600";

const FALLBACK_FAILURE: &str = "Impossible d'envoyer le message pour le moment";

/// Message shown when the server refused or failed to deliver.
#[must_use]
pub fn failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        _ => FALLBACK_FAILURE.to_string(),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let query = use_query_map();
    let prefill = query.with_untracked(|q| PlanQuery {
        plan: q.get("plan"),
        surface: q.get("surface"),
        total: q.get("total"),
    });

    let form = RwSignal::new(ContactForm::prefilled(&prefill));
    let errors = RwSignal::new(FieldErrors::default());
    let submit = ServerAction::<SubmitContact>::new();

    view! {
        <Title text="Contact"/>
        <div class="page">
            <PageHero
                eyebrow="Contactez-Nous"
                title="Parlons de Votre Projet"
                subtitle="Notre équipe d'experts est prête à vous accompagner. Contactez-nous pour une consultation gratuite."
                image=HERO_IMAGE
            />

            <section class="section">
                <div class="container contact-layout">
                    <Reveal class="contact-layout__aside">
                        <ContactInfo/>
                        <QuickActions/>
                    </Reveal>

                    <Reveal class="contact-layout__main">
                        {move || match submit.value().get() {
                            Some(Ok(receipt)) => view! {
                                <div class="thanks">
                                    <div class="thanks__icon"><CheckCircleIcon size=40/></div>
                                    <h2>"Message Envoyé !"</h2>
                                    <p>"Merci pour votre message, " <strong>{receipt.name}</strong> "."</p>
                                    <p>"Notre équipe vous contactera dans les 24 heures."</p>
                                    <p class="muted">"Référence : " {receipt.reference}</p>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| {
                                            form.set(ContactForm::default());
                                            submit.value().set(None);
                                        }
                                    >
                                        "Envoyer un autre message"
                                    </button>
                                </div>
                            }
                            .into_any(),
                            _ => view! { <ContactFormView form=form errors=errors submit=submit/> }.into_any(),
                        }}
                    </Reveal>
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    <Reveal class="section-header">
                        <h2 class="section-title">"Où Nous Trouver"</h2>
                        <p>{ADDRESS} " – Interventions sur tout le territoire national"</p>
                    </Reveal>
                    <Reveal>
                        <div class="map">
                            <iframe
                                title="New Generation BTP Location"
                                src=MAP_EMBED_URL
                                width="100%"
                                height="100%"
                                style="border: 0"
                                allowfullscreen=""
                                {..::leptos::tachys::html::attribute::loading("lazy")}
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal class="section-header">
                        <h2 class="section-title">"Zones d'Intervention"</h2>
                        <p>"Nous intervenons dans toutes les régions du Cameroun"</p>
                    </Reveal>
                    <Reveal class="zone-list">
                        {INTERVENTION_ZONES
                            .iter()
                            .enumerate()
                            .map(|(i, city)| {
                                let highlight = i + 1 == INTERVENTION_ZONES.len();
                                view! {
                                    <span class="zone" class:zone--highlight=highlight>
                                        <MapPinIcon size=14/> {*city}
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="info-card">
            <h2>"Informations de Contact"</h2>
            <div class="info-card__row">
                <span class="info-card__icon"><PhoneIcon size=18/></span>
                <div>
                    <p class="info-card__label">"Téléphone"</p>
                    <a href=PHONE_PRIMARY.tel>{PHONE_PRIMARY.display}</a>
                    <a href=PHONE_SECONDARY.tel>{PHONE_SECONDARY.display}</a>
                </div>
            </div>
            <div class="info-card__row">
                <span class="info-card__icon"><MailIcon size=18/></span>
                <div>
                    <p class="info-card__label">"Email"</p>
                    <a href=EMAIL_HREF>{EMAIL}</a>
                </div>
            </div>
            <div class="info-card__row">
                <span class="info-card__icon"><MapPinIcon size=18/></span>
                <div>
                    <p class="info-card__label">"Adresse"</p>
                    <p>{ADDRESS}</p>
                </div>
            </div>
            <div class="info-card__row">
                <span class="info-card__icon"><ClockIcon size=18/></span>
                <div>
                    <p class="info-card__label">"Heures d'ouverture"</p>
                    <p>{OPENING_HOURS}</p>
                    <p class="info-card__note">"Urgences : 24h/24"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <div class="quick-actions">
            <h3>"Réponse Rapide"</h3>
            <a href=PHONE_PRIMARY.tel class="quick-actions__item">
                <span class="quick-actions__icon"><PhoneIcon size=18/></span>
                <div>
                    <div class="quick-actions__title">"Appel Direct"</div>
                    <div class="muted">"Réponse immédiate"</div>
                </div>
            </a>
            <a href=WHATSAPP_URL target="_blank" rel="noopener noreferrer" class="quick-actions__item">
                <span class="quick-actions__icon"><MessageCircleIcon size=18/></span>
                <div>
                    <div class="quick-actions__title">"WhatsApp"</div>
                    <div class="muted">"Messagerie instantanée"</div>
                </div>
            </a>
        </div>
    }
}

#[component]
fn ContactFormView(
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
    submit: ServerAction<SubmitContact>,
) -> impl IntoView {
    let pending = submit.pending();

    // editing a field clears its error
    let edit = move |field: ContactField, value: String| {
        form.update(|f| f.set(field, value));
        errors.update(|e| e.clear(field));
    };
    let value_of = move |field: ContactField| move || form.with(|f| f.get(field).to_string());
    let invalid = move |field: ContactField| move || errors.with(|e| e.get(field).is_some());
    let error_of = move |field: ContactField| {
        move || errors.with(|e| e.get(field)).map(|m| view! { <p class="field-error">{m}</p> })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        match validate(&current) {
            Err(found) => errors.set(found),
            Ok(()) => {
                errors.set(FieldErrors::default());
                submit.dispatch(SubmitContact { form: current });
            }
        }
    };

    let text_input = move |field: ContactField, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                type=kind
                class="input"
                class:input--invalid=invalid(field)
                placeholder=placeholder
                prop:value=value_of(field)
                on:input=move |ev| edit(field, event_target_value(&ev))
            />
            {error_of(field)}
        }
    };

    view! {
        <h2 class="form-title">"Envoyez-nous un Message"</h2>
        <p class="muted">"Remplissez ce formulaire et nous vous répondrons dans les meilleurs délais."</p>

        {move || submit.value().get().and_then(Result::err).map(|err| view! {
            <div class="alert alert--error" role="alert">{failure_message(&err)}</div>
        })}

        <form class="contact-form" on:submit=on_submit novalidate=true>
            <div class="form-row">
                <label class="field">
                    <span>"Nom complet " <span class="required">"*"</span></span>
                    {text_input(ContactField::Name, "text", "Jean Dupont")}
                </label>
                <label class="field">
                    <span>"Email " <span class="required">"*"</span></span>
                    {text_input(ContactField::Email, "email", "vous@exemple.com")}
                </label>
            </div>

            <div class="form-row">
                <label class="field">
                    <span>"Téléphone " <span class="required">"*"</span></span>
                    {text_input(ContactField::Phone, "tel", "+237 6XX XXX XXX")}
                </label>
                <label class="field">
                    <span>"Service concerné"</span>
                    <select
                        class="input"
                        prop:value=value_of(ContactField::Service)
                        on:change=move |ev| edit(ContactField::Service, event_target_value(&ev))
                    >
                        <option value="">"Sélectionner un service..."</option>
                        {SERVICE_CHOICES
                            .iter()
                            .map(|s| view! {
                                <option value=*s selected=move || form.with(|f| f.service == *s)>{*s}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <div class="form-row">
                <label class="field">
                    <span>"Objet"</span>
                    {text_input(ContactField::Subject, "text", "Objet de votre demande")}
                </label>
                <label class="field">
                    <span>"Budget estimé (FCFA)"</span>
                    <select
                        class="input"
                        prop:value=value_of(ContactField::Budget)
                        on:change=move |ev| edit(ContactField::Budget, event_target_value(&ev))
                    >
                        <option value="">"Budget approximatif..."</option>
                        {BUDGET_CHOICES
                            .iter()
                            .map(|(value, label)| view! {
                                <option value=*value selected=move || form.with(|f| f.budget == *value)>{*label}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <label class="field">
                <span>"Message " <span class="required">"*"</span></span>
                <textarea
                    class="input input--area"
                    class:input--invalid=invalid(ContactField::Message)
                    rows="6"
                    placeholder="Décrivez votre projet, vos besoins, votre localisation..."
                    prop:value=value_of(ContactField::Message)
                    on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                ></textarea>
                {error_of(ContactField::Message)}
            </label>

            <button type="submit" class="btn btn--primary btn--block btn--large" disabled=move || pending.get()>
                {move || if pending.get() {
                    view! { <SpinnerIcon size=20 class="spin"/> "Envoi en cours..." }.into_any()
                } else {
                    view! { <SendIcon size=18/> "Envoyer le Message" }.into_any()
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ServerFnError::new("Impossible d'envoyer le message pour le moment");
        assert_eq!(failure_message(&err), FALLBACK_FAILURE);

        let err = ServerFnError::new("Email invalide");
        assert_eq!(failure_message(&err), "Email invalide");
    }

    #[test]
    fn transport_errors_get_generic_message() {
        let err = ServerFnError::Request("connection reset".to_string());
        assert_eq!(failure_message(&err), FALLBACK_FAILURE);
    }
}
