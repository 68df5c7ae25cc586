use leptos::prelude::*;

use super::icons::{ArrowRightIcon, CalculatorIcon, CheckIcon, MinusIcon, PhoneIcon, PlusIcon};
use super::Modal;
use crate::catalog::{plan_options, ArchitecturalPlan, PHONE_PRIMARY};
use crate::estimator::{contact_link, estimate, format_fcfa, Selection, SurfaceRange};

/// Interactive cost estimate for one plan.
///
/// Surface moves in steps between the plan's base surface and three times
/// that; options toggle on and off. The total updates on every change and
/// "Demander ce Plan" carries it to the contact form.
#[component]
pub fn PlanEstimator(
    plan: &'static ArchitecturalPlan,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let range = SurfaceRange::for_plan(plan);
    let surface = RwSignal::new(range.min);
    let selection = RwSignal::new(Selection::new());

    let current = Memo::new(move |_| selection.with(|s| estimate(plan, surface.get(), s)));

    view! {
        <Modal on_close=on_close class="estimator">
            <header class="estimator__header">
                <CalculatorIcon size=24 class="text-accent"/>
                <div>
                    <h2>{plan.name}</h2>
                    <p>"Estimateur de coût personnalisé"</p>
                </div>
            </header>

            <div class="estimator__body">
                <section>
                    <h3 class="subheading">"Surface habitable (m²)"</h3>
                    <div class="stepper">
                        <button
                            class="stepper__btn"
                            aria-label="Réduire la surface"
                            disabled=move || surface.get() <= range.min
                            on:click=move |_| surface.update(|s| *s = range.step_down(*s))
                        >
                            <MinusIcon size=16/>
                        </button>
                        <div class="stepper__value">
                            <span>{move || surface.get()}</span>
                            <small>" m²"</small>
                        </div>
                        <button
                            class="stepper__btn"
                            aria-label="Augmenter la surface"
                            disabled=move || surface.get() >= range.max
                            on:click=move |_| surface.update(|s| *s = range.step_up(*s))
                        >
                            <PlusIcon size=16/>
                        </button>
                    </div>
                    <input
                        type="range"
                        class="range"
                        min=range.min
                        max=range.max
                        step=range.step
                        prop:value=move || surface.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                surface.set(range.clamp(value));
                            }
                        }
                    />
                    <div class="range-labels">
                        <span>{format!("{} m² (base)", range.min)}</span>
                        <span>{format!("{} m² (max)", range.max)}</span>
                    </div>
                </section>

                <section>
                    <h3 class="subheading">"Options supplémentaires"</h3>
                    <div class="option-grid">
                        {plan_options()
                            .iter()
                            .map(|option| {
                                let key = option.key;
                                let selected = move || selection.with(|s| s.contains(key));
                                view! {
                                    <button
                                        class="option"
                                        class:option--selected=selected
                                        aria-pressed=move || selected().to_string()
                                        on:click=move |_| selection.update(|s| s.toggle(key))
                                    >
                                        <span class="option__check">
                                            <Show when=selected><CheckIcon size=14/></Show>
                                        </span>
                                        <span class="option__text">
                                            <span class="option__label">{option.label}</span>
                                            <span class="option__price">{format!("+{}", format_fcfa(option.price))}</span>
                                        </span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="summary">
                    <h3 class="subheading">"Récapitulatif"</h3>
                    <div class="summary__line">
                        <span>{format!("Prix de base ({} m²)", plan.base_surface)}</span>
                        <strong>{format_fcfa(plan.base_price)}</strong>
                    </div>
                    {move || {
                        let est = current.get();
                        (est.extra_surface > 0).then(|| view! {
                            <div class="summary__line">
                                <span>{format!("Extension de surface (+{} m²)", est.extra_surface)}</span>
                                <strong>{format_fcfa(est.surface_price)}</strong>
                            </div>
                        })
                    }}
                    {move || {
                        current
                            .get()
                            .options
                            .into_iter()
                            .map(|line| view! {
                                <div class="summary__line">
                                    <span>{line.label}</span>
                                    <strong>{format!("+{}", format_fcfa(line.price))}</strong>
                                </div>
                            })
                            .collect::<Vec<_>>()
                    }}
                    <div class="summary__total">
                        <span>"Estimation Totale"</span>
                        <strong>{move || format_fcfa(current.get().total)}</strong>
                    </div>
                    <p class="summary__note">
                        "* Cette estimation est indicative. Un devis précis sera établi après étude de votre terrain et spécifications."
                    </p>
                </section>

                <section>
                    <h3 class="subheading">"Inclus dans ce plan"</h3>
                    <ul class="check-list">
                        {plan
                            .features
                            .iter()
                            .map(|f| view! { <li><CheckIcon size=16 class="text-accent"/> {*f}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                <div class="button-row">
                    <a
                        href=move || contact_link(plan, &current.get())
                        class="btn btn--primary"
                        on:click=move |_| on_close.run(())
                    >
                        "Demander ce Plan " <ArrowRightIcon size=18/>
                    </a>
                    <a href=PHONE_PRIMARY.tel class="btn btn--secondary">
                        <PhoneIcon size=18/> "Appeler un Expert"
                    </a>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::catalog::plan_by_id;

    #[test]
    fn renders_request_link_inside_panel() {
        let owner = Owner::new();
        owner.set();
        let plan = plan_by_id("villa-emeraude").unwrap();

        let html = view! { <PlanEstimator plan=plan on_close=|()| {}/> }.to_html();

        let panel = html.find("modal__panel estimator").unwrap();
        let link = html.find("/contact?plan=Villa%20%C3%89meraude").unwrap();
        assert!(link > panel);
        assert!(html.contains(&format_fcfa(plan.base_price)));
    }
}
