use leptos::prelude::*;

use super::icons::{CalculatorIcon, StarIcon};
use crate::catalog::ArchitecturalPlan;
use crate::estimator::format_fcfa;

#[component]
pub fn PlanCard(
    plan: &'static ArchitecturalPlan,
    #[prop(into)] on_select: Callback<&'static ArchitecturalPlan>,
) -> impl IntoView {
    view! {
        <div class="card plan-card" class:plan-card--popular=plan.popular>
            {plan.popular.then(|| view! {
                <span class="badge plan-card__popular"><StarIcon size=12/> "Populaire"</span>
            })}
            <div class="plan-card__media">
                <img src=plan.image alt=plan.name loading="lazy"/>
                <span class="tag tag--glass plan-card__style">{plan.style}</span>
            </div>
            <div class="plan-card__body">
                <div class="plan-card__heading">
                    <div>
                        <h3>{plan.name}</h3>
                        <p class="muted">{format!("{} • {} m² de base", plan.plan_type, plan.base_surface)}</p>
                    </div>
                    {(plan.floors > 0).then(|| view! { <span class="tag">{format!("R+{}", plan.floors)}</span> })}
                </div>

                <p class="plan-card__desc">{plan.description}</p>

                <div class="plan-card__specs">
                    {(plan.rooms > 0).then(|| view! {
                        <div class="spec"><strong>{plan.rooms}</strong><span>"Chambres"</span></div>
                    })}
                    <div class="spec"><strong>{plan.bathrooms}</strong><span>"SDB"</span></div>
                    <div class="spec"><strong>{format!("{}m²", plan.base_surface)}</strong><span>"Surface"</span></div>
                </div>

                <div class="plan-card__price">
                    <p class="muted">"Prix de base estimatif"</p>
                    <p class="plan-card__amount">{format_fcfa(plan.base_price)}</p>
                    <p class="plan-card__rate">{format!("{} / m²", format_fcfa(plan.price_per_m2))}</p>
                </div>

                <button class="btn btn--primary btn--block" on:click=move |_| on_select.run(plan)>
                    <CalculatorIcon size=16/> "Personnaliser & Estimer"
                </button>
            </div>
        </div>
    }
}
