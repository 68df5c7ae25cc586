use leptos::prelude::*;

use super::icons::{ArrowRightIcon, ServiceIcon};
use crate::catalog::Service;

/// Image tile linking to a service detail page.
#[component]
pub fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <a href=service.href() class=format!("service-card service-card--{}", service.accent)>
            <div class="service-card__media">
                <img src=service.image alt=service.title loading="lazy"/>
            </div>
            <div class="service-card__body">
                <div class="service-card__heading">
                    <span class="service-card__icon">
                        <ServiceIcon kind=service.icon size=14/>
                    </span>
                    <h3>{service.title}</h3>
                </div>
                <p class="service-card__desc">{service.short_desc}</p>
                <span class="service-card__more">"En savoir plus " <ArrowRightIcon size=12/></span>
            </div>
        </a>
    }
}
