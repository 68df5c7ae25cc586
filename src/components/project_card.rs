use leptos::prelude::*;

use super::icons::{ArrowRightIcon, MapPinIcon, RulerIcon};
use super::Modal;
use crate::catalog::Project;

/// Tags shown over the card thumbnail.
const CARD_TAGS: usize = 2;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (show_detail, set_show_detail) = signal(false);

    view! {
        <article class="card project-card" on:click=move |_| set_show_detail.set(true)>
            <div class="project-card__media">
                <img src=project.image alt=project.title loading="lazy"/>
                <span class="badge project-card__year">{project.year}</span>
                <div class="project-card__tags">
                    {project
                        .tags
                        .iter()
                        .take(CARD_TAGS)
                        .map(|tag| view! { <span class="tag tag--glass">{*tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="project-card__body">
                <h3>{project.title}</h3>
                <p class="project-card__desc">{project.description}</p>
                <div class="project-card__meta">
                    <span><MapPinIcon size=12/> {project.location}</span>
                    <span><RulerIcon size=12/> {project.surface}</span>
                </div>
            </div>
        </article>

        <Show when=move || show_detail.get()>
            <ProjectDetail project=project on_close=move |()| set_show_detail.set(false)/>
        </Show>
    }
}

#[component]
fn ProjectDetail(project: &'static Project, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let facts = [
        ("Localisation", project.location.to_string()),
        ("Année", project.year.to_string()),
        ("Surface", project.surface.to_string()),
        ("Client", project.client.to_string()),
    ];

    view! {
        <Modal on_close=on_close>
            <div class="project-detail__media">
                <img src=project.image alt=project.title/>
                <span class="badge project-detail__year">{project.year}</span>
            </div>
            <div class="project-detail__body">
                <div class="tag-list">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect::<Vec<_>>()}
                </div>
                <h2>{project.title}</h2>
                <p>{project.description}</p>
                <dl class="fact-grid">
                    {facts
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="fact">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </dl>
                <a href="/contact" class="btn btn--primary btn--block" on:click=move |_| on_close.run(())>
                    "Projet Similaire ? Contactez-nous " <ArrowRightIcon size=18/>
                </a>
            </div>
        </Modal>
    }
}
