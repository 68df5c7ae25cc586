use leptos::prelude::*;

use super::{ProjectCard, Reveal};
use crate::catalog::Project;

#[must_use]
pub fn results_label(count: usize) -> String {
    format!("{count} projet(s) trouvé(s)")
}

#[component]
pub fn ProjectGrid(projects: Vec<&'static Project>) -> impl IntoView {
    view! {
        <p class="results-count">{results_label(projects.len())}</p>
        <div class="card-grid card-grid--three">
            {projects
                .into_iter()
                .map(|p| view! {
                    <Reveal>
                        <ProjectCard project=p/>
                    </Reveal>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ProjectGridEmpty(#[prop(into)] on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art" aria-hidden="true">
                <circle cx="100" cy="100" r="80" fill="none" stroke="#bbf7d0" stroke-width="1"/>
                <circle cx="100" cy="100" r="60" fill="none" stroke="#bbf7d0" stroke-width="1"/>
                <circle cx="100" cy="100" r="40" fill="none" stroke="#bbf7d0" stroke-width="1"/>
                <line x1="20" y1="100" x2="180" y2="100" stroke="#bbf7d0" stroke-width="1"/>
                <line x1="100" y1="20" x2="100" y2="180" stroke="#bbf7d0" stroke-width="1"/>
                <circle cx="100" cy="100" r="8" fill="#4ade80" fill-opacity="0.4"/>
            </svg>
            <h3>"Aucun projet trouvé"</h3>
            <p>"Essayez une autre catégorie ou recherche."</p>
            <button class="btn btn--primary" on:click=move |_| on_reset.run(())>
                "Réinitialiser les filtres"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_label_counts() {
        assert_eq!(results_label(0), "0 projet(s) trouvé(s)");
        assert_eq!(results_label(9), "9 projet(s) trouvé(s)");
    }
}
