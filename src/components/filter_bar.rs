use leptos::prelude::*;

use super::icons::SearchIcon;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: &'static str,
    pub active: bool,
}

/// Marks the chip equal to `active`; the first chip wins when none match.
#[must_use]
pub fn filter_options(values: &[&'static str], active: &str) -> Vec<FilterOption> {
    let any_match = values.contains(&active);
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| FilterOption {
            value,
            active: if any_match { value == active } else { i == 0 },
        })
        .collect()
}

/// Category chips with an optional free-text search box.
#[component]
pub fn FilterBar(
    options: Vec<&'static str>,
    #[prop(into)] active: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
    /// Search box contents; the box is hidden when absent
    #[prop(optional, into)]
    query: Option<Signal<String>>,
    #[prop(optional, into)] on_query: Option<Callback<String>>,
    #[prop(default = "Filtrer :")] label: &'static str,
) -> impl IntoView {
    let chips = move || {
        filter_options(&options, &active.get())
            .into_iter()
            .map(|opt| {
                let class = if opt.active { "chip chip--active" } else { "chip" };
                view! {
                    <button class=class on:click=move |_| on_select.run(opt.value.to_string())>
                        {opt.value}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="filter-bar">
            <span class="filter-bar__label"><SearchIcon size=16/> {label}</span>
            <div class="filter-bar__chips">{chips}</div>
            {query.map(|query| view! {
                <input
                    type="search"
                    class="input filter-bar__search"
                    placeholder="Rechercher..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        if let Some(on_query) = on_query {
                            on_query.run(event_target_value(&ev));
                        }
                    }
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: &[&str] = &["Tous", "Villa", "Duplex"];

    #[test]
    fn active_chip_follows_value() {
        let options = filter_options(VALUES, "Duplex");
        let active: Vec<_> = options.iter().filter(|o| o.active).map(|o| o.value).collect();
        assert_eq!(active, ["Duplex"]);
    }

    #[test]
    fn unknown_value_falls_back_to_first() {
        let options = filter_options(VALUES, "Château");
        assert!(options[0].active);
        assert_eq!(options.iter().filter(|o| o.active).count(), 1);
    }
}
