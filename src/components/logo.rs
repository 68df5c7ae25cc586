use leptos::prelude::*;

use crate::catalog::COMPANY_NAME;

const ACCENT: &str = "#4ade80";

/// Fill colours of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPalette {
    pub background: &'static str,
    pub windows: &'static str,
    pub accent: &'static str,
}

impl LogoPalette {
    /// `light` is for dark backgrounds (home hero, footer).
    #[must_use]
    pub fn new(light: bool) -> Self {
        if light {
            Self {
                background: "rgba(255,255,255,0.15)",
                windows: "rgba(255,255,255,0.2)",
                accent: ACCENT,
            }
        } else {
            Self {
                background: "#14532d",
                windows: "#052e16",
                accent: ACCENT,
            }
        }
    }
}

/// City-skyline badge.
#[component]
pub fn Logo(
    #[prop(into, default = Signal::stored(false))] light: Signal<bool>,
    #[prop(default = 44)] size: u32,
) -> impl IntoView {
    let palette = move || LogoPalette::new(light.get());
    let windows = [15.0, 20.0, 25.0]
        .into_iter()
        .flat_map(|y| [(19.5, y), (24.0, y)])
        .map(|(x, y)| {
            view! {
                <rect x=x y=y width="3" height="2.5" rx="0.5" fill=move || palette().windows/>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 44 44"
            xmlns="http://www.w3.org/2000/svg"
            class="logo"
            aria-label=COMPANY_NAME
        >
            <rect width="44" height="44" rx="9" fill=move || palette().background/>

            <rect x="3" y="27" width="6" height="9" rx="1" fill="rgba(255,255,255,0.45)"/>
            <rect x="10" y="21" width="7" height="15" rx="1" fill="rgba(255,255,255,0.65)"/>
            <rect x="18" y="12" width="11" height="24" rx="1" fill="white"/>
            <rect x="30" y="20" width="7" height="16" rx="1" fill="rgba(255,255,255,0.65)"/>
            <rect x="38" y="26" width="3" height="10" rx="1" fill="rgba(255,255,255,0.4)"/>

            {windows}

            <rect x="0" y="40" width="44" height="4" rx="2" fill=move || palette().accent/>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_variant_is_translucent() {
        let palette = LogoPalette::new(true);
        assert!(palette.background.starts_with("rgba(255,255,255"));
        assert!(palette.windows.starts_with("rgba(255,255,255"));
    }

    #[test]
    fn dark_variant_uses_brand_greens() {
        let palette = LogoPalette::new(false);
        assert_eq!(palette.background, "#14532d");
        assert_eq!(palette.windows, "#052e16");
    }

    #[test]
    fn accent_stripe_is_constant() {
        assert_eq!(LogoPalette::new(true).accent, LogoPalette::new(false).accent);
    }
}
