use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::icons::{CloseIcon, MenuIcon, PhoneIcon};
use super::Logo;
use crate::catalog::{BRAND_BOTTOM, BRAND_TOP, PHONE_PRIMARY};

/// Scroll offset past which the home navbar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Accueil"),
    ("/a-propos", "À Propos"),
    ("/services", "Services"),
    ("/realisations", "Réalisations"),
    ("/catalogue", "Catalogue"),
    ("/contact", "Contact"),
];

/// Whether `link` should be highlighted while `path` is displayed.
///
/// The home link only matches itself; other links also match their
/// sub-pages (`/services` is active on `/services/topographie`).
#[must_use]
pub fn nav_link_active(link: &str, path: &str) -> bool {
    if link == "/" {
        return path == "/";
    }
    path.strip_prefix(link)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// The bar is see-through over the home hero until the page scrolls.
#[must_use]
pub fn is_transparent(path: &str, scroll_y: f64) -> bool {
    path == "/" && scroll_y <= SCROLL_THRESHOLD
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (is_open, set_open) = signal(false);
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| set_scroll_y.set(window().scroll_y().unwrap_or_default()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            set_scroll_y.set(window().scroll_y().unwrap_or_default());
        });
        on_cleanup(move || handle.remove());

        Effect::new(move |_| {
            let overflow = if is_open.get() { "hidden" } else { "" };
            if let Some(body) = document().body() {
                let _ = body.style().set_property("overflow", overflow);
            }
        });
        on_cleanup(|| {
            if let Some(body) = document().body() {
                let _ = body.style().remove_property("overflow");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scroll_y;

    // close the menu whenever the route changes
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_open.set(false),
        false,
    );

    let transparent = Memo::new(move |_| is_transparent(&pathname.get(), scroll_y.get()));

    let link_class = move |to: &'static str, mobile: bool| {
        move || {
            let base = if mobile { "nav-link nav-link--mobile" } else { "nav-link" };
            if nav_link_active(to, &pathname.get()) {
                format!("{base} nav-link--active")
            } else {
                base.to_string()
            }
        }
    };

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|&(to, label)| view! { <a href=to class=link_class(to, mobile)>{label}</a> })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar" class:navbar--transparent=move || transparent.get()>
            <div class="container navbar__inner">
                <a href="/" class="navbar__brand">
                    <Logo light=transparent size=44/>
                    <div>
                        <div class="navbar__brand-top">{BRAND_TOP}</div>
                        <div class="navbar__brand-bottom">{BRAND_BOTTOM}</div>
                    </div>
                </a>

                <nav class="navbar__links">{links(false)}</nav>

                <div class="navbar__actions">
                    <a href=PHONE_PRIMARY.tel class="navbar__phone">
                        <PhoneIcon size=16/>
                        {PHONE_PRIMARY.short}
                    </a>
                    <a href="/contact" class="btn btn--primary btn--small navbar__cta">
                        "Devis Gratuit"
                    </a>
                    <button
                        class="navbar__toggle"
                        aria-label="Menu"
                        aria-expanded=move || is_open.get().to_string()
                        on:click=move |_| set_open.update(|open| *open = !*open)
                    >
                        {move || if is_open.get() {
                            view! { <CloseIcon size=24/> }.into_any()
                        } else {
                            view! { <MenuIcon size=24/> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || is_open.get()>
                <div class="navbar__menu">
                    {links(true)}
                    <div class="navbar__menu-footer">
                        <a href=PHONE_PRIMARY.tel class="navbar__menu-phone">
                            <PhoneIcon size=16/>
                            {PHONE_PRIMARY.short}
                        </a>
                        <a href="/contact" class="btn btn--primary btn--block">
                            "Demander un Devis Gratuit"
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_matches_exactly() {
        assert!(nav_link_active("/", "/"));
        assert!(!nav_link_active("/", "/services"));
        assert!(!nav_link_active("/", "/contact"));
    }

    #[test]
    fn section_links_match_sub_pages() {
        assert!(nav_link_active("/services", "/services"));
        assert!(nav_link_active("/services", "/services/genie-civil"));
        assert!(!nav_link_active("/services", "/servicesx"));
        assert!(!nav_link_active("/services", "/"));
        assert!(!nav_link_active("/contact", "/catalogue"));
    }

    #[test]
    fn exactly_one_link_active_per_page() {
        for path in ["/", "/a-propos", "/services/architecture", "/realisations", "/catalogue", "/contact"] {
            let active = NAV_LINKS
                .iter()
                .filter(|(to, _)| nav_link_active(to, path))
                .count();
            assert_eq!(active, 1, "{path}");
        }
    }

    #[test]
    fn transparent_only_at_top_of_home() {
        assert!(is_transparent("/", 0.0));
        assert!(is_transparent("/", 50.0));
        assert!(!is_transparent("/", 50.5));
        assert!(!is_transparent("/services", 0.0));
        assert!(!is_transparent("/contact", 400.0));
    }
}
