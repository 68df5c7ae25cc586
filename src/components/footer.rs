use chrono::{DateTime, Datelike, TimeZone, Utc};
use leptos::prelude::*;

use super::icons::{MailIcon, MapPinIcon, PhoneIcon};
use super::navbar::NAV_LINKS;
use super::Logo;
use crate::catalog::{
    services, ADDRESS, BRAND_BOTTOM, BRAND_TOP, COMPANY_NAME, EMAIL, EMAIL_HREF, FOUNDED,
    OPENING_HOURS, PHONE_PRIMARY, PHONE_SECONDARY,
};

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {COMPANY_NAME}. Tous droits réservés.")
}

/// Copyright year, taken in UTC.
#[must_use]
pub fn copyright_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.with_timezone(&Utc).year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(&Utc::now());
    // the services page has its own nav entry
    let quick_links = NAV_LINKS.iter().filter(|(to, _)| *to != "/services");

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <Logo light=true size=44/>
                        <div>
                            <div class="footer__brand-top">{BRAND_TOP}</div>
                            <div class="footer__brand-bottom">{BRAND_BOTTOM}</div>
                        </div>
                    </div>
                    <p class="footer__about">
                        "Bureau d'étude multi-services spécialisé en génie civil, électrique, architecture et topographie. Votre partenaire au Cameroun depuis "
                        {FOUNDED} "."
                    </p>
                    <div class="footer__hours">{OPENING_HOURS}</div>
                </div>

                <div>
                    <h3 class="footer__heading">"Nos Services"</h3>
                    <ul class="footer__list">
                        {services()
                            .iter()
                            .map(|s| view! { <li><a href=s.href()>{s.label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div>
                    <h3 class="footer__heading">"Navigation"</h3>
                    <ul class="footer__list">
                        {quick_links
                            .map(|&(to, label)| view! { <li><a href=to>{label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div>
                    <h3 class="footer__heading">"Contact"</h3>
                    <ul class="footer__contact">
                        <li>
                            <PhoneIcon size=15 class="footer__icon"/>
                            <div>
                                <a href=PHONE_PRIMARY.tel>{PHONE_PRIMARY.display}</a>
                                <a href=PHONE_SECONDARY.tel>{PHONE_SECONDARY.display}</a>
                            </div>
                        </li>
                        <li>
                            <MailIcon size=15 class="footer__icon"/>
                            <a href=EMAIL_HREF>{EMAIL}</a>
                        </li>
                        <li>
                            <MapPinIcon size=15 class="footer__icon"/>
                            <span>{ADDRESS}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer__bottom">
                <div class="container footer__bottom-inner">
                    <p class="footer__copyright">{copyright_line(year)}</p>
                    <p class="footer__founded">"Fondée en " {FOUNDED} " · " {ADDRESS}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::service_by_id;

    #[test]
    fn copyright_mentions_year_and_company() {
        assert_eq!(
            copyright_line(2025),
            "© 2025 New Generation Engineering BTP MS. Tous droits réservés."
        );
    }

    #[test]
    fn year_independent_of_time_zone() {
        let douala = DateTime::parse_from_rfc3339("2025-12-31T23:30:00+01:00").unwrap();
        let montreal = DateTime::parse_from_rfc3339("2025-12-31T17:30:00-05:00").unwrap();
        assert_eq!(douala, montreal);
        assert_eq!(copyright_year(&douala), 2025);
        assert_eq!(copyright_year(&montreal), 2025);

        let after = DateTime::parse_from_rfc3339("2025-12-31T20:00:00-05:00").unwrap();
        assert_eq!(copyright_year(&after), 2026);
    }

    #[test]
    fn service_links_resolve() {
        for service in services() {
            let id = service.href().trim_start_matches("/services/").to_string();
            assert!(service_by_id(&id).is_some(), "{id}");
        }
    }
}
