use leptos::prelude::*;

use super::icons::{ArrowRightIcon, MessageCircleIcon, PhoneIcon};
use crate::catalog::{PHONE_PRIMARY, WHATSAPP_URL};

/// Call / WhatsApp / quote shortcuts pinned to the bottom on small screens.
#[component]
pub fn MobileBottomBar() -> impl IntoView {
    view! {
        <div class="mobile-bar">
            <div class="mobile-bar__inner">
                <a href=PHONE_PRIMARY.tel class="mobile-bar__action">
                    <PhoneIcon size=20/>
                    <span>"Appeler"</span>
                </a>
                <a href=WHATSAPP_URL target="_blank" rel="noopener noreferrer" class="mobile-bar__action mobile-bar__action--whatsapp">
                    <MessageCircleIcon size=20/>
                    <span>"WhatsApp"</span>
                </a>
                <a href="/contact" class="mobile-bar__quote">
                    "Devis Gratuit" <ArrowRightIcon size=15/>
                </a>
            </div>
        </div>
    }
}
