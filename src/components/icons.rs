//! Inline stroke icons (24×24 grid, `currentColor`).

use leptos::prelude::*;

use crate::catalog::IconKind;

#[component]
fn Icon(size: u32, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

macro_rules! icon {
    ($name:ident, $($body:tt)*) => {
        #[component]
        pub fn $name(
            #[prop(default = 20)] size: u32,
            #[prop(optional)] class: &'static str,
        ) -> impl IntoView {
            view! { <Icon size=size class=class>$($body)*</Icon> }
        }
    };
}

icon!(PhoneIcon,
    <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>
);

icon!(MailIcon,
    <rect x="2" y="4" width="20" height="16" rx="2"/>
    <path d="m22 7-10 6L2 7"/>
);

icon!(MapPinIcon,
    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/>
    <circle cx="12" cy="10" r="3"/>
);

icon!(ArrowRightIcon,
    <line x1="5" y1="12" x2="19" y2="12"/>
    <polyline points="12 5 19 12 12 19"/>
);

icon!(ChevronRightIcon, <polyline points="9 18 15 12 9 6"/>);

icon!(CheckIcon, <polyline points="20 6 9 17 4 12"/>);

icon!(CheckCircleIcon,
    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
    <polyline points="22 4 12 14.01 9 11.01"/>
);

icon!(CloseIcon,
    <line x1="18" y1="6" x2="6" y2="18"/>
    <line x1="6" y1="6" x2="18" y2="18"/>
);

icon!(MenuIcon,
    <line x1="4" y1="6" x2="20" y2="6"/>
    <line x1="4" y1="12" x2="20" y2="12"/>
    <line x1="4" y1="18" x2="20" y2="18"/>
);

icon!(PlusIcon,
    <line x1="12" y1="5" x2="12" y2="19"/>
    <line x1="5" y1="12" x2="19" y2="12"/>
);

icon!(MinusIcon, <line x1="5" y1="12" x2="19" y2="12"/>);

icon!(CalculatorIcon,
    <rect x="4" y="2" width="16" height="20" rx="2"/>
    <line x1="8" y1="6" x2="16" y2="6"/>
    <line x1="16" y1="14" x2="16" y2="18"/>
    <path d="M16 10h.01M12 10h.01M8 10h.01M12 14h.01M8 14h.01M12 18h.01M8 18h.01"/>
);

icon!(StarIcon,
    <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
);

icon!(ClockIcon,
    <circle cx="12" cy="12" r="10"/>
    <polyline points="12 6 12 12 16 14"/>
);

icon!(SendIcon,
    <line x1="22" y1="2" x2="11" y2="13"/>
    <polygon points="22 2 15 22 11 13 2 9 22 2"/>
);

icon!(SearchIcon,
    <circle cx="11" cy="11" r="8"/>
    <line x1="21" y1="21" x2="16.65" y2="16.65"/>
);

icon!(MessageCircleIcon,
    <path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"/>
);

icon!(RulerIcon,
    <path d="M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.41 2.41 0 0 1 0-3.4l2.6-2.6a2.41 2.41 0 0 1 3.4 0z"/>
    <path d="m14.5 12.5 2-2M11.5 9.5l2-2M8.5 6.5l2-2M17.5 15.5l2-2"/>
);

icon!(CalendarIcon,
    <rect x="3" y="4" width="18" height="18" rx="2"/>
    <line x1="16" y1="2" x2="16" y2="6"/>
    <line x1="8" y1="2" x2="8" y2="6"/>
    <line x1="3" y1="10" x2="21" y2="10"/>
);

icon!(UsersIcon,
    <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/>
    <circle cx="9" cy="7" r="4"/>
    <path d="M23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"/>
);

icon!(AwardIcon,
    <circle cx="12" cy="8" r="7"/>
    <polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88"/>
);

icon!(TargetIcon,
    <circle cx="12" cy="12" r="10"/>
    <circle cx="12" cy="12" r="6"/>
    <circle cx="12" cy="12" r="2"/>
);

icon!(EyeIcon,
    <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
    <circle cx="12" cy="12" r="3"/>
);

icon!(HeartIcon,
    <path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>
);

icon!(ShieldIcon, <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>);

icon!(BedIcon,
    <path d="M2 4v16M2 8h18a2 2 0 0 1 2 2v10M2 17h20M6 8v9"/>
);

icon!(BathIcon,
    <path d="M9 6 6.5 3.5a1.5 1.5 0 0 0-1-.5C4.68 3 4 3.68 4 4.5V17a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-5"/>
    <line x1="10" y1="5" x2="8" y2="7"/>
    <line x1="2" y1="12" x2="22" y2="12"/>
);

icon!(LayersIcon,
    <polygon points="12 2 2 7 12 12 22 7 12 2"/>
    <polyline points="2 17 12 22 22 17"/>
    <polyline points="2 12 12 17 22 12"/>
);

icon!(BuildingIcon,
    <rect x="4" y="2" width="16" height="20" rx="2"/>
    <path d="M9 22v-4h6v4M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01"/>
);

icon!(ZapIcon, <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>);

icon!(FileCheckIcon,
    <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
    <polyline points="14 2 14 8 20 8"/>
    <polyline points="9 15 11 17 15 13"/>
);

icon!(MapIcon,
    <polygon points="1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6"/>
    <line x1="8" y1="2" x2="8" y2="18"/>
    <line x1="16" y1="6" x2="16" y2="22"/>
);

icon!(WrenchIcon,
    <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>
);

icon!(WindIcon,
    <path d="M9.59 4.59A2 2 0 1 1 11 8H2m10.59 11.41A2 2 0 1 0 14 16H2m15.73-8.27A2.5 2.5 0 1 1 19.5 12H2"/>
);

icon!(HomeIcon,
    <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
    <polyline points="9 22 9 12 15 12 15 22"/>
);

icon!(SpinnerIcon, <path d="M21 12a9 9 0 1 1-6.22-8.56"/>);

/// The pictogram attached to a service.
#[component]
pub fn ServiceIcon(
    kind: IconKind,
    #[prop(default = 28)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    match kind {
        IconKind::Building => view! { <BuildingIcon size=size class=class/> }.into_any(),
        IconKind::Zap => view! { <ZapIcon size=size class=class/> }.into_any(),
        IconKind::Layers => view! { <LayersIcon size=size class=class/> }.into_any(),
        IconKind::FileCheck => view! { <FileCheckIcon size=size class=class/> }.into_any(),
        IconKind::Map => view! { <MapIcon size=size class=class/> }.into_any(),
        IconKind::Wrench => view! { <WrenchIcon size=size class=class/> }.into_any(),
        IconKind::Wind => view! { <WindIcon size=size class=class/> }.into_any(),
        IconKind::Home => view! { <HomeIcon size=size class=class/> }.into_any(),
    }
}
