use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::catalog::COMPANY_NAME;
use crate::components::{Footer, MobileBottomBar, Navbar};
use crate::pages::{
    AboutPage, CataloguePage, ContactPage, HomePage, NotFoundPage, ProjectsPage,
    ServiceDetailPage, ServicesListPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ngbtp.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() { COMPANY_NAME.to_string() } else { format!("{text} | {COMPANY_NAME}") }
        }/>
        <Meta
            name="description"
            content="Bureau d'étude multi-services au Cameroun : génie civil, génie électrique, architecture, topographie, permis de bâtir."
        />

        <Router>
            <div class="layout">
                <Navbar/>
                // bottom padding keeps content above the mobile action bar
                <div class="layout__body">
                    <main class="layout__main">
                        <Routes fallback=NotFoundPage>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("a-propos") view=AboutPage/>
                            <Route path=StaticSegment("services") view=ServicesListPage/>
                            <Route
                                path=(StaticSegment("services"), ParamSegment("id"))
                                view=ServiceDetailPage
                            />
                            <Route path=StaticSegment("realisations") view=ProjectsPage/>
                            <Route path=StaticSegment("catalogue") view=CataloguePage/>
                            <Route path=StaticSegment("contact") view=ContactPage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
                <MobileBottomBar/>
            </div>
        </Router>
    }
}
