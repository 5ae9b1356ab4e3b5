//! Root application component with routing and the shared API client.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::net::api::HttpApi;
use crate::pages::{assets::AssetsPage, categories::CategoriesPage, dashboard::DashboardPage, reports::ReportsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `HttpApi` context and wraps every route in the sidebar layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(HttpApi::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/asset-admin.css"/>
        <Title text="Asset Manager"/>

        <Router>
            <AppLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("assets") view=AssetsPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                </Routes>
            </AppLayout>
        </Router>
    }
}
