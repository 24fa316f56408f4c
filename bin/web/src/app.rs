//! Main Leptos application component and routing.

use crate::boundary::{RenderBoundary, use_boundary};
use crate::layout::Layout;
use crate::pages::NotFoundPage;
use crate::routes::{Page, app_routes, nav_links};
use crate::toast::ToastProvider;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use std::sync::Arc;
use waymark_core::{RenderFailure, RouteTable};

/// The route table shared with every [`ActivePage`].
#[derive(Clone)]
struct AppRoutes(Result<Arc<RouteTable<Page>>, RenderFailure>);

impl AppRoutes {
    fn load() -> Self {
        match app_routes() {
            Ok(table) => Self(Ok(Arc::new(table))),
            Err(e) => {
                tracing::error!(error = %e, "Application route table is invalid");
                Self(Err(RenderFailure::new(e.to_string())))
            }
        }
    }

    fn resolve(&self, path: &str) -> Result<Page, RenderFailure> {
        self.0
            .as_ref()
            .map(|table| *table.resolve(path).handler())
            .map_err(Clone::clone)
    }

    fn nav_links(&self) -> Vec<(String, Page)> {
        self.0
            .as_ref()
            .map(|table| nav_links(table))
            .unwrap_or_default()
    }
}

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let routes = AppRoutes::load();
    let links = routes.nav_links();
    provide_context(routes);

    view! {
        <Title text="waymark"/>
        <ToastProvider>
            <Router>
                <Layout links>
                    <RenderBoundary>
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=path!("/") view=ActivePage/>
                            <Route path=path!("/*any") view=ActivePage/>
                        </Routes>
                    </RenderBoundary>
                </Layout>
            </Router>
        </ToastProvider>
    }
}

/// Renders the page the route table selects for the current path.
#[component]
fn ActivePage() -> impl IntoView {
    let routes = expect_context::<AppRoutes>();
    let boundary = use_boundary();
    let location = use_location();

    let page = Memo::new(move |_| {
        let path = location.pathname.get();
        let page = routes.resolve(&path);
        tracing::debug!(path = %path, page = ?page, "Route resolved");
        page
    });

    view! {
        {move || {
            page.get()
                .ok()
                .map(|page| view! { <Title text=format!("{} · waymark", page.title())/> })
        }}
        {move || {
            let page = page.get();
            boundary.guard(move || page.and_then(Page::render))
        }}
    }
}
