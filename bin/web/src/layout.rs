//! Shared chrome around the active page.

use crate::routes::Page;
use leptos::prelude::*;

/// Wraps the routed content with the header and main region.
#[component]
pub fn Layout(
    /// Nav entries as `(path, page)` pairs, in display order.
    links: Vec<(String, Page)>,
    children: Children,
) -> impl IntoView {
    view! {
        <Header links/>
        <main class="container">{children()}</main>
    }
}

/// Header with the site name and navigation.
#[component]
fn Header(links: Vec<(String, Page)>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"waymark"</a>
            </div>
            <nav class="header-right">
                {links
                    .into_iter()
                    .map(|(path, page)| {
                        view! { <a href=path class="nav-link">{page.nav_label()}</a> }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;

    fn links() -> Vec<(String, Page)> {
        vec![
            ("/".to_string(), Page::Home),
            ("/about".to_string(), Page::About),
        ]
    }

    fn render_page(page: Page) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <Layout links=links()>
                    {page.render().expect("page renders")}
                </Layout>
            }
            .to_html()
        })
    }

    #[test]
    fn header_wraps_only_the_active_page() {
        let html = render_page(Page::About);

        assert_eq!(html.matches("class=\"header\"").count(), 1);
        assert_eq!(html.matches("class=\"nav-link\"").count(), 2);
        assert!(html.contains("about-page"));
        assert!(!html.contains("home-page"));
    }

    #[test]
    fn switching_pages_keeps_a_single_header() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(Page::Home);
            let render = move || {
                view! {
                    <Layout links=links()>
                        {move || page.get().render().expect("page renders")}
                    </Layout>
                }
                .to_html()
            };

            let home = render();
            assert!(home.contains("home-page"));

            page.set(Page::About);
            let about = render();
            assert_eq!(about.matches("class=\"header\"").count(), 1);
            assert!(about.contains("about-page"));
            assert!(!about.contains("home-page"));
        });
    }
}
