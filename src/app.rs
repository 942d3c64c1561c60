mod about;
mod contact;
mod cv;
mod footer;
mod homepage;
mod intro;
mod nav;
mod project_modal;
mod projects;
mod seo;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::assets::AssetIndex;
use crate::i18n::{Catalog, Translator};
use homepage::HomePage;
use nav::NavBar;
use seo::Seo;

/// Discovered images and translated text.
///
/// Built once by the server binary and by `hydrate()`, then handed to every
/// render through context. Clones share the same index and catalog.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub assets: Arc<AssetIndex>,
    pub text: Arc<Catalog>,
}

impl SiteContent {
    pub fn load() -> Self {
        Self {
            assets: Arc::new(AssetIndex::discover()),
            text: Arc::new(Catalog::english()),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.text.t(key)
    }

    pub fn t_list(&self, key: &str) -> Vec<String> {
        self.text.t_list(key)
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Seo />

        <Router>
            <NavBar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// Shared heading used by every page section.
#[component]
fn SectionHeading(heading: String, highlight: String, description: String) -> impl IntoView {
    view! {
        <div class="text-center mb-16 section-content">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">
                {heading} " " <span class="text-cyan">{highlight}</span>
            </h2>
            <p class="text-xl text-muted max-w-3xl mx-auto">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_shares_loaded_content() {
        let content = SiteContent::load();
        let owner = Owner::new();
        owner.with(|| {
            provide_context(content.clone());
            let provided = expect_context::<SiteContent>();
            assert!(Arc::ptr_eq(&provided.assets, &content.assets));
            assert!(Arc::ptr_eq(&provided.text, &content.text));
        });
    }
}
