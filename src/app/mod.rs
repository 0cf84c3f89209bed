//! Dioxus application entry point.
//!
//! The root component owns the [`Page`] composition root and wires its
//! lifecycle into context providers:
//! - environment marker (read once from `<body data-env>`)
//! - theme store (registered once, torn down when the app unmounts)

use std::rc::Rc;

use dioxus::prelude::*;

pub mod components;
pub mod theme;

use crate::config::AppConfig;
use crate::environment::AppEnvironment;
use crate::page::Page;
use components::{Layout, ThemeSwitcher};
use theme::use_theme_provider;

#[cfg(target_arch = "wasm32")]
fn body_env(_fallback: &str) -> Option<String> {
    crate::platform::web::body_env()
}

// No document body natively: the configured environment stands in for it.
#[cfg(not(target_arch = "wasm32"))]
fn body_env(fallback: &str) -> Option<String> {
    Some(fallback.to_string())
}

/// Publish the environment marker for the page - call once at app root
pub fn use_environment_provider(page: Rc<Page>, fallback: &str) -> AppEnvironment {
    let fallback = fallback.to_string();
    let environment = use_hook(move || page.document_ready(body_env(&fallback).as_deref()).clone());
    use_context_provider(|| environment.clone())
}

/// Root app component
#[component]
pub fn App() -> Element {
    let config = use_hook(|| try_consume_context::<AppConfig>().unwrap_or_default());
    use_context_provider(|| config.clone());

    let page = use_hook(|| Rc::new(Page::with_storage_key(&config.storage_key)));

    // Initialize environment context at app root (document-ready)
    use_environment_provider(page.clone(), &config.env);

    // Initialize theme context at app root (framework-ready: storage + DOM class)
    use_theme_provider(page.clone());

    use_drop(move || {
        if let Some(store) = page.theme() {
            store.teardown();
        }
    });

    rsx! {
        Layout { title: "Home".to_string(),
            section {
                h2 { "Appearance" }
                p { "Choose a theme or follow your system setting" }
                ThemeSwitcher {}
            }
        }
    }
}

/// Render the page shell to HTML without a browser.
///
/// Effects do not run during server-side rendering, so the theme store is not
/// registered here; the client registers it on hydration.
#[cfg(feature = "native")]
pub fn render_page(config: AppConfig) -> String {
    let mut dom = VirtualDom::new(App).with_root_context(config);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_shows_switcher_and_site_name() {
        let html = render_page(AppConfig::default());

        assert!(html.contains("LangCen Base"));
        assert!(html.contains("Appearance"));
        for id in ["theme-system", "theme-light", "theme-dark"] {
            assert!(html.contains(id), "missing button {} in {}", id, html);
        }
        // prod hides the environment badge
        assert!(!html.contains("badge-warning"));
    }

    #[test]
    fn test_render_page_shows_non_prod_environment() {
        let config = AppConfig {
            env: "staging".to_string(),
            ..AppConfig::default()
        };
        let html = render_page(config);

        assert!(html.contains("badge-warning"));
        assert!(html.contains("staging"));
    }
}
