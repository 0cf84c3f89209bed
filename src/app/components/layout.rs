//! Layout component wrapping every page.

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::environment::AppEnvironment;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout: title, content, and a footer with version and environment.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let config = use_context::<AppConfig>();
    let environment = use_context::<AppEnvironment>();
    let version = env!("LANGCEN_VERSION");
    let git_sha = env!("LANGCEN_GIT_SHA");
    let full_title = format!("{} - {}", props.title, config.site_name);

    rsx! {
        document::Title { "{full_title}" }

        header { class: "max-w-7xl mx-auto px-4 mt-4",
            strong { "{config.site_name}" }
            if !environment.is_production() {
                span { class: "badge badge-warning ml-2", "{environment.env}" }
            }
        }
        main { class: "max-w-7xl mx-auto px-4 mt-4",
            {props.children}
        }
        footer { class: "max-w-7xl mx-auto px-4 text-center py-3",
            small { class: "text-muted", "{config.site_name} v{version} ({git_sha})" }
        }
    }
}
