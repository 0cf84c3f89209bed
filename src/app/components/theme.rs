//! Theme switcher component for system/light/dark modes.

use dioxus::prelude::*;

use super::error_alert::ErrorAlert;
use crate::app::theme::use_theme;
use crate::theme::Theme;

/// Theme switcher with system, light and dark options.
#[component]
pub fn ThemeSwitcher() -> Element {
    let theme = use_theme();
    let current = theme.get();
    let error = (theme.error)();

    let buttons = Theme::choices().into_iter().map(move |choice| {
        let class = if choice == current { "btn btn-sm active" } else { "btn btn-sm" };
        let id = format!("theme-{}", choice.as_str());
        let label = choice.label().to_string();
        rsx! {
            button {
                key: "{id}",
                id: "{id}",
                class: "{class}",
                onclick: move |_| theme.set(choice.clone()),
                "{label}"
            }
        }
    });

    rsx! {
        if let Some(message) = error {
            ErrorAlert {
                message,
                on_dismiss: move |_| theme.dismiss_error(),
            }
        }
        div { class: "theme-switcher", {buttons} }
    }
}
