//! Dismissable error alert component.

use dioxus::prelude::*;

/// Inline alert for a failed action (e.g. a theme that could not be saved).
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the dismiss button is clicked
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "{message}" }
            button {
                class: "btn btn-ghost btn-sm",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
