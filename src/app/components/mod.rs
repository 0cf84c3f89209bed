//! Shared UI components.

pub mod error_alert;
pub mod layout;
pub mod theme;

pub use error_alert::ErrorAlert;
pub use layout::Layout;
pub use theme::ThemeSwitcher;
