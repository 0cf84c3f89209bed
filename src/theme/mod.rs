//! Theme preference: light, dark, or follow the OS.

use serde::{Deserialize, Serialize};

mod registry;
mod store;

pub use registry::{Registered, StoreRegistry};
pub use store::{ThemeSnapshot, ThemeStore};

/// Storage key and registry name of the theme store.
pub const THEME_KEY: &str = "theme";

/// Class toggled on the document root when dark rendering is in effect.
pub const DARK_CLASS: &str = "dark";

/// Theme options
///
/// Unknown names are kept verbatim in `Custom` so they survive a round trip
/// through storage; they render as light.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
    Custom(String),
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Custom(name) => name,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "system" => Theme::System,
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => Theme::Custom(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Custom(name) => name,
        }
    }

    /// Options offered by the theme switcher
    pub fn choices() -> [Theme; 3] {
        [Theme::System, Theme::Light, Theme::Dark]
    }

    /// Whether the dark class applies for this preference.
    ///
    /// Decided on the name, so a `Custom` holding a known name behaves the
    /// same as the matching variant.
    pub fn use_dark(&self, system_dark: bool) -> bool {
        match self.as_str() {
            "dark" => true,
            "system" => system_dark,
            _ => false,
        }
    }

    /// Whether this preference follows the OS color scheme
    pub fn is_system(&self) -> bool {
        self.as_str() == "system"
    }
}

impl From<String> for Theme {
    fn from(s: String) -> Self {
        Theme::parse(&s)
    }
}

impl From<&str> for Theme {
    fn from(s: &str) -> Self {
        Theme::parse(s)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.as_str().to_string()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
