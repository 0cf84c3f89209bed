//! LangCen UI - theme preference and environment marker for the web UI
//!
//! This library provides:
//! - A theme store that keeps storage, in-memory state and the root `dark`
//!   class in sync, following the OS color scheme in "system" mode
//! - Platform seams (storage, color-scheme signal, document root) with
//!   browser and in-memory implementations
//! - A page composition root replacing the ambient store registry and
//!   environment global
//! - Dioxus context providers and a theme switcher component

pub mod app;
pub mod config;
pub mod environment;
pub mod error;
pub mod page;
pub mod platform;
pub mod theme;

pub use environment::AppEnvironment;
pub use error::ThemeError;
pub use page::Page;
pub use theme::{Theme, ThemeStore};
