//! LangCen UI - entry point
//!
//! The browser build (`--features web`) mounts the app. The native build has
//! no renderer: it loads configuration and prints the server-rendered page
//! shell to stdout.

#[cfg(feature = "native")]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging (stderr, so stdout carries only the HTML)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "langcen_ui=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "Starting LangCen UI v{} ({})",
        env!("LANGCEN_VERSION"),
        env!("LANGCEN_GIT_SHA")
    );

    let config = langcen_ui::config::load_config()?;
    tracing::info!("Configuration loaded, env: {}", config.env);

    println!("{}", langcen_ui::app::render_page(config));
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    dioxus::launch(langcen_ui::app::App);
}
