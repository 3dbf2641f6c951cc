pub mod api; // REST client and error normalization
pub mod components; // Doctor card, patient row, header, footer
pub mod config;
pub mod context; // Host UI seam + page context
pub mod models;
pub mod pages; // Admin dashboard, doctor dashboard, login
pub mod session;
pub mod view;

#[cfg(test)]
mod testing;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`, falling back to [`config::default_log_filter`].
/// Calling it more than once is harmless.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
