use libranet::{
    adapters::{console::NotificationService as ConsoleNotificationService, seed},
    application::catalog::Catalog,
    cli::Session,
    config::{AppConfig, DEFAULT_LOG_FILTER},
};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing (stderr keeps logs out of the menu on stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env();

    let items = match &config.seed_file {
        Some(path) => seed::load_from_path(path),
        None => seed::sample_items(),
    };
    let items = match items {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %e, "failed to seed catalog");
            return ExitCode::FAILURE;
        }
    };

    let mut catalog = Catalog::with_items(items);
    tracing::info!(items = catalog.len(), "library initialized");

    let notifier = ConsoleNotificationService::stdout();
    let stdin = io::stdin();
    let mut session = Session::new(&mut catalog, &notifier, stdin.lock(), io::stdout());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "console i/o failed");
            ExitCode::FAILURE
        }
    }
}
