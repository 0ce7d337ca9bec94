use crate::frameworks::cli;
use crate::frameworks::config;
use crate::interface_adapters::state::AppContext;
use crate::interface_adapters::storage::FileTokenStorage;
use std::process::ExitCode;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries command output, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let base_url = match config::api_base_url() {
        Ok(url) => url,
        Err(error) => {
            tracing::error!(%error, "KS_API_BASE_URL is not a valid url");
            return ExitCode::FAILURE;
        }
    };
    let storage = FileTokenStorage::new(config::storage_path());
    tracing::debug!(%base_url, storage_path = %storage.path().display(), "client configured.");

    let ctx = match AppContext::new(base_url, storage) {
        Ok(ctx) => ctx,
        Err(error) => {
            tracing::error!(%error, "failed to build http client");
            return ExitCode::FAILURE;
        }
    };

    let code = cli::run(
        std::env::args().skip(1),
        &ctx,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;
    ExitCode::from(code)
}
