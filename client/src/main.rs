use std::process::ExitCode;

use squadboard_client::{Config, load_from_config, render};
use squadboard_shared::AcquisitionState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(
        source = ?config.source,
        view = %config.view_mode,
        top_n = config.top_n,
        "starting squadboard"
    );

    let acquisition = load_from_config(&config).await;
    print!("{}", render::render(&acquisition, config.top_n));

    match acquisition.state() {
        AcquisitionState::Ready => ExitCode::SUCCESS,
        AcquisitionState::Loading | AcquisitionState::Error => {
            tracing::error!("dashboard data unavailable");
            ExitCode::FAILURE
        }
    }
}
