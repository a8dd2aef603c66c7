use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grainboard_dashboard::config::LogFormat;
use grainboard_dashboard::{Dashboard, DashboardConfig};

/// `grainboard` prints the project board as JSON.
/// `grainboard <project-id>` prints one project's detail page instead.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = DashboardConfig::from_env().context("Invalid dashboard configuration")?;

    // --- Tracing ---
    // stdout carries the JSON output, so logs go to stderr.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grainboard=info,grainboard_dashboard=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
    tracing::info!(
        seed = ?config.seed_path,
        policy = ?config.project_delete_policy,
        "Loaded dashboard configuration"
    );

    // --- Dashboard ---
    let dashboard = Dashboard::from_config(&config).context("Failed to load dashboard data")?;

    let output = match std::env::args().nth(1) {
        Some(project_id) => {
            let detail = dashboard
                .project_detail(&project_id)
                .with_context(|| format!("Cannot show project '{project_id}'"))?;
            serde_json::to_string_pretty(&detail)?
        }
        None => serde_json::to_string_pretty(&dashboard.project_board())?,
    };
    println!("{output}");

    Ok(())
}
