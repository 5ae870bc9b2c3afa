// Magnificent Seven entry point.
//
// Startup sequence:
// 1. Load config (copies defaults/ into config/ on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Build the HTTP player source
// 4. Create mpsc channels
// 5. Spawn app logic task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::sync::Arc;

use magnificent_seven::app;
use magnificent_seven::config::{self, LoggingConfig};
use magnificent_seven::fetch::FplClient;
use magnificent_seven::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;

    init_tracing(&config.logging)?;
    info!("Magnificent Seven starting up");
    info!(
        "Config loaded: source={}, timeout={}s",
        config.source.url, config.source.timeout_secs
    );

    let source = FplClient::from_config(&config.source).context("failed to build player source")?;

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(64);
    let (fetch_tx, fetch_rx) = mpsc::channel(4);

    let app_state = app::AppState::new(Arc::new(source), fetch_tx);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, fetch_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    info!("Application ready");

    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // The app loop exits once the command channel closes.
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Magnificent Seven shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(&logging.dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("magnificent-seven.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
