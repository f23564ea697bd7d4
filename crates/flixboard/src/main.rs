mod bootstrap;

use anyhow::Result;
use flixboard_core::settings::Settings;
use flixboard_data::report::build_report;
use flixboard_ui::app::{App, ViewMode};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("flixboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Data dir: {}",
        settings.view,
        settings.theme,
        settings.data_dir.display()
    );

    // Run the whole pipeline up front; the UI only renders the result.
    let paths = settings.data_paths();
    let report = build_report(&paths)?;
    tracing::info!(
        "Loaded {} originals, {} catalog rows, {} trading days; {} films after cleaning",
        report.metadata.originals_rows,
        report.metadata.catalog_rows,
        report.metadata.stock_rows,
        report.rows.len()
    );

    let view_mode = match settings.view.as_str() {
        "table" => ViewMode::Table,
        "quarterly" => ViewMode::Quarterly,
        _ => ViewMode::Dashboard,
    };

    let app = App::new(&settings.theme, view_mode, report);

    // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down");
        }
    }

    Ok(())
}
