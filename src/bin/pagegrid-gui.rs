//! Pagegrid GUI - Desktop application entry point.

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use log::LevelFilter;
use pagegrid_core::SpreadsheetGrid;
use std::path::PathBuf;

#[path = "../error.rs"]
mod error;

#[path = "../gui/mod.rs"]
mod gui;

#[path = "../logging.rs"]
mod logging;

#[derive(Parser, Debug)]
#[command(name = "pagegrid-gui", version, about = "Paginated spreadsheet with validated cells and undo/redo")]
struct Args {
    /// Append log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to --log-file
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level)
        .context("failed to set up logging")?;

    let mut options = eframe::NativeOptions::default();
    options.viewport = egui::ViewportBuilder::default()
        .with_title("Pagegrid")
        .with_inner_size([1100.0, 760.0]);

    log::info!("starting desktop ui");
    eframe::run_native(
        "Pagegrid",
        options,
        Box::new(|_cc| Ok(Box::new(gui::PagegridGuiApp::new(SpreadsheetGrid::new())))),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}
