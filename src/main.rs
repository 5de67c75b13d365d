mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::RenewablesApp;
use clap::Parser;
use eframe::egui;

/// Desktop viewer for per-state renewable electricity statistics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV files to load at start-up, appended in order.
    files: Vec<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Renewables – State Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(RenewablesApp::with_files(&args.files)))),
    )
}
