mod app;
mod data;
mod error;
mod report;
mod session;
mod state;
mod ui;

use std::path::PathBuf;

use app::CsvAnalyzerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional file to analyse at startup: `csv-analyzer data.csv`
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Analyseur CSV",
        options,
        Box::new(move |_cc| Ok(Box::new(CsvAnalyzerApp::new(initial_file)))),
    )
}
