// main.rs - Blinkenlights window

use blinkenlights::ui::BlinkenlightsApp;
use blinkenlights::{AppError, Args, logging};
use clap::Parser;
use eframe::egui;

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let config = args.board_config()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Blinkenlights",
        options,
        Box::new(move |_cc| Box::new(BlinkenlightsApp::new(config))),
    )?;
    Ok(())
}
