mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use app::BikeshareApp;

/// Interactive dashboard over a bike-sharing rental dataset.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the daily rentals CSV.
    #[arg(long, default_value = "day.csv")]
    day: PathBuf,

    /// Path to the hourly rentals CSV.
    #[arg(long, default_value = "hour.csv")]
    hour: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = match data::loader::load(&args.day, &args.hour) {
        Ok(data) => data,
        Err(err) => {
            log::error!("could not load the rental dataset: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} daily and {} hourly records",
        data.daily.len(),
        data.hourly.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bikeshare Dashboard – Rental Analytics",
        options,
        Box::new(move |_cc| Ok(Box::new(BikeshareApp::new(data)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
