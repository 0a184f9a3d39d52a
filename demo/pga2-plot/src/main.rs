//! pga2 plotting demo

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use pga2_plot::*;

fn main() -> eframe::Result {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", default_log_filter(cfg!(debug_assertions)));
    }

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PlotConfig::default();
    log::info!("plotting {:?}", config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "pga2 plot",
        options,
        Box::new(|cc| Ok(Box::new(PlotApp::new(cc, config)?))),
    )
}
