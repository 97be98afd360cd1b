#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

mod app;
mod frame_clock;
mod plotting;
mod settings;
mod theme;

use app::BezierBeautyApp;
use settings::WindowSettings;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = WindowSettings::default();
    log::info!(
        "opening {}x{} window, frame interval {:?}",
        settings.width,
        settings.height,
        settings.frame_interval
    );

    eframe::run_native(
        settings.title,
        settings.native_options(),
        Box::new(move |cc| Ok(Box::new(BezierBeautyApp::new(cc, settings)))),
    )
}
