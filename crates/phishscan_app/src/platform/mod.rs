mod app;
mod config;
mod effects;
mod logging;
mod terminal;

pub use app::run_app;
