mod app;
mod app_launch;
mod pages_games;
mod pages_settings;

pub use app::LincherApp;
