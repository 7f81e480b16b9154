mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::platform::desktop::webview::default_webview_data_dir;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_tracing();

    let mut desktop_config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title("Prop Firm Comparison"),
    );
    match default_webview_data_dir() {
        Ok(dir) => {
            info!(dir = %dir.display(), "using webview data directory");
            desktop_config = desktop_config.with_data_directory(dir);
        }
        Err(err) => error!(error = %err, "falling back to default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);
}
