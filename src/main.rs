mod frontend;
mod utils;

use crate::frontend::app::{App, install_config};
use crate::utils::{AppConfig, logging};
use anyhow::{Context, Result};
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?;

    let loaded = runtime.block_on(AppConfig::load());
    drop(runtime);

    // Logging needs the configured level, so config errors are reported after
    let config = match loaded {
        Ok(config) => {
            logging::init(&config.logging.level);
            config
        }
        Err(e) => {
            logging::init(logging::DEFAULT_LEVEL);
            log::warn!(
                "Ignoring config at {}: {e}",
                AppConfig::path().display()
            );
            AppConfig::default()
        }
    };

    let window = &config.window;
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(window.title.clone())
                .with_inner_size(LogicalSize::new(window.width, window.height))
                .with_min_inner_size(LogicalSize::new(window.min_width, window.min_height))
                .with_resizable(window.resizable),
        )
        .with_menu(None);

    log::info!("Starting {}", config.ui.brand);
    install_config(config);

    LaunchBuilder::new().with_cfg(desktop).launch(App);
    Ok(())
}
