mod backend;
mod frontend;

use crate::backend::storage::LocalStorage;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::paths::get_config_path;
use crate::frontend::app::Route;
use crate::frontend::services::session::SessionState;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::OnceLock;

const STYLES: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/main.css"
));

/// State prepared before the window opens.
struct Startup {
    config: AppConfig,
    storage: LocalStorage,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let config_path = get_config_path();

    // The log filter lives in the config, so read it before the logger is up
    // and let `load_or_default` report problems afterwards.
    let loaded = AppConfig::load(&config_path).ok();
    let log_filter = loaded
        .as_ref()
        .map_or_else(|| AppConfig::default().log_filter, |c| c.log_filter.clone());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter)).init();

    let config = loaded.unwrap_or_else(|| AppConfig::load_or_default(&config_path));
    let storage_path = config.storage_path(&config_path);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?;
    let storage = runtime.block_on(LocalStorage::open(storage_path));
    drop(runtime);

    if storage.is_empty() {
        log::info!("Local storage at {} is empty", storage.path().display());
    } else {
        log::info!(
            "Local storage at {} ({} entries)",
            storage.path().display(),
            storage.len()
        );
    }

    let size = LogicalSize::new(
        f64::from(config.window.width),
        f64::from(config.window.height),
    );
    let window = WindowBuilder::new()
        .with_title(config.window.title.clone())
        .with_inner_size(size)
        .with_min_inner_size(size)
        .with_resizable(config.window.resizable);

    if STARTUP.set(Startup { config, storage }).is_err() {
        anyhow::bail!("Application state initialised twice");
    }

    LaunchBuilder::new()
        .with_cfg(Config::default().with_window(window).with_menu(None))
        .launch(App);

    Ok(())
}

#[component]
fn App() -> Element {
    let Some(startup) = STARTUP.get() else {
        return rsx! { div { "Application state is missing" } };
    };

    let store = use_signal(|| startup.storage.clone());
    let key = use_signal(|| startup.config.session_key());
    use_context_provider(|| SessionState::new(store, key));
    use_context_provider(|| startup.config.pricing.clone());

    rsx! {
        style { dangerous_inner_html: STYLES }
        Router::<Route> {}
    }
}
