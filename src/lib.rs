//! Login and registration frontend for the INACAP academic portal.
//!
//! The crate compiles natively so validators and the submission flow can be
//! tested without a browser; the Leptos views, HTTP transport, and navigation
//! only build for `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Loads configuration, installs logging, and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use crate::app_lib::{AppConfig, build_info::git_commit_hash, telemetry};

    let config = AppConfig::load();
    telemetry::init(&config.log_level);
    tracing::info!(
        commit = git_commit_hash(),
        api_base_url = %config.api_base_url,
        "portal frontend starting"
    );
    leptos::prelude::mount_to_body(app::App);
}
