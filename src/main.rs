#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod animation;
mod catalog;
mod config;
mod counter;
mod error;
mod filter;
mod lightbox;
mod menu;
mod modal;
mod overlay;
mod reveal;
mod scroll;
mod telemetry;
mod theme;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let config = config::InteractionConfig::from_env();
    telemetry::log_event(
        config.log_level,
        telemetry::LogLevel::Info,
        "config_loaded",
        serde_json::json!({
            "config": config,
            "projects": catalog::projects().len(),
        }),
    );
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
