mod app;
mod auth;
mod client;
mod components;
mod hooks;
mod pages;
mod routes;
mod services;
mod storage;
mod toast;

use app::App;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // No clock on wasm32-unknown-unknown, so timestamps are left to the console
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    yew::Renderer::<App>::new().render();
}
