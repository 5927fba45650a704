//! Task Manager Frontend Entry Point

mod app;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

/// Recent log lines kept in memory
const LOG_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(LOG_CAPACITY, "TaskManager") {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    let _ = rolling_logger::info("Mounting task manager");
    mount_to_body(App);
}
