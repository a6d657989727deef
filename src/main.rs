#![allow(warnings)]
//! Feature Showcase Frontend Entry Point

mod app;
mod components;
mod config;
mod context;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config::log_level());
    mount_to_body(App);
}
