#![allow(warnings)]
//! FundDesk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod hierarchy;
mod markdown;
mod metrics;
mod models;
mod notify;
mod session;
mod store;
mod year_copy;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
