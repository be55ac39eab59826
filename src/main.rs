//! Idea Hub - Dioxus web client
//!
//! Single-page frontend for the Idea Hub site: a feedback form and a
//! searchable resource center behind two tabs.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}
