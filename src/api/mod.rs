//! HTTP client for the site's JSON endpoints

mod client;

pub use client::*;
