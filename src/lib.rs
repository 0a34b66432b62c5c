// src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
