//! Dioxus loading view shown while a story is being generated.
//!
//! This crate provides:
//! - `config`: the `DisplayConfiguration` handed to the view by its host
//! - `components`: the `LoadingStatus` RSX component
//! - `styles`: the stylesheet that animates the spinner
//! - `render`: server-side rendering of the view to an HTML string

pub mod components;
pub mod config;
pub mod render;
pub mod styles;

pub use config::{ConfigError, DisplayConfiguration};
