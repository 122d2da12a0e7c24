//! Core types and view-controllers for the Climate Intelligence Platform dashboard.
//!
//! - `city`, `weather`, `prediction`, `cluster`: wire types and display formatting
//! - `controller`: one I/O-free state machine per dashboard view
//! - `format`: `toFixed`-style rounding shared by every display string
//! - `config`: API base path resolution and request timeout
//! - `client` (feature `api`): the HTTP client shared by the web app and the CLI

pub mod city;
pub mod cluster;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod prediction;
pub mod weather;

#[cfg(feature = "api")]
pub mod client;

pub use city::City;
pub use config::ApiConfig;
pub use error::ApiError;
