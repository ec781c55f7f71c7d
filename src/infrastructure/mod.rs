//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP check-in backend, environment
//! configuration and log file setup.

pub mod config;
pub mod http;
pub mod logging;

pub use config::*;
pub use http::*;
pub use logging::*;
