//! Kiosk Check-in Library
//!
//! A terminal kiosk for loyalty check-ins: a welcome screen, phone number
//! entry and a success confirmation, backed by an HTTP check-in service.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
