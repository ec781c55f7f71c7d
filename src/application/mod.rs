//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the check-in submission, the screen flow controller and the per-screen
//! view state.

pub mod checkin;
pub mod controller;
pub mod state;

pub use checkin::*;
pub use controller::*;
pub use state::*;
