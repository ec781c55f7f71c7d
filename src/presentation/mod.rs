//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the kiosk screens using ratatui and maps
//! keyboard and mouse events onto the flow controller. Screen geometry
//! lives in `layout` so drawing and click hit-testing agree.

pub mod layout;
pub mod ui;
pub mod input;

pub use layout::*;
pub use ui::*;
pub use input::*;
