//! LazyOSK library
//!
//! A virtual on-screen keyboard: built-in QWERTY, AZERTY and JCUKEN layout
//! tables, a keyboard widget that builds its controls from them, and an input
//! dispatcher that edits a bound text field. The `tui` module hosts the
//! widget in a terminal popup.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod layouts;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
pub mod widget;

pub use error::{KeyboardError, KeyboardResult};
pub use layouts::LayoutRegistry;
pub use widget::{ControlId, KeyboardState, KeyboardWidget};
