//! CLI command handlers for LazyOSK.
//!
//! Headless access to the layout registry, for scripting and for checking
//! layouts without opening the TUI.

pub mod common;
pub mod layouts;
pub mod show;

pub use common::{CliError, CliResult, ExitCode};
pub use layouts::LayoutsArgs;
pub use show::ShowArgs;

use crate::constants::APP_BINARY_NAME;
use crate::error::KeyboardError;
use crate::layouts::LayoutRegistry;

/// Turns a lookup failure into a validation error listing the available names.
pub fn layout_not_found(err: &KeyboardError, registry: &LayoutRegistry) -> CliError {
    let available = registry
        .names()
        .iter()
        .map(|name| format!("  {name}"))
        .collect::<Vec<_>>()
        .join("\n");
    CliError::validation(format!(
        "{err}\n\nAvailable layouts:\n{available}\n\nRun `{APP_BINARY_NAME} show NAME` to print one."
    ))
}
