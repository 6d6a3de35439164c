//! `lazyosk show`: print a layout grid as text.

use clap::Args;

use super::{CliError, CliResult};
use crate::layouts::LayoutRegistry;
use crate::models::{Layout, Slot};

/// Print a layout's key grid
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Layout name, e.g. "English (QWERTY)"
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Show the shifted level
    #[arg(long)]
    pub shift: bool,

    /// Output the parsed layout as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let registry = LayoutRegistry::builtin();
        let layout = registry
            .get_layout(&self.name)
            .map_err(|e| super::layout_not_found(&e, registry))?;

        if self.json {
            let json = serde_json::to_string_pretty(layout)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{}", self.name);
            print!("{}", render_grid(layout, self.shift));
        }
        Ok(())
    }
}

/// Formats each row as bracketed labels separated by spaces.
#[must_use]
pub fn render_grid(layout: &Layout, shift_active: bool) -> String {
    let mut out = String::new();
    for row in layout.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| match slot {
                Slot::Key(pair) => format!("[{}]", pair.label(shift_active)),
                Slot::Empty => "   ".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
