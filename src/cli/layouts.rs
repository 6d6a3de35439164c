//! `lazyosk layouts`: list the built-in layouts.

use clap::Args;
use serde::Serialize;

use super::{CliError, CliResult};
use crate::layouts::LayoutRegistry;

/// List available keyboard layouts in selector order
#[derive(Debug, Clone, Args)]
pub struct LayoutsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LayoutSummary<'a> {
    name: &'a str,
    keys: usize,
    default: bool,
}

impl LayoutsArgs {
    /// Execute the layouts command
    pub fn execute(&self) -> CliResult<()> {
        let registry = LayoutRegistry::builtin();
        let default_name = registry.default_name();

        let summaries = registry
            .names()
            .into_iter()
            .map(|name| {
                let layout = registry
                    .get_layout(name)
                    .map_err(|e| super::layout_not_found(&e, registry))?;
                Ok(LayoutSummary {
                    name,
                    keys: layout.key_count(),
                    default: name == default_name,
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        if self.json {
            let json = serde_json::to_string_pretty(&summaries)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            for summary in &summaries {
                let marker = if summary.default { " (default)" } else { "" };
                println!("{}{}", summary.name, marker);
            }
        }

        Ok(())
    }
}
