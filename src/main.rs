//! LazyOSK - terminal on-screen keyboard
//!
//! Opens a demo screen with a text field and a virtual keyboard popup, or
//! lists and prints the built-in layouts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use lazyosk::cli::{layout_not_found, LayoutsArgs, ShowArgs};
use lazyosk::config::{Config, ThemeMode};
use lazyosk::constants::APP_NAME;
use lazyosk::layouts::LayoutRegistry;
use lazyosk::logging;
use lazyosk::tui::{self, App, Theme};

/// LazyOSK - terminal on-screen keyboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Layout to open with, e.g. "Français (AZERTY)"
    #[arg(short, long, value_name = "NAME")]
    layout: Option<String>,

    /// Theme override
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available layouts
    Layouts(LayoutsArgs),
    /// Print a layout grid
    Show(ShowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        eprintln!("Using default settings.");
        Config::default()
    });

    if let Some(command) = cli.command {
        logging::init_stderr_logging(&config.logging.level);
        let result = match command {
            Command::Layouts(args) => args.execute(),
            Command::Show(args) => args.execute(),
        };
        if let Err(e) = result {
            e.exit();
        }
        return Ok(());
    }

    // First run: write the defaults so there is a file to edit
    if !Config::exists() {
        if let Err(e) = config.save() {
            eprintln!("Warning: Failed to write default config: {e:#}");
        }
    }

    if let Some(name) = cli.layout {
        let registry = LayoutRegistry::builtin();
        if let Err(e) = registry.get_layout(&name) {
            layout_not_found(&e, registry).exit();
        }
        config.keyboard.default_layout = Some(name);
    }
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme;
    }

    match logging::log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file_logging(&path, &config.logging.level) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }
    info!(version = env!("CARGO_PKG_VERSION"), "{APP_NAME} starting");

    let theme = Theme::from_mode(config.ui.theme_mode);
    let mut app = App::new(config, theme)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app, &mut terminal);
    tui::restore_terminal(terminal)?;

    if let Err(e) = &result {
        warn!("event loop failed: {e:#}");
    }
    result
}
