//! Command-line interface for SwipeTile
//!
//! Provides commands for configuration inspection and diagnostics alongside
//! the default `run` mode.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use crate::config::{default_config_path, ConfigLoader};
use crate::macos::accessibility::{AccessibilityProvider, SystemAccessibilityProvider};
use crate::macos::permissions;
use crate::Result;

/// SwipeTile command-line interface
#[derive(Parser)]
#[command(name = "swipetile")]
#[command(about = "Trackpad-swipe and keyboard-chord window tiler for macOS")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SwipeTileCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable JSON output for machine-readable results
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand; defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the window tiler (default)
    Run,

    /// Configuration management commands
    Config(ConfigCommands),

    /// Diagnostics and debugging commands
    Diagnostics(DiagnosticsCommands),
}

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Print the default settings file location
    Path,
    /// Parse and validate the settings file
    Validate,
}

#[derive(Args)]
pub struct DiagnosticsCommands {
    #[command(subcommand)]
    pub action: DiagnosticsAction,
}

#[derive(Subcommand)]
pub enum DiagnosticsAction {
    /// Report the state of required macOS permissions
    Permissions,
    /// List on-screen windows with their frames
    Windows,
}

impl SwipeTileCli {
    /// Execute a non-run subcommand. Returns `true` when the process should
    /// continue into the main run loop.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            None | Some(Commands::Run) => Ok(true),
            Some(Commands::Config(config)) => {
                self.execute_config(config)?;
                Ok(false)
            }
            Some(Commands::Diagnostics(diagnostics)) => {
                self.execute_diagnostics(diagnostics)?;
                Ok(false)
            }
        }
    }

    fn execute_config(&self, command: &ConfigCommands) -> Result<()> {
        match command.action {
            ConfigAction::Show => {
                let settings = ConfigLoader::load_or_default(self.config.as_deref())?;
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&settings)?);
                } else {
                    println!("{}", ConfigLoader::render(&settings));
                }
            }
            ConfigAction::Path => match default_config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No configuration directory available"),
            },
            ConfigAction::Validate => {
                let settings = ConfigLoader::load_or_default(self.config.as_deref())?;
                settings.validate()?;
                println!("Configuration is valid");
            }
        }
        Ok(())
    }

    fn execute_diagnostics(&self, command: &DiagnosticsCommands) -> Result<()> {
        match command.action {
            DiagnosticsAction::Permissions => {
                let accessibility = permissions::is_accessibility_permission_granted()?;
                let input_monitoring = permissions::is_input_monitoring_permission_granted()?;

                if self.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "accessibility": accessibility,
                            "input_monitoring": input_monitoring,
                        }))?
                    );
                } else {
                    println!("Accessibility:    {}", status_word(accessibility));
                    println!("Input Monitoring: {}", status_word(input_monitoring));
                }
            }
            DiagnosticsAction::Windows => {
                let provider = SystemAccessibilityProvider::new();
                let windows = provider.on_screen_windows()?;

                if self.json {
                    let entries: Vec<_> = windows
                        .iter()
                        .map(|(handle, frame)| {
                            json!({
                                "id": handle.id(),
                                "x": frame.min_x(),
                                "y": frame.min_y(),
                                "width": frame.width(),
                                "height": frame.height(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                } else {
                    for (handle, frame) in windows {
                        println!(
                            "{:>6}  {:7.1} {:7.1}  {:7.1} x {:7.1}",
                            handle.id(),
                            frame.min_x(),
                            frame.min_y(),
                            frame.width(),
                            frame.height()
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

fn status_word(granted: bool) -> &'static str {
    if granted {
        "granted"
    } else {
        "not granted"
    }
}
