use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "life-os")]
#[command(about = "Personal life management notes from the command line")]
#[command(version)]
pub struct Cli {
    /// Base directory (default: ~/.life-os)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a brain dump into a categorized note
    Dump {
        /// Read the dump from a file instead of stdin
        file: Option<PathBuf>,
    },

    /// Run the evening journal prompts
    Journal,

    /// Generate the weekly check-in dashboard
    Weekly,

    /// Configure weekly metrics and reflection prompts
    Setup,

    /// Capture research findings into a dated note
    Research,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,

    /// Write the default config template
    Init,

    /// Print the effective configuration
    Show,
}
