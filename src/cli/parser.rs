use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for brandboard
#[derive(Parser)]
#[command(
    name = "brandboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Brand manager dashboard: browse brand assignments and check chat activity per daily time slot",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dashboard username
    #[arg(global = true, long = "user", env = "BRANDBOARD_USER")]
    pub user: Option<String>,

    /// Dashboard password
    #[arg(
        global = true,
        long = "password",
        env = "BRANDBOARD_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Run in test mode (quiet init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report missing or empty configuration fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Browse brand assignments: platforms, then brands, then details
    Brands {
        /// Sheet source (CSV file or http(s) URL); defaults to the configured one
        #[arg(long, value_name = "SRC")]
        sheet: Option<String>,

        #[arg(long, short = 'p', help = "Platform to list brands for")]
        platform: Option<String>,

        #[arg(
            long,
            short = 'b',
            requires = "platform",
            help = "Brand to show details for"
        )]
        brand: Option<String>,
    },

    /// Parse chat exports and list the recognised messages
    Chats {
        /// Chat export files (.txt); the file name is the brand label
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        #[arg(long, short = 'b', help = "Only show messages for this brand")]
        brand: Option<String>,
    },

    /// Show which daily time slots had messages for a brand and date
    Report {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        #[arg(long, short = 'b', help = "Brand label (default: every brand found)")]
        brand: Option<String>,

        #[arg(long, short = 'd', help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Export a time-slot report to a file
    Export {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        #[arg(long, short = 'b', help = "Brand label")]
        brand: String,

        #[arg(long, short = 'd', help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "file", value_name = "OUT", help = "Output file (absolute path)")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },
}
