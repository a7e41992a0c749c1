use clap::{Parser, Subcommand};

/// Perform CRUD operations on TOML files, preserving formatting
#[derive(Parser)]
#[command(author, about, long_about=None, disable_version_flag(true))]
pub struct Args {
    /// force color mode (defaults to check tty)
    #[arg(long)]
    pub color: bool,

    /// force no-color mode (defaults to check tty)
    #[arg(long)]
    pub no_color: bool,

    /// display version and quit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// prepend time to each log line
    #[arg(long)]
    pub log_time: bool,

    /// Turn general verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configure component wise logging
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub log: Option<Vec<String>>,

    /// Edit the TOML file in place instead of writing to stdout
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Output raw values instead of TOML
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// The TOML file to operate on ('-' for stdin)
    #[clap(name = "TOML_FILE", required_unless_present = "version")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub operation: Option<Operations>,
}

#[derive(Subcommand)]
pub enum Operations {
    /// Insert a new value at a path
    Create {
        /// Path segments followed by the TOML value literal
        #[clap(name = "PATH_AND_VALUE", required = true, num_args = 2..)]
        args: Vec<String>,
    },
    /// Print the value at a path
    Read {
        /// Path segments (keys or array indices)
        #[clap(name = "PATH", required = true)]
        path: Vec<String>,
    },
    /// Replace the value at a path
    Update {
        /// Path segments followed by the TOML value literal
        #[clap(name = "PATH_AND_VALUE", required = true, num_args = 2..)]
        args: Vec<String>,
    },
    /// Remove the entry at a path
    Delete {
        /// Path segments (keys or array indices)
        #[clap(name = "PATH", required = true)]
        path: Vec<String>,
    },
}
