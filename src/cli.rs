use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rpntui - A four-register RPN calculator for the terminal
#[derive(Parser)]
#[command(name = "rpntui")]
#[command(about = "A four-register RPN calculator with a terminal keypad")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the configuration file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Decimal separator, ',' or '.' (overrides the configuration file)
    #[arg(long, global = true)]
    pub separator: Option<char>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive calculator (the default)
    Run,
    /// Apply keypad labels to a fresh stack and print the result
    ///
    /// Options must come before the labels; everything after the first
    /// label is read as a label, including values such as `-` or `-3`.
    Eval {
        /// Print the stack as JSON instead of plain lines
        #[arg(long)]
        json: bool,

        /// Keypad labels, e.g. `5 2 Enter 3 +` or `2 Enter x² √x`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        labels: Vec<String>,
    },
    /// List every keypad label and whether its operation is implemented
    Labels,
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
