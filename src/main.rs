//! rpntui - Main entry point
//!
//! Runs the interactive calculator, or evaluates keypad labels headlessly.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use rpntui::app::App;
use rpntui::cli::{Cli, Commands};
use rpntui::error::CalcError;
use rpntui::labels;
use rpntui::logging;
use rpntui::{CalcConfig, Dispatch};

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => CalcConfig::load_from_file(path)?,
        None => CalcConfig::default(),
    };
    if let Some(separator) = cli.separator {
        config.decimal_separator = separator;
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }
    config.validate().context("Invalid configuration")?;

    let interactive = matches!(cli.command, None | Some(Commands::Run));
    logging::init_logging(config.log_file.as_deref(), interactive)?;
    info!("rpntui starting up");
    debug!("Configuration: {:?}", config);

    match cli.command {
        None | Some(Commands::Run) => run_tui(&config)?,
        Some(Commands::Eval { json, labels }) => run_eval(&config, &labels, json)?,
        Some(Commands::Labels) => labels::write_table(&mut stdout().lock())?,
        Some(Commands::Validate { file }) => validate_config_file(&file),
    }

    Ok(())
}

/// Run the interactive calculator
fn run_tui(config: &CalcConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| CalcError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| CalcError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| CalcError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(Into::into)
}

/// Apply labels to a fresh engine and print the stack
fn run_eval(config: &CalcConfig, input: &[String], json: bool) -> Result<()> {
    let mut engine = config.engine();

    for label in input {
        let dispatch = labels::apply_label(&mut engine, label)
            .with_context(|| format!("Failed at label {:?}", label))?;
        match dispatch {
            Dispatch::Applied => {}
            Dispatch::NotImplemented(name) => eprintln!("warning: {} is not implemented", name),
            Dispatch::Unrecognized(label) => eprintln!("warning: unknown label {:?}, skipped", label),
        }
    }

    if json {
        println!("{}", engine.snapshot().to_json()?);
    } else {
        println!("{}", engine.stack_string());
    }

    Ok(())
}

/// Validate a configuration file, exiting non-zero on failure
fn validate_config_file(path: &Path) {
    info!("Validating configuration file: {:?}", path);
    let outcome = CalcConfig::load_from_file(path)
        .and_then(|config| config.validate().map_err(Into::into));

    match outcome {
        Ok(()) => println!("✓ Configuration file is valid: {}", path.display()),
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
