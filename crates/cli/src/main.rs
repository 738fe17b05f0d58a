// qgrid CLI - headless layout runs for quote comparison sessions

mod exit_codes;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use quotegrid_layout::style::DEFAULT_STYLE_TOML;
use quotegrid_layout::{run, LayoutError, LayoutStyle};
use quotegrid_model::{session_warnings, ComparisonSession, SessionError};

use exit_codes::{
    EXIT_CHECK_WARNINGS, EXIT_ERROR, EXIT_SESSION_INVALID, EXIT_STYLE_INVALID, EXIT_SUCCESS,
    EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "qgrid")]
#[command(about = "Deterministic layout runs for insurance quote comparisons")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a session file and report data warnings
    #[command(after_help = "\
Exit codes:
  0  session is clean
  3  session failed to parse or validate
  4  session parsed but has warnings")]
    Check {
        /// Session JSON file
        session: PathBuf,
    },

    /// Produce the row plan, value grid, and formatting instructions
    #[command(after_help = "\
Examples:
  qgrid layout session.json
  qgrid layout session.json --pretty -o layout.json
  qgrid layout session.json --style brand.toml
  qgrid layout session.json --grid-only | jq '.rows[6]'")]
    Layout {
        /// Session JSON file
        session: PathBuf,

        /// Style sheet overriding the default palette and dimensions
        #[arg(long)]
        style: Option<PathBuf>,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Emit only the value grid
        #[arg(long)]
        grid_only: bool,
    },

    /// Print the default style sheet
    Style {
        /// Write the sheet to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { session } => cmd_check(&session),
        Commands::Layout { session, style, output, pretty, grid_only } => {
            cmd_layout(&session, style.as_deref(), output.as_deref(), pretty, grid_only)
        }
        Commands::Style { write } => cmd_style(write.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_check(path: &Path) -> Result<(), CliError> {
    let session = load_session(path)?;
    let warnings = session_warnings(&session);
    if warnings.is_empty() {
        println!(
            "{}: ok ({} carriers, {} sections)",
            path.display(),
            session.carriers.len(),
            session.sections.len()
        );
        return Ok(());
    }
    for warning in &warnings {
        println!("warning: {warning}");
    }
    println!("{} warning(s)", warnings.len());
    Err(CliError::warnings())
}

fn cmd_layout(
    path: &Path,
    style_path: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
    grid_only: bool,
) -> Result<(), CliError> {
    let session = load_session(path)?;
    for warning in session_warnings(&session) {
        log::warn!("{warning}");
    }
    let style = load_style(style_path)?;
    let doc = run(&session, &style).map_err(CliError::layout)?;

    let json = if grid_only {
        let serialized = if pretty {
            serde_json::to_string_pretty(&doc.grid)
        } else {
            serde_json::to_string(&doc.grid)
        };
        serialized.map_err(|e| CliError::layout(LayoutError::Serialize(e.to_string())))?
    } else if pretty {
        doc.to_json_pretty().map_err(CliError::layout)?
    } else {
        doc.to_json().map_err(CliError::layout)?
    };

    match output {
        Some(out) => fs::write(out, json + "\n")
            .map_err(|e| CliError::error(format!("cannot write {}: {e}", out.display())))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_style(write: Option<&Path>) -> Result<(), CliError> {
    match write {
        Some(path) => {
            fs::write(path, DEFAULT_STYLE_TOML)
                .map_err(|e| CliError::error(format!("cannot write {}: {e}", path.display())))?;
            println!("wrote {}", path.display());
        }
        None => print!("{DEFAULT_STYLE_TOML}"),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn load_session(path: &Path) -> Result<ComparisonSession, CliError> {
    let data = fs::read_to_string(path)
        .map_err(|e| CliError::args(format!("cannot read {}: {e}", path.display())))?;
    ComparisonSession::from_json(&data).map_err(CliError::session)
}

fn load_style(path: Option<&Path>) -> Result<LayoutStyle, CliError> {
    let Some(path) = path else {
        return Ok(LayoutStyle::default());
    };
    let data = fs::read_to_string(path)
        .map_err(|e| CliError::args(format!("cannot read {}: {e}", path.display())))?;
    LayoutStyle::from_toml(&data).map_err(CliError::style)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    fn session(err: SessionError) -> Self {
        let hint = match &err {
            SessionError::CarrierCount(_) => {
                Some("a comparison holds 2 to 6 carrier bundles".to_string())
            }
            SessionError::MissingCarrierName(_) => {
                Some("every carrier bundle needs a carrier_name".to_string())
            }
            _ => None,
        };
        Self { code: EXIT_SESSION_INVALID, message: err.to_string(), hint }
    }

    fn style(err: LayoutError) -> Self {
        Self { code: EXIT_STYLE_INVALID, message: err.to_string(), hint: None }
    }

    fn layout(err: LayoutError) -> Self {
        Self { code: EXIT_ERROR, message: err.to_string(), hint: None }
    }

    /// The warnings are already printed; the exit code is the signal.
    fn warnings() -> Self {
        Self { code: EXIT_CHECK_WARNINGS, message: String::new(), hint: None }
    }
}
