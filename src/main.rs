//! fpcycle: cycle a board component through alternate footprint variants
//!
//! This binary is a reference host for the fpcycle library: it plays the
//! roles a CAD application would (selection, board storage, redraw) against
//! a JSON board document and a directory-backed footprint catalog.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use fpcycle::board::Board;
use fpcycle::catalog::{DirectoryCatalog, NameOrder};
use fpcycle::config;
use fpcycle::cycle::{CycleOutcome, Cycler, Direction, SelectionItem};
use fpcycle::error::BoardFileError;

/// Cycle a board component through alternate footprint variants.
///
/// Swaps the referenced component to the next or previous footprint (by
/// sorted name) from the same library, preserving placement, nets, text and
/// identity, and writes the board document back.
#[derive(Parser, Debug)]
#[command(name = "fpcycle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board document (JSON)
    #[arg(value_name = "BOARD_FILE")]
    board: PathBuf,

    /// Cycle direction
    #[arg(value_enum, value_name = "DIRECTION")]
    direction: CliDirection,

    /// Reference designator of the component to cycle (e.g. R5)
    #[arg(short, long, value_name = "DESIGNATOR")]
    reference: String,

    /// Footprint library root directory (overrides config and environment)
    #[arg(long, value_name = "DIR")]
    library_root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Use numerically aware name ordering ("R2" before "R10")
    #[arg(long)]
    natural_sort: bool,

    /// Do not keep a timestamped backup of the previous board file
    #[arg(long)]
    no_backup: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Cycle direction as spelled on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDirection {
    /// Next footprint in sort order.
    Next,
    /// Previous footprint in sort order.
    Prev,
}

impl From<CliDirection> for Direction {
    fn from(d: CliDirection) -> Self {
        match d {
            CliDirection::Next => Self::Forward,
            CliDirection::Prev => Self::Backward,
        }
    }
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads a board document from disk.
fn read_board(path: &Path) -> Result<Board, BoardFileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| BoardFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| BoardFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a board document back to disk, keeping a timestamped backup of the
/// previous contents unless told not to.
fn write_board(path: &Path, board: &Board, backup: bool) -> Result<(), BoardFileError> {
    if backup && path.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let backup_path = path.with_extension(format!("json.{stamp}.bak"));
        std::fs::copy(path, &backup_path).map_err(|e| BoardFileError::Backup {
            path: backup_path.clone(),
            source: e,
        })?;
        debug!(backup = %backup_path.display(), "backed up previous board file");
    }

    let json = serde_json::to_string_pretty(board).map_err(|e| BoardFileError::Serialise {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| BoardFileError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let cfg = config::load_config(args.config.as_deref())?;

    let Some(root) = config::resolve_library_root(args.library_root.clone(), &cfg) else {
        return Err(format!(
            "no footprint library root configured; pass --library-root, set \
             library_root in the config file, or set {}",
            config::ENV_LIBRARY_ROOT
        )
        .into());
    };

    let order = if args.natural_sort {
        NameOrder::Natural
    } else {
        cfg.sort.order()
    };
    let catalog = DirectoryCatalog::new(root).with_order(order);
    let cycler = Cycler::new(catalog);

    let mut board = read_board(&args.board)?;

    // Stand in for the host's selection: the referenced component.
    let target = board
        .find_by_reference(&args.reference)
        .ok_or_else(|| BoardFileError::ComponentNotFound {
            reference: args.reference.clone(),
        })?
        .path;
    let selection = vec![SelectionItem::Component(target)];

    let outcome = cycler.cycle(&mut board, &selection, args.direction.into())?;

    match outcome {
        CycleOutcome::NoSelection => {
            warn!("nothing selected, board left untouched");
            Ok(false)
        }
        CycleOutcome::AtBoundary { footprint, .. } => {
            info!(footprint = %footprint, "already at the end of the library, board left untouched");
            Ok(false)
        }
        CycleOutcome::Replaced { from, to, .. } => {
            write_board(&args.board, &board, !args.no_backup)?;
            info!(
                reference = %args.reference,
                from = %from,
                to = %to,
                board = %args.board.display(),
                "board updated"
            );
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration early just for the log level; run() reloads it for
    // everything else so a config error surfaces after logging is up.
    let config_level = config::load_config(args.config.as_deref())
        .map(|c| c.logging.level)
        .unwrap_or_else(|_| "warn".to_string());
    init_tracing(get_log_level(args.verbose, args.quiet, &config_level));

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, reference = %args.reference, "footprint cycle failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_precedence() {
        assert_eq!(get_log_level(0, true, "debug"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(1, false, "error"), Level::INFO);
        assert_eq!(get_log_level(3, false, "warn"), Level::TRACE);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn cli_direction_maps_to_cycle_direction() {
        assert_eq!(Direction::from(CliDirection::Next), Direction::Forward);
        assert_eq!(Direction::from(CliDirection::Prev), Direction::Backward);
    }
}
