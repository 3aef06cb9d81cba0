//! Interactive staff payroll manager.
//!
//! Loads the staff file, then runs the text menu on stdin/stdout. Fatal
//! errors (unreadable config or staff file, malformed records, a failing
//! terminal) are logged once and end the process with exit status 1.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error, info};

use staff_payroll::cli::MenuSession;
use staff_payroll::config::{AppConfig, ConfigLoader};
use staff_payroll::error::{PayrollError, PayrollResult};
use staff_payroll::storage::{FileBackend, StorageBackend};
use staff_payroll::store::StaffStore;

#[derive(Debug, Parser)]
#[command(name = "staff-payroll", version, about = "Staff Payroll Management System")]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Staff records file (overrides the configuration)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace (overrides the configuration)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn resolve_config(args: Args) -> PayrollResult<(AppConfig, Level)> {
    let mut config = ConfigLoader::load_or_default(args.config.as_ref())?;
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    let level = config.level()?;
    Ok((config, level))
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &AppConfig) -> PayrollResult<()> {
    let mut store = StaffStore::open(FileBackend::new(&config.data_file))?;
    info!(records = store.len(), "Store ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut store, stdin.lock(), stdout.lock())
}

fn run_session<B, R, W>(store: &mut StaffStore<B>, input: R, output: W) -> PayrollResult<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    MenuSession::new(store, input, output)
        .run()
        .map_err(|e| PayrollError::TerminalFailed {
            message: e.to_string(),
        })
}

fn main() -> ExitCode {
    let args = Args::parse();
    let (config, level) = match resolve_config(args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Critical error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Fatal error");
            eprintln!("Critical error: {}", e);
            ExitCode::FAILURE
        }
    }
}
