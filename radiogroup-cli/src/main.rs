//! Interactive driver for a radio group.
//!
//! Usage: `radiogroup-cli [single|multiple] [--log PATH]`, then type commands
//! on stdin (`help` lists them). Group events are printed as they happen.

mod command;
mod session;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use radiogroup::SelectionMode;
use simplelog::{Config, LevelFilter, WriteLogger};

use command::Command;
use session::Session;

/// Driver command line arguments.
#[derive(Parser, Debug)]
#[command(name = "radiogroup-cli")]
#[command(about = "Drive a radio group from stdin commands")]
#[command(version)]
struct Args {
    /// Selection mode of the group (single or multiple)
    #[arg(default_value_t = SelectionMode::Single)]
    mode: SelectionMode,

    /// Log file
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "RADIOGROUP_LOG",
        default_value = "radiogroup.log"
    )]
    log: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logging
    if let Ok(log_file) = File::create(&args.log) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run(args.mode) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(mode: SelectionMode) -> io::Result<()> {
    info!("starting {} session", mode);
    let mut session = Session::new(mode);
    let mut stdout = io::stdout();

    for line in io::stdin().lock().lines() {
        let command = match Command::parse(&line?) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        match session.execute(command) {
            Ok(lines) => {
                for line in lines {
                    writeln!(stdout, "{line}")?;
                }
                stdout.flush()?;
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    info!(
        "session ended with pressed indexes {:?}",
        session.group().pressed_indexes()
    );
    Ok(())
}
