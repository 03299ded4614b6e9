#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! An interactive calculator.
//!
//! Reads `<operation> <number1> <number2>` lines, prints the result of each
//! calculation and keeps a history of the session.

mod cli;
mod error;
mod repl;

use calculation::{Registry, Session};
use cli::prelude::*;
use error::Error;
use is_terminal::IsTerminal;
use repl::{Editor, Plain};
use std::{io, process};
use structopt::StructOpt;

fn main() {
    pretty_env_logger::init();
    log::info!("Starting calculator.");

    let opt = Opt::from_args();
    log::debug!("Command line arguments: {:#?}", opt);

    if let Err(err) = run(&opt) {
        log::error!("Calculator failed: {}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), Error> {
    let config = Config::load(opt.config.as_deref())?;
    log::debug!("Configuration: {:#?}", config);

    // an inconsistent registry must never reach the session
    let registry = Registry::with_builtins()?;
    let mut session = Session::new(registry);

    let plain = opt.plain || !config.repl.line_editing;
    if needs_interrupt_handler(plain, io::stdin().is_terminal()) {
        exit_on_interrupt()?;
    }

    let mut out = io::stdout();
    let ending = if plain {
        let stdin = io::stdin();
        let mut source = Plain::new(stdin.lock(), io::stdout());
        repl::run(&mut session, &mut source, &mut out, &config.repl)?
    } else {
        let mut source = Editor::new(config.repl.recall_size)?;
        repl::run(&mut session, &mut source, &mut out, &config.repl)?
    };

    log::info!(
        "Session ended ({:?}) after {} calculations.",
        ending,
        session.history().len()
    );
    Ok(())
}

/// The line editor only turns Ctrl-C into an input event while it owns a terminal.
const fn needs_interrupt_handler(plain: bool, stdin_is_terminal: bool) -> bool {
    plain || !stdin_is_terminal
}

/// Ctrl-C arrives as a signal here, end the session gracefully.
#[cfg(unix)]
fn exit_on_interrupt() -> Result<(), Error> {
    use signal_hook::{consts::signal::SIGINT, iterator::Signals};
    use std::thread;

    let mut signals = Signals::new(&[SIGINT])?;
    thread::spawn(move || {
        if signals.forever().next().is_some() {
            println!("\n{}", repl::INTERRUPTED);
            log::info!("Session interrupted.");
            process::exit(0);
        }
    });
    Ok(())
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn exit_on_interrupt() -> Result<(), Error> {
    Ok(())
}
