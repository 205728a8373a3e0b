//! DEVCON line host.
//!
//! Reads lines from stdin and feeds them to a console session. A line
//! starting with `?` lists suggestions for the rest of the line; `:up` and
//! `:down` recall history; `:quit` exits. Everything else is submitted.
//! Lines starting with `@` are swallowed by a preprocessor and never run.

mod commands;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use commands::{Output, demo_commands};
use devcon_console::{
    Console, ConsoleConfig, ConsoleEvent, DispatchOutcome, DispatchResult, PreprocessorHandle,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg or DEVCON_CONFIG env var.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEVCON_CONFIG").ok())
    {
        Some(path) => ConsoleConfig::load(Path::new(&path))?,
        None => ConsoleConfig::default(),
    };
    let prompt = config.prompt.clone();

    let out = Output::new();
    let mut console = Console::with_commands(config, demo_commands(&out));
    console.set_reporter(report);

    let quiet: PreprocessorHandle = Arc::new(|line: &str| {
        if line.starts_with('@') {
            log::debug!("Swallowed {line:?}");
            None
        } else {
            Some(line.to_string())
        }
    });
    console.add_preprocessor(quiet);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if !console.is_visible() {
            console.handle_event(&ConsoleEvent::Show);
        }

        match line {
            ":quit" => break,
            ":up" | ":down" => {
                let event = if line == ":up" {
                    ConsoleEvent::HistoryUp
                } else {
                    ConsoleEvent::HistoryDown
                };
                console.handle_event(&event);
                writeln!(stdout, "{}", console.input())?;
            },
            _ if line.starts_with('?') => {
                console.handle_event(&ConsoleEvent::SetInput(line[1..].to_string()));
                for candidate in console.suggestions() {
                    writeln!(stdout, "  {}", candidate.label)?;
                }
            },
            _ => {
                console.handle_event(&ConsoleEvent::SetInput(line.to_string()));
                console.handle_event(&ConsoleEvent::Submit);
                for text in out.drain() {
                    writeln!(stdout, "{text}")?;
                }
            },
        }
    }

    console.teardown();
    Ok(())
}

fn report(result: &DispatchResult) {
    match result {
        Ok(DispatchOutcome::Success { command }) => log::debug!("`{command}` done"),
        Ok(DispatchOutcome::NoOp) => {},
        Err(e) => eprintln!("error: {e}"),
    }
}
