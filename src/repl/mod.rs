//! REPL Module
//!
//! Interactive prompt that reads commands, runs them against a [`Session`]
//! and prints their output.

mod commands;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::Result;

pub use commands::Command;
pub use session::{catch_chance, roll_catch, Flow, Session};

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words on any whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Command failures and lines that are not valid UTF-8 are reported and the
/// loop carries on. Only failing to read input or write output ends the loop
/// with an error.
pub async fn run<R, W>(session: &mut Session, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            debug!("End of input");
            writeln!(out)?;
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                warn!("Skipping input line that is not valid UTF-8: {}", err);
                writeln!(out, "Error: input is not valid UTF-8")?;
                continue;
            }
        };

        let words = clean_input(line);
        let Some((word, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::parse(word) else {
            writeln!(
                out,
                "Unknown command: {}. Type 'help' for a list of commands.",
                word
            )?;
            continue;
        };

        match session.execute(command, args, out).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    Ok(())
}
