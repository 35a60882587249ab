use anyhow::{Context, Result};
use colored::*;
use std::io::{self, BufRead, Write};

use crate::selector::{classify, Classification};

pub const PROMPT: &str = "How tired are you on a scale from 0 to 5? ";

/// Run the ask command against the process's stdin and stdout
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Prompt once, read one line, and write the matching response.
///
/// Invalid input is answered with the fallback response rather than
/// returned as an error; only I/O failures surface as `Err`.
pub fn run_with<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Classification> {
    // colored checks the process's stdout, not `output`, when deciding to style
    write!(output, "{}", PROMPT.bold()).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    // Raw bytes so non-UTF-8 input classifies as invalid instead of failing the read.
    // EOF leaves the line empty, which also classifies as invalid.
    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("Failed to read tiredness level from stdin")?;

    let classification = classify(&String::from_utf8_lossy(&line));
    writeln!(output, "{}", classification.response()).context("Failed to write response")?;

    Ok(classification)
}
