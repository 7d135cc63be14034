use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

use crate::{config::DEMO_OPERANDS, greeter::Greeter};

/// Runs the demonstration: print the greeting, then the sum of the demo operands.
pub fn run() -> Result<()> {
    debug!("Starting demo run");

    let greeter = Greeter::new();
    greeter
        .print_greeting()
        .context("Failed to print greeting")?;

    let (a, b) = DEMO_OPERANDS;
    let result = greeter.add_two_numbers(a, b);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", result).context("Failed to write result")?;
    out.flush().context("Failed to flush output")?;

    debug!("Demo run finished");
    Ok(())
}
