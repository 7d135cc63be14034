use log::debug;
use std::io::{self, Write};

use crate::config::DEFAULT_GREETING;

/// Holds a greeting and offers two small demonstration operations.
#[derive(Debug, Clone)]
pub struct Greeter {
    // Set once at construction and never read again.
    #[allow(dead_code)]
    counter: i32,
    greeting: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Greeter {
    /// Creates a greeter holding the default greeting.
    pub fn new() -> Self {
        debug!("Creating greeter with default greeting");
        Self {
            counter: 0,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Replaces the greeting. Any string is accepted, including an empty one.
    pub fn set_greeting(&mut self, greeting: impl Into<String>) {
        self.greeting = greeting.into();
        debug!("Greeting set to {:?}", self.greeting);
    }

    /// Writes the greeting and a line terminator to `out`.
    pub fn write_greeting<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.greeting)
    }

    /// Writes the greeting to standard output.
    pub fn print_greeting(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_greeting(&mut out)?;
        out.flush()
    }

    /// Adds two integers. Overflow wraps around in two's complement.
    pub fn add_two_numbers(&self, a: i32, b: i32) -> i32 {
        let sum = a.wrapping_add(b);
        debug!("{} + {} = {}", a, b, sum);
        sum
    }
}
