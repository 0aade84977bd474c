// mod.rs - Run-scoped logger and digest rendering

use std::fmt;
use std::io::{self, Write};

/// Severity printed in each log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Information => write!(f, "Information"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// Log sink owned by the runner for the duration of one run.
///
/// Lines look like `[2024-01-31 12:00:00][Information] file.txt: 7F2C`.
pub struct Logger {
    out: Box<dyn Write + Send>,
    timestamps: bool,
}

impl Logger {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            timestamps: true,
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Enable or disable the timestamp prefix
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn info(&mut self, message: &str) {
        self.write_line(Severity::Information, message);
    }

    pub fn error(&mut self, message: &str) {
        self.write_line(Severity::Error, message);
    }

    /// Write text as-is, without prefix
    pub fn raw(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            eprintln!("Log write error: {}", e);
        }
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            eprintln!("Log flush error: {}", e);
        }
    }

    fn write_line(&mut self, severity: Severity, message: &str) {
        let result = if self.timestamps {
            writeln!(
                self.out,
                "[{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                severity,
                message
            )
        } else {
            writeln!(self.out, "[{}] {}", severity, message)
        };
        if let Err(e) = result {
            eprintln!("Log write error: {}", e);
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

/// Uppercase hex without separators, e.g. `[0x7F, 0x2C]` -> `"7F2C"`
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
