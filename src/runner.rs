// runner.rs - One checksum run: parse, bind, select provider, hash files

use rayon::prelude::*;
use std::path::Path;

use crate::cli::{bind, is_help_request, usage, Config, ParsedArgs, CONFIG_SPECS};
use crate::hashers::{HashProvider, HasherRegistry};
use crate::output::{to_hex, Logger};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Usage text was printed (no arguments or a help marker)
    Usage,
    /// Binding failed or the macro could not be loaded; no file was processed
    Fatal(String),
    /// Every file was attempted
    Completed { hashed: usize, failed: usize },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Usage => 0,
            RunOutcome::Completed { failed: 0, .. } => 0,
            RunOutcome::Completed { .. } | RunOutcome::Fatal(_) => 1,
        }
    }
}

/// Run the tool over `tokens` (program name excluded), logging to `logger`
pub fn run<S: AsRef<str>>(tokens: &[S], logger: &mut Logger) -> RunOutcome {
    if tokens.is_empty() || is_help_request(tokens) {
        let registry = HasherRegistry::new();
        logger.raw(&usage(&registry.get_hasher_names()));
        return RunOutcome::Usage;
    }

    let parsed = ParsedArgs::parse(tokens);
    let config: Config = match bind(&parsed, CONFIG_SPECS) {
        Ok(config) => config,
        Err(e) => return fatal(logger, e.to_string()),
    };
    let provider = match HashProvider::from_config(&config) {
        Ok(provider) => provider,
        Err(e) => return fatal(logger, e),
    };

    hash_files(&provider, parsed.files(), logger)
}

/// Digest `files` in parallel and log results in command line order
pub fn hash_files(provider: &HashProvider, files: &[String], logger: &mut Logger) -> RunOutcome {
    let results: Vec<Result<Vec<u8>, String>> = files
        .par_iter()
        .map(|file| provider.hash_file(Path::new(file)))
        .collect();

    let mut hashed = 0;
    let mut failed = 0;
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(digest) => {
                logger.info(&format!("{}: {}", file, to_hex(&digest)));
                hashed += 1;
            }
            Err(e) => {
                logger.error(&per_file_message(file, &e));
                failed += 1;
            }
        }
    }
    logger.flush();

    RunOutcome::Completed { hashed, failed }
}

fn fatal(logger: &mut Logger, message: String) -> RunOutcome {
    logger.error(&message);
    logger.flush();
    RunOutcome::Fatal(message)
}

// Missing-file messages already start with the file name
fn per_file_message(file: &str, error: &str) -> String {
    if error.starts_with(&format!("{}:", file)) {
        error.to_string()
    } else {
        format!("{}: {}", file, error)
    }
}
