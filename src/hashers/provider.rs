// provider.rs - Hash provider selected once per run

use std::path::Path;

use super::registry::HasherRegistry;
use super::script::ScriptHasher;
use super::traits::{open_input, FileHasher};
use crate::cli::Config;

/// Where digests come from for this run
#[derive(Debug)]
pub enum HashProvider {
    /// One of the registered digest algorithms
    Builtin(Box<dyn FileHasher>),
    /// A macro script; the algorithm name is passed through unchecked
    ExternalScript {
        script: ScriptHasher,
        algorithm: String,
    },
    /// An algorithm name nothing is registered for; every file fails with it
    Unknown(String),
}

impl HashProvider {
    /// Pick the provider for `config`. Fails before any file is touched only
    /// when the macro is unusable; an unknown algorithm is reported per file.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        match config.macro_path() {
            Some(path) => Ok(HashProvider::ExternalScript {
                script: ScriptHasher::load(Path::new(path))?,
                algorithm: config.algorithm().to_string(),
            }),
            None => Ok(Self::builtin(config.algorithm())),
        }
    }

    /// Provider for a registered algorithm name (case-sensitive)
    pub fn builtin(algorithm: &str) -> Self {
        match HasherRegistry::new().take_hasher(algorithm) {
            Some(hasher) => HashProvider::Builtin(hasher),
            None => HashProvider::Unknown(algorithm.to_string()),
        }
    }

    /// Digest one file
    pub fn hash_file(&self, path: &Path) -> Result<Vec<u8>, String> {
        match self {
            HashProvider::Builtin(hasher) => hasher.hash_file(path),
            HashProvider::ExternalScript { script, algorithm } => {
                script.compute_hash(algorithm, path)
            }
            HashProvider::Unknown(algorithm) => {
                open_input(path)?;
                Err(format!("Invalid hash algorithm name: {}", algorithm))
            }
        }
    }
}
