// lib.rs - chksum library root

//! # chksum - Command-line file checksum calculator
//!
//! Computes an uppercase hex digest for each file named on the command line.
//! Parameters accept the `-name`, `--name` and `/name` forms with the value
//! either in the next token or inline after `=` or `:`.
//!
//! ## Features
//!
//! - **Built-in digests**: MD5 (default), SHA1, SHA256
//! - **Macros**: an external script defining `ComputeHash` can replace the built-ins
//! - **Declarative binding**: parameters are bound to [`cli::Config`] through a field table
//!
//! ## Basic Usage
//!
//! ```rust
//! use chksum::prelude::*;
//!
//! let parsed = ParsedArgs::parse(&["-hashAlgorithm", "SHA256", "data.bin"]);
//! let config: Config = bind(&parsed, CONFIG_SPECS)?;
//! assert_eq!(config.algorithm(), "SHA256");
//! assert_eq!(parsed.files(), &["data.bin"]);
//! # Ok::<(), chksum::cli::BindingError>(())
//! ```

pub mod cli;
pub mod hashers;
pub mod output;
pub mod runner;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{bind, BindingError, Config, ParamSpec, ParsedArgs, CONFIG_SPECS};
    pub use crate::hashers::{FileHasher, HashProvider, HasherRegistry};
    pub use crate::output::{to_hex, Logger};
    pub use crate::runner::{run, RunOutcome};
}

pub use cli::{Config, ParsedArgs};
pub use runner::{run, RunOutcome};
