// mod.rs - CLI module

pub mod args;
pub mod binder;
pub mod config;
pub mod params;

// Re-export main types for convenience
pub use args::{strip_quotes, ParsedArgs};
pub use binder::{bind, BindingError};
pub use config::{is_help_request, usage, Config, CONFIG_SPECS, DEFAULT_ALGORITHM};
pub use params::{Bindable, FieldSpec, ParamSpec};
