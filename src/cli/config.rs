// config.rs - Tool configuration bound from the command line

use crate::cli::params::{Bindable, FieldSpec, ParamSpec};

/// Algorithm used when `-hashAlgorithm` is not given
pub const DEFAULT_ALGORITHM: &str = "MD5";

/// Tokens that short-circuit to the usage text (compared ignoring ASCII case)
pub const HELP_KEYS: &[&str] = &[
    "-?", "--?", "/?", "-h", "--h", "/h", "-help", "--help", "/help",
];

/// Field table for `Config`, in declaration order
pub const CONFIG_SPECS: &[FieldSpec] = &[
    (
        "hash_algorithm",
        ParamSpec::new(&["hashAlgorithm"], "Cryptographic hash algorithm.", false),
    ),
    ("macro_path", ParamSpec::new(&["macro"], "Custom macro.", false)),
];

/// Resolved settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub hash_algorithm: String,
    pub macro_path: String,
}

impl Config {
    /// Requested algorithm name, or the default when none was given
    pub fn algorithm(&self) -> &str {
        if self.hash_algorithm.is_empty() {
            DEFAULT_ALGORITHM
        } else {
            &self.hash_algorithm
        }
    }

    pub fn macro_path(&self) -> Option<&str> {
        if self.macro_path.is_empty() {
            None
        } else {
            Some(&self.macro_path)
        }
    }
}

impl Bindable for Config {
    fn accepts_text(&self, field: &str) -> bool {
        matches!(field, "hash_algorithm" | "macro_path")
    }

    fn set_text(&mut self, field: &str, value: &str) {
        match field {
            "hash_algorithm" => self.hash_algorithm = value.to_string(),
            "macro_path" => self.macro_path = value.to_string(),
            _ => {}
        }
    }
}

/// True when any token asks for help
pub fn is_help_request<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|token| {
        HELP_KEYS
            .iter()
            .any(|key| token.as_ref().eq_ignore_ascii_case(key))
    })
}

/// Usage text built from the field table
pub fn usage(algorithms: &[&str]) -> String {
    let mut options = Vec::new();
    for (field, spec) in CONFIG_SPECS {
        let name = spec.canonical().unwrap_or(*field);
        options.push((format!("-{} <{}>", name, placeholder(field)), spec.description));
    }
    options.push(("-?".to_string(), "Displays help at the command prompt."));

    let synopsis = options
        .iter()
        .take(CONFIG_SPECS.len())
        .map(|(option, _)| format!("[{}]", option))
        .collect::<Vec<_>>()
        .join(" ");

    let mut text = String::new();
    text.push_str("Usage:\n");
    text.push_str(&format!("\tchksum {} file [file...]\n\n", synopsis));
    text.push_str("Parameters:\n");
    for (option, description) in &options {
        text.push_str(&format!("\t{:<33}{}\n", option, description));
    }
    text.push_str("Where:\n");
    text.push_str(&format!("\t<{}>:\n", placeholder("hash_algorithm")));
    for name in algorithms {
        text.push_str(&format!("\t\t{:<31}\"{}\"\n", format!("{}:", name), name));
    }
    text.push_str(&format!("\t\tDefault: {}\n", DEFAULT_ALGORITHM));
    text.push_str("Note:\n");
    text.push_str("\tCommand-line options are case-sensitive.\n");
    text.push_str("\tA file path starting with '/' is read as a parameter; use a relative path such as ./file.\n");
    text
}

fn placeholder(field: &str) -> String {
    field.replace("_path", "").replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ParsedArgs;
    use crate::cli::binder::bind;

    #[test]
    fn test_bind_config() {
        let parsed = ParsedArgs::parse(&["-hashAlgorithm", "SHA256", "--macro=hash.py", "a.bin"]);
        let config: Config = bind(&parsed, CONFIG_SPECS).unwrap();
        assert_eq!(config.algorithm(), "SHA256");
        assert_eq!(config.macro_path(), Some("hash.py"));
    }

    #[test]
    fn test_defaults() {
        let parsed = ParsedArgs::parse(&["a.bin"]);
        let config: Config = bind(&parsed, CONFIG_SPECS).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.algorithm(), DEFAULT_ALGORITHM);
        assert_eq!(config.macro_path(), None);
    }

    #[test]
    fn test_options_are_case_sensitive() {
        let parsed = ParsedArgs::parse(&["-hashalgorithm", "SHA1"]);
        let config: Config = bind(&parsed, CONFIG_SPECS).unwrap();
        assert_eq!(config.algorithm(), DEFAULT_ALGORITHM);
    }

    #[test]
    fn test_help_request() {
        assert!(is_help_request(&["file", "-?"]));
        assert!(is_help_request(&["/HELP"]));
        assert!(is_help_request(&["--H"]));
        assert!(!is_help_request(&["-hashAlgorithm", "MD5"]));
        assert!(!is_help_request(&["-helpme"]));
        assert!(!is_help_request::<&str>(&[]));
    }

    #[test]
    fn test_usage_lists_parameters() {
        let text = usage(&["MD5", "SHA1", "SHA256"]);
        assert!(text.starts_with("Usage:"));
        assert!(text.contains("-hashAlgorithm <hash algorithm>"));
        assert!(text.contains("-macro <macro>"));
        assert!(text.contains("Custom macro."));
        assert!(text.contains("\"SHA256\""));
        assert!(text.contains("case-sensitive"));
    }
}
