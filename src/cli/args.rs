// args.rs - Command line tokenizer

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Leading parameter marker (`-`, `--`, `/`) or an inline value separator (`=`, `:`).
/// A colon followed by a backslash is rejected by `split_token`, so `C:\path` stays whole.
const SPLITTER_PATTERN: &str = r"^-{1,2}|^/|=|:";

fn splitter() -> &'static Regex {
    static SPLITTER: OnceLock<Regex> = OnceLock::new();
    SPLITTER.get_or_init(|| Regex::new(SPLITTER_PATTERN).expect("splitter pattern is valid"))
}

/// Parameters and positional file arguments extracted from a raw token list.
///
/// Valid parameter forms: `{-,--,/}name{ ,=,:}(["']value["'])`, e.g.
/// `-param1 value1 --param2 /param3:"Test-:-work" /param4=happy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    parameters: HashMap<String, String>,
    files: Vec<String>,
}

impl ParsedArgs {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `tokens` into a fresh `ParsedArgs`. Never fails.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut parsed = Self::new();
        parsed.parse_into(tokens);
        parsed
    }

    /// Tokenize another batch of tokens into this result.
    /// A parameter left waiting for its value at the end of a batch does not
    /// carry over into the next one.
    pub fn parse_into<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let mut pending_key: Option<String> = None;

        for token in tokens {
            let parts = split_token(token.as_ref());

            match parts.as_slice() {
                // Plain text: the value of a pending parameter, otherwise a file
                [text] => match pending_key.take() {
                    Some(key) => {
                        self.parameters.insert(key, strip_quotes(text).to_string());
                    }
                    None => self.files.push(strip_quotes(text).to_string()),
                },
                // Parameter without a value yet
                [_, name] => {
                    self.parameters.insert(name.to_string(), String::new());
                    pending_key = Some(name.to_string());
                }
                // Parameter with an inline value
                [_, name, value] => {
                    self.parameters
                        .insert(name.to_string(), strip_quotes(value).to_string());
                    pending_key = None;
                }
                _ => unreachable!("split_token yields one to three parts"),
            }
        }
    }

    /// Value recorded for `name`; `Some("")` for a flag given without a value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    /// Positional arguments in command line order
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Split a token at the leading marker and the first inline separator,
/// producing at most three parts (prefix, name, value).
fn split_token(token: &str) -> Vec<&str> {
    let mut parts = Vec::with_capacity(3);
    let mut last = 0;

    for m in splitter().find_iter(token) {
        if m.as_str() == ":" && token[m.end()..].starts_with('\\') {
            continue;
        }
        parts.push(&token[last..m.start()]);
        last = m.end();
        if parts.len() == 2 {
            break;
        }
    }
    parts.push(&token[last..]);
    parts
}

/// Remove at most one leading and one trailing quote (`'` or `"`).
/// The two quotes need not match.
pub fn strip_quotes(value: &str) -> &str {
    let is_quote = |c: char| c == '\'' || c == '"';
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> ParsedArgs {
        ParsedArgs::parse(tokens)
    }

    #[test]
    fn test_split_token() {
        assert_eq!(split_token("file.txt"), vec!["file.txt"]);
        assert_eq!(split_token("-name"), vec!["", "name"]);
        assert_eq!(split_token("--name"), vec!["", "name"]);
        assert_eq!(split_token("/name"), vec!["", "name"]);
        assert_eq!(split_token("-name=value"), vec!["", "name", "value"]);
        assert_eq!(split_token("/name:a=b:c"), vec!["", "name", "a=b:c"]);
        assert_eq!(split_token("-path:C:\\temp"), vec!["", "path", "C:\\temp"]);
        assert_eq!(split_token("C:\\temp\\file.txt"), vec!["C:\\temp\\file.txt"]);
    }

    #[test]
    fn test_positional_order() {
        let parsed = parse(&["fileA", "-x", "1", "fileB", "fileA"]);
        assert_eq!(parsed.files(), &["fileA", "fileB", "fileA"]);
        assert_eq!(parsed.get("x"), Some("1"));
    }

    #[test]
    fn test_all_marker_forms() {
        let parsed = parse(&[
            "-param1",
            "value1",
            "--param2",
            "/param3:\"Test-:-work\"",
            "/param4=happy",
            "-param5",
            "'--=nice=--'",
        ]);
        assert_eq!(parsed.get("param1"), Some("value1"));
        assert_eq!(parsed.get("param2"), Some(""));
        assert_eq!(parsed.get("param3"), Some("Test-:-work"));
        assert_eq!(parsed.get("param4"), Some("happy"));
        // The '=' inside the quoted value splits it like any other token
        assert_eq!(parsed.get("param5"), Some(""));
        assert_eq!(parsed.get("nice"), Some("--"));
        assert!(parsed.files().is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let parsed = parse(&["-x", "1", "-x", "2"]);
        assert_eq!(parsed.get("x"), Some("2"));
        assert_eq!(parsed.parameters().len(), 1);
    }

    #[test]
    fn test_colon_backslash_guard() {
        let parsed = parse(&["-path:C:\\temp"]);
        assert_eq!(parsed.get("path"), Some("C:\\temp"));

        let parsed = parse(&["-path", "C:\\temp"]);
        assert_eq!(parsed.get("path"), Some("C:\\temp"));
        assert!(parsed.files().is_empty());
    }

    #[test]
    fn test_quoted_inline_value() {
        let parsed = parse(&["-name=\"Alice Bob\""]);
        assert_eq!(parsed.get("name"), Some("Alice Bob"));
    }

    #[test]
    fn test_flag_then_flag() {
        let parsed = parse(&["-a", "-b", "val"]);
        assert_eq!(parsed.get("a"), Some(""));
        assert_eq!(parsed.get("b"), Some("val"));
        assert!(parsed.files().is_empty());
    }

    #[test]
    fn test_inline_value_clears_pending_key() {
        let parsed = parse(&["-a", "-b=1", "file"]);
        assert_eq!(parsed.get("a"), Some(""));
        assert_eq!(parsed.get("b"), Some("1"));
        assert_eq!(parsed.files(), &["file"]);
    }

    #[test]
    fn test_separator_without_marker() {
        let parsed = parse(&["a=b", "x=y:z"]);
        assert_eq!(parsed.get("b"), Some(""));
        assert_eq!(parsed.get("y"), Some("z"));
        assert!(parsed.files().is_empty());
    }

    #[test]
    fn test_empty_marker() {
        let parsed = parse(&["-", "value"]);
        assert_eq!(parsed.get(""), Some("value"));

        let parsed = parse(&["--"]);
        assert_eq!(parsed.get(""), Some(""));
    }

    #[test]
    fn test_empty_value_distinct_from_absent() {
        let parsed = parse(&["-flag"]);
        assert!(parsed.contains("flag"));
        assert_eq!(parsed.get("flag"), Some(""));
        assert!(!parsed.contains("other"));
        assert_eq!(parsed.get("other"), None);
    }

    #[test]
    fn test_parse_into_resets_pending_key() {
        let mut parsed = ParsedArgs::new();
        parsed.parse_into(&["-a"]);
        parsed.parse_into(&["file"]);
        assert_eq!(parsed.get("a"), Some(""));
        assert_eq!(parsed.files(), &["file"]);
    }

    #[test]
    fn test_every_token_accounted_for() {
        let tokens = [
            "a.txt", "-x", "1", "-flag", "/y:2", "b.txt", "--z", "-w=3", "c.txt",
        ];
        let parsed = parse(&tokens);

        // -x 1 takes two tokens, every other token takes one
        let consumed = parsed.files().len() + parsed.parameters().len() + 1;
        assert_eq!(consumed, tokens.len());
        assert_eq!(parsed.files(), &["a.txt", "b.txt", "c.txt"]);
        assert_eq!(parsed.get("flag"), Some(""));
        assert_eq!(parsed.get("z"), Some(""));
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"quoted\""), "quoted");
        assert_eq!(strip_quotes("'quoted'"), "quoted");
        assert_eq!(strip_quotes("'mixed\""), "mixed");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("close'"), "close");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_strip_quotes_idempotent_on_single_layer() {
        for s in ["\"a b\"", "'x'", "plain", "\"", "", "'half"] {
            let once = strip_quotes(s);
            assert_eq!(strip_quotes(once), once);
        }
    }
}
