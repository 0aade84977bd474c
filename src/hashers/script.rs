// script.rs - External macro hasher

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::traits::open_input;

/// Function a macro has to define
pub const ENTRY_POINT: &str = "ComputeHash";

/// Loads a Python macro, calls its `ComputeHash(algorithm, path)` and prints
/// the returned bytes as hex. Arguments: macro path, algorithm, file.
const PYTHON_RUNNER: &str = "\
import runpy, sys
namespace = runpy.run_path(sys.argv[1])
digest = namespace['ComputeHash'](sys.argv[2], sys.argv[3])
sys.stdout.write(bytes(digest).hex())
";

/// How the entry point is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MacroKind {
    /// Top-level `def ComputeHash(algorithm, path)` returning bytes
    Python,
    /// Executable dispatching on its arguments: `<macro> ComputeHash <algorithm> <file>`
    /// must print the digest as hex on stdout
    Command,
}

/// Hashes files by running a user supplied macro script.
///
/// Python macros (a `python*` shebang, or a `.py` file without one) define a
/// `ComputeHash` function that is called directly. Any other macro is run as
/// `<interpreter> <macro> ComputeHash <algorithm> <file>`, with the
/// interpreter taken from the shebang line, and must print hex on stdout.
#[derive(Debug, Clone)]
pub struct ScriptHasher {
    path: PathBuf,
    interpreter: Option<Vec<String>>,
    kind: MacroKind,
}

impl ScriptHasher {
    /// Read the macro and check that it defines the entry point
    pub fn load(path: &Path) -> Result<Self, String> {
        let source = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read macro '{}': {}", path.display(), e))?;

        let mut interpreter = parse_shebang(&source);
        let kind = if is_python(path, interpreter.as_deref()) {
            MacroKind::Python
        } else {
            MacroKind::Command
        };
        if kind == MacroKind::Python && interpreter.is_none() {
            interpreter = Some(vec!["python3".to_string()]);
        }

        if !declares_entry_point(&source, kind)? {
            return Err(format!(
                "Macro '{}' does not define '{}'",
                path.display(),
                ENTRY_POINT
            ));
        }

        Ok(Self {
            path: command_path(path),
            interpreter,
            kind,
        })
    }

    /// Run the macro's entry point for one file
    pub fn compute_hash(&self, algorithm: &str, file: &Path) -> Result<Vec<u8>, String> {
        open_input(file)?;

        let mut command = match self.interpreter.as_deref() {
            Some([program, args @ ..]) => {
                let mut command = Command::new(program);
                command.args(args);
                if self.kind == MacroKind::Python {
                    command.arg("-c").arg(PYTHON_RUNNER);
                }
                command.arg(&self.path);
                command
            }
            _ => Command::new(&self.path),
        };
        if self.kind == MacroKind::Command {
            command.arg(ENTRY_POINT);
        }
        command.arg(algorithm).arg(file);

        let output = command
            .output()
            .map_err(|e| format!("Failed to run macro '{}': {}", self.path.display(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.lines().last().unwrap_or("").trim();
            return Err(format!(
                "Macro '{}' failed ({}): {}",
                self.path.display(),
                output.status,
                reason
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let digest = stdout.trim();
        if digest.is_empty() {
            return Err(format!("Macro '{}' returned no hash", self.path.display()));
        }
        hex::decode(digest).map_err(|e| {
            format!(
                "Macro '{}' returned an invalid hash '{}': {}",
                self.path.display(),
                digest,
                e
            )
        })
    }
}

fn is_python(path: &Path, interpreter: Option<&[String]>) -> bool {
    match interpreter {
        Some(argv) => argv.iter().any(|arg| {
            Path::new(arg)
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("python"))
        }),
        None => path.extension().is_some_and(|ext| ext == "py"),
    }
}

fn declares_entry_point(source: &str, kind: MacroKind) -> Result<bool, String> {
    let pattern = match kind {
        MacroKind::Python => format!(r"(?m)^def\s+{}\s*\(", ENTRY_POINT),
        MacroKind::Command => format!(
            r"(?m)^\s*(?:(?:function|sub|proc)\s+{0}\b|{0}\s*\(\))",
            ENTRY_POINT
        ),
    };
    let regex = Regex::new(&pattern).map_err(|e| format!("Invalid entry point pattern: {}", e))?;
    Ok(regex.is_match(source))
}

fn parse_shebang(source: &str) -> Option<Vec<String>> {
    let line = source.lines().next()?.strip_prefix("#!")?;
    let argv: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if argv.is_empty() {
        None
    } else {
        Some(argv)
    }
}

// A bare file name would be looked up on PATH when executed
fn command_path(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}
