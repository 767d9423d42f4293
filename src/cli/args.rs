//! Positional argument resolution
//!
//! Each operation takes one to three positionals. Missing leading or trailing
//! positionals default to stdin and stdout:
//!
//! | given | merge                       | repeat                   |
//! |-------|-----------------------------|--------------------------|
//! | 1     | `-` `<addition>` `-`        | `-` `<count>` `-`        |
//! | 2     | `<base>` `<addition>` `-`   | `<input>` `<count>` `-`  |
//! | 3     | `<base>` `<addition>` `<output>` | `<input>` `<count>` `<output>` |

use std::fmt;
use std::path::PathBuf;

use crate::config::ToolConfig;
use crate::error::{EvemuError, Result};
use crate::transform::Operation;

/// Path argument that stands for stdin or stdout
pub const STDIO_MARKER: &str = "-";

/// Where a recording is read from or written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// stdin for inputs, stdout for the output
    Stdio,
    /// A file on disk
    Path(PathBuf),
}

impl Location {
    /// Interpret a command-line path argument
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIO_MARKER {
            Location::Stdio
        } else {
            Location::Path(PathBuf::from(arg))
        }
    }

    /// Check if this is stdin/stdout
    pub fn is_stdio(&self) -> bool {
        matches!(self, Location::Stdio)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Stdio => f.write_str(STDIO_MARKER),
            Location::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A fully resolved command line
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Print usage and exit
    Help,
    /// Merge `addition` after `base`
    Merge {
        base: Location,
        addition: Location,
        output: Location,
    },
    /// Repeat `input` `count` times
    Repeat {
        input: Location,
        count: i64,
        output: Location,
    },
}

impl Invocation {
    /// The operation this invocation runs, if any
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Invocation::Help => None,
            Invocation::Merge { .. } => Some(Operation::Merge),
            Invocation::Repeat { .. } => Some(Operation::Repeat),
        }
    }

    /// Where the result goes
    pub fn output(&self) -> Option<&Location> {
        match self {
            Invocation::Help => None,
            Invocation::Merge { output, .. } | Invocation::Repeat { output, .. } => Some(output),
        }
    }
}

/// Usage text covering every operation
pub fn usage() -> String {
    let mut text = String::new();
    for op in Operation::ALL {
        text.push_str(&op.usage());
        text.push('\n');
    }
    text.push_str("  a missing or '-' input is read from stdin\n");
    text.push_str("  a missing or '-' output is written to stdout\n");
    text
}

/// Resolve command-line arguments (program name excluded)
pub fn parse_args<I, S>(args: I, config: &ToolConfig) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

    let Some((first, positionals)) = args.split_first() else {
        return Err(EvemuError::Usage(usage()));
    };

    if first == "-h" || first == "--help" {
        return Ok(Invocation::Help);
    }

    let operation: Operation = first
        .parse()
        .map_err(|e: EvemuError| EvemuError::Usage(format!("{}\n{}", e, usage())))?;

    let (leading, middle, trailing) = match positionals {
        [middle] => (STDIO_MARKER, middle.as_str(), STDIO_MARKER),
        [leading, middle] => (leading.as_str(), middle.as_str(), STDIO_MARKER),
        [leading, middle, trailing] => (leading.as_str(), middle.as_str(), trailing.as_str()),
        _ => return Err(EvemuError::Usage(operation.usage())),
    };

    match operation {
        Operation::Merge => {
            let base = Location::from_arg(leading);
            let addition = Location::from_arg(middle);
            if base.is_stdio() && addition.is_stdio() {
                return Err(EvemuError::Usage(format!(
                    "base and addition cannot both be read from stdin\n{}",
                    operation.usage()
                )));
            }
            Ok(Invocation::Merge {
                base,
                addition,
                output: Location::from_arg(trailing),
            })
        }
        Operation::Repeat => Ok(Invocation::Repeat {
            input: Location::from_arg(leading),
            count: parse_repeat_count(middle, config.default_repeat_count),
            output: Location::from_arg(trailing),
        }),
    }
}

/// Parse a repeat count, falling back to `fallback` if it is not an integer
pub fn parse_repeat_count(arg: &str, fallback: i64) -> i64 {
    arg.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid repeat count {:?}, using {}", arg, fallback);
        fallback
    })
}
