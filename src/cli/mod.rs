//! Command-line front end
//!
//! A thin layer over the core: resolve arguments into an [`Invocation`],
//! read every input, apply one transform, then write the result. Nothing is
//! written until the transform has succeeded.

pub mod args;
pub mod io;

pub use args::{parse_args, usage, Invocation, Location};

use std::io::{BufRead, Write};

use crate::config::ToolConfig;
use crate::error::{EvemuError, Result, ResultExt};
use crate::transform::{self, Operation};

/// What a completed invocation produced
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The transform that ran
    pub operation: Operation,
    /// Number of events written
    pub events_written: usize,
    /// Repeat count, for repeat invocations
    pub repeat_count: Option<i64>,
    /// Where the result went
    pub output: Location,
}

impl Outcome {
    /// Human-readable summary line
    pub fn summary(&self) -> String {
        match (self.operation, self.repeat_count) {
            (Operation::Repeat, Some(count)) => format!(
                "Done! Generated {} repeats ({} events) into {}",
                count, self.events_written, self.output
            ),
            _ => format!(
                "Done! Recordings merged ({} events) into {}",
                self.events_written, self.output
            ),
        }
    }
}

/// Run a resolved invocation against the given stdin and stdout
///
/// Returns `None` for [`Invocation::Help`], after printing usage to `stdout`.
pub fn execute<R: BufRead, W: Write>(
    invocation: &Invocation,
    mut stdin: R,
    mut stdout: W,
) -> Result<Option<Outcome>> {
    let (Some(operation), Some(output)) = (invocation.operation(), invocation.output()) else {
        stdout
            .write_all(usage().as_bytes())
            .map_err(EvemuError::WriteFailure)?;
        return Ok(None);
    };

    let (result, repeat_count) = match invocation {
        Invocation::Help => return Ok(None),
        Invocation::Merge { base: base_at, addition: addition_at, .. } => {
            let base = io::read_recording(base_at, &mut stdin)
                .with_context(|| format!("Failed to read base recording {}", base_at))?;
            let addition = io::read_recording(addition_at, &mut stdin)
                .with_context(|| format!("Failed to read addition recording {}", addition_at))?;
            (transform::merge(base, addition), None)
        }
        Invocation::Repeat { input, count, .. } => {
            let recording = io::read_recording(input, &mut stdin)
                .with_context(|| format!("Failed to read recording {}", input))?;
            (transform::repeat(recording, *count), Some(*count))
        }
    };

    io::write_recording(&result, output, &mut stdout)
        .with_context(|| format!("Failed to write output {}", output))?;

    Ok(Some(Outcome {
        operation,
        events_written: result.event_count(),
        repeat_count,
        output: output.clone(),
    }))
}

/// Resolve `args` and run them against the process stdin and stdout
pub fn run<I, S>(args: I, config: &ToolConfig) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let invocation = parse_args(args, config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = execute(&invocation, stdin.lock(), stdout.lock())?;

    if let Some(outcome) = outcome {
        tracing::info!(
            operation = %outcome.operation,
            events = outcome.events_written,
            output = %outcome.output,
            "Transform complete"
        );
        if config.report_summary {
            eprintln!("{}", outcome.summary());
        }
    }

    Ok(())
}
