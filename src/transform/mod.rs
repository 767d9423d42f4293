//! Timestamp-rebasing transforms over recordings
//!
//! Both transforms are total: they take recordings by value and return a new
//! one, and every input (including recordings without events) has a defined
//! result.
//!
//! - [`merge`] appends a second recording so it continues where the first ends
//! - [`repeat`] loops one recording a number of times, starting at zero

pub mod merge;
pub mod repeat;

pub use merge::merge;
pub use repeat::repeat;

use std::fmt;
use std::str::FromStr;

use crate::error::EvemuError;

/// The transform a command-line invocation applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Concatenate two recordings
    Merge,
    /// Loop one recording
    Repeat,
}

impl Operation {
    /// All supported operations
    pub const ALL: [Operation; 2] = [Operation::Merge, Operation::Repeat];

    /// Command name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Merge => "merge",
            Operation::Repeat => "repeat",
        }
    }

    /// Positional argument synopsis
    pub fn synopsis(&self) -> &'static str {
        match self {
            Operation::Merge => "[base] <addition> [output]",
            Operation::Repeat => "[input] <count> [output]",
        }
    }

    /// One-line usage for this operation
    pub fn usage(&self) -> String {
        format!("usage: evemu-rs {} {}", self.name(), self.synopsis())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EvemuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| EvemuError::Usage(format!("unknown operation: {}", s)))
    }
}
