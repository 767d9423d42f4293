//! # evemu-rs: evemu recording tools
//!
//! Reads text recordings of input-device events (as produced by
//! `evemu-record`) and rewrites their timestamps in two ways:
//!
//! - **merge**: append a second recording so it continues in time right
//!   where the first one ends
//! - **repeat**: loop one recording N times back to back
//!
//! ## Architecture
//!
//! - **Recording model** ([`recording`]): header lines plus an ordered event
//!   list, with [`parse`] and [`serialize`] for the text format
//! - **Transforms** ([`transform`]): [`merge`] and [`repeat`], pure functions
//!   from recordings to a new recording
//! - **CLI** ([`cli`]): argument resolution and stdin/stdout/file handling,
//!   built only on the four entry points above
//!
//! ## Example
//!
//! ```
//! use evemu_rs::{parse_str, repeat};
//!
//! let text = "# EVEMU 1.3\n\
//!             ################################\n\
//!             E: 0.000100 0001 0131 0001\n\
//!             E: 0.500000 0001 0131 0000\n";
//!
//! let recording = parse_str(text).unwrap();
//! let looped = repeat(recording, 3);
//!
//! assert_eq!(looped.event_count(), 6);
//! assert_eq!(looped.events[0].timestamp, 0.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod recording;
pub mod transform;

// Re-export commonly used types
pub use config::ToolConfig;
pub use error::{EvemuError, Result};
pub use recording::{parse, parse_str, serialize, Event, Recording, Section};
pub use transform::{merge, repeat, Operation};
