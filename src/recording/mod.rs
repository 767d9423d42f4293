//! Recording model
//!
//! This module holds the in-memory form of an evemu recording and the
//! conversions between it and the text format:
//!
//! ```text
//! # EVEMU 1.3
//! # Input device name: "Microsoft X-Box 360 pad"
//! ################################
//! #      Waiting for events      #
//! ################################
//! E: 0.000001 0003 0011 -001
//! E: 0.583966 0003 0011 0000
//! ```
//!
//! Everything that is not an event line is header and is preserved byte for
//! byte. Event timestamps are rewritten with six decimal places on output.

pub mod parser;
pub mod types;
pub mod writer;

pub use parser::{parse, parse_str};
pub use types::{Event, Recording, Section};
pub use writer::{serialize, to_bytes};
