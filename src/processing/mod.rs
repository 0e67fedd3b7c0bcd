//! Conversion between decimal degrees and coordinate text

pub mod parser;
pub mod formatter;

pub use parser::{parse_coordinate, Fraction, ParseError, ParsedAngle, SubMinute};
pub use formatter::{degree_display, format_coordinate, FormatError, Syntax};
