//! Parsing of textual coordinates into decimal degrees.
//!
//! Two syntaxes are accepted and told apart by their separators:
//!
//! ```text
//! D:M.fffff     degrees, minutes, decimal fraction of a minute (1-5 digits)
//! D:M:S.fff     degrees, minutes, seconds, decimal fraction of a second (1-3 digits)
//! ```
//!
//! Degrees lie in `[-179, 179]`, written without a leading zero or `+`.
//! Minutes and seconds lie in `[0, 59]`. The single exception is `-180`,
//! allowed only when every other field is zero. Input without a `.` is read
//! as if `.0` had been appended, so `61:30` and `61:30:36` are both valid.
//!
//! Minutes and seconds are added to the degrees as given, so `-1:30` is
//! `-0.5`. This is the inverse of the floor-based decomposition used by the
//! formatter.

use std::borrow::Cow;
use std::fmt;

use super::formatter::Syntax;

/// Maximum number of digits after the `.` in `D:M.fffff`
pub const MAX_MINUTE_FRACTION_DIGITS: usize = 5;

/// Maximum number of digits after the `.` in `D:M:S.fff`
pub const MAX_SECOND_FRACTION_DIGITS: usize = 3;

/// Errors that can occur while parsing a coordinate string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty
    MissingInput,
    /// Input does not follow either coordinate syntax
    InvalidFormat { text: String, reason: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingInput => write!(f, "Missing coordinate input"),
            ParseError::InvalidFormat { text, reason } => {
                write!(f, "Incorrect format: '{}' ({})", text, reason)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Decimal fraction stored as its literal digits: `.060` is `digits = 60, width = 3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    digits: u32,
    width: u8,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { digits: 0, width: 1 };

    pub fn new(digits: u32, width: u8) -> Self {
        Self { digits, width: width.max(1) }
    }

    fn parse(text: &str, max_width: usize) -> Option<Self> {
        if text.is_empty() || text.len() > max_width || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            digits: text.parse().ok()?,
            width: text.len() as u8,
        })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn value(&self) -> f64 {
        self.digits as f64 / 10_f64.powi(self.width as i32)
    }

    pub fn is_zero(&self) -> bool {
        self.digits == 0
    }

    /// Drop trailing zeros, keeping at least one digit
    pub fn trimmed(mut self) -> Self {
        while self.width > 1 && self.digits % 10 == 0 {
            self.digits /= 10;
            self.width -= 1;
        }
        self
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.digits, width = self.width as usize)
    }
}

/// The part of an angle below whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMinute {
    /// `D:M.fffff`
    MinuteFraction(Fraction),
    /// `D:M:S.fff`
    Seconds { seconds: u8, fraction: Fraction },
}

/// A coordinate split into its sexagesimal fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAngle {
    pub degrees: i32,
    pub minutes: u8,
    pub sub_minute: SubMinute,
}

impl ParsedAngle {
    /// Split a coordinate string into its fields, validating every one of them
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let result = tokenize(text);
        match &result {
            Ok(angle) => tracing::trace!(text, ?angle, "parsed coordinate"),
            Err(error) => tracing::debug!(text, %error, "rejected coordinate"),
        }
        result
    }

    pub fn syntax(&self) -> Syntax {
        match self.sub_minute {
            SubMinute::MinuteFraction(_) => Syntax::DegMin,
            SubMinute::Seconds { .. } => Syntax::DegMinSec,
        }
    }

    /// True when minutes, seconds and fraction are all zero
    pub fn is_whole_degree(&self) -> bool {
        self.minutes == 0
            && match self.sub_minute {
                SubMinute::MinuteFraction(fraction) => fraction.is_zero(),
                SubMinute::Seconds { seconds, fraction } => seconds == 0 && fraction.is_zero(),
            }
    }

    /// Decimal degrees represented by the fields
    pub fn to_degrees(&self) -> f64 {
        let degrees = self.degrees as f64;
        let minutes = self.minutes as f64;
        match self.sub_minute {
            SubMinute::MinuteFraction(fraction) => degrees + (minutes + fraction.value()) / 60.0,
            SubMinute::Seconds { seconds, fraction } => {
                degrees + minutes / 60.0 + (seconds as f64 + fraction.value()) / 3600.0
            }
        }
    }
}

impl fmt::Display for ParsedAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_minute {
            SubMinute::MinuteFraction(fraction) => {
                write!(f, "{}:{:02}.{}", self.degrees, self.minutes, fraction)
            }
            SubMinute::Seconds { seconds, fraction } => {
                write!(f, "{}:{:02}:{:02}.{}", self.degrees, self.minutes, seconds, fraction)
            }
        }
    }
}

/// Convert a coordinate string to decimal degrees
pub fn parse_coordinate(text: &str) -> Result<f64, ParseError> {
    ParsedAngle::parse(text).map(|angle| angle.to_degrees())
}

fn tokenize(text: &str) -> Result<ParsedAngle, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::MissingInput);
    }

    let invalid = |reason: &'static str| ParseError::InvalidFormat {
        text: text.to_string(),
        reason,
    };

    if !text.contains(':') {
        return Err(invalid("missing ':' separator"));
    }

    let normalized: Cow<'_, str> = if text.contains('.') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}.0", text))
    };

    // First pass: fields between ':'. At least two, since text has a ':'.
    let fields: Vec<&str> = normalized.split(':').collect();
    let (last, leading) = fields
        .split_last()
        .ok_or_else(|| invalid("missing ':' separator"))?;

    if leading.iter().any(|field| field.contains('.')) {
        return Err(invalid("'.' is only allowed in the last field"));
    }

    // Second pass: the last field carries the fraction.
    let (whole, fraction) = last
        .split_once('.')
        .ok_or_else(|| invalid("'.' is only allowed in the last field"))?;

    let degrees = parse_degrees(leading[0])
        .ok_or_else(|| invalid("degrees must be an integer without leading zeros or '+'"))?;

    let angle = match leading.len() {
        1 => ParsedAngle {
            degrees,
            minutes: parse_sexagesimal(whole)
                .ok_or_else(|| invalid("minutes must be within [0, 59]"))?,
            sub_minute: SubMinute::MinuteFraction(
                Fraction::parse(fraction, MAX_MINUTE_FRACTION_DIGITS)
                    .ok_or_else(|| invalid("minute fraction must be 1 to 5 digits"))?,
            ),
        },
        2 => ParsedAngle {
            degrees,
            minutes: parse_sexagesimal(leading[1])
                .ok_or_else(|| invalid("minutes must be within [0, 59]"))?,
            sub_minute: SubMinute::Seconds {
                seconds: parse_sexagesimal(whole)
                    .ok_or_else(|| invalid("seconds must be within [0, 59]"))?,
                fraction: Fraction::parse(fraction, MAX_SECOND_FRACTION_DIGITS)
                    .ok_or_else(|| invalid("second fraction must be 1 to 3 digits"))?,
            },
        },
        _ => return Err(invalid("too many ':' separators")),
    };

    let in_range = (-179..=179).contains(&angle.degrees)
        || (angle.degrees == -180 && angle.is_whole_degree());
    if !in_range {
        return Err(invalid("degrees must be within [-179, 179], or exactly -180"));
    }

    Ok(angle)
}

/// `0`, `7`, `42`, `179`, optionally preceded by `-`
fn parse_degrees(field: &str) -> Option<i32> {
    let (negative, digits) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field),
    };
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Minutes or seconds: one or two digits, at most 59
fn parse_sexagesimal(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u8 = field.parse().ok()?;
    (value <= 59).then_some(value)
}
