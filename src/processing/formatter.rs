//! Formatting of decimal degrees into the two coordinate syntaxes.
//!
//! Degrees are taken with `floor`, so minutes and seconds are always
//! non-negative: `-0.5` becomes `-1:30.0`. The output uses `.` as the
//! decimal separator regardless of locale and always carries a fraction.
//! Fractions are rounded to the digits each syntax allows (five for
//! minutes, three for seconds) and trailing zeros are trimmed.
//!
//! Values in `(-180, -179)` decompose to degrees `-180` with non-zero
//! minutes, e.g. `-179.5` is `-180:30:00.0`. The parser accepts `-180` only
//! with every other field zero, so text for that interval does not parse
//! back. Everywhere else in `[-180, 180)` the output re-parses to the input
//! within the precision of the syntax.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::parser::{
    Fraction, ParsedAngle, SubMinute, MAX_MINUTE_FRACTION_DIGITS, MAX_SECOND_FRACTION_DIGITS,
};
use crate::core::{LONGITUDE_MAX, LONGITUDE_MIN};

/// Output syntax for [`format_coordinate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Syntax {
    /// `D:M:S.fff`
    #[default]
    DegMinSec,
    /// `D:M.fffff`
    DegMin,
}

impl Syntax {
    /// Integer selector for degrees, minutes, seconds
    pub const DEG_MIN_SEC_CODE: i32 = 1;
    /// Integer selector for degrees, decimal minutes
    pub const DEG_MIN_CODE: i32 = 2;

    pub fn code(self) -> i32 {
        match self {
            Syntax::DegMinSec => Self::DEG_MIN_SEC_CODE,
            Syntax::DegMin => Self::DEG_MIN_CODE,
        }
    }
}

impl TryFrom<i32> for Syntax {
    type Error = FormatError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            Self::DEG_MIN_SEC_CODE => Ok(Syntax::DegMinSec),
            Self::DEG_MIN_CODE => Ok(Syntax::DegMin),
            other => Err(FormatError::InvalidArgument {
                reason: format!("unknown output syntax {}", other),
            }),
        }
    }
}

/// Errors that can occur while formatting a coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    InvalidArgument { reason: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidArgument { reason } => write!(f, "Invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for FormatError {}

const MINUTE_FRACTION_SCALE: u64 = 10_u64.pow(MAX_MINUTE_FRACTION_DIGITS as u32);
const SECOND_FRACTION_SCALE: u64 = 10_u64.pow(MAX_SECOND_FRACTION_DIGITS as u32);

impl ParsedAngle {
    /// Decompose decimal degrees into the fields of `syntax`.
    ///
    /// Rejects non-finite values and values outside `[-180.0, 180.0)`.
    pub fn from_degrees(value: f64, syntax: Syntax) -> Result<Self, FormatError> {
        check_domain(value)?;

        let angle = match syntax {
            Syntax::DegMin => {
                let (degrees, units) = split_degree(value, 60 * MINUTE_FRACTION_SCALE);
                ParsedAngle {
                    degrees,
                    minutes: (units / MINUTE_FRACTION_SCALE) as u8,
                    sub_minute: SubMinute::MinuteFraction(
                        Fraction::new(
                            (units % MINUTE_FRACTION_SCALE) as u32,
                            MAX_MINUTE_FRACTION_DIGITS as u8,
                        )
                        .trimmed(),
                    ),
                }
            }
            Syntax::DegMinSec => {
                let per_minute = 60 * SECOND_FRACTION_SCALE;
                let (degrees, units) = split_degree(value, 60 * per_minute);
                let second_units = units % per_minute;
                ParsedAngle {
                    degrees,
                    minutes: (units / per_minute) as u8,
                    sub_minute: SubMinute::Seconds {
                        seconds: (second_units / SECOND_FRACTION_SCALE) as u8,
                        fraction: Fraction::new(
                            (second_units % SECOND_FRACTION_SCALE) as u32,
                            MAX_SECOND_FRACTION_DIGITS as u8,
                        )
                        .trimmed(),
                    },
                }
            }
        };

        Ok(angle)
    }
}

fn check_domain(value: f64) -> Result<(), FormatError> {
    if value.is_nan() {
        return Err(FormatError::InvalidArgument {
            reason: "coordinate value is NaN".to_string(),
        });
    }
    if !(LONGITUDE_MIN..LONGITUDE_MAX).contains(&value) {
        return Err(FormatError::InvalidArgument {
            reason: format!(
                "coordinate value {} outside [{}, {})",
                value, LONGITUDE_MIN, LONGITUDE_MAX
            ),
        });
    }
    Ok(())
}

/// Split `value` into floor degrees and a rounded count of `units_per_degree`.
///
/// A remainder that rounds up to a whole degree carries into the degrees,
/// except at the top of the range where it saturates at the last unit.
fn split_degree(value: f64, units_per_degree: u64) -> (i32, u64) {
    let mut degrees = value.floor();
    let mut units = ((value - degrees) * units_per_degree as f64).round() as u64;
    if units >= units_per_degree {
        if degrees + 1.0 < LONGITUDE_MAX {
            degrees += 1.0;
            units -= units_per_degree;
        } else {
            units = units_per_degree - 1;
        }
    }
    (degrees as i32, units)
}

/// Convert decimal degrees into `D:M:S.fff` or `D:M.fffff`
pub fn format_coordinate(value: f64, syntax: Syntax) -> Result<String, FormatError> {
    ParsedAngle::from_degrees(value, syntax).map(|angle| angle.to_string())
}

/// Sub-second resolution `degree_display` truncates from
const DISPLAY_SECOND_SCALE: u64 = 1_000_000;

/// Human-readable degrees, minutes and whole seconds, e.g. `61° 30' 36"`.
///
/// Seconds are truncated, not rounded: `36.9996"` shows as `36"`.
pub fn degree_display(value: f64) -> Result<String, FormatError> {
    check_domain(value)?;
    // Round to microseconds first: 61.51 sits at 35.99999... seconds in binary
    let (degrees, units) = split_degree(value, 3600 * DISPLAY_SECOND_SCALE);
    let seconds = units / DISPLAY_SECOND_SCALE;
    Ok(format!("{}\u{00b0} {}' {}\"", degrees, seconds / 60, seconds % 60))
}
