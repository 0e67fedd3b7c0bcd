//! Output payloads for reporting positions as coordinate text

pub mod formatting;

pub use formatting::LocationReport;
