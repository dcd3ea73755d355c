//! Module for the lines a check reports.
//!
//! Every check produces a [CheckOutcome]: a list of [ReportLine]s and a [Verdict].
//! The lines are written to stdout in a format meant to be scraped:
//! - `**OUTPUT:` followed by the compact json of the fetched document.
//! - `**INFO: <message>` for progress and successful validations.
//! - `**ERROR: <message>` for every failure.
//! - unprefixed lines for the per unit health listing.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
