//! Module that runs the checks of a probe.
//!
//! The three checks share the [Check] trait: given the client and the configuration,
//! produce a [crate::report::CheckOutcome]. [run_checks] executes them in order, prints
//! every outcome directly after it is produced, and turns the verdicts into an exit code:
//! - a fatal verdict stops the run immediately with exit code 1.
//! - a failed verdict is reported, and the run continues. Unless `strict` is set, the run
//!   still exits with 0.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
