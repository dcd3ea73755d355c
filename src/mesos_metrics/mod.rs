//! Module for reading `/mesos/metrics/snapshot` via the admin router.
//!
//! The metrics snapshot is a flat json object of metric name to number.
//! After a master (re)start, the registrar must have recovered its replicated log before
//! the master can act as leader; this shows as `registrar/log/recovered` having the value 1.
//!
//! The endpoint requires authentication. Failures of this check are reported, but do not
//! stop the run.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
