//! Module for reading `/system/health/v1/report` via the admin router.
//!
//! The health report contains every systemd unit of the cluster, keyed by unit id, with the
//! aggregated health of the unit and the health of the unit on every node running it.
//! A health of 0 is healthy; any other value is treated as unhealthy.
//!
//! Every unit is listed with its health. For an unhealthy unit, the nodes running it are
//! listed too, so the node(s) causing the problem can be found.
//!
//! The endpoint requires authentication. Failures of this check are reported, but do not
//! stop the run.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
