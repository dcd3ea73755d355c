//! Module for loading the probe configuration.
//!
//! The probe is configured with three required values:
//! - `DCOS_IP`: the master to check, without scheme or port.
//! - `NUM_MASTERS`: the number of masters the cluster is expected to have.
//! - `DCOS_TOKEN`: the authentication token, sent as `Authorization: token=<value>`.
//!
//! These are read from the environment (a `.env` file is loaded into the environment
//! first), and can be overridden on the command line. If any of them is missing,
//! the probe stops before doing any http request.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
