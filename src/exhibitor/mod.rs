//! Module for reading `/exhibitor/v1/cluster/status` on a master.
//!
//! Exhibitor supervises the zookeeper ensemble on the masters, and reports the state of every
//! ensemble member:
//! ```json
//! [
//!   {"code": 3, "description": "serving", "hostname": "10.0.0.1", "isLeader": false},
//!   {"code": 3, "description": "serving", "hostname": "10.0.0.2", "isLeader": true},
//!   {"code": 3, "description": "serving", "hostname": "10.0.0.3", "isLeader": false}
//! ]
//! ```
//! The quorum is correct when the number of `serving` members equals the expected number of
//! masters, and exactly one member is the leader.
//!
//! The endpoint is unauthenticated and served on port 8181 of every master.
//! Any failure of this check ends the run with exit code 1.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
