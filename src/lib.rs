//! A one-shot health probe for a DC/OS cluster.
//!
//! The probe connects to a single master and performs three checks, in order:
//! 1. [exhibitor]: the zookeeper ensemble has the expected number of serving members and one leader.
//! 2. [mesos_metrics]: the registrar has recovered its log.
//! 3. [health_report]: every unit reported by the system health report is healthy.
//!
//! The first check is fatal: when it fails, the probe stops with exit code 1.
//! The other two report their findings, and let the probe continue.
//!
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod utility;
pub mod report;
pub mod exhibitor;
pub mod mesos_metrics;
pub mod health_report;
pub mod checks;
