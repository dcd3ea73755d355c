//! The structs
//!
use regex::Regex;
use reqwest::blocking::Client;
use crate::config::ClusterConfig;
use crate::report::CheckOutcome;

pub trait Check {
    fn name(&self) -> &'static str;
    fn run(
        &self,
        client: &Client,
        config: &ClusterConfig,
    ) -> CheckOutcome;
}

/// Zookeeper ensemble size and leadership, via exhibitor.
pub struct QuorumCheck;

/// Registrar log recovery, via the mesos metrics snapshot.
pub struct MetricsCheck;

/// Health of every unit, via the system health report.
pub struct HealthReportCheck {
    pub unit_filter: Regex,
}

#[derive(Debug)]
pub struct RunResult {
    pub outcomes: Vec<CheckOutcome>,
    /// Set when every check ran; a fatal verdict leaves it false.
    pub completed: bool,
    pub exit_code: i32,
}
