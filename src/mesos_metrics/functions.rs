//! The impls and functions
//!
use log::*;
use reqwest::blocking::Client;
use serde_json::Value;
use crate::config::ClusterConfig;
use crate::mesos_metrics::{LogRecovery, MetricsSnapshot, METRICS_SNAPSHOT_PATH, REGISTRAR_LOG_RECOVERED};
use crate::report::CheckOutcome;
use crate::utility;

pub const CHECK_NAME: &str = "metrics";

impl MetricsSnapshot {
    pub fn new() -> Self {
        Default::default()
    }
    fn parse_metrics_snapshot(
        http_data: &str,
    ) -> serde_json::Result<MetricsSnapshot>
    {
        serde_json::from_str(http_data)
    }
    pub fn log_recovery(&self) -> LogRecovery
    {
        match self.metrics.get(REGISTRAR_LOG_RECOVERED) {
            Some(value) if value.as_f64() == Some(1_f64) => LogRecovery::Recovered,
            Some(value) => LogRecovery::NotRecovered(value.clone()),
            None => LogRecovery::NotFound,
        }
    }
}

/// Read the metrics snapshot and validate the registrar log has been recovered.
pub fn check_metrics(
    client: &Client,
    config: &ClusterConfig,
) -> CheckOutcome
{
    let mut outcome = CheckOutcome::new(CHECK_NAME);
    let url = config.endpoint_url(METRICS_SNAPSHOT_PATH);

    let response = match utility::http_get(client, &url, Some(&config.auth_token)) {
        Ok(response) => response,
        Err(error) => {
            outcome.error(format!("GET Metrics: {}", error));
            return outcome;
        }
    };
    outcome.info(format!("GET Metrics: {}", response.status));
    if !response.is_success() {
        outcome.error(format!("GET Metrics: {}", response.body));
        return outcome;
    }

    let document: Value = match serde_json::from_str(&response.body) {
        Ok(document) => document,
        Err(error) => {
            outcome.fatal(format!("Could not parse metrics: {}: {}", response.url, error));
            return outcome;
        }
    };
    outcome.output("metrics", &document);

    let metrics_snapshot = match MetricsSnapshot::parse_metrics_snapshot(&response.body) {
        Ok(metrics_snapshot) => metrics_snapshot,
        Err(error) => {
            outcome.fatal(format!("Could not parse metrics: {}: {}", response.url, error));
            return outcome;
        }
    };
    debug!("{} metrics in snapshot", metrics_snapshot.metrics.len());

    match metrics_snapshot.log_recovery() {
        LogRecovery::Recovered => outcome.info("Log Recovered check OK"),
        LogRecovery::NotRecovered(value) => outcome.error(format!("Log NOT recovered. Value is {}", value)),
        LogRecovery::NotFound => outcome.error("Registrar Log not found in response"),
    }
    outcome
}
