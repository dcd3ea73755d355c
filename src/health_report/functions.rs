//! The impls and functions
//!
use log::*;
use regex::Regex;
use reqwest::blocking::Client;
use serde_json::Value;
use crate::config::ClusterConfig;
use crate::health_report::{HealthReport, Unit, HEALTH_REPORT_PATH};
use crate::report::CheckOutcome;
use crate::utility;

pub const CHECK_NAME: &str = "health report";

impl Unit {
    pub fn is_healthy(&self) -> bool {
        self.health == 0
    }
    /// The listing line of the unit.
    pub fn summary_line(&self) -> String {
        format!("Name: {:48}\t\t\tState: {}", self.unit_name, self.health)
    }
    /// The listing lines of the nodes running the unit.
    pub fn node_lines(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|node| format!(" Name: {:48}\t\tIP: {}\t\tState: {}", self.unit_name, node.ip, node.health))
            .collect()
    }
}

impl HealthReport {
    pub fn new() -> Self {
        Default::default()
    }
    fn parse_health_report(
        http_data: &str,
    ) -> serde_json::Result<HealthReport>
    {
        serde_json::from_str(http_data)
    }
    /// Add the unit listing to `outcome`; every unhealthy unit fails the check.
    pub fn report(
        &self,
        unit_filter: &Regex,
        outcome: &mut CheckOutcome,
    )
    {
        let mut listed = 0;
        let mut unhealthy = 0;
        for unit in self.units.iter().filter(|r| unit_filter.is_match(&r.unit_name)) {
            listed += 1;
            outcome.plain(unit.summary_line());
            if !unit.is_healthy() {
                unhealthy += 1;
                debug!("unhealthy unit: {} ({}, {}), health: {}",
                       unit.unit_name,
                       unit.unit_id,
                       unit.pretty_name.as_deref().or(unit.title.as_deref()).unwrap_or("-"),
                       unit.health
                );
                for node in &unit.nodes {
                    debug!("unit: {}, node: {} role: {} host: {}, health: {}",
                           unit.unit_name,
                           node.ip,
                           node.role.as_deref().unwrap_or("-"),
                           node.host.as_deref().unwrap_or("-"),
                           node.health
                    );
                }
                for line in unit.node_lines() {
                    outcome.plain(line);
                }
            }
        }
        if unhealthy == 0 {
            outcome.info(format!("Health report check OK: {} units healthy", listed));
        } else {
            outcome.error(format!("Health report: {} of {} units unhealthy", unhealthy, listed));
        }
    }
}

/// Read the health report and list the health of every unit.
pub fn check_health_report(
    client: &Client,
    config: &ClusterConfig,
    unit_filter: &Regex,
) -> CheckOutcome
{
    let mut outcome = CheckOutcome::new(CHECK_NAME);
    let url = config.endpoint_url(HEALTH_REPORT_PATH);

    let response = match utility::http_get(client, &url, Some(&config.auth_token)) {
        Ok(response) => response,
        Err(error) => {
            outcome.error(format!("GET Health Report: {}", error));
            return outcome;
        }
    };
    outcome.info(format!("GET Health Report: {}", response.status));
    if !response.is_success() {
        outcome.error(format!("GET Health: {}", response.body));
        return outcome;
    }

    let document: Value = match serde_json::from_str(&response.body) {
        Ok(document) => document,
        Err(error) => {
            outcome.fatal(format!("Could not parse health report: {}: {}", response.url, error));
            return outcome;
        }
    };
    outcome.output("health_report", &document);

    let health_report = match HealthReport::parse_health_report(&response.body) {
        Ok(health_report) => health_report,
        Err(error) => {
            outcome.fatal(format!("Could not parse health report: {}: {}", response.url, error));
            return outcome;
        }
    };
    health_report.report(unit_filter, &mut outcome);
    outcome
}
