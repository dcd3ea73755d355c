//! The impls and functions
//!
use log::*;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use crate::config::ClusterConfig;
use crate::exhibitor::{AllExhibitorMembers, ExhibitorMember, QuorumCounts, EXHIBITOR_STATUS_PATH, EXPECTED_LEADERS, SERVING};
use crate::report::CheckOutcome;
use crate::utility;

pub const CHECK_NAME: &str = "quorum";

impl AllExhibitorMembers {
    pub fn new() -> Self {
        Default::default()
    }
    fn parse_exhibitor_status(
        http_data: &str,
    ) -> Result<AllExhibitorMembers>
    {
        let members: Vec<ExhibitorMember> = serde_json::from_str(http_data)
            .with_context(|| "could not parse exhibitor status")?;
        Ok(AllExhibitorMembers { members })
    }
    /// Count the serving members and the leaders.
    pub fn counts(&self) -> QuorumCounts
    {
        QuorumCounts {
            serving: self.members.iter().filter(|r| r.description == SERVING).count(),
            leaders: self.members.iter().filter(|r| r.is_leader).count(),
        }
    }
}

impl QuorumCounts {
    pub fn is_expected(
        &self,
        expected_members: usize,
    ) -> bool
    {
        self.serving == expected_members && self.leaders == EXPECTED_LEADERS
    }
}

/// Read the exhibitor cluster status and validate the serving and leader counts.
pub fn check_quorum(
    client: &Client,
    config: &ClusterConfig,
) -> CheckOutcome
{
    let mut outcome = CheckOutcome::new(CHECK_NAME);
    let url = config.exhibitor_url(EXHIBITOR_STATUS_PATH);

    let response = match utility::http_get(client, &url, None) {
        Ok(response) => response,
        Err(error) => {
            outcome.fatal(format!("Could not connect to exhibitor: {}", error));
            return outcome;
        }
    };
    if !response.is_success() {
        outcome.fatal(format!("Could not get exhibitor status: {}, Status code: {}", response.url, response.status));
        return outcome;
    }

    let document: Value = match serde_json::from_str(&response.body) {
        Ok(document) => document,
        Err(error) => {
            outcome.fatal(format!("Could not parse exhibitor status: {}: {}", response.url, error));
            return outcome;
        }
    };
    outcome.output("exhibitor_status", &document);

    let allexhibitormembers = match AllExhibitorMembers::parse_exhibitor_status(&response.body) {
        Ok(allexhibitormembers) => allexhibitormembers,
        Err(error) => {
            outcome.fatal(format!("{}: {:#}", response.url, error));
            return outcome;
        }
    };
    for member in &allexhibitormembers.members {
        debug!("{:?}", member);
    }

    let counts = allexhibitormembers.counts();
    if counts.is_expected(config.expected_member_count) {
        outcome.info(format!("server/leader check OK: {} servers and {} leader.", counts.serving, counts.leaders));
    } else {
        outcome.fatal(format!(
            "Expected {} servers and {} leader, got {} servers and {} leaders. Exiting.",
            config.expected_member_count,
            EXPECTED_LEADERS,
            counts.serving,
            counts.leaders
        ));
    }
    outcome
}
