//! The impls and functions
//!
use log::*;
use regex::Regex;
use crate::config::{
    ClusterConfig,
    ConfigError,
    ENV_HOST,
    ENV_NUM_MASTERS,
    ENV_TOKEN,
    DEFAULT_EXHIBITOR_PORT,
    DEFAULT_HTTP_PORT,
};

impl ClusterConfig {
    /// Build the configuration using `lookup` to obtain the value of each required name.
    ///
    /// All missing names are reported together, so a user can fix them in one go.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = fetch(ENV_HOST);
        let num_masters = fetch(ENV_NUM_MASTERS);
        let token = fetch(ENV_TOKEN);

        match (host, num_masters, token) {
            (Some(host), Some(num_masters), Some(auth_token)) => {
                let expected_member_count = num_masters
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidMemberCount(num_masters.clone()))?;
                let config = ClusterConfig {
                    host: host.trim().to_string(),
                    expected_member_count,
                    auth_token,
                    exhibitor_port: DEFAULT_EXHIBITOR_PORT,
                    http_port: DEFAULT_HTTP_PORT,
                };
                debug!("{:?}", config);
                Ok(config)
            }
            (host, num_masters, token) => {
                let missing = [(ENV_HOST, host.is_none()), (ENV_NUM_MASTERS, num_masters.is_none()), (ENV_TOKEN, token.is_none())]
                    .into_iter()
                    .filter(|(_, is_missing)| *is_missing)
                    .map(|(name, _)| name)
                    .collect();
                Err(ConfigError::Missing(missing))
            }
        }
    }
    pub fn with_ports(
        mut self,
        exhibitor_port: u16,
        http_port: u16,
    ) -> Self
    {
        self.exhibitor_port = exhibitor_port;
        self.http_port = http_port;
        self
    }
    /// The url of the exhibitor endpoint, which always carries the exhibitor port.
    pub fn exhibitor_url(
        &self,
        path: &str,
    ) -> String
    {
        format!("http://{}:{}{}", self.host, self.exhibitor_port, path)
    }
    /// The url of an admin router endpoint.
    pub fn endpoint_url(
        &self,
        path: &str,
    ) -> String
    {
        if self.http_port == DEFAULT_HTTP_PORT {
            format!("http://{}{}", self.host, path)
        } else {
            format!("http://{}:{}{}", self.host, self.http_port, path)
        }
    }
}

/// Compile the unit name filter; an empty filter matches everything.
pub fn set_unit_filter(
    unit_match: &str,
) -> Result<Regex, ConfigError>
{
    let unit_match = if unit_match.is_empty() { ".*" } else { unit_match };
    Ok(Regex::new(unit_match)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn unit_all_values_set() {
        let config = ClusterConfig::from_lookup(lookup_from(&[
            ("DCOS_IP", "10.0.0.1"),
            ("NUM_MASTERS", "3"),
            ("DCOS_TOKEN", "abc"),
        ])).unwrap();
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.expected_member_count, 3);
        assert_eq!(config.auth_token, "abc");
        assert_eq!(config.exhibitor_port, 8181);
        assert_eq!(config.http_port, 80);
    }

    #[test]
    fn unit_nothing_set_reports_all_names() {
        let result = ClusterConfig::from_lookup(|_| None);
        match result {
            Err(ConfigError::Missing(names)) => assert_eq!(names, vec!["DCOS_IP", "NUM_MASTERS", "DCOS_TOKEN"]),
            other => panic!("expected missing error, got {:?}", other),
        }
    }

    #[test]
    fn unit_empty_token_is_missing() {
        let result = ClusterConfig::from_lookup(lookup_from(&[
            ("DCOS_IP", "10.0.0.1"),
            ("NUM_MASTERS", "3"),
            ("DCOS_TOKEN", ""),
        ]));
        match result {
            Err(ConfigError::Missing(names)) => assert_eq!(names, vec!["DCOS_TOKEN"]),
            other => panic!("expected missing error, got {:?}", other),
        }
    }

    #[test]
    fn unit_num_masters_not_a_number() {
        let result = ClusterConfig::from_lookup(lookup_from(&[
            ("DCOS_IP", "10.0.0.1"),
            ("NUM_MASTERS", "three"),
            ("DCOS_TOKEN", "abc"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidMemberCount(value)) if value == "three"));
    }

    #[test]
    fn unit_urls() {
        let config = ClusterConfig::from_lookup(lookup_from(&[
            ("DCOS_IP", "10.0.0.1"),
            ("NUM_MASTERS", "3"),
            ("DCOS_TOKEN", "abc"),
        ])).unwrap();
        assert_eq!(config.exhibitor_url("/exhibitor/v1/cluster/status"), "http://10.0.0.1:8181/exhibitor/v1/cluster/status");
        assert_eq!(config.endpoint_url("/mesos/metrics/snapshot"), "http://10.0.0.1/mesos/metrics/snapshot");

        let config = config.with_ports(18181, 8080);
        assert_eq!(config.exhibitor_url("/x"), "http://10.0.0.1:18181/x");
        assert_eq!(config.endpoint_url("/y"), "http://10.0.0.1:8080/y");
    }

    #[test]
    fn unit_debug_hides_token() {
        let config = ClusterConfig::from_lookup(lookup_from(&[
            ("DCOS_IP", "10.0.0.1"),
            ("NUM_MASTERS", "3"),
            ("DCOS_TOKEN", "very-secret"),
        ])).unwrap();
        assert!(!format!("{:?}", config).contains("very-secret"));
    }

    #[test]
    fn unit_error_messages() {
        let missing = ConfigError::Missing(vec!["NUM_MASTERS", "DCOS_TOKEN"]);
        assert_eq!(
            missing.to_string(),
            "required variables DCOS_IP, NUM_MASTERS, DCOS_TOKEN not set appropriately (missing: NUM_MASTERS, DCOS_TOKEN). Please set and re-run"
        );
        assert_eq!(ConfigError::InvalidMemberCount(String::from("x")).to_string(), "NUM_MASTERS must be a number, got: 'x'");

        let invalid = set_unit_filter("(").unwrap_err();
        assert!(invalid.to_string().starts_with("invalid unit match regex: "));
        assert!(std::error::Error::source(&invalid).is_some());
    }

    #[test]
    fn unit_unit_filter() {
        assert!(set_unit_filter("").unwrap().is_match("dcos-mesos-master.service"));
        assert!(set_unit_filter("^dcos-mesos").unwrap().is_match("dcos-mesos-master.service"));
        assert!(matches!(set_unit_filter("("), Err(ConfigError::InvalidUnitMatch(_))));
    }
}
