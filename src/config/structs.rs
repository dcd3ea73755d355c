//! The structs
//!
use std::fmt;
use thiserror::Error;

pub const ENV_HOST: &str = "DCOS_IP";
pub const ENV_NUM_MASTERS: &str = "NUM_MASTERS";
pub const ENV_TOKEN: &str = "DCOS_TOKEN";

/// Exhibitor listens on its own port on every master.
pub const DEFAULT_EXHIBITOR_PORT: u16 = 8181;
/// The admin router port; when used, urls are generated without an explicit port.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// The configuration of a single probe run.
///
/// This is created once at startup and handed to every check by reference.
#[derive(Clone)]
pub struct ClusterConfig {
    pub host: String,
    pub expected_member_count: usize,
    pub auth_token: String,
    pub exhibitor_port: u16,
    pub http_port: u16,
}

// the token must not end up in debug logging.
impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("host", &self.host)
            .field("expected_member_count", &self.expected_member_count)
            .field("auth_token", &"<redacted>")
            .field("exhibitor_port", &self.exhibitor_port)
            .field("http_port", &self.http_port)
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more of the required values is not set, or set to an empty string.
    #[error("required variables {}, {}, {} not set appropriately (missing: {}). Please set and re-run", ENV_HOST, ENV_NUM_MASTERS, ENV_TOKEN, .0.join(", "))]
    Missing(Vec<&'static str>),
    /// `NUM_MASTERS` is set, but is not a non-negative number.
    #[error("{} must be a number, got: '{}'", ENV_NUM_MASTERS, .0)]
    InvalidMemberCount(String),
    /// The unit name filter is not a valid regular expression.
    #[error("invalid unit match regex: {0}")]
    InvalidUnitMatch(#[from] regex::Error),
}
