//! The structs
//!
use std::collections::BTreeMap;
use serde_json::Value;

pub const METRICS_SNAPSHOT_PATH: &str = "/mesos/metrics/snapshot";
pub const REGISTRAR_LOG_RECOVERED: &str = "registrar/log/recovered";

/// The struct for deserializing `/mesos/metrics/snapshot`:
/// ```json
/// {
///   "master/elected": 1.0,
///   "registrar/log/recovered": 1.0,
///   "system/load_1min": 0.12
/// }
/// ```
/// Values are kept as json, an entry that is not a number does not make the snapshot unusable.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct MetricsSnapshot {
    pub metrics: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogRecovery {
    Recovered,
    /// Any value other than the number 1, as reported.
    NotRecovered(Value),
    NotFound,
}
