//! The structs
//!
use std::fmt;
use serde::de::{Deserializer, MapAccess, Visitor};

pub const HEALTH_REPORT_PATH: &str = "/system/health/v1/report";

/// The root struct for deserializing `/system/health/v1/report`:
/// ```json
/// {
///   "Units": {
///     "dcos-mesos-master.service": {
///       "UnitName": "dcos-mesos-master.service",
///       "Nodes": [
///         { "Role": "master", "IP": "10.0.0.1", "Host": "", "Health": 0 }
///       ],
///       "Health": 0,
///       "Title": "Mesos Master",
///       "PrettyName": "Mesos Master"
///     }
///   }
/// }
/// ```
/// The units are kept in the order of the response.
#[derive(Deserialize, Debug, Default)]
pub struct HealthReport {
    #[serde(rename = "Units", deserialize_with = "deserialize_units")]
    pub units: Vec<Unit>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Unit {
    /// The key of the unit in `Units`.
    #[serde(skip)]
    pub unit_id: String,
    #[serde(rename = "UnitName")]
    pub unit_name: String,
    #[serde(rename = "Health")]
    pub health: i64,
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<UnitNode>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "PrettyName")]
    pub pretty_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct UnitNode {
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "Health")]
    pub health: i64,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "Host")]
    pub host: Option<String>,
}

fn deserialize_units<'de, D>(deserializer: D) -> Result<Vec<Unit>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UnitsVisitor;

    impl<'de> Visitor<'de> for UnitsVisitor {
        type Value = Vec<Unit>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of unit id to unit")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut units = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((unit_id, mut unit)) = map.next_entry::<String, Unit>()? {
                unit.unit_id = unit_id;
                units.push(unit);
            }
            Ok(units)
        }
    }

    deserializer.deserialize_map(UnitsVisitor)
}
