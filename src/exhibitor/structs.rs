//! The structs
//!
pub const EXHIBITOR_STATUS_PATH: &str = "/exhibitor/v1/cluster/status";
pub const SERVING: &str = "serving";
pub const EXPECTED_LEADERS: usize = 1;

/// The struct for deserializing a single member from `/exhibitor/v1/cluster/status`.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ExhibitorMember {
    #[serde(rename = "isLeader")]
    pub is_leader: bool,
    pub description: String,
    pub code: Option<i64>,
    pub hostname: Option<String>,
}

/// This struct is a wrapper for the [ExhibitorMember] struct.
///
/// In this way, the struct can be used with functions in impl.
#[derive(Debug, Default)]
pub struct AllExhibitorMembers {
    pub members: Vec<ExhibitorMember>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuorumCounts {
    pub serving: usize,
    pub leaders: usize,
}
