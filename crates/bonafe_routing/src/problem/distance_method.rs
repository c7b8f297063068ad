use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How pairwise stop distances are derived from coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMethod {
    /// Great-circle distance rounded to the nearest whole kilometer.
    #[default]
    RoundedHaversine,
    /// Great-circle distance with sub-kilometer precision.
    Haversine,
}
