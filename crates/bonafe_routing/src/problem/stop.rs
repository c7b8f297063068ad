use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{define_index_newtype, problem::location::Location};

define_index_newtype!(StopIdx, Stop);

/// A geocoded place the vehicle has to visit, or the depot it leaves from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub is_origin: bool,
}

impl Stop {
    pub fn origin(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            is_origin: true,
        }
    }

    pub fn destination(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            is_origin: false,
        }
    }

    pub fn location(&self) -> Location {
        Location::from_lat_lng(self.lat, self.lng)
    }

    pub fn has_finite_coordinates(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}
