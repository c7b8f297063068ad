use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::problem::{location::Location, stop::Stop};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PoiKind {
    Toll {
        /// Tariff charged to a class 1 vehicle, in BRL.
        base_tariff: f64,
    },
    WeighStation,
}

/// A roadside feature relevant to truck routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub kind: PoiKind,
}

impl PointOfInterest {
    pub fn toll(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        base_tariff: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            kind: PoiKind::Toll { base_tariff },
        }
    }

    pub fn weigh_station(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            kind: PoiKind::WeighStation,
        }
    }

    pub fn location(&self) -> Location {
        Location::from_lat_lng(self.lat, self.lng)
    }

    /// Precise great-circle distance to the closest stop of `route`.
    pub fn distance_to_route_km(&self, route: &[Stop]) -> Option<f64> {
        let location = self.location();
        route
            .iter()
            .map(|stop| location.haversine_km(&stop.location()))
            .min_by(f64::total_cmp)
    }
}

/// Keeps the points of interest lying within `threshold_km` of any stop of the route,
/// in their original order.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn pois_near_route(
    route: &[Stop],
    pois: &[PointOfInterest],
    threshold_km: f64,
) -> Vec<PointOfInterest> {
    let near = pois
        .iter()
        .filter(|poi| {
            poi.distance_to_route_km(route)
                .is_some_and(|distance| distance <= threshold_km)
        })
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "{} of {} points of interest within {threshold_km} km of the route",
        near.len(),
        pois.len()
    );

    near
}
