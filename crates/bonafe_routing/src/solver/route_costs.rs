use jiff::SignedDuration;
use serde::Serialize;
use tracing::{Level, instrument};

use crate::{
    error::{ConfigurationError, InvalidInputError, RoutingError},
    problem::{
        kilometers::Kilometers,
        point_of_interest::{PoiKind, PointOfInterest},
        stop::Stop,
        vehicle_type::VehicleType,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub total_distance: Kilometers,
    pub total_duration: SignedDuration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostParams {
    pub fuel_price_per_litre: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TollCharge {
    pub poi_id: String,
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeighStationWarning {
    pub poi_id: String,
    pub name: String,
    pub message: String,
}

/// Cost and time summary of the chosen route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    pub total_distance: Kilometers,
    pub total_duration: SignedDuration,
    /// Every stop in visiting order, origin first.
    pub waypoints: Vec<Stop>,
    pub destinations: Vec<Stop>,
    pub vehicle_type_id: String,
    pub fuel_litres: f64,
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub tolls: Vec<TollCharge>,
    pub weigh_station_warnings: Vec<WeighStationWarning>,
}

impl RouteInfo {
    pub fn total_cost(&self) -> f64 {
        round_two_decimals(self.fuel_cost + self.toll_cost)
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combines route metrics, the points of interest already known to lie along the
/// route and the vehicle's parameters into a [`RouteInfo`].
///
/// `waypoints` must start with the origin.
#[instrument(skip_all, level = Level::DEBUG, fields(vehicle_type = %vehicle_type.id))]
pub fn calculate_route_costs(
    waypoints: &[Stop],
    metrics: RouteMetrics,
    pois_on_route: &[PointOfInterest],
    vehicle_type: &VehicleType,
    params: &CostParams,
) -> Result<RouteInfo, RoutingError> {
    vehicle_type.validate()?;

    let fuel_price = params.fuel_price_per_litre;
    if !fuel_price.is_finite() || fuel_price < 0.0 {
        return Err(ConfigurationError::InvalidSetting {
            key: "fuel_price_per_litre",
            value: fuel_price.to_string(),
        }
        .into());
    }

    let Some((_origin, destinations)) = waypoints.split_first() else {
        return Err(InvalidInputError::EmptyStops.into());
    };

    let fuel_litres = metrics.total_distance.value() / vehicle_type.fuel_consumption_km_per_litre;

    let mut tolls = Vec::new();
    let mut weigh_station_warnings = Vec::new();

    for poi in pois_on_route {
        match poi.kind {
            PoiKind::Toll { base_tariff } => {
                if !base_tariff.is_finite() || base_tariff < 0.0 {
                    return Err(ConfigurationError::InvalidSetting {
                        key: "base_tariff",
                        value: format!("{base_tariff} ({})", poi.id),
                    }
                    .into());
                }

                tolls.push(TollCharge {
                    poi_id: poi.id.clone(),
                    name: poi.name.clone(),
                    amount: round_two_decimals(base_tariff * f64::from(vehicle_type.toll_class)),
                });
            }
            PoiKind::WeighStation if vehicle_type.subject_to_weighing => {
                weigh_station_warnings.push(WeighStationWarning {
                    poi_id: poi.id.clone(),
                    name: poi.name.clone(),
                    message: format!(
                        "{} must stop at the {} weigh station",
                        vehicle_type.name, poi.name
                    ),
                });
            }
            PoiKind::WeighStation => {}
        }
    }

    // Float `Sum` starts at -0.0, which would print as a negative cost.
    let toll_cost =
        round_two_decimals(tolls.iter().fold(0.0, |total, toll| total + toll.amount));

    Ok(RouteInfo {
        total_distance: metrics.total_distance,
        total_duration: metrics.total_duration,
        waypoints: waypoints.to_vec(),
        destinations: destinations.to_vec(),
        vehicle_type_id: vehicle_type.id.clone(),
        fuel_litres: round_two_decimals(fuel_litres),
        fuel_cost: round_two_decimals(fuel_litres * fuel_price),
        toll_cost,
        tolls,
        weigh_station_warnings,
    })
}
