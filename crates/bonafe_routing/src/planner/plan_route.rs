use serde::Serialize;
use tracing::{Level, info, instrument};

use crate::{
    config::PlannerConfig,
    error::{InvalidInputError, RoutingError},
    problem::{
        point_of_interest::{PointOfInterest, pois_near_route},
        route_problem::RouteProblem,
        stop::Stop,
        vehicle_type::VehicleType,
    },
    solver::{
        alternatives::{AlternativeRoute, generate_alternatives},
        route_costs::{RouteInfo, RouteMetrics, calculate_route_costs},
        savings::RouteSavings,
    },
};

/// Everything the planner needs for one optimization, with coordinates already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub stops: Vec<Stop>,
    pub vehicle_type: VehicleType,
    /// Candidate points of interest; only those close to the chosen route are kept.
    pub pois: Vec<PointOfInterest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Shortest first; the first entry is the chosen route.
    pub alternatives: Vec<AlternativeRoute>,
    pub route_info: RouteInfo,
    pub savings: RouteSavings,
}

impl RoutePlan {
    pub fn best(&self) -> &AlternativeRoute {
        &self.alternatives[0]
    }
}

/// Runs the whole pipeline: validation, alternatives, proximity filtering of the
/// points of interest around the best route, costs and savings.
#[instrument(skip_all, level = Level::DEBUG, fields(num_stops = request.stops.len()))]
pub fn plan_route(
    config: &PlannerConfig,
    request: &RouteRequest,
) -> Result<RoutePlan, RoutingError> {
    config.validate()?;
    request.vehicle_type.validate()?;

    let problem = RouteProblem::new(request.stops.clone(), config.distance_method)?;
    let speed = config.average_speed_kmh;

    let alternatives = generate_alternatives(&problem, speed);
    let Some(best) = alternatives.first() else {
        return Err(InvalidInputError::EmptyStops.into());
    };

    let pois_on_route = pois_near_route(&best.route, &request.pois, config.poi_radius_km);

    let route_info = calculate_route_costs(
        &best.route,
        RouteMetrics {
            total_distance: best.total_distance,
            total_duration: best.estimated_time,
        },
        &pois_on_route,
        &request.vehicle_type,
        &config.cost_params(),
    )?;

    let savings = RouteSavings::compare(&problem, &best.tour, speed);

    info!(
        "{} route of {} for {} destinations, saving {}",
        best.strategy,
        best.total_distance,
        route_info.destinations.len(),
        savings.saved_distance
    );

    Ok(RoutePlan {
        alternatives,
        route_info,
        savings,
    })
}
