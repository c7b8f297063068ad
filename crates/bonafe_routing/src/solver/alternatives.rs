use jiff::SignedDuration;
use serde::Serialize;
use tracing::{Level, debug, instrument};

use crate::{
    error::InvalidInputError,
    problem::{
        distance_method::DistanceMethod, kilometers::Kilometers, kmh::Kmh,
        route_problem::RouteProblem, stop::Stop,
    },
    solver::{ordering::build_tour::BuildTour, route_strategy::RouteStrategy, tour::Tour},
};

/// One candidate route offered to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeRoute {
    /// Stops in visiting order, origin first.
    pub route: Vec<Stop>,
    pub strategy: RouteStrategy,
    pub total_distance: Kilometers,
    pub estimated_time: SignedDuration,
    pub tour: Tour,
}

impl AlternativeRoute {
    fn new(problem: &RouteProblem, strategy: RouteStrategy, tour: Tour) -> Self {
        AlternativeRoute {
            route: problem.stops_in_order(tour.order()),
            strategy,
            total_distance: tour.total_distance(),
            estimated_time: tour.estimated_time(),
            tour,
        }
    }
}

/// Builds one route per [`RouteStrategy`], shortest first.
///
/// Equal distances keep the Efficient, By Distance, Geographic order. A problem
/// without destinations yields a single trivial Efficient route.
#[instrument(skip_all, level = Level::DEBUG, fields(num_stops = problem.len()))]
pub fn generate_alternatives(problem: &RouteProblem, speed: Kmh) -> Vec<AlternativeRoute> {
    if problem.len() <= 1 {
        let tour = Tour::trivial(problem.origin());
        return vec![AlternativeRoute::new(problem, RouteStrategy::Efficient, tour)];
    }

    let mut alternatives = RouteStrategy::ALL
        .iter()
        .map(|&strategy| {
            let tour = strategy.build_tour(problem, speed);
            debug!("{strategy}: {}", tour.total_distance());
            AlternativeRoute::new(problem, strategy, tour)
        })
        .collect::<Vec<_>>();

    alternatives.sort_by_key(|alternative| alternative.total_distance);

    alternatives
}

/// Locates the origin of `stops` and generates the alternatives for them.
pub fn generate_alternatives_for_stops(
    stops: &[Stop],
    method: DistanceMethod,
    speed: Kmh,
) -> Result<Vec<AlternativeRoute>, InvalidInputError> {
    speed.validate()?;
    let problem = RouteProblem::new(stops.to_vec(), method)?;
    Ok(generate_alternatives(&problem, speed))
}
