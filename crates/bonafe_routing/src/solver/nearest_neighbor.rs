use tracing::{Level, debug, instrument};

use crate::{
    error::InvalidInputError,
    problem::{
        distance_matrix::DistanceMatrix,
        distance_method::DistanceMethod,
        kilometers::Kilometers,
        kmh::Kmh,
        route_problem::{RouteProblem, validate_stops},
        stop::{Stop, StopIdx},
    },
    solver::{ordering::build_tour::BuildTour, tour::Tour},
};

/// Greedy nearest-neighbor tour starting at `origin`, which must index into `matrix`.
///
/// At each step the closest unvisited stop is taken; on equal distances the
/// lowest index wins. The result is a heuristic, not an optimal tour.
#[instrument(skip_all, level = Level::DEBUG, fields(num_stops = matrix.num_locations()))]
pub(crate) fn nearest_neighbor_tour(
    matrix: &DistanceMatrix,
    origin: StopIdx,
    speed: Kmh,
) -> Tour {
    let num_stops = matrix.num_locations();
    if num_stops <= 1 {
        return Tour::trivial(origin);
    }

    let mut visited = vec![false; num_stops];
    visited[origin.get()] = true;

    let mut order = Vec::with_capacity(num_stops);
    order.push(origin);
    let mut current = origin;

    while order.len() < num_stops {
        let mut nearest: Option<(StopIdx, Kilometers)> = None;

        for candidate in StopIdx::range(num_stops) {
            if visited[candidate.get()] {
                continue;
            }

            let distance = matrix.distance(current, candidate);
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((candidate, distance));
            }
        }

        let Some((next, _)) = nearest else {
            break;
        };

        visited[next.get()] = true;
        order.push(next);
        current = next;
    }

    let tour = Tour::from_order(matrix, order, speed);
    debug!("nearest neighbor tour of {}", tour.total_distance());

    tour
}

/// Validates `stops`, `origin` and `speed`, then builds the nearest-neighbor tour.
pub fn solve(
    stops: &[Stop],
    origin: StopIdx,
    method: DistanceMethod,
    speed: Kmh,
) -> Result<Tour, InvalidInputError> {
    speed.validate()?;
    validate_stops(stops)?;
    if origin.get() >= stops.len() {
        return Err(InvalidInputError::OriginOutOfBounds {
            index: origin.get(),
            len: stops.len(),
        });
    }

    let matrix = DistanceMatrix::from_stops(stops, method);
    Ok(nearest_neighbor_tour(&matrix, origin, speed))
}

pub fn solve_problem(problem: &RouteProblem, speed: Kmh) -> Tour {
    nearest_neighbor_tour(problem.matrix(), problem.origin(), speed)
}

pub struct NearestNeighbor;

impl BuildTour for NearestNeighbor {
    fn build_tour(&self, problem: &RouteProblem, speed: Kmh) -> Tour {
        solve_problem(problem, speed)
    }
}
