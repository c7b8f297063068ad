use crate::{
    problem::{kmh::Kmh, route_problem::RouteProblem, stop::StopIdx},
    solver::{ordering::build_tour::BuildTour, tour::Tour},
};

/// Visits destinations from the closest to the farthest from the origin.
/// Equal distances keep input order.
pub struct OrderByDistance;

impl BuildTour for OrderByDistance {
    fn build_tour(&self, problem: &RouteProblem, speed: Kmh) -> Tour {
        let origin = problem.origin();
        let matrix = problem.matrix();

        let mut destinations = problem.destinations().collect::<Vec<_>>();
        destinations.sort_by_key(|&index| matrix.distance(origin, index));

        let order = std::iter::once(origin)
            .chain(destinations)
            .collect::<Vec<StopIdx>>();

        Tour::from_order(matrix, order, speed)
    }
}
