use crate::{
    problem::{kmh::Kmh, route_problem::RouteProblem},
    solver::tour::Tour,
};

/// Produces a tour over every stop of the problem, starting at its origin.
pub trait BuildTour {
    fn build_tour(&self, problem: &RouteProblem, speed: Kmh) -> Tour;
}
