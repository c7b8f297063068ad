use std::fmt::Display;

use serde::Serialize;

use crate::{
    problem::{kmh::Kmh, route_problem::RouteProblem},
    solver::{
        nearest_neighbor::NearestNeighbor,
        ordering::{
            build_tour::BuildTour, order_by_bearing::OrderByBearing,
            order_by_distance::OrderByDistance,
        },
        tour::Tour,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteStrategy {
    /// Plain nearest-neighbor.
    Efficient,
    /// Closest destinations first.
    ByDistance,
    /// Clockwise sweep around the origin.
    Geographic,
}

impl RouteStrategy {
    pub const ALL: [RouteStrategy; 3] = [
        RouteStrategy::Efficient,
        RouteStrategy::ByDistance,
        RouteStrategy::Geographic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RouteStrategy::Efficient => "Efficient",
            RouteStrategy::ByDistance => "By Distance",
            RouteStrategy::Geographic => "Geographic",
        }
    }
}

impl Serialize for RouteStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl Display for RouteStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl BuildTour for RouteStrategy {
    fn build_tour(&self, problem: &RouteProblem, speed: Kmh) -> Tour {
        match self {
            RouteStrategy::Efficient => NearestNeighbor.build_tour(problem, speed),
            RouteStrategy::ByDistance => OrderByDistance.build_tour(problem, speed),
            RouteStrategy::Geographic => OrderByBearing.build_tour(problem, speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&RouteStrategy::ByDistance).unwrap(),
            "\"By Distance\""
        );
        assert_eq!(RouteStrategy::Geographic.to_string(), "Geographic");
    }
}
