use serde::Serialize;

use crate::{
    problem::{kilometers::Kilometers, kmh::Kmh, route_problem::RouteProblem},
    solver::tour::Tour,
};

/// Distance saved by the chosen tour compared with visiting the destinations
/// in the order they were entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSavings {
    pub baseline_distance: Kilometers,
    pub optimized_distance: Kilometers,
    pub saved_distance: Kilometers,
}

impl RouteSavings {
    pub fn compare(problem: &RouteProblem, chosen: &Tour, speed: Kmh) -> Self {
        let baseline = input_order_tour(problem, speed);
        let baseline_distance = baseline.total_distance();
        let optimized_distance = chosen.total_distance();

        RouteSavings {
            baseline_distance,
            optimized_distance,
            saved_distance: baseline_distance - optimized_distance,
        }
    }

    /// Share of the baseline distance that was saved, between 0 and 100 for improvements.
    pub fn percentage(&self) -> f64 {
        if self.baseline_distance.is_zero() {
            return 0.0;
        }

        self.saved_distance.value() / self.baseline_distance.value() * 100.0
    }
}

/// The origin followed by the destinations as they were entered.
pub fn input_order_tour(problem: &RouteProblem, speed: Kmh) -> Tour {
    let order = std::iter::once(problem.origin())
        .chain(problem.destinations())
        .collect();

    Tour::from_order(problem.matrix(), order, speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solver::nearest_neighbor::solve_problem, test_utils};

    #[test]
    fn test_savings_against_input_order() {
        let problem = test_utils::create_test_problem(test_utils::create_serra_gaucha_stops());
        let speed = Kmh::new(60.0);
        let tour = solve_problem(&problem, speed);

        let savings = RouteSavings::compare(&problem, &tour, speed);

        assert_eq!(savings.baseline_distance, Kilometers::new(183.0));
        assert_eq!(savings.optimized_distance, Kilometers::new(101.0));
        assert_eq!(savings.saved_distance, Kilometers::new(82.0));
        assert!((savings.percentage() - 44.81).abs() < 0.01);
    }

    #[test]
    fn test_origin_only() {
        let problem = test_utils::create_test_problem(vec![
            crate::problem::stop::Stop::origin("depot", "Depot", 0.0, 0.0),
        ]);
        let speed = Kmh::new(60.0);
        let tour = solve_problem(&problem, speed);

        let savings = RouteSavings::compare(&problem, &tour, speed);
        assert_eq!(savings.saved_distance, Kilometers::ZERO);
        assert_eq!(savings.percentage(), 0.0);
    }
}
