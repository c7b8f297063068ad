use crate::{
    problem::{kmh::Kmh, route_problem::RouteProblem, stop::StopIdx},
    solver::{ordering::build_tour::BuildTour, tour::Tour},
};

/// Sweeps destinations clockwise by their bearing from the origin.
///
/// The sweep starts right after the widest angular gap between consecutive
/// destinations, so the tour fans out on one side and comes back on the other
/// instead of cutting across the origin. Equal bearings are visited closest first.
pub struct OrderByBearing;

impl BuildTour for OrderByBearing {
    fn build_tour(&self, problem: &RouteProblem, speed: Kmh) -> Tour {
        let origin = problem.origin();
        let origin_location = problem.origin_stop().location();
        let matrix = problem.matrix();

        let mut by_bearing = problem
            .destinations()
            .map(|index| {
                let bearing = origin_location.bearing(&problem.stop(index).location());
                (index, bearing)
            })
            .collect::<Vec<_>>();

        by_bearing.sort_by(|(a_index, a_bearing), (b_index, b_bearing)| {
            a_bearing
                .total_cmp(b_bearing)
                .then_with(|| {
                    matrix
                        .distance(origin, *a_index)
                        .cmp(&matrix.distance(origin, *b_index))
                })
                .then_with(|| a_index.cmp(b_index))
        });

        let bearings = by_bearing
            .iter()
            .map(|(_, bearing)| *bearing)
            .collect::<Vec<_>>();
        by_bearing.rotate_left(sweep_start(&bearings));

        let order = std::iter::once(origin)
            .chain(by_bearing.into_iter().map(|(index, _)| index))
            .collect::<Vec<StopIdx>>();

        Tour::from_order(matrix, order, speed)
    }
}

/// Position following the widest gap between sorted bearings, wrap-around included.
/// The first widest gap wins on ties.
fn sweep_start(sorted_bearings: &[f64]) -> usize {
    let len = sorted_bearings.len();
    if len <= 1 {
        return 0;
    }

    let mut widest_gap = f64::NEG_INFINITY;
    let mut start = 0;

    for i in 0..len {
        let gap = if i + 1 < len {
            sorted_bearings[i + 1] - sorted_bearings[i]
        } else {
            sorted_bearings[0] + 360.0 - sorted_bearings[i]
        };

        if gap > widest_gap {
            widest_gap = gap;
            start = (i + 1) % len;
        }
    }

    start
}
