use jiff::SignedDuration;
use serde::Serialize;

use crate::problem::{
    distance_matrix::DistanceMatrix, kilometers::Kilometers, kmh::Kmh, stop::StopIdx,
};

/// A closed visiting sequence over the stops of a problem, starting at the origin.
///
/// `segment_distances[i]` is the leg leaving `order[i]`; the last entry is the
/// closing leg back to the origin, so both vectors have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    order: Vec<StopIdx>,
    segment_distances: Vec<Kilometers>,
    total_distance: Kilometers,
    estimated_time: SignedDuration,
}

impl Tour {
    /// Evaluates `order` against `matrix`. The first index is taken as the origin.
    pub fn from_order(matrix: &DistanceMatrix, order: Vec<StopIdx>, speed: Kmh) -> Self {
        let segment_distances = match order.first() {
            Some(&origin) => order
                .iter()
                .zip(order.iter().skip(1).chain(std::iter::once(&origin)))
                .map(|(&from, &to)| matrix.distance(from, to))
                .collect::<Vec<_>>(),
            None => vec![],
        };

        let total_distance: Kilometers = segment_distances.iter().copied().sum();

        Tour {
            order,
            segment_distances,
            total_distance,
            estimated_time: total_distance / speed,
        }
    }

    pub(crate) fn trivial(origin: StopIdx) -> Self {
        Tour {
            order: vec![origin],
            segment_distances: vec![Kilometers::ZERO],
            total_distance: Kilometers::ZERO,
            estimated_time: SignedDuration::ZERO,
        }
    }

    pub fn order(&self) -> &[StopIdx] {
        &self.order
    }

    pub fn origin(&self) -> Option<StopIdx> {
        self.order.first().copied()
    }

    pub fn segment_distances(&self) -> &[Kilometers] {
        &self.segment_distances
    }

    pub fn total_distance(&self) -> Kilometers {
        self.total_distance
    }

    pub fn estimated_time(&self) -> SignedDuration {
        self.estimated_time
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when `order` visits each of the `num_stops` indices exactly once.
    pub fn is_permutation_of(&self, num_stops: usize) -> bool {
        if self.order.len() != num_stops {
            return false;
        }

        let mut seen = vec![false; num_stops];
        self.order.iter().all(|index| {
            index.get() < num_stops && !std::mem::replace(&mut seen[index.get()], true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::distance_method::DistanceMethod, test_utils};

    #[test]
    fn test_from_order_closes_the_loop() {
        let stops = test_utils::create_line_stops();
        let matrix = DistanceMatrix::from_stops(&stops, DistanceMethod::RoundedHaversine);

        let tour = Tour::from_order(
            &matrix,
            vec![StopIdx::new(0), StopIdx::new(2), StopIdx::new(1)],
            Kmh::new(60.0),
        );

        assert_eq!(
            tour.segment_distances(),
            &[
                Kilometers::new(222.0),
                Kilometers::new(111.0),
                Kilometers::new(111.0)
            ]
        );
        assert_eq!(tour.total_distance(), Kilometers::new(444.0));
        assert_eq!(tour.estimated_time(), SignedDuration::from_mins(444));
    }

    #[test]
    fn test_is_permutation_of() {
        let stops = test_utils::create_line_stops();
        let matrix = DistanceMatrix::from_stops(&stops, DistanceMethod::RoundedHaversine);
        let speed = Kmh::new(60.0);

        let valid = Tour::from_order(&matrix, StopIdx::range(3).collect(), speed);
        assert!(valid.is_permutation_of(3));
        assert!(!valid.is_permutation_of(4));

        let repeated = Tour::from_order(
            &matrix,
            vec![StopIdx::new(0), StopIdx::new(1), StopIdx::new(1)],
            speed,
        );
        assert!(!repeated.is_permutation_of(3));
    }

    #[test]
    fn test_trivial() {
        let tour = Tour::trivial(StopIdx::new(3));
        assert_eq!(tour.order(), &[StopIdx::new(3)]);
        assert_eq!(tour.total_distance(), Kilometers::ZERO);
        assert_eq!(tour.segment_distances().len(), tour.len());
    }
}
