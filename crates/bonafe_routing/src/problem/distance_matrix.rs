use tracing::{Level, instrument};

use crate::problem::{
    distance_method::DistanceMethod,
    kilometers::Kilometers,
    location::Location,
    stop::{Stop, StopIdx},
};

/// Pairwise stop distances in kilometers, stored flat and row-major.
/// The entry for a pair lives at `from * num_locations + to`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distances: Vec<f64>,
    num_locations: usize,
    method: DistanceMethod,
}

impl DistanceMatrix {
    #[instrument(skip_all, level = Level::DEBUG, fields(num_locations = locations.len()))]
    pub fn from_locations(locations: &[Location], method: DistanceMethod) -> Self {
        let num_locations = locations.len();
        let mut distances = vec![0.0; num_locations * num_locations];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                let distance = from.distance(to, method).value();
                distances[i * num_locations + j] = distance;
                distances[j * num_locations + i] = distance;
            }
        }

        DistanceMatrix {
            distances,
            num_locations,
            method,
        }
    }

    pub fn from_stops(stops: &[Stop], method: DistanceMethod) -> Self {
        let locations = stops.iter().map(Stop::location).collect::<Vec<_>>();
        Self::from_locations(&locations, method)
    }

    #[inline(always)]
    fn index(&self, from: StopIdx, to: StopIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    #[inline(always)]
    pub fn distance(&self, from: StopIdx, to: StopIdx) -> Kilometers {
        if from == to {
            return Kilometers::ZERO;
        }

        Kilometers::new(self.distances[self.index(from, to)])
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    pub fn method(&self) -> DistanceMethod {
        self.method
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.num_locations).all(|i| {
            (0..self.num_locations).all(|j| {
                self.distances[i * self.num_locations + j]
                    .total_cmp(&self.distances[j * self.num_locations + i])
                    .is_eq()
            })
        })
    }

    /// Nested-row view of the matrix.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        if self.num_locations == 0 {
            return vec![];
        }

        self.distances
            .chunks(self.num_locations)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

/// Builds the N×N distance matrix for `stops`.
pub fn build_matrix(stops: &[Stop], method: DistanceMethod) -> Vec<Vec<f64>> {
    DistanceMatrix::from_stops(stops, method).rows()
}
