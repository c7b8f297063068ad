use fxhash::FxHashSet;
use tracing::{Level, instrument};

use crate::{
    error::InvalidInputError,
    problem::{
        distance_matrix::DistanceMatrix,
        distance_method::DistanceMethod,
        stop::{Stop, StopIdx},
    },
};

/// A validated stop list with its origin located and the distance matrix built once.
#[derive(Debug, Clone)]
pub struct RouteProblem {
    stops: Vec<Stop>,
    origin: StopIdx,
    matrix: DistanceMatrix,
}

impl RouteProblem {
    #[instrument(skip_all, level = Level::DEBUG, fields(num_stops = stops.len()))]
    pub fn new(stops: Vec<Stop>, method: DistanceMethod) -> Result<Self, InvalidInputError> {
        let origin = locate_origin(&stops)?;
        validate_stops(&stops)?;

        let matrix = DistanceMatrix::from_stops(&stops, method);

        Ok(RouteProblem {
            stops,
            origin,
            matrix,
        })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, index: StopIdx) -> &Stop {
        &self.stops[index]
    }

    pub fn origin(&self) -> StopIdx {
        self.origin
    }

    pub fn origin_stop(&self) -> &Stop {
        &self.stops[self.origin]
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Every stop index except the origin's, in input order.
    pub fn destinations(&self) -> impl Iterator<Item = StopIdx> + '_ {
        StopIdx::range(self.stops.len()).filter(move |&index| index != self.origin)
    }

    /// Resolves stop indices to their stops.
    pub fn stops_in_order(&self, order: &[StopIdx]) -> Vec<Stop> {
        order
            .iter()
            .map(|&index| self.stops[index].clone())
            .collect()
    }
}

/// Finds the single stop flagged as origin.
pub fn locate_origin(stops: &[Stop]) -> Result<StopIdx, InvalidInputError> {
    if stops.is_empty() {
        return Err(InvalidInputError::EmptyStops);
    }

    let origins = stops
        .iter()
        .enumerate()
        .filter(|(_, stop)| stop.is_origin)
        .collect::<Vec<_>>();

    match origins.as_slice() {
        [] => Err(InvalidInputError::MissingOrigin),
        [(index, _)] => Ok(StopIdx::new(*index)),
        _ => Err(InvalidInputError::MultipleOrigins {
            count: origins.len(),
            ids: origins
                .iter()
                .map(|(_, stop)| stop.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// Checks coordinates and id uniqueness. Origin checks are left to [`locate_origin`].
pub fn validate_stops(stops: &[Stop]) -> Result<(), InvalidInputError> {
    if stops.is_empty() {
        return Err(InvalidInputError::EmptyStops);
    }

    let mut seen_ids = FxHashSet::default();
    for stop in stops {
        if !stop.has_finite_coordinates() {
            return Err(InvalidInputError::NonFiniteCoordinates {
                id: stop.id.clone(),
                lat: stop.lat,
                lng: stop.lng,
            });
        }

        if !seen_ids.insert(stop.id.as_str()) {
            return Err(InvalidInputError::DuplicateStopId(stop.id.clone()));
        }
    }

    Ok(())
}
