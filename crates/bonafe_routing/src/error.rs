use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("route computation task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("the stop list is empty, add at least the origin")]
    EmptyStops,

    #[error("no stop is marked as origin")]
    MissingOrigin,

    #[error("{count} stops are marked as origin ({ids}), exactly one is required")]
    MultipleOrigins { count: usize, ids: String },

    #[error("stop '{id}' has non-finite coordinates ({lat}, {lng})")]
    NonFiniteCoordinates { id: String, lat: f64, lng: f64 },

    #[error("stop id '{0}' is used more than once")]
    DuplicateStopId(String),

    #[error("origin index {index} is out of bounds for {len} stops")]
    OriginOutOfBounds { index: usize, len: usize },

    #[error("average speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("unknown vehicle type '{0}'")]
    UnknownVehicleType(String),

    #[error("vehicle type '{vehicle_type}' is missing field '{field}'")]
    MissingVehicleField {
        vehicle_type: String,
        field: &'static str,
    },

    #[error("vehicle type '{vehicle_type}' has invalid {field}: {value}")]
    InvalidVehicleField {
        vehicle_type: String,
        field: &'static str,
        value: f64,
    },

    #[error("invalid configuration value for {key}: '{value}'")]
    InvalidSetting { key: &'static str, value: String },
}
