pub mod config;
pub mod error;
pub mod json;
pub mod planner;
pub mod problem;
pub mod solver;
mod utils;

pub use config::PlannerConfig;
pub use error::RoutingError;

#[cfg(test)]
pub(crate) mod test_utils;
