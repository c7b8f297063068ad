pub mod alternatives;
pub mod nearest_neighbor;
pub mod ordering;
pub mod route_costs;
pub mod route_strategy;
pub mod savings;
pub mod tour;
