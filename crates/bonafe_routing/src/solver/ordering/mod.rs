pub mod build_tour;
pub mod order_by_bearing;
pub mod order_by_distance;
