pub mod distance_matrix;
pub mod distance_method;
pub mod kilometers;
pub mod kmh;
pub mod location;
pub mod point_of_interest;
pub mod route_problem;
pub mod stop;
pub mod vehicle_type;
