pub mod plan_route;
pub mod route_planner;
