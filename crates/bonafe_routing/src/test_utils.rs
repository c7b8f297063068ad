use crate::problem::{
    distance_method::DistanceMethod, point_of_interest::PointOfInterest,
    route_problem::RouteProblem, stop::Stop,
};

/// Origin on the equator and two destinations one and two degrees east of it.
pub fn create_line_stops() -> Vec<Stop> {
    vec![
        Stop::origin("a", "A", 0.0, 0.0),
        Stop::destination("b", "B", 0.0, 1.0),
        Stop::destination("c", "C", 0.0, 2.0),
    ]
}

/// Depot in Bento Gonçalves and five customers around the Serra Gaúcha.
pub fn create_serra_gaucha_stops() -> Vec<Stop> {
    vec![
        Stop::origin("depot", "Móveis Bonafé - Bento Gonçalves", -29.1699, -51.5185),
        Stop::destination("caxias", "Caxias do Sul", -29.1678, -51.1794),
        Stop::destination("garibaldi", "Garibaldi", -29.2560, -51.5336),
        Stop::destination("farroupilha", "Farroupilha", -29.2250, -51.3475),
        Stop::destination("carlos-barbosa", "Carlos Barbosa", -29.2975, -51.5031),
        Stop::destination("flores", "Flores da Cunha", -29.0290, -51.1825),
    ]
}

/// Origin at (0, 0) with destinations placed so the three ordering strategies disagree.
pub fn create_scattered_stops() -> Vec<Stop> {
    vec![
        Stop::origin("o", "Origin", 0.0, 0.0),
        Stop::destination("n", "North", 1.0, 0.0),
        Stop::destination("e", "East", 0.0, 1.5),
        Stop::destination("s", "South", -2.0, 0.1),
        Stop::destination("w", "West", 0.2, -2.5),
        Stop::destination("ne", "North East", 1.2, 1.3),
    ]
}

pub fn create_pois() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::toll(
            "toll-farroupilha",
            "Praça de pedágio Farroupilha",
            -29.2300,
            -51.3700,
            7.5,
        ),
        PointOfInterest::toll(
            "toll-porto-alegre",
            "Praça de pedágio Portão",
            -29.9500,
            -51.1000,
            9.1,
        ),
        PointOfInterest::weigh_station("weigh-bento", "Balança BR-470", -29.1800, -51.5000),
        PointOfInterest::weigh_station("weigh-vacaria", "Balança Vacaria", -28.5072, -50.9339),
    ]
}

pub fn create_test_problem(stops: Vec<Stop>) -> RouteProblem {
    RouteProblem::new(stops, DistanceMethod::RoundedHaversine).unwrap()
}
