use std::{fs::File, io::BufReader, path::PathBuf};

use bonafe_routing::{
    config::PlannerConfig,
    json::types::JsonRouteRequest,
    planner::{
        plan_route::RoutePlan,
        route_planner::{PlanOutcome, RoutePlanner},
    },
    problem::{distance_method::DistanceMethod, kmh::Kmh, vehicle_type::VehicleType},
};
use clap::Args;
use comfy_table::Table;
use tracing::{info, warn};

use crate::parsers;

#[derive(Args)]
pub struct OptimizeArgs {
    /// The route request file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Replaces the vehicle type of the request with a built-in one
    #[arg(long)]
    vehicle_type: Option<String>,

    #[arg(long, value_parser = parsers::parse_positive_f64)]
    speed: Option<f64>,

    #[arg(long, value_parser = parsers::parse_non_negative_f64)]
    poi_radius: Option<f64>,

    #[arg(long, value_parser = parsers::parse_non_negative_f64)]
    fuel_price: Option<f64>,

    /// Keeps fractional kilometers instead of rounding each leg
    #[arg(long)]
    precise: bool,

    /// Prints the plan as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl OptimizeArgs {
    fn apply(&self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(speed) = self.speed {
            config.average_speed_kmh = Kmh::new(speed);
        }

        if let Some(poi_radius) = self.poi_radius {
            config.poi_radius_km = poi_radius;
        }

        if let Some(fuel_price) = self.fuel_price {
            config.fuel_price_per_litre = fuel_price;
        }

        if self.precise {
            config.distance_method = DistanceMethod::Haversine;
        }

        config
    }
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let config = args.apply(PlannerConfig::from_env()?);

    let f = File::open(&args.input)?;
    let content: JsonRouteRequest = serde_json::from_reader(BufReader::new(f))?;
    let mut request = content.build_request()?;

    if let Some(vehicle_type) = &args.vehicle_type {
        request.vehicle_type = VehicleType::from_catalog(vehicle_type)?;
    }

    info!(
        "Optimizing {} stops for {}",
        request.stops.len(),
        request.vehicle_type.name
    );

    let planner = RoutePlanner::new(config);
    let computed = match planner.plan(request).await? {
        PlanOutcome::Computed(computed) => computed,
        PlanOutcome::Superseded { generation } => {
            anyhow::bail!("request {generation} was superseded before it finished")
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&computed.plan)?);
    } else {
        print_plan(&computed.plan);
    }

    Ok(())
}

fn print_plan(plan: &RoutePlan) {
    let mut alternatives = Table::new();
    alternatives.set_header(vec!["Strategy", "Distance", "Time", "Route"]);
    for alternative in &plan.alternatives {
        alternatives.add_row(vec![
            alternative.strategy.to_string(),
            alternative.total_distance.to_string(),
            parsers::format_duration(alternative.estimated_time),
            alternative
                .route
                .iter()
                .map(|stop| stop.name.as_str())
                .collect::<Vec<_>>()
                .join(" → "),
        ]);
    }
    println!("{alternatives}");

    let info = &plan.route_info;
    let mut summary = Table::new();
    summary.set_header(vec!["", ""]);
    summary.add_row(vec![String::from("Vehicle"), info.vehicle_type_id.clone()]);
    summary.add_row(vec![String::from("Distance"), info.total_distance.to_string()]);
    summary.add_row(vec![
        String::from("Time"),
        parsers::format_duration(info.total_duration),
    ]);
    summary.add_row(vec![
        String::from("Fuel"),
        format!("{:.2} l (R$ {:.2})", info.fuel_litres, info.fuel_cost),
    ]);
    summary.add_row(vec![
        String::from("Tolls"),
        format!("{} (R$ {:.2})", info.tolls.len(), info.toll_cost),
    ]);
    summary.add_row(vec![
        String::from("Total cost"),
        format!("R$ {:.2}", info.total_cost()),
    ]);
    summary.add_row(vec![
        String::from("Saved"),
        format!(
            "{} of {} ({:.2}%)",
            plan.savings.saved_distance,
            plan.savings.baseline_distance,
            plan.savings.percentage()
        ),
    ]);
    println!("{summary}");

    for warning in &info.weigh_station_warnings {
        warn!("{}", warning.message);
    }
}
