use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::optimize::OptimizeArgs;

mod optimize;
mod parsers;
mod vehicle_types;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes the delivery order for a route request file
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Lists the built-in vehicle types
    VehicleTypes,
    /// Prints the JSON schema of route request files
    Schema,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args).await?,
        Commands::VehicleTypes => vehicle_types::run(),
        Commands::Schema => println!("{}", bonafe_routing::json::schema::generate_json_schema()?),
    }

    Ok(())
}
