//! Home Appliance Registry CLI

use std::{process, time::Duration};

use clap::{Args, Parser, Subcommand};
use happliance_app::{
    context::AppContext,
    database,
    consumptions::peer::ConsumptionPeerConfig,
    seed::seed,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "happliance-app", about = "Home appliance registry CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(DatabaseArgs),

    /// Insert the fixture energy consumption and appliance when absent
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = database::DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

#[derive(Debug, Args)]
struct SeedArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Base URL of the remote consumption peer
    #[arg(
        long,
        env = "CONSUMPTION_PEER_URL",
        default_value = "http://localhost:8080/api/v1/appliances"
    )]
    peer_url: String,

    /// Remote consumption peer timeout in milliseconds
    #[arg(long, env = "CONSUMPTION_PEER_TIMEOUT_MS", default_value_t = 3_000)]
    peer_timeout_ms: u64,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Migrate(args) => migrate(args).await,
        Commands::Seed(args) => seed_fixtures(args).await,
    }
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, args.max_connections)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn seed_fixtures(args: SeedArgs) -> Result<(), String> {
    let ctx = AppContext::from_database_url(
        &args.database.database_url,
        args.database.max_connections,
        ConsumptionPeerConfig {
            base_url: args.peer_url,
            timeout: Duration::from_millis(args.peer_timeout_ms),
        },
    )
    .await
    .map_err(|error| format!("failed to initialize application context: {error}"))?;

    let report = seed(ctx.appliances.as_ref(), ctx.consumptions.as_ref())
        .await
        .map_err(|error| format!("{error}: {}", source_of(&error)))?;

    println!("energy_consumption_created: {}", report.consumption_created);
    println!("home_appliance_created: {}", report.appliance_created);

    Ok(())
}

fn source_of(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}
