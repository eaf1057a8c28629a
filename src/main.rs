//! Regular Snails HTTP API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snail_api::api::{api_routes, create_router, serve, AppState};
use snail_api::config::Config;
use snail_api::metrics;

/// Regular Snails HTTP API.
#[derive(Parser, Debug)]
#[command(name = "snail-api")]
#[command(about = "Greeting, status and brightness endpoints for Regular Snails")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the route table.
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("snail_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::Serve { port }) => cmd_serve(port.or(args.port)).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Routes) => cmd_routes(),
        None => cmd_serve(args.port).await,
    }
}

/// Load and validate configuration, applying a CLI port override.
fn load_config(port_override: Option<u16>) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SNAIL API - CONFIGURATION CHECK");
    println!("======================================================================");

    let config = load_config(None)?;

    print!("Building route table... ");
    match api_routes(&config) {
        Ok(table) => println!("OK ({} routes)", table.entries().len()),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Route table build failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.host, config.port);
    println!("  Greeting: {}", config.greeting);
    println!("  API Path: {}", config.my_api_path);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the route table.
fn cmd_routes() -> anyhow::Result<()> {
    let config = load_config(None)?;
    let table = api_routes(&config)?;

    for entry in table.entries() {
        println!("{}", entry);
    }

    Ok(())
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = load_config(port_override)?;
    info!("Greeting variant: {}", config.greeting);

    // Create app state
    let mut app_state = AppState::new(config.greeting);
    if config.metrics_enabled {
        match metrics::init_metrics() {
            Ok(handle) => app_state = app_state.with_metrics(handle),
            Err(e) => warn!("Metrics disabled, recorder install failed: {}", e),
        }
    }

    // Build the router before binding so route errors surface first
    let router = create_router(&config, app_state)?;

    serve(&config, router).await?;
    Ok(())
}
