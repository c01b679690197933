//! Employee Service - HTTP server for employee management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use employee_service_lib::config::EmployeeServiceConfig;

#[derive(Parser)]
#[command(name = "employee-service")]
#[command(about = "Employee management microservice")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (defaults to SERVER_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (defaults to SERVER_PORT or 8081)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = EmployeeServiceConfig::from_env().with_bind(host, port);
            employee_service_lib::run_server_with_config(config).await?;
        }
    }

    Ok(())
}
