//! Command Line Interface for the SIP calculator.
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use prettytable::{Table, row};
use sipcalc_api::{ApiServer, ServerConfig};
use sipcalc_domain::{SipCalculator, SipRequest, SipResult};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sipcalc")]
#[command(about = "Systematic Investment Plan calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and serve the front end.
    ///
    /// Settings come from SIPCALC_HOST, SIPCALC_PORT and SIPCALC_FRONTEND (or
    /// .env); flags override them.
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Listening port
        #[arg(short, long)]
        port: Option<u16>,

        /// HTML page served at /
        #[arg(long)]
        frontend: Option<PathBuf>,
    },
    /// Project a single SIP and print the result
    Calculate {
        /// Contribution per month
        #[arg(short, long, allow_negative_numbers = true)]
        monthly_investment: f64,

        /// Expected annual return in percent
        #[arg(short, long, allow_negative_numbers = true)]
        annual_rate: f64,

        /// Investment horizon in years
        #[arg(short, long, allow_negative_numbers = true)]
        time_period: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            frontend,
        } => {
            let config = apply_overrides(ServerConfig::from_env()?, host, port, frontend);

            info!("Starting SIP calculator on {}", config.bind_address());
            ApiServer::new(config).run().await?;
        }
        Commands::Calculate {
            monthly_investment,
            annual_rate,
            time_period,
        } => {
            let request = SipRequest::new(monthly_investment, annual_rate, time_period);
            let result = SipCalculator::new().compute(&request).rounded();
            print_projection(&request, &result);
        }
    }

    Ok(())
}

/// Applies command-line flags on top of the environment configuration.
fn apply_overrides(
    mut config: ServerConfig,
    host: Option<String>,
    port: Option<u16>,
    frontend: Option<PathBuf>,
) -> ServerConfig {
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(frontend) = frontend {
        config = config.with_frontend_path(frontend);
    }
    config
}

fn print_projection(request: &SipRequest, result: &SipResult) {
    let mut table = Table::new();
    table.add_row(row!["Monthly investment", format!("{:.2}", request.monthly_investment)]);
    table.add_row(row!["Annual rate (%)", format!("{:.2}", request.annual_rate)]);
    table.add_row(row!["Time period (years)", request.time_period]);
    table.add_row(row!["Invested amount", format!("{:.2}", result.invested_amount)]);
    table.add_row(row!["Estimated gain", format!("{:.2}", result.estimated_gain)]);
    table.add_row(row!["Future value", format!("{:.2}", result.future_value)]);
    table.printstd();
}
