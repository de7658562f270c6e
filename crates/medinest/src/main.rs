//! medinest - MediNest shell server and route inspection

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use medinest_core::{RouteTable, ShellConfig};
use medinest_web::ServeOptions;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "medinest",
    version,
    about = "MediNest healthcare shell",
    long_about = "Serves the compiled MediNest web bundle and inspects its route table.\n\
                  \n\
                  Examples:\n\
                    medinest serve                   # Serve crates/medinest-web/dist on :3000\n\
                    medinest serve --port 8080       # Custom port\n\
                    medinest routes                  # Print the route table\n\
                    medinest nav --json              # Navigation entries as JSON\n\
                    medinest resolve /dashboard      # Where a logged-out visitor ends up\n\
                  \n\
                  Web Frontend Workflow:\n\
                    trunk build --release            # In crates/medinest-web\n\
                    medinest serve                   # Serves the bundle with deep-link fallback\n\
                  \n\
                  Environment Variables:\n\
                    MEDINEST_CONFIG                  # Shell config JSON file\n\
                    MEDINEST_PORT                    # Server port\n\
                    MEDINEST_DIST                    # Bundle directory\n\
                    MEDINEST_HOST                    # Bind address\n\
                    MEDINEST_LOG                     # Log filter (default: info)\n\
                    MEDINEST_NO_COLOR                # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Shell configuration file (JSON)
    #[arg(long, global = true, env = "MEDINEST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "MEDINEST_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the compiled web bundle
    Serve {
        /// Port for web server
        #[arg(long, env = "MEDINEST_PORT", default_value = "3000")]
        port: u16,
        /// Directory produced by `trunk build`
        #[arg(long, env = "MEDINEST_DIST", default_value = "crates/medinest-web/dist")]
        dist: PathBuf,
        /// Address to bind
        #[arg(long, env = "MEDINEST_HOST", default_value = "127.0.0.1")]
        host: IpAddr,
    },
    /// Print the route table
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation entries in sidebar order
    Nav {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show what a path resolves to
    Resolve {
        /// Path to resolve, e.g. /dashboard
        path: String,
        /// Resolve as an authenticated visitor
        #[arg(long)]
        logged_in: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.no_color);

    let config = match &cli.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ShellConfig::default(),
    };

    match cli.mode {
        Mode::Serve { port, dist, host } => {
            medinest_web::run(ServeOptions {
                dist,
                host,
                port,
                config,
            })
            .await?;
        }
        Mode::Routes { json } => {
            println!("{}", cli::format_route_table(json, cli.no_color));
        }
        Mode::Nav { json } => {
            println!("{}", cli::format_nav_table(json, cli.no_color));
        }
        Mode::Resolve { path, logged_in } => {
            let table = RouteTable::from_config(&config);
            println!("{}", cli::format_resolution(&table.resolve(&path, &logged_in)));
        }
    }

    Ok(())
}

fn init_logging(no_color: bool) {
    let filter = EnvFilter::try_from_env("MEDINEST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}
