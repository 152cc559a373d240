//! Serve a directory of Sass stylesheets.
//!
//! ```text
//! cargo run --example serve -- --source ./styles --mount /css --bind 127.0.0.1:8080
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use sassy::config::load_config;
use sassy::observability::{logging, metrics};
use sassy::{Sassy, SassyConfig, StylesheetServer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile and serve Sass stylesheets on demand")]
struct Args {
    /// Directory containing *.sass / *.scss sources
    #[arg(short, long)]
    source: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Optional TOML file with middleware options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mount prefix (overrides the config file)
    #[arg(short, long)]
    mount: Option<String>,

    /// Cache-Control max-age in seconds (overrides the config file)
    #[arg(long, allow_hyphen_values = true)]
    max_age: Option<f64>,

    /// Prometheus scrape address
    #[arg(long)]
    metrics: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging("sassy=debug,tower_http=debug");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SassyConfig::default(),
    };
    if let Some(mount) = args.mount {
        config = config.with_mount(mount);
    }
    if let Some(max_age) = args.max_age {
        config = config.with_max_age(max_age);
    }

    if let Some(addr) = args.metrics {
        metrics::init_metrics(addr);
    }

    let sassy = Sassy::new(&args.source, config)?;
    let listener = TcpListener::bind(args.bind).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        mount = %sassy.mount(),
        "Listening for connections"
    );

    StylesheetServer::new(sassy).run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
