// src/main.rs
use cassandra2graphite::{cfstats, graphite, host};
use clap::Parser;
use color_eyre::Result;
use eyre::bail;
use tracing::{debug, info};

/// Push Cassandra cfstats metrics to Graphite.
///
/// Metrics have the format
/// `prefix.host.cassandra.Keyspace.ColumnFamily.Key value timestamp`.
#[derive(Parser)]
#[command(name = "cassandra2graphite", version)]
struct Cli {
    /// Cassandra node to run cfstats against
    cassandra_host: String,

    /// Prefix for every emitted metric path
    metric_prefix: String,

    /// Graphite host to push to
    graphite_host: String,

    /// Graphite plaintext protocol port
    graphite_port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("cassandra2graphite={log_level}"))
        .init();
    color_eyre::install()?;

    info!("Running cfstats against {}", cli.cassandra_host);
    let (reader, mut child) = cfstats::spawn_cfstats(&cli.cassandra_host)?;
    let values = cfstats::parse(reader)?;
    let status = child.wait()?;
    if !status.success() {
        bail!("nodetool exited with {status}");
    }

    let node = host::metric_hostname(&cli.cassandra_host)?;
    let prefix = format!("{}.{}", cli.metric_prefix, node);
    debug!("Metric prefix: {prefix}");

    let results = graphite::to_graphite(&values, &prefix);
    info!(
        "Sending {} metrics to {}:{}",
        results.len(),
        cli.graphite_host,
        cli.graphite_port
    );
    graphite::send_to_graphite(&cli.graphite_host, cli.graphite_port, &results).await?;

    Ok(())
}
