use clap::Parser;
use ferrous_sd_domain::{CliOverrides, QueryState, RecordClass, RecordType};
use std::str::FromStr;
use tracing::info;

mod bootstrap;
mod di;
mod lookup;

#[derive(Parser)]
#[command(name = "ferrous-sd")]
#[command(version)]
#[command(about = "Ferrous SD - DNS answers synthesized from service discovery records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// TOML file seeding the service store
    #[arg(long, value_name = "FILE")]
    services: Option<String>,

    /// Zone the records are synthesized for
    #[arg(long)]
    zone: Option<String>,

    /// Upstream resolvers for foreign names (ip:port, comma separated)
    #[arg(long, value_delimiter = ',')]
    upstream: Option<Vec<String>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Query class forwarded upstream: IN, CH or HS
    #[arg(long, default_value = "IN")]
    class: String,

    /// Name to look up
    name: String,

    /// Record type: A, AAAA, CNAME, MX, SRV or TXT
    #[arg(default_value = "A")]
    record_type: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        zone: cli.zone.clone(),
        services_file: cli.services.clone(),
        upstream_servers: cli.upstream.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let record_type = RecordType::from_str(&cli.record_type).map_err(anyhow::Error::msg)?;
    let class = RecordClass::from_str(&cli.class).map_err(anyhow::Error::msg)?;
    let state = QueryState::new(&cli.name, record_type).with_class(class);

    info!(
        name = %state.name,
        record_type = %record_type,
        class = %class,
        zone = %config.discovery.zone,
        "Ferrous SD v{}",
        env!("CARGO_PKG_VERSION")
    );

    let services = di::Services::new(&config)?;
    let set = lookup::resolve(&services, &config.discovery.zone, &state).await?;

    print!("{}", lookup::render(&set));
    Ok(())
}
