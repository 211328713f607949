use clap::Parser;
use ruidakit::cli::{self, Cli};
use ruidakit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.json_logs)?;
    tracing::debug!(
        "ruidakit {} ({}) built {}",
        ruidakit::VERSION,
        ruidakit::BUILD_TARGET,
        ruidakit::BUILD_DATE
    );

    cli::run(cli)
}
