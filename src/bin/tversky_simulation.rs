use anyhow::Result;
use clap::Parser;

use tversky_index::cli::{init_logging, SimulationArgs};
use tversky_index::simulation::{simulate, SimulationParams};
use tversky_index::TverskyConfig;

// --------------------------------------------------

fn main() -> Result<()> {
    let args = SimulationArgs::parse();
    init_logging(args.verbose);

    let params = SimulationParams::from(&args);
    let config = TverskyConfig::default().with_symmetric(true);
    println!("{}", simulate(&params, &config));
    Ok(())
}
