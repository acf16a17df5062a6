use anyhow::Result;
use clap::Parser;

use tversky_index::cli::{init_logging, print_score, run_batch, run_score, Cli, Commands};

// --------------------------------------------------
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

// --------------------------------------------------
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score(args) => {
            let score = run_score(&args)?;
            print_score(&mut std::io::stdout(), score)?;
        }
        Commands::Batch(args) => {
            let count = run_batch(&args)?;
            println!(r#"Scored {} pairs, see output "{}""#, count, args.output.display());
        }
    }
    Ok(())
}
