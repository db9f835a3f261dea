use clap::Parser;

use desref::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.quiet);
    cli::run(&cli)
}
