//! CLI entry point for the tray processing order demo

use clap::Parser;
use traygrid::io::cli::{Cli, DemoRunner};

fn main() -> traygrid::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the default level
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .try_init();

    let runner = DemoRunner::new(cli);
    runner.run()
}
