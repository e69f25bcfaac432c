//! CLI entry point for closing strokes against claimed territory

use clap::Parser;
use territory::io::cli::{Cli, ClaimRunner, init_logging};

// Allow print for user feedback on the claim outcome
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> territory::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runner = ClaimRunner::new(cli);
    match runner.run()? {
        Some(claimed) => println!("Claimed {claimed} cells"),
        None => eprintln!("Stroke does not connect to claimed territory; nothing claimed"),
    }
    Ok(())
}
