mod app;
mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::app::App;
use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let app = App::from_cli(&cli)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Now(args) => app.run_now(&args, &mut out),
        Command::Date(args) => app.run_date(&args, &mut out),
        Command::Timezone => app.run_timezone(&mut out),
    }
}
