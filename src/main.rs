use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use lnp_hacks::cli::{Cli, Command};
use lnp_hacks::commands;
use lnp_hacks::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    let name = args.command.name();
    logging::init_subscriber(args.verbose, name);
    let log = Arc::new(Logger::new(name));
    log.debug(&format!("lnp-hacks {}", commands::version::version()));

    match &args.command {
        Command::List(opts) => commands::hacks::list(&args.global, opts, &log),
        Command::Show(opts) => commands::hacks::show(&args.global, opts, &log),
        Command::Toggle(opts) => commands::hacks::toggle(&args.global, opts, &log),
        Command::Enable(opts) => commands::hacks::set(&args.global, opts, true, &log),
        Command::Disable(opts) => commands::hacks::set(&args.global, opts, false, &log),
        Command::Rebuild => commands::rebuild::run(&args.global, &log),
        Command::Engine(opts) => commands::engine::run(&args.global, opts, &log),
        Command::Docs => commands::docs::run(&args.global, &log),
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
