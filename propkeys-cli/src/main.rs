mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })?;

    let cli = Cli::parse();

    // Show propkeys info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("propkeys", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    log::debug!("resolving against the {} table", cli.global.table_version);

    match &cli.command {
        Command::List { filter } => commands::list::run(filter.as_deref(), &cli.global),
        Command::Lookup { query, all } => commands::lookup::run(query, *all, &cli.global),
        Command::Diff {
            from,
            to,
            no_renumbered,
        } => commands::diff::run(*from, *to, !*no_renumbered, &cli.global),
        Command::Translate { code, from, to } => {
            commands::translate::run(code, *from, *to, &cli.global)
        }
        Command::Decode { payload } => commands::decode::run(payload, &cli.global),
    }
}
