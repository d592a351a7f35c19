mod overlap;
mod process;
mod stats;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gffkit";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for inspecting and rewriting GFF3 genome annotation files.")
        .subcommand_required(true)
        .subcommand(stats::cli::create_stats_cli())
        .subcommand(overlap::cli::create_overlap_cli())
        .subcommand(process::cli::create_process_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // STATS
        //
        Some((stats::cli::STATS_CMD, matches)) => {
            stats::handlers::run_stats(matches)?;
        }

        //
        // OVERLAP
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            overlap::handlers::run_overlap(matches)?;
        }

        //
        // PROCESS
        //
        Some((process::cli::PROCESS_CMD, matches)) => {
            process::handlers::run_process(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
