use anyhow::Result;
use clap::ArgMatches;

use gffkit_core::parser::parse_str;
use gffkit_core::utils::read_input;
use gffkit_stats::stats_report;

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    let text = read_input(&files)?;
    let document = parse_str(&text)?;

    print!("{}", stats_report(&document)?);

    Ok(())
}
