use anyhow::Result;
use clap::ArgMatches;

use gffkit_core::parser::parse_str;
use gffkit_core::utils::read_input;
use gffkit_overlap::overlap_report;

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    let text = read_input(&files)?;
    let document = parse_str(&text)?;

    print!("{}", overlap_report(&document));

    Ok(())
}
