use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use fxhash::FxHashSet as HashSet;

use gffkit_core::parser::parse_str;
use gffkit_core::utils::read_input;
use gffkit_core::writer::{SequencePlacement, write_document, write_to_path};

pub fn run_process(matches: &ArgMatches) -> Result<()> {
    let files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    let text = read_input(&files)?;
    let mut document = parse_str(&text)?;

    let contigs: HashSet<String> = matches
        .get_many::<String>("remove-contig")
        .unwrap_or_default()
        .cloned()
        .collect();
    if !contigs.is_empty() {
        document = document.remove_contigs(&contigs);
    }

    if matches.get_flag("renumber-ids") {
        let prefix = matches
            .get_one::<String>("prefix")
            .expect("prefix has a default value");
        document = document.renumber_ids(prefix)?;
    }

    let placement = match matches.get_flag("fasta-tail") {
        true => SequencePlacement::FastaTail,
        false => SequencePlacement::Inline,
    };

    match matches.get_one::<String>("output") {
        Some(output) => {
            println!("Writing output to {}", output);
            write_to_path(&document, placement, Path::new(output))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_document(&document, placement, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
