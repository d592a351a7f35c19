use clap::{Arg, ArgAction, Command};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Flag scaffolds carrying same-strand overlapping CDS features")
        .arg(
            Arg::new("files")
                .help("GFF files to read, concatenated in order; stdin when omitted")
                .action(ArgAction::Append),
        )
}
