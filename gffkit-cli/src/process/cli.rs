use clap::{Arg, ArgAction, Command, arg};

pub const PROCESS_CMD: &str = "process";

pub const DEFAULT_ID_PREFIX: &str = "FID_";

pub fn create_process_cli() -> Command {
    Command::new(PROCESS_CMD)
        .about("Rewrite a GFF file, optionally renumbering IDs or dropping contigs")
        .arg(
            Arg::new("files")
                .help("GFF files to read, concatenated in order; stdin when omitted")
                .action(ArgAction::Append),
        )
        .arg(arg!(--"renumber-ids" "Assign fresh sequential IDs and rewrite Parent references"))
        .arg(arg!(--prefix <prefix> "Prefix for renumbered IDs").default_value(DEFAULT_ID_PREFIX))
        .arg(
            arg!(--"remove-contig" <name> "Drop this contig and its features (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(arg!(--"fasta-tail" "Write scaffold sequences as a ##FASTA tail instead of inline ##DNA blocks"))
        .arg(arg!(-o --output <output> "Output file; stdout when omitted"))
}
