use clap::{Arg, ArgAction, Command};

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Compute descriptive statistics over genes, CDS and other feature types")
        .arg(
            Arg::new("files")
                .help("GFF files to read, concatenated in order; stdin when omitted")
                .action(ArgAction::Append),
        )
}
