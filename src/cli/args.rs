use crate::annotate::OutputNaming;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sourcemap-annotate")]
#[command(about = "Decode a PC-to-line source map and annotate the source file with program counters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the source map JSON (PC -> line)
    pub map: PathBuf,

    /// Path to the source file the map refers to
    pub source: PathBuf,

    /// Print the result as a table (not supported yet)
    #[arg(short, long)]
    pub tabulate: bool,

    /// Print the raw mapping, the decoded PC list and the line map
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and the output path
    #[arg(short, long)]
    pub quiet: bool,

    /// Name the output file with a suffix (prog_annotated.teal) or a prefix (annotated_prog.teal)
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub naming: Option<OutputNaming>,

    /// Annotate each line with its last PC only
    #[arg(long)]
    pub last_wins: bool,

    /// Index of the line value inside multi-value tokens
    #[arg(long, value_name = "N")]
    pub field: Option<usize>,

    /// Token delimiter of the encoded mapping
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Treat token values as line deltas from the previous mapped PC
    #[arg(long)]
    pub delta: bool,

    /// Spaces between the longest source line and the PC comments
    #[arg(long, value_name = "N")]
    pub gutter: Option<usize>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }
}
