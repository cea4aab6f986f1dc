use crate::annotate::{self, Annotator, PcListing, SourceDocument};
use crate::cli::args::{Cli, Verbosity};
use crate::config::Config;
use crate::logging;
use crate::mapping::{invert, DecodeRules, Decoder, LineEncoding, LineField};
use crate::source_map;
use crate::ui::formatter::Formatter;
use crate::Result;
use std::path::PathBuf;

fn print_info(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::info(message));
    }
}

fn print_success(message: impl AsRef<str>) {
    println!("{}", Formatter::success(message));
}

fn print_warning(message: impl AsRef<str>) {
    println!("{}", Formatter::warning(message));
}

/// Decode rules from CLI flags, falling back to the config file.
pub fn resolve_rules(cli: &Cli, config: &Config) -> DecodeRules {
    let mut rules = config.decode.rules();
    if let Some(delimiter) = cli.delimiter {
        rules.delimiter = delimiter;
    }
    if let Some(field) = cli.field {
        rules.field = LineField::Index(field);
    }
    if cli.delta {
        rules.line_encoding = LineEncoding::Delta;
    }
    rules
}

/// Annotator settings from CLI flags, falling back to the config file.
pub fn resolve_annotator(cli: &Cli, config: &Config) -> Annotator {
    let gutter = cli.gutter.unwrap_or_else(|| config.output.gutter());
    let listing = if cli.last_wins || config.output.last_wins.unwrap_or(false) {
        PcListing::LastWins
    } else {
        PcListing::All
    };
    Annotator::new(gutter, listing)
}

/// Execute the annotate command, returning the path of the annotated file.
pub fn run(cli: Cli, config: &Config, verbosity: Verbosity) -> Result<PathBuf> {
    Formatter::set_verbosity(verbosity.level());

    let rules = resolve_rules(&cli, config);
    logging::log_display(format!("Decode rules: {:?}", rules), logging::LogLevel::Debug);

    print_info(format!("Loading source map: {:?}", cli.map));
    let raw = source_map::load_raw_mapping(&cli.map)?;

    let sequence = Decoder::new(rules).decode_mapping(&raw);
    let line_map = invert(&sequence);

    let document = SourceDocument::load(&cli.source)?;
    let lines = resolve_annotator(&cli, config).render(&document, &line_map);

    let naming = cli.naming.or(config.output.naming).unwrap_or_default();
    let output_path = naming.output_path(&cli.source);
    annotate::write_annotated(&output_path, &lines)?;

    print_info(Formatter::format_summary(&sequence, &line_map));
    print_success(format!("Annotated output saved to {}", output_path.display()));

    if Formatter::is_verbose() {
        println!("{}", Formatter::format_raw_mapping(&raw));
        println!("{}", Formatter::format_pc_sequence(&sequence));
        println!("{}", Formatter::format_line_map(&line_map));
    }

    if cli.tabulate {
        print_warning("Tabulating is not supported yet");
    }

    Ok(output_path)
}
