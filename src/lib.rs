pub mod annotate;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mapping;
pub mod source_map;
pub mod ui;
pub mod vlq;
use miette::Diagnostic;

pub use annotate::{Annotator, OutputNaming, PcListing, SourceDocument};
pub use mapping::{decode_mapping, invert, DecodeRules, Decoder, LineField, LineMap, MappingEntry, PcSequence};

/// Result type alias for the annotator
pub type Result<T> = miette::Result<T>;

/// Error types for the annotator
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum AnnotateError {
    #[error("Missing key \"{0}\" in source map")]
    #[diagnostic(
        code(annotate::missing_key),
        help("The source map must be a JSON object with the encoded mapping stored as a string under the \"mapping\" key.")
    )]
    MissingKey(String),

    #[error("Invalid mapping: {0}")]
    #[diagnostic(
        code(annotate::invalid_mapping),
        help("The \"mapping\" value must be a string of ';'-separated Base64 VLQ tokens.")
    )]
    InvalidMapping(String),

    #[error("JSON error: {0}")]
    #[diagnostic(
        code(annotate::json_error),
        help("Make sure the source map file is valid JSON. Compilers usually emit it next to the compiled program.")
    )]
    JsonError(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(annotate::config_error),
        help("Check the [decode] and [output] tables in .sourcemap-annotate.toml.")
    )]
    ConfigError(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(annotate::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
