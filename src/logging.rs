//! Structured logging utilities for the annotator.
//!
//! This module provides helper functions for consistent, structured logging
//! across the decode pipeline using the `tracing` crate.

use std::fmt;

/// Helper function to format and log multi-line output without structured fields.
pub fn log_display<D: fmt::Display>(message: D, level: LogLevel) {
    let msg = message.to_string();
    match level {
        LogLevel::Info => tracing::info!("{}", msg),
        LogLevel::Warn => tracing::warn!("{}", msg),
        LogLevel::Error => tracing::error!("{}", msg),
        LogLevel::Debug => tracing::debug!("{}", msg),
    }
}

/// Log levels matching tracing crate levels.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// Log source map loading event.
pub fn log_loading_source_map(path: &str) {
    tracing::info!(source_map = path, "Loading source map");
}

/// Log successful extraction of the raw mapping.
pub fn log_source_map_loaded(bytes: usize) {
    tracing::info!(bytes, "Raw mapping loaded");
}

/// Log a token that could not be decoded.
pub fn log_token_absent(pc: usize, token: &str, reason: &str) {
    tracing::debug!(pc, token, reason, "Token decoded as absent");
}

/// Log mapping decode completion.
pub fn log_mapping_decoded(entries: usize, absent: usize) {
    tracing::debug!(entries, absent, "Mapping decoded");
}

/// Log line map construction.
pub fn log_line_map_built(lines: usize) {
    tracing::debug!(lines, "Line map built");
}

/// Log a source file without lines.
pub fn log_empty_document(path: &str) {
    tracing::warn!(source = path, "Source file is empty");
}

/// Log annotated output.
pub fn log_annotation_written(path: &str, lines: usize) {
    tracing::info!(path, lines, "Annotated output written");
}
