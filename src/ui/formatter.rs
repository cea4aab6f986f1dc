use crate::mapping::{LineMap, PcSequence};
use crossterm::style::Stylize;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Pretty printing utilities for annotator output
pub struct Formatter;

impl Formatter {
    /// Format the raw encoded mapping.
    pub fn format_raw_mapping(raw: &str) -> String {
        format!("Raw source map: {}", raw)
    }

    /// Format the decoded PC sequence.
    pub fn format_pc_sequence(sequence: &PcSequence) -> String {
        format!("PC list: {}", sequence)
    }

    /// Format the inverted line map.
    pub fn format_line_map(line_map: &LineMap) -> String {
        format!("Line map: {}", line_map)
    }

    /// Format a one-line decode summary.
    pub fn format_summary(sequence: &PcSequence, line_map: &LineMap) -> String {
        let absent = sequence.absent_count();
        format!(
            "Decoded {} PCs ({} absent) onto {} lines",
            sequence.len(),
            absent,
            line_map.len()
        )
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    /// Set output verbosity: 0 quiet, 1 normal, 2 verbose.
    pub fn set_verbosity(level: u8) {
        VERBOSITY.store(level.min(2), Ordering::Relaxed);
    }

    pub fn is_quiet() -> bool {
        VERBOSITY.load(Ordering::Relaxed) == 0
    }

    pub fn is_verbose() -> bool {
        VERBOSITY.load(Ordering::Relaxed) >= 2
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
            ColorKind::Error => format!("{}", message.red()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Warning,
    Error,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
static VERBOSITY: AtomicU8 = AtomicU8::new(1);
