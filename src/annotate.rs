//! Rendering of PC annotations onto source lines.

use crate::mapping::{format_pcs, LineMap};
use crate::{logging, AnnotateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Spaces between the longest source line and the annotation column.
pub const DEFAULT_GUTTER: usize = 3;

const COMMENT_MARKER: &str = "// PC: ";
const SUFFIX: &str = "_annotated";
const PREFIX: &str = "annotated_";

/// Source text split into lines, line endings removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AnnotateError::FileError(format!("Failed to read source file {:?}: {}", path, e))
        })?;
        let document = Self::from_text(&text);
        if document.is_empty() {
            logging::log_empty_document(&path.to_string_lossy());
        }
        Ok(document)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Length in characters of the longest line, 0 for an empty document.
    pub fn max_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// How the PCs of a line are listed in its annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcListing {
    /// Every PC on the line, e.g. `[3, 7]`.
    #[default]
    All,
    /// Only the last PC on the line, e.g. `7`.
    LastWins,
}

/// Where the annotated file is written relative to the source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputNaming {
    /// `prog.teal` -> `prog_annotated.teal`
    #[default]
    Suffix,
    /// `prog.teal` -> `annotated_prog.teal`
    Prefix,
}

impl OutputNaming {
    pub fn output_path(self, source: &Path) -> PathBuf {
        let file_name = match self {
            OutputNaming::Suffix => {
                let stem = source
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match source.extension() {
                    Some(ext) => format!("{}{}.{}", stem, SUFFIX, ext.to_string_lossy()),
                    None => format!("{}{}", stem, SUFFIX),
                }
            }
            OutputNaming::Prefix => {
                let name = source
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("{}{}", PREFIX, name)
            }
        };
        source.with_file_name(file_name)
    }
}

/// Formats source lines with trailing PC comments.
#[derive(Debug, Clone, Copy)]
pub struct Annotator {
    gutter: usize,
    listing: PcListing,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(DEFAULT_GUTTER, PcListing::All)
    }
}

impl Annotator {
    pub fn new(gutter: usize, listing: PcListing) -> Self {
        Self { gutter, listing }
    }

    /// Render every line of `document`, annotating those present in `line_map`.
    pub fn render(&self, document: &SourceDocument, line_map: &LineMap) -> Vec<String> {
        let width = document.max_width();
        document
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let pcs = i64::try_from(index).ok().and_then(|i| line_map.get(i));
                match pcs {
                    Some(pcs) => {
                        let padding = width - line.chars().count() + self.gutter;
                        format!(
                            "{}{}{}{}",
                            line,
                            " ".repeat(padding),
                            COMMENT_MARKER,
                            self.format_listing(pcs)
                        )
                    }
                    None => line.clone(),
                }
            })
            .collect()
    }

    fn format_listing(&self, pcs: &[usize]) -> String {
        match (self.listing, pcs.last()) {
            (PcListing::LastWins, Some(last)) => last.to_string(),
            _ => format_pcs(pcs),
        }
    }
}

/// Write rendered lines to `path` in a single write.
pub fn write_annotated(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|e| {
        AnnotateError::FileError(format!(
            "Failed to write annotated output {:?}: {}",
            path, e
        ))
    })?;

    logging::log_annotation_written(&path.to_string_lossy(), lines.len());
    Ok(())
}
