//! PC sequence decoding and inversion into a line map.
//!
//! A raw mapping is a delimiter-separated list of VLQ tokens, one per program
//! counter. Decoding yields a [`PcSequence`] indexed by PC; [`invert`] turns it
//! into a [`LineMap`] indexed by source line.

use crate::logging;
use crate::vlq::{self, VlqError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default token delimiter.
pub const DEFAULT_DELIMITER: char = ';';

/// Position of the original-line value inside a source map segment.
pub const DEFAULT_LINE_FIELD: usize = 2;

/// The decoded line for one PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingEntry {
    Present(i64),
    Absent,
}

impl MappingEntry {
    pub fn value(self) -> Option<i64> {
        match self {
            MappingEntry::Present(line) => Some(line),
            MappingEntry::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, MappingEntry::Absent)
    }
}

impl From<Option<i64>> for MappingEntry {
    fn from(value: Option<i64>) -> Self {
        value.map_or(MappingEntry::Absent, MappingEntry::Present)
    }
}

impl fmt::Display for MappingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingEntry::Present(line) => write!(f, "{}", line),
            MappingEntry::Absent => f.write_str("absent"),
        }
    }
}

/// One entry per PC, in PC order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcSequence {
    entries: Vec<MappingEntry>,
}

impl PcSequence {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<MappingEntry> {
        self.entries.get(pc).copied()
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Iterate `(pc, entry)` pairs in PC order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, MappingEntry)> + '_ {
        self.entries.iter().copied().enumerate()
    }

    /// PCs whose token could not be decoded.
    pub fn absent_pcs(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, entry)| entry.is_absent())
            .map(|(pc, _)| pc)
            .collect()
    }

    pub fn absent_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_absent()).count()
    }
}

impl FromIterator<MappingEntry> for PcSequence {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for PcSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (pc, entry) in self.iter() {
            if pc > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("]")
    }
}

/// Source line to the PCs that map to it, in ascending PC order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMap {
    lines: BTreeMap<i64, Vec<usize>>,
}

impl LineMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pc` maps to `line`.
    pub fn insert(&mut self, line: i64, pc: usize) {
        self.lines.entry(line).or_default().push(pc);
    }

    pub fn get(&self, line: i64) -> Option<&[usize]> {
        self.lines.get(&line).map(Vec::as_slice)
    }

    pub fn contains_line(&self, line: i64) -> bool {
        self.lines.contains_key(&line)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[usize])> + '_ {
        self.lines.iter().map(|(line, pcs)| (*line, pcs.as_slice()))
    }

    /// Keep only the most recent PC for each line.
    pub fn last_wins(&self) -> BTreeMap<i64, usize> {
        self.lines
            .iter()
            .filter_map(|(line, pcs)| pcs.last().map(|pc| (*line, *pc)))
            .collect()
    }
}

impl fmt::Display for LineMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (line, pcs)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", line, format_pcs(pcs))?;
        }
        f.write_str("}")
    }
}

/// Render PCs as `[a, b, c]`.
pub fn format_pcs(pcs: &[usize]) -> String {
    let joined = pcs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// How token values relate to source lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEncoding {
    /// Each token carries its line number.
    #[default]
    Absolute,
    /// Each token carries the change from the previous mapped PC's line.
    Delta,
}

/// Which value of a token holds the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    /// The value at this position of a multi-value token.
    Index(usize),
    /// The one value the token carries; zero values around it are padding.
    /// A token with several nonzero values has no line.
    Significant,
}

impl LineField {
    fn select(self, values: &[i64]) -> Option<i64> {
        match (self, values) {
            (_, []) => None,
            (_, [single]) => Some(*single),
            (LineField::Index(index), many) => many.get(index).copied(),
            (LineField::Significant, many) => {
                let mut nonzero = many.iter().copied().filter(|v| *v != 0);
                match (nonzero.next(), nonzero.next()) {
                    (None, _) => Some(0),
                    (Some(value), None) => Some(value),
                    (Some(_), Some(_)) => None,
                }
            }
        }
    }
}

/// Rules controlling how a raw mapping string is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRules {
    pub delimiter: char,
    pub field: LineField,
    pub line_encoding: LineEncoding,
}

impl Default for DecodeRules {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            field: LineField::Index(DEFAULT_LINE_FIELD),
            line_encoding: LineEncoding::Absolute,
        }
    }
}

/// Decodes raw mapping strings into PC sequences.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    rules: DecodeRules,
}

impl Decoder {
    pub fn new(rules: DecodeRules) -> Self {
        Self { rules }
    }

    /// Decode the line value of a single token.
    ///
    /// `Ok(None)` means the token holds no usable value.
    pub fn decode_token(&self, token: &str) -> Result<Option<i64>, VlqError> {
        let values = vlq::decode(token)?;
        Ok(self.rules.field.select(&values))
    }

    /// Split `raw` and decode each token. Undecodable tokens become absent.
    pub fn decode_mapping(&self, raw: &str) -> PcSequence {
        let mut running_line = 0i64;
        let sequence: PcSequence = raw
            .split(self.rules.delimiter)
            .enumerate()
            .map(|(pc, token)| {
                let value = match self.decode_token(token) {
                    Ok(None) if !token.is_empty() => {
                        logging::log_token_absent(pc, token, "token carries no line value");
                        None
                    }
                    Ok(value) => value,
                    Err(err) => {
                        logging::log_token_absent(pc, token, &err.to_string());
                        None
                    }
                };
                let line = match (self.rules.line_encoding, value) {
                    (LineEncoding::Delta, Some(delta)) => match running_line.checked_add(delta) {
                        Some(line) => {
                            running_line = line;
                            Some(line)
                        }
                        None => {
                            logging::log_token_absent(pc, token, "line delta overflows");
                            None
                        }
                    },
                    (_, value) => value,
                };
                MappingEntry::from(line)
            })
            .collect();

        logging::log_mapping_decoded(sequence.len(), sequence.absent_count());
        sequence
    }
}

/// Decode `raw`, reading each token's one significant value as its line.
///
/// Use a [`Decoder`] with [`DecodeRules`] to select a fixed segment field.
pub fn decode_mapping(raw: &str, delimiter: char) -> PcSequence {
    Decoder::new(DecodeRules {
        delimiter,
        field: LineField::Significant,
        line_encoding: LineEncoding::Absolute,
    })
    .decode_mapping(raw)
}

/// Build the line map for a PC sequence.
pub fn invert(sequence: &PcSequence) -> LineMap {
    let mut map = LineMap::new();
    for (pc, entry) in sequence.iter() {
        // Present(0) is a real line; only Absent is skipped.
        if let MappingEntry::Present(line) = entry {
            map.insert(line, pc);
        }
    }
    logging::log_line_map_built(map.len());
    map
}
