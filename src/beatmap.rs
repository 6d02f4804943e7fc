//! The parser module of osu! beatmap (.osu) files.
//!
//! This module works in three phases:
//!
//! - [`lex`] classifies each line of the file by the section it belongs to. Key-value lines
//!   are stored into the metadata right away, and the lines of the `[TimingPoints]`,
//!   `[HitObjects]` and `[Events]` sections are buffered.
//! - [`parse`] drains the buffers in a fixed order when the input ends. Timing points are
//!   resolved before hit objects because the duration of a slider depends on the timing point
//!   governing it.
//! - [`derive`] computes the statistics over the resolved collections: total and draining time,
//!   and the maximum combo.
//!
//! In detail, our policies are:
//!
//! - Parse tolerantly. A malformed line is dropped and reported as a [`ParseWarning`], but it
//!   never invalidates the rest of the map.
//! - Keep unknown keys and sections. The metadata is a string map read through typed accessors,
//!   so keys of future format versions survive.
//! - Do not support editing or writing beatmaps back.

pub mod curve;
pub mod derive;
pub mod lex;
pub mod mixin;
pub mod model;
pub mod parse;
pub mod prelude;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;

use self::{mixin::SourceLineMixin, model::Beatmap, parse::BeatmapParser};

/// A warning about a line which was dropped while parsing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// The line in a key-value section is not formed as `key:value`.
    #[error("unrecognized line: {0}")]
    UnrecognizedLine(String),
    /// The offset of the timing point is missing or not a number.
    #[error("malformed timing point: {0}")]
    MalformedTimingPoint(String),
    /// The hit object has less than 4 fields, or its position, time or type is not a number.
    #[error("malformed hit object: {0}")]
    MalformedHitObject(String),
    /// The start or end time of the break is not an unsigned integer.
    #[error("malformed break: {0}")]
    MalformedBreak(String),
}

/// A parse warning with the line number where it occurred.
pub type ParseWarningWithLine = SourceLineMixin<ParseWarning>;

/// Output of parsing a beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct BeatmapOutput {
    /// The parsed beatmap.
    pub beatmap: Beatmap,
    /// Warnings about the lines dropped while parsing, in the order of resolution.
    pub warnings: Vec<ParseWarningWithLine>,
}

/// An error occurred when loading a beatmap file. Problems inside the file are reported as
/// [`ParseWarning`] instead.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("beatmap file not found: {}", path.display())]
    NotFound {
        /// The path requested.
        path: PathBuf,
    },
    /// Reading the file failed.
    #[error("failed to read beatmap file: {}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Settings of the parser.
///
/// ```
/// use osu_rs::beatmap::ParseConfig;
///
/// let config = ParseConfig::default().curve_detail(100);
/// assert_eq!(config.curve_detail_value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ParseConfig {
    curve_detail: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            curve_detail: curve::DEFAULT_CURVE_DETAIL,
        }
    }
}

impl ParseConfig {
    /// Sets the number of samples taken on each segment of a curve to approximate the end
    /// position of sliders. Values under 1 are treated as 1.
    pub const fn curve_detail(mut self, samples: usize) -> Self {
        self.curve_detail = if samples == 0 { 1 } else { samples };
        self
    }

    /// Gets the number of samples taken on each segment of a curve.
    #[must_use]
    pub const fn curve_detail_value(&self) -> usize {
        self.curve_detail
    }
}

/// Parses a beatmap from the whole source text.
///
/// # Example
///
/// ```
/// use osu_rs::beatmap::{BeatmapOutput, parse_beatmap};
///
/// let source = "[Metadata]\nTitle:Blue Zenith\n\n[Events]\n0,0,\"bg.jpg\",0,0\n";
/// let BeatmapOutput { beatmap, .. } = parse_beatmap(source);
/// assert_eq!(beatmap.metadata.title(), Some("Blue Zenith"));
/// assert_eq!(beatmap.bg_filename.as_deref(), Some("bg.jpg"));
/// ```
pub fn parse_beatmap(source: &str) -> BeatmapOutput {
    parse_beatmap_with_config(source, ParseConfig::default())
}

/// Parses a beatmap from the whole source text with the config.
///
/// A variant of [`parse_beatmap`].
pub fn parse_beatmap_with_config(source: &str, config: ParseConfig) -> BeatmapOutput {
    let mut parser = BeatmapParser::with_config(config);
    for line in source.lines() {
        parser.parse_line(line);
    }
    parser.finalize()
}

/// Parses a beatmap from a reader, line by line. Bytes which are not UTF-8 are replaced.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails midway. The `path` of the error is empty.
pub fn parse_beatmap_reader(reader: impl BufRead) -> Result<BeatmapOutput, LoadError> {
    read_lines(reader, Path::new(""), ParseConfig::default())
}

/// Parses a beatmap file.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist, or [`LoadError::Io`] if it
/// cannot be read.
pub fn parse_beatmap_file(path: impl AsRef<Path>) -> Result<BeatmapOutput, LoadError> {
    parse_beatmap_file_with_config(path, ParseConfig::default())
}

/// Parses a beatmap file with the config.
///
/// A variant of [`parse_beatmap_file`].
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist, or [`LoadError::Io`] if it
/// cannot be read.
pub fn parse_beatmap_file_with_config(
    path: impl AsRef<Path>,
    config: ParseConfig,
) -> Result<BeatmapOutput, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        log::warn!("cannot open beatmap {}: {source}", path.display());
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_lines(BufReader::new(file), path, config)
}

fn read_lines(
    mut reader: impl BufRead,
    path: &Path,
    config: ParseConfig,
) -> Result<BeatmapOutput, LoadError> {
    let mut parser = BeatmapParser::with_config(config);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
            log::warn!("reading beatmap {} failed: {source}", path.display());
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        parser.parse_line(line.trim_end_matches(['\n', '\r']));
    }
    Ok(parser.finalize())
}
