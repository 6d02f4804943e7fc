//! Line classifier of the beatmap format.
//!
//! A beatmap is a sequence of lines grouped into sections by headers like `[HitObjects]`.
//! [`classify`] decides what a line is from the line itself and the current section, without
//! keeping any state.

/// A section of a beatmap, started by a header line `[Name]`. Names are case insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
    /// `[Colours]`
    Colours,
    /// `[HitObjects]`
    HitObjects,
    /// Any other section, with its name in lowercase.
    Other(String),
}

impl Section {
    /// Gets the section from its name written between the brackets.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "general" => Self::General,
            "editor" => Self::Editor,
            "metadata" => Self::Metadata,
            "difficulty" => Self::Difficulty,
            "events" => Self::Events,
            "timingpoints" => Self::TimingPoints,
            "colours" => Self::Colours,
            "hitobjects" => Self::HitObjects,
            _ => Self::Other(name.to_ascii_lowercase()),
        }
    }
}

/// What a line is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineKind<'a> {
    /// A header which starts a new section.
    SectionHeader(Section),
    /// A line of `[TimingPoints]`, to be buffered as is.
    TimingLine(&'a str),
    /// A line of `[HitObjects]`, to be buffered as is.
    ObjectLine(&'a str),
    /// A line of `[Events]`, to be buffered as is.
    EventLine(&'a str),
    /// `osu file format vN` before any section, with the version `vN`.
    FormatDeclaration(&'a str),
    /// A `key:value` pair.
    KeyValue {
        /// The key, made of ASCII letters and digits.
        key: &'a str,
        /// The value, not empty.
        value: &'a str,
    },
    /// A line in a key-value section which is not a pair.
    Unrecognized(&'a str),
    /// A blank line, a pair without value, or a line before any section which is neither a
    /// declaration nor a pair.
    Ignored,
}

/// Classifies the line in the current section.
///
/// The line is trimmed, with a leading byte order mark removed.
///
/// ```
/// use osu_rs::beatmap::lex::{LineKind, Section, classify};
///
/// assert_eq!(classify("[HitObjects]", None), LineKind::SectionHeader(Section::HitObjects));
/// assert_eq!(
///     classify("64,192,1000,1,0", Some(&Section::HitObjects)),
///     LineKind::ObjectLine("64,192,1000,1,0"),
/// );
/// assert_eq!(
///     classify("Title: Snow Drive", Some(&Section::Metadata)),
///     LineKind::KeyValue { key: "Title", value: "Snow Drive" },
/// );
/// ```
#[must_use]
pub fn classify<'a>(line: &'a str, section: Option<&Section>) -> LineKind<'a> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() {
        return LineKind::Ignored;
    }
    if let Some(name) = section_header(line) {
        return LineKind::SectionHeader(Section::from_name(name));
    }
    match section {
        Some(Section::TimingPoints) => LineKind::TimingLine(line),
        Some(Section::HitObjects) => LineKind::ObjectLine(line),
        Some(Section::Events) => LineKind::EventLine(line),
        Some(_) => match key_value(line) {
            Some((_, "")) => LineKind::Ignored,
            Some((key, value)) => LineKind::KeyValue { key, value },
            None => LineKind::Unrecognized(line),
        },
        None => {
            if let Some(version) = format_declaration(line) {
                return LineKind::FormatDeclaration(version);
            }
            match key_value(line) {
                Some((key, value)) if !value.is_empty() => LineKind::KeyValue { key, value },
                _ => LineKind::Ignored,
            }
        }
    }
}

/// `[Name]` with ASCII letters and digits.
fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    (!name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())).then_some(name)
}

/// `osu file format vN`
fn format_declaration(line: &str) -> Option<&str> {
    let version = line.strip_prefix("osu file format ")?;
    let digits = version.strip_prefix('v')?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(version)
}

/// `key:value` with a key of ASCII letters and digits, and spaces around the colon. The value
/// may be empty.
fn key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim_end_matches(' ');
    (!key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric()))
        .then_some((key, value.trim_start_matches(' ')))
}
