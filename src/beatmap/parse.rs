//! Parsing [`Beatmap`] from lines.
//!
//! Raw lines == [`classify`] ==> metadata and buffered lines == [`BeatmapParser::finalize`] ==>
//! [`Beatmap`] (in [`BeatmapOutput`])

pub mod event;
pub mod hit_object;
pub mod hit_sound;
pub(crate) mod number;
pub mod timing;

use super::{
    BeatmapOutput, ParseConfig, ParseWarning, ParseWarningWithLine,
    derive::{self, Durations},
    lex::{LineKind, Section, classify},
    mixin::{SourceLineMixin, SourceLineMixinExt},
    model::Beatmap,
};

/// A raw line kept until finalization, with its line number.
pub type BufferedLine = SourceLineMixin<String>;

/// A streaming parser of beatmaps.
///
/// Feed the lines in the order of the file with [`Self::parse_line`], or arbitrary chunks of
/// the text with [`Self::feed`], then call [`Self::finalize`] once to get the result. The two
/// ways of feeding must not be mixed on the same parser.
///
/// ```
/// use osu_rs::beatmap::parse::BeatmapParser;
///
/// let mut parser = BeatmapParser::new();
/// parser.feed("[TimingPoints]\n0,500,4,2,1,50,1,0\n[HitOb");
/// parser.feed("jects]\n256,192,1000,1,0,0:0:0:0:");
/// let output = parser.finalize();
/// assert_eq!(output.beatmap.nb_circles, 1);
/// assert_eq!(output.beatmap.timing_points[0].bpm, Some(120));
/// ```
#[derive(Debug, Default)]
pub struct BeatmapParser {
    config: ParseConfig,
    section: Option<Section>,
    beatmap: Beatmap,
    timing_lines: Vec<BufferedLine>,
    object_lines: Vec<BufferedLine>,
    event_lines: Vec<BufferedLine>,
    warnings: Vec<ParseWarningWithLine>,
    line_number: usize,
    pending: String,
}

impl BeatmapParser {
    /// Creates a parser with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the config.
    #[must_use]
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Gets the section of the last header seen.
    #[must_use]
    pub const fn section(&self) -> Option<&Section> {
        self.section.as_ref()
    }

    /// Feeds one complete line. Blank and malformed lines are absorbed.
    pub fn parse_line(&mut self, line: &str) {
        self.line_number += 1;
        let line_number = self.line_number;
        match classify(line, self.section.as_ref()) {
            LineKind::SectionHeader(section) => self.section = Some(section),
            LineKind::TimingLine(line) => self
                .timing_lines
                .push(line.to_owned().into_wrapper_line(line_number)),
            LineKind::ObjectLine(line) => self
                .object_lines
                .push(line.to_owned().into_wrapper_line(line_number)),
            LineKind::EventLine(line) => self
                .event_lines
                .push(line.to_owned().into_wrapper_line(line_number)),
            LineKind::FormatDeclaration(version) => {
                self.beatmap.file_format = Some(version.to_owned());
            }
            LineKind::KeyValue { key, value } => {
                self.beatmap.metadata.insert(key, value);
            }
            LineKind::Unrecognized(line) => {
                log::warn!("line {line_number}: not a key-value pair `{line}`");
                self.warnings.push(
                    ParseWarning::UnrecognizedLine(line.to_owned()).into_wrapper_line(line_number),
                );
            }
            LineKind::Ignored => {}
        }
    }

    /// Feeds a chunk of the text. A line split across chunks is kept until its end arrives,
    /// or until [`Self::finalize`].
    pub fn feed(&mut self, chunk: &str) {
        self.pending.push_str(chunk);
        while let Some(end) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=end).collect();
            self.parse_line(line.trim_end_matches(['\n', '\r']));
        }
    }

    /// Resolves the buffered lines and derives the statistics.
    ///
    /// Events are resolved first, then timing points, then hit objects which need the timing
    /// points to compute the slider durations.
    pub fn finalize(mut self) -> BeatmapOutput {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.parse_line(rest.trim_end_matches('\r'));
        }
        let Self {
            config,
            mut beatmap,
            timing_lines,
            object_lines,
            event_lines,
            mut warnings,
            ..
        } = self;

        beatmap.tags = beatmap
            .metadata
            .get("Tags")
            .map(|_| beatmap.metadata.tags().map(ToOwned::to_owned).collect());

        event::resolve(&mut beatmap, event_lines, &mut warnings);
        timing::resolve(&mut beatmap, timing_lines, &mut warnings);
        hit_object::resolve(&mut beatmap, object_lines, &mut warnings, config);

        beatmap.max_combo = derive::max_combo(
            &beatmap.hit_objects,
            &beatmap.timing_points,
            &beatmap.metadata,
        );
        let Durations {
            total_time,
            draining_time,
        } = derive::durations(&beatmap.hit_objects, &beatmap.break_times);
        beatmap.total_time = total_time;
        beatmap.draining_time = draining_time;

        log::debug!(
            "resolved {} timing points, {} circles, {} sliders, {} spinners, {} warnings",
            beatmap.timing_points.len(),
            beatmap.nb_circles,
            beatmap.nb_sliders,
            beatmap.nb_spinners,
            warnings.len(),
        );
        BeatmapOutput { beatmap, warnings }
    }
}
