//! Resolver of the `[TimingPoints]` section.

use super::{BufferedLine, number};
use crate::beatmap::{
    ParseWarning, ParseWarningWithLine,
    mixin::SourceLineMixinExt,
    model::{Beatmap, timing::TimingPoint},
};

impl TimingPoint {
    /// Parses a line `offset,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`.
    ///
    /// Only the offset is required. A missing or invalid beat length is `NaN`, and the other
    /// missing integers are `0`. The BPM is set from a positive beat length, and the velocity
    /// from a negative one.
    ///
    /// ```
    /// use osu_rs::beatmap::model::timing::TimingPoint;
    ///
    /// let point = TimingPoint::parse("1000,-50,4,2,0,60,0,1").unwrap();
    /// assert_eq!(point.offset, 1000);
    /// assert_eq!(point.velocity, 2.0);
    /// assert_eq!(point.bpm, None);
    /// assert!(point.kiai_time_active);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let offset = number::int(fields.next())?;
        let beat_length = number::float(fields.next());
        let mut int_field = || number::int(fields.next()).unwrap_or(0);
        let timing_signature = int_field();
        let sample_set_id = int_field();
        let custom_sample_index = int_field();
        let sample_volume = int_field();
        let timing_change = number::float(fields.next()) == 1.0;
        let kiai_time_active = number::int(fields.next()).is_some_and(|effects| effects & 1 != 0);

        let (bpm, velocity) = if beat_length > 0.0 {
            (Some(bpm_of(beat_length)), 1.0)
        } else if beat_length < 0.0 {
            (None, (100.0 / beat_length).abs())
        } else {
            (None, 1.0)
        };
        Some(Self {
            offset,
            beat_length,
            velocity,
            timing_signature,
            sample_set_id,
            custom_sample_index,
            sample_volume,
            timing_change,
            kiai_time_active,
            bpm,
            inherited: false,
        })
    }
}

fn bpm_of(beat_length: f64) -> u32 {
    // saturating cast
    (60_000.0 / beat_length).round() as u32
}

/// Carries the beat length and the BPM of each point over to the following point which has
/// no BPM of its own, in order. The first point is left as is.
pub fn inherit_tempo(points: &mut [TimingPoint]) {
    let mut carried: Option<(f64, Option<u32>)> = None;
    for point in points {
        if let (None, Some((beat_length, bpm))) = (point.bpm, carried) {
            point.beat_length = beat_length;
            point.bpm = bpm;
            point.inherited = true;
        }
        carried = Some((point.beat_length, point.bpm));
    }
}

/// Parses the buffered lines into sorted timing points with the tempo carried over, and sets
/// the BPM range.
pub(super) fn resolve(
    beatmap: &mut Beatmap,
    lines: Vec<BufferedLine>,
    warnings: &mut Vec<ParseWarningWithLine>,
) {
    let mut points = Vec::with_capacity(lines.len());
    for line in lines {
        let line_number = line.line();
        let line = line.into_content();
        match TimingPoint::parse(&line) {
            Some(point) => points.push(point),
            None => {
                log::warn!("line {line_number}: timing point without offset `{line}`");
                warnings.push(ParseWarning::MalformedTimingPoint(line).into_wrapper_line(line_number));
            }
        }
    }

    beatmap.bpm_min = points.iter().filter_map(|point| point.bpm).min();
    beatmap.bpm_max = points.iter().filter_map(|point| point.bpm).max();

    points.sort_by_key(|point| point.offset);
    inherit_tempo(&mut points);
    beatmap.timing_points = points;
}
