//! Resolver of the `[HitObjects]` section.
//!
//! A line is `x,y,time,type,hitSound,objectParams...,hitSample`, where `type` is a bitmask:
//! bit 0 is a circle, bit 1 a slider, bit 2 a new combo, and bit 3 a spinner.

use super::{BufferedLine, number};
use crate::beatmap::{
    ParseConfig, ParseWarning, ParseWarningWithLine,
    curve,
    mixin::SourceLineMixinExt,
    model::{
        Beatmap,
        hit_object::{
            Circle, CurveType, Edge, HitObject, HitObjectKind, Position, Slider, Spinner,
        },
        hit_sound::{Additions, SoundTypes},
        metadata::Metadata,
        timing::{TimingPoint, governing_timing_point},
    },
};

const CIRCLE: i32 = 1;
const SLIDER: i32 = 1 << 1;
const NEW_COMBO: i32 = 1 << 2;
const SPINNER: i32 = 1 << 3;

/// The highest repeat count accepted on a slider.
pub const MAX_REPEAT_COUNT: u32 = u16::MAX as u32;

/// Decodes one hit object line, with the timing points and the difficulty to compute the
/// slider duration. `None` when the line is malformed.
///
/// ```
/// use osu_rs::beatmap::{
///     ParseConfig,
///     model::metadata::Metadata,
///     parse::hit_object::parse_hit_object,
/// };
///
/// let metadata = Metadata::default();
/// let line = "256,192,1000,1,0,0:0:0:0:";
/// let object = parse_hit_object(line, &[], &metadata, ParseConfig::default()).unwrap();
/// assert_eq!(object.object_name(), "circle");
/// assert_eq!(object.start_time, 1000);
/// ```
#[must_use]
pub fn parse_hit_object(
    line: &str,
    timing_points: &[TimingPoint],
    metadata: &Metadata,
    config: ParseConfig,
) -> Option<HitObject> {
    let fields: Vec<&str> = line.split(',').collect();
    let field = |index: usize| fields.get(index).copied();
    let position = Position::new(number::int(field(0))?, number::int(field(1))?);
    let start_time = number::int(field(2))?;
    let object_type = number::int(field(3))?;
    let sound_types = SoundTypes::from_bits(number::int(field(4)).unwrap_or(0));

    let kind = if object_type & CIRCLE != 0 {
        HitObjectKind::Circle(Circle {
            additions: Additions::parse(field(5)),
        })
    } else if object_type & SPINNER != 0 {
        HitObjectKind::Spinner(Spinner {
            end_time: number::int(field(5)).unwrap_or(start_time),
            additions: Additions::parse(field(6)),
        })
    } else if object_type & SLIDER != 0 {
        let repeat_count = match field(6).filter(|repeat| !repeat.is_empty()) {
            Some(repeat) => u32::try_from(number::int(Some(repeat))?)
                .ok()
                .filter(|&repeat| repeat <= MAX_REPEAT_COUNT)?,
            None => 0,
        };
        let pixel_length = number::int(field(7)).unwrap_or(0);
        let (curve_type, points) = control_points(position, field(5));
        let duration = governing_timing_point(timing_points, start_time).and_then(|timing| {
            slider_duration(timing, metadata.slider_multiplier(), pixel_length, repeat_count)
        });
        let end_position = curve::endpoint_with_detail(
            curve_type,
            f64::from(pixel_length),
            &points,
            config.curve_detail_value(),
        )
        .or_else(|| points.last().copied())
        .unwrap_or(position);
        HitObjectKind::Slider(Slider {
            repeat_count,
            pixel_length,
            curve_type,
            edges: edges(repeat_count, field(8), field(9)),
            additions: Additions::parse(field(10)),
            duration,
            end_time: duration.and_then(|duration| start_time.checked_add(duration)),
            end_position,
            points,
        })
    } else {
        HitObjectKind::Unknown
    };

    Some(HitObject {
        start_time,
        position,
        new_combo: object_type & NEW_COMBO != 0,
        sound_types,
        kind,
    })
}

/// `curveType|x:y|x:y...`, with the position of the object prepended to the points.
fn control_points(position: Position, field: Option<&str>) -> (CurveType, Vec<Position>) {
    let mut parts = field.unwrap_or_default().split('|');
    let curve_type = CurveType::from_code(parts.next().unwrap_or_default());
    let points = std::iter::once(position)
        .chain(parts.filter_map(|part| {
            let (x, y) = part.split_once(':')?;
            Some(Position::new(number::int(Some(x))?, number::int(Some(y))?))
        }))
        .collect();
    (curve_type, points)
}

/// `repeat_count + 1` edges, from the `|`-separated sounds and additions.
fn edges(repeat_count: u32, sounds: Option<&str>, additions: Option<&str>) -> Vec<Edge> {
    let sounds: Vec<&str> = sounds.map(|s| s.split('|').collect()).unwrap_or_default();
    let additions: Vec<&str> = additions.map(|a| a.split('|').collect()).unwrap_or_default();
    (0..=repeat_count as usize)
        .map(|index| Edge {
            sound_types: SoundTypes::from_bits(
                number::int(sounds.get(index).copied()).unwrap_or(0),
            ),
            additions: Additions::parse(additions.get(index).copied()),
        })
        .collect()
}

/// `ceil(pixelLength * spans / (sliderMultiplier * 100 * velocity) * beatLength)`, where a
/// repeat count of `0` is taken as one span.
pub fn slider_duration(
    timing: &TimingPoint,
    slider_multiplier: f64,
    pixel_length: i32,
    repeat_count: u32,
) -> Option<i32> {
    if !(timing.beat_length > 0.0) {
        return None;
    }
    let pixels_per_beat = slider_multiplier * 100.0 * timing.velocity;
    let beats = f64::from(pixel_length) * f64::from(repeat_count.max(1)) / pixels_per_beat;
    let duration = (beats * timing.beat_length).ceil();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&duration)
        .then_some(duration as i32)
}

/// Decodes the buffered lines into hit objects sorted by start time, and counts them.
pub(super) fn resolve(
    beatmap: &mut Beatmap,
    lines: Vec<BufferedLine>,
    warnings: &mut Vec<ParseWarningWithLine>,
    config: ParseConfig,
) {
    let mut hit_objects = Vec::with_capacity(lines.len());
    for line in lines {
        let line_number = line.line();
        let line = line.into_content();
        let Some(object) =
            parse_hit_object(&line, &beatmap.timing_points, &beatmap.metadata, config)
        else {
            log::warn!("line {line_number}: malformed hit object `{line}`");
            warnings.push(ParseWarning::MalformedHitObject(line).into_wrapper_line(line_number));
            continue;
        };
        match object.kind {
            HitObjectKind::Circle(_) => beatmap.nb_circles += 1,
            HitObjectKind::Slider(_) => beatmap.nb_sliders += 1,
            HitObjectKind::Spinner(_) => beatmap.nb_spinners += 1,
            HitObjectKind::Unknown => log::trace!("line {line_number}: unknown object type"),
        }
        hit_objects.push(object);
    }
    hit_objects.sort_by_key(|object| object.start_time);
    beatmap.hit_objects = hit_objects;
}
