//! Statistics derived from the resolved hit objects, timing points and breaks.
//!
//! Both passes are pure functions of their inputs, so running them again on a parsed
//! [`Beatmap`](super::model::Beatmap) gives the stored values.

use super::model::{
    event::BreakTime,
    hit_object::{HitObject, HitObjectKind, Slider},
    metadata::Metadata,
    timing::TimingPoint,
};

/// The lengths of a map in whole seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Durations {
    /// The start time of the last hit object.
    pub total_time: i32,
    /// The time between the first and the last hit objects, minus the breaks.
    pub draining_time: i32,
}

/// Computes the total and draining times from hit objects sorted by start time. Both are `0`
/// without hit objects.
///
/// ```
/// use osu_rs::beatmap::{
///     derive::{Durations, durations},
///     model::event::BreakTime,
/// };
///
/// let breaks = [BreakTime { start_time: 0, end_time: 10_000 }];
/// assert_eq!(durations(&[], &breaks), Durations::default());
/// ```
#[must_use]
pub fn durations(hit_objects: &[HitObject], break_times: &[BreakTime]) -> Durations {
    let (Some(first), Some(last)) = (hit_objects.first(), hit_objects.last()) else {
        return Durations::default();
    };
    let breaks: i64 = break_times.iter().map(BreakTime::duration).sum();
    let draining = i64::from(last.start_time) - i64::from(first.start_time) - breaks;
    Durations {
        total_time: last.start_time.div_euclid(1000),
        draining_time: saturate(draining.div_euclid(1000)),
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Computes the highest combo reachable. `None` without timing points or without hit objects.
///
/// Circles and spinners count one each. A slider counts its edges and the ticks between each
/// pair of consecutive edges, with the timing point governing each object found by advancing
/// a cursor over the sorted timing points.
#[must_use]
pub fn max_combo(
    hit_objects: &[HitObject],
    timing_points: &[TimingPoint],
    metadata: &Metadata,
) -> Option<u32> {
    if hit_objects.is_empty() {
        return None;
    }
    let mut timing = timing_points.first()?;
    let mut rest = &timing_points[1..];
    let slider_multiplier = metadata.slider_multiplier();
    let tick_rate = metadata.slider_tick_rate();

    let mut combo = 0u64;
    for object in hit_objects {
        while let [next, tail @ ..] = rest {
            if object.start_time < next.offset {
                break;
            }
            timing = next;
            rest = tail;
        }
        combo += match &object.kind {
            HitObjectKind::Circle(_) | HitObjectKind::Spinner(_) => 1,
            HitObjectKind::Slider(slider) => {
                let tick_length = slider_multiplier * 100.0 * timing.velocity / tick_rate;
                slider_combo(slider, tick_length)
            }
            HitObjectKind::Unknown => 0,
        };
    }
    Some(u32::try_from(combo).unwrap_or(u32::MAX))
}

fn slider_combo(slider: &Slider, tick_length: f64) -> u64 {
    let ticks_per_span =
        ((f64::from(slider.pixel_length) / tick_length * 100.0).floor() / 100.0 - 1.0).ceil();
    // ticks and the edge closing the span
    let per_span = if ticks_per_span.is_finite() {
        (ticks_per_span + 1.0).max(0.0) as u64
    } else {
        0
    };
    let spans = slider.edges.len().saturating_sub(1) as u64;
    spans * per_span + 1
}
