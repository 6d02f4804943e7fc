//! Tests for `osu_rs::beatmap`.

#[cfg(feature = "diagnostics")]
mod diagnostics_test;
mod files;
mod prelude_test;
mod scenarios;
#[cfg(feature = "serde")]
mod serde_test;
mod stream;

use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

/// Parses the source and asserts that no line was dropped.
pub fn parse_clean(source: &str) -> Beatmap {
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(source);
    assert_eq!(warnings, vec![]);
    beatmap
}

/// Asserts the invariants every resolved beatmap holds.
pub fn assert_consistent(beatmap: &Beatmap) {
    assert!(
        beatmap
            .timing_points
            .windows(2)
            .all(|pair| pair[0].offset <= pair[1].offset)
    );
    assert!(
        beatmap
            .hit_objects
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time)
    );
    assert!(
        beatmap
            .break_times
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time)
    );
    assert_eq!(
        beatmap.nb_circles as usize
            + beatmap.nb_sliders as usize
            + beatmap.nb_spinners as usize
            + beatmap.nb_unknown(),
        beatmap.hit_objects.len()
    );
    assert_eq!(
        durations(&beatmap.hit_objects, &beatmap.break_times),
        Durations {
            total_time: beatmap.total_time,
            draining_time: beatmap.draining_time,
        }
    );
    assert_eq!(
        max_combo(
            &beatmap.hit_objects,
            &beatmap.timing_points,
            &beatmap.metadata
        ),
        beatmap.max_combo
    );
    if let Some((min, max)) = beatmap.bpm_range() {
        assert!(min <= max);
    }
}
