//! Definitions of the parsed beatmap and its parts.

pub mod event;
pub mod hit_object;
pub mod hit_sound;
pub mod metadata;
pub mod timing;

use self::{
    event::BreakTime,
    hit_object::{HitObject, HitObjectKind},
    metadata::Metadata,
    timing::TimingPoint,
};

/// A beatmap aggregate, with every section resolved and the statistics derived.
///
/// All the collections are sorted: `timing_points` by offset, `hit_objects` by start time and
/// `break_times` by start time. Items which share the key keep the order in the file.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The format version declared on the first line, such as `v14`.
    pub file_format: Option<String>,
    /// The key-value pairs of the sections other than timing points, hit objects and events.
    pub metadata: Metadata,
    /// The timing points, sorted by offset.
    pub timing_points: Vec<TimingPoint>,
    /// The hit objects, sorted by start time.
    pub hit_objects: Vec<HitObject>,
    /// The break periods, sorted by start time.
    pub break_times: Vec<BreakTime>,
    /// The number of circles.
    pub nb_circles: u32,
    /// The number of sliders.
    pub nb_sliders: u32,
    /// The number of spinners.
    pub nb_spinners: u32,
    /// The lowest BPM over the uninherited timing points.
    pub bpm_min: Option<u32>,
    /// The highest BPM over the uninherited timing points.
    pub bpm_max: Option<u32>,
    /// The time of the last hit object, in seconds.
    pub total_time: i32,
    /// The time from the first hit object to the last one without breaks, in seconds.
    pub draining_time: i32,
    /// The highest combo reachable. `None` when the map has no timing point or no hit object.
    pub max_combo: Option<u32>,
    /// The file name of the background image.
    pub bg_filename: Option<String>,
    /// The tags of the map, split by whitespace. `None` when the map has no `Tags` key.
    pub tags: Option<Vec<String>>,
}

impl Beatmap {
    /// Finds the timing point which governs the offset: the last one, in sorted order, whose
    /// offset is not after it. Falls back to the first timing point if all of them come later.
    #[must_use]
    pub fn governing_timing_point(&self, offset: i32) -> Option<&TimingPoint> {
        timing::governing_timing_point(&self.timing_points, offset)
    }

    /// Gets the number of hit objects whose type is none of circle, slider and spinner.
    #[must_use]
    pub fn nb_unknown(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|object| matches!(object.kind, HitObjectKind::Unknown))
            .count()
    }

    /// Gets the lowest and the highest BPM, if the map has an uninherited timing point.
    #[must_use]
    pub fn bpm_range(&self) -> Option<(u32, u32)> {
        self.bpm_min.zip(self.bpm_max)
    }
}
