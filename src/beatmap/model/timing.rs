//! Definitions of the timing point.

/// A point which defines the tempo, or scales the slider velocity, from its offset until the
/// next timing point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// The time where the point begins, in milliseconds. It may be negative.
    pub offset: i32,
    /// The duration of a beat in milliseconds.
    ///
    /// As written, a positive value defines a tempo and a negative value is a slider velocity
    /// multiplier in inverse percentage. After resolution, a point without its own BPM carries
    /// the beat length of the preceding point, see [`Self::inherited`]. It is `NaN` when the
    /// field is not a number.
    pub beat_length: f64,
    /// The slider velocity multiplier. `1.0` except for inherited points, where it is
    /// `|100 / beat_length|` from the value written.
    pub velocity: f64,
    /// The number of beats in a measure.
    pub timing_signature: i32,
    /// The default sample set of hit objects.
    pub sample_set_id: i32,
    /// The custom sample index of hit objects.
    pub custom_sample_index: i32,
    /// The volume of hit objects in percentage.
    pub sample_volume: i32,
    /// Whether the point is uninherited, which defines a new beat length.
    pub timing_change: bool,
    /// Whether kiai time is active.
    pub kiai_time_active: bool,
    /// The tempo in beats per minute, rounded. Set on points with a positive beat length, and
    /// carried over to the following points which have none.
    pub bpm: Option<u32>,
    /// Whether `beat_length` and `bpm` were carried over from the preceding point.
    pub inherited: bool,
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            offset: 0,
            beat_length: f64::NAN,
            velocity: 1.0,
            timing_signature: 0,
            sample_set_id: 0,
            custom_sample_index: 0,
            sample_volume: 0,
            timing_change: false,
            kiai_time_active: false,
            bpm: None,
            inherited: false,
        }
    }
}

/// Finds the timing point which governs the offset in points sorted by offset: the last one
/// whose offset is not after it. Falls back to the first point if all of them come later, and
/// returns `None` only if `points` is empty.
#[must_use]
pub fn governing_timing_point(points: &[TimingPoint], offset: i32) -> Option<&TimingPoint> {
    match points.partition_point(|point| point.offset <= offset) {
        0 => points.first(),
        n => points.get(n - 1),
    }
}
