//! Definitions of the hit object.

use super::hit_sound::{Additions, SoundTypes};

/// A point in osu! pixels. The playfield spans 512 by 384.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

/// The kind of the curve a slider follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// `C`: a centripetal Catmull-Rom spline, found in old maps.
    Catmull,
    /// `B`: bezier curves, split into segments at repeated control points.
    Bezier,
    /// `L`: straight lines through the control points.
    Linear,
    /// `P`: a circular arc through three control points.
    PassThrough,
    /// Any other code.
    Unknown,
}

impl CurveType {
    /// Converts the one-letter code written before the control points.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "C" => Self::Catmull,
            "B" => Self::Bezier,
            "L" => Self::Linear,
            "P" => Self::PassThrough,
            _ => Self::Unknown,
        }
    }

    /// Gets the name of the curve type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Catmull => "catmull",
            Self::Bezier => "bezier",
            Self::Linear => "linear",
            Self::PassThrough => "pass-through",
            Self::Unknown => "unknown",
        }
    }
}

/// The start, a reverse arrow or the end of a slider, with its own hit sounds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// The sounds played on the edge.
    pub sound_types: SoundTypes,
    /// The sample overrides on the edge.
    pub additions: Additions,
}

/// A circle, hit once.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The sample overrides.
    pub additions: Additions,
}

/// A spinner, spun until its end time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spinner {
    /// The time where the spinner ends, in milliseconds.
    pub end_time: i32,
    /// The sample overrides.
    pub additions: Additions,
}

/// A slider, followed along its curve from the start to the end and back for each repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// The number of times the slider is passed through, as written in the file. `1` is a
    /// slider without reverse arrows.
    pub repeat_count: u32,
    /// The length of the slider in osu! pixels.
    pub pixel_length: i32,
    /// The kind of the curve.
    pub curve_type: CurveType,
    /// The control points. The first one is the position of the hit object.
    pub points: Vec<Position>,
    /// The edges, `repeat_count + 1` of them.
    pub edges: Vec<Edge>,
    /// The sample overrides of the slider body.
    pub additions: Additions,
    /// The duration in milliseconds, from the timing point governing the start. `None` when
    /// the map has no timing point, or the governing one has no valid beat length.
    pub duration: Option<i32>,
    /// The time where the slider ends, `start_time + duration`.
    pub end_time: Option<i32>,
    /// The position where the curve ends, or the last control point if the curve cannot be
    /// computed.
    pub end_position: Position,
}

/// The variant of a hit object, decoded from its type bitmask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// Bit 0.
    Circle(Circle),
    /// Bit 1.
    Slider(Slider),
    /// Bit 3.
    Spinner(Spinner),
    /// None of the bits above, such as a hold note of osu!mania.
    Unknown,
}

/// An object which a player interacts with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// The time where the object should be hit, in milliseconds.
    pub start_time: i32,
    /// The position of the object.
    pub position: Position,
    /// Whether the object starts a new combo. Bit 2 of the type.
    pub new_combo: bool,
    /// The sounds played on the hit.
    pub sound_types: SoundTypes,
    /// The variant with its own fields.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Gets the name of the variant: `circle`, `slider`, `spinner` or `unknown`.
    #[must_use]
    pub const fn object_name(&self) -> &'static str {
        match self.kind {
            HitObjectKind::Circle(_) => "circle",
            HitObjectKind::Slider(_) => "slider",
            HitObjectKind::Spinner(_) => "spinner",
            HitObjectKind::Unknown => "unknown",
        }
    }

    /// Gets the time where the object ends. It is the start time for circles and unknown
    /// objects.
    #[must_use]
    pub fn end_time(&self) -> Option<i32> {
        match &self.kind {
            HitObjectKind::Slider(slider) => slider.end_time,
            HitObjectKind::Spinner(spinner) => Some(spinner.end_time),
            HitObjectKind::Circle(_) | HitObjectKind::Unknown => Some(self.start_time),
        }
    }

    /// Gets the sample overrides of the object, if it has ones.
    #[must_use]
    pub const fn additions(&self) -> Option<&Additions> {
        match &self.kind {
            HitObjectKind::Circle(Circle { additions })
            | HitObjectKind::Spinner(Spinner { additions, .. })
            | HitObjectKind::Slider(Slider { additions, .. }) => Some(additions),
            HitObjectKind::Unknown => None,
        }
    }

    /// Gets the slider fields if the object is a slider.
    #[must_use]
    pub const fn as_slider(&self) -> Option<&Slider> {
        match &self.kind {
            HitObjectKind::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// Gets the spinner fields if the object is a spinner.
    #[must_use]
    pub const fn as_spinner(&self) -> Option<&Spinner> {
        match &self.kind {
            HitObjectKind::Spinner(spinner) => Some(spinner),
            _ => None,
        }
    }
}
