//! Definitions of hit sounds: which sounds are played on a hit, and their sample overrides.

/// A set of samples to play hit sounds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// `1`
    Normal,
    /// `2`
    Soft,
    /// `3`
    Drum,
}

impl SampleSet {
    /// Converts the id written in a hit sample field. `0`, meaning "inherit", and unknown ids
    /// are `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "1" => Some(Self::Normal),
            "2" => Some(Self::Soft),
            "3" => Some(Self::Drum),
            _ => None,
        }
    }

    /// Gets the name of the sample set in lowercase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Soft => "soft",
            Self::Drum => "drum",
        }
    }
}

impl std::fmt::Display for SampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The sounds added on a hit, decoded from the hit sound bitmask.
///
/// Bit 0 stands for the normal sound which is always played, so only whistle (bit 1), finish
/// (bit 2) and clap (bit 3) are kept. A set with none of them is "normal".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundTypes {
    /// Bit 1.
    pub whistle: bool,
    /// Bit 2.
    pub finish: bool,
    /// Bit 3.
    pub clap: bool,
}

impl SoundTypes {
    /// Decodes the hit sound bitmask.
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        Self {
            whistle: (bits & 2) != 0,
            finish: (bits & 4) != 0,
            clap: (bits & 8) != 0,
        }
    }

    /// Returns `true` if no additional sound is set.
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        !(self.whistle || self.finish || self.clap)
    }

    /// Gets the names of the sounds set, or `["normal"]` if none is set.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        if self.is_normal() {
            return vec!["normal"];
        }
        [
            (self.whistle, "whistle"),
            (self.finish, "finish"),
            (self.clap, "clap"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Sample overrides of a hit, from the colon-separated hit sample field
/// `normalSet:additionSet:index:volume:filename`.
///
/// A field is `None` when it is missing or `0`, which means the value is inherited from the
/// timing point. It must not be read as zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Additions {
    /// The sample set of the normal sound.
    pub sample: Option<SampleSet>,
    /// The sample set of the whistle, finish and clap sounds.
    pub additional_sample: Option<SampleSet>,
    /// The index of custom samples.
    pub custom_sample_index: Option<i32>,
    /// The volume in percentage.
    pub hitsound_volume: Option<i32>,
    /// The file name of a custom sample, played instead of the others.
    pub hitsound: Option<String>,
}

impl Additions {
    /// Returns `true` if nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
