//! Decoder of the hit sample field.

use super::number;
use crate::beatmap::model::hit_sound::{Additions, SampleSet};

impl Additions {
    /// Decodes the colon-separated field `normalSet:additionSet:index:volume:filename`.
    ///
    /// Only the parts present and not `0` are set. A sample set id other than `1`, `2` and `3`
    /// is left unset.
    ///
    /// ```
    /// use osu_rs::beatmap::model::hit_sound::{Additions, SampleSet};
    ///
    /// let additions = Additions::parse(Some("2:0:0:70:"));
    /// assert_eq!(additions.sample, Some(SampleSet::Soft));
    /// assert_eq!(additions.additional_sample, None);
    /// assert_eq!(additions.hitsound_volume, Some(70));
    /// assert_eq!(additions.hitsound, None);
    /// ```
    #[must_use]
    pub fn parse(field: Option<&str>) -> Self {
        let Some(field) = field.filter(|field| !field.is_empty()) else {
            return Self::default();
        };
        let mut parts = field.split(':');
        let mut next_set = || parts.next().filter(|part| !part.is_empty() && *part != "0");
        let sample = next_set().and_then(SampleSet::from_id);
        let additional_sample = next_set().and_then(SampleSet::from_id);
        let custom_sample_index = number::int(next_set());
        let hitsound_volume = number::int(next_set());
        let hitsound = parts
            .next()
            .filter(|part| !part.is_empty())
            .map(ToOwned::to_owned);
        Self {
            sample,
            additional_sample,
            custom_sample_index,
            hitsound_volume,
            hitsound,
        }
    }
}
