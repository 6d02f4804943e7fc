//! The key-value pairs of a beatmap, with typed accessors for the well-known keys.

use std::collections::BTreeMap;

use crate::mods::GameMode;

/// The key-value pairs from the sections `[General]`, `[Editor]`, `[Metadata]`, `[Difficulty]`,
/// `[Colours]` and any other unknown section.
///
/// Values are kept as written and converted only when read, so unknown keys and values in a
/// future format survive parsing. A key appearing twice keeps the later value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Metadata {
    values: BTreeMap<String, String>,
}

impl Metadata {
    /// Sets the value of the key, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Gets the raw value of the key. Keys are case sensitive.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterates over the pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Gets the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn float(&self, key: &str) -> Option<f64> {
        self.get(key)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// `SliderMultiplier`: the distance in hundreds of osu! pixels a slider travels in one
    /// beat. Defaults to `1.0` when missing, not a number, or not positive.
    #[must_use]
    pub fn slider_multiplier(&self) -> f64 {
        self.float("SliderMultiplier")
            .filter(|&v| v > 0.0)
            .unwrap_or(1.0)
    }

    /// `SliderTickRate`: the number of slider ticks per beat. Defaults to `1.0` when missing,
    /// not a number, or not positive.
    #[must_use]
    pub fn slider_tick_rate(&self) -> f64 {
        self.float("SliderTickRate")
            .filter(|&v| v > 0.0)
            .unwrap_or(1.0)
    }

    /// `HPDrainRate`.
    #[must_use]
    pub fn hp_drain_rate(&self) -> Option<f64> {
        self.float("HPDrainRate")
    }

    /// `CircleSize`.
    #[must_use]
    pub fn circle_size(&self) -> Option<f64> {
        self.float("CircleSize")
    }

    /// `OverallDifficulty`.
    #[must_use]
    pub fn overall_difficulty(&self) -> Option<f64> {
        self.float("OverallDifficulty")
    }

    /// `ApproachRate`. Old maps lack it and use the overall difficulty instead.
    #[must_use]
    pub fn approach_rate(&self) -> Option<f64> {
        self.float("ApproachRate")
            .or_else(|| self.overall_difficulty())
    }

    /// `Title`.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("Title")
    }

    /// `TitleUnicode`.
    #[must_use]
    pub fn title_unicode(&self) -> Option<&str> {
        self.get("TitleUnicode")
    }

    /// `Artist`.
    #[must_use]
    pub fn artist(&self) -> Option<&str> {
        self.get("Artist")
    }

    /// `ArtistUnicode`.
    #[must_use]
    pub fn artist_unicode(&self) -> Option<&str> {
        self.get("ArtistUnicode")
    }

    /// `Creator`: who mapped the beatmap.
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        self.get("Creator")
    }

    /// `Version`: the difficulty name.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get("Version")
    }

    /// `AudioFilename`.
    #[must_use]
    pub fn audio_filename(&self) -> Option<&str> {
        self.get("AudioFilename")
    }

    /// `Tags`, split by whitespace. Empty when the key is missing.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.get("Tags").unwrap_or_default().split_whitespace()
    }

    /// `Mode`: the game mode the beatmap is made for. Defaults to [`GameMode::Osu`] when
    /// missing, as old maps were made only for it.
    #[must_use]
    pub fn mode(&self) -> Option<GameMode> {
        match self.get("Mode") {
            Some(mode) => mode.trim().parse().ok().and_then(GameMode::from_index),
            None => Some(GameMode::Osu),
        }
    }

    /// `BeatmapID`.
    #[must_use]
    pub fn beatmap_id(&self) -> Option<u32> {
        self.get("BeatmapID")?.trim().parse().ok()
    }

    /// `BeatmapSetID`.
    #[must_use]
    pub fn beatmap_set_id(&self) -> Option<u32> {
        self.get("BeatmapSetID")?.trim().parse().ok()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
