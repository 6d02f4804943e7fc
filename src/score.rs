//! Accuracy and grade of a play, from its hit counts.
//!
//! ```
//! use osu_rs::{
//!     mods::{GameMode, Mods},
//!     score::{Grade, HitCounts, accuracy, grade},
//! };
//!
//! let counts = HitCounts { n300: 450, n100: 20, n50: 2, ..Default::default() };
//! let accuracy = accuracy(GameMode::Osu, &counts).unwrap();
//! assert_eq!(format!("{accuracy:.2}"), "96.82");
//! assert_eq!(grade(GameMode::Osu, &counts, accuracy, Mods::HIDDEN), Grade::SH);
//! ```

use std::fmt;

use thiserror::Error;

use crate::mods::{GameMode, Mods};

/// The numbers of each judgement in a play.
///
/// `katu` and `geki` are the extra judgements of taiko, catch and mania, `0` elsewhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitCounts {
    /// Number of 300s, or of great hits.
    pub n300: u32,
    /// Number of 100s, or of good hits.
    pub n100: u32,
    /// Number of 50s, or of droplets caught in catch.
    pub n50: u32,
    /// Number of misses.
    pub misses: u32,
    /// Number of katus: 200s in mania, droplets missed in catch.
    pub katu: u32,
    /// Number of gekis: rainbow 300s in mania.
    pub geki: u32,
}

/// An error occurred when computing the accuracy.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ScoreError {
    /// The game mode index is not `0` to `3`.
    #[error("invalid game mode: {0}")]
    InvalidMode(u8),
    /// None of the counts used by the mode is set.
    #[error("no hit to compute the accuracy from")]
    NoHits,
}

/// Computes the accuracy in percent.
///
/// # Errors
///
/// Returns [`ScoreError::NoHits`] when every count weighted by the mode is `0`.
pub fn accuracy(mode: GameMode, counts: &HitCounts) -> Result<f64, ScoreError> {
    let [h300, h100, h50, h0, katu, geki] = [
        counts.n300,
        counts.n100,
        counts.n50,
        counts.misses,
        counts.katu,
        counts.geki,
    ]
    .map(f64::from);
    let (points, total) = match mode {
        GameMode::Osu => (
            6.0 * h300 + 2.0 * h100 + h50,
            6.0 * (h300 + h100 + h50 + h0),
        ),
        GameMode::Taiko => (2.0 * h300 + h100, 2.0 * (h300 + h100 + h0)),
        GameMode::Catch => (h300 + h100 + h50, h300 + h100 + h50 + katu + h0),
        GameMode::Mania => (
            6.0 * geki + 6.0 * h300 + 4.0 * katu + 2.0 * h100 + h50,
            6.0 * (h300 + h100 + h50 + h0 + geki + katu),
        ),
    };
    if total == 0.0 {
        return Err(ScoreError::NoHits);
    }
    Ok(100.0 * points / total)
}

/// Computes the accuracy with the mode given as its index.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidMode`] for an index above `3`, and the errors of [`accuracy`].
pub fn accuracy_from_index(mode: u8, counts: &HitCounts) -> Result<f64, ScoreError> {
    let mode = GameMode::from_index(mode).ok_or(ScoreError::InvalidMode(mode))?;
    accuracy(mode, counts)
}

/// A grade of a play. The `H` variants are the silver ones, given with Hidden or Flashlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    /// Silver SS.
    SSH,
    /// SS, a perfect accuracy.
    SS,
    /// Silver S.
    SH,
    /// S
    S,
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
}

impl Grade {
    /// Gets the label of the grade.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SSH => "SSH",
            Self::SS => "SS",
            Self::SH => "SH",
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Determines the grade from the accuracy in percent, as computed by [`accuracy`].
///
/// osu!catch is graded like osu!taiko, where the silver grades are always given.
#[must_use]
pub fn grade(mode: GameMode, counts: &HitCounts, accuracy: f64, mods: Mods) -> Grade {
    let silver = mods.intersects(Mods::HIDDEN | Mods::FLASHLIGHT);
    let pick = |silver_grade, normal| if silver { silver_grade } else { normal };
    match mode {
        GameMode::Osu => {
            let hits: f64 = [counts.n300, counts.n100, counts.n50, counts.misses]
                .map(f64::from)
                .iter()
                .sum();
            let fifties = f64::from(counts.n50) / hits * 100.0;
            let full_combo = counts.misses == 0;
            if accuracy == 100.0 {
                pick(Grade::SSH, Grade::SS)
            } else if accuracy > 90.0 && fifties <= 1.0 && full_combo {
                pick(Grade::SH, Grade::S)
            } else if (accuracy > 80.0 && full_combo) || accuracy > 90.0 {
                Grade::A
            } else if (accuracy > 70.0 && full_combo) || accuracy > 80.0 {
                Grade::B
            } else if accuracy > 60.0 {
                Grade::C
            } else {
                Grade::D
            }
        }
        GameMode::Taiko | GameMode::Catch => {
            if accuracy == 100.0 {
                Grade::SSH
            } else if accuracy > 98.0 && accuracy <= 99.99 {
                Grade::SH
            } else if accuracy > 94.01 && accuracy <= 98.0 {
                Grade::A
            } else if accuracy > 90.01 && accuracy <= 94.0 {
                Grade::B
            } else if accuracy > 85.01 && accuracy <= 90.0 {
                Grade::C
            } else {
                Grade::D
            }
        }
        GameMode::Mania => {
            if accuracy == 100.0 {
                pick(Grade::SSH, Grade::SS)
            } else if accuracy > 95.0 {
                pick(Grade::SH, Grade::S)
            } else if accuracy > 90.0 {
                Grade::A
            } else if accuracy > 80.0 {
                Grade::B
            } else if accuracy > 70.0 {
                Grade::C
            } else {
                Grade::D
            }
        }
    }
}
