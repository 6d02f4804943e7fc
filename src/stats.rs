//! Conversions of difficulty settings under the mods which change them.
//!
//! ```
//! use osu_rs::stats::{ar_to_ms, apply_bpm_rate, apply_hard_rock, ms_to_ar};
//!
//! let ar = apply_hard_rock(9.0, 1.4, 10.0);
//! assert_eq!(ar, 10.0);
//! // DoubleTime makes AR 9 play like AR 10.33
//! let ms = ar_to_ms(9.0) / 1.5;
//! assert!((ms_to_ar(ms) - 10.333).abs() < 1e-3);
//! assert_eq!(apply_bpm_rate(180.0, 1.5), 270.0);
//! ```

/// The cap of difficulty settings under Hard Rock.
pub const HARD_ROCK_CAP: f64 = 10.0;

/// The factor of difficulty settings under Easy.
pub const EASY_FACTOR: f64 = 0.5;

/// Multiplies a difficulty setting by the Hard Rock `factor`, usually `1.3` for the circle size
/// and `1.4` for the others, without exceeding `cap`.
#[must_use]
pub fn apply_hard_rock(value: f64, factor: f64, cap: f64) -> f64 {
    (value * factor).min(cap)
}

/// Multiplies a difficulty setting by the Easy `factor`, usually [`EASY_FACTOR`].
#[must_use]
pub fn apply_easy(value: f64, factor: f64) -> f64 {
    value * factor
}

/// Converts an approach rate to the time in milliseconds an object is shown before its hit.
#[must_use]
pub fn ar_to_ms(ar: f64) -> f64 {
    if ar < 5.0 {
        1800.0 - 120.0 * ar
    } else {
        1200.0 - 150.0 * (ar - 5.0)
    }
}

/// Converts the time in milliseconds an object is shown before its hit to an approach rate.
#[must_use]
pub fn ms_to_ar(ms: f64) -> f64 {
    if ms > 1200.0 {
        (1800.0 - ms) / 120.0
    } else {
        5.0 + (1200.0 - ms) / 150.0
    }
}

/// Scales a BPM by the clock rate, `1.5` for DoubleTime and `0.75` for HalfTime.
#[must_use]
pub fn apply_bpm_rate(bpm: f64, rate: f64) -> f64 {
    bpm * rate
}

/// Scales a length by the clock rate, `1.5` for DoubleTime and `0.75` for HalfTime.
#[must_use]
pub fn apply_length_rate(length: f64, rate: f64) -> f64 {
    length / rate
}
