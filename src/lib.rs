//! The osu! beatmap format parser.
//!
//! The core of this crate is [`beatmap`], which turns the text of a `.osu` file into a
//! [`Beatmap`](beatmap::model::Beatmap) with its timing points, hit objects and break times
//! resolved, and the derived statistics (maximum combo, draining time, BPM range, slider end
//! positions) computed.
//!
//! ```
//! use osu_rs::beatmap::{BeatmapOutput, parse_beatmap};
//!
//! let source = "osu file format v14\n\n[Difficulty]\nSliderMultiplier:1.4\n\n[TimingPoints]\n0,500,4,2,1,50,1,0\n\n[HitObjects]\n256,192,1000,1,0,0:0:0:0:\n";
//! let BeatmapOutput { beatmap, warnings } = parse_beatmap(source);
//! assert!(warnings.is_empty());
//! assert_eq!(beatmap.file_format.as_deref(), Some("v14"));
//! assert_eq!(beatmap.max_combo, Some(1));
//! assert_eq!(beatmap.bpm_max, Some(120));
//! ```
//!
//! The other modules are small helpers around the data a client handles next to beatmaps:
//!
//! - [`score`] computes the accuracy and the grade of a play from its hit counts.
//! - [`mods`] converts mod bitmasks and game mode names.
//! - [`stats`] converts difficulty settings under rate and difficulty mods.
//! - [`time`] converts timestamps stored as .NET ticks.
//! - [`bancho`] extracts multiplayer events from the chat messages of `BanchoBot`.
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for the model types.
//! - `diagnostics` (default): renders parse warnings with [`ariadne`](https://docs.rs/ariadne).
//! - `bancho` (default): the [`bancho`] module.
//! - `time` (default): the [`time`] module.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "bancho")]
#[cfg_attr(docsrs, doc(cfg(feature = "bancho")))]
pub mod bancho;
pub mod beatmap;
#[cfg(feature = "diagnostics")]
#[cfg_attr(docsrs, doc(cfg(feature = "diagnostics")))]
pub mod diagnostics;
pub mod mods;
pub mod score;
pub mod stats;
#[cfg(feature = "time")]
#[cfg_attr(docsrs, doc(cfg(feature = "time")))]
pub mod time;
