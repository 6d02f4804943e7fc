//! Prelude module for the beatmap parser.
//!
//! This module re-exports all public types of the beatmap module for convenient access.
//! You can use `use osu_rs::beatmap::prelude::*;` to import them at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_warnings};

pub use super::{
    BeatmapOutput, LoadError, ParseConfig, ParseWarning, ParseWarningWithLine,
    curve::{DEFAULT_CURVE_DETAIL, endpoint, endpoint_with_detail},
    derive::{Durations, durations, max_combo},
    lex::{LineKind, Section, classify},
    mixin::{SourceLineMixin, SourceLineMixinExt},
    model::{
        Beatmap,
        event::BreakTime,
        hit_object::{
            Circle, CurveType, Edge, HitObject, HitObjectKind, Position, Slider, Spinner,
        },
        hit_sound::{Additions, SampleSet, SoundTypes},
        metadata::Metadata,
        timing::{TimingPoint, governing_timing_point},
    },
    parse::{
        BeatmapParser,
        event::{Event, parse_event},
        hit_object::{parse_hit_object, slider_duration},
        timing::inherit_tempo,
    },
    parse_beatmap, parse_beatmap_file, parse_beatmap_file_with_config, parse_beatmap_reader,
    parse_beatmap_with_config,
};
