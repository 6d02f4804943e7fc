use osu_rs::{beatmap::prelude::*, mods::GameMode};
use pretty_assertions::assert_eq;

use super::{assert_consistent, parse_clean};

fn slider_at(beatmap: &Beatmap, start_time: i32) -> &Slider {
    beatmap
        .hit_objects
        .iter()
        .find(|object| object.start_time == start_time)
        .and_then(HitObject::as_slider)
        .unwrap_or_else(|| panic!("no slider at {start_time}"))
}

#[test]
fn test_standard() {
    let beatmap = parse_clean(include_str!("files/standard.osu"));
    assert_consistent(&beatmap);

    assert_eq!(beatmap.file_format.as_deref(), Some("v14"));
    let metadata = &beatmap.metadata;
    assert_eq!(metadata.title(), Some("Snow Drive"));
    assert_eq!(metadata.title_unicode(), Some("スノウドライブ"));
    assert_eq!(metadata.creator(), Some("mapper"));
    assert_eq!(metadata.version(), Some("Insane"));
    assert_eq!(metadata.audio_filename(), Some("audio.mp3"));
    assert_eq!(metadata.get("Source"), None);
    assert_eq!(metadata.get("Combo2"), Some("0,202,0"));
    assert_eq!(metadata.get("TimelineZoom"), Some("1.5"));
    assert_eq!(metadata.mode(), Some(GameMode::Osu));
    assert_eq!(metadata.beatmap_id(), Some(1_234_567));
    assert_eq!(metadata.beatmap_set_id(), Some(54321));
    assert_eq!(metadata.approach_rate(), Some(9.0));
    assert_eq!(metadata.slider_multiplier(), 1.4);
    assert_eq!(
        beatmap.tags,
        Some(vec![
            "winter".to_string(),
            "electronic".to_string(),
            "test-map".to_string()
        ])
    );

    assert_eq!(beatmap.bg_filename.as_deref(), Some("snow bg.jpg"));
    assert_eq!(
        beatmap.break_times,
        vec![BreakTime {
            start_time: 12000,
            end_time: 18000
        }]
    );

    assert_eq!(beatmap.bpm_range(), Some((120, 150)));
    let offsets: Vec<_> = beatmap.timing_points.iter().map(|p| p.offset).collect();
    assert_eq!(offsets, vec![1000, 5000, 9000, 20000, 24000]);
    let fast = &beatmap.timing_points[1];
    assert_eq!(fast.velocity, 2.0);
    assert_eq!(fast.beat_length, 500.0);
    assert_eq!(fast.bpm, Some(120));
    assert!(fast.inherited);
    assert!(fast.kiai_time_active);
    assert!(!fast.timing_change);
    assert_eq!(beatmap.timing_points[2].velocity, 1.0);
    let slow = &beatmap.timing_points[4];
    assert_eq!(slow.velocity, 0.5);
    assert_eq!(slow.beat_length, 400.0);
    assert_eq!(slow.bpm, Some(150));
    assert!(!beatmap.timing_points[3].inherited);

    assert_eq!(beatmap.nb_circles, 4);
    assert_eq!(beatmap.nb_sliders, 5);
    assert_eq!(beatmap.nb_spinners, 1);
    assert_eq!(beatmap.nb_unknown(), 0);

    let ends: Vec<_> = [1500, 3000, 5500, 20000, 24500]
        .into_iter()
        .map(|start_time| {
            let slider = slider_at(&beatmap, start_time);
            (slider.duration, slider.end_time, slider.end_position)
        })
        .collect();
    assert_eq!(
        ends,
        vec![
            (Some(500), Some(2000), Position::new(240, 100)),
            (Some(1500), Some(4500), Position::new(443, 115)),
            (Some(179), Some(5679), Position::new(271, 155)),
            (Some(1715), Some(21715), Position::new(64, 264)),
            (Some(1715), Some(26215), Position::new(428, 128)),
        ]
    );

    let bezier = slider_at(&beatmap, 3000);
    assert_eq!(bezier.curve_type, CurveType::Bezier);
    assert_eq!(bezier.points.len(), 5);
    assert_eq!(bezier.points[0], Position::new(300, 200));
    let edge_sounds: Vec<_> = bezier
        .edges
        .iter()
        .map(|edge| edge.sound_types.names())
        .collect();
    assert_eq!(edge_sounds, vec![vec!["finish"], vec!["normal"], vec!["clap"]]);

    let spinner = beatmap
        .hit_objects
        .iter()
        .find_map(HitObject::as_spinner)
        .unwrap();
    assert_eq!(spinner.end_time, 11000);

    assert_eq!(beatmap.max_combo, Some(27));
    assert_eq!(beatmap.total_time, 27);
    assert_eq!(beatmap.draining_time, 20);
}

#[test]
fn test_old_format() {
    let beatmap = parse_clean(include_str!("files/old_format.osu"));
    assert_consistent(&beatmap);

    assert_eq!(beatmap.file_format.as_deref(), Some("v5"));
    assert_eq!(beatmap.metadata.title(), Some("Old Song"));
    assert_eq!(beatmap.metadata.approach_rate(), Some(5.0));
    assert_eq!(beatmap.tags, None);
    assert_eq!(beatmap.bg_filename.as_deref(), Some("old.jpg"));

    let offsets: Vec<_> = beatmap.timing_points.iter().map(|p| p.offset).collect();
    assert_eq!(offsets, vec![500, 2000]);
    assert_eq!(beatmap.bpm_range(), Some((100, 200)));

    let slider = slider_at(&beatmap, 2600);
    assert_eq!(slider.curve_type, CurveType::Catmull);
    assert_eq!(slider.duration, Some(900));
    assert_eq!(slider.end_time, Some(3500));
    assert_eq!(slider.end_position, Position::new(250, 100));
    assert_eq!(slider.edges.len(), 2);

    assert_eq!(
        (beatmap.nb_circles, beatmap.nb_sliders, beatmap.nb_spinners),
        (1, 1, 1)
    );
    assert_eq!(beatmap.max_combo, Some(5));
    assert_eq!(beatmap.total_time, 4);
    assert_eq!(beatmap.draining_time, 3);
}

#[test]
fn test_mania() {
    let beatmap = parse_clean(include_str!("files/mania.osu"));
    assert_consistent(&beatmap);

    assert_eq!(beatmap.metadata.mode(), Some(GameMode::Mania));
    assert_eq!(beatmap.bpm_range(), Some((240, 240)));
    assert_eq!(beatmap.nb_circles, 2);
    assert_eq!(beatmap.nb_unknown(), 2);
    let names: Vec<_> = beatmap
        .hit_objects
        .iter()
        .map(HitObject::object_name)
        .collect();
    assert_eq!(names, vec!["circle", "unknown", "circle", "unknown"]);
    // hold notes give no combo
    assert_eq!(beatmap.max_combo, Some(2));
    assert_eq!(beatmap.total_time, 2);
    assert_eq!(beatmap.draining_time, 1);
}

#[test]
fn test_broken() {
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(include_str!("files/broken.osu"));
    assert_consistent(&beatmap);

    assert_eq!(
        warnings,
        vec![
            ParseWarning::UnrecognizedLine("this line is broken".into()).into_wrapper_line(5),
            ParseWarning::MalformedBreak("2,abc,5000".into()).into_wrapper_line(8),
            ParseWarning::MalformedTimingPoint("x,500,4,2,1,60,1,0".into()).into_wrapper_line(11),
            ParseWarning::MalformedHitObject("1,2".into()).into_wrapper_line(15),
        ]
    );
    assert_eq!(beatmap.metadata.title(), Some("Broken"));
    assert_eq!(beatmap.break_times, vec![]);
    assert_eq!(beatmap.timing_points.len(), 1);
    assert_eq!(beatmap.nb_circles, 1);
    assert_eq!(beatmap.max_combo, Some(1));
}

#[test]
fn test_file_and_reader() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/beatmap/files/old_format.osu");
    let from_file = parse_beatmap_file(path).unwrap();
    let from_str = parse_beatmap(include_str!("files/old_format.osu"));
    assert_eq!(from_file, from_str);

    let bytes: &[u8] = include_bytes!("files/standard.osu");
    let from_reader = parse_beatmap_reader(bytes).unwrap();
    assert_eq!(from_reader, parse_beatmap(include_str!("files/standard.osu")));
}

#[test]
fn test_missing_file() {
    let err = parse_beatmap_file("tests/beatmap/files/missing.osu").unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }), "{err}");
}
