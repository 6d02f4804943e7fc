use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

use super::{assert_consistent, parse_clean};

#[test]
fn test_uninherited_timing_point() {
    let beatmap = parse_clean("[TimingPoints]\n0,500,4,2,1,50,1,0\n");
    let point = &beatmap.timing_points[0];
    assert_eq!(point.offset, 0);
    assert_eq!(point.beat_length, 500.0);
    assert_eq!(point.bpm, Some(120));
    assert!(point.timing_change);
    assert_eq!(point.velocity, 1.0);
    assert_eq!(point.sample_volume, 50);
    assert!(!point.inherited);
    assert_eq!(beatmap.bpm_range(), Some((120, 120)));
}

#[test]
fn test_single_circle() {
    let beatmap = parse_clean("[HitObjects]\n256,192,1000,1,0,0:0:0:0:\n");
    assert_consistent(&beatmap);
    let object = &beatmap.hit_objects[0];
    assert_eq!(object.object_name(), "circle");
    assert_eq!(object.position, Position::new(256, 192));
    assert_eq!(object.start_time, 1000);
    assert_eq!(object.sound_types.names(), vec!["normal"]);
    assert_eq!(object.additions(), Some(&Additions::default()));
    // no timing point to count the combo with
    assert_eq!(beatmap.max_combo, None);
    assert_eq!(beatmap.total_time, 1);
}

#[test]
fn test_background_event() {
    let beatmap = parse_clean("[Events]\n0,0,\"bg.jpg\"\n");
    assert_eq!(beatmap.bg_filename.as_deref(), Some("bg.jpg"));
}

#[test]
fn test_linear_slider_duration() {
    let source = "\
[Difficulty]
SliderMultiplier:1

[TimingPoints]
0,500,4,2,1,50,1,0

[HitObjects]
0,0,2000,2,0,L|100:0,0,100
";
    let beatmap = parse_clean(source);
    assert_consistent(&beatmap);
    let slider = beatmap.hit_objects[0].as_slider().unwrap();
    assert_eq!(slider.repeat_count, 0);
    assert_eq!(slider.edges.len(), 1);
    assert_eq!(slider.duration, Some(500));
    assert_eq!(slider.end_time, Some(2500));
    assert_eq!(slider.end_position, Position::new(100, 0));
    assert_eq!(beatmap.max_combo, Some(1));
}

#[test]
fn test_chained_inheritance() {
    let source = "\
[TimingPoints]
3000,-200,4,2,1,50,0,0
0,600,4,2,1,50,1,0
1000,-50,4,2,1,50,0,0
2000,-100,4,2,1,50,0,0
4000,300,4,2,1,50,1,0
";
    let beatmap = parse_clean(source);
    let points: Vec<_> = beatmap
        .timing_points
        .iter()
        .map(|p| (p.offset, p.beat_length, p.bpm, p.velocity, p.inherited))
        .collect();
    assert_eq!(
        points,
        vec![
            (0, 600.0, Some(100), 1.0, false),
            (1000, 600.0, Some(100), 2.0, true),
            (2000, 600.0, Some(100), 1.0, true),
            (3000, 600.0, Some(100), 0.5, true),
            (4000, 300.0, Some(200), 1.0, false),
        ]
    );
    assert_eq!(beatmap.bpm_range(), Some((100, 200)));
}

#[test]
fn test_inherited_point_first() {
    let beatmap = parse_clean("[TimingPoints]\n0,-50,4,2,1,50,0,0\n500,400,4,2,1,50,1,0\n");
    let first = &beatmap.timing_points[0];
    assert_eq!(first.bpm, None);
    assert!(!first.inherited);
    assert_eq!(beatmap.bpm_range(), Some((150, 150)));
}

#[test]
fn test_objects_are_sorted_stably() {
    let source = "\
[TimingPoints]
0,500,4,2,1,50,1,0

[HitObjects]
100,100,3000,1,0
200,200,1000,1,0
300,300,1000,8,0,1500
400,400,2000,1,0
";
    let beatmap = parse_clean(source);
    assert_consistent(&beatmap);
    let order: Vec<_> = beatmap
        .hit_objects
        .iter()
        .map(|object| object.position.x)
        .collect();
    assert_eq!(order, vec![200, 300, 400, 100]);
}

#[test]
fn test_breaks_shorten_draining_time() {
    let source = "\
[Events]
2,20000,30000
Break,5000,8000

[HitObjects]
0,0,1000,1,0
0,0,61000,1,0
";
    let beatmap = parse_clean(source);
    assert_consistent(&beatmap);
    let starts: Vec<_> = beatmap.break_times.iter().map(|b| b.start_time).collect();
    assert_eq!(starts, vec![5000, 20000]);
    assert_eq!(beatmap.total_time, 61);
    assert_eq!(beatmap.draining_time, 47);
}

#[test]
fn test_empty_hit_objects() {
    let beatmap = parse_clean("[TimingPoints]\n0,500,4,2,1,50,1,0\n\n[HitObjects]\n");
    assert_consistent(&beatmap);
    assert_eq!(beatmap.hit_objects, vec![]);
    assert_eq!(beatmap.total_time, 0);
    assert_eq!(beatmap.draining_time, 0);
    assert_eq!(beatmap.max_combo, None);
}

#[test]
fn test_empty_source() {
    let beatmap = parse_clean("");
    assert_eq!(beatmap, Beatmap::default());
}

#[test]
fn test_unknown_section_is_kept() {
    let beatmap = parse_clean("[Fancy]\nSomething: here\n\n[General]\nMode: 1\n");
    assert_eq!(beatmap.metadata.get("Something"), Some("here"));
    assert_eq!(beatmap.metadata.len(), 2);
}

#[test]
fn test_curve_detail() {
    let source = "\
[TimingPoints]
0,500,4,2,1,50,1,0

[HitObjects]
0,0,0,2,0,B|100:100|200:0,1,100
";
    let coarse = parse_beatmap_with_config(source, ParseConfig::default().curve_detail(1));
    let slider = coarse.beatmap.hit_objects[0].as_slider().unwrap();
    // a single step is the chord between the ends
    assert_eq!(slider.end_position, Position::new(100, 0));

    let fine = parse_beatmap(source);
    let slider = fine.beatmap.hit_objects[0].as_slider().unwrap();
    assert_ne!(slider.end_position, Position::new(100, 0));
}
