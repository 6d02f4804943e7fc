//! Checks that the prelude is enough to drive the parser by hand.

use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_manual_pipeline() {
    let metadata: Metadata = [("SliderMultiplier", "2")].into_iter().collect();
    let mut points = vec![
        TimingPoint::parse("0,400,4,2,1,50,1,0").unwrap(),
        TimingPoint::parse("1000,-50,4,2,1,50,0,0").unwrap(),
    ];
    inherit_tempo(&mut points);
    assert_eq!(points[1].beat_length, 400.0);

    let timing = governing_timing_point(&points, 1500).unwrap();
    assert_eq!(timing.offset, 1000);
    // 400 pixels at 400 pixels per beat
    assert_eq!(slider_duration(timing, metadata.slider_multiplier(), 400, 1), Some(400));

    let object = parse_hit_object(
        "0,0,1500,2,0,L|400:0,1,400",
        &points,
        &metadata,
        ParseConfig::default(),
    )
    .unwrap();
    let slider = object.as_slider().unwrap();
    assert_eq!(slider.end_time, Some(1900));
    assert_eq!(
        endpoint(CurveType::Linear, 400.0, &slider.points),
        Some(slider.end_position)
    );
    assert_eq!(max_combo(&[object], &points, &metadata), Some(2));

    assert_eq!(
        classify("[HitObjects]", None),
        LineKind::SectionHeader(Section::HitObjects)
    );
    assert_eq!(
        parse_event("2,100,200"),
        Ok(Some(Event::Break(BreakTime {
            start_time: 100,
            end_time: 200
        })))
    );
}
