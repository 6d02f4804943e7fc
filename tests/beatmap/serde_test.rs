use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_output_round_trip() {
    let output = parse_beatmap(include_str!("files/mania.osu"));
    let json = serde_json::to_string(&output).unwrap();
    let back: BeatmapOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, output);
}

#[test]
fn test_metadata_is_a_plain_map() {
    let beatmap = parse_beatmap("[Metadata]\nTitle:Keys\nVersion:4K\n").beatmap;
    let json = serde_json::to_value(&beatmap.metadata).unwrap();
    assert_eq!(json, serde_json::json!({ "Title": "Keys", "Version": "4K" }));
}
