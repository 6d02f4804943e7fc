use itertools::Itertools;
use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

const STANDARD: &str = include_str!("files/standard.osu");
const OLD_FORMAT: &str = include_str!("files/old_format.osu");

fn feed_in_chunks(source: &str, chars_per_chunk: usize) -> BeatmapOutput {
    let mut parser = BeatmapParser::new();
    for chunk in &source.chars().chunks(chars_per_chunk) {
        parser.feed(&chunk.collect::<String>());
    }
    parser.finalize()
}

#[test]
fn test_chunked_feed() {
    for source in [STANDARD, OLD_FORMAT] {
        let whole = parse_beatmap(source);
        for chars_per_chunk in [1, 2, 7, 64, 4096] {
            assert_eq!(feed_in_chunks(source, chars_per_chunk), whole);
        }
    }
}

#[test]
fn test_line_by_line() {
    let mut parser = BeatmapParser::new();
    for line in STANDARD.lines() {
        parser.parse_line(line);
    }
    assert_eq!(parser.section(), Some(&Section::HitObjects));
    assert_eq!(parser.finalize(), parse_beatmap(STANDARD));
}

#[test]
fn test_last_line_without_break() {
    let mut parser = BeatmapParser::new();
    parser.feed("[TimingPoints]\r\n0,500,4,2,1,50,1,0\r\n[HitObjects]\r\n");
    parser.feed("256,192,1000,1,0");
    let BeatmapOutput { beatmap, warnings } = parser.finalize();
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.nb_circles, 1);
    assert_eq!(beatmap.max_combo, Some(1));
}
