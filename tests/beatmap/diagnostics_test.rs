use ariadne::Source;
use osu_rs::{
    beatmap::{BeatmapOutput, parse_beatmap},
    diagnostics::{SimpleSource, ToAriadne, collect_reports},
};

const BROKEN: &str = include_str!("files/broken.osu");

#[test]
fn test_simple_source_line_spans() {
    let source = SimpleSource::new("broken.osu", BROKEN);
    assert_eq!(source.name(), "broken.osu");
    assert_eq!(&BROKEN[source.line_span(5)], "this line is broken");
    assert_eq!(&BROKEN[source.line_span(15)], "1,2");
}

#[test]
fn test_reports_for_each_warning() {
    let BeatmapOutput { warnings, .. } = parse_beatmap(BROKEN);
    let reports = collect_reports("broken.osu", BROKEN, &warnings);
    assert_eq!(reports.len(), warnings.len());

    let titles = [
        "unrecognized line",
        "malformed break",
        "malformed timing point",
        "malformed hit object",
    ];
    for (report, title) in reports.iter().zip(titles) {
        let mut rendered = Vec::new();
        report
            .write(("broken.osu".to_string(), Source::from(BROKEN)), &mut rendered)
            .unwrap();
        let rendered = String::from_utf8(rendered).unwrap();
        assert!(rendered.contains(title), "{rendered}");
        assert!(rendered.contains("broken.osu"), "{rendered}");
    }
}

#[test]
fn test_report_points_at_line() {
    let BeatmapOutput { warnings, .. } = parse_beatmap(BROKEN);
    let source = SimpleSource::new("broken.osu", BROKEN);
    let report = warnings[3].to_report(&source);
    let mut rendered = Vec::new();
    report
        .write(("broken.osu".to_string(), Source::from(BROKEN)), &mut rendered)
        .unwrap();
    let rendered = String::from_utf8(rendered).unwrap();
    // the source line itself is colored character by character
    assert!(rendered.contains("broken.osu:15:"), "{rendered}");
}
