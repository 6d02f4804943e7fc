//! Resolver of the `[Events]` section. Only the background image and the break periods are
//! kept, other events such as storyboard sprites are skipped.

use super::{BufferedLine, number};
use crate::beatmap::{
    ParseWarning, ParseWarningWithLine,
    mixin::SourceLineMixinExt,
    model::{Beatmap, event::BreakTime},
};

/// An event line kept in the beatmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event<'a> {
    /// `0,0,"filename",...`: the background image, with the quotes removed.
    Background(&'a str),
    /// `2,start,end` or `Break,start,end`.
    Break(BreakTime),
}

/// Decodes an event line. `Ok(None)` for an event which is not kept, and an error for a break
/// whose times are not unsigned integers.
///
/// ```
/// use osu_rs::beatmap::parse::event::{Event, parse_event};
///
/// assert_eq!(parse_event(r#"0,0,"bg.jpg",0,0"#), Ok(Some(Event::Background("bg.jpg"))));
/// assert_eq!(parse_event("//Storyboard Layer 0 (Background)"), Ok(None));
/// ```
pub fn parse_event(line: &str) -> Result<Option<Event<'_>>, ParseWarning> {
    let mut fields = line.split(',');
    match (fields.next(), fields.next()) {
        (Some("0"), Some("0")) => Ok(fields
            .next()
            .map(|name| unquote(name.trim()))
            .filter(|name| !name.is_empty())
            .map(Event::Background)),
        (Some("2" | "Break"), start) => {
            let malformed = || ParseWarning::MalformedBreak(line.to_owned());
            let start_time = number::digits(start).ok_or_else(malformed)?;
            let end_time = number::digits(fields.next()).ok_or_else(malformed)?;
            Ok(Some(Event::Break(BreakTime {
                start_time,
                end_time,
            })))
        }
        _ => Ok(None),
    }
}

fn unquote(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|name| name.strip_suffix('"'))
        .unwrap_or(name)
}

/// Decodes the buffered lines, setting the background and the breaks sorted by start time.
pub(super) fn resolve(
    beatmap: &mut Beatmap,
    lines: Vec<BufferedLine>,
    warnings: &mut Vec<ParseWarningWithLine>,
) {
    let mut break_times = vec![];
    for line in lines {
        match parse_event(line.content()) {
            Ok(Some(Event::Background(name))) => beatmap.bg_filename = Some(name.to_owned()),
            Ok(Some(Event::Break(break_time))) => break_times.push(break_time),
            Ok(None) => {}
            Err(warning) => {
                log::warn!("line {}: {warning}", line.line());
                warnings.push(warning.into_wrapper_line(line.line()));
            }
        }
    }
    break_times.sort_by_key(|break_time| break_time.start_time);
    beatmap.break_times = break_times;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background() {
        assert_eq!(
            parse_event(r#"0,0,"my bg.png",0,0"#),
            Ok(Some(Event::Background("my bg.png")))
        );
        assert_eq!(parse_event("0,0,bg.jpg"), Ok(Some(Event::Background("bg.jpg"))));
        assert_eq!(parse_event("0,0,"), Ok(None));
        assert_eq!(parse_event(r#"0,0,"""#), Ok(None));
        assert_eq!(parse_event(r#"1,0,"video.mp4""#), Ok(None));
        assert_eq!(parse_event(r#"Video,0,"video.mp4""#), Ok(None));
    }

    #[test]
    fn breaks() {
        let expected = Ok(Some(Event::Break(BreakTime {
            start_time: 12000,
            end_time: 18500,
        })));
        assert_eq!(parse_event("2,12000,18500"), expected);
        assert_eq!(parse_event("Break,12000,18500"), expected);
        assert_eq!(
            parse_event("2,-5,100"),
            Err(ParseWarning::MalformedBreak("2,-5,100".into()))
        );
        assert!(parse_event("2,100").is_err());
        assert!(parse_event("2,100.5,200").is_err());
    }

    #[test]
    fn resolve_keeps_last_background_and_sorts_breaks() {
        let mut beatmap = Beatmap::default();
        let mut warnings = vec![];
        let lines = [
            r#"0,0,"first.jpg",0,0"#,
            "2,50000,60000",
            "Sprite,Foreground,Centre,\"sb.png\",320,240",
            "2,10000,20000",
            "2,x,20000",
            r#"0,0,"second.jpg",0,0"#,
        ]
        .iter()
        .enumerate()
        .map(|(i, line)| line.to_string().into_wrapper_line(i + 1))
        .collect();
        resolve(&mut beatmap, lines, &mut warnings);

        assert_eq!(beatmap.bg_filename.as_deref(), Some("second.jpg"));
        assert_eq!(
            beatmap.break_times,
            vec![
                BreakTime {
                    start_time: 10000,
                    end_time: 20000
                },
                BreakTime {
                    start_time: 50000,
                    end_time: 60000
                },
            ]
        );
        assert_eq!(
            warnings,
            vec![ParseWarning::MalformedBreak("2,x,20000".into()).into_wrapper_line(5)]
        );
    }
}
