//! Multiplayer events announced by `BanchoBot` in the chat of a lobby.
//!
//! ```
//! use osu_rs::bancho::{BanchoEvent, parse_bancho_message};
//!
//! assert_eq!(
//!     parse_bancho_message("BanchoBot", "peppy joined in slot 3."),
//!     Some(BanchoEvent::Joined { player: "peppy".to_string(), slot: 3 }),
//! );
//! assert_eq!(parse_bancho_message("peppy", "peppy joined in slot 3."), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// The name of the bot which announces the events.
pub const BANCHO_BOT: &str = "BanchoBot";

/// An event of a multiplayer lobby.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BanchoEvent {
    /// `<player> joined in slot <slot>.`
    Joined {
        /// The name of the player.
        player: String,
        /// The slot taken, from 1.
        slot: u32,
    },
    /// `<player> moved to slot <slot>`
    Moved {
        /// The name of the player.
        player: String,
        /// The new slot, from 1.
        slot: u32,
    },
    /// `<player> left the game.`
    Left {
        /// The name of the player.
        player: String,
    },
    /// `Changed beatmap to <url> <title>` or `Beatmap changed to: <title> (<url>)`
    BeatmapChanged {
        /// The id at the end of the beatmap URL, if any.
        beatmap_id: Option<u32>,
    },
}

struct Patterns {
    joined: Regex,
    moved: Regex,
    left: Regex,
    beatmap_changed: Regex,
}

impl Patterns {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            joined: Regex::new(r"(?i)(.+)\s+joined\s+in\s+slot\s+(\d+)\.")?,
            moved: Regex::new(r"(?i)(.+)\s+moved\s+to\s+slot\s+(\d+)")?,
            left: Regex::new(r"(?i)(.+)\s+left the game.$")?,
            beatmap_changed: Regex::new(r"(?i)(?:Changed beatmap to|Beatmap changed to:)")?,
        })
    }
}

static PATTERNS: LazyLock<Option<Patterns>> = LazyLock::new(|| {
    Patterns::new()
        .inspect_err(|err| log::error!("failed to compile the chat patterns: {err}"))
        .ok()
});

/// Extracts the event from a chat message. `None` if the sender is not [`BANCHO_BOT`] or the
/// message is not an event.
#[must_use]
pub fn parse_bancho_message(sender: &str, content: &str) -> Option<BanchoEvent> {
    if sender != BANCHO_BOT {
        return None;
    }
    let patterns = PATTERNS.as_ref()?;
    let player_and_slot = |pattern: &Regex| {
        let captures = pattern.captures(content)?;
        Some((captures[1].to_owned(), captures[2].parse::<u32>().ok()?))
    };

    if let Some((player, slot)) = player_and_slot(&patterns.joined) {
        Some(BanchoEvent::Joined { player, slot })
    } else if let Some((player, slot)) = player_and_slot(&patterns.moved) {
        Some(BanchoEvent::Moved { player, slot })
    } else if let Some(captures) = patterns.left.captures(content) {
        Some(BanchoEvent::Left {
            player: captures[1].to_owned(),
        })
    } else if patterns.beatmap_changed.is_match(content) {
        Some(BanchoEvent::BeatmapChanged {
            beatmap_id: beatmap_id(content),
        })
    } else {
        None
    }
}

/// The leading digits after the last `/` of the message, which ends the beatmap URL.
fn beatmap_id(content: &str) -> Option<u32> {
    let tail = content.rsplit('/').next()?;
    let end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    tail[..end].parse().ok()
}
