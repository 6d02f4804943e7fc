//! Game modes and mod bitmasks, as stored in scores and replays.

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use itertools::Itertools;

/// A game mode of osu!.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// osu!standard, index `0`.
    Osu,
    /// osu!taiko, index `1`.
    Taiko,
    /// osu!catch, index `2`.
    Catch,
    /// osu!mania, index `3`.
    Mania,
}

impl GameMode {
    /// Gets the mode from its index, `0` to `3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Osu),
            1 => Some(Self::Taiko),
            2 => Some(Self::Catch),
            3 => Some(Self::Mania),
            _ => None,
        }
    }

    /// Gets the index of the mode.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Gets the mode from its name, ignoring the case. `ctb`, `catch` and `fruits` are all
    /// accepted for osu!catch.
    ///
    /// ```
    /// use osu_rs::mods::GameMode;
    ///
    /// assert_eq!(GameMode::from_name("Taiko"), Some(GameMode::Taiko));
    /// assert_eq!(GameMode::from_name("fruits"), Some(GameMode::Catch));
    /// assert_eq!(GameMode::from_name("drums"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "osu" => Some(Self::Osu),
            "taiko" => Some(Self::Taiko),
            "ctb" | "catch" | "fruits" => Some(Self::Catch),
            "mania" => Some(Self::Mania),
            _ => None,
        }
    }

    /// Gets the short name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Catch => "ctb",
            Self::Mania => "mania",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of mods, as the bitmask used by the osu! API.
///
/// ```
/// use osu_rs::mods::Mods;
///
/// let mods = Mods::HIDDEN | Mods::DOUBLE_TIME;
/// assert_eq!(mods.bits(), 72);
/// assert_eq!(mods.to_string(), "Hidden DoubleTime");
/// assert_eq!(Mods::from_names(["hidden", "DoubleTime"]), Some(mods));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mods(pub u32);

macro_rules! define_mods {
    ($($(#[$doc:meta])* $konst:ident = $bit:expr, $name:literal;)*) => {
        impl Mods {
            $(
                $(#[$doc])*
                pub const $konst: Self = Self(1 << $bit);
            )*

            const NAMED: &'static [(Self, &'static str)] = &[$((Self::$konst, $name)),*];
        }
    };
}

define_mods! {
    /// `NF`
    NO_FAIL = 0, "NoFail";
    /// `EZ`
    EASY = 1, "Easy";
    /// `TD`
    TOUCH_DEVICE = 2, "TouchDevice";
    /// `HD`
    HIDDEN = 3, "Hidden";
    /// `HR`
    HARD_ROCK = 4, "HardRock";
    /// `SD`
    SUDDEN_DEATH = 5, "SuddenDeath";
    /// `DT`
    DOUBLE_TIME = 6, "DoubleTime";
    /// `RX`
    RELAX = 7, "Relax";
    /// `HT`
    HALF_TIME = 8, "HalfTime";
    /// `NC`, always set with [`Mods::DOUBLE_TIME`] by the game.
    NIGHTCORE = 9, "Nightcore";
    /// `FL`
    FLASHLIGHT = 10, "Flashlight";
    /// `AT`
    AUTOPLAY = 11, "Autoplay";
    /// `SO`
    SPUN_OUT = 12, "SpunOut";
    /// `AP`
    AUTOPILOT = 13, "Autopilot";
    /// `PF`, always set with [`Mods::SUDDEN_DEATH`] by the game.
    PERFECT = 14, "Perfect";
    /// `4K`
    KEY4 = 15, "Key4";
    /// `5K`
    KEY5 = 16, "Key5";
    /// `6K`
    KEY6 = 17, "Key6";
    /// `7K`
    KEY7 = 18, "Key7";
    /// `8K`
    KEY8 = 19, "Key8";
    /// `FI`
    FADE_IN = 20, "FadeIn";
    /// `RD`
    RANDOM = 21, "Random";
    /// `CN`
    CINEMA = 22, "Cinema";
    /// `TP`
    TARGET = 23, "Target";
    /// `9K`
    KEY9 = 24, "Key9";
    /// `CO`
    KEY_COOP = 25, "KeyCoop";
    /// `1K`
    KEY1 = 26, "Key1";
    /// `3K`
    KEY3 = 27, "Key3";
    /// `2K`
    KEY2 = 28, "Key2";
    /// `V2`
    SCORE_V2 = 29, "ScoreV2";
    /// `MR`
    MIRROR = 30, "Mirror";
}

impl Mods {
    /// No mod.
    pub const NONE: Self = Self(0);

    /// Gets the bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if all the mods in `other` are set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any of the mods in `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if no mod is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Gets the names of the mods set, in the order of the bits. Unknown bits are skipped.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|&(_, name)| name)
    }

    /// Builds the set from mod names, ignoring the case. `None` if a name is unknown.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        names.into_iter().try_fold(Self::NONE, |mods, name| {
            Self::NAMED
                .iter()
                .find(|(_, known)| known.eq_ignore_ascii_case(name))
                .map(|&(flag, _)| mods | flag)
        })
    }
}

impl BitOr for Mods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mods {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for Mods {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" "))
    }
}
