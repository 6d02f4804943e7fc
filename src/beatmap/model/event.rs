//! Definitions of the events kept from the `[Events]` section.

/// A break period, where no object appears and the health does not drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakTime {
    /// The time where the break starts, in milliseconds.
    pub start_time: i32,
    /// The time where the break ends, in milliseconds.
    pub end_time: i32,
}

impl BreakTime {
    /// Gets the length of the break in milliseconds.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.end_time as i64 - self.start_time as i64
    }
}
