use core::fmt;

/// MAC-layer timestamp with millisecond resolution.
/// The frame state machine owns advancing this; the scheduler only reads it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MacTime {
    ms: u64,
}

impl MacTime {
    pub fn from_ms(ms: u64) -> MacTime {
        MacTime { ms }
    }

    pub fn as_ms(self) -> u64 {
        self.ms
    }

    /// This time plus `ms` milliseconds
    pub fn add_ms(self, ms: u64) -> MacTime {
        MacTime { ms: self.ms + ms }
    }

    /// Difference between two MacTimes in milliseconds
    pub fn diff(self, b: Self) -> i64 {
        self.ms as i64 - b.ms as i64
    }

    /// Age of this MacTime compared to now
    #[inline(always)]
    pub fn age(self, now: MacTime) -> i64 {
        now.diff(self)
    }
}

impl fmt::Display for MacTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.ms)
    }
}

impl fmt::Debug for MacTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.ms)
    }
}
