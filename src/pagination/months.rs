use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

/// Calendar month addressing one page of the game archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchiveMonth {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl ArchiveMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    /// Month the instant falls in, in the instant's own time zone
    pub fn containing<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::new(instant.year(), instant.month())
    }

    pub fn previous(self) -> Self {
        if self.is_january() {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// `YYYY/MM` as used by archive URLs
    pub fn path_segment(&self) -> String {
        format!("{}/{:02}", self.year, self.month)
    }

    fn is_january(&self) -> bool {
        self.month == 1
    }
}

impl fmt::Display for ArchiveMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Archive pages covering the lookback window: (previous, current)
pub fn months_to_fetch<Tz: TimeZone>(now: &DateTime<Tz>) -> (ArchiveMonth, ArchiveMonth) {
    let current = ArchiveMonth::containing(now);
    (current.previous(), current)
}
