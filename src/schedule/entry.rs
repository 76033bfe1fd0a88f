use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

use std::fmt::{self, Display, Formatter};

use crate::parse::{self, RawRecord};

/// One recurring weekly open window for a vendor at a single location.
///
/// Constructed only through [`Self::from_raw`], so every field is present and
/// validated; the open test never re-checks the record's shape. The entry
/// carries no date, only a weekday and a daily time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    name: String,
    address: String,
    weekday: Weekday,
    open: NaiveTime,
    close: NaiveTime,
}

impl ScheduleEntry {
    /// Validates a raw record into a complete entry.
    ///
    /// Any absent or unparseable field rejects this record alone; the caller
    /// decides whether to drop or report it.
    pub fn from_raw(raw: RawRecord) -> parse::Result<Self> {
        let address = raw
            .location
            .ok_or(parse::Error::MissingField("location"))?;
        let name = raw
            .applicant
            .ok_or(parse::Error::MissingField("applicant"))?;
        let day = raw
            .dayofweekstr
            .ok_or(parse::Error::MissingField("dayofweekstr"))?;
        let start = raw.start24.ok_or(parse::Error::MissingField("start24"))?;
        let end = raw.end24.ok_or(parse::Error::MissingField("end24"))?;

        let weekday = parse::weekday(&day).ok_or(parse::Error::Weekday(day))?;
        let open = parse::clock_time(&start).ok_or(parse::Error::ClockTime(start))?;
        let close = parse::clock_time(&end).ok_or(parse::Error::ClockTime(end))?;

        Ok(Self {
            name,
            address,
            weekday,
            open,
            close,
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Whether this window contains `instant`, at minute precision.
    ///
    /// Both bounds are inclusive and the instant's seconds are ignored, so an
    /// instant anywhere inside the closing minute still counts as open.
    /// Windows written with `close` before `open` (the dataset has a few that
    /// cross midnight) contain no instant at all.
    #[must_use]
    pub fn is_open_at(&self, instant: NaiveDateTime) -> bool {
        if instant.weekday() != self.weekday {
            return false;
        }
        let at = (instant.hour(), instant.minute());
        let open = (self.open.hour(), self.open.minute());
        let close = (self.close.hour(), self.close.minute());
        open <= at && at <= close
    }
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.address)
    }
}
