use chrono::{NaiveTime, Weekday};

/// Parses a weekday name exactly as the dataset writes it.
///
/// The match is case-sensitive against the seven canonical English names;
/// any other spelling rejects the record.
#[must_use]
pub fn weekday(s: &str) -> Option<Weekday> {
    match s {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parses an "HH:MM" 24-hour clock string into a minute-precision time.
///
/// Extraction is by fixed offset: bytes [0, 2) are the hour and bytes [3, ..)
/// the minute. The dataset always writes `:` at index 2; that byte is skipped,
/// not validated. Hour must be in 0..=23 and minute in 0..=59.
#[must_use]
pub fn clock_time(s: &str) -> Option<NaiveTime> {
    let hour: u32 = s.get(0..2)?.parse().ok()?;
    let minute: u32 = s.get(3..)?.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_weekday_names_parse() {
        assert_eq!(weekday("Monday"), Some(Weekday::Mon));
        assert_eq!(weekday("Tuesday"), Some(Weekday::Tue));
        assert_eq!(weekday("Wednesday"), Some(Weekday::Wed));
        assert_eq!(weekday("Thursday"), Some(Weekday::Thu));
        assert_eq!(weekday("Friday"), Some(Weekday::Fri));
        assert_eq!(weekday("Saturday"), Some(Weekday::Sat));
        assert_eq!(weekday("Sunday"), Some(Weekday::Sun));
    }

    #[test]
    fn weekday_match_is_case_sensitive() {
        assert_eq!(weekday("monday"), None);
        assert_eq!(weekday("MONDAY"), None);
        assert_eq!(weekday("Mon"), None);
        assert_eq!(weekday(""), None);
    }

    #[test]
    fn clock_times_parse_at_minute_precision() {
        assert_eq!(clock_time("00:00"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(clock_time("09:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(clock_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert_eq!(clock_time("24:00"), None);
        assert_eq!(clock_time("12:60"), None);
        assert_eq!(clock_time("99:99"), None);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert_eq!(clock_time(""), None);
        assert_eq!(clock_time("9:00"), None);
        assert_eq!(clock_time("12"), None);
        assert_eq!(clock_time("ab:cd"), None);
    }

    #[test]
    fn separator_byte_is_not_validated() {
        // The byte at index 2 is skipped wholesale, matching the original
        // fixed-offset extraction.
        assert_eq!(clock_time("12x30"), NaiveTime::from_hms_opt(12, 30, 0));
        assert_eq!(clock_time("1200"), NaiveTime::from_hms_opt(12, 0, 0));
    }
}
