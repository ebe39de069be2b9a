use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::FormatItem;
use time::macros::{format_description, offset};
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Asia/Kolkata. No daylight saving, so a fixed offset is exact.
pub const REFERENCE_OFFSET: UtcOffset = offset!(+05:30);
pub const REFERENCE_ZONE_ABBREV: &str = "IST";

static OFFSET_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]][offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute][optional [:[second]]][optional [.[subsecond]]][offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]][offset_hour sign:mandatory][offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute][optional [:[second]]][optional [.[subsecond]]][offset_hour sign:mandatory][offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]] [offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute][optional [:[second]]][optional [.[subsecond]]] [offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute][optional [:[second]]][optional [.[subsecond]]] [offset_hour sign:mandatory][offset_minute]"
    ),
];

// All-numeric day/month orders other than year-first (`21/09/2025`,
// `09/21/2025`) are ambiguous and stay unsupported.

static NAIVE_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]]"),
    format_description!("[year]-[month]-[day] [hour]:[minute][optional [:[second]]][optional [.[subsecond]]]"),
    format_description!("[year]/[month]/[day] [hour]:[minute][optional [:[second]]]"),
    format_description!(
        "[year]-[month]-[day] [hour repr:12 padding:none]:[minute][optional [:[second]]] [period case_sensitive:false]"
    ),
    format_description!(
        "[day padding:none] [month repr:short case_sensitive:false] [year] [hour]:[minute][optional [:[second]]]"
    ),
    format_description!(
        "[day padding:none] [month repr:long case_sensitive:false] [year] [hour]:[minute][optional [:[second]]]"
    ),
    format_description!(
        "[month repr:short case_sensitive:false] [day padding:none] [year] [hour]:[minute][optional [:[second]]]"
    ),
    format_description!(
        "[month repr:long case_sensitive:false] [day padding:none], [year] [hour]:[minute][optional [:[second]]]"
    ),
];

static DATE_ONLY: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

static READABLE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Parses an upload timestamp.
///
/// Returns `None` when no supported layout matches. Timestamps without an
/// offset are taken to be in the reference zone.
pub fn parse_upload_time(input: &str) -> Option<OffsetDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = OffsetDateTime::parse(input, &Rfc3339) {
        return Some(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(input, &Rfc2822) {
        return Some(dt);
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|format| OffsetDateTime::parse(input, format).ok())
    {
        return Some(dt);
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(input, format).ok())
    {
        return Some(dt.assume_offset(REFERENCE_OFFSET));
    }

    Date::parse(input, DATE_ONLY)
        .ok()
        .map(|date| date.midnight().assume_offset(REFERENCE_OFFSET))
}

/// Current instant expressed in the reference zone.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(REFERENCE_OFFSET)
}

/// RFC 3339 with the timestamp's own offset.
pub fn format_iso(dt: OffsetDateTime) -> String {
    // Rfc3339 only rejects years outside 0..=9999 and sub-minute offsets.
    dt.format(&Rfc3339).unwrap_or_else(|_| dt.to_string())
}

/// `YYYY-MM-DD HH:MM IST`, converted into the reference zone.
pub fn format_readable(dt: OffsetDateTime) -> String {
    let local = dt.to_offset(REFERENCE_OFFSET);
    match local.format(READABLE) {
        Ok(s) => format!("{s} {REFERENCE_ZONE_ABBREV}"),
        Err(_) => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn naive_iso_is_reference_zone() {
        let dt = parse_upload_time("2025-09-21T10:00:00").unwrap();
        assert_eq!(dt, datetime!(2025-09-21 10:00:00 +05:30));
        assert_eq!(dt.offset(), REFERENCE_OFFSET);
    }

    #[test]
    fn accepts_common_layouts() {
        let expected = datetime!(2025-09-21 15:30:00 +05:30);
        assert_eq!(parse_upload_time("2025-09-21 15:30").unwrap(), expected);
        assert_eq!(parse_upload_time("2025-09-21T15:30").unwrap(), expected);
        assert_eq!(parse_upload_time("2025-09-21 15:30:00").unwrap(), expected);
        assert_eq!(parse_upload_time("2025/09/21 15:30").unwrap(), expected);
        assert_eq!(parse_upload_time("21 Sep 2025 15:30").unwrap(), expected);
        assert_eq!(parse_upload_time("  2025-09-21T15:30:00  ").unwrap(), expected);
        assert_eq!(
            parse_upload_time("2025-09-21").unwrap(),
            datetime!(2025-09-21 00:00:00 +05:30)
        );
    }

    #[test]
    fn keeps_explicit_offsets() {
        let dt = parse_upload_time("2025-09-21T10:00:00Z").unwrap();
        assert_eq!(dt.offset(), UtcOffset::UTC);

        let dt = parse_upload_time("2025-09-21T10:00+02:00").unwrap();
        assert_eq!(dt, datetime!(2025-09-21 10:00:00 +02:00));

        let dt = parse_upload_time("Sun, 21 Sep 2025 10:00:00 +0000").unwrap();
        assert_eq!(dt, datetime!(2025-09-21 10:00:00 UTC));
    }

    #[test]
    fn basic_and_spaced_offsets() {
        let expected = datetime!(2025-09-21 10:00:00 +05:30);
        for input in [
            "2025-09-21T10:00:00+0530",
            "2025-09-21 10:00+0530",
            "2025-09-21 10:00:00 +05:30",
            "2025-09-21T10:00:00 +05:30",
            "2025-09-21 10:00 +0530",
        ] {
            let dt = parse_upload_time(input).unwrap_or_else(|| panic!("{input}"));
            assert_eq!(dt, expected, "{input}");
            assert_eq!(dt.offset(), REFERENCE_OFFSET, "{input}");
        }

        let dt = parse_upload_time("2025-09-21T10:00:00-0400").unwrap();
        assert_eq!(dt, datetime!(2025-09-21 10:00:00 -04:00));
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(
            parse_upload_time("2025-09-21 10:00 AM").unwrap(),
            datetime!(2025-09-21 10:00:00 +05:30)
        );
        assert_eq!(
            parse_upload_time("2025-09-21 10:00 PM").unwrap(),
            datetime!(2025-09-21 22:00:00 +05:30)
        );
        assert_eq!(
            parse_upload_time("2025-09-21 9:15:30 pm").unwrap(),
            datetime!(2025-09-21 21:15:30 +05:30)
        );
        assert_eq!(
            parse_upload_time("2025-09-21 12:00 AM").unwrap(),
            datetime!(2025-09-21 00:00:00 +05:30)
        );
        assert!(parse_upload_time("2025-09-21 13:00 PM").is_none());
    }

    #[test]
    fn month_names() {
        let expected = datetime!(2025-09-21 10:00:00 +05:30);
        for input in [
            "21 Sep 2025 10:00",
            "21 sep 2025 10:00:00",
            "21 September 2025 10:00",
            "Sep 21 2025 10:00",
            "September 21, 2025 10:00",
        ] {
            assert_eq!(parse_upload_time(input), Some(expected), "{input}");
        }
        assert_eq!(
            parse_upload_time("Sep 1 2025 08:00"),
            Some(datetime!(2025-09-01 08:00:00 +05:30))
        );
    }

    #[test]
    fn ambiguous_numeric_dates_are_rejected() {
        assert!(parse_upload_time("21/09/2025 10:00").is_none());
        assert!(parse_upload_time("09/21/2025 10:00").is_none());
        assert!(parse_upload_time("21-09-2025 10:00").is_none());
    }

    #[test]
    fn fractional_seconds() {
        let dt = parse_upload_time("2025-09-21T10:00:00.123456").unwrap();
        assert_eq!(dt.millisecond(), 123);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_upload_time("").is_none());
        assert!(parse_upload_time("   ").is_none());
        assert!(parse_upload_time("not a date").is_none());
        assert!(parse_upload_time("2025-13-40T10:00:00").is_none());
    }

    #[test]
    fn formats_iso_and_readable() {
        let dt = datetime!(2025-09-21 23:00:00 +05:30);
        assert_eq!(format_iso(dt), "2025-09-21T23:00:00+05:30");
        assert_eq!(format_readable(dt), "2025-09-21 23:00 IST");

        let utc = datetime!(2025-09-21 12:00:00 UTC);
        assert_eq!(format_readable(utc), "2025-09-21 17:30 IST");
    }

    #[test]
    fn now_is_in_reference_zone() {
        assert_eq!(now().offset(), REFERENCE_OFFSET);
    }
}
