//! # Field Decoding Utilities
//!
//! Shared conversions used by every sentence decoder: degrees-minutes
//! coordinates, fixed-width time-of-day and date groups, and the
//! empty-means-missing numeric conventions.
//!
//! The sentinel contract is part of the public API: a textually empty
//! numeric field decodes to NaN (floats) or -1 (integers), never to zero,
//! so "reported as zero" stays distinguishable from "not reported".

use nom::{
    Parser,
    bytes::complete::take,
    combinator::{all_consuming, map_res},
};

use crate::Error;

type NomResult<'a, O> = nom::IResult<&'a str, O, nom::error::Error<&'a str>>;

fn two_digits(i: &str) -> NomResult<'_, u8> {
    map_res(take(2u8), str::parse).parse(i)
}

/// Converts a `ddmm.mmmm` string and a hemisphere letter to decimal degrees.
///
/// The integer-degree portion is everything before the last two digits
/// preceding the decimal point; the remainder is minutes. `S` and `W`
/// negate the result. An empty string decodes to NaN.
///
/// ```
/// use nmea_messages::fields::parse_coordinate;
///
/// let lat = parse_coordinate("4917.24", 'S').unwrap();
/// assert!((lat - -49.287333333333333).abs() < 1e-10);
/// ```
pub fn parse_coordinate(raw: &str, hemisphere: char) -> Result<f64, Error<'_>> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }

    let invalid = || Error::InvalidField {
        value: raw,
        expected: "ddmm.mmmm coordinate",
    };

    let int_len = raw.find('.').unwrap_or(raw.len());
    let deg_end = int_len.saturating_sub(2);
    let degrees: f64 = if deg_end == 0 {
        0.0
    } else {
        raw[..deg_end].parse().map_err(|_| invalid())?
    };
    let minutes: f64 = raw[deg_end..].parse().map_err(|_| invalid())?;
    if minutes < 0.0 {
        return Err(invalid());
    }

    let value = degrees + minutes / 60.0;
    Ok(if matches!(hemisphere, 'S' | 'W') {
        -value
    } else {
        value
    })
}

/// Parses an `hhmmss[.sss]` time-of-day group. Empty input is `None`.
pub fn parse_time_of_day(raw: &str) -> Result<Option<time::Time>, Error<'_>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let invalid = || Error::InvalidField {
        value: raw,
        expected: "hhmmss time of day",
    };

    let (rest, (hour, minute)) = (two_digits, two_digits)
        .parse(raw)
        .map_err(|_| invalid())?;
    let seconds: f64 = rest.parse().map_err(|_| invalid())?;
    if !(0.0..60.0).contains(&seconds) {
        return Err(invalid());
    }

    let milliseconds = (seconds.fract() * 1000.0) as u16;
    let time = time::Time::from_hms_milli(hour, minute, seconds.trunc() as u8, milliseconds)
        .map_err(|_| invalid())?;
    Ok(Some(time))
}

/// Parses a `ddmmyy` date group; two-digit years map to 20xx. Empty input
/// is `None`.
pub fn parse_date(raw: &str) -> Result<Option<time::Date>, Error<'_>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let invalid = || Error::InvalidField {
        value: raw,
        expected: "ddmmyy date",
    };

    let (_, (day, month, year)) = all_consuming((two_digits, two_digits, two_digits))
        .parse(raw)
        .map_err(|_| invalid())?;
    let month = time::Month::try_from(month).map_err(|_| invalid())?;
    let date =
        time::Date::from_calendar_date(2000 + year as i32, month, day).map_err(|_| invalid())?;
    Ok(Some(date))
}

/// Parses an optional decimal field. Empty input is NaN; the decimal
/// separator is always `.` regardless of host locale.
pub fn parse_opt_f64(raw: &str) -> Result<f64, Error<'_>> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse().map_err(|_| Error::InvalidField {
        value: raw,
        expected: "decimal number",
    })
}

/// Parses an optional integer field. Empty input is -1.
pub fn parse_opt_i32(raw: &str) -> Result<i32, Error<'_>> {
    if raw.is_empty() {
        return Ok(-1);
    }
    raw.parse().map_err(|_| Error::InvalidField {
        value: raw,
        expected: "integer",
    })
}

/// Positional cursor over the comma-split field list of one sentence.
///
/// Field order is fixed per sentence type and not self-describing, so
/// decoders read strictly left to right. Running past the end of a short
/// sentence is not an error: every accessor treats exhaustion as "field
/// absent", because many producers omit trailing optional fields instead
/// of emitting empty placeholders. `next` still exposes the difference
/// between a present-but-empty field (`Some("")`) and an absent one
/// (`None`) for the decoders that need it.
pub(crate) struct Fields<'a, 'f> {
    fields: &'f [&'a str],
    pos: usize,
}

impl<'a, 'f> Fields<'a, 'f> {
    pub(crate) fn new(fields: &'f [&'a str]) -> Self {
        Fields { fields, pos: 0 }
    }

    /// The next raw field, or `None` once the sentence has run out.
    pub(crate) fn next(&mut self) -> Option<&'a str> {
        let field = self.fields.get(self.pos).copied();
        self.pos += 1;
        field
    }

    pub(crate) fn opt_f64(&mut self) -> Result<f64, Error<'a>> {
        parse_opt_f64(self.next().unwrap_or(""))
    }

    pub(crate) fn opt_i32(&mut self) -> Result<i32, Error<'a>> {
        parse_opt_i32(self.next().unwrap_or(""))
    }

    /// Consumes a magnitude field and its hemisphere letter field.
    pub(crate) fn coordinate(&mut self) -> Result<f64, Error<'a>> {
        let raw = self.next().unwrap_or("");
        let hemisphere = self.next().and_then(|s| s.chars().next()).unwrap_or('N');
        parse_coordinate(raw, hemisphere)
    }

    pub(crate) fn time_of_day(&mut self) -> Result<Option<time::Time>, Error<'a>> {
        parse_time_of_day(self.next().unwrap_or(""))
    }

    pub(crate) fn date(&mut self) -> Result<Option<time::Date>, Error<'a>> {
        parse_date(self.next().unwrap_or(""))
    }

    /// First character of the next field; `None` when empty or absent.
    pub(crate) fn code(&mut self) -> Option<char> {
        self.next().and_then(|s| s.chars().next())
    }

    /// Waypoint IDs live in free-text name fields; only leading digits
    /// count, and a name without any yields 0.
    pub(crate) fn waypoint_id(&mut self) -> i32 {
        let name = self.next().unwrap_or("");
        let end = name
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(name.len());
        name[..end].parse().unwrap_or(0)
    }

    /// Owned copy of the next field; `None` when empty or absent.
    pub(crate) fn text(&mut self) -> Option<String> {
        self.next().filter(|s| !s.is_empty()).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Time;

    #[test]
    fn coordinate_reference_values() {
        let lat = parse_coordinate("4917.24", 'S').unwrap();
        assert!((lat - -49.287333333333333).abs() < 1e-10);

        let lon = parse_coordinate("12309.57", 'W').unwrap();
        assert!((lon - -123.1595).abs() < 1e-10);

        let lat = parse_coordinate("3925.9479", 'N').unwrap();
        assert!((lat - 39.432465).abs() < 1e-10);
    }

    #[test]
    fn coordinate_empty_is_nan() {
        assert!(parse_coordinate("", 'N').unwrap().is_nan());
        assert!(parse_coordinate("", 'S').unwrap().is_nan());
    }

    #[test]
    fn coordinate_garbage_is_invalid() {
        assert!(parse_coordinate("abc", 'N').is_err());
        assert!(parse_coordinate("49.17.24", 'N').is_err());
    }

    #[test]
    fn time_of_day_groups() {
        assert_eq!(
            parse_time_of_day("235236").unwrap(),
            Some(Time::from_hms(23, 52, 36).unwrap())
        );
        assert_eq!(
            parse_time_of_day("123519.50").unwrap(),
            Some(Time::from_hms_milli(12, 35, 19, 500).unwrap())
        );
        assert_eq!(parse_time_of_day("").unwrap(), None);
        assert!(parse_time_of_day("256100").is_err());
        assert!(parse_time_of_day("12").is_err());
    }

    #[test]
    fn date_two_digit_year_is_20xx() {
        let date = parse_date("230313").unwrap().unwrap();
        assert_eq!((date.year(), date.month() as u8, date.day()), (2013, 3, 23));
        assert_eq!(parse_date("").unwrap(), None);
        assert!(parse_date("321313").is_err());
    }

    #[test]
    fn optional_numerics_use_sentinels() {
        assert!(parse_opt_f64("").unwrap().is_nan());
        assert_eq!(parse_opt_f64("0.0").unwrap(), 0.0);
        assert_eq!(parse_opt_f64("-22.1").unwrap(), -22.1);
        assert!(parse_opt_f64("12,5").is_err());

        assert_eq!(parse_opt_i32("").unwrap(), -1);
        assert_eq!(parse_opt_i32("0").unwrap(), 0);
        assert!(parse_opt_i32("4.2").is_err());
    }

    #[test]
    fn cursor_distinguishes_empty_from_absent() {
        let fields = ["A", ""];
        let mut f = Fields::new(&fields);
        assert_eq!(f.next(), Some("A"));
        assert_eq!(f.next(), Some(""));
        assert_eq!(f.next(), None);
        // Exhaustion decodes as absent, not as an error.
        assert!(f.opt_f64().unwrap().is_nan());
        assert_eq!(f.opt_i32().unwrap(), -1);
    }

    #[test]
    fn waypoint_ids_take_leading_digits() {
        let fields = ["003", "WP12A", "HOME", ""];
        let mut f = Fields::new(&fields);
        assert_eq!(f.waypoint_id(), 3);
        assert_eq!(f.waypoint_id(), 0);
        assert_eq!(f.waypoint_id(), 0);
        assert_eq!(f.waypoint_id(), 0);
    }
}
