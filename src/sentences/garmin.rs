//! Garmin (`GRM`) proprietary sentences.

use crate::{Error, fields::Fields, sentences::Decode};

use super::Sentence;

/// Second-level dispatch for the `GRM` manufacturer code: the sentence code
/// that follows `PGRM` selects the decoder.
pub(crate) fn decode<'a>(
    sentence: &str,
    fields: &[&'a str],
) -> Result<Option<Sentence>, Error<'a>> {
    Ok(match sentence {
        "E" => Some(Sentence::PGRME(PGRME::decode(fields)?)),
        "Z" => Some(Sentence::PGRMZ(PGRMZ::decode(fields)?)),
        _ => None,
    })
}

/// PGRME - Garmin Estimated Error Information
///
/// ```text
///          1   2 3   4 5   6
///          |   | |   | |   |
///  $PGRME,x.x,M,x.x,M,x.x,M*hh<CR><LF>
/// ```
///
/// Each magnitude is paired with the unit letter in the field right after
/// it; the unit is not assumed to be a fixed global `M`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PGRME {
    /// Estimated horizontal position error; NaN when not reported
    pub horizontal_error: f64,
    /// Unit letter adjacent to the horizontal error
    pub horizontal_error_units: Option<char>,
    /// Estimated vertical position error; NaN when not reported
    pub vertical_error: f64,
    /// Unit letter adjacent to the vertical error
    pub vertical_error_units: Option<char>,
    /// Estimated spherical equivalent position error; NaN when not reported
    pub spherical_error: f64,
    /// Unit letter adjacent to the spherical error
    pub spherical_error_units: Option<char>,
}

impl Decode for PGRME {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        Ok(Self {
            horizontal_error: f.opt_f64()?,
            horizontal_error_units: f.code(),
            vertical_error: f.opt_f64()?,
            vertical_error_units: f.code(),
            spherical_error: f.opt_f64()?,
            spherical_error_units: f.code(),
        })
    }
}

/// PGRMZ - Garmin Altitude Information
///
/// ```text
///          1   2 3
///          |   | |
///  $PGRMZ,x.x,f,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PGRMZ {
    /// Altitude; NaN when not reported
    pub altitude: f64,
    /// Unit letter adjacent to the altitude, `f` for feet
    pub altitude_units: Option<char>,
    /// Position fix dimension: 2 from a user altitude, 3 from GPS; -1 when
    /// not reported
    pub fix_dimension: i32,
}

impl Decode for PGRMZ {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        Ok(Self {
            altitude: f.opt_f64()?,
            altitude_units: f.code(),
            fix_dimension: f.opt_i32()?,
        })
    }
}
