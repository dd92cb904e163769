//! Trimble (`TNL`) proprietary laser-rangefinder sentences.

use crate::{Error, fields::Fields, sentences::Decode};

use super::Sentence;

/// Second-level dispatch for the `TNL` manufacturer code.
pub(crate) fn decode<'a>(
    sentence: &str,
    fields: &[&'a str],
) -> Result<Option<Sentence>, Error<'a>> {
    Ok(match sentence {
        "A" => Some(Sentence::PTNLA(PTNLA::decode(fields)?)),
        "B" => Some(Sentence::PTNLB(PTNLB::decode(fields)?)),
        _ => None,
    })
}

/// PTNLA - Trimble Laser Range Measurement, horizontal vector
///
/// ```text
///          1  2   3 4   5 6   7 8   9
///          |  |   | |   | |   | |   |
///  $PTNLA,HV,x.x,M,x.x,D,x.x,D,x.x,M*hh<CR><LF>
/// ```
///
/// The first field is the measurement-type prefix and carries no data.
/// Each magnitude is paired with the unit letter in the field right after
/// it (`M` meters, `F` feet, `D` degrees).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PTNLA {
    /// Horizontal distance to target; NaN when not reported
    pub horizontal_distance: f64,
    /// Unit letter adjacent to the horizontal distance
    pub horizontal_distance_units: Option<char>,
    /// Horizontal angle; NaN when not reported
    pub horizontal_angle: f64,
    /// Unit letter adjacent to the horizontal angle
    pub horizontal_angle_units: Option<char>,
    /// Vertical angle; NaN when not reported
    pub vertical_angle: f64,
    /// Unit letter adjacent to the vertical angle
    pub vertical_angle_units: Option<char>,
    /// Slope distance to target; NaN when not reported
    pub slope_distance: f64,
    /// Unit letter adjacent to the slope distance
    pub slope_distance_units: Option<char>,
}

impl Decode for PTNLA {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);
        f.next(); // measurement-type prefix, e.g. `HV`

        Ok(Self {
            horizontal_distance: f.opt_f64()?,
            horizontal_distance_units: f.code(),
            horizontal_angle: f.opt_f64()?,
            horizontal_angle_units: f.code(),
            vertical_angle: f.opt_f64()?,
            vertical_angle_units: f.code(),
            slope_distance: f.opt_f64()?,
            slope_distance_units: f.code(),
        })
    }
}

/// PTNLB - Trimble Laser Range Measurement, tree height
///
/// Same field layout as [`PTNLA`] with tree-height semantics.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PTNLB {
    /// Horizontal distance to the tree; NaN when not reported
    pub horizontal_distance: f64,
    /// Unit letter adjacent to the horizontal distance
    pub horizontal_distance_units: Option<char>,
    /// Tree height; NaN when not reported
    pub height: f64,
    /// Unit letter adjacent to the height
    pub height_units: Option<char>,
    /// Slope distance to the tree top; NaN when not reported
    pub slope_distance: f64,
    /// Unit letter adjacent to the slope distance
    pub slope_distance_units: Option<char>,
}

impl Decode for PTNLB {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        Ok(Self {
            horizontal_distance: f.opt_f64()?,
            horizontal_distance_units: f.code(),
            height: f.opt_f64()?,
            height_units: f.code(),
            slope_distance: f.opt_f64()?,
            slope_distance_units: f.code(),
        })
    }
}
