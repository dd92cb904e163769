use crate::{Error, fields::Fields, sentences::Decode};

/// BOD - Bearing Origin to Destination
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bod_bearing_waypoint_to_waypoint>
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BOD,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BOD {
    /// Bearing from origin to destination in degrees true; NaN when not
    /// reported
    pub true_bearing: f64,
    /// Bearing from origin to destination in degrees magnetic; NaN when not
    /// reported
    pub magnetic_bearing: f64,
    /// Destination waypoint name; `None` when absent
    pub destination_id: Option<String>,
    /// Origin waypoint name; `None` when absent
    pub origin_id: Option<String>,
}

impl Decode for BOD {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        let true_bearing = f.opt_f64()?;
        f.next(); // `T` reference letter
        let magnetic_bearing = f.opt_f64()?;
        f.next(); // `M` reference letter

        Ok(Self {
            true_bearing,
            magnetic_bearing,
            destination_id: f.text(),
            origin_id: f.text(),
        })
    }
}
