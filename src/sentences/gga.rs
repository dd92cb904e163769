use crate::{
    Error,
    fields::Fields,
    sentences::{Decode, FixQuality},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time of day in UTC
    pub fix_time: Option<time::Time>,
    /// Latitude in decimal degrees, negative south; NaN when not reported
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west; NaN when not reported
    pub longitude: f64,
    /// GPS quality indicator
    pub quality: FixQuality,
    /// Number of satellites in use; -1 when not reported
    pub satellite_count: i32,
    /// Horizontal dilution of precision; NaN when not reported
    pub hdop: f64,
    /// Antenna altitude above mean sea level; NaN when not reported
    pub altitude: f64,
    /// Unit letter adjacent to the altitude field, normally `M`
    pub altitude_units: Option<char>,
    /// Geoidal separation; NaN when not reported
    pub geoid_height: f64,
    /// Unit letter adjacent to the geoidal-separation field, normally `M`
    pub geoid_height_units: Option<char>,
    /// Age of the differential correction in seconds; NaN when DGPS is not
    /// in use
    pub dgps_age: f64,
    /// Differential reference station ID; -1 when not reported
    pub dgps_station_id: i32,
}

impl Decode for GGA {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        Ok(Self {
            fix_time: f.time_of_day()?,
            latitude: f.coordinate()?,
            longitude: f.coordinate()?,
            quality: FixQuality::from_code(f.code()),
            satellite_count: f.opt_i32()?,
            hdop: f.opt_f64()?,
            altitude: f.opt_f64()?,
            altitude_units: f.code(),
            geoid_height: f.opt_f64()?,
            geoid_height_units: f.code(),
            dgps_age: f.opt_f64()?,
            dgps_station_id: f.opt_i32()?,
        })
    }
}
