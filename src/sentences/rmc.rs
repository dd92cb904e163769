use crate::{
    Error,
    fields::Fields,
    sentences::{DataStatus, Decode},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9      10  11
///         |         | |       | |        |  |   |   |      |   |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time of day in UTC
    pub fix_time: Option<time::Time>,
    /// Data status indicator
    pub status: DataStatus,
    /// Latitude in decimal degrees, negative south; NaN when not reported
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west; NaN when not reported
    pub longitude: f64,
    /// Speed over ground in knots; NaN when not reported
    pub speed_over_ground: f64,
    /// Course over ground in degrees true; NaN when not reported
    pub course_over_ground: f64,
    /// Fix date in UTC, two-digit years read as 20xx
    pub fix_date: Option<time::Date>,
    /// Magnetic variation in degrees, negative west; NaN when not reported
    pub magnetic_variation: f64,
}

impl RMC {
    /// The date and time-of-day fields combined into one UTC timestamp.
    ///
    /// `None` until both fields are present; a receiver without a date fix
    /// reports only a time of day.
    pub fn fix_datetime(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(self.fix_date?, self.fix_time?))
    }
}

impl Decode for RMC {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        let fix_time = f.time_of_day()?;
        let status = DataStatus::from_code(f.code());
        let latitude = f.coordinate()?;
        let longitude = f.coordinate()?;
        let speed_over_ground = f.opt_f64()?;
        let course_over_ground = f.opt_f64()?;
        let fix_date = f.date()?;
        let magnitude = f.opt_f64()?;
        let magnetic_variation = match f.code() {
            Some('W') => -magnitude,
            _ => magnitude,
        };

        Ok(Self {
            fix_time,
            status,
            latitude,
            longitude,
            speed_over_ground,
            course_over_ground,
            fix_date,
            magnetic_variation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn decode_populated() {
        let fields = [
            "123519", "A", "4807.038", "S", "01131.000", "W", "022.4", "084.4", "230313", "003.1",
            "W",
        ];
        let rmc = RMC::decode(&fields).unwrap();

        assert_eq!(rmc.status, DataStatus::Valid);
        assert!((rmc.latitude - -48.1173).abs() < 1e-10);
        assert!((rmc.longitude - -11.516666666666667).abs() < 1e-10);
        assert_eq!(rmc.speed_over_ground, 22.4);
        assert_eq!(rmc.course_over_ground, 84.4);
        assert_eq!(rmc.magnetic_variation, -3.1);
        assert_eq!(rmc.fix_datetime(), Some(datetime!(2013-03-23 12:35:19)));
    }

    #[test]
    fn decode_without_date_has_no_datetime() {
        let fields = ["123519", "A", "4807.038", "N", "01131.000", "E", "", "", "", "", ""];
        let rmc = RMC::decode(&fields).unwrap();

        assert!(rmc.speed_over_ground.is_nan());
        assert!(rmc.course_over_ground.is_nan());
        assert!(rmc.magnetic_variation.is_nan());
        assert_eq!(rmc.fix_date, None);
        assert_eq!(rmc.fix_datetime(), None);
    }

    #[test]
    fn easterly_variation_stays_positive() {
        let fields = [
            "081836", "A", "3751.65", "S", "14507.36", "E", "000.0", "360.0", "130998", "011.3",
            "E",
        ];
        let rmc = RMC::decode(&fields).unwrap();
        assert_eq!(rmc.magnetic_variation, 11.3);
        assert_eq!(rmc.fix_date.map(|d| d.year()), Some(2098));
    }
}
