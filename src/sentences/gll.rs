use crate::{Error, fields::Fields, sentences::Decode};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// Latitude in decimal degrees, negative south; NaN when not reported
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west; NaN when not reported
    pub longitude: f64,
    /// Fix time of day in UTC
    pub fix_time: Option<time::Time>,
    /// Data status. A sentence that ends before this field reads as active;
    /// only a field that is present and not `A` marks the data inactive.
    pub data_active: bool,
}

impl Decode for GLL {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        Ok(Self {
            latitude: f.coordinate()?,
            longitude: f.coordinate()?,
            fix_time: f.time_of_day()?,
            data_active: match f.next() {
                Some(field) => field == "A",
                None => true,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn decode_populated() {
        let fields = ["4916.45", "N", "12311.12", "W", "225444", "A", ""];
        let gll = GLL::decode(&fields).unwrap();

        assert!((gll.latitude - 49.274166666666667).abs() < 1e-10);
        assert!((gll.longitude - -123.18533333333333).abs() < 1e-10);
        assert_eq!(gll.fix_time, Some(time!(22:54:44)));
        assert!(gll.data_active);
    }

    #[test]
    fn absent_trailing_fields_default_to_active() {
        let fields = ["3751.65", "S", "14507.36", "E"];
        let gll = GLL::decode(&fields).unwrap();

        assert!((gll.latitude - -37.860833333333333).abs() < 1e-10);
        assert!((gll.longitude - 145.12266666666667).abs() < 1e-10);
        assert_eq!(gll.fix_time, None);
        assert!(gll.data_active);
    }

    #[test]
    fn explicit_inactive_marker_is_not_absence() {
        let fields = ["4916.45", "N", "12311.12", "W", "", "V"];
        let gll = GLL::decode(&fields).unwrap();
        assert!(!gll.data_active);

        // Present but empty is inactive too, unlike a sentence that simply
        // ends after the coordinates.
        let fields = ["4916.45", "N", "12311.12", "W", "", ""];
        let gll = GLL::decode(&fields).unwrap();
        assert!(!gll.data_active);
    }
}
