use crate::{
    Error,
    fields::Fields,
    sentences::{DataStatus, Decode},
};

/// RMB - Recommended Minimum Navigation Information, waypoint to destination
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmb_recommended_minimum_navigation_information>
///
/// ```text
///         1 2   3 4    5    6       7 8        9 10  11  12  13
///         | |   | |    |    |       | |        | |   |   |   |
///  $--RMB,A,x.x,a,c--c,c--c,ddmm.mm,a,dddmm.mm,a,x.x,x.x,x.x,A*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMB {
    /// Data status indicator
    pub status: DataStatus,
    /// Cross-track error in nautical miles; the adjacent L/R letter folds
    /// into the sign, `L` negating. NaN when not reported.
    pub cross_track_error: f64,
    /// Leading digits of the origin waypoint name; 0 when absent
    pub origin_waypoint_id: i32,
    /// Leading digits of the destination waypoint name; 0 when absent
    pub destination_waypoint_id: i32,
    /// Destination latitude in decimal degrees; NaN when not reported
    pub destination_latitude: f64,
    /// Destination longitude in decimal degrees; NaN when not reported
    pub destination_longitude: f64,
    /// Range to destination in nautical miles; NaN when not reported
    pub range_to_destination: f64,
    /// Bearing to destination in degrees true; NaN when not reported
    pub true_bearing: f64,
    /// Closing velocity to destination in knots; NaN when not reported
    pub velocity: f64,
    /// Arrival status: `true` once the arrival circle is entered
    pub arrived: bool,
}

impl Decode for RMB {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        let status = DataStatus::from_code(f.code());
        let magnitude = f.opt_f64()?;
        let cross_track_error = match f.code() {
            Some('L') => -magnitude,
            _ => magnitude,
        };
        let origin_waypoint_id = f.waypoint_id();
        let destination_waypoint_id = f.waypoint_id();
        let destination_latitude = f.coordinate()?;
        let destination_longitude = f.coordinate()?;
        let range_to_destination = f.opt_f64()?;
        let true_bearing = f.opt_f64()?;
        let velocity = f.opt_f64()?;
        let arrived = f.code() == Some('A');

        Ok(Self {
            status,
            cross_track_error,
            origin_waypoint_id,
            destination_waypoint_id,
            destination_latitude,
            destination_longitude,
            range_to_destination,
            true_bearing,
            velocity,
            arrived,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_empty_fields_use_sentinels() {
        let fields = ["A", "", "", "", "", "", "", "", "", "", "", "", "A", "A"];
        let rmb = RMB::decode(&fields).unwrap();

        assert_eq!(rmb.status, DataStatus::Valid);
        assert!(rmb.cross_track_error.is_nan());
        assert_eq!(rmb.origin_waypoint_id, 0);
        assert_eq!(rmb.destination_waypoint_id, 0);
        assert!(rmb.destination_latitude.is_nan());
        assert!(rmb.destination_longitude.is_nan());
        assert!(rmb.range_to_destination.is_nan());
        assert!(rmb.true_bearing.is_nan());
        assert!(rmb.velocity.is_nan());
        assert!(rmb.arrived);
    }

    #[test]
    fn left_of_track_negates_cross_track_error() {
        let fields = [
            "A", "0.66", "L", "003", "004", "4917.24", "S", "12309.57", "W", "001.3", "052.5",
            "000.5", "V",
        ];
        let rmb = RMB::decode(&fields).unwrap();

        assert_eq!(rmb.cross_track_error, -0.66);
        assert_eq!(rmb.origin_waypoint_id, 3);
        assert_eq!(rmb.destination_waypoint_id, 4);
        assert!((rmb.destination_latitude - -49.287333333333333).abs() < 1e-10);
        assert!((rmb.destination_longitude - -123.1595).abs() < 1e-10);
        assert_eq!(rmb.range_to_destination, 1.3);
        assert_eq!(rmb.true_bearing, 52.5);
        assert_eq!(rmb.velocity, 0.5);
        assert!(!rmb.arrived);
    }

    #[test]
    fn right_of_track_stays_positive() {
        let fields = [
            "A", "0.66", "R", "003", "004", "4917.24", "N", "12309.57", "E", "001.3", "052.5",
            "000.5", "A",
        ];
        let rmb = RMB::decode(&fields).unwrap();
        assert_eq!(rmb.cross_track_error, 0.66);
        assert!(rmb.arrived);
    }
}
