use crate::{
    Error,
    fields::Fields,
    sentences::{Decode, SatelliteInfo},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Satellite lists spanning several GSV transmissions are not reassembled
/// here; each decode covers exactly one message.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV messages in this group; -1 when not reported
    pub total_messages: i32,
    /// Index of this message within the group, 1-based; -1 when not reported
    pub message_number: i32,
    /// Total number of satellites in view; -1 when not reported
    pub satellites_in_view: i32,
    /// Up to four satellite-info groups. A group is included only when its
    /// PRN sub-field is non-empty, so an all-empty trailing group does not
    /// appear.
    pub satellites: heapless::Vec<SatelliteInfo, 4>,
}

impl Decode for GSV {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        let total_messages = f.opt_i32()?;
        let message_number = f.opt_i32()?;
        let satellites_in_view = f.opt_i32()?;

        let mut satellites = heapless::Vec::new();
        for _ in 0..4 {
            let prn = f.opt_i32()?;
            let elevation = f.opt_i32()?;
            let azimuth = f.opt_i32()?;
            let snr = f.opt_i32()?;
            if prn != -1 {
                satellites
                    .push(SatelliteInfo {
                        prn,
                        elevation,
                        azimuth,
                        snr,
                    })
                    .ok();
            }
        }

        Ok(Self {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_trailing_group_is_dropped() {
        let fields = [
            "3", "3", "11", "22", "42", "067", "42", "24", "14", "311", "43", "27", "05", "244",
            "00", "", "", "", "",
        ];
        let gsv = GSV::decode(&fields).unwrap();

        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 3);
        assert_eq!(gsv.satellites_in_view, 11);
        assert_eq!(gsv.satellites.len(), 3);

        assert_eq!(
            gsv.satellites[0],
            SatelliteInfo {
                prn: 22,
                elevation: 42,
                azimuth: 67,
                snr: 42
            }
        );
        assert_eq!(
            gsv.satellites[1],
            SatelliteInfo {
                prn: 24,
                elevation: 14,
                azimuth: 311,
                snr: 43
            }
        );
        // An SNR of 00 is a genuine zero reading, not a missing field.
        assert_eq!(
            gsv.satellites[2],
            SatelliteInfo {
                prn: 27,
                elevation: 5,
                azimuth: 244,
                snr: 0
            }
        );
    }

    #[test]
    fn empty_sky() {
        let fields = [
            "1", "1", "0", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
        ];
        let gsv = GSV::decode(&fields).unwrap();

        assert_eq!(gsv.total_messages, 1);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 0);
        assert!(gsv.satellites.is_empty());
    }

    #[test]
    fn truncated_sentence_reads_as_fewer_groups() {
        // Some producers stop after the last populated group instead of
        // padding with empty placeholders.
        let fields = ["3", "3", "11", "29", "09", "301", "24", "16", "09", "020", ""];
        let gsv = GSV::decode(&fields).unwrap();

        assert_eq!(gsv.satellites.len(), 2);
        assert_eq!(gsv.satellites[1].prn, 16);
        assert_eq!(gsv.satellites[1].snr, -1);
    }
}
