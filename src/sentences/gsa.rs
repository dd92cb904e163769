use crate::{
    Error,
    fields::Fields,
    sentences::{Decode, FixMode, SelectionMode},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRN numbers of the satellites used in the fix, in emitted order.
    /// Empty slots among the twelve are skipped entirely, so the length is
    /// the count of satellites actually reported.
    pub satellite_ids: heapless::Vec<i32, 12>,
    /// Position dilution of precision; NaN when not reported
    pub pdop: f64,
    /// Horizontal dilution of precision; NaN when not reported
    pub hdop: f64,
    /// Vertical dilution of precision; NaN when not reported
    pub vdop: f64,
}

impl Decode for GSA {
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>> {
        let mut f = Fields::new(fields);

        let selection_mode = SelectionMode::from_code(f.code());
        let fix_mode = FixMode::from_code(f.code());

        let mut satellite_ids = heapless::Vec::new();
        for _ in 0..12 {
            let id = f.opt_i32()?;
            if id != -1 {
                // Cannot overflow: at most 12 slots feed a 12-capacity Vec.
                satellite_ids.push(id).ok();
            }
        }

        Ok(Self {
            selection_mode,
            fix_mode,
            satellite_ids,
            pdop: f.opt_f64()?,
            hdop: f.opt_f64()?,
            vdop: f.opt_f64()?,
        })
    }
}
