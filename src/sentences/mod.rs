//! # Sentence Types and Registry
//!
//! One module per supported sentence type, a [`Sentence`] sum type over all
//! of them, and the registry that maps a talker+type tag to its decoder.
//!
//! Unrecognized tags decode to [`Sentence::Unknown`] rather than an error:
//! forward compatibility with sentence types this crate has never heard of
//! is a hard requirement, and the raw tag and field list remain available
//! on the surrounding [`Message`](crate::Message).

mod bod;
mod garmin;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmb;
mod rmc;
mod trimble;

pub use bod::BOD;
pub use garmin::{PGRME, PGRMZ};
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::GSV;
pub use rmb::RMB;
pub use rmc::RMC;
pub use trimble::{PTNLA, PTNLB};

use crate::Error;

/// A trait for sentence payloads decodable from a comma-split field list.
///
/// Decoders are pure functions over the ordered field list: field order is
/// fixed per sentence type and not self-describing, so decoding is strictly
/// positional. A sentence shorter than the decoder expects is not an error;
/// the missing trailing fields decode as absent.
pub trait Decode: Sized {
    /// Decodes the field list (tag and checksum already stripped) into a
    /// typed record.
    fn decode<'a>(fields: &[&'a str]) -> Result<Self, Error<'a>>;
}

/// A unified enum over all supported NMEA 0183 sentence types.
///
/// Selected by tag lookup in [`Sentence::decode`]; matching on this enum is
/// exhaustive, so adding a sentence type is a compile-checked change for
/// downstream consumers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// Bearing Origin to Destination
    BOD(BOD),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// Garmin Estimated Error Information
    PGRME(PGRME),
    /// Garmin Altitude Information
    PGRMZ(PGRMZ),
    /// Trimble Laser Range Measurement (horizontal vector)
    PTNLA(PTNLA),
    /// Trimble Laser Range Measurement (tree height)
    PTNLB(PTNLB),
    /// Recommended Minimum Navigation Information, waypoint to destination
    RMB(RMB),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Any well-formed sentence whose tag no decoder claims
    Unknown,
}

impl Sentence {
    /// Looks up the decoder for `tag` and runs it over `fields`.
    ///
    /// Standard tags are a two-character talker followed by a
    /// three-character sentence type (`GPRMC`); matching is on the sentence
    /// type alone so every talker benefits from every decoder. Proprietary
    /// tags start with `P` and dispatch per manufacturer. No match yields
    /// [`Sentence::Unknown`], never an error.
    pub fn decode<'a>(tag: &'a str, fields: &[&'a str]) -> Result<Self, Error<'a>> {
        if let Some(code) = tag.strip_prefix('P') {
            return Self::decode_proprietary(code, fields);
        }

        if tag.len() != 5 {
            return Ok(Self::Unknown);
        }

        Ok(match &tag[2..] {
            "BOD" => Self::BOD(BOD::decode(fields)?),
            "GGA" => Self::GGA(GGA::decode(fields)?),
            "GLL" => Self::GLL(GLL::decode(fields)?),
            "GSA" => Self::GSA(GSA::decode(fields)?),
            "GSV" => Self::GSV(GSV::decode(fields)?),
            "RMB" => Self::RMB(RMB::decode(fields)?),
            "RMC" => Self::RMC(RMC::decode(fields)?),
            _ => Self::Unknown,
        })
    }

    /// Two-level proprietary dispatch: the three-character manufacturer
    /// code selects a vendor module, which then matches the sentence code
    /// that follows it.
    fn decode_proprietary<'a>(code: &'a str, fields: &[&'a str]) -> Result<Self, Error<'a>> {
        if code.len() < 3 {
            return Ok(Self::Unknown);
        }

        let (manufacturer, sentence) = code.split_at(3);
        let decoded = match manufacturer {
            "GRM" => garmin::decode(sentence, fields)?,
            "TNL" => trimble::decode(sentence, fields)?,
            _ => None,
        };

        Ok(decoded.unwrap_or(Self::Unknown))
    }
}

// The `;` separates the mapped variants from the fallback arm; a plain `,`
// would leave the macro parser unable to tell whose attributes a doc
// comment belongs to.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* ;
            $(#[$default_meta:meta])*
            _ => $default:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            $(#[$default_meta])*
            $default,
        }

        impl $name {
            /// Maps a single-character field code to a variant.
            ///
            /// Unrecognized or missing codes map to the fallback variant,
            /// never to an error, to tolerate vendor variance.
            pub fn from_code(code: Option<char>) -> Self {
                match code {
                    $(Some($char) => Self::$variant,)*
                    _ => Self::$default,
                }
            }
        }
    };
}

code_enum! {
    /// Data Status Indicator
    pub enum DataStatus {
        /// A - Data valid
        'A' => Valid;
        /// V - Navigation receiver warning; unrecognized codes read as a
        /// warning too
        _ => Warning,
    }
}

code_enum! {
    /// Quality of the GPS fix
    pub enum FixQuality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GPSFix,
        /// 2 - Differential GPS fix
        '2' => DGPSFix,
        /// 3 - PPS fix
        '3' => PPSFix,
        /// 4 - Real Time Kinematic
        '4' => RTK,
        /// 5 - Float RTK
        '5' => FloatRTK,
        /// 6 - Estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation;
        /// Vendor-specific or missing quality codes
        _ => Unknown,
    }
}

code_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual;
        _ => Unknown,
    }
}

code_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D fix
        '2' => Fix2D,
        /// 3 - 3D fix
        '3' => Fix3D;
        _ => Unknown,
    }
}

/// Satellite information used in [`GSV`] sentences.
///
/// Any of the sub-fields may be unreported; -1 marks the missing ones. A
/// signal-to-noise ratio of 0 is a genuine reading, distinct from -1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteInfo {
    /// Pseudo-random noise code identifying the satellite
    pub prn: i32,
    /// Elevation in degrees, 90 maximum
    pub elevation: i32,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: i32,
    /// Signal-to-noise ratio in dB, 00 to 99
    pub snr: i32,
}
