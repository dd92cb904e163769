//! # NMEA Messages
//!
//! This library decodes NMEA 0183 sentences (single-line, comma-delimited
//! ASCII messages in the format `$HHH,D1,D2,...,Dn*CC`) into strongly-typed
//! [`Message`] values.
//!
//! The parser is deliberately permissive, matching how sentences look in
//! real-world capture files rather than how the standard says they should:
//! - A mismatched checksum is flagged on the result, not raised as an
//!   error, so the caller decides whether to keep corrupt-but-parseable data.
//! - A missing checksum trailer skips validation entirely.
//! - Unrecognized sentence tags decode to [`Sentence::Unknown`] with the
//!   raw tag and fields preserved.
//! - Missing optional fields decode to sentinel values (NaN for floats,
//!   -1 for integers), never to zero and never to an error.
//!
//! Parsing is pure and stateless: one call decodes one complete sentence,
//! and calls never affect each other, so sentences from multiple sources
//! may be parsed concurrently without coordination.
//!
//! ## Usage
//!
//! ```rust
//! use nmea_messages::{ChecksumStatus, Sentence, parse};
//!
//! let msg = parse("$GPGLL,4916.45,N,12311.12,W,225444,A,*1D").unwrap();
//!
//! assert_eq!(msg.message_type, "GPGLL");
//! assert_eq!(msg.checksum, ChecksumStatus::Valid);
//! match msg.sentence {
//!     Sentence::GLL(gll) => {
//!         assert!(gll.data_active);
//!         assert!((gll.latitude - 49.2741666667).abs() < 1e-9);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod error;
pub mod fields;
mod frame;
pub mod sentences;

pub use error::Error;
pub use frame::ChecksumStatus;
pub use sentences::*;

/// One decoded NMEA message.
///
/// Created fresh per [`parse`] call and never mutated afterwards. Alongside
/// the typed [`Sentence`], the raw tag and the raw comma-split field list
/// are kept so callers can inspect sentences the typed layer does not
/// cover.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Message<'a> {
    /// The talker+type tag exactly as transmitted, e.g. `GPRMC` or `PGRME`
    pub message_type: &'a str,
    /// The raw field list the typed sentence was built from
    pub fields: Vec<&'a str>,
    /// Outcome of checksum validation
    pub checksum: ChecksumStatus,
    /// The typed payload
    pub sentence: Sentence,
}

/// Parses one complete, newline-free NMEA sentence line.
///
/// The line must start with `$` (standard) or `!` (AIS-style framing) and
/// may end with a `*HH` checksum trailer; a trailing CR/LF pair is
/// tolerated. Splitting a capture into individual lines and discarding
/// non-sentence lines is the caller's concern.
///
/// # Errors
///
/// Only structural damage is fatal: a missing marker, a body without any
/// comma-delimited fields, a malformed checksum trailer, or non-empty
/// garbage in a field that mandates a number. Checksum mismatches and
/// unknown sentence types are not errors; see [`ChecksumStatus`] and
/// [`Sentence::Unknown`].
pub fn parse(line: &str) -> Result<Message<'_>, Error<'_>> {
    let frame = frame::split(line)?;

    let mut parts = frame.body.split(',');
    let message_type = parts.next().unwrap_or("");
    let fields: Vec<&str> = parts.collect();
    if fields.is_empty() {
        return Err(Error::MissingFields(message_type));
    }

    let sentence = Sentence::decode(message_type, &fields)?;

    Ok(Message {
        message_type,
        fields,
        checksum: frame.checksum,
        sentence,
    })
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
