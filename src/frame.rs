//! # Sentence Framing
//!
//! This module strips the outer structure of an NMEA 0183 sentence: the
//! leading `$`/`!` marker, an optional trailing CR/LF pair, and the optional
//! `*HH` checksum trailer. What remains is the comma-delimited body handed
//! to the sentence decoders.
//!
//! Checksum validation is deliberately non-fatal. Corruption on serial
//! links is common enough that a structurally parseable sentence with a bad
//! checksum is still decoded; the outcome of validation travels with the
//! message as a [`ChecksumStatus`] and the caller decides whether to keep
//! the data.

use nom::{
    Parser,
    bytes::complete::take_until,
    character::complete::{char, hex_digit1, one_of},
    combinator::all_consuming,
    number::complete::hex_u32,
    sequence::terminated,
};

use crate::Error;

type NomResult<'a, O> = nom::IResult<&'a str, O, nom::error::Error<&'a str>>;

/// Outcome of checksum validation for one sentence.
///
/// A [`Mismatch`](ChecksumStatus::Mismatch) never aborts parsing; the typed
/// result is still produced so the caller can choose between discarding
/// marginally-corrupt data and keeping a best-effort decode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// The trailing checksum matched the XOR of the sentence body.
    Valid,
    /// A checksum was present but did not match the sentence body.
    Mismatch {
        /// The checksum calculated from the body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },
    /// The sentence carried no `*HH` trailer, so validation was skipped.
    ///
    /// Some producers and capture files omit checksums entirely; that is
    /// not an error.
    Absent,
}

impl ChecksumStatus {
    /// Returns `true` if a checksum was present and did not match.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ChecksumStatus::Mismatch { .. })
    }
}

/// A sentence with its framing removed.
#[derive(Debug, PartialEq)]
pub(crate) struct Frame<'a> {
    /// Everything between the marker and the `*` delimiter (or end of line)
    pub body: &'a str,
    pub checksum: ChecksumStatus,
}

/// Strips the marker and checksum trailer from a raw sentence line.
///
/// The line must be ASCII and begin with `$` or `!`. A trailing `\r\n` is
/// tolerated so capture files can be fed line-by-line without trimming.
pub(crate) fn split(line: &str) -> Result<Frame<'_>, Error<'_>> {
    if !line.is_ascii() {
        return Err(Error::NonAscii);
    }

    let line = line.trim_end_matches(['\r', '\n']);
    let (i, _) = marker(line).map_err(|_| Error::MissingMarker)?;

    match before_delimiter(i) {
        Ok((given, body)) => {
            let found = checksum_value(given)?;
            let expected = checksum(body);
            let status = if found == expected {
                ChecksumStatus::Valid
            } else {
                ChecksumStatus::Mismatch { expected, found }
            };
            Ok(Frame {
                body,
                checksum: status,
            })
        }
        // No `*` anywhere: the whole remainder is the body.
        Err(_) => Ok(Frame {
            body: i,
            checksum: ChecksumStatus::Absent,
        }),
    }
}

fn marker(i: &str) -> NomResult<'_, char> {
    one_of("$!").parse(i)
}

fn before_delimiter(i: &str) -> NomResult<'_, &str> {
    terminated(take_until("*"), char('*')).parse(i)
}

/// Parses the two hex digits that follow the `*` delimiter.
fn checksum_value(given: &str) -> Result<u8, Error<'_>> {
    let digits: NomResult<'_, &str> = all_consuming(hex_digit1).parse(given);
    match digits {
        Ok((_, digits)) if digits.len() == 2 => {
            let value: NomResult<'_, u32> = hex_u32.parse(digits);
            match value {
                Ok((_, value)) => Ok(value as u8),
                Err(_) => Err(Error::InvalidChecksum(given)),
            }
        }
        _ => Err(Error::InvalidChecksum(given)),
    }
}

/// Calculates the NMEA 0183 checksum: the XOR of every byte between the
/// `$`/`!` marker and the `*` delimiter, excluding both.
fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |xor, byte| xor ^ byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_checksum() {
        let frame = split("$GPGLL,3751.65,S,14507.36,E*77").unwrap();
        assert_eq!(frame.body, "GPGLL,3751.65,S,14507.36,E");
        assert_eq!(frame.checksum, ChecksumStatus::Valid);
    }

    #[test]
    fn crlf_is_tolerated() {
        let frame = split("$GPGLL,3751.65,S,14507.36,E*77\r\n").unwrap();
        assert_eq!(frame.checksum, ChecksumStatus::Valid);
    }

    #[test]
    fn flipped_bit_is_flagged_not_fatal() {
        // Same sentence with one body character changed.
        let frame = split("$GPGLL,3751.65,N,14507.36,E*77").unwrap();
        assert_eq!(frame.body, "GPGLL,3751.65,N,14507.36,E");
        assert!(frame.checksum.is_mismatch());
    }

    #[test]
    fn missing_checksum_is_absent() {
        let frame = split("$GPGLL,3751.65,S,14507.36,E").unwrap();
        assert_eq!(frame.checksum, ChecksumStatus::Absent);
        assert!(!frame.checksum.is_mismatch());
    }

    #[test]
    fn bang_marker_is_accepted() {
        let frame = split("!AIVDM,1,1,,A,13u?etPv2;0n:dDPwUM1U1Cb069D,0").unwrap();
        assert_eq!(frame.checksum, ChecksumStatus::Absent);
    }

    #[test]
    fn malformed_checksum_digits() {
        assert_eq!(
            split("$GPGLL,3751.65,S,14507.36,E*7"),
            Err(Error::InvalidChecksum("7"))
        );
        assert_eq!(
            split("$GPGLL,3751.65,S,14507.36,E*XY"),
            Err(Error::InvalidChecksum("XY"))
        );
        assert_eq!(
            split("$GPGLL,3751.65,S,14507.36,E*777"),
            Err(Error::InvalidChecksum("777"))
        );
    }

    #[test]
    fn missing_marker() {
        assert_eq!(split("GPGLL,3751.65,S,14507.36,E*77"), Err(Error::MissingMarker));
        assert_eq!(split(""), Err(Error::MissingMarker));
    }

    #[test]
    fn non_ascii_input() {
        assert_eq!(split("$GPGLL,37°51.65,S*77"), Err(Error::NonAscii));
    }
}
