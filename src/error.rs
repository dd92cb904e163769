//! # Error Types
//!
//! This module defines the fatal error type returned by [`parse`](crate::parse).
//!
//! Only structurally unrecoverable conditions are errors. A mismatched
//! checksum is reported through [`ChecksumStatus`](crate::ChecksumStatus) on
//! the parsed message, and an unrecognized sentence tag decodes to
//! [`Sentence::Unknown`](crate::Sentence::Unknown); neither surfaces here.

/// Represents the ways a single sentence can fail to decode.
///
/// Every variant is local to one `parse` call; a failed sentence has no
/// effect on any other call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<'a> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences are ASCII-only; anything else cannot be checksummed
    /// or field-split meaningfully.
    #[error("input contains non-ASCII characters")]
    NonAscii,

    /// The input does not start with a `$` or `!` marker.
    #[error("sentence does not start with `$` or `!`")]
    MissingMarker,

    /// The sentence body has no comma-delimited fields at all.
    ///
    /// Contains the tag portion of the body for reference.
    #[error("sentence `{0}` has no fields")]
    MissingFields(&'a str),

    /// A `*` checksum delimiter is present but not followed by exactly two
    /// hexadecimal digits.
    #[error("checksum `{0}` is not two hex digits")]
    InvalidChecksum(&'a str),

    /// A field that must carry a value of a particular shape holds
    /// something else.
    ///
    /// Empty fields never produce this error; they decode to the sentinel
    /// value for their type. Only non-empty, unparseable content does.
    #[error("`{value}` is not a valid {expected}")]
    InvalidField {
        /// The raw field content that failed to parse
        value: &'a str,
        /// A short description of what was expected
        expected: &'static str,
    },
}
