//! EPS NAS encoding/decoding traits and utilities
//!
//! This module provides the common contract for encoding and decoding EPS
//! NAS Information Elements (IEs) according to 3GPP TS 24.301.
//!
//! # Traits
//!
//! - [`IeEncode`]: Trait for encoding IEs into a byte buffer
//! - [`IeDecode`]: Trait for decoding IEs from a byte buffer
//!
//! Both operations are driven by a [`Presence`] mode: the same IE type may
//! appear tagged (TLV, with a leading IEI octet) in one message and untagged
//! (LV, at a fixed position) in another. The enclosing message's IE table
//! decides which applies; callers must pass the same mode on encode and
//! decode.
//!
//! # Example
//!
//! ```rust
//! use lte_nas::codec::{IeDecode, IeEncode, Presence};
//! use lte_nas::ies::IeEpsNetworkFeatureSupport;
//!
//! let ie = IeEpsNetworkFeatureSupport::new(0x01);
//! let mut buf = Vec::new();
//! let written = ie.encode_ie(Presence::Tagged(0x64), &mut buf).unwrap();
//! assert_eq!(written, 3);
//!
//! let (decoded, consumed) =
//!     IeEpsNetworkFeatureSupport::decode_ie(Presence::Tagged(0x64), &mut buf.as_slice()).unwrap();
//! assert_eq!(decoded, ie);
//! assert_eq!(consumed, written);
//! ```

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Errors that can occur during IE encoding/decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Buffer does not have enough bytes for the full IE record
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Expected minimum bytes
        expected: usize,
        /// Actual bytes available
        actual: usize,
    },

    /// Length indicator octet does not match the IE's value length
    #[error("Malformed length indicator: expected {expected}, got {actual}")]
    MalformedLength {
        /// Value length the IE requires
        expected: usize,
        /// Length indicated on the wire
        actual: usize,
    },

    /// IEI tag octet on the wire differs from the expected one
    #[error("Unexpected IEI: expected 0x{expected:02X}, got 0x{actual:02X}")]
    UnexpectedIei {
        /// IEI the caller supplied
        expected: u8,
        /// IEI read from the buffer
        actual: u8,
    },
}

/// Result type for IE codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Presence mode of an IE within its enclosing message.
///
/// Which mode applies to a given IE is fixed by the enclosing message's
/// IE table; the same mode must be passed on encode and decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The IE carries a leading IEI tag octet (TLV format)
    Tagged(u8),
    /// The IE appears at a fixed position without a tag (LV format)
    Untagged,
}

impl Presence {
    /// Number of octets the tag occupies in this mode (1 or 0)
    pub fn tag_len(self) -> usize {
        match self {
            Presence::Tagged(_) => 1,
            Presence::Untagged => 0,
        }
    }

    /// The IEI, if this mode carries one
    pub fn iei(self) -> Option<u8> {
        match self {
            Presence::Tagged(iei) => Some(iei),
            Presence::Untagged => None,
        }
    }
}

/// Trait for encoding Information Elements into a byte buffer
///
/// Implementations write the full wire record (optional IEI tag, length
/// indicator, value octets) and report the number of octets written. The
/// destination is checked up front: on [`CodecError::BufferTooShort`] no
/// partial record is observable.
pub trait IeEncode {
    /// Encode this IE into the buffer under the given presence mode
    ///
    /// # Returns
    /// * `Ok(written)` - octets written on success
    /// * `Err(CodecError)` if the buffer cannot hold the record
    fn encode_ie<B: BufMut>(&self, presence: Presence, buf: &mut B) -> CodecResult<usize>;

    /// Encoded record size in octets under the given presence mode
    fn encoded_len(&self, presence: Presence) -> usize;
}

/// Trait for decoding Information Elements from a byte buffer
///
/// Implementations parse one wire record and report the octets consumed.
/// A failed decode consumes nothing: the caller's cursor is only advanced
/// on success.
pub trait IeDecode: Sized {
    /// Decode one IE from the buffer under the given presence mode
    ///
    /// # Returns
    /// * `Ok((ie, consumed))` - the decoded value and octets consumed
    /// * `Err(CodecError)` if the record is truncated or malformed
    fn decode_ie<B: Buf>(presence: Presence, buf: &mut B) -> CodecResult<(Self, usize)>;
}

/// Write the optional IEI tag and the length-indicator octet of a TLV IE.
///
/// The caller has already verified that the buffer holds the full record.
/// Returns the number of header octets written.
pub fn encode_tlv_header<B: BufMut>(presence: Presence, value_len: u8, buf: &mut B) -> usize {
    let mut written = 0;
    if let Presence::Tagged(iei) = presence {
        buf.put_u8(iei);
        written += 1;
    }
    buf.put_u8(value_len);
    written + 1
}

/// Validate and consume the header of a fixed-value-length TLV IE record.
///
/// Checks that the full record (header plus `value_len` value octets) is
/// available, that the tag octet matches the expected IEI in tagged mode,
/// and that the length indicator equals `value_len`. On any failure the
/// buffer is left untouched. Returns the number of header octets consumed.
pub fn decode_tlv_header<B: Buf>(
    presence: Presence,
    value_len: usize,
    buf: &mut B,
) -> CodecResult<usize> {
    let header_len = presence.tag_len() + 1;
    let record_len = header_len + value_len;
    if buf.remaining() < record_len {
        return Err(CodecError::BufferTooShort {
            expected: record_len,
            actual: buf.remaining(),
        });
    }

    // Validate via the contiguous chunk so nothing is consumed on failure.
    let head = buf.chunk();
    let mut index = 0;
    if let Presence::Tagged(expected) = presence {
        let actual = head[index];
        if actual != expected {
            return Err(CodecError::UnexpectedIei { expected, actual });
        }
        index += 1;
    }
    let indicated = head[index] as usize;
    if indicated != value_len {
        return Err(CodecError::MalformedLength {
            expected: value_len,
            actual: indicated,
        });
    }

    buf.advance(header_len);
    Ok(header_len)
}

// ============================================================================
// Tests
// ============================================================================
