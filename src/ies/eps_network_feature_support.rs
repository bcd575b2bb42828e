//! EPS Network Feature Support IE (3GPP TS 24.301 Section 9.9.3.12A)
//!
//! Sent by the network in Attach Accept and Tracking Area Update Accept to
//! advertise which optional EPS features the PLMN supports. The value is a
//! single octet of feature flags carried in TLV format with a fixed length
//! of 1.

use std::fmt;

use bytes::{Buf, BufMut};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::codec::{
    decode_tlv_header, encode_tlv_header, CodecError, CodecResult, IeDecode, IeEncode, Presence,
};
use crate::dump::IeDump;

/// Support of location services via the CS domain (octet 3, bits 5-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CsLcs {
    /// No information about support of location services via CS domain
    #[default]
    NoInformation = 0x00,
    /// Location services via CS domain supported
    Supported = 0x01,
    /// Location services via CS domain not supported
    NotSupported = 0x02,
    /// Reserved
    Reserved = 0x03,
}

/// EPS Network Feature Support IE (Type 4, TLV, 1-byte value)
///
/// The flag octet is carried opaquely by the codec; bit meanings follow
/// 3GPP TS 24.301 Section 9.9.3.12A and are exposed through the accessor
/// methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IeEpsNetworkFeatureSupport {
    /// Feature support flags (octet 3)
    pub flags: u8,
}

impl IeEpsNetworkFeatureSupport {
    /// Minimum encoded length in octets (tagged form)
    pub const MINIMUM_LENGTH: usize = 3;
    /// Maximum encoded length in octets (tagged form)
    pub const MAXIMUM_LENGTH: usize = 3;

    /// Fixed length of the value part in octets
    const VALUE_LENGTH: usize = 1;

    /// Create a new EPS Network Feature Support IE from raw flags
    pub fn new(flags: u8) -> Self {
        Self { flags }
    }

    /// IMS voice over PS session in S1 mode supported (octet 3, bit 1)
    pub fn ims_vops(&self) -> bool {
        self.flags & 0x01 != 0
    }

    /// Emergency bearer services in S1 mode supported (octet 3, bit 2)
    pub fn emc_bs(&self) -> bool {
        self.flags & 0x02 != 0
    }

    /// Location services via EPC supported (octet 3, bit 3)
    pub fn epc_lcs(&self) -> bool {
        self.flags & 0x04 != 0
    }

    /// Support of location services via the CS domain (octet 3, bits 5-4)
    pub fn cs_lcs(&self) -> CsLcs {
        CsLcs::try_from((self.flags >> 3) & 0x03).unwrap_or(CsLcs::NoInformation)
    }
}

impl IeEncode for IeEpsNetworkFeatureSupport {
    fn encode_ie<B: BufMut>(&self, presence: Presence, buf: &mut B) -> CodecResult<usize> {
        let record_len = self.encoded_len(presence);
        if buf.remaining_mut() < record_len {
            return Err(CodecError::BufferTooShort {
                expected: record_len,
                actual: buf.remaining_mut(),
            });
        }

        let written = encode_tlv_header(presence, Self::VALUE_LENGTH as u8, buf);
        buf.put_u8(self.flags);
        Ok(written + Self::VALUE_LENGTH)
    }

    fn encoded_len(&self, presence: Presence) -> usize {
        presence.tag_len() + 1 + Self::VALUE_LENGTH
    }
}

impl IeDecode for IeEpsNetworkFeatureSupport {
    fn decode_ie<B: Buf>(presence: Presence, buf: &mut B) -> CodecResult<(Self, usize)> {
        let header = decode_tlv_header(presence, Self::VALUE_LENGTH, buf)?;
        let flags = buf.get_u8();
        Ok((Self { flags }, header + Self::VALUE_LENGTH))
    }
}

impl IeDump for IeEpsNetworkFeatureSupport {
    fn dump_xml<W: fmt::Write>(&self, presence: Presence, out: &mut W) {
        let _ = writeln!(out, "<Eps Network Feature Support>");
        if let Some(iei) = presence.iei() {
            let _ = writeln!(out, "    <IEI>0x{iei:02X}</IEI>");
        }
        let _ = writeln!(out, "    <Length>{}</Length>", Self::VALUE_LENGTH);
        let _ = writeln!(out, "    <Value>0x{:02X}</Value>", self.flags);
        let _ = writeln!(out, "</Eps Network Feature Support>");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let ie = IeEpsNetworkFeatureSupport::new(0x01);
        assert_eq!(ie.flags, 0x01);
    }

    #[test]
    fn test_flag_accessors() {
        let ie = IeEpsNetworkFeatureSupport::new(0x07);
        assert!(ie.ims_vops());
        assert!(ie.emc_bs());
        assert!(ie.epc_lcs());
        assert_eq!(ie.cs_lcs(), CsLcs::NoInformation);

        let ie = IeEpsNetworkFeatureSupport::new(0x08);
        assert!(!ie.ims_vops());
        assert_eq!(ie.cs_lcs(), CsLcs::Supported);

        let ie = IeEpsNetworkFeatureSupport::new(0x10);
        assert_eq!(ie.cs_lcs(), CsLcs::NotSupported);

        let ie = IeEpsNetworkFeatureSupport::new(0x18);
        assert_eq!(ie.cs_lcs(), CsLcs::Reserved);
    }

    #[test]
    fn test_encode_tagged() {
        let ie = IeEpsNetworkFeatureSupport::new(0x01);
        let mut storage = [0u8; 3];
        let mut buf = &mut storage[..];
        let written = ie.encode_ie(Presence::Tagged(0x64), &mut buf).unwrap();
        assert_eq!(written, 3);
        assert_eq!(storage, [0x64, 0x01, 0x01]);
    }

    #[test]
    fn test_encode_untagged() {
        let ie = IeEpsNetworkFeatureSupport::new(0xFF);
        let mut storage = [0u8; 2];
        let mut buf = &mut storage[..];
        let written = ie.encode_ie(Presence::Untagged, &mut buf).unwrap();
        assert_eq!(written, 2);
        assert_eq!(storage, [0x01, 0xFF]);
    }

    #[test]
    fn test_encode_buffer_too_short_writes_nothing() {
        let ie = IeEpsNetworkFeatureSupport::new(0x01);
        let mut storage = [0u8; 2];
        let mut buf = &mut storage[..];
        let result = ie.encode_ie(Presence::Tagged(0x64), &mut buf);
        assert_eq!(
            result,
            Err(CodecError::BufferTooShort {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(storage, [0x00, 0x00]);
    }

    #[test]
    fn test_encode_untagged_buffer_too_short() {
        let ie = IeEpsNetworkFeatureSupport::new(0x01);
        let mut storage = [0u8; 1];
        let mut buf = &mut storage[..];
        let result = ie.encode_ie(Presence::Untagged, &mut buf);
        assert_eq!(
            result,
            Err(CodecError::BufferTooShort {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(storage, [0x00]);
    }

    #[test]
    fn test_decode_tagged() {
        let record = [0x64, 0x01, 0x01];
        let mut buf = &record[..];
        let (ie, consumed) =
            IeEpsNetworkFeatureSupport::decode_ie(Presence::Tagged(0x64), &mut buf).unwrap();
        assert_eq!(ie.flags, 0x01);
        assert_eq!(consumed, 3);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_decode_untagged() {
        let record = [0x01, 0xFF];
        let mut buf = &record[..];
        let (ie, consumed) =
            IeEpsNetworkFeatureSupport::decode_ie(Presence::Untagged, &mut buf).unwrap();
        assert_eq!(ie.flags, 0xFF);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_decode_buffer_too_short_consumes_nothing() {
        let record = [0x64, 0x01];
        let mut buf = &record[..];
        let result = IeEpsNetworkFeatureSupport::decode_ie(Presence::Tagged(0x64), &mut buf);
        assert_eq!(
            result,
            Err(CodecError::BufferTooShort {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(buf.remaining(), 2);
    }

    #[test]
    fn test_decode_malformed_length_zero() {
        let record = [0x64, 0x00, 0x01];
        let mut buf = &record[..];
        let result = IeEpsNetworkFeatureSupport::decode_ie(Presence::Tagged(0x64), &mut buf);
        assert_eq!(
            result,
            Err(CodecError::MalformedLength {
                expected: 1,
                actual: 0
            })
        );
        // The value octet is never consumed.
        assert_eq!(buf.remaining(), 3);
    }

    #[test]
    fn test_decode_malformed_length_two() {
        let record = [0x02, 0xFF, 0x00];
        let mut buf = &record[..];
        let result = IeEpsNetworkFeatureSupport::decode_ie(Presence::Untagged, &mut buf);
        assert_eq!(
            result,
            Err(CodecError::MalformedLength {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(buf.remaining(), 3);
    }

    #[test]
    fn test_decode_unexpected_iei() {
        let record = [0x65, 0x01, 0x01];
        let mut buf = &record[..];
        let result = IeEpsNetworkFeatureSupport::decode_ie(Presence::Tagged(0x64), &mut buf);
        assert_eq!(
            result,
            Err(CodecError::UnexpectedIei {
                expected: 0x64,
                actual: 0x65
            })
        );
        assert_eq!(buf.remaining(), 3);
    }

    #[test]
    fn test_encoded_len() {
        let ie = IeEpsNetworkFeatureSupport::new(0x00);
        assert_eq!(ie.encoded_len(Presence::Tagged(0x64)), 3);
        assert_eq!(ie.encoded_len(Presence::Untagged), 2);
        assert_eq!(
            ie.encoded_len(Presence::Tagged(0x64)),
            IeEpsNetworkFeatureSupport::MINIMUM_LENGTH
        );
        assert_eq!(
            IeEpsNetworkFeatureSupport::MINIMUM_LENGTH,
            IeEpsNetworkFeatureSupport::MAXIMUM_LENGTH
        );
    }

    #[test]
    fn test_dump_xml_tagged() {
        let ie = IeEpsNetworkFeatureSupport::new(0x01);
        let dump = ie.dump_string(Presence::Tagged(0x64));
        assert!(dump.contains("<IEI>0x64</IEI>"));
        assert!(dump.contains("<Length>1</Length>"));
        assert!(dump.contains("<Value>0x01</Value>"));
    }

    #[test]
    fn test_dump_xml_untagged_omits_iei() {
        let ie = IeEpsNetworkFeatureSupport::new(0xFF);
        let dump = ie.dump_string(Presence::Untagged);
        assert!(!dump.contains("<IEI>"));
        assert!(dump.contains("<Value>0xFF</Value>"));
    }

    #[test]
    fn test_dump_is_idempotent() {
        let ie = IeEpsNetworkFeatureSupport::new(0x5A);
        let first = ie.dump_string(Presence::Tagged(0x64));
        let second = ie.dump_string(Presence::Tagged(0x64));
        assert_eq!(first, second);
        assert_eq!(ie.flags, 0x5A);
    }
}
