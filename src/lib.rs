//! EPS NAS (Non-Access Stratum) information element library
//!
//! Implements 4G/LTE EPS NAS Information Element encoding/decoding as
//! defined in 3GPP TS 24.301.
//!
//! # Overview
//!
//! EPS NAS messages are built by concatenating Information Elements (IEs).
//! Each IE codec in this crate is a pure, stateless transform between an
//! in-memory typed value and its wire record inside the message octet
//! stream: the caller owns the buffer and the cursor, and every call
//! reports exactly how many octets it wrote or consumed.
//!
//! The same IE type may appear tagged (TLV, leading IEI octet) in one
//! message and untagged (LV) in another; the enclosing message's IE table
//! decides, expressed here as [`Presence`].
//!
//! # Example
//!
//! ```rust
//! use lte_nas::{IeDecode, IeEncode, IeEpsNetworkFeatureSupport, Presence};
//!
//! // Network advertises IMS voice over PS
//! let ie = IeEpsNetworkFeatureSupport::new(0x01);
//!
//! // Encode in tagged form, as in Attach Accept
//! let mut buf = Vec::new();
//! let written = ie.encode_ie(Presence::Tagged(0x64), &mut buf).unwrap();
//! assert_eq!(written, 3);
//! assert_eq!(buf, [0x64, 0x01, 0x01]);
//!
//! // Decode from bytes
//! let (decoded, consumed) =
//!     IeEpsNetworkFeatureSupport::decode_ie(Presence::Tagged(0x64), &mut buf.as_slice()).unwrap();
//! assert_eq!(decoded, ie);
//! assert_eq!(consumed, 3);
//! assert!(decoded.ims_vops());
//! ```

pub mod codec;
pub mod dump;
pub mod ies;


// Re-export commonly used types
pub use codec::{CodecError, CodecResult, IeDecode, IeEncode, Presence};
pub use dump::{log_ie_dump, log_ie_record, HexBytes, IeDump};
pub use ies::{iei, CsLcs, IeEpsNetworkFeatureSupport};
