//! Diagnostic dumps for information elements
//!
//! Best-effort structured dumps of IE contents for logging and
//! interoperability testing. Nothing here is on the encode/decode path;
//! formatting failures are swallowed rather than propagated.

use std::fmt;

use crate::codec::Presence;

/// Trait for dumping an IE as structured tag/value text
pub trait IeDump {
    /// Write a structured dump of this IE to the sink.
    ///
    /// The IEI element is only emitted in tagged mode. Write errors are
    /// ignored.
    fn dump_xml<W: fmt::Write>(&self, presence: Presence, out: &mut W);

    /// Render the dump into a fresh `String`
    fn dump_string(&self, presence: Presence) -> String {
        let mut out = String::new();
        self.dump_xml(presence, &mut out);
        out
    }
}

/// Emit an IE dump at trace level.
///
/// A no-op unless a `tracing` subscriber is installed.
pub fn log_ie_dump<T: IeDump>(ie: &T, presence: Presence) {
    tracing::trace!(dump = %ie.dump_string(presence), "IE dump");
}

/// Log a raw encoded IE record at trace level with a hex payload.
pub fn log_ie_record(name: &str, data: &[u8]) {
    tracing::trace!(ie = name, len = data.len(), hex = %HexBytes(data), "IE record");
}

/// Wrapper for hex dump formatting
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
