//! EPS NAS Information Elements (IEs)
//!
//! This module contains implementations of EPS NAS Information Elements
//! as defined in 3GPP TS 24.301.

pub mod eps_network_feature_support;

pub use eps_network_feature_support::*;

/// IEI values assigned to these IEs by the TS 24.301 message tables
pub mod iei {
    /// EPS network feature support in Attach Accept (optional, Type 4, IEI 0x64)
    pub const EPS_NETWORK_FEATURE_SUPPORT: u8 = 0x64;
}
