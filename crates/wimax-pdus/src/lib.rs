//! MAC header PDU definitions for the WiMAX subscriber-station MAC
//!
//! Covers the two MAC header formats of Clause 6.3.2.1 (generic and
//! bandwidth request) plus the fragmentation subheader. The scheduler only
//! consumes header sizes and kinds; full bit-level codecs live with the
//! outer MAC, not here.

pub mod bandwidth_request_header;
pub mod fragmentation_subheader;
pub mod generic_mac_header;
pub mod mac_header_type;

pub use bandwidth_request_header::BandwidthRequestHeader;
pub use fragmentation_subheader::{FragmentControl, FragmentationSubheader};
pub use generic_mac_header::GenericMacHeader;
pub use mac_header_type::MacHeaderKind;
