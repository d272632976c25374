use core::fmt;

use wimax_core::Cid;

/// Bandwidth request type: aggregate replaces the BS's view of the queue,
/// incremental adds to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandwidthRequestType {
    Incremental,
    Aggregate,
}

/// Clause 6.3.2.1.2 Bandwidth request header
///
/// A standalone MAC PDU (HT = 1, no payload) requesting `br` bytes of
/// uplink bandwidth for the given connection.
#[derive(Debug, Clone)]
pub struct BandwidthRequestHeader {
    pub request_type: BandwidthRequestType,
    /// BR, 19 bits, requested bandwidth in bytes
    pub br: u32,
    pub cid: Cid,
    /// HCS, header check sequence
    pub hcs: u8,
}

impl BandwidthRequestHeader {
    /// Serialized size in bytes. A bandwidth request PDU is exactly this
    /// header and nothing else.
    pub const SERIALIZED_SIZE: u32 = 6;

    pub fn new(cid: Cid, br: u32) -> Self {
        BandwidthRequestHeader {
            request_type: BandwidthRequestType::Incremental,
            br,
            cid,
            hcs: 0,
        }
    }
}

impl fmt::Display for BandwidthRequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BandwidthRequestHeader {{ cid: {}, br: {} }}", self.cid, self.br)
    }
}
