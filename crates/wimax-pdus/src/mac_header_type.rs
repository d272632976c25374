
/// The HT bit of a MAC header: distinguishes ordinary data PDUs from
/// bandwidth-request-only PDUs. This is the packet-type filter the queue
/// and the scheduler operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacHeaderKind {
    /// HT = 0, generic MAC header followed by a payload
    Generic,
    /// HT = 1, bandwidth request header, never carries a payload
    BandwidthRequest,
}

impl core::fmt::Display for MacHeaderKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MacHeaderKind::Generic => write!(f, "Generic"),
            MacHeaderKind::BandwidthRequest => write!(f, "BwReq"),
        }
    }
}
