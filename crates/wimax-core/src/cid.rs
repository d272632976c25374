
/// Connection class tag. The class set of 802.16 is fixed, so this is a
/// closed enum and class-specific behavior is resolved by exhaustive match.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum CidType {
    /// Contention-based initial ranging, shared by all stations
    InitialRanging,
    /// Per-station management connection for short, delay-intolerant messages
    Basic,
    /// Per-station management connection for longer, delay-tolerant messages
    Primary,
    /// Data connection bound to a service flow
    Transport,
    Broadcast,
}

impl core::fmt::Display for CidType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CidType::InitialRanging => write!(f, "InitialRanging"),
            CidType::Basic => write!(f, "Basic"),
            CidType::Primary => write!(f, "Primary"),
            CidType::Transport => write!(f, "Transport"),
            CidType::Broadcast => write!(f, "Broadcast"),
        }
    }
}

/// 16-bit connection identifier
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct Cid {
    pub id: u16,
}

/// CID reserved for initial ranging
pub const CID_INITIAL_RANGING: u16 = 0;

/// CID reserved for broadcast
pub const CID_BROADCAST: u16 = 0xFFFF;

impl Cid {
    pub fn new(id: u16) -> Self {
        Self { id }
    }

    pub fn initial_ranging() -> Self {
        Self::new(CID_INITIAL_RANGING)
    }

    pub fn broadcast() -> Self {
        Self::new(CID_BROADCAST)
    }
}

impl core::fmt::Display for Cid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.id)
    }
}
