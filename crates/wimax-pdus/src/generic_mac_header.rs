use core::fmt;

use wimax_core::Cid;

/// Clause 6.3.2.1.1 Generic MAC header
///
/// Prefixes every MAC PDU that carries a payload. LEN covers the full PDU
/// including this header and any subheaders.
#[derive(Debug, Clone)]
pub struct GenericMacHeader {
    /// CI, CRC indicator
    pub ci: bool,
    /// EKS, encryption key sequence
    pub eks: u8,
    /// Type field, bit 4 flags a fragmentation subheader
    pub type_field: u8,
    /// LEN, 11 bits, length of the PDU in bytes
    pub len: u16,
    pub cid: Cid,
    /// HCS, header check sequence
    pub hcs: u8,
}

/// Type field bit indicating a fragmentation subheader is present
pub const TYPE_BIT_FRAGMENTATION: u8 = 0b0001_0000;

impl GenericMacHeader {
    /// Serialized size in bytes
    pub const SERIALIZED_SIZE: u32 = 6;

    pub fn new(cid: Cid, len: u16) -> Self {
        GenericMacHeader {
            ci: false,
            eks: 0,
            type_field: 0,
            len,
            cid,
            hcs: 0,
        }
    }

    pub fn has_fragmentation_subheader(&self) -> bool {
        self.type_field & TYPE_BIT_FRAGMENTATION != 0
    }

    pub fn set_fragmentation_subheader(&mut self, present: bool) {
        if present {
            self.type_field |= TYPE_BIT_FRAGMENTATION;
        } else {
            self.type_field &= !TYPE_BIT_FRAGMENTATION;
        }
    }
}

impl fmt::Display for GenericMacHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericMacHeader {{ cid: {}, len: {} }}", self.cid, self.len)
    }
}
