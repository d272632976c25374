use core::fmt;

/// FC field of the fragmentation subheader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentControl {
    Unfragmented,
    /// Last fragment of an SDU
    Last,
    /// First fragment of an SDU
    First,
    /// Continuing fragment, neither first nor last
    Middle,
}

/// Clause 6.3.2.2.1 Fragmentation subheader
///
/// Inserted after the generic MAC header once a packet is split across
/// uplink opportunities. Its 2-byte cost is the overhead the scheduler
/// weighs before starting fragmentation.
#[derive(Debug, Clone)]
pub struct FragmentationSubheader {
    pub fc: FragmentControl,
    /// FSN, fragment sequence number
    pub fsn: u8,
}

impl FragmentationSubheader {
    /// Serialized size in bytes
    pub const SERIALIZED_SIZE: u32 = 2;

    pub fn new(fc: FragmentControl, fsn: u8) -> Self {
        FragmentationSubheader { fc, fsn }
    }
}

impl fmt::Display for FragmentationSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FragmentationSubheader {{ fc: {:?}, fsn: {} }}", self.fc, self.fsn)
    }
}
