use wimax_core::ModulationType;

/// Byte/symbol capacity conversion for the OFDM PHY.
///
/// The scheduler's budget accounting works in symbols at the grant boundary
/// and in bytes inside a frame; the two directions must be mutually
/// consistent, which here means `nr_symbols` rounds up so that
/// `nr_bytes(nr_symbols(b)) >= b` always holds.
#[derive(Debug, Clone)]
pub struct OfdmPhy {
    frame_duration_ms: u64,
}

impl OfdmPhy {
    pub fn new(frame_duration_ms: u64) -> Self {
        OfdmPhy { frame_duration_ms }
    }

    pub fn frame_duration_ms(&self) -> u64 {
        self.frame_duration_ms
    }

    /// Data bytes carried by `symbols` OFDM symbols under the given profile
    pub fn nr_bytes(&self, symbols: u16, modulation: ModulationType) -> u32 {
        symbols as u32 * modulation.bits_per_symbol() / 8
    }

    /// OFDM symbols needed for `bytes` data bytes under the given profile,
    /// rounded up to whole symbols
    pub fn nr_symbols(&self, bytes: u32, modulation: ModulationType) -> u16 {
        let bits_per_symbol = modulation.bits_per_symbol();
        ((bytes * 8).div_ceil(bits_per_symbol)) as u16
    }
}
