//! OFDM burst profiles shared between the PHY and the MAC
//!
//! The modulation type determines how many data bytes fit into one OFDM
//! symbol, which is what the scheduler's byte/symbol budget accounting
//! consumes. The conversion itself lives in the PHY entity.

/// Modulation and coding scheme of an OFDM burst profile (Clause 8.3.3.4.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ModulationType {
    Bpsk12,
    Qpsk12,
    Qpsk34,
    Qam16_12,
    Qam16_34,
    Qam64_23,
    Qam64_34,
}

/// Data subcarriers per OFDM symbol (256-FFT profile)
const DATA_SUBCARRIERS: u32 = 192;

impl ModulationType {
    /// Uncoded data bits carried by one OFDM symbol:
    /// subcarriers x bits-per-subcarrier x coding rate
    pub fn bits_per_symbol(self) -> u32 {
        match self {
            ModulationType::Bpsk12 => DATA_SUBCARRIERS / 2,
            ModulationType::Qpsk12 => DATA_SUBCARRIERS,
            ModulationType::Qpsk34 => DATA_SUBCARRIERS * 3 / 2,
            ModulationType::Qam16_12 => DATA_SUBCARRIERS * 2,
            ModulationType::Qam16_34 => DATA_SUBCARRIERS * 3,
            ModulationType::Qam64_23 => DATA_SUBCARRIERS * 4,
            ModulationType::Qam64_34 => DATA_SUBCARRIERS * 9 / 2,
        }
    }
}
