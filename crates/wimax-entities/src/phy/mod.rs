pub mod ofdm_phy;
