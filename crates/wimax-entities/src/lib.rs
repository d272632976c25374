//! Live MAC entities of the WiMAX subscriber station
//!
//! The `mac` module holds the per-connection packet queues, the connection
//! and service-flow registries, and the uplink scheduler subcomponent. The
//! `phy` module holds the byte/symbol capacity conversion the scheduler's
//! budget accounting consumes.

pub mod mac;
pub mod phy;
