//! Configuration for a WiMAX subscriber station
//!
//! Describes the station's management CIDs, its provisioned service flows
//! and the uplink burst profile. Loaded from TOML; the MAC entities build
//! their live registries from this.

pub mod stack_config;
pub mod toml_config;

pub use stack_config::{CfgServiceFlow, CfgSubscriber};
pub use toml_config::{from_file, from_reader, from_toml_str};
