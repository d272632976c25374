//! Core utilities for the WiMAX subscriber-station MAC
//!
//! This crate provides fundamental types used across the stack:
//! - Cid and connection class tags
//! - MacTime for MAC-layer timing
//! - ModulationType for the OFDM burst profiles
//! - Debug and logging utilities

pub mod cid;
pub mod debug;
pub mod mac_time;
pub mod modulation;
pub mod scheduling_type;

// Re-export commonly used items
pub use cid::{Cid, CidType};
pub use mac_time::MacTime;
pub use modulation::ModulationType;
pub use scheduling_type::SchedulingType;

/// Service flow identifier, assigned by the BS at flow creation
pub type Sfid = u32;
