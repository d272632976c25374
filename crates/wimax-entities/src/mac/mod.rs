pub mod connection;
pub mod mac_queue;
pub mod service_flow;
pub mod station;
pub mod subcomp;
