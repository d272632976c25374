use wimax_core::{Cid, MacTime};
use wimax_config::CfgSubscriber;

use crate::mac::connection::ConnectionRegistry;
use crate::mac::service_flow::ServiceFlowManager;
use crate::phy::ofdm_phy::OfdmPhy;

/// The collaborators the uplink scheduler works against: connection and
/// service-flow registries, the PHY conversion, and the MAC clock. The
/// frame state machine owns this and advances the clock; the scheduler
/// mutates only the connection queues, and only during a scheduling call.
#[derive(Debug)]
pub struct SubscriberMac {
    pub connections: ConnectionRegistry,
    pub flows: ServiceFlowManager,
    pub phy: OfdmPhy,
    now: MacTime,
}

impl SubscriberMac {
    pub fn new(connections: ConnectionRegistry, flows: ServiceFlowManager, phy: OfdmPhy) -> Self {
        SubscriberMac {
            connections,
            flows,
            phy,
            now: MacTime::default(),
        }
    }

    pub fn from_config(cfg: &CfgSubscriber) -> Self {
        let mut connections = ConnectionRegistry::new(Cid::new(cfg.basic_cid), Cid::new(cfg.primary_cid));
        let flows = ServiceFlowManager::from_config(cfg, &mut connections);
        Self::new(connections, flows, OfdmPhy::new(cfg.frame_duration_ms))
    }

    pub fn now(&self) -> MacTime {
        self.now
    }

    pub fn set_now(&mut self, now: MacTime) {
        self.now = now;
    }

    /// Advance the MAC clock by one frame
    pub fn advance_frame(&mut self) {
        self.now = self.now.add_ms(self.phy.frame_duration_ms());
    }
}
