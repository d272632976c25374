use wimax_core::{Cid, MacTime, SchedulingType, Sfid};
use wimax_config::CfgSubscriber;

use crate::mac::connection::{ConnectionId, ConnectionRegistry};

/// A provisioned QoS traffic contract. The scheduler only reads flows; the
/// external signaling layer records grants and polls as they happen.
#[derive(Debug)]
pub struct ServiceFlow {
    pub sfid: Sfid,
    pub scheduling: SchedulingType,
    pub connection: ConnectionId,
    /// UGS: contracted interval between unsolicited grants
    grant_interval_ms: u64,
    /// rtPS: contracted interval between unsolicited polls
    polling_interval_ms: u64,
    next_grant_due: MacTime,
    next_poll_due: MacTime,
}

impl ServiceFlow {
    pub fn new(sfid: Sfid, scheduling: SchedulingType, connection: ConnectionId) -> Self {
        ServiceFlow {
            sfid,
            scheduling,
            connection,
            grant_interval_ms: 0,
            polling_interval_ms: 0,
            next_grant_due: MacTime::default(),
            next_poll_due: MacTime::default(),
        }
    }

    pub fn with_grant_interval(mut self, ms: u64) -> Self {
        self.grant_interval_ms = ms;
        self
    }

    pub fn with_polling_interval(mut self, ms: u64) -> Self {
        self.polling_interval_ms = ms;
        self
    }

    pub fn grant_interval_ms(&self) -> u64 {
        self.grant_interval_ms
    }

    pub fn polling_interval_ms(&self) -> u64 {
        self.polling_interval_ms
    }

    /// When this UGS flow's next unsolicited grant is contracted to arrive
    pub fn next_grant_due(&self) -> MacTime {
        self.next_grant_due
    }

    /// When this rtPS flow's next unsolicited poll is contracted to arrive
    pub fn next_poll_due(&self) -> MacTime {
        self.next_poll_due
    }

    pub fn set_next_grant_due(&mut self, due: MacTime) {
        self.next_grant_due = due;
    }

    pub fn set_next_poll_due(&mut self, due: MacTime) {
        self.next_poll_due = due;
    }

    /// Called by the signaling layer when a grant was used; moves the
    /// deadline one interval ahead
    pub fn record_grant(&mut self, now: MacTime) {
        self.next_grant_due = now.add_ms(self.grant_interval_ms);
        tracing::trace!("record_grant: SFID {} next due {}", self.sfid, self.next_grant_due);
    }

    /// Called by the signaling layer when a poll was answered
    pub fn record_poll(&mut self, now: MacTime) {
        self.next_poll_due = now.add_ms(self.polling_interval_ms);
        tracing::trace!("record_poll: SFID {} next due {}", self.sfid, self.next_poll_due);
    }
}

/// Owns the station's service flows in provisioning order. That order is
/// load-bearing: the scheduler serves the first eligible flow of a class
/// and applies no further tie-break.
#[derive(Debug, Default)]
pub struct ServiceFlowManager {
    flows: Vec<ServiceFlow>,
}

impl ServiceFlowManager {
    pub fn new() -> Self {
        ServiceFlowManager { flows: Vec::new() }
    }

    /// Builds the manager from config, registering one transport connection
    /// per flow.
    pub fn from_config(cfg: &CfgSubscriber, connections: &mut ConnectionRegistry) -> Self {
        let mut mgr = ServiceFlowManager::new();
        for flow_cfg in &cfg.flows {
            let conn = connections.add_transport(Cid::new(flow_cfg.cid));
            let mut flow = ServiceFlow::new(flow_cfg.sfid, flow_cfg.scheduling, conn);
            if let Some(ms) = flow_cfg.grant_interval_ms {
                flow = flow.with_grant_interval(ms);
            }
            if let Some(ms) = flow_cfg.polling_interval_ms {
                flow = flow.with_polling_interval(ms);
            }
            tracing::debug!("from_config: SFID {} {} on CID {}", flow.sfid, flow.scheduling, flow_cfg.cid);
            mgr.add_flow(flow);
        }
        mgr
    }

    pub fn add_flow(&mut self, flow: ServiceFlow) {
        self.flows.push(flow);
    }

    pub fn flows(&self) -> &[ServiceFlow] {
        &self.flows
    }

    /// Flows of one scheduling class, in provisioning order
    pub fn flows_of_type(&self, scheduling: SchedulingType) -> impl Iterator<Item = &ServiceFlow> {
        self.flows.iter().filter(move |f| f.scheduling == scheduling)
    }

    pub fn get_by_sfid(&self, sfid: Sfid) -> Option<&ServiceFlow> {
        self.flows.iter().find(|f| f.sfid == sfid)
    }

    pub fn get_by_sfid_mut(&mut self, sfid: Sfid) -> Option<&mut ServiceFlow> {
        self.flows.iter_mut().find(|f| f.sfid == sfid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flows_of_type_preserves_order() {
        let mut reg = ConnectionRegistry::new(Cid::new(1), Cid::new(2));
        let c1 = reg.add_transport(Cid::new(1000));
        let c2 = reg.add_transport(Cid::new(1001));
        let c3 = reg.add_transport(Cid::new(1002));

        let mut mgr = ServiceFlowManager::new();
        mgr.add_flow(ServiceFlow::new(1, SchedulingType::Be, c1));
        mgr.add_flow(ServiceFlow::new(2, SchedulingType::Ugs, c2).with_grant_interval(20));
        mgr.add_flow(ServiceFlow::new(3, SchedulingType::Be, c3));

        let be_sfids: Vec<Sfid> = mgr.flows_of_type(SchedulingType::Be).map(|f| f.sfid).collect();
        assert_eq!(be_sfids, vec![1, 3]);
        assert_eq!(mgr.flows_of_type(SchedulingType::Rtps).count(), 0);
    }

    #[test]
    fn test_record_grant_moves_deadline() {
        let mut reg = ConnectionRegistry::new(Cid::new(1), Cid::new(2));
        let c = reg.add_transport(Cid::new(1000));
        let mut flow = ServiceFlow::new(1, SchedulingType::Ugs, c).with_grant_interval(20);

        assert_eq!(flow.next_grant_due(), MacTime::from_ms(0));
        flow.record_grant(MacTime::from_ms(50));
        assert_eq!(flow.next_grant_due(), MacTime::from_ms(70));
    }
}
