use wimax_core::{ModulationType, SchedulingType, Sfid};

/// One provisioned service flow and its QoS parameters
#[derive(Debug, Clone)]
pub struct CfgServiceFlow {
    pub sfid: Sfid,
    /// Transport CID the flow's traffic rides on
    pub cid: u16,
    pub scheduling: SchedulingType,
    /// UGS only: nominal interval between unsolicited grants
    pub grant_interval_ms: Option<u64>,
    /// rtPS only: nominal interval between unsolicited polls
    pub polling_interval_ms: Option<u64>,
}

/// Subscriber-station configuration
#[derive(Debug, Clone)]
pub struct CfgSubscriber {
    /// Basic management CID, assigned at ranging
    pub basic_cid: u16,
    /// Primary management CID, assigned at ranging
    pub primary_cid: u16,
    /// Uplink burst profile negotiated with the BS
    pub modulation: ModulationType,
    /// Frame duration of the serving BS
    pub frame_duration_ms: u64,
    /// Provisioned flows, in provisioning order. Order is significant: the
    /// scheduler breaks same-class ties by it.
    pub flows: Vec<CfgServiceFlow>,
}

impl Default for CfgSubscriber {
    fn default() -> Self {
        Self {
            basic_cid: 1,
            primary_cid: 2,
            modulation: ModulationType::Qpsk12,
            frame_duration_ms: 10,
            flows: Vec::new(),
        }
    }
}
