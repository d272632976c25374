use wimax_core::Sfid;
use wimax_entities::mac::connection::ConnectionId;
use wimax_entities::mac::mac_queue::QueuedPacket;
use wimax_entities::mac::station::SubscriberMac;
use wimax_pdus::MacHeaderKind;

/// One UGS, one rtPS, one nrtPS and two BE flows, in that provisioning
/// order. QPSK 1/2 uplink profile, 10ms frames.
pub const TEST_CONFIG: &str = r#"
config_version = "0.2"

[subscriber]
basic_cid = 10
primary_cid = 11
modulation = "Qpsk12"
frame_duration_ms = 10

[[service_flow]]
sfid = 1
cid = 1000
scheduling = "Ugs"
grant_interval_ms = 20

[[service_flow]]
sfid = 2
cid = 1001
scheduling = "Rtps"
polling_interval_ms = 40

[[service_flow]]
sfid = 3
cid = 1002
scheduling = "Nrtps"

[[service_flow]]
sfid = 4
cid = 1003
scheduling = "Be"

[[service_flow]]
sfid = 5
cid = 1004
scheduling = "Be"
"#;

pub fn test_station() -> SubscriberMac {
    wimax_core::debug::setup_logging_verbose();
    let cfg = wimax_config::from_toml_str(TEST_CONFIG).unwrap();
    SubscriberMac::from_config(&cfg)
}

/// Connection handle of the flow with the given SFID
pub fn conn_of_sfid(ss: &SubscriberMac, sfid: Sfid) -> ConnectionId {
    ss.flows.get_by_sfid(sfid).unwrap().connection
}

/// Enqueue one data packet of `total_bytes` on-air bytes, `hdr_bytes` of
/// which are header
pub fn enqueue_data(ss: &mut SubscriberMac, id: ConnectionId, total_bytes: u32, hdr_bytes: u32) {
    ss.connections
        .get_mut(id)
        .enqueue(QueuedPacket::new(MacHeaderKind::Generic, total_bytes, hdr_bytes));
}

/// Enqueue a standalone 6-byte bandwidth request PDU
pub fn enqueue_bw_request(ss: &mut SubscriberMac, id: ConnectionId) {
    ss.connections
        .get_mut(id)
        .enqueue(QueuedPacket::new(MacHeaderKind::BandwidthRequest, 6, 6));
}
