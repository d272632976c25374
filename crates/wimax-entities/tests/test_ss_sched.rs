mod common;

use common::{conn_of_sfid, enqueue_bw_request, enqueue_data, test_station};
use wimax_core::{MacTime, ModulationType};
use wimax_entities::mac::mac_queue::QueuedPacket;
use wimax_entities::mac::subcomp::ss_sched::SsScheduler;
use wimax_pdus::MacHeaderKind;

#[test]
fn test_ranging_preempts_everything() {
    let mut ss = test_station();
    let sched = SsScheduler::new();

    // Load every class, from broadcast up to initial ranging
    let broadcast = ss.connections.broadcast();
    ss.connections
        .get_mut(broadcast)
        .enqueue(QueuedPacket::new(MacHeaderKind::Generic, 60, 6));
    for sfid in 1..=5 {
        let id = conn_of_sfid(&ss, sfid);
        enqueue_data(&mut ss, id, 100, 6);
    }
    let primary = ss.connections.primary();
    enqueue_data(&mut ss, primary, 80, 6);
    let basic = ss.connections.basic();
    enqueue_data(&mut ss, basic, 80, 6);
    let initial_ranging = ss.connections.initial_ranging();
    enqueue_data(&mut ss, initial_ranging, 40, 6);

    assert_eq!(sched.select_connection(&ss), Some(ss.connections.initial_ranging()));

    // Selection is read-only: asking again gives the same answer
    assert_eq!(sched.select_connection(&ss), Some(ss.connections.initial_ranging()));
    assert_eq!(ss.connections.get(ss.connections.initial_ranging()).queue_len(), 1);
}

#[test]
fn test_management_before_flows() {
    let mut ss = test_station();
    let mut sched = SsScheduler::new();

    let be = conn_of_sfid(&ss, 4);
    enqueue_data(&mut ss, be, 100, 6);
    let primary = ss.connections.primary();
    enqueue_data(&mut ss, primary, 80, 6);
    let basic = ss.connections.basic();
    enqueue_data(&mut ss, basic, 80, 6);

    assert_eq!(sched.select_connection(&ss), Some(ss.connections.basic()));

    // Drain basic, primary is next, then the BE flow
    let burst = sched.schedule(&mut ss, 100, ModulationType::Qpsk12, MacHeaderKind::Generic, None);
    assert_eq!(burst.n_packets(), 1);
    assert_eq!(sched.select_connection(&ss), Some(ss.connections.primary()));
    let _ = sched.schedule(&mut ss, 100, ModulationType::Qpsk12, MacHeaderKind::Generic, None);
    assert_eq!(sched.select_connection(&ss), Some(be));
}

#[test]
fn test_ugs_deadline_gating() {
    let mut ss = test_station();
    let sched = SsScheduler::new();

    let ugs = conn_of_sfid(&ss, 1);
    let be = conn_of_sfid(&ss, 4);
    enqueue_data(&mut ss, ugs, 100, 6);
    enqueue_data(&mut ss, be, 100, 6);

    // Grant not due yet: now + frame (60) does not exceed the deadline, so
    // the UGS flow is passed over and the BE flow gets the opportunity
    ss.flows.get_by_sfid_mut(1).unwrap().set_next_grant_due(MacTime::from_ms(100));
    ss.set_now(MacTime::from_ms(50));
    assert_eq!(sched.select_connection(&ss), Some(be));

    // Boundary: now + frame == deadline is still too early
    ss.set_now(MacTime::from_ms(90));
    assert_eq!(sched.select_connection(&ss), Some(be));

    // One frame later the grant is due; UGS wins over the pending BE
    ss.set_now(MacTime::from_ms(95));
    assert_eq!(sched.select_connection(&ss), Some(ugs));
}

#[test]
fn test_rtps_gating_and_data_only_filter() {
    let mut ss = test_station();
    let sched = SsScheduler::new();

    let rtps = conn_of_sfid(&ss, 2);
    let nrtps = conn_of_sfid(&ss, 3);

    // An rtPS queue holding only a bandwidth request never drives selection
    enqueue_bw_request(&mut ss, rtps);
    enqueue_data(&mut ss, nrtps, 100, 6);
    ss.set_now(MacTime::from_ms(1000));
    assert_eq!(sched.select_connection(&ss), Some(nrtps));

    // With actual data pending and the poll due, rtPS outranks nrtPS
    enqueue_data(&mut ss, rtps, 100, 6);
    assert_eq!(sched.select_connection(&ss), Some(rtps));

    // Data pending but poll not due: passed over again
    ss.flows.get_by_sfid_mut(2).unwrap().set_next_poll_due(MacTime::from_ms(5000));
    assert_eq!(sched.select_connection(&ss), Some(nrtps));
}

#[test]
fn test_same_class_registry_order_tiebreak() {
    let mut ss = test_station();
    let sched = SsScheduler::new();

    let be1 = conn_of_sfid(&ss, 4);
    let be2 = conn_of_sfid(&ss, 5);
    enqueue_data(&mut ss, be2, 100, 6);
    enqueue_data(&mut ss, be1, 100, 6);

    // Provisioning order decides, not enqueue order or queue depth
    assert_eq!(sched.select_connection(&ss), Some(be1));

    enqueue_data(&mut ss, be2, 100, 6);
    enqueue_data(&mut ss, be2, 100, 6);
    assert_eq!(sched.select_connection(&ss), Some(be1));
}

#[test]
fn test_broadcast_last_then_none() {
    let mut ss = test_station();
    let sched = SsScheduler::new();

    assert_eq!(sched.select_connection(&ss), None);

    let broadcast = ss.connections.broadcast();
    ss.connections
        .get_mut(broadcast)
        .enqueue(QueuedPacket::new(MacHeaderKind::Generic, 60, 6));
    assert_eq!(sched.select_connection(&ss), Some(broadcast));

    // Anything else outranks broadcast
    let be = conn_of_sfid(&ss, 5);
    enqueue_data(&mut ss, be, 100, 6);
    assert_eq!(sched.select_connection(&ss), Some(be));
}

#[test]
fn test_record_grant_regates_ugs() {
    let mut ss = test_station();
    let mut sched = SsScheduler::new();

    let ugs = conn_of_sfid(&ss, 1);
    enqueue_data(&mut ss, ugs, 100, 6);
    enqueue_data(&mut ss, ugs, 100, 6);
    ss.set_now(MacTime::from_ms(100));

    // Deadline still at its initial value, flow is overdue and selected
    assert_eq!(sched.select_connection(&ss), Some(ugs));
    let burst = sched.schedule(&mut ss, 100, ModulationType::Qpsk12, MacHeaderKind::Generic, None);
    assert_eq!(burst.n_packets(), 2);

    // Signaling layer books the grant; with the 20ms interval re-armed the
    // flow stays ineligible until the next deadline approaches
    enqueue_data(&mut ss, ugs, 100, 6);
    let now = ss.now();
    ss.flows.get_by_sfid_mut(1).unwrap().record_grant(now);
    assert_eq!(sched.select_connection(&ss), None);

    ss.set_now(MacTime::from_ms(115));
    assert_eq!(sched.select_connection(&ss), Some(ugs));
}
