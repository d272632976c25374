use wimax_core::{CidType, ModulationType, SchedulingType};
use wimax_pdus::{FragmentationSubheader, MacHeaderKind};

use crate::mac::connection::ConnectionId;
use crate::mac::station::SubscriberMac;
use crate::mac::subcomp::burst::PacketBurst;

/// Uplink scheduler of a subscriber station.
///
/// Invoked once per uplink grant by the frame state machine. Picks the
/// connection to serve (unless the caller names one) and greedily drains
/// its queue into a burst within the symbol budget, fragmenting at most one
/// trailing transport packet per call.
#[derive(Debug, Default)]
pub struct SsScheduler {
    /// Whether this station wants to be polled by the BS in a subsequent
    /// cycle. Read and written by the signaling layer as a side channel;
    /// plays no part in the scheduling decision itself.
    poll_me: bool,
}

impl SsScheduler {
    pub fn new() -> Self {
        SsScheduler { poll_me: false }
    }

    pub fn set_poll_me(&mut self, poll_me: bool) {
        self.poll_me = poll_me;
    }

    pub fn poll_me(&self) -> bool {
        self.poll_me
    }

    /// Assembles the burst for one uplink opportunity.
    ///
    /// `available_symbols` is the grant's symbol budget, converted to bytes
    /// per iteration under the given burst profile. If `connection` is
    /// None, the target is resolved via [`Self::select_connection`]; an
    /// explicitly passed connection must have pending packets of the
    /// requested kind, anything else is a caller bug.
    ///
    /// An empty burst is a valid result: the budget may be too small for
    /// even one header, or nothing may be eligible.
    pub fn schedule(
        &mut self,
        ss: &mut SubscriberMac,
        mut available_symbols: u16,
        modulation: ModulationType,
        kind: MacHeaderKind,
        connection: Option<ConnectionId>,
    ) -> PacketBurst {
        let mut burst = PacketBurst::new();

        let selected = match connection {
            Some(id) => {
                assert!(
                    ss.connections.get(id).has_packets_of(kind),
                    "scheduling explicit connection {} with no pending {} packets",
                    id,
                    kind
                );
                Some(id)
            }
            None => self.select_connection(ss),
        };
        let Some(id) = selected else {
            tracing::debug!("schedule: nothing eligible, opportunity declined");
            return burst;
        };

        while ss.connections.get(id).has_packets_of(kind) {
            let available_bytes = ss.phy.nr_bytes(available_symbols, modulation);
            let conn = ss.connections.get_mut(id);
            let required_bytes = conn.front_required_bytes(kind);

            tracing::debug!(
                "schedule: {} available {} bytes ({} symbols), front needs {}",
                id,
                available_bytes,
                available_symbols,
                required_bytes
            );

            if available_bytes >= required_bytes {
                // Fits whole, no (further) fragmentation needed
                let packet = conn.dequeue(kind);
                let nr_symbols_required = ss.phy.nr_symbols(packet.size_bytes, modulation);
                tracing::debug!("-> whole packet, {} bytes, {} symbols", packet.size_bytes, nr_symbols_required);
                burst.add_packet(packet);
                available_symbols -= nr_symbols_required;
            } else if conn.ctype == CidType::Transport {
                // Check whether a partial send is worthwhile. The first
                // fragment of a packet pays for the fragmentation subheader.
                let mut header_bytes = conn.front_header_bytes(kind);
                if !conn.front_is_fragmented(kind) {
                    header_bytes += FragmentationSubheader::SERIALIZED_SIZE;
                }

                if available_bytes > header_bytes {
                    let packet = conn.dequeue_fragment(kind, available_bytes);
                    let nr_symbols_required = ss.phy.nr_symbols(packet.size_bytes, modulation);
                    tracing::debug!("-> fragment, {} bytes, {} symbols", packet.size_bytes, nr_symbols_required);
                    burst.add_packet(packet);
                    available_symbols -= nr_symbols_required;
                } else {
                    // A fragment would carry header only, no payload
                    tracing::debug!("-> fragmentation not worthwhile ({} <= {} header bytes)", available_bytes, header_bytes);
                    break;
                }
            } else {
                // Only transport payload has a fragmentation model
                tracing::debug!("-> does not fit and {} is not fragmentable", conn.ctype);
                break;
            }
        }

        burst
    }

    /// Picks the connection this opportunity should serve, strictly by
    /// class priority, or None if nothing is eligible. Read-only: calling
    /// this twice without intervening queue changes returns the same
    /// answer.
    pub fn select_connection(&self, ss: &SubscriberMac) -> Option<ConnectionId> {
        let now = ss.now();
        let frame_ms = ss.phy.frame_duration_ms();
        let conns = &ss.connections;

        tracing::trace!("select_connection: scanning at {}", now);

        // Ranging and management traffic always goes first
        if conns.get(conns.initial_ranging()).has_packets() {
            tracing::debug!("select_connection: initial ranging");
            return Some(conns.initial_ranging());
        }
        if conns.get(conns.basic()).has_packets() {
            tracing::debug!("select_connection: basic");
            return Some(conns.basic());
        }
        if conns.get(conns.primary()).has_packets() {
            tracing::debug!("select_connection: primary");
            return Some(conns.primary());
        }

        // UGS flows only once their contracted grant cadence is due; an
        // early grant would drift the flow out of sync with its contract
        for flow in ss.flows.flows_of_type(SchedulingType::Ugs) {
            if conns.get(flow.connection).has_packets()
                && now.add_ms(frame_ms) > flow.next_grant_due()
            {
                tracing::debug!("select_connection: UGS SFID {} on {}", flow.sfid, flow.connection);
                return Some(flow.connection);
            }
        }

        // rtPS, nrtPS and BE flows are selected for data packets only.
        // Bandwidth request packets are scheduled with an explicitly passed
        // connection and never reach this scan.
        for flow in ss.flows.flows_of_type(SchedulingType::Rtps) {
            if conns.get(flow.connection).has_packets_of(MacHeaderKind::Generic)
                && now.add_ms(frame_ms) > flow.next_poll_due()
            {
                tracing::debug!("select_connection: rtPS SFID {} on {}", flow.sfid, flow.connection);
                return Some(flow.connection);
            }
        }

        for flow in ss.flows.flows_of_type(SchedulingType::Nrtps) {
            if conns.get(flow.connection).has_packets_of(MacHeaderKind::Generic) {
                tracing::debug!("select_connection: nrtPS SFID {} on {}", flow.sfid, flow.connection);
                return Some(flow.connection);
            }
        }

        for flow in ss.flows.flows_of_type(SchedulingType::Be) {
            if conns.get(flow.connection).has_packets_of(MacHeaderKind::Generic) {
                tracing::debug!("select_connection: BE SFID {} on {}", flow.sfid, flow.connection);
                return Some(flow.connection);
            }
        }

        if conns.get(conns.broadcast()).has_packets() {
            tracing::debug!("select_connection: broadcast");
            return Some(conns.broadcast());
        }

        tracing::debug!("select_connection: no connection eligible");
        None
    }
}
