use wimax_core::{Cid, CidType};
use wimax_pdus::MacHeaderKind;

use crate::mac::mac_queue::{MacPacket, MacQueue, QueuedPacket};

/// Handle into the [`ConnectionRegistry`]. Connections live for the whole
/// session, so handles never dangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionId(usize);

impl core::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "conn#{}", self.0)
    }
}

/// One logical flow endpoint and its uplink queue
#[derive(Debug)]
pub struct Connection {
    pub cid: Cid,
    pub ctype: CidType,
    queue: MacQueue,
}

impl Connection {
    pub fn new(cid: Cid, ctype: CidType) -> Self {
        Connection {
            cid,
            ctype,
            queue: MacQueue::new(),
        }
    }

    pub fn enqueue(&mut self, packet: QueuedPacket) {
        self.queue.enqueue(packet);
    }

    pub fn has_packets(&self) -> bool {
        self.queue.has_packets()
    }

    pub fn has_packets_of(&self, kind: MacHeaderKind) -> bool {
        self.queue.has_packets_of(kind)
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn front_required_bytes(&self, kind: MacHeaderKind) -> u32 {
        self.queue.front_required_bytes(kind)
    }

    pub fn front_header_bytes(&self, kind: MacHeaderKind) -> u32 {
        self.queue.front_header_bytes(kind)
    }

    pub fn front_is_fragmented(&self, kind: MacHeaderKind) -> bool {
        self.queue.front_is_fragmented(kind)
    }

    pub fn dequeue(&mut self, kind: MacHeaderKind) -> MacPacket {
        self.queue.dequeue(kind)
    }

    pub fn dequeue_fragment(&mut self, kind: MacHeaderKind, max_bytes: u32) -> MacPacket {
        self.queue.dequeue_fragment(kind, max_bytes)
    }
}

/// Owns every connection of the station. The four well-known management
/// connections exist from the start; transport connections are added as
/// service flows get provisioned.
#[derive(Debug)]
pub struct ConnectionRegistry {
    connections: Vec<Connection>,
    initial_ranging: ConnectionId,
    basic: ConnectionId,
    primary: ConnectionId,
    broadcast: ConnectionId,
}

impl ConnectionRegistry {
    pub fn new(basic_cid: Cid, primary_cid: Cid) -> Self {
        let connections = vec![
            Connection::new(Cid::initial_ranging(), CidType::InitialRanging),
            Connection::new(basic_cid, CidType::Basic),
            Connection::new(primary_cid, CidType::Primary),
            Connection::new(Cid::broadcast(), CidType::Broadcast),
        ];
        ConnectionRegistry {
            connections,
            initial_ranging: ConnectionId(0),
            basic: ConnectionId(1),
            primary: ConnectionId(2),
            broadcast: ConnectionId(3),
        }
    }

    /// Registers a new transport connection, returning its handle
    pub fn add_transport(&mut self, cid: Cid) -> ConnectionId {
        let id = ConnectionId(self.connections.len());
        tracing::debug!("add_transport: CID {} as {}", cid, id);
        self.connections.push(Connection::new(cid, CidType::Transport));
        id
    }

    pub fn get(&self, id: ConnectionId) -> &Connection {
        &self.connections[id.0]
    }

    pub fn get_mut(&mut self, id: ConnectionId) -> &mut Connection {
        &mut self.connections[id.0]
    }

    pub fn initial_ranging(&self) -> ConnectionId {
        self.initial_ranging
    }

    pub fn basic(&self) -> ConnectionId {
        self.basic
    }

    pub fn primary(&self) -> ConnectionId {
        self.primary
    }

    pub fn broadcast(&self) -> ConnectionId {
        self.broadcast
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
