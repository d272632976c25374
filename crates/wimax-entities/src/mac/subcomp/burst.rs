use crate::mac::mac_queue::MacPacket;

/// The ordered transmission unit assembled for one uplink opportunity.
/// Created fresh per scheduling call; ownership moves to the caller.
#[derive(Debug, Default)]
pub struct PacketBurst {
    packets: Vec<MacPacket>,
}

impl PacketBurst {
    pub fn new() -> Self {
        PacketBurst { packets: Vec::new() }
    }

    pub fn add_packet(&mut self, packet: MacPacket) {
        self.packets.push(packet);
    }

    pub fn n_packets(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Total on-air size of the burst in bytes
    pub fn size_bytes(&self) -> u32 {
        self.packets.iter().map(|p| p.size_bytes).sum()
    }

    pub fn packets(&self) -> &[MacPacket] {
        &self.packets
    }

    pub fn into_packets(self) -> Vec<MacPacket> {
        self.packets
    }
}
