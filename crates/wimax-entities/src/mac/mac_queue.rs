use wimax_pdus::{
    BandwidthRequestHeader, FragmentControl, FragmentationSubheader, GenericMacHeader, MacHeaderKind,
};

/// A packet waiting in a connection's uplink queue.
///
/// The queue tracks on-air sizes, not payload contents: `total_bytes` is the
/// full PDU (MAC header included), `hdr_bytes` the header share of it. Once
/// fragmentation starts, `frag_offset` records how many bytes have already
/// left in earlier fragments.
#[derive(Debug, Clone)]
pub struct QueuedPacket {
    pub kind: MacHeaderKind,
    pub total_bytes: u32,
    pub hdr_bytes: u32,
    fragmented: bool,
    frag_offset: u32,
    frag_number: u8,
}

impl QueuedPacket {
    pub fn new(kind: MacHeaderKind, total_bytes: u32, hdr_bytes: u32) -> Self {
        assert!(hdr_bytes <= total_bytes, "header {} exceeds packet size {}", hdr_bytes, total_bytes);
        QueuedPacket {
            kind,
            total_bytes,
            hdr_bytes,
            fragmented: false,
            frag_offset: 0,
            frag_number: 0,
        }
    }

    /// A data PDU prefixed by the given generic MAC header. LEN covers the
    /// whole PDU, so it is the on-air size.
    pub fn from_generic(hdr: &GenericMacHeader) -> Self {
        Self::new(MacHeaderKind::Generic, hdr.len as u32, GenericMacHeader::SERIALIZED_SIZE)
    }

    /// A standalone bandwidth request PDU: header only, no payload.
    pub fn from_bandwidth_request(_hdr: &BandwidthRequestHeader) -> Self {
        Self::new(
            MacHeaderKind::BandwidthRequest,
            BandwidthRequestHeader::SERIALIZED_SIZE,
            BandwidthRequestHeader::SERIALIZED_SIZE,
        )
    }

    /// Bytes still needed to finish this packet
    fn required_bytes(&self) -> u32 {
        self.total_bytes - self.frag_offset
    }
}

/// A packet (or packet fragment) leaving the queue for transmission.
/// `size_bytes` is what it occupies on air, subheader included.
#[derive(Debug, Clone)]
pub struct MacPacket {
    pub kind: MacHeaderKind,
    pub size_bytes: u32,
    /// Present on every fragment of a fragmented packet
    pub fragment: Option<FragmentationSubheader>,
}

/// FIFO uplink queue of one connection.
///
/// Dequeue operations take a header-kind filter; elements of the other kind
/// are skipped but keep their relative order. Only the scheduler mutates
/// this queue, and only within a single scheduling call.
#[derive(Debug, Default)]
pub struct MacQueue {
    elements: Vec<QueuedPacket>,
}

impl MacQueue {
    pub fn new() -> Self {
        MacQueue { elements: Vec::new() }
    }

    pub fn enqueue(&mut self, packet: QueuedPacket) {
        tracing::trace!("enqueue: {:?}", packet);
        self.elements.push(packet);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn has_packets(&self) -> bool {
        !self.elements.is_empty()
    }

    pub fn has_packets_of(&self, kind: MacHeaderKind) -> bool {
        self.elements.iter().any(|e| e.kind == kind)
    }

    fn front_index(&self, kind: MacHeaderKind) -> usize {
        self.elements
            .iter()
            .position(|e| e.kind == kind)
            .unwrap_or_else(|| panic!("no queued packet of kind {}", kind))
    }

    /// On-air bytes the front packet of this kind still needs
    pub fn front_required_bytes(&self, kind: MacHeaderKind) -> u32 {
        self.elements[self.front_index(kind)].required_bytes()
    }

    /// Header bytes of the front packet of this kind
    pub fn front_header_bytes(&self, kind: MacHeaderKind) -> u32 {
        self.elements[self.front_index(kind)].hdr_bytes
    }

    /// Whether the front packet of this kind has already been fragmented
    pub fn front_is_fragmented(&self, kind: MacHeaderKind) -> bool {
        self.elements[self.front_index(kind)].fragmented
    }

    /// Removes the front packet of this kind and returns its remaining
    /// bytes. A previously fragmented packet leaves as its final fragment.
    pub fn dequeue(&mut self, kind: MacHeaderKind) -> MacPacket {
        let index = self.front_index(kind);
        let elem = self.elements.remove(index);

        let fragment = if elem.fragmented {
            Some(FragmentationSubheader::new(FragmentControl::Last, elem.frag_number))
        } else {
            None
        };
        let packet = MacPacket {
            kind: elem.kind,
            size_bytes: elem.required_bytes(),
            fragment,
        };
        tracing::trace!("dequeue: {:?}", packet);
        packet
    }

    /// Splits `max_bytes` off the front packet of this kind, leaving the
    /// rest queued. The fragment consumes exactly `max_bytes` on air; the
    /// caller is responsible for having checked that this covers header and
    /// subheader with payload to spare.
    pub fn dequeue_fragment(&mut self, kind: MacHeaderKind, max_bytes: u32) -> MacPacket {
        let index = self.front_index(kind);
        let elem = &mut self.elements[index];
        assert!(
            max_bytes < elem.required_bytes(),
            "fragmenting {} bytes off a packet that only needs {}",
            max_bytes,
            elem.required_bytes()
        );

        let fc = if elem.fragmented { FragmentControl::Middle } else { FragmentControl::First };
        let fsn = elem.frag_number;
        elem.fragmented = true;
        elem.frag_number = elem.frag_number.wrapping_add(1);
        elem.frag_offset += max_bytes;

        let packet = MacPacket {
            kind: elem.kind,
            size_bytes: max_bytes,
            fragment: Some(FragmentationSubheader::new(fc, fsn)),
        };
        tracing::trace!("dequeue_fragment: {:?}, {} bytes left behind", packet, elem.required_bytes());
        packet
    }
}
