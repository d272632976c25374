
/// QoS scheduling service of a service flow, in descending uplink
/// scheduling priority. Referenced by config, MAC entities and the
/// scheduler, so it lives in core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SchedulingType {
    /// Unsolicited grant service: periodic fixed-size grants
    Ugs,
    /// Real-time polling service: periodic unicast polls
    Rtps,
    /// Non-real-time polling service: polled opportunistically
    Nrtps,
    /// Best effort
    Be,
}

impl core::fmt::Display for SchedulingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchedulingType::Ugs => write!(f, "UGS"),
            SchedulingType::Rtps => write!(f, "rtPS"),
            SchedulingType::Nrtps => write!(f, "nrtPS"),
            SchedulingType::Be => write!(f, "BE"),
        }
    }
}
