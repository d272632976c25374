use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;
use wimax_core::{ModulationType, SchedulingType, Sfid};

use super::stack_config::{CfgServiceFlow, CfgSubscriber};

/// Build `CfgSubscriber` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<CfgSubscriber, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.2";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if !root.subscriber.extra.is_empty() {
        return Err(format!("Unrecognized fields in subscriber: {:?}", sorted_keys(&root.subscriber.extra)).into());
    }
    for flow in &root.service_flow {
        if !flow.extra.is_empty() {
            return Err(format!(
                "Unrecognized fields in service_flow {}: {:?}",
                flow.sfid,
                sorted_keys(&flow.extra)
            )
            .into());
        }
    }

    let mut cfg = CfgSubscriber {
        basic_cid: root.subscriber.basic_cid,
        primary_cid: root.subscriber.primary_cid,
        ..CfgSubscriber::default()
    };
    if let Some(m) = root.subscriber.modulation {
        cfg.modulation = m;
    }
    if let Some(d) = root.subscriber.frame_duration_ms {
        cfg.frame_duration_ms = d;
    }

    for flow in root.service_flow {
        // Per-class required timing parameters
        match flow.scheduling {
            SchedulingType::Ugs if flow.grant_interval_ms.is_none() => {
                return Err(format!("UGS service_flow {} needs grant_interval_ms", flow.sfid).into());
            }
            SchedulingType::Rtps if flow.polling_interval_ms.is_none() => {
                return Err(format!("rtPS service_flow {} needs polling_interval_ms", flow.sfid).into());
            }
            _ => {}
        }
        cfg.flows.push(CfgServiceFlow {
            sfid: flow.sfid,
            cid: flow.cid,
            scheduling: flow.scheduling,
            grant_interval_ms: flow.grant_interval_ms,
            polling_interval_ms: flow.polling_interval_ms,
        });
    }

    Ok(cfg)
}

/// Build `CfgSubscriber` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<CfgSubscriber, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `CfgSubscriber` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CfgSubscriber, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,

    subscriber: SubscriberDto,

    #[serde(default)]
    service_flow: Vec<ServiceFlowDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct SubscriberDto {
    basic_cid: u16,
    primary_cid: u16,
    modulation: Option<ModulationType>,
    frame_duration_ms: Option<u64>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct ServiceFlowDto {
    sfid: Sfid,
    cid: u16,
    scheduling: SchedulingType,
    grant_interval_ms: Option<u64>,
    polling_interval_ms: Option<u64>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
config_version = "0.2"

[subscriber]
basic_cid = 10
primary_cid = 11
modulation = "Qam16_12"
frame_duration_ms = 10

[[service_flow]]
sfid = 1
cid = 1000
scheduling = "Ugs"
grant_interval_ms = 20

[[service_flow]]
sfid = 2
cid = 1001
scheduling = "Be"
"#;

    #[test]
    fn test_parse_example() {
        let cfg = from_toml_str(EXAMPLE).unwrap();
        assert_eq!(cfg.basic_cid, 10);
        assert_eq!(cfg.primary_cid, 11);
        assert_eq!(cfg.modulation, ModulationType::Qam16_12);
        assert_eq!(cfg.flows.len(), 2);
        assert_eq!(cfg.flows[0].scheduling, SchedulingType::Ugs);
        assert_eq!(cfg.flows[0].grant_interval_ms, Some(20));
        assert_eq!(cfg.flows[1].scheduling, SchedulingType::Be);
    }

    #[test]
    fn test_reject_unknown_fields() {
        let bad = EXAMPLE.replace("primary_cid = 11", "primary_cid = 11\nbogus_field = 1");
        assert!(from_toml_str(&bad).is_err());
    }

    #[test]
    fn test_reject_wrong_version() {
        let bad = EXAMPLE.replace("config_version = \"0.2\"", "config_version = \"9.9\"");
        assert!(from_toml_str(&bad).is_err());
    }

    #[test]
    fn test_reject_ugs_without_interval() {
        let bad = EXAMPLE.replace("grant_interval_ms = 20\n", "");
        assert!(from_toml_str(&bad).is_err());
    }
}
