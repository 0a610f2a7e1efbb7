use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::model::{LinkAttrs, TopologyGraph};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawInterface {
    Text(String),
    Number(u64),
}

impl RawInterface {
    fn into_key(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(num) => num.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAs {
    asn: u32,
    isd: u16,
    #[serde(default)]
    intfs: Vec<RawInterface>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    id: String,
    from: RawInterface,
    to: RawInterface,
    cap: f64,
    latency: f64,
    packet_loss: f64,
}

#[derive(Debug, Deserialize)]
struct RawTopology {
    #[serde(default)]
    ases: Vec<RawAs>,
    #[serde(default)]
    links: Vec<RawLink>,
}

pub fn load_topology(path: &Path) -> Result<TopologyGraph> {
    let raw_text = fs::read_to_string(path)
        .with_context(|| format!("failed to read topology file {}", path.display()))?;
    parse_topology(&raw_text)
        .with_context(|| format!("failed to load topology {}", path.display()))
}

pub fn parse_topology(raw_text: &str) -> Result<TopologyGraph> {
    let raw: RawTopology =
        serde_json::from_str(raw_text).context("failed to parse topology json")?;

    let mut graph = TopologyGraph::new();
    let mut owner: BTreeMap<String, u32> = BTreeMap::new();
    for item in raw.ases {
        let interfaces: Vec<String> = item.intfs.into_iter().map(RawInterface::into_key).collect();
        for intf in &interfaces {
            if let Some(prev) = owner.insert(intf.clone(), item.asn) {
                if prev != item.asn {
                    bail!("interface {intf} claimed by AS{prev} and AS{}", item.asn);
                }
            }
        }
        graph.add_node(item.asn, item.isd, interfaces)?;
    }

    for link in raw.links {
        let from = link.from.into_key();
        let to = link.to.into_key();
        let resolve = |intf: &str| {
            owner
                .get(intf)
                .copied()
                .with_context(|| format!("link {} uses unknown interface {intf}", link.id))
        };
        let (u, v) = (resolve(&from)?, resolve(&to)?);
        graph
            .add_link(
                u,
                v,
                &link.id,
                LinkAttrs {
                    capacity: link.cap,
                    latency: link.latency,
                    packet_loss: link.packet_loss,
                },
            )
            .with_context(|| format!("failed to add link {}", link.id))?;
    }

    info!(
        nodes = graph.node_count(),
        links = graph.link_count(),
        "loaded topology"
    );
    Ok(graph)
}
