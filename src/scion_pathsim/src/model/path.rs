use serde::Serialize;

/// AS sequence with no repeated AS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<u32>);

impl NodePath {
    pub fn new(nodes: Vec<u32>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[u32] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<u32> {
        self.0
    }

    pub fn hop_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn hops(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHop {
    pub from: u32,
    pub to: u32,
    pub link: String,
}

pub type LinkPath = Vec<LinkHop>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScionHop {
    pub from: u32,
    pub to: u32,
    pub link: String,
    pub from_id: u32,
    pub to_id: u32,
    pub capacity: f64,
    pub latency: f64,
    pub packet_loss: f64,
}

pub type ScionPath = Vec<ScionHop>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathMetrics {
    pub latency: f64,
    pub loss: f64,
    pub goodput: f64,
}
