use std::collections::HashMap;

use crate::error::{PathError, Result};
use crate::model::{Link, LinkHop, LinkPath, NodePath, TopologyGraph};

/// Per-run count of links already handed out for each directed AS pair.
#[derive(Debug, Default, Clone)]
pub struct EdgeUsageContext {
    usage: HashMap<(u32, u32), usize>,
}

impl EdgeUsageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn usage(&self, from: u32, to: u32) -> usize {
        self.usage.get(&(from, to)).copied().unwrap_or(0)
    }

    /// Picks the next parallel link for `from -> to` in round-robin order.
    pub fn select<'g>(
        &mut self,
        graph: &'g TopologyGraph,
        from: u32,
        to: u32,
    ) -> Result<&'g Link> {
        let candidates = graph.links_between(from, to);
        if candidates.is_empty() {
            return Err(PathError::NoEdgeFound { from, to });
        }
        let used = self.usage.entry((from, to)).or_insert(0);
        let link = candidates[*used % candidates.len()];
        *used += 1;
        Ok(link)
    }
}

pub fn disambiguate_path(
    graph: &TopologyGraph,
    path: &NodePath,
    usage: &mut EdgeUsageContext,
) -> Result<LinkPath> {
    path.hops()
        .map(|(from, to)| {
            usage.select(graph, from, to).map(|link| LinkHop {
                from,
                to,
                link: link.id.clone(),
            })
        })
        .collect()
}

pub fn disambiguate(
    graph: &TopologyGraph,
    paths: &[NodePath],
    usage: &mut EdgeUsageContext,
) -> Result<Vec<LinkPath>> {
    paths
        .iter()
        .map(|path| disambiguate_path(graph, path, usage))
        .collect()
}
