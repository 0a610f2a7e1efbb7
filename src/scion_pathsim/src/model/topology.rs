use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use tracing::warn;

use super::link_id::LinkEndpoints;
use super::simple_paths::SimplePaths;
use crate::error::{PathError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct AsNode {
    pub asn: u32,
    pub isd: u16,
    pub interfaces: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkAttrs {
    pub capacity: f64,
    pub latency: f64,
    pub packet_loss: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: String,
    pub a: u32,
    pub b: u32,
    pub endpoints: LinkEndpoints,
    pub capacity: f64,
    pub latency: f64,
    pub packet_loss: f64,
}

/// Parallel links towards one neighbor, in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Neighbor {
    pub asn: u32,
    pub links: Vec<usize>,
}

/// Undirected AS multigraph. Built once, then only queried.
#[derive(Debug, Default, Clone)]
pub struct TopologyGraph {
    nodes: BTreeMap<u32, AsNode>,
    links: Vec<Link>,
    link_index: HashMap<String, usize>,
    adjacency: BTreeMap<u32, Vec<Neighbor>>,
}

impl TopologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node<I, S>(&mut self, asn: u32, isd: u16, interfaces: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.nodes.contains_key(&asn) {
            return Err(PathError::DuplicateAs(asn));
        }
        self.nodes.insert(
            asn,
            AsNode {
                asn,
                isd,
                interfaces: interfaces.into_iter().map(Into::into).collect(),
            },
        );
        self.adjacency.entry(asn).or_default();
        Ok(())
    }

    pub fn add_link(&mut self, u: u32, v: u32, id: &str, attrs: LinkAttrs) -> Result<()> {
        let invalid = |reason: String| PathError::InvalidLink {
            id: id.to_string(),
            reason,
        };

        for asn in [u, v] {
            if !self.nodes.contains_key(&asn) {
                return Err(PathError::UnknownAs(asn));
            }
        }
        if u == v {
            return Err(invalid(format!("both ends on AS{u}")));
        }
        if self.link_index.contains_key(id) {
            return Err(PathError::DuplicateLink(id.to_string()));
        }
        if !attrs.capacity.is_finite() || attrs.capacity < 0.0 {
            return Err(invalid(format!("capacity {}", attrs.capacity)));
        }
        if !attrs.latency.is_finite() || attrs.latency < 0.0 {
            return Err(invalid(format!("latency {}", attrs.latency)));
        }
        if !(0.0..=1.0).contains(&attrs.packet_loss) {
            return Err(invalid(format!("packet loss {}", attrs.packet_loss)));
        }
        let endpoints: LinkEndpoints = id.parse().map_err(invalid)?;
        if !endpoints.involves(u) || !endpoints.involves(v) {
            warn!("link {id} connects AS{u} and AS{v} but names other ASes in its identifier");
        }

        let idx = self.links.len();
        self.links.push(Link {
            id: id.to_string(),
            a: u,
            b: v,
            endpoints,
            capacity: attrs.capacity,
            latency: attrs.latency,
            packet_loss: attrs.packet_loss,
        });
        self.link_index.insert(id.to_string(), idx);
        self.attach(u, v, idx);
        self.attach(v, u, idx);
        Ok(())
    }

    fn attach(&mut self, from: u32, to: u32, idx: usize) {
        let neighbors = self.adjacency.entry(from).or_default();
        match neighbors.iter_mut().find(|n| n.asn == to) {
            Some(entry) => entry.links.push(idx),
            None => neighbors.push(Neighbor {
                asn: to,
                links: vec![idx],
            }),
        }
    }

    pub fn node(&self, asn: u32) -> Option<&AsNode> {
        self.nodes.get(&asn)
    }

    pub fn contains(&self, asn: u32) -> bool {
        self.nodes.contains_key(&asn)
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.link_index.get(id).map(|idx| &self.links[*idx])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn neighbors(&self, asn: u32) -> &[Neighbor] {
        self.adjacency.get(&asn).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Links joining `u` and `v` in insertion order, whichever end was
    /// recorded first.
    pub fn links_between(&self, u: u32, v: u32) -> Vec<&Link> {
        self.neighbors(u)
            .iter()
            .find(|n| n.asn == v)
            .map(|n| n.links.iter().map(|idx| &self.links[*idx]).collect())
            .unwrap_or_default()
    }

    pub fn shortest_hop_count(&self, u: u32, v: u32) -> Result<usize> {
        self.check_endpoints(u, v)?;
        if u == v {
            return Ok(0);
        }

        let mut seen: BTreeSet<u32> = BTreeSet::from([u]);
        let mut queue: VecDeque<(u32, usize)> = VecDeque::from([(u, 0)]);
        while let Some((node, hops)) = queue.pop_front() {
            for neighbor in self.neighbors(node) {
                if neighbor.asn == v {
                    return Ok(hops + 1);
                }
                if seen.insert(neighbor.asn) {
                    queue.push_back((neighbor.asn, hops + 1));
                }
            }
        }
        Err(PathError::DisconnectedGraph { src: u, dst: v })
    }

    /// Lazily walks every simple path from `u` to `v` with at most
    /// `max_hops` links. A node sequence is produced once per combination of
    /// parallel links along it.
    pub fn all_simple_paths(&self, u: u32, v: u32, max_hops: usize) -> Result<SimplePaths<'_>> {
        if u == v {
            return Err(PathError::SelfLoop(u));
        }
        self.shortest_hop_count(u, v)?;
        Ok(SimplePaths::new(self, u, v, max_hops))
    }

    pub(crate) fn check_endpoints(&self, u: u32, v: u32) -> Result<()> {
        for asn in [u, v] {
            if !self.contains(asn) {
                return Err(PathError::UnknownAs(asn));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn attrs(capacity: f64, latency: f64, packet_loss: f64) -> LinkAttrs {
        LinkAttrs {
            capacity,
            latency,
            packet_loss,
        }
    }

    /// Three ASes, two parallel links between 1 and 2, one between 2 and 3.
    pub(crate) fn parallel_fixture() -> TopologyGraph {
        let mut graph = TopologyGraph::new();
        graph.add_node(1, 1, ["1-1-1", "1-1-2"]).expect("node 1");
        graph.add_node(2, 1, ["1-2-1", "1-2-2", "1-2-3"]).expect("node 2");
        graph.add_node(3, 1, ["1-3-1"]).expect("node 3");
        graph
            .add_link(1, 2, "1-1-1,1-2-1", attrs(10.0, 5.0, 0.01))
            .expect("link A");
        graph
            .add_link(1, 2, "1-1-2,1-2-2", attrs(10.0, 5.0, 0.01))
            .expect("link B");
        graph
            .add_link(2, 3, "1-2-3,1-3-1", attrs(10.0, 5.0, 0.01))
            .expect("link C");
        graph
    }

    #[test]
    fn links_between_ignores_recorded_direction() {
        let graph = parallel_fixture();
        let forward: Vec<&str> = graph
            .links_between(1, 2)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        let backward: Vec<&str> = graph
            .links_between(2, 1)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(forward, vec!["1-1-1,1-2-1", "1-1-2,1-2-2"]);
        assert_eq!(forward, backward);
        assert!(graph.links_between(1, 3).is_empty());
    }

    #[test]
    fn rejects_duplicate_ids_and_bad_attrs() {
        let mut graph = parallel_fixture();
        assert_eq!(
            graph.add_link(1, 2, "1-1-1,1-2-1", attrs(1.0, 1.0, 0.0)),
            Err(PathError::DuplicateLink("1-1-1,1-2-1".to_string()))
        );
        assert!(matches!(
            graph.add_link(1, 2, "1-1-9,1-2-9", attrs(1.0, 1.0, 1.5)),
            Err(PathError::InvalidLink { .. })
        ));
        assert!(matches!(
            graph.add_link(1, 2, "garbage", attrs(1.0, 1.0, 0.0)),
            Err(PathError::InvalidLink { .. })
        ));
        assert_eq!(
            graph.add_link(1, 9, "1-1-9,1-9-1", attrs(1.0, 1.0, 0.0)),
            Err(PathError::UnknownAs(9))
        );
        assert_eq!(graph.add_node(1, 1, Vec::<String>::new()), Err(PathError::DuplicateAs(1)));
        assert_eq!(graph.link_count(), 3);
    }

    #[test]
    fn shortest_hop_count_uses_bfs() {
        let mut graph = parallel_fixture();
        graph.add_node(4, 1, Vec::<String>::new()).expect("node 4");
        graph.add_node(5, 2, Vec::<String>::new()).expect("node 5");
        graph
            .add_link(1, 4, "1-1-3,1-4-1", attrs(1.0, 1.0, 0.0))
            .expect("link");
        graph
            .add_link(4, 3, "1-4-2,1-3-2", attrs(1.0, 1.0, 0.0))
            .expect("link");

        assert_eq!(graph.shortest_hop_count(1, 3), Ok(2));
        assert_eq!(graph.shortest_hop_count(1, 2), Ok(1));
        assert_eq!(
            graph.shortest_hop_count(1, 5),
            Err(PathError::DisconnectedGraph { src: 1, dst: 5 })
        );
        assert_eq!(graph.shortest_hop_count(1, 7), Err(PathError::UnknownAs(7)));
    }

    #[test]
    fn all_simple_paths_rejects_self_loop_and_disconnected() {
        let mut graph = parallel_fixture();
        graph.add_node(5, 2, Vec::<String>::new()).expect("node 5");
        assert!(matches!(
            graph.all_simple_paths(1, 1, 3),
            Err(PathError::SelfLoop(1))
        ));
        assert!(matches!(
            graph.all_simple_paths(1, 5, 3),
            Err(PathError::DisconnectedGraph { src: 1, dst: 5 })
        ));
    }
}
