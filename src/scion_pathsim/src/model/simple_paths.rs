use std::iter::FusedIterator;

use super::path::NodePath;
use super::topology::TopologyGraph;

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: u32,
    neighbor: usize,
    link: usize,
}

impl Frame {
    fn new(node: u32) -> Self {
        Self {
            node,
            neighbor: 0,
            link: 0,
        }
    }
}

/// Depth-first walk over simple paths between two ASes.
///
/// Every parallel link is its own branch, so a node sequence reachable over
/// several link combinations is yielded once per combination. The walk is
/// consumed as it goes and cannot be restarted.
#[derive(Debug)]
pub struct SimplePaths<'a> {
    graph: &'a TopologyGraph,
    target: u32,
    max_hops: usize,
    path: Vec<u32>,
    stack: Vec<Frame>,
}

impl<'a> SimplePaths<'a> {
    pub(crate) fn new(graph: &'a TopologyGraph, src: u32, dst: u32, max_hops: usize) -> Self {
        let stack = if max_hops == 0 {
            Vec::new()
        } else {
            vec![Frame::new(src)]
        };
        Self {
            graph,
            target: dst,
            max_hops,
            path: vec![src],
            stack,
        }
    }

    fn next_child(&mut self) -> Option<Option<u32>> {
        let frame = self.stack.last_mut()?;
        let neighbors = self.graph.neighbors(frame.node);
        loop {
            let Some(entry) = neighbors.get(frame.neighbor) else {
                return Some(None);
            };
            if frame.link < entry.links.len() {
                frame.link += 1;
                return Some(Some(entry.asn));
            }
            frame.neighbor += 1;
            frame.link = 0;
        }
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = NodePath;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(child) = self.next_child()? else {
                self.stack.pop();
                self.path.pop();
                continue;
            };
            if self.path.contains(&child) {
                continue;
            }

            // links used once `child` is appended
            let hops = self.path.len();
            if child == self.target {
                let mut nodes = self.path.clone();
                nodes.push(child);
                return Some(NodePath::new(nodes));
            }
            if hops < self.max_hops {
                self.path.push(child);
                self.stack.push(Frame::new(child));
            }
        }
    }
}

impl FusedIterator for SimplePaths<'_> {}
