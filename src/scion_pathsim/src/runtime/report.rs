use std::fmt::Write;

use serde::Serialize;

use crate::model::{PathMetrics, ScionPath};
use crate::simulation::LinkLoad;

#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub src: u32,
    pub dst: u32,
    pub total_paths: usize,
    pub paths: Vec<ScionPath>,
    pub distribution: Vec<f64>,
    pub metrics: Vec<PathMetrics>,
    pub links: Vec<LinkLoad>,
}

/// One line per path: `<from> <ifid>><ifid>  <to>` for each hop, the source
/// AS only repeated where the chain breaks.
pub fn render_compact(paths: &[ScionPath], limit: usize) -> String {
    let mut out = String::new();
    for (idx, path) in paths.iter().take(limit).enumerate() {
        let _ = writeln!(out, "Path {} ({} hops):", idx + 1, path.len());
        let mut line = String::new();
        let mut last_to = None;
        for hop in path {
            if last_to != Some(hop.from) {
                let _ = write!(line, "  {} ", hop.from);
            }
            let _ = write!(line, "{}>{}  {}  ", hop.from_id, hop.to_id, hop.to);
            last_to = Some(hop.to);
        }
        let _ = writeln!(out, "{line}");
        out.push('\n');
    }
    out
}

pub fn render_extended(paths: &[ScionPath], limit: usize) -> String {
    let mut out = String::new();
    for (idx, path) in paths.iter().take(limit).enumerate() {
        let _ = writeln!(out, "Path {} ({} hops):", idx + 1, path.len());
        for hop in path {
            let _ = writeln!(
                out,
                "  {} {} -> {} {}",
                hop.from, hop.from_id, hop.to, hop.to_id
            );
            let _ = writeln!(out, "    - Capacity: {}", hop.capacity);
            let _ = writeln!(out, "    - Latency: {}", hop.latency);
            let _ = writeln!(out, "    - Packet Loss: {}", hop.packet_loss);
        }
    }
    out
}

pub fn render_metrics(metrics: &[PathMetrics]) -> String {
    let mut out = String::from("Results:\n");
    for (idx, m) in metrics.iter().enumerate() {
        let _ = writeln!(
            out,
            "Path {}: Latency {}, Loss {}, Goodput {}",
            idx + 1,
            m.latency,
            m.loss,
            m.goodput
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScionHop;

    fn sample() -> Vec<ScionPath> {
        vec![vec![
            ScionHop {
                from: 1,
                to: 2,
                link: "1-1-1,1-2-1".to_string(),
                from_id: 1,
                to_id: 1,
                capacity: 10.0,
                latency: 5.0,
                packet_loss: 0.01,
            },
            ScionHop {
                from: 2,
                to: 3,
                link: "1-2-3,1-3-1".to_string(),
                from_id: 3,
                to_id: 1,
                capacity: 10.0,
                latency: 5.0,
                packet_loss: 0.01,
            },
        ]]
    }

    #[test]
    fn compact_chains_hops() {
        let text = render_compact(&sample(), 2);
        assert_eq!(text, "Path 1 (2 hops):\n  1 1>1  2  3>1  3  \n\n");
        assert_eq!(render_compact(&sample(), 0), "");
    }

    #[test]
    fn extended_lists_link_metrics() {
        let text = render_extended(&sample(), 1);
        assert!(text.starts_with("Path 1 (2 hops):\n  1 1 -> 2 1\n    - Capacity: 10\n"));
        assert!(text.contains("  2 3 -> 3 1\n"));
        assert!(text.contains("    - Packet Loss: 0.01\n"));
    }

    #[test]
    fn metrics_lines() {
        let text = render_metrics(&[PathMetrics {
            latency: 10.0,
            loss: 0.01,
            goodput: 2.5,
        }]);
        assert_eq!(text, "Results:\nPath 1: Latency 10, Loss 0.01, Goodput 2.5\n");
    }
}
