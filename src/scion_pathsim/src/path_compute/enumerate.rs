use tracing::{debug, info};

use super::PathSearchOptions;
use crate::error::{PathError, Result};
use crate::model::{NodePath, SimplePaths, TopologyGraph};

/// Simple AS sequences from `src` to `dst` no longer than the shortest hop
/// count plus `options.extra_hops`, cut off after `options.result_cap`
/// results.
pub fn find_paths(
    graph: &TopologyGraph,
    src: u32,
    dst: u32,
    options: &PathSearchOptions,
) -> Result<Vec<NodePath>> {
    if src == dst {
        return Err(PathError::SelfLoop(src));
    }
    options.validate()?;

    let shortest = graph.shortest_hop_count(src, dst)?;
    let cutoff = shortest.saturating_add(options.extra_hops);
    info!("finding paths between AS{src} and AS{dst}");
    debug!(shortest, cutoff, cap = options.result_cap, "path search bounds");

    let (paths, truncated) =
        collect_capped(SimplePaths::new(graph, src, dst, cutoff), options.result_cap);
    if truncated {
        info!(
            "path enumeration for AS{src} -> AS{dst} stopped at result cap {}",
            options.result_cap
        );
    }
    Ok(paths)
}

/// Takes up to `cap` paths; the flag is set only when the walk had more.
fn collect_capped<I>(mut walk: I, cap: usize) -> (Vec<NodePath>, bool)
where
    I: Iterator<Item = NodePath>,
{
    let paths: Vec<NodePath> = walk.by_ref().take(cap).collect();
    let truncated = paths.len() == cap && walk.next().is_some();
    (paths, truncated)
}
