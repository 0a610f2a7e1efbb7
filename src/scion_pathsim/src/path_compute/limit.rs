use std::collections::BTreeMap;

use tracing::debug;

use crate::model::NodePath;

/// Keeps the first `max_count` copies of every distinct AS sequence, in
/// input order.
///
/// Walking a multigraph by AS produces one copy of a sequence per
/// combination of parallel links along it. A handful of copies is enough for
/// link assignment to rotate through the parallel links; the rest would only
/// multiply the output.
pub fn limit_duplicates(paths: Vec<NodePath>, max_count: usize) -> Vec<NodePath> {
    let total = paths.len();
    let mut seen: BTreeMap<NodePath, usize> = BTreeMap::new();
    let kept: Vec<NodePath> = paths
        .into_iter()
        .filter(|path| {
            let count = seen.entry(path.clone()).or_insert(0);
            if *count < max_count {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect();
    debug!(
        kept = kept.len(),
        dropped = total - kept.len(),
        max_count,
        "limited duplicate paths"
    );
    kept
}
