use super::{
    disambiguate, find_paths, limit_duplicates, render_path, EdgeUsageContext, PathSearchOptions,
};
use crate::error::Result;
use crate::model::{NodePath, ScionPath, TopologyGraph};

/// Limits duplicates, assigns links with a fresh usage context and renders
/// the result, shortest paths first.
pub fn resolve_paths(
    graph: &TopologyGraph,
    paths: Vec<NodePath>,
    options: &PathSearchOptions,
) -> Result<Vec<ScionPath>> {
    let limited = limit_duplicates(paths, options.max_duplicates);
    let mut usage = EdgeUsageContext::new();
    let link_paths = disambiguate(graph, &limited, &mut usage)?;

    let mut out = link_paths
        .iter()
        .map(|path| render_path(graph, path, options.interface_match))
        .collect::<Result<Vec<ScionPath>>>()?;
    out.sort_by_key(|path| path.len());
    Ok(out)
}

pub fn get_paths(
    graph: &TopologyGraph,
    src: u32,
    dst: u32,
    options: &PathSearchOptions,
) -> Result<Vec<ScionPath>> {
    let paths = find_paths(graph, src, dst, options)?;
    resolve_paths(graph, paths, options)
}

/// Every unordered pair `(a, b)` with `a` listed before `b`.
pub fn all_pairs(asns: &[u32]) -> Vec<(u32, u32)> {
    asns.iter()
        .enumerate()
        .flat_map(|(idx, a)| asns[idx + 1..].iter().map(move |b| (*a, *b)))
        .collect()
}
