use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{PathError, Result};
use crate::model::{PathMetrics, ScionPath};

/// Contention tally for one link across every selected path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkLoad {
    pub link: String,
    /// Capacity seen on the first hop that used the link.
    pub capacity: f64,
    pub usage_count: usize,
    /// Sum of the shares handed to each path crossing the link.
    pub allocated: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub metrics: Vec<PathMetrics>,
    pub links: Vec<LinkLoad>,
}

pub fn validate_distribution(path_count: usize, distribution: &[f64]) -> Result<()> {
    if distribution.len() != path_count {
        return Err(PathError::Configuration(format!(
            "distribution has {} entries for {} paths",
            distribution.len(),
            path_count
        )));
    }
    if let Some((idx, fraction)) = distribution
        .iter()
        .enumerate()
        .find(|(_, fraction)| !(0.0..=1.0).contains(*fraction))
    {
        return Err(PathError::Configuration(format!(
            "distribution entry {idx} is {fraction}, expected a fraction in [0, 1]"
        )));
    }
    Ok(())
}

fn base_metrics(idx: usize, path: &ScionPath) -> Result<PathMetrics> {
    if path.is_empty() {
        return Err(PathError::Configuration(format!("path {idx} has no hops")));
    }
    Ok(PathMetrics {
        latency: path.iter().map(|hop| hop.latency).sum(),
        loss: path
            .iter()
            .map(|hop| hop.packet_loss)
            .fold(f64::NEG_INFINITY, f64::max),
        goodput: path
            .iter()
            .map(|hop| hop.capacity)
            .fold(f64::INFINITY, f64::min),
    })
}

/// Splits traffic over `paths` by `distribution` and returns per-path
/// metrics plus the per-link tally.
///
/// Latency is the hop sum, loss the worst hop, goodput the bottleneck
/// capacity. Every link's capacity is then divided equally among all hops
/// referencing it, once, and a path's goodput drops to its fraction of any
/// smaller share.
pub fn simulate_detailed(paths: &[ScionPath], distribution: &[f64]) -> Result<SimulationOutcome> {
    validate_distribution(paths.len(), distribution)?;
    info!(
        "simulating traffic over {} paths with distribution {:?}",
        paths.len(),
        distribution
    );

    let mut metrics = paths
        .iter()
        .enumerate()
        .map(|(idx, path)| base_metrics(idx, path))
        .collect::<Result<Vec<PathMetrics>>>()?;

    let mut links: Vec<LinkLoad> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for hop in paths.iter().flatten() {
        let slot = *index.entry(hop.link.as_str()).or_insert_with(|| {
            links.push(LinkLoad {
                link: hop.link.clone(),
                capacity: hop.capacity,
                usage_count: 0,
                allocated: 0.0,
            });
            links.len() - 1
        });
        links[slot].usage_count += 1;
    }

    for (idx, path) in paths.iter().enumerate() {
        for hop in path {
            let Some(slot) = index.get(hop.link.as_str()).copied() else {
                continue;
            };
            let load = &mut links[slot];
            let share = load.capacity / load.usage_count as f64;
            let used = distribution[idx] * share;
            load.allocated += used;
            debug!(path = idx, link = %hop.link, share, used, "link contention");
            if used < metrics[idx].goodput {
                metrics[idx].goodput = used;
            }
        }
    }

    Ok(SimulationOutcome { metrics, links })
}

pub fn simulate(paths: &[ScionPath], distribution: &[f64]) -> Result<Vec<PathMetrics>> {
    simulate_detailed(paths, distribution).map(|outcome| outcome.metrics)
}
