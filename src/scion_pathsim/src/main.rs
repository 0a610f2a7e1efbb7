use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use scion_pathsim::path_compute::{get_paths, InterfaceMatch};
use scion_pathsim::runtime::config::{load_scenario_config, ScenarioConfig};
use scion_pathsim::runtime::loader::load_topology;
use scion_pathsim::runtime::report::{
    render_compact, render_extended, render_metrics, PairReport,
};
use scion_pathsim::simulation::simulate_detailed;
use scion_pathsim::PathError;
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scion-pathsim")]
#[command(about = "Enumerate SCION paths between ASes and simulate split traffic over them")]
struct Args {
    #[arg(long)]
    topology: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, requires = "dst")]
    src: Option<u32>,
    #[arg(long, requires = "src")]
    dst: Option<u32>,
    #[arg(long)]
    selected_paths: Option<usize>,
    #[arg(long, value_delimiter = ',')]
    distribution: Option<Vec<f64>>,
    #[arg(long)]
    cut: Option<usize>,
    #[arg(long)]
    max_duplicates: Option<usize>,
    #[arg(long)]
    extra_hops: Option<usize>,
    #[arg(long)]
    interface_match: Option<InterfaceMatch>,
    #[arg(long)]
    show_paths: Option<usize>,
    #[arg(long)]
    output_json: Option<PathBuf>,
    #[arg(long, default_value = "INFO")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut cfg = match args.config.as_ref() {
        Some(path) => load_scenario_config(path)?,
        None => ScenarioConfig::default(),
    };
    apply_overrides(&mut cfg, &args);
    cfg.validate()?;
    if cfg.pairs.is_empty() {
        bail!("no AS pairs to analyse, pass --src/--dst or list asns/pairs in --config");
    }

    let Some(topology_path) = args.topology.clone().or_else(|| cfg.topology.clone()) else {
        bail!("no topology given, pass --topology or set it in --config");
    };
    let graph = load_topology(&topology_path)?;

    let mut reports = Vec::new();
    for (src, dst) in cfg.pairs.iter().copied() {
        let paths = match get_paths(&graph, src, dst, &cfg.search) {
            Ok(paths) => paths,
            Err(
                err @ (PathError::DisconnectedGraph { .. }
                | PathError::UnknownAs(_)
                | PathError::SelfLoop(_)),
            ) => {
                warn!("skip AS{src} -> AS{dst}: {err}");
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("path search AS{src} -> AS{dst}"))
            }
        };
        info!("found {} paths from AS{src} to AS{dst}", paths.len());

        print!("{}", render_compact(&paths, cfg.show_paths));
        print!("{}", render_extended(&paths, cfg.show_paths));

        if paths.len() < cfg.selected_paths {
            warn!(
                "skip simulation for AS{src} -> AS{dst}: {} paths found, {} selected",
                paths.len(),
                cfg.selected_paths
            );
            continue;
        }
        let selected = &paths[..cfg.selected_paths];
        let outcome = simulate_detailed(selected, &cfg.distribution)?;
        print!("{}", render_metrics(&outcome.metrics));

        reports.push(PairReport {
            src,
            dst,
            total_paths: paths.len(),
            paths: selected.to_vec(),
            distribution: cfg.distribution.clone(),
            metrics: outcome.metrics,
            links: outcome.links,
        });
    }

    if let Some(path) = args.output_json {
        let payload = json!({
            "config": {
                "topology": topology_path,
                "selected_paths": cfg.selected_paths,
                "result_cap": cfg.search.result_cap,
                "max_duplicates": cfg.search.max_duplicates,
                "extra_hops": cfg.search.extra_hops,
            },
            "pairs": reports,
        });
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_vec_pretty(&payload)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

fn apply_overrides(cfg: &mut ScenarioConfig, args: &Args) {
    if let (Some(src), Some(dst)) = (args.src, args.dst) {
        cfg.pairs = vec![(src, dst)];
    }
    if let Some(selected) = args.selected_paths {
        cfg.selected_paths = selected;
    }
    if let Some(distribution) = args.distribution.clone() {
        cfg.distribution = distribution;
    }
    if let Some(show) = args.show_paths {
        cfg.show_paths = show;
    }
    if let Some(cut) = args.cut {
        cfg.search.result_cap = cut;
    }
    if let Some(max_duplicates) = args.max_duplicates {
        cfg.search.max_duplicates = max_duplicates;
    }
    if let Some(extra_hops) = args.extra_hops {
        cfg.search.extra_hops = extra_hops;
    }
    if let Some(matching) = args.interface_match {
        cfg.search.interface_match = matching;
    }
}

fn init_logging(level: &str) -> Result<()> {
    let level = level.parse::<Level>()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .init();
    Ok(())
}
