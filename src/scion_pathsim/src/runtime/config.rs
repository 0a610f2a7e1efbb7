use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::path_compute::{all_pairs, InterfaceMatch, PathSearchOptions};
use crate::simulation::validate_distribution;

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub topology: Option<PathBuf>,
    pub pairs: Vec<(u32, u32)>,
    pub selected_paths: usize,
    pub distribution: Vec<f64>,
    pub show_paths: usize,
    pub search: PathSearchOptions,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            topology: None,
            pairs: Vec::new(),
            selected_paths: 2,
            distribution: vec![0.5, 0.5],
            show_paths: 2,
            search: PathSearchOptions::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        validate_distribution(self.selected_paths, &self.distribution)
            .context("distribution does not match selected paths")?;
        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawSearch {
    result_cap: Option<usize>,
    max_duplicates: Option<usize>,
    extra_hops: Option<usize>,
    interface_match: Option<InterfaceMatch>,
}

#[derive(Debug, Deserialize, Default)]
struct RawScenario {
    topology: Option<PathBuf>,
    #[serde(default)]
    asns: Vec<u32>,
    #[serde(default)]
    pairs: Vec<(u32, u32)>,
    selected_paths: Option<usize>,
    distribution: Option<Vec<f64>>,
    show_paths: Option<usize>,
    search: Option<RawSearch>,
}

pub fn load_scenario_config(path: &Path) -> Result<ScenarioConfig> {
    let raw_text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let mut cfg = parse_scenario_config(&raw_text)?;

    // topology paths are relative to the scenario file
    if let Some(base) = path.parent() {
        cfg.topology = cfg.topology.map(|topology| {
            if topology.is_relative() {
                base.join(topology)
            } else {
                topology
            }
        });
    }
    Ok(cfg)
}

pub fn parse_scenario_config(raw_text: &str) -> Result<ScenarioConfig> {
    let raw: RawScenario =
        serde_yaml::from_str(raw_text).context("failed to parse scenario yaml")?;
    let defaults = ScenarioConfig::default();
    let search_raw = raw.search.unwrap_or_default();

    let mut pairs = all_pairs(&raw.asns);
    pairs.extend(raw.pairs);

    Ok(ScenarioConfig {
        topology: raw.topology,
        pairs,
        selected_paths: raw.selected_paths.unwrap_or(defaults.selected_paths),
        distribution: raw.distribution.unwrap_or(defaults.distribution),
        show_paths: raw.show_paths.unwrap_or(defaults.show_paths),
        search: PathSearchOptions {
            result_cap: search_raw
                .result_cap
                .unwrap_or(defaults.search.result_cap),
            max_duplicates: search_raw
                .max_duplicates
                .unwrap_or(defaults.search.max_duplicates),
            extra_hops: search_raw
                .extra_hops
                .unwrap_or(defaults.search.extra_hops),
            interface_match: search_raw
                .interface_match
                .unwrap_or(defaults.search.interface_match),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = parse_scenario_config("{}").expect("config");
        assert_eq!(cfg, ScenarioConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parses_full_scenario() {
        let raw = r#"
topology: topo.json
asns: [47377, 12392, 5]
pairs: [[1, 3]]
selected_paths: 3
distribution: [0.2, 0.3, 0.5]
show_paths: 4
search:
  result_cap: 100
  max_duplicates: 2
  interface_match: substring
"#;
        let cfg = parse_scenario_config(raw).expect("config");
        assert_eq!(cfg.topology, Some(PathBuf::from("topo.json")));
        assert_eq!(
            cfg.pairs,
            vec![(47377, 12392), (47377, 5), (12392, 5), (1, 3)]
        );
        assert_eq!(cfg.selected_paths, 3);
        assert_eq!(cfg.show_paths, 4);
        assert_eq!(cfg.search.result_cap, 100);
        assert_eq!(cfg.search.max_duplicates, 2);
        assert_eq!(cfg.search.extra_hops, 3);
        assert_eq!(cfg.search.interface_match, InterfaceMatch::Substring);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn distribution_length_must_match_selection() {
        let cfg = parse_scenario_config("selected_paths: 3\n").expect("config");
        assert!(cfg.validate().is_err());

        let cfg = parse_scenario_config("distribution: [0.5, 2.0]\n").expect("config");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn topology_resolves_against_scenario_dir() {
        let dir = std::env::temp_dir().join(format!("scion_pathsim_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");

        let relative = dir.join("relative.yaml");
        fs::write(&relative, "topology: topo/links.json\n").expect("write scenario");
        let cfg = load_scenario_config(&relative).expect("config");
        assert_eq!(cfg.topology, Some(dir.join("topo/links.json")));

        let absolute_target = dir.join("abs.json");
        let absolute = dir.join("absolute.yaml");
        fs::write(
            &absolute,
            format!("topology: {}\n", absolute_target.display()),
        )
        .expect("write scenario");
        let cfg = load_scenario_config(&absolute).expect("config");
        assert_eq!(cfg.topology, Some(absolute_target));

        let bare = dir.join("bare.yaml");
        fs::write(&bare, "asns: [1, 2]\n").expect("write scenario");
        assert_eq!(load_scenario_config(&bare).expect("config").topology, None);

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn zero_cap_fails_validation() {
        let cfg = parse_scenario_config("search: {result_cap: 0}\n").expect("config");
        assert!(cfg.validate().is_err());
    }
}
