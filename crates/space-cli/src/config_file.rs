//! TOML config file loading (spec.md §6, SPEC_FULL.md §6).
//!
//! `space_sim::Config` never touches the filesystem — `agents.behavior_tree_xml`
//! holds the tree's XML *text*. The config file on disk instead points at a
//! path (`original_source/main.py`'s `config.yaml` carries
//! `behavior_tree_xml: "trees/default.xml"`, not inline XML), so this module
//! deserializes a [`RawConfig`] with that field typed as a path, reads the
//! file it names, and assembles the real `Config`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use space_sim::{AgentsConfig, Config, DecisionMakingConfig, SimulationConfig, TasksConfig};
use space_task::TaskArea;

use crate::error::{CliError, CliResult};

#[derive(Deserialize)]
struct RawConfig {
    simulation: SimulationConfig,
    agents: RawAgentsConfig,
    tasks: TasksConfig,
    #[serde(default)]
    decision_making: DecisionMakingConfig,
}

#[derive(Deserialize)]
struct RawAgentsConfig {
    quantity: usize,
    locations: TaskArea,
    max_speed: f64,
    max_accel: f64,
    max_angular_speed: f64,
    work_rate: f64,
    communication_radius: f64,
    situation_awareness_radius: f64,
    target_approaching_radius: f64,
    random_exploration_duration: f64,
    /// Path to the behaviour tree description, resolved relative to the
    /// config file's own directory (mirrors how `main.py` resolves relative
    /// asset paths against its working directory).
    behavior_tree_xml: PathBuf,
}

/// Load and fully resolve a [`Config`] from a TOML file at `path`.
pub fn load(path: &Path) -> CliResult<Config> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig { path: path.to_path_buf(), source })?;
    let raw: RawConfig =
        toml::from_str(&text).map_err(|source| CliError::ParseConfig { path: path.to_path_buf(), source: Box::new(source) })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tree_path = if raw.agents.behavior_tree_xml.is_absolute() {
        raw.agents.behavior_tree_xml.clone()
    } else {
        base_dir.join(&raw.agents.behavior_tree_xml)
    };
    let behavior_tree_xml = fs::read_to_string(&tree_path)
        .map_err(|source| CliError::ReadBehaviorTree { path: tree_path, source })?;

    let config = Config {
        simulation: raw.simulation,
        agents: AgentsConfig {
            quantity: raw.agents.quantity,
            locations: raw.agents.locations,
            max_speed: raw.agents.max_speed,
            max_accel: raw.agents.max_accel,
            max_angular_speed: raw.agents.max_angular_speed,
            work_rate: raw.agents.work_rate,
            communication_radius: raw.agents.communication_radius,
            situation_awareness_radius: raw.agents.situation_awareness_radius,
            target_approaching_radius: raw.agents.target_approaching_radius,
            random_exploration_duration: raw.agents.random_exploration_duration,
            behavior_tree_xml,
        },
        tasks: raw.tasks,
        decision_making: raw.decision_making,
    };
    config.validate()?;
    Ok(config)
}
