//! Typed, validated configuration surface (spec.md §6).
//!
//! Grounded on `original_source/modules/configuration_models.py`'s pydantic
//! models, translated into plain serde-derived structs. `Config` never
//! touches the filesystem — not even `agents.behavior_tree_xml`, which holds
//! the tree's XML *text*, not a path to one. Resolving a path from a TOML
//! file into that text is `space-cli`'s job (SPEC_FULL.md §6).

use space_alloc::{CbbaConfig, FirstClaimGreedyConfig, GrapeConfig};
use space_task::{AmountRange, DynamicTaskGenerationConfig, TaskArea};

use crate::error::{SimError, SimResult};

/// The active task-allocation strategy, selected independently of `Config`
/// (mirrors `main.py`'s `--strategy` argument, not a config file field).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Cbba,
    Grape,
    FirstClaimGreedy,
}

impl Strategy {
    /// Parse a strategy name, accepting `CBAA` as an alias for `CBBA`
    /// (`original_source/main.py`'s argparse choices, with the historical
    /// misspelling kept as an accepted alias rather than silently corrected).
    pub fn parse(name: &str) -> Option<Strategy> {
        match name {
            "CBBA" | "CBAA" => Some(Strategy::Cbba),
            "GRAPE" => Some(Strategy::Grape),
            "FirstClaimGreedy" => Some(Strategy::FirstClaimGreedy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Cbba => "CBBA",
            Strategy::Grape => "GRAPE",
            Strategy::FirstClaimGreedy => "FirstClaimGreedy",
        }
    }
}

/// Rendering backend selection. Out of scope to actually implement (no
/// renderer lives in this workspace) but carried as a config field so a
/// config file written for the original tool still deserializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderingMode {
    Screen,
    Terminal,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "None"))]
    Headless,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub sampling_freq: f64,
    /// Ticks run forever (until `mission_completed`) when this is `<= 0.0`,
    /// mirroring `main.py`'s `if max_simulation_time > 0 and ...` guard.
    pub max_simulation_time: f64,
    pub speed_up_factor: u32,
    pub task_visualisation_factor: f64,
    pub rendering_mode: RenderingMode,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Rejection-sampling attempt budget passed to `SimRng::sample_positions`
    /// and the dynamic task generator. Not part of the original config
    /// surface; defaulted so existing config files still deserialize.
    #[cfg_attr(feature = "serde", serde(default = "default_placement_max_attempts"))]
    pub placement_max_attempts: usize,
}

#[cfg(feature = "serde")]
fn default_placement_max_attempts() -> usize {
    10_000
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentsConfig {
    pub quantity: usize,
    pub locations: TaskArea,
    pub max_speed: f64,
    pub max_accel: f64,
    pub max_angular_speed: f64,
    pub work_rate: f64,
    pub communication_radius: f64,
    pub situation_awareness_radius: f64,
    pub target_approaching_radius: f64,
    pub random_exploration_duration: f64,
    /// The behaviour tree's XML text, already read off disk by the CLI.
    pub behavior_tree_xml: String,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TasksConfig {
    pub quantity: usize,
    pub locations: TaskArea,
    pub threshold_done_by_arrival: f64,
    pub amounts: AmountRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dynamic_task_generation: DynamicTaskGenerationConfig,
}

/// A discriminated map keyed by strategy name — only the entry matching the
/// run's selected [`Strategy`] needs to be present (spec.md §7
/// "Unrecognized strategy").
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionMakingConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cbba: Option<CbbaConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grape: Option<GrapeConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_claim_greedy: Option<FirstClaimGreedyConfig>,
}

impl DecisionMakingConfig {
    /// Names of the strategies whose config is present, for the
    /// "Unrecognized strategy" error message.
    pub fn available(&self) -> Vec<String> {
        let mut names = Vec::new();
        if self.cbba.is_some() {
            names.push("CBBA".to_string());
        }
        if self.grape.is_some() {
            names.push("GRAPE".to_string());
        }
        if self.first_claim_greedy.is_some() {
            names.push("FirstClaimGreedy".to_string());
        }
        names
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub simulation: SimulationConfig,
    pub agents: AgentsConfig,
    pub tasks: TasksConfig,
    pub decision_making: DecisionMakingConfig,
}

impl Config {
    /// Structural validation that does not depend on which strategy was
    /// selected (strategy-specific lookups happen in
    /// `World::new`/`SimBuilder`).
    pub fn validate(&self) -> SimResult<()> {
        if self.simulation.sampling_freq <= 0.0 {
            return Err(SimError::Config("simulation.sampling_freq must be positive".into()));
        }
        if self.agents.locations.x_min > self.agents.locations.x_max
            || self.agents.locations.y_min > self.agents.locations.y_max
        {
            return Err(SimError::Config("agents.locations is not a valid rectangle".into()));
        }
        if self.tasks.locations.x_min > self.tasks.locations.x_max
            || self.tasks.locations.y_min > self.tasks.locations.y_max
        {
            return Err(SimError::Config("tasks.locations is not a valid rectangle".into()));
        }
        if self.tasks.amounts.min > self.tasks.amounts.max {
            return Err(SimError::Config("tasks.amounts.min must not exceed tasks.amounts.max".into()));
        }
        Ok(())
    }
}
