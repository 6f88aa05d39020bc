//! Dynamic task generator — periodically injects fresh tasks into a running
//! simulation, up to a configured generation budget.

use space_core::{SimRng, TaskId};

use crate::task::Task;

/// Bounding box + non-overlap radius tasks are placed within, mirroring the
/// `OperatingArea` used at startup placement.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskArea {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub non_overlap_radius: f64,
}

/// Range of task workload amounts sampled uniformly at generation time.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

/// Configuration for periodic dynamic task injection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicTaskGenerationConfig {
    pub enabled: bool,
    /// Minimum simulated seconds between generation events.
    pub interval_seconds: f64,
    /// Generation events never exceed this count over a run's lifetime.
    pub max_generations: u32,
    /// Tasks created per generation event.
    pub tasks_per_generation: u32,
}

impl Default for DynamicTaskGenerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: 10.0,
            max_generations: 5,
            tasks_per_generation: 5,
        }
    }
}

/// Stateful generator: tracks how many generation events have fired and
/// when the last one happened, in simulated seconds.
#[derive(Clone, Debug)]
pub struct DynamicTaskGenerator {
    config: DynamicTaskGenerationConfig,
    generation_count: u32,
    last_generation_secs: f64,
}

impl DynamicTaskGenerator {
    pub fn new(config: DynamicTaskGenerationConfig) -> Self {
        Self {
            config,
            generation_count: 0,
            last_generation_secs: 0.0,
        }
    }

    pub fn generation_count(&self) -> u32 {
        self.generation_count
    }

    /// If it is time for a new generation event, sample a fresh batch of
    /// tasks and return them; otherwise return `None`.
    ///
    /// `elapsed_secs` is simulated time since run start (`Tick * sampling_time`,
    /// never wall-clock — see `space-core::time`). `next_id` is the first
    /// `TaskId` to assign to the new batch (callers pass
    /// `TaskStore::next_id()`); IDs are assigned sequentially from there.
    pub fn maybe_generate(
        &mut self,
        elapsed_secs: f64,
        next_id: TaskId,
        area: &TaskArea,
        amounts: AmountRange,
        task_visualisation_factor: f64,
        rng: &mut SimRng,
        placement_max_attempts: usize,
    ) -> Option<Vec<Task>> {
        if !self.config.enabled {
            return None;
        }
        if self.generation_count >= self.config.max_generations {
            return None;
        }
        if elapsed_secs - self.last_generation_secs < self.config.interval_seconds {
            return None;
        }

        let positions = rng
            .sample_positions(
                self.config.tasks_per_generation as usize,
                area.x_min,
                area.x_max,
                area.y_min,
                area.y_max,
                area.non_overlap_radius,
                placement_max_attempts,
            )
            .ok()?;

        let tasks = positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let amount = rng.gen_range(amounts.min..=amounts.max);
                let radius = (amount / task_visualisation_factor).max(1.0);
                Task::new(TaskId(next_id.0 + i as u32), pos, radius, amount)
            })
            .collect();

        self.last_generation_secs = elapsed_secs;
        self.generation_count += 1;

        Some(tasks)
    }
}
