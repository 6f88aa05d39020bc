//! `World` — owns every piece of simulation state and drives the tick loop
//! (spec.md §4.11).
//!
//! # Tick order
//!
//! ```text
//! ① Perception  — rebuild the R-tree snapshot from this tick's positions.
//! ② Behaviour   — for each agent, ascending AgentId order:
//!                   sense → decide → execute/explore (no positions move yet;
//!                   only `acceleration` accumulates via `follow()`).
//! ③ Kinematics  — for each agent: integrate velocity/position from the
//!                   acceleration accumulated in ②, reset acceleration.
//! ④ Clock       — advance one tick.
//! ⑤ Completion  — latch `mission_completed` once every task is done and
//!                   dynamic generation (if enabled) is exhausted.
//! ⑥ Generation  — dynamic task generator may inject a fresh batch.
//! ```
//!
//! Strictly single-threaded and strictly ascending-AgentId within ② — CBBA's
//! and GRAPE's consensus correctness depends on that ordering within a tick
//! (spec.md §5); this is not a candidate for a Rayon-parallel phase the way
//! the teacher's intent phase is.

use space_agent::{AgentRngs, AgentStore, AgentStoreBuilder};
use space_alloc::{Allocator, CbbaAgentParams, FirstClaimGreedy, GRAPE, MessageBoard, CBBA};
use space_behavior::{evaluate, parse_tree, Node};
use space_core::{AgentId, SimClock, SimRng, TaskId};
use space_kinematics::{KinematicsEngine, MotionParams, AGENT_TRACK_SIZE};
use space_spatial::Perception;
use space_task::{AmountRange, DynamicTaskGenerationConfig, DynamicTaskGenerator, Task, TaskArea, TaskStore};

use crate::actions::TickActions;
use crate::config::{Config, Strategy};
use crate::error::{SimError, SimResult};
use crate::observer::SimObserver;

pub struct World {
    pub clock: SimClock,
    pub agents: AgentStore,
    pub tasks: TaskStore,
    rngs: AgentRngs,
    board: MessageBoard,
    allocator: Box<dyn Allocator>,
    kinematics: KinematicsEngine,
    tree: Node,
    perception: Perception,

    sim_rng: SimRng,
    generator: DynamicTaskGenerator,
    dyn_gen_config: DynamicTaskGenerationConfig,
    task_area: TaskArea,
    amounts: AmountRange,
    task_visualisation_factor: f64,
    placement_max_attempts: usize,

    communication_radius: f64,
    situation_awareness_radius: f64,
    task_threshold: f64,
    work_rate: f64,
    random_exploration_duration: f64,
    explore_timers: Vec<f64>,

    max_simulation_time: f64,
    mission_completed: bool,
}

impl World {
    /// Build a fresh world: place tasks and agents, parse the behaviour
    /// tree, and select the active allocator. Mirrors `main.py`'s startup
    /// sequence (`generate_tasks`, `generate_agents`, strategy lookup).
    pub fn new(config: &Config, strategy: Strategy, seed: u64) -> SimResult<World> {
        config.validate()?;

        let dt = 1.0 / config.simulation.sampling_freq;
        let mut sim_rng = SimRng::new(seed);
        let placement_max_attempts = config.simulation.placement_max_attempts;

        // ── Tasks ──────────────────────────────────────────────────────────
        let task_area = config.tasks.locations.clone();
        let task_positions = sim_rng.sample_positions(
            config.tasks.quantity,
            task_area.x_min,
            task_area.x_max,
            task_area.y_min,
            task_area.y_max,
            task_area.non_overlap_radius,
            placement_max_attempts,
        )?;
        let tasks: Vec<Task> = task_positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let amount = sim_rng.gen_range(config.tasks.amounts.min..=config.tasks.amounts.max);
                let radius = (amount / config.simulation.task_visualisation_factor).max(1.0);
                Task::new(TaskId(i as u32), pos, radius, amount)
            })
            .collect();
        let task_store = TaskStore::new(tasks);

        // ── Agents ─────────────────────────────────────────────────────────
        let agent_positions = sim_rng.sample_positions(
            config.agents.quantity,
            config.agents.locations.x_min,
            config.agents.locations.x_max,
            config.agents.locations.y_min,
            config.agents.locations.y_max,
            config.agents.locations.non_overlap_radius,
            placement_max_attempts,
        )?;

        let (mut agent_store, rngs) = AgentStoreBuilder::new(config.agents.quantity, seed)
            .track_capacity(AGENT_TRACK_SIZE)
            .build();
        agent_store.position = agent_positions;

        // ── Allocator selection ───────────────────────────────────────────
        let allocator: Box<dyn Allocator> = match strategy {
            Strategy::Cbba => {
                let cfg = config.decision_making.cbba.clone().ok_or_else(|| {
                    SimError::UnrecognizedStrategy {
                        requested: strategy.name().to_string(),
                        available: config.decision_making.available(),
                    }
                })?;
                let agent_params = CbbaAgentParams {
                    max_speed: config.agents.max_speed,
                    work_rate: config.agents.work_rate,
                };
                Box::new(CBBA::new(cfg, agent_params))
            }
            Strategy::Grape => {
                let cfg = config.decision_making.grape.clone().ok_or_else(|| {
                    SimError::UnrecognizedStrategy {
                        requested: strategy.name().to_string(),
                        available: config.decision_making.available(),
                    }
                })?;
                Box::new(GRAPE::new(cfg))
            }
            Strategy::FirstClaimGreedy => {
                let cfg = config.decision_making.first_claim_greedy.clone().ok_or_else(|| {
                    SimError::UnrecognizedStrategy {
                        requested: strategy.name().to_string(),
                        available: config.decision_making.available(),
                    }
                })?;
                Box::new(FirstClaimGreedy::new(cfg))
            }
        };
        allocator.register_components(&mut agent_store);

        let tree = parse_tree(&config.agents.behavior_tree_xml)?;

        let kinematics = KinematicsEngine::new(MotionParams {
            max_speed: config.agents.max_speed,
            max_accel: config.agents.max_accel,
            max_angular_speed: config.agents.max_angular_speed,
            target_approach_radius: config.agents.target_approaching_radius,
        });

        let board = MessageBoard::new(config.agents.quantity);
        let perception = Perception::build(&agent_store.position, &task_store);
        let explore_timers = vec![f64::INFINITY; config.agents.quantity];

        Ok(World {
            clock: SimClock::new(dt),
            agents: agent_store,
            tasks: task_store,
            rngs,
            board,
            allocator,
            kinematics,
            tree,
            perception,
            sim_rng,
            generator: DynamicTaskGenerator::new(config.tasks.dynamic_task_generation.clone()),
            dyn_gen_config: config.tasks.dynamic_task_generation.clone(),
            task_area,
            amounts: config.tasks.amounts,
            task_visualisation_factor: config.simulation.task_visualisation_factor,
            placement_max_attempts,
            communication_radius: config.agents.communication_radius,
            situation_awareness_radius: config.agents.situation_awareness_radius,
            task_threshold: config.tasks.threshold_done_by_arrival,
            work_rate: config.agents.work_rate,
            random_exploration_duration: config.agents.random_exploration_duration,
            explore_timers,
            max_simulation_time: config.simulation.max_simulation_time,
            mission_completed: false,
        })
    }

    pub fn mission_completed(&self) -> bool {
        self.mission_completed
    }

    /// `true` once the run should stop: either the mission is done, or
    /// `max_simulation_time` (if positive) has been reached.
    pub fn is_terminated(&self) -> bool {
        self.mission_completed
            || (self.max_simulation_time > 0.0 && self.clock.elapsed_secs() >= self.max_simulation_time)
    }

    /// Advance the simulation by exactly one tick.
    pub fn tick(&mut self) {
        self.perception = Perception::build(&self.agents.position, &self.tasks);

        let count = self.agents.count;
        for i in 0..count {
            let agent_id = AgentId(i as u32);
            let mut actions = TickActions::new(
                agent_id,
                &mut self.agents,
                &mut self.tasks,
                &mut self.board,
                self.allocator.as_ref(),
                self.rngs.get_mut(agent_id),
                &self.kinematics,
                &self.perception,
                &self.task_area,
                &mut self.explore_timers[i],
                self.clock.current_tick.0,
                self.clock.sampling_time,
                self.communication_radius,
                self.situation_awareness_radius,
                self.task_threshold,
                self.work_rate,
                self.random_exploration_duration,
            );
            evaluate(&self.tree, &mut actions);
        }

        for i in 0..count {
            let agent_id = AgentId(i as u32);
            self.kinematics.update(&mut self.agents, agent_id, self.clock.sampling_time);
        }

        self.clock.advance();

        if self.tasks.all_completed() && self.generation_exhausted() {
            self.mission_completed = true;
        }

        let elapsed = self.clock.elapsed_secs();
        let next_id = self.tasks.next_id();
        if let Some(new_tasks) = self.generator.maybe_generate(
            elapsed,
            next_id,
            &self.task_area,
            self.amounts,
            self.task_visualisation_factor,
            &mut self.sim_rng,
            self.placement_max_attempts,
        ) {
            tracing::debug!(
                added = new_tasks.len(),
                tick = self.clock.current_tick.0,
                "dynamic task generation event"
            );
            self.tasks.extend(new_tasks);
        }
    }

    fn generation_exhausted(&self) -> bool {
        !self.dyn_gen_config.enabled || self.generator.generation_count() >= self.dyn_gen_config.max_generations
    }

    /// Run until [`Self::is_terminated`], driving `observer` at each step.
    pub fn run(&mut self, observer: &mut dyn SimObserver) {
        while !self.is_terminated() {
            observer.on_tick_start(self.clock.current_tick);
            let was_completed = self.mission_completed;
            self.tick();
            observer.on_tick_end(self.clock.current_tick, &self.agents, &self.tasks);
            if !was_completed && self.mission_completed {
                observer.on_mission_completed(self.clock.current_tick);
            }
        }
        observer.on_sim_end(self.clock.current_tick);
    }
}
