//! Simulation observer trait for progress reporting and data collection.

use space_agent::AgentStore;
use space_core::Tick;
use space_task::TaskStore;

/// Callbacks invoked by [`crate::world::World::run`] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, agents: &AgentStore, tasks: &TaskStore) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} tasks remaining", tasks.incomplete().count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, with read-only access to the full
    /// agent and task state so output collectors can record a snapshot
    /// without the world needing to know about any specific output format.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &AgentStore, _tasks: &TaskStore) {}

    /// Called once, the tick the mission completes (every task worked down
    /// and dynamic generation, if enabled, exhausted).
    fn on_mission_completed(&mut self, _tick: Tick) {}

    /// Called once after the run loop exits, whether by mission completion
    /// or by reaching `max_simulation_time`.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
