//! A [`SimObserver`] that prints periodic progress to stdout, standing in
//! for the teacher examples' `println!`-based progress reporting (no
//! `tracing` here — tick-by-tick progress is user-facing output, not a
//! diagnostic log; `tracing` stays reserved for the library crates).

use space_agent::AgentStore;
use space_core::Tick;
use space_sim::SimObserver;
use space_task::TaskStore;

pub struct ProgressPrinter {
    /// Print a line every this many ticks.
    interval_ticks: u64,
}

impl ProgressPrinter {
    pub fn new(interval_ticks: u64) -> Self {
        Self { interval_ticks: interval_ticks.max(1) }
    }
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, _agents: &AgentStore, tasks: &TaskStore) {
        if tick.0 % self.interval_ticks == 0 {
            let remaining = tasks.incomplete().count();
            let amount_left: f64 = tasks.incomplete().map(|t| t.amount).sum();
            println!("[tick {}] tasks remaining: {remaining}, amount left: {amount_left:.2}", tick.0);
        }
    }

    fn on_mission_completed(&mut self, tick: Tick) {
        println!("[tick {}] MISSION COMPLETED", tick.0);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("simulation ended at tick {}", final_tick.0);
    }
}
