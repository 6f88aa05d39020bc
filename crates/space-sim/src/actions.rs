//! Concrete [`BehaviorActions`] implementation wiring the four behaviour-tree
//! callbacks to `space-spatial`'s perception index and `space-alloc`'s
//! allocator, for a single `(tick, agent)` pair.
//!
//! Grounded on `Agent.sense`/`Agent.decide_task`/`Agent.goto_task`/
//! `Agent.explore` in `original_source/modules/agent.py`. Kept as a separate
//! module rather than folded into `space-behavior` because it needs
//! `space-spatial`'s `Perception` and `space-alloc`'s `Allocator`, both of
//! which sit above `space-behavior` in the dependency order
//! (`space-behavior`'s module doc explains the split).

use space_agent::AgentStore;
use space_alloc::{Allocator, DecideInput, MessageBoard};
use space_behavior::{BehaviorActions, Status};
use space_core::{AgentId, AgentRng, TaskId, Vec2};
use space_kinematics::KinematicsEngine;
use space_spatial::Perception;
use space_task::{TaskArea, TaskStore};

/// Everything one agent's behaviour-tree evaluation needs for a single tick,
/// borrowed disjointly out of `World`'s fields.
pub struct TickActions<'a> {
    pub agent: AgentId,
    pub agents: &'a mut AgentStore,
    pub tasks: &'a mut TaskStore,
    pub board: &'a mut MessageBoard,
    pub allocator: &'a dyn Allocator,
    pub rng: &'a mut AgentRng,
    pub kinematics: &'a KinematicsEngine,
    pub perception: &'a Perception,
    pub explore_bounds: &'a TaskArea,
    pub explore_timer: &'a mut f64,

    pub tick: u64,
    pub dt: f64,
    pub communication_radius: f64,
    pub situation_awareness_radius: f64,
    pub task_threshold: f64,
    pub work_rate: f64,
    pub random_exploration_duration: f64,

    local_agents: Vec<AgentId>,
    local_tasks: Vec<TaskId>,
    suppress_movement: bool,
}

impl<'a> TickActions<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        agent: AgentId,
        agents: &'a mut AgentStore,
        tasks: &'a mut TaskStore,
        board: &'a mut MessageBoard,
        allocator: &'a dyn Allocator,
        rng: &'a mut AgentRng,
        kinematics: &'a KinematicsEngine,
        perception: &'a Perception,
        explore_bounds: &'a TaskArea,
        explore_timer: &'a mut f64,
        tick: u64,
        dt: f64,
        communication_radius: f64,
        situation_awareness_radius: f64,
        task_threshold: f64,
        work_rate: f64,
        random_exploration_duration: f64,
    ) -> Self {
        Self {
            agent,
            agents,
            tasks,
            board,
            allocator,
            rng,
            kinematics,
            perception,
            explore_bounds,
            explore_timer,
            tick,
            dt,
            communication_radius,
            situation_awareness_radius,
            task_threshold,
            work_rate,
            random_exploration_duration,
            local_agents: Vec::new(),
            local_tasks: Vec::new(),
            suppress_movement: false,
        }
    }
}

impl BehaviorActions for TickActions<'_> {
    /// Refresh the in-range neighbour/task lists and drain each in-range
    /// peer's currently published message into this agent's inbox.
    /// Always succeeds (spec.md §4.5).
    fn local_sensing(&mut self) -> Status {
        self.board.clear_inbox(self.agent);

        let position = self.agents.position[self.agent.index()];
        self.local_agents = self.perception.agents_within(self.agent, position, self.communication_radius);
        self.local_tasks = self.perception.tasks_within(position, self.situation_awareness_radius);

        for &peer in &self.local_agents {
            if let Some(msg) = self.board.outbox(peer) {
                let msg = msg.clone();
                self.board.deliver(self.agent, msg);
            }
        }

        Status::Success
    }

    /// Run the active allocator's decision for this agent and publish its
    /// outbox message, if any. Succeeds iff a task is now assigned
    /// (spec.md §4.8-§4.10); failure falls back to exploration.
    fn decision_making(&mut self) -> Status {
        let idx = self.agent.index();
        let position = self.agents.position[idx];
        let inbox = self.board.inbox(self.agent).to_vec();

        let input = DecideInput {
            agent: self.agent,
            position,
            local_tasks: &self.local_tasks,
            local_agents: &self.local_agents,
            inbox: &inbox,
            dt: self.dt,
            tick: self.tick,
            rng: &mut *self.rng,
        };

        let mut outbox = None;
        self.suppress_movement = self.allocator.decide(input, self.agents, self.tasks, &mut outbox);

        if let Some(msg) = outbox {
            self.board.publish(self.agent, msg);
        }

        if self.agents.assigned_task[idx].is_some() {
            self.agents.explore_target[idx] = None;
            Status::Success
        } else {
            Status::Failure
        }
    }

    /// Travel to the assigned task and work it down once in arrival range.
    /// Always `Running` except when the task has already been completed by
    /// someone else this tick, in which case `Success` (spec.md §4.7).
    fn task_executing(&mut self) -> Status {
        let idx = self.agent.index();
        let Some(task_id) = self.agents.assigned_task[idx] else {
            return Status::Running;
        };
        let Some(task) = self.tasks.get(task_id) else {
            return Status::Running;
        };
        if task.completed {
            return Status::Success;
        }
        let task_position = task.position;
        let task_radius = task.radius;

        let position = self.agents.position[idx];
        let distance = position.distance_to(task_position);

        if distance < task_radius + self.task_threshold {
            if let Some(task) = self.tasks.get_mut(task_id) {
                task.reduce_amount(self.work_rate * self.dt);
                self.agents.task_amount_done[idx] += self.work_rate;
            }
        }

        if self.suppress_movement {
            // CBBA's `execute_movements_during_convergence == false` path
            // (spec.md §4.10): halt rather than drift toward a tentative,
            // not-yet-converged `path[0]`.
            self.kinematics.halt(self.agents, self.agent);
        } else {
            self.kinematics.follow(self.agents, self.agent, task_position);
        }

        Status::Running
    }

    /// Steer toward a randomly drawn waypoint inside the task area, redrawn
    /// once `random_exploration_duration` seconds have elapsed since the
    /// last draw. Always `Running` (spec.md §4.6).
    fn exploration(&mut self) -> Status {
        let idx = self.agent.index();
        *self.explore_timer += self.dt;

        if self.agents.explore_target[idx].is_none() || *self.explore_timer > self.random_exploration_duration {
            let x = self.rng.gen_range(self.explore_bounds.x_min..=self.explore_bounds.x_max);
            let y = self.rng.gen_range(self.explore_bounds.y_min..=self.explore_bounds.y_max);
            self.agents.explore_target[idx] = Some(Vec2::new(x, y));
            *self.explore_timer = 0.0;
        }

        let target = self.agents.explore_target[idx].expect("just set above if it was None");
        self.kinematics.follow(self.agents, self.agent, target);

        Status::Running
    }
}
