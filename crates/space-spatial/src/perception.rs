//! `Perception` — per-tick radius queries over agent and task positions
//! (spec.md §4.5).
//!
//! Rebuilt once per tick from the current `AgentStore`/`TaskStore` snapshot,
//! mirroring `dt_spatial::RoadNetwork`'s bulk-loaded R-tree but over
//! continuously moving points rather than a static road graph. At the swarm
//! sizes this simulator targets a linear scan would be just as fast; the
//! R-tree is kept because it is the idiom this codebase reaches for whenever
//! "find everything near a point" comes up.

use rstar::RTree;

use space_core::{AgentId, TaskId, Vec2};
use space_task::TaskStore;

use crate::index::{as_point, AgentEntry, TaskEntry};

/// A snapshot spatial index over every agent position and every incomplete
/// task position, answering the radius queries `sense` needs.
pub struct Perception {
    agents: RTree<AgentEntry>,
    tasks: RTree<TaskEntry>,
}

impl Perception {
    /// Build a fresh index from the current positions. `agent_positions` is
    /// indexed by `AgentId` (i.e. `agent_positions[i]` is agent `i`'s
    /// position) — the same layout as `AgentStore::position`.
    pub fn build(agent_positions: &[Vec2], tasks: &TaskStore) -> Self {
        let agent_entries: Vec<AgentEntry> = agent_positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| AgentEntry { point: as_point(pos), id: AgentId(i as u32) })
            .collect();

        let task_entries: Vec<TaskEntry> = tasks
            .incomplete()
            .map(|t| TaskEntry { point: as_point(t.position), id: t.task_id })
            .collect();

        Self {
            agents: RTree::bulk_load(agent_entries),
            tasks: RTree::bulk_load(task_entries),
        }
    }

    /// Agents other than `self_id` within `radius` of `origin`, by squared
    /// distance (spec.md §4.5). `radius <= 0.0` means "global": every other
    /// agent is returned regardless of distance.
    pub fn agents_within(&self, self_id: AgentId, origin: Vec2, radius: f64) -> Vec<AgentId> {
        if radius <= 0.0 {
            return self
                .agents
                .iter()
                .map(|e| e.id)
                .filter(|&id| id != self_id)
                .collect();
        }

        let radius_sq = radius * radius;
        self.agents
            .locate_within_distance(as_point(origin), radius_sq)
            .map(|e| e.id)
            .filter(|&id| id != self_id)
            .collect()
    }

    /// Incomplete tasks within `radius` of `origin` (spec.md §4.5).
    /// `radius <= 0.0` means "global": every incomplete task is returned.
    pub fn tasks_within(&self, origin: Vec2, radius: f64) -> Vec<TaskId> {
        if radius <= 0.0 {
            return self.tasks.iter().map(|e| e.id).collect();
        }

        let radius_sq = radius * radius;
        self.tasks
            .locate_within_distance(as_point(origin), radius_sq)
            .map(|e| e.id)
            .collect()
    }
}
