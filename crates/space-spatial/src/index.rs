//! R-tree entry types for agent and task positions.
//!
//! Grounded on `dt_spatial::network::NodeEntry`'s shape (a small `Copy`
//! struct pairing a `[f32; 2]` point with an ID, bulk-loaded into an
//! `rstar::RTree`) — but rebuilt fresh every tick instead of loaded once at
//! startup, since agent positions change every tick while road nodes never
//! did.

use rstar::{PointDistance, RTreeObject, AABB};

use space_core::{AgentId, TaskId, Vec2};

#[derive(Clone, Copy)]
pub(crate) struct AgentEntry {
    pub point: [f64; 2],
    pub id: AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TaskEntry {
    pub point: [f64; 2],
    pub id: TaskId,
}

impl RTreeObject for TaskEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TaskEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[inline]
pub(crate) fn as_point(v: Vec2) -> [f64; 2] {
    [v.x, v.y]
}
