use space_agent::AgentStoreBuilder;
use space_core::{AgentId, TaskId, Vec2};
use space_task::{Task, TaskStore};

use crate::allocator::{Allocator, DecideInput};
use crate::cbba::{CbbaAgentParams, CbbaConfig, CbbaState, CBBA};
use crate::grape::{GrapeConfig, GrapeState, PartitionInit, GRAPE};
use crate::greedy::{FirstClaimGreedy, FirstClaimGreedyConfig, GreedyMode};
use crate::message::Message;

fn tasks(positions: &[(f64, f64)], amount: f64) -> TaskStore {
    TaskStore::new(
        positions
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Task::new(TaskId(i as u32), Vec2::new(x, y), 1.0, amount))
            .collect(),
    )
}

mod first_claim_greedy {
    use super::*;

    fn allocator() -> FirstClaimGreedy {
        FirstClaimGreedy::new(FirstClaimGreedyConfig {
            mode: GreedyMode::MinDist,
            weight_factor_cost: 1.0,
            enforced_collaboration: false,
        })
    }

    #[test]
    fn picks_nearest_unclaimed_task() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).build();
        let tasks = tasks(&[(10.0, 0.0), (1.0, 0.0)], 5.0);
        let alloc = allocator();
        alloc.register_components(&mut agents);

        let mut outbox = None;
        let local_tasks = [TaskId(0), TaskId(1)];
        let suppressed = alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[],
                inbox: &[],
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        assert!(!suppressed);
        assert_eq!(agents.assigned_task[0], Some(TaskId(1)));
        assert_eq!(outbox, Some(Message::Greedy { agent_id: AgentId(0), assigned_task_id: Some(TaskId(1)) }));
    }

    #[test]
    fn skips_tasks_already_claimed_by_a_peer() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).build();
        let tasks = tasks(&[(1.0, 0.0), (2.0, 0.0)], 5.0);
        let alloc = allocator();
        alloc.register_components(&mut agents);

        let claimed_by_peer =
            [Message::Greedy { agent_id: AgentId(1), assigned_task_id: Some(TaskId(0)) }];
        let local_tasks = [TaskId(0), TaskId(1)];
        let mut outbox = None;
        alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[AgentId(1)],
                inbox: &claimed_by_peer,
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        assert_eq!(agents.assigned_task[0], Some(TaskId(1)));
    }

    #[test]
    fn releases_assignment_once_task_completes() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).build();
        agents.assigned_task[0] = Some(TaskId(0));
        let mut tasks = tasks(&[(1.0, 0.0)], 5.0);
        tasks.get_mut(TaskId(0)).unwrap().completed = true;
        let alloc = allocator();

        let mut outbox = None;
        let suppressed = alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &[],
                local_agents: &[],
                inbox: &[],
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        assert!(!suppressed);
        assert_eq!(agents.assigned_task[0], None);
    }
}

mod grape {
    use super::*;

    fn allocator() -> GRAPE {
        GRAPE::new(GrapeConfig {
            execute_movements_during_convergence: false,
            cost_weight_factor: 0.01,
            social_inhibition_factor: 1.0,
            initialize_partition: PartitionInit::None,
            reinitialize_partition_on_completion: PartitionInit::None,
        })
    }

    #[test]
    fn phase_one_joins_best_utility_task_and_broadcasts() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).register_component::<GrapeState>().build();
        let alloc = allocator();
        alloc.register_components(&mut agents);
        let tasks = tasks(&[(1.0, 0.0), (100.0, 0.0)], 5.0);

        let mut outbox = None;
        let local_tasks = [TaskId(0), TaskId(1)];
        let suppressed = alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[],
                inbox: &[],
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        assert!(!suppressed);
        assert!(matches!(outbox, Some(Message::Grape { .. })));
        let state = &agents.component::<GrapeState>().unwrap()[0];
        assert!(state.satisfied);
        assert!(state.partition.get(&TaskId(0)).is_some_and(|s| s.contains(&AgentId(0))));
    }

    #[test]
    fn phase_two_adopts_a_strictly_newer_peer_partition() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).register_component::<GrapeState>().build();
        let alloc = allocator();
        alloc.register_components(&mut agents);
        {
            let state = &mut agents.component_mut::<GrapeState>().unwrap()[0];
            state.partition_initialized = true;
            state.satisfied = true;
            state.evolution_number = 1;
            state.time_stamp = 0.1;
        }
        let tasks = tasks(&[(1.0, 0.0)], 5.0);

        let mut newer_partition = std::collections::HashMap::new();
        newer_partition.insert(TaskId(0), std::collections::HashSet::from([AgentId(1)]));
        let peer_msg = Message::Grape {
            agent_id: AgentId(1),
            partition: newer_partition,
            evolution_number: 2,
            time_stamp: 0.0,
        };

        let mut outbox = None;
        let local_tasks = [TaskId(0)];
        let suppressed = alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[AgentId(1)],
                inbox: &[peer_msg],
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        let state = &agents.component::<GrapeState>().unwrap()[0];
        assert_eq!(state.evolution_number, 2);
        assert!(!state.satisfied);
        assert!(suppressed, "execute_movements_during_convergence is false");
    }
}

mod cbba {
    use super::*;

    fn allocator() -> CBBA {
        CBBA::new(
            CbbaConfig {
                execute_movements_during_convergence: false,
                max_tasks_per_agent: 2,
                task_reward_discount_factor: 0.99,
                winning_bid_cancel: false,
                acceptable_empty_bundle_duration: 10.0,
            },
            CbbaAgentParams { max_speed: 10.0, work_rate: 1.0 },
        )
    }

    #[test]
    fn build_bundle_phase_bids_on_the_highest_scoring_task() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).register_component::<CbbaState>().build();
        let alloc = allocator();
        alloc.register_components(&mut agents);
        let tasks = tasks(&[(1.0, 0.0), (50.0, 0.0)], 5.0);

        let mut outbox = None;
        let local_tasks = [TaskId(0), TaskId(1)];
        let suppressed = alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[],
                inbox: &[],
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        assert!(!suppressed);
        assert!(matches!(outbox, Some(Message::Cbba { .. })));
        let state = &agents.component::<CbbaState>().unwrap()[0];
        assert!(!state.bundle.is_empty());
        assert_eq!(state.z.get(&state.bundle[0]), Some(&Some(AgentId(0))));
    }

    #[test]
    fn consensus_phase_yields_to_a_higher_bidder() {
        let (mut agents, mut rngs) = AgentStoreBuilder::new(1, 1).register_component::<CbbaState>().build();
        let alloc = allocator();
        alloc.register_components(&mut agents);
        let tasks = tasks(&[(1.0, 0.0)], 5.0);

        {
            let state = &mut agents.component_mut::<CbbaState>().unwrap()[0];
            state.bundle = vec![TaskId(0)];
            state.path = vec![TaskId(0)];
            state.y.insert(TaskId(0), 1.0);
            state.z.insert(TaskId(0), Some(AgentId(0)));
            state.s.insert(AgentId(0), 0);
        }

        let mut winning_agents = std::collections::HashMap::new();
        winning_agents.insert(TaskId(0), Some(AgentId(1)));
        let mut winning_bids = std::collections::HashMap::new();
        winning_bids.insert(TaskId(0), 5.0);
        let mut time_stamps = std::collections::HashMap::new();
        time_stamps.insert(AgentId(1), 1);
        let peer_msg = Message::Cbba { agent_id: AgentId(1), winning_agents, winning_bids, time_stamps };

        // Force this agent into the assignment-consensus phase by running one
        // build_bundle tick first (moves bundle/path through decide() once).
        let mut outbox = None;
        let local_tasks = [TaskId(0)];
        alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[AgentId(1)],
                inbox: &[],
                dt: 1.0,
                tick: 0,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        let suppressed = alloc.decide(
            DecideInput {
                agent: AgentId(0),
                position: Vec2::ZERO,
                local_tasks: &local_tasks,
                local_agents: &[AgentId(1)],
                inbox: &[peer_msg],
                dt: 1.0,
                tick: 1,
                rng: rngs.get_mut(AgentId(0)),
            },
            &mut agents,
            &tasks,
            &mut outbox,
        );

        let state = &agents.component::<CbbaState>().unwrap()[0];
        assert_eq!(state.z.get(&TaskId(0)), Some(&Some(AgentId(1))));
        assert!(suppressed || agents.assigned_task[0].is_none());
    }
}
