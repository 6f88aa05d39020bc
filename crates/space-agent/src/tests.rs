//! Unit tests for space-agent.

#[cfg(test)]
mod component_map {
    use crate::ComponentMap;

    #[derive(Default, PartialEq, Debug)]
    struct Health(f32);

    #[derive(Default, PartialEq, Debug)]
    struct Age(u8);

    #[test]
    fn register_and_get() {
        let mut map = ComponentMap::new();
        map.register::<Health>(3);
        let slice = map.get::<Health>().expect("Health should be registered");
        assert_eq!(slice.len(), 3);
        assert_eq!(slice[0], Health(0.0));
    }

    #[test]
    fn double_register_is_noop() {
        let mut map = ComponentMap::new();
        map.register::<Health>(2);
        map.get_mut::<Health>().unwrap()[0] = Health(1.5);
        map.register::<Health>(99);
        assert_eq!(map.get::<Health>().unwrap()[0], Health(1.5));
        assert_eq!(map.get::<Health>().unwrap().len(), 2);
    }

    #[test]
    fn unregistered_returns_none() {
        let map = ComponentMap::new();
        assert!(map.get::<Health>().is_none());
    }

    #[test]
    fn two_types_do_not_interfere() {
        let mut map = ComponentMap::new();
        map.register::<Health>(2);
        map.register::<Age>(2);
        assert_eq!(map.type_count(), 2);
        map.get_mut::<Health>().unwrap()[0] = Health(0.9);
        assert_eq!(map.get::<Age>().unwrap()[0], Age(0));
    }

    #[test]
    fn push_defaults_grows_all_types() {
        let mut map = ComponentMap::new();
        map.register::<Health>(0);
        map.register::<Age>(0);
        map.push_defaults();
        map.push_defaults();
        assert_eq!(map.get::<Health>().unwrap().len(), 2);
        assert_eq!(map.get::<Age>().unwrap().len(), 2);
    }
}

#[cfg(test)]
mod builder {
    use crate::AgentStoreBuilder;

    #[derive(Default, Clone)]
    struct CbbaState {
        bundle: Vec<u32>,
    }

    #[test]
    fn correct_count() {
        let (store, rngs) = AgentStoreBuilder::new(500, 1).build();
        assert_eq!(store.count, 500);
        assert_eq!(rngs.len(), 500);
    }

    #[test]
    fn zero_agents() {
        let (store, rngs) = AgentStoreBuilder::new(0, 0).build();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
    }

    #[test]
    fn component_prefilled_with_defaults() {
        let (store, _) = AgentStoreBuilder::new(10, 0)
            .register_component::<CbbaState>()
            .build();
        let slice = store.component::<CbbaState>().expect("registered");
        assert_eq!(slice.len(), 10);
        assert!(slice[0].bundle.is_empty());
    }

    #[test]
    fn unregistered_component_returns_none() {
        let (store, _) = AgentStoreBuilder::new(5, 0).build();
        assert!(store.component::<CbbaState>().is_none());
    }
}

#[cfg(test)]
mod store {
    use crate::AgentStoreBuilder;
    use space_core::{AgentId, Vec2};

    #[test]
    fn agent_ids_iterator() {
        let (store, _) = AgentStoreBuilder::new(5, 0).build();
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(
            ids,
            vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3), AgentId(4)]
        );
    }

    #[test]
    fn kinematic_sentinels() {
        let (store, _) = AgentStoreBuilder::new(3, 0).build();
        assert_eq!(store.position[0], Vec2::ZERO);
        assert_eq!(store.velocity[0], Vec2::ZERO);
        assert_eq!(store.acceleration[0], Vec2::ZERO);
        assert_eq!(store.rotation[0], 0.0);
        assert!(store.assigned_task[0].is_none());
    }

    #[test]
    fn memory_ring_caps_at_capacity() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).track_capacity(3).build();
        for i in 0..5 {
            store.push_memory(AgentId(0), Vec2::new(i as f64, 0.0));
        }
        let ring = &store.memory_location[0];
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.front().copied(), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(ring.back().copied(), Some(Vec2::new(4.0, 0.0)));
    }
}

#[cfg(test)]
mod rngs {
    use crate::AgentStoreBuilder;
    use space_core::AgentId;

    #[test]
    fn per_agent_determinism() {
        let (_, mut rngs1) = AgentStoreBuilder::new(10, 999).build();
        let (_, mut rngs2) = AgentStoreBuilder::new(10, 999).build();
        for i in 0..10u32 {
            let a: f32 = rngs1.get_mut(AgentId(i)).random();
            let b: f32 = rngs2.get_mut(AgentId(i)).random();
            assert_eq!(a, b, "agent {i} RNG should be deterministic");
        }
    }

    #[test]
    fn different_seeds_differ() {
        let (_, mut rngs_a) = AgentStoreBuilder::new(1, 1).build();
        let (_, mut rngs_b) = AgentStoreBuilder::new(1, 2).build();
        let a: u64 = rngs_a.get_mut(AgentId(0)).random();
        let b: u64 = rngs_b.get_mut(AgentId(0)).random();
        assert_ne!(a, b);
    }
}
