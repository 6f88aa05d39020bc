//! Unit tests for space-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TaskId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TaskId(100) > TaskId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TaskId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec2;

    #[test]
    fn zero_distance() {
        let p = Vec2::new(3.0, 4.0);
        assert!(p.distance_to(p) < 1e-9);
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-9);
        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_zero_vector_is_zero_not_nan() {
        let n = Vec2::ZERO.normalized();
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn clamp_length_shrinks_long_vectors_only() {
        let short = Vec2::new(1.0, 0.0);
        assert_eq!(short.clamp_length(5.0), short);

        let long = Vec2::new(10.0, 0.0);
        let clamped = long.clamp_length(5.0);
        assert!((clamped.length() - 5.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.1);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        assert!((clock.elapsed_secs() - 0.1).abs() < 1e-9);
        clock.advance();
        assert!((clock.elapsed_secs() - 0.2).abs() < 1e-9);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sample_positions_respects_non_overlap_radius() {
        let mut rng = SimRng::new(7);
        let pts = rng
            .sample_positions(20, 0.0, 100.0, 0.0, 100.0, 5.0, 10_000)
            .unwrap();
        assert_eq!(pts.len(), 20);
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                let dx = (pts[i].x - pts[j].x).abs();
                let dy = (pts[i].y - pts[j].y).abs();
                assert!(dx > 5.0 && dy > 5.0);
            }
        }
    }

    #[test]
    fn sample_positions_zero_radius_accepts_unconditionally() {
        let mut rng = SimRng::new(7);
        let pts = rng
            .sample_positions(50, 0.0, 1.0, 0.0, 1.0, 0.0, 10_000)
            .unwrap();
        assert_eq!(pts.len(), 50);
    }

    #[test]
    fn sample_positions_gives_up_when_area_too_small() {
        let mut rng = SimRng::new(1);
        let result = rng.sample_positions(100, 0.0, 10.0, 0.0, 10.0, 5.0, 50);
        assert!(result.is_err());
    }
}
