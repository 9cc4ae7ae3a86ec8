#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::config::SimConfig;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::input::InputSnapshot;
    use crate::state::SessionSnapshot;
    use crate::types::{format_elapsed, Playfield, Position, Rect, SessionClock};

    /// Verify the enums round-trip through serde_json.
    #[test]
    fn test_session_phase_serde() {
        for v in [SessionPhase::Playing, SessionPhase::GameOver] {
            let json = serde_json::to_string(&v).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_entity_kind_serde() {
        for v in [EntityKind::Player, EntityKind::Projectile, EntityKind::Enemy] {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify SimEvent round-trips through serde (tagged union).
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::EnemySpawned {
                id: 7,
                pos: Position::new(850.0, 300.0),
            },
            SimEvent::ProjectileSpawned {
                id: 8,
                pos: Position::new(79.4, 50.0),
            },
            SimEvent::EntityDestroyed {
                id: 7,
                kind: EntityKind::Enemy,
            },
            SimEvent::ExplosionTriggered {
                pos: Position::new(405.0, 102.0),
            },
            SimEvent::PlayerDied { elapsed_ms: 61_500 },
            SimEvent::SessionReset,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_input_snapshot_serde() {
        let input = InputSnapshot {
            left: true,
            down: true,
            fire_pressed: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: InputSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_active_projectiles, 3);
        assert_eq!(back.spawn_interval_ms, 5000.0);
        assert_eq!(back.player_speed, 200.0);
        assert_eq!(back.projectile_speed, 400.0);
        assert_eq!(back.enemy_speed, 100.0);
    }

    /// Verify an empty snapshot serializes and stays small.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SessionSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::from_center(DVec2::new(400.0, 100.0), DVec2::new(25.6, 3.84));
        let b = Rect::from_center(DVec2::new(405.0, 102.0), DVec2::new(12.3, 12.3));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_intersects_disjoint() {
        let a = Rect::from_center(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Rect::from_center(DVec2::new(100.0, 0.0), DVec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    /// Rectangles sharing an edge do not count as overlapping.
    #[test]
    fn test_rect_intersects_touching_edges() {
        let a = Rect::from_center(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Rect::from_center(DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_playfield_clamp() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.clamp(DVec2::new(-5.0, 300.0)), DVec2::new(0.0, 300.0));
        assert_eq!(
            field.clamp(DVec2::new(900.0, 700.0)),
            DVec2::new(800.0, 600.0)
        );
        assert_eq!(
            field.clamp(DVec2::new(400.0, 300.0)),
            DVec2::new(400.0, 300.0)
        );
    }

    // ---- Clock ----

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut clock = SessionClock::default();
        assert_eq!(clock.elapsed_ms(), 0);
        clock.tick(12_345.0);
        assert_eq!(clock.elapsed_ms(), 0, "elapsed starts at 0, not negative");
    }

    #[test]
    fn test_clock_elapsed_monotonic() {
        let mut clock = SessionClock::default();
        clock.tick(1000.0);
        let mut last = clock.elapsed_ms();
        for step in 1..=100u64 {
            clock.tick(1000.0 + step as f64 * 16.0);
            let elapsed = clock.elapsed_ms();
            assert!(elapsed >= last);
            last = elapsed;
        }
        assert_eq!(last, 1600);
    }

    #[test]
    fn test_clock_reset_starts_new_session() {
        let mut clock = SessionClock::default();
        clock.tick(1000.0);
        clock.tick(4000.0);
        assert_eq!(clock.elapsed_ms(), 3000);

        clock.reset();
        assert_eq!(clock.elapsed_ms(), 0);

        // The next tick latches a fresh start time.
        clock.tick(9000.0);
        assert_eq!(clock.elapsed_ms(), 0);
        clock.tick(9500.0);
        assert_eq!(clock.elapsed_ms(), 500);
    }

    #[test]
    fn test_elapsed_display_format() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(999), "00:00:00");
        assert_eq!(format_elapsed(59_999), "00:00:59");
        assert_eq!(format_elapsed(60_000), "00:01:00");
        assert_eq!(format_elapsed(3_723_000), "01:02:03");

        let mut clock = SessionClock::default();
        clock.tick(0.0);
        clock.tick(61_000.0);
        assert_eq!(clock.display(), "00:01:01");
    }
}
