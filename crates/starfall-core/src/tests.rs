#[cfg(test)]
mod tests {
    use crate::components::{Enemy, EnemyBehavior, GunState};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::intent::ControlIntent;
    use crate::state::WorldSnapshot;
    use crate::types::{level_for_score, EntityId, IdAllocator, Position, SimClock};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::NotStarted,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Asteroid,
            EnemyKind::Fighter,
            EnemyKind::Bomber,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_power_up_kind_serde() {
        for v in PowerUpKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: PowerUpKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_kind_serde() {
        let variants = vec![WeaponKind::Normal, WeaponKind::Laser, WeaponKind::Plasma];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify ControlIntent round-trips through serde.
    #[test]
    fn test_control_intent_serde() {
        let intent = ControlIntent {
            move_left: true,
            firing: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&intent).unwrap();
        let back: ControlIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
    }

    /// Verify GameEvent round-trips through serde (tagged union).
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemyDestroyed {
                id: EntityId(7),
                kind: EnemyKind::Bomber,
                score: 50,
            },
            GameEvent::PlayerHit { damage: 30 },
            GameEvent::PowerUpCollected {
                kind: PowerUpKind::Shield,
            },
            GameEvent::LevelUp { level: 2 },
            GameEvent::SpecialAttack,
            GameEvent::GameOver {
                score: 1230,
                level: 3,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify WorldSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = WorldSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.clock.tick, back.clock.tick);
        assert_eq!(snapshot.phase, back.phase);
        // The empty snapshot should be small.
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify intent precedence: conflicting move flags cancel.
    #[test]
    fn test_intent_move_dx() {
        let mut intent = ControlIntent::default();
        assert_eq!(intent.move_dx(), 0.0);
        intent.move_left = true;
        assert_eq!(intent.move_dx(), -1.0);
        intent.move_right = true;
        assert_eq!(intent.move_dx(), 0.0);
        intent.move_left = false;
        assert_eq!(intent.move_dx(), 1.0);
    }

    /// Ids start at 1 and increase strictly.
    #[test]
    fn test_id_allocator_monotonic() {
        let mut ids = IdAllocator::default();
        let first = ids.allocate();
        assert_eq!(first, EntityId(1));
        let mut prev = first;
        for _ in 0..100 {
            let next = ids.allocate();
            assert!(next > prev, "ids must be strictly increasing");
            prev = next;
        }
    }

    /// Level thresholds: one level per 500 points.
    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(500), 2);
        assert_eq!(level_for_score(999), 2);
        assert_eq!(level_for_score(1000), 3);
    }

    /// Clock advances tick count and elapsed time.
    #[test]
    fn test_sim_clock_advance() {
        let mut clock = SimClock::default();
        for _ in 0..60 {
            clock.advance(16);
        }
        assert_eq!(clock.tick, 60);
        assert_eq!(clock.now_ms, 960);
    }

    /// Position distance.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-6);
    }

    /// A fresh gun fires immediately, then respects its cooldown.
    #[test]
    fn test_gun_state_ready() {
        let mut gun = GunState::new(1500);
        assert!(gun.ready(16));
        gun.last_shot_ms = Some(16);
        assert!(!gun.ready(1500));
        assert!(!gun.ready(1516));
        assert!(gun.ready(1517));
    }

    /// The behavior variant maps onto the scoring category.
    #[test]
    fn test_enemy_kind_mapping() {
        let asteroid = Enemy {
            behavior: EnemyBehavior::Asteroid,
            speed: 2.0,
            size: 30.0,
            health: 1,
            max_health: 1,
        };
        assert_eq!(asteroid.kind(), EnemyKind::Asteroid);

        let boss = Enemy {
            behavior: EnemyBehavior::Boss {
                direction: 1.0,
                gun: GunState::new(BOSS_SHOOT_COOLDOWN_MS),
            },
            speed: 0.5,
            size: 100.0,
            health: 20,
            max_health: 20,
        };
        assert_eq!(boss.kind(), EnemyKind::Boss);
    }
}
