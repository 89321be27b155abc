//! Unit tests for fg-arena.

#[cfg(test)]
mod food_tests {
    use fg_core::{FgError, Rect, SimRng, SpotId, Vec2};

    use crate::FoodStore;

    fn store_with_spot(capacity: usize) -> (FoodStore, SpotId) {
        let mut store = FoodStore::new(10, 6.0);
        let spot = store.add_spot(Vec2::new(200.0, 200.0), 50.0, capacity).unwrap();
        (store, spot)
    }

    #[test]
    fn add_food_places_units_inside_the_spot() {
        let (mut store, spot) = store_with_spot(50);
        let mut rng = SimRng::new(7);
        let added = store.add_food(spot, 30, &mut rng).unwrap();

        assert_eq!(added, 30);
        assert_eq!(store.len(), 30);
        assert_eq!(store.spot(spot).unwrap().len(), 30);
        for (_, unit) in store.iter() {
            assert!(unit.position.distance(Vec2::new(200.0, 200.0)) <= 50.0 + 1e-3);
            assert_eq!(unit.amount, 10);
            assert_eq!(unit.spot, spot);
        }
    }

    #[test]
    fn add_food_stops_at_capacity() {
        let (mut store, spot) = store_with_spot(5);
        let mut rng = SimRng::new(1);
        assert_eq!(store.add_food(spot, 30, &mut rng).unwrap(), 5);
        assert_eq!(store.add_food(spot, 1, &mut rng).unwrap(), 0);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn unknown_spot_is_an_error() {
        let mut store = FoodStore::new(10, 6.0);
        let mut rng = SimRng::new(1);
        let err = store.add_food(SpotId(3), 1, &mut rng).unwrap_err();
        assert!(matches!(err, FgError::SpotNotFound(SpotId(3))));
    }

    #[test]
    fn negative_spot_radius_is_rejected() {
        let mut store = FoodStore::new(10, 6.0);
        let err = store.add_spot(Vec2::new(10.0, 10.0), -1.0, 5).unwrap_err();
        assert!(matches!(err, FgError::Config(_)));
        assert!(store.add_spot(Vec2::ZERO, f32::NAN, 5).is_err());
        assert!(store.spots().is_empty());
    }

    #[test]
    fn zero_radius_spot_stacks_units_on_its_center() {
        let mut store = FoodStore::new(10, 6.0);
        let center = Vec2::new(40.0, 60.0);
        let spot = store.add_spot(center, 0.0, 3).unwrap();
        assert_eq!(store.add_food(spot, 3, &mut SimRng::new(2)).unwrap(), 3);
        assert!(store.iter().all(|(_, u)| u.position == center));
    }

    #[test]
    fn take_one_decrements_then_removes_everywhere() {
        let mut store = FoodStore::new(2, 6.0);
        let spot = store.add_spot(Vec2::ZERO, 10.0, 4).unwrap();
        let key = store.place_unit(spot, Vec2::new(1.0, 1.0)).unwrap().unwrap();

        let first = store.take_one(key).unwrap();
        assert_eq!(first.remaining, 1);
        assert!(!first.depleted);
        assert!(store.contains_key(key));

        let second = store.take_one(key).unwrap();
        assert!(second.depleted);
        assert!(!store.contains_key(key));
        assert!(store.spot(spot).unwrap().is_empty());
        assert!(store.take_one(key).is_none(), "stale key must not resolve");
    }

    #[test]
    fn overlap_uses_unit_bounding_square() {
        let (mut store, spot) = store_with_spot(4);
        let key = store.place_unit(spot, Vec2::new(100.0, 100.0)).unwrap().unwrap();

        // Unit covers [97, 103); a 5x5 body centred at 105 covers [102.5, 107.5).
        let hit = store.first_overlapping(Rect::centered(Vec2::new(105.0, 100.0), 5.0));
        assert_eq!(hit.map(|(k, _)| k), Some(key));

        // Touching edges only: body [103, 108).
        let miss = store.first_overlapping(Rect::centered(Vec2::new(105.5, 100.0), 5.0));
        assert!(miss.is_none());

        assert!(store.any_contains(Vec2::new(102.0, 99.0)));
        assert!(!store.any_contains(Vec2::new(103.0, 100.0)));
    }

    #[test]
    fn replenish_only_below_half() {
        let mut store = FoodStore::new(1, 6.0);
        let spot = store.add_spot(Vec2::new(50.0, 50.0), 20.0, 10).unwrap();
        let mut rng = SimRng::new(9);
        store.add_food(spot, 5, &mut rng).unwrap();

        assert_eq!(store.replenish_if_below_half(spot, 3, &mut rng).unwrap(), 0);

        let key = store.spot(spot).unwrap().units()[0];
        store.take_one(key);
        assert_eq!(store.spot(spot).unwrap().len(), 4);
        assert_eq!(store.replenish_if_below_half(spot, 3, &mut rng).unwrap(), 3);
        assert_eq!(store.spot(spot).unwrap().len(), 7);
    }

    #[test]
    fn total_amount_sums_units() {
        let (mut store, spot) = store_with_spot(10);
        let a = store.place_unit(spot, Vec2::ZERO).unwrap().unwrap();
        store.place_unit(spot, Vec2::ONE).unwrap();
        store.take_one(a);
        assert_eq!(store.total_amount(), 19);
    }
}

#[cfg(test)]
mod obstacle_tests {
    use fg_core::Vec2;

    use crate::{Nest, Obstacle, ObstacleSet};

    #[test]
    fn blocks_is_half_open() {
        let set: ObstacleSet = [Obstacle::new(10.0, 10.0, 20.0, 20.0)].into_iter().collect();
        assert!(set.blocks(Vec2::new(10.0, 10.0)));
        assert!(set.blocks(Vec2::new(29.9, 29.9)));
        assert!(!set.blocks(Vec2::new(30.0, 15.0)));
        assert!(!set.blocks(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn closest_point_clamps_to_rect() {
        let o = Obstacle::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(o.closest_point(Vec2::new(15.0, 5.0)), Vec2::new(10.0, 5.0));
        assert_eq!(o.closest_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        assert_eq!(o.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn nest_capture_is_strict_and_store_accumulates() {
        let mut nest = Nest::new(Vec2::new(100.0, 100.0), 20.0);
        assert!(nest.captures(Vec2::new(119.0, 100.0)));
        assert!(!nest.captures(Vec2::new(120.0, 100.0)));

        nest.store_food(1);
        nest.store_food(2);
        assert_eq!(nest.stored(), 3);
    }
}

#[cfg(test)]
mod layout_tests {
    use fg_core::{Arena, SimRng, Vec2};

    use crate::layout::{
        DEFAULT_SPOT_SPACING, OBSTACLE_CLEARANCE, is_valid_food_spot, is_valid_nest_position,
        scatter_food_spots,
    };
    use crate::{Obstacle, ObstacleSet};

    fn one_block() -> ObstacleSet {
        [Obstacle::new(350.0, 250.0, 100.0, 100.0)].into_iter().collect()
    }

    #[test]
    fn food_spot_respects_obstacles_and_spacing() {
        let obstacles = one_block();
        assert!(!is_valid_food_spot(Vec2::new(420.0, 300.0), &obstacles, &[], 200.0));
        assert!(is_valid_food_spot(Vec2::new(100.0, 100.0), &obstacles, &[], 200.0));

        let spots = [Vec2::new(150.0, 100.0)];
        assert!(!is_valid_food_spot(Vec2::new(100.0, 100.0), &obstacles, &spots, 200.0));
    }

    #[test]
    fn nest_position_respects_clearance() {
        let obstacles = one_block();
        assert!(!is_valid_nest_position(Vec2::new(400.0, 399.0), &obstacles));
        assert!(is_valid_nest_position(Vec2::new(400.0, 400.0), &obstacles));
    }

    #[test]
    fn scattered_spots_are_valid_and_inside_margin() {
        let obstacles = one_block();
        let arena = Arena::new(800.0, 600.0);
        let mut rng = SimRng::new(42);
        let spots =
            scatter_food_spots(3, arena, &obstacles, DEFAULT_SPOT_SPACING, 10_000, &mut rng);

        assert_eq!(spots.len(), 3);
        for (i, p) in spots.iter().enumerate() {
            assert!((100.0..=700.0).contains(&p.x) && (100.0..=500.0).contains(&p.y));
            assert!(p.distance(Vec2::new(400.0, 300.0)) >= OBSTACLE_CLEARANCE);
            for q in &spots[i + 1..] {
                assert!(p.distance(*q) >= DEFAULT_SPOT_SPACING);
            }
        }
    }

    #[test]
    fn scatter_gives_up_after_max_attempts() {
        let arena = Arena::new(300.0, 300.0);
        let mut rng = SimRng::new(5);
        // The sampling window is [100, 200]^2, so two spots 500 apart cannot fit.
        let spots = scatter_food_spots(2, arena, &ObstacleSet::new(), 500.0, 200, &mut rng);
        assert_eq!(spots.len(), 1);
    }
}
