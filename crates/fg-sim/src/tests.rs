//! Integration tests for fg-sim.

use fg_agent::{AntRngs, AntState, Colony, ColonyBuilder};
use fg_arena::{FoodStore, Nest, Obstacle};
use fg_behavior::{ForagingBehavior, NoopBehavior};
use fg_core::{AntId, NestId, SimConfig, SimRng, Tick, Vec2};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOME: Vec2 = Vec2::new(400.0, 300.0);

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, output_interval_ticks: 10, ..SimConfig::default() }
}

fn colony_at(n: usize, at: Vec2, config: &SimConfig) -> (Colony, AntRngs) {
    ColonyBuilder::new(config.ant.clone(), config.seed).spawn(n, NestId(0), at).build().unwrap()
}

fn foraging_sim(n: usize, config: SimConfig) -> Sim<ForagingBehavior> {
    let (colony, rngs) = colony_at(n, HOME, &config);
    let behavior = ForagingBehavior::from_config(&config);
    SimBuilder::new(config, colony, rngs, behavior)
        .nest(Nest::new(HOME, 20.0))
        .build()
        .unwrap()
}

/// A store with one spot holding a single unit at `at`.
fn single_unit(at: Vec2, amount: u32) -> FoodStore {
    let mut food = FoodStore::new(amount, 6.0);
    let spot = food.add_spot(at, 10.0, 10).unwrap();
    food.place_unit(spot, at).unwrap();
    food
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    summaries: Vec<TickSummary>,
    snapshots: Vec<Tick>,
    ended:     Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }

    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        self.summaries.push(*summary);
    }

    fn on_snapshot(&mut self, tick: Tick, colony: &Colony, nests: &[Nest]) {
        assert!(!colony.is_empty());
        assert_eq!(nests.len(), 1);
        self.snapshots.push(tick);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = foraging_sim(5, test_config(10));
        assert_eq!(sim.colony().len(), 5);
        assert_eq!(sim.clock, Tick::ZERO);
        assert!(sim.food().is_empty());
        assert!(sim.field().is_empty());
        assert_eq!(sim.nest(NestId(0)).unwrap().stored(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = test_config(10);
        config.field.decay_rate = 0.0;
        let (colony, rngs) = colony_at(1, HOME, &config);
        let result = SimBuilder::new(config, colony, rngs, NoopBehavior)
            .nest(Nest::new(HOME, 20.0))
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let config = test_config(10);
        let (colony, _) = colony_at(3, HOME, &config);
        let (_, rngs) = colony_at(2, HOME, &config);
        let result = SimBuilder::new(config, colony, rngs, NoopBehavior)
            .nest(Nest::new(HOME, 20.0))
            .build();
        assert!(matches!(result, Err(SimError::AntCountMismatch { expected: 3, got: 2, .. })));
    }

    #[test]
    fn unknown_nest_errors() {
        let config = test_config(10);
        let (colony, rngs) = colony_at(2, HOME, &config);
        let result = SimBuilder::new(config, colony, rngs, NoopBehavior).build();
        assert!(matches!(
            result,
            Err(SimError::UnknownNest { ant: AntId(0), nest: NestId(0) })
        ));
    }

    #[test]
    fn ant_inside_obstacle_errors() {
        let config = test_config(10);
        let (colony, rngs) = colony_at(1, HOME, &config);
        let result = SimBuilder::new(config, colony, rngs, NoopBehavior)
            .nest(Nest::new(HOME, 20.0))
            .obstacle(Obstacle::new(390.0, 290.0, 20.0, 20.0))
            .build();
        let err = result.err().unwrap();
        assert!(matches!(err, SimError::AntInsideObstacle { ant: AntId(0) }));
        assert_eq!(err.to_string(), "AntId(0) starts inside an obstacle");
    }

    #[test]
    fn spawn_positions_are_wrapped() {
        let config = test_config(10);
        let (colony, rngs) = colony_at(1, Vec2::new(-10.0, 610.0), &config);
        let sim = SimBuilder::new(config, colony, rngs, NoopBehavior)
            .nest(Nest::new(HOME, 20.0))
            .build()
            .unwrap();
        let ant = sim.colony().get(AntId(0)).unwrap();
        assert!((ant.position - Vec2::new(790.0, 10.0)).length() < 1e-3);
    }
}

// ── Intent application ────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn first_ant_wins_contested_food() {
        let config = test_config(10);
        let spot = Vec2::new(200.0, 200.0);
        let (colony, rngs) = colony_at(2, spot, &config);
        let behavior = ForagingBehavior::from_config(&config);
        let mut sim = SimBuilder::new(config, colony, rngs, behavior)
            .nest(Nest::new(HOME, 20.0))
            .food(single_unit(spot, 1))
            .build()
            .unwrap();

        let summary = sim.advance_tick();

        assert_eq!(summary.pickups, 1);
        assert!(sim.food().is_empty(), "depleted unit must be removed at once");
        assert!(sim.food().spots()[0].is_empty());
        assert_eq!(sim.colony().get(AntId(0)).unwrap().state, AntState::CarryingFood);
        assert_eq!(sim.colony().get(AntId(1)).unwrap().state, AntState::Exploring);
    }

    #[test]
    fn direct_delivery_scenario() {
        let config = test_config(10);
        let (colony, rngs) = colony_at(1, HOME, &config);
        let behavior = ForagingBehavior::from_config(&config);
        let mut sim = SimBuilder::new(config, colony, rngs, behavior)
            .nest(Nest::new(HOME, 20.0))
            .food(single_unit(HOME, 10))
            .build()
            .unwrap();

        let first = sim.step();
        assert_eq!((first.pickups, first.deliveries), (1, 0));
        assert_eq!(sim.food().total_amount(), 9);

        let second = sim.step();
        assert_eq!(second.deliveries, 1);
        assert_eq!(second.nest_stored, 1);
        assert_eq!(sim.nest(NestId(0)).unwrap().stored(), 1);

        let ant = sim.colony().get(AntId(0)).unwrap();
        assert_eq!(ant.state, AntState::ReturningToKnownFood);
        assert!(ant.successful_trip);
    }

    #[test]
    fn single_portion_picked_up_then_delivered_from_just_inside_capture() {
        let config = test_config(10);
        let food_at = HOME - Vec2::new(19.0, 0.0);
        let (colony, rngs) = colony_at(1, food_at, &config);
        let behavior = ForagingBehavior::from_config(&config);
        let mut sim = SimBuilder::new(config, colony, rngs, behavior)
            .nest(Nest::new(HOME, 20.0))
            .food(single_unit(food_at, 1))
            .build()
            .unwrap();
        let key = sim.food().spots()[0].units()[0];

        // Tick 1: the pickup empties the unit; no delivery on the same step
        // even though the ant already stands inside the capture radius.
        let first = sim.step();
        assert_eq!((first.pickups, first.deliveries), (1, 0));
        assert!(!sim.food().contains_key(key));
        assert!(sim.food().is_empty());
        assert!(sim.food().spots()[0].units().is_empty());
        assert_eq!(sim.nest(NestId(0)).unwrap().stored(), 0);
        assert_eq!(sim.colony().get(AntId(0)).unwrap().state, AntState::CarryingFood);

        // Tick 2: the carrier is still within 20 of the nest and delivers.
        let second = sim.step();
        assert_eq!((second.pickups, second.deliveries), (0, 1));
        assert_eq!(sim.nest(NestId(0)).unwrap().stored(), 1);
        assert!(!sim.colony().get(AntId(0)).unwrap().is_carrying_food());
    }

    #[test]
    fn deposits_land_in_the_field_and_decay() {
        let mut config = test_config(10);
        config.ant.pheromone_drop_interval = 1;
        let mut sim = foraging_sim(3, config);

        let summary = sim.step();
        assert_eq!(summary.deposits, 3);
        assert_eq!(summary.pheromones, 3);
        // Baseline markers have lost one decay step already.
        for marker in sim.field().iter() {
            assert!((marker.strength - 19.8).abs() < 1e-4);
        }
    }
}

// ── World clock ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock_tests {
    use super::*;

    fn idle_sim_with_food(units: usize) -> Sim<NoopBehavior> {
        let config = test_config(1_000);
        let mut food = FoodStore::from_config(&config.food);
        let spot = food.add_spot(Vec2::new(150.0, 150.0), 50.0, 50).unwrap();
        food.add_food(spot, units, &mut SimRng::new(1)).unwrap();
        let (colony, rngs) = colony_at(1, HOME, &config);
        SimBuilder::new(config, colony, rngs, NoopBehavior)
            .nest(Nest::new(HOME, 20.0))
            .food(food)
            .build()
            .unwrap()
    }

    #[test]
    fn replenishes_every_interval_when_below_half() {
        let mut sim = idle_sim_with_food(10);

        for _ in 0..299 {
            assert_eq!(sim.step().replenished, 0);
        }
        assert_eq!(sim.food().len(), 10);

        let summary = sim.step();
        assert_eq!(summary.tick, Tick(299));
        assert_eq!(summary.replenished, 10);
        assert_eq!(summary.food_units, 20);
        assert_eq!(sim.clock, Tick(300));
    }

    #[test]
    fn no_replenish_at_half_capacity() {
        let mut sim = idle_sim_with_food(25);
        sim.run_ticks(300, &mut NoopObserver);
        assert_eq!(sim.food().len(), 25);
    }

    #[test]
    fn run_stops_at_end_and_calls_hooks() {
        let mut sim = foraging_sim(4, test_config(50));
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(sim.clock, Tick(50));
        assert_eq!(rec.starts.len(), 50);
        assert_eq!(rec.summaries.len(), 50);
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(10), Tick(20), Tick(30), Tick(40)]);
        assert_eq!(rec.ended, Some(Tick(50)));

        // Already at the end: a second run does nothing but report the end.
        let mut again = Recorder::default();
        sim.run(&mut again);
        assert!(again.starts.is_empty());
        assert_eq!(again.ended, Some(Tick(50)));
    }

    #[test]
    fn same_seed_same_trajectories() {
        let mut a = foraging_sim(20, test_config(200));
        let mut b = foraging_sim(20, test_config(200));
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);
        for (x, y) in a.colony().iter().zip(b.colony().iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.state, y.state);
        }
        assert_eq!(a.field().len(), b.field().len());
    }
}

// ── Whole-run invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn foraging_run_keeps_world_invariants() {
        let config = test_config(1_500);
        let mut rng = SimRng::new(config.seed);
        let mut food = FoodStore::from_config(&config.food);
        for center in [Vec2::new(150.0, 150.0), Vec2::new(650.0, 450.0)] {
            let spot = food.add_spot(center, 50.0, 50).unwrap();
            food.add_food(spot, 30, &mut rng).unwrap();
        }
        let (colony, rngs) = colony_at(40, HOME, &config);
        let behavior = ForagingBehavior::from_config(&config);
        let max_speed = config.ant.max_speed;
        let arena = config.arena();
        let mut sim = SimBuilder::new(config, colony, rngs, behavior)
            .nest(Nest::new(HOME, 20.0))
            .obstacle(Obstacle::new(250.0, 200.0, 40.0, 200.0))
            .obstacle(Obstacle::new(500.0, 100.0, 120.0, 30.0))
            .food(food)
            .build()
            .unwrap();

        let mut stored = 0;
        let mut amount = sim.food().total_amount();
        for _ in 0..1_500 {
            let summary = sim.step();

            assert_eq!(summary.nest_stored, stored + summary.deliveries as u64);
            stored = summary.nest_stored;

            let now = sim.food().total_amount();
            assert_eq!(
                now + summary.pickups as u64,
                amount + summary.replenished as u64 * 10,
                "food amount must drop by exactly the pickups"
            );
            amount = now;

            for ant in sim.colony().iter() {
                assert!(ant.velocity.length() <= max_speed + 1e-4);
                assert!(arena.contains(ant.position));
                assert!(!sim.obstacles().blocks(ant.position));
            }
            for (_, unit) in sim.food().iter() {
                assert!(unit.amount > 0, "depleted units must not linger");
            }
            for marker in sim.field().iter() {
                assert!(marker.strength > 0.0);
            }
        }
    }
}
