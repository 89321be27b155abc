//! headless — run the foraging colony without a window.
//!
//! Seeds one nest at the arena center, a handful of rectangular obstacles
//! and scattered food spots, runs for the configured number of ticks and
//! writes `ant_snapshots.csv` and `tick_summaries.csv` to `--out`.
//!
//! ```text
//! RUST_LOG=fg_sim=info cargo run --release -p headless -- --ants 200 --ticks 5000
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use fg_agent::{AntState, Colony, ColonyBuilder};
use fg_arena::layout::{DEFAULT_SPOT_SPACING, is_valid_nest_position, scatter_food_spots};
use fg_arena::{FoodStore, Nest, Obstacle, ObstacleSet};
use fg_behavior::ForagingBehavior;
use fg_core::{Arena, NestId, SimConfig, SimRng, Tick, Vec2};
use fg_output::{CsvWriter, OutputWriter, SimOutputObserver};
use fg_sim::{SimBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Seed offset for world layout, separate from the sim's own streams.
const LAYOUT_STREAM: u64 = 0x1A70_u64;
const NEST_ATTEMPTS: usize = 200;
const SPOT_ATTEMPTS: usize = 1_000;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Headless foraging colony simulation.
#[derive(Parser, Debug)]
#[command(name = "headless", version, about)]
struct Cli {
    /// JSON file with a (partial) `SimConfig`; missing fields use defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `total_ticks`.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Number of ants to spawn at the nest.
    #[arg(short, long, default_value_t = 100)]
    ants: usize,

    /// Number of food spots to scatter.
    #[arg(long, default_value_t = 3)]
    spots: usize,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the CSV files.
    #[arg(short, long, default_value = "output/headless")]
    out: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

// ── World layout ──────────────────────────────────────────────────────────────

/// Four small blocks around the arena's quarter points.
fn build_obstacles(arena: Arena) -> ObstacleSet {
    let (w, h) = (arena.width * 0.06, arena.height * 0.06);
    [(0.2, 0.2), (0.8, 0.2), (0.2, 0.8), (0.8, 0.8)]
        .into_iter()
        .map(|(fx, fy)| Obstacle::new(arena.width * fx - w * 0.5, arena.height * fy - h * 0.5, w, h))
        .collect()
}

/// The arena center if it is clear, otherwise a random clear position.
fn place_nest(arena: Arena, obstacles: &ObstacleSet, rng: &mut SimRng) -> Result<Vec2> {
    let center = arena.center();
    if is_valid_nest_position(center, obstacles) {
        return Ok(center);
    }
    for _ in 0..NEST_ATTEMPTS {
        let p = Vec2::new(rng.gen_range(0.0..arena.width), rng.gen_range(0.0..arena.height));
        if is_valid_nest_position(p, obstacles) {
            return Ok(p);
        }
    }
    bail!("no clear nest position after {NEST_ATTEMPTS} attempts")
}

fn seed_food(
    config:    &SimConfig,
    count:     usize,
    obstacles: &ObstacleSet,
    rng:       &mut SimRng,
) -> Result<FoodStore> {
    let mut food = FoodStore::from_config(&config.food);
    let centers = scatter_food_spots(
        count,
        config.arena(),
        obstacles,
        DEFAULT_SPOT_SPACING,
        SPOT_ATTEMPTS,
        rng,
    );
    if centers.len() < count {
        eprintln!("warning: placed only {} of {count} food spots", centers.len());
    }
    for center in centers {
        let spot = food.add_spot(center, config.food.spot_radius, config.food.capacity)?;
        food.add_food(spot, config.food.initial_units, rng)?;
    }
    Ok(food)
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    deliveries:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, deliveries: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        self.deliveries += summary.deliveries;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, colony: &Colony, nests: &[Nest]) {
        self.snapshot_rows += colony.len();
        self.inner.on_snapshot(tick, colony, nests);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // 1. Config.
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(ticks) = cli.ticks {
        config.total_ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    let arena = config.arena();

    println!("=== headless — forage colony ===");
    println!(
        "Arena: {}×{}  |  Ants: {}  |  Ticks: {}  |  Seed: {}",
        arena.width, arena.height, cli.ants, config.total_ticks, config.seed
    );

    // 2. World layout.
    let mut rng = SimRng::new(config.seed ^ LAYOUT_STREAM);
    let obstacles = build_obstacles(arena);
    let home = place_nest(arena, &obstacles, &mut rng)?;
    let food = seed_food(&config, cli.spots, &obstacles, &mut rng)?;
    println!(
        "Layout: nest at ({:.0}, {:.0}), {} obstacles, {} food spots, {} food units",
        home.x,
        home.y,
        obstacles.len(),
        food.spots().len(),
        food.len()
    );

    // 3. Colony.
    let (colony, rngs) =
        ColonyBuilder::new(config.ant.clone(), config.seed).spawn(cli.ants, NestId(0), home).build()?;

    // 4. Build sim.
    let behavior = ForagingBehavior::from_config(&config);
    let capture_radius = config.nest.capture_radius;
    let mut sim = SimBuilder::new(config, colony, rngs, behavior)
        .nest(Nest::new(home, capture_radius))
        .obstacles(obstacles)
        .food(food)
        .build()?;

    // 5. Output.
    let writer = CsvWriter::new(&cli.out)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 6. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {}/ant_snapshots.csv  : {} rows", cli.out.display(), obs.snapshot_rows);
    println!("  {}/tick_summaries.csv : {} rows", cli.out.display(), obs.summary_rows);
    println!();

    println!("{:<26} {:>10}", "Metric", "Value");
    println!("{}", "-".repeat(37));
    println!("{:<26} {:>10}", "deliveries", obs.deliveries);
    println!("{:<26} {:>10}", "nest stored", sim.total_stored());
    println!("{:<26} {:>10}", "food units left", sim.food().len());
    println!("{:<26} {:>10}", "pheromones alive", sim.field().len());
    for state in [AntState::Exploring, AntState::CarryingFood, AntState::ReturningToKnownFood] {
        println!("{:<26} {:>10}", format!("ants {state}"), sim.colony().count_in(state));
    }

    Ok(())
}
