//! Fluent builder for constructing `Colony` + `AntRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use fg_agent::{Caste, ColonyBuilder};
//! use fg_core::{AntConfig, NestId, Vec2};
//!
//! let nest = Vec2::new(400.0, 300.0);
//! let (colony, rngs) = ColonyBuilder::new(AntConfig::default(), /*seed=*/ 42)
//!     .spawn(90, NestId(0), nest)
//!     .spawn_caste(10, NestId(0), nest, Caste::Soldier)
//!     .build()?;
//!
//! assert_eq!(colony.len(), 100);
//! assert_eq!(rngs.len(),   100);
//! # Ok::<(), fg_core::FgError>(())
//! ```

use fg_core::{AgentRng, AntConfig, AntId, FgResult, NestId, Vec2};

use crate::{Ant, AntRngs, Caste, Colony};

struct SpawnGroup {
    count:    usize,
    nest:     NestId,
    position: Vec2,
    caste:    Caste,
}

/// Fluent builder for [`Colony`] + [`AntRngs`].
///
/// IDs are assigned in the order groups were added.  Each ant's randomized
/// tunables are drawn from its own RNG, so adding ants at the end never
/// changes the ants before them.
pub struct ColonyBuilder {
    cfg:    AntConfig,
    seed:   u64,
    groups: Vec<SpawnGroup>,
}

impl ColonyBuilder {
    pub fn new(cfg: AntConfig, seed: u64) -> Self {
        Self { cfg, seed, groups: Vec::new() }
    }

    /// Add `count` workers starting at `position`, belonging to `nest`.
    pub fn spawn(self, count: usize, nest: NestId, position: Vec2) -> Self {
        self.spawn_caste(count, nest, position, Caste::Worker)
    }

    pub fn spawn_caste(mut self, count: usize, nest: NestId, position: Vec2, caste: Caste) -> Self {
        self.groups.push(SpawnGroup { count, nest, position, caste });
        self
    }

    /// Total ants queued so far.
    pub fn count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Spawn every queued ant.
    ///
    /// Fails with `FgError::Config` if the `AntConfig` cannot be spawned
    /// from (for example an empty persistence range).
    pub fn build(self) -> FgResult<(Colony, AntRngs)> {
        self.cfg.validate()?;

        let total = self.count();
        let mut ants = Vec::with_capacity(total);
        let mut rngs = Vec::with_capacity(total);

        for group in &self.groups {
            for _ in 0..group.count {
                let id = AntId(ants.len() as u32);
                let mut rng = AgentRng::new(self.seed, id);
                ants.push(Ant::spawn(id, group.nest, group.caste, group.position, &self.cfg, &mut rng));
                rngs.push(rng);
            }
        }

        Ok((Colony::new(ants), AntRngs { inner: rngs }))
    }
}
