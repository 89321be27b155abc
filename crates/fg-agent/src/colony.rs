//! Colony storage: `Colony` (ant data) and `AntRngs` (per-ant RNG).
//!
//! # Why two structs?
//!
//! The world loop needs `&mut AgentRng` for the ant being stepped while it
//! also holds `&mut Ant` and shared references to the rest of the world.
//! Keeping the RNGs outside the `Ant` records lets the sim borrow one ant
//! and its RNG independently.

use fg_core::{AgentRng, AntId};

use crate::ant::{Ant, AntState};

// ── AntRngs ───────────────────────────────────────────────────────────────────

/// Per-ant deterministic RNG state, indexed by `AntId`.
pub struct AntRngs {
    pub inner: Vec<AgentRng>,
}

impl AntRngs {
    #[inline]
    pub fn get_mut(&mut self, ant: AntId) -> &mut AgentRng {
        &mut self.inner[ant.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// All ants of a run.  `ants[i].id == AntId(i)`.
///
/// Ants are created by [`ColonyBuilder`](crate::ColonyBuilder) before the
/// first tick and are never removed.
pub struct Colony {
    ants: Vec<Ant>,
}

impl Colony {
    pub(crate) fn new(ants: Vec<Ant>) -> Self {
        Self { ants }
    }

    pub fn len(&self) -> usize {
        self.ants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }

    /// Iterator over all `AntId`s in ascending order.
    pub fn ant_ids(&self) -> impl Iterator<Item = AntId> + '_ {
        (0..self.ants.len() as u32).map(AntId)
    }

    pub fn get(&self, id: AntId) -> Option<&Ant> {
        self.ants.get(id.index())
    }

    pub fn get_mut(&mut self, id: AntId) -> Option<&mut Ant> {
        self.ants.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ant> + '_ {
        self.ants.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ant> + '_ {
        self.ants.iter_mut()
    }

    pub fn as_slice(&self) -> &[Ant] {
        &self.ants
    }

    /// Number of ants currently in `state`.
    pub fn count_in(&self, state: AntState) -> usize {
        self.ants.iter().filter(|a| a.state == state).count()
    }
}
