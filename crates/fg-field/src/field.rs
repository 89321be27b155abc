//! The pheromone store: append-only deposits, linear decay, radius queries.
//!
//! # Spatial index
//!
//! Markers live in a plain `Vec` in deposit order.  An R-tree (via `rstar`)
//! indexes the prefix of that `Vec` that existed at the last [`tick`]; markers
//! deposited since then form an unindexed tail that queries scan linearly.
//!
//! ```text
//! markers: [ m0 m1 m2 … m(k-1) | mk … m(n-1) ]
//!            └─ R-tree (rebuilt by tick) ┘ └─ tail (scanned) ┘
//! ```
//!
//! Decay never moves a marker, so the index only goes stale when markers are
//! removed, which only happens inside `tick` right before the rebuild.
//! Deposits during a tick therefore cost O(1), and the per-tick rebuild is a
//! single O(n log n) bulk load.
//!
//! [`tick`]: PheromoneField::tick

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fg_core::Vec2;

use crate::{Pheromone, PheromoneKind};

// ── R-tree marker entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree: marker position plus its index in `markers`.
#[derive(Clone)]
struct MarkerEntry {
    point: [f32; 2],
    idx:   u32,
}

impl RTreeObject for MarkerEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for MarkerEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── PheromoneField ────────────────────────────────────────────────────────────

/// Every live scent marker in the arena.
///
/// Single-threaded by design: the world loop owns the field and hands ants a
/// shared reference while they sense, then applies their deposits one ant at
/// a time.
pub struct PheromoneField {
    markers:     Vec<Pheromone>,
    decay_rate:  f32,
    index:       RTree<MarkerEntry>,
    /// Number of leading `markers` covered by `index`.
    indexed_len: usize,
}

impl PheromoneField {
    /// An empty field whose markers lose `decay_rate` strength per tick.
    pub fn new(decay_rate: f32) -> Self {
        Self {
            markers: Vec::new(),
            decay_rate,
            index: RTree::new(),
            indexed_len: 0,
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a new marker.  Nearby markers are never merged: trail density
    /// is itself part of the signal.
    pub fn deposit(&mut self, position: Vec2, strength: f32, kind: PheromoneKind) {
        self.markers.push(Pheromone::new(position, strength, kind));
    }

    /// Decay every marker by the fixed rate and drop the ones that reach
    /// zero or below.
    pub fn tick(&mut self) {
        let decay = self.decay_rate;
        for marker in &mut self.markers {
            marker.strength -= decay;
        }
        self.markers.retain(|m| !m.is_spent());
        self.reindex();
    }

    /// Remove every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.reindex();
    }

    fn reindex(&mut self) {
        let entries: Vec<MarkerEntry> = self
            .markers
            .iter()
            .enumerate()
            .map(|(i, m)| MarkerEntry { point: m.position.to_array(), idx: i as u32 })
            .collect();
        self.index = RTree::bulk_load(entries);
        self.indexed_len = self.markers.len();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All markers strictly closer than `radius` to `position`, paired with
    /// their distance, in deposit order.
    ///
    /// The result is identical to a linear scan over every marker.
    pub fn query_within(&self, position: Vec2, radius: f32) -> Vec<(&Pheromone, f32)> {
        if radius <= 0.0 || self.markers.is_empty() {
            return Vec::new();
        }
        let r2 = radius * radius;

        let mut hits: Vec<usize> = self
            .index
            .locate_within_distance(position.to_array(), r2)
            .map(|e| e.idx as usize)
            .collect();
        hits.sort_unstable();
        hits.extend(self.indexed_len..self.markers.len());

        hits.into_iter()
            .filter_map(|i| {
                let marker = &self.markers[i];
                let d2 = marker.position.distance_squared(position);
                (d2 < r2).then(|| (marker, d2.sqrt()))
            })
            .collect()
    }

    /// Iterator over every live marker in deposit order.
    pub fn iter(&self) -> impl Iterator<Item = &Pheromone> + '_ {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    /// Number of live markers of `kind`.
    pub fn count_kind(&self, kind: PheromoneKind) -> usize {
        self.markers.iter().filter(|m| m.kind == kind).count()
    }
}
