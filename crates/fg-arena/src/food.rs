//! Food spots and the individual food units they hold.
//!
//! # Ownership
//!
//! Every unit is stored exactly once, in the store's `SlotMap`.  Its spot
//! keeps the unit's `FoodKey`, so the same unit is reachable both through the
//! global collection (for contact tests) and through its spot (for capacity
//! and replenishment).  [`FoodStore::take_one`] is the only way a unit is
//! removed, and it updates both sides in the same call: no depleted unit is
//! ever visible to a later query.

use slotmap::{SlotMap, new_key_type};

use fg_core::{FgError, FgResult, FoodConfig, Rect, SimRng, SpotId, Vec2};

new_key_type! {
    /// Generational key of a food unit.  Stale keys (of depleted units)
    /// simply fail to resolve.
    pub struct FoodKey;
}

// ── FoodUnit ──────────────────────────────────────────────────────────────────

/// A single pile of food inside a spot.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodUnit {
    pub position: Vec2,
    /// Remaining pickups before the unit disappears.
    pub amount:   u32,
    pub spot:     SpotId,
}

// ── FoodSpot ──────────────────────────────────────────────────────────────────

/// A circular region that spawns food units up to a capacity ceiling.
#[derive(Clone, Debug)]
pub struct FoodSpot {
    pub center:   Vec2,
    pub radius:   f32,
    pub capacity: usize,
    units:        Vec<FoodKey>,
}

impl FoodSpot {
    /// Keys of the units currently in this spot.
    pub fn units(&self) -> &[FoodKey] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// `true` once fewer than half of the capacity remains.
    #[inline]
    pub fn is_below_half(&self) -> bool {
        self.units.len() * 2 < self.capacity
    }
}

/// Result of a successful pickup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Taken {
    pub position:  Vec2,
    pub remaining: u32,
    /// The unit reached zero and was removed.
    pub depleted:  bool,
}

// ── FoodStore ─────────────────────────────────────────────────────────────────

/// Every food unit and spot in the world.
pub struct FoodStore {
    units:       SlotMap<FoodKey, FoodUnit>,
    spots:       Vec<FoodSpot>,
    unit_amount: u32,
    unit_size:   f32,
}

impl FoodStore {
    /// An empty store whose new units start with `unit_amount` and occupy a
    /// `unit_size × unit_size` square.
    pub fn new(unit_amount: u32, unit_size: f32) -> Self {
        Self {
            units: SlotMap::with_key(),
            spots: Vec::new(),
            unit_amount,
            unit_size,
        }
    }

    pub fn from_config(cfg: &FoodConfig) -> Self {
        Self::new(cfg.unit_amount, cfg.unit_size)
    }

    // ── Spots ─────────────────────────────────────────────────────────────

    /// Register a new, empty spot.  A radius of zero puts every unit at the
    /// center; a negative or non-finite radius is rejected.
    pub fn add_spot(&mut self, center: Vec2, radius: f32, capacity: usize) -> FgResult<SpotId> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(FgError::Config(format!("food spot radius must be zero or positive, got {radius}")));
        }
        let id = SpotId::try_from(self.spots.len())
            .map_err(|_| FgError::Config("too many food spots".into()))?;
        self.spots.push(FoodSpot { center, radius, capacity, units: Vec::new() });
        Ok(id)
    }

    pub fn spot(&self, id: SpotId) -> Option<&FoodSpot> {
        self.spots.get(id.index())
    }

    pub fn spots(&self) -> &[FoodSpot] {
        &self.spots
    }

    /// Spawn up to `count` units at random points of `spot`, stopping at the
    /// spot's capacity.  Returns the number of units actually added.
    pub fn add_food(&mut self, spot: SpotId, count: usize, rng: &mut SimRng) -> FgResult<usize> {
        let (center, radius) = {
            let s = self.spot(spot).ok_or(FgError::SpotNotFound(spot))?;
            (s.center, s.radius)
        };
        let mut added = 0;
        for _ in 0..count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let distance = rng.gen_range(0.0..=radius);
            let position = center + Vec2::from_angle(angle) * distance;
            if self.place_unit(spot, position)?.is_none() {
                break;
            }
            added += 1;
        }
        Ok(added)
    }

    /// Put one unit at an exact position inside `spot`.
    ///
    /// Returns `Ok(None)` if the spot is already full.
    pub fn place_unit(&mut self, spot: SpotId, position: Vec2) -> FgResult<Option<FoodKey>> {
        let amount = self.unit_amount;
        let s = self.spots.get_mut(spot.index()).ok_or(FgError::SpotNotFound(spot))?;
        if s.units.len() >= s.capacity {
            return Ok(None);
        }
        let key = self.units.insert(FoodUnit { position, amount, spot });
        s.units.push(key);
        Ok(Some(key))
    }

    /// Top `spot` up by `amount` units if it has dropped below half capacity.
    /// Returns the number of units added (0 if no top-up was needed).
    pub fn replenish_if_below_half(
        &mut self,
        spot:   SpotId,
        amount: usize,
        rng:    &mut SimRng,
    ) -> FgResult<usize> {
        let below = self.spot(spot).ok_or(FgError::SpotNotFound(spot))?.is_below_half();
        if !below {
            return Ok(0);
        }
        self.add_food(spot, amount, rng)
    }

    // ── Units ─────────────────────────────────────────────────────────────

    /// Take one portion from the unit `key`.
    ///
    /// A unit reaching zero is removed from the store and from its spot
    /// before this returns.  Returns `None` for a stale key.
    pub fn take_one(&mut self, key: FoodKey) -> Option<Taken> {
        let unit = self.units.get_mut(key)?;
        unit.amount = unit.amount.saturating_sub(1);
        let taken = Taken {
            position:  unit.position,
            remaining: unit.amount,
            depleted:  unit.amount == 0,
        };
        if taken.depleted {
            let spot = unit.spot;
            self.units.remove(key);
            if let Some(s) = self.spots.get_mut(spot.index()) {
                s.units.retain(|&k| k != key);
            }
        }
        Some(taken)
    }

    /// Bounding square of a unit.
    #[inline]
    pub fn bounds(&self, unit: &FoodUnit) -> Rect {
        Rect::centered(unit.position, self.unit_size)
    }

    /// The first unit whose bounding square overlaps `area`.
    pub fn first_overlapping(&self, area: Rect) -> Option<(FoodKey, &FoodUnit)> {
        self.units.iter().find(|(_, u)| self.bounds(u).overlaps(area))
    }

    /// `true` if any unit's bounding square contains `p`.
    pub fn any_contains(&self, p: Vec2) -> bool {
        self.units.values().any(|u| self.bounds(u).contains(p))
    }

    pub fn get(&self, key: FoodKey) -> Option<&FoodUnit> {
        self.units.get(key)
    }

    pub fn contains_key(&self, key: FoodKey) -> bool {
        self.units.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodKey, &FoodUnit)> + '_ {
        self.units.iter()
    }

    /// Number of live units across all spots.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Sum of the remaining amounts of every unit.
    pub fn total_amount(&self) -> u64 {
        self.units.values().map(|u| u.amount as u64).sum()
    }

    pub fn unit_size(&self) -> f32 {
        self.unit_size
    }
}
