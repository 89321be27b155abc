//! The colony's nest: where food is delivered.

use fg_core::Vec2;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nest {
    pub position:       Vec2,
    /// Deliveries count once a carrier is strictly closer than this.
    pub capture_radius: f32,
    stored:             u64,
}

impl Nest {
    pub fn new(position: Vec2, capture_radius: f32) -> Self {
        Self { position, capture_radius, stored: 0 }
    }

    /// `true` if `p` is inside the capture radius.
    #[inline]
    pub fn captures(&self, p: Vec2) -> bool {
        self.position.distance(p) < self.capture_radius
    }

    /// Add delivered food.  The counter never decreases during a run.
    #[inline]
    pub fn store_food(&mut self, amount: u64) {
        self.stored = self.stored.saturating_add(amount);
    }

    /// Total food delivered so far.
    #[inline]
    pub fn stored(&self) -> u64 {
        self.stored
    }
}
