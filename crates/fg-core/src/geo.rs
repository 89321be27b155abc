//! Planar geometry: the toroidal arena, axis-aligned rectangles, and random
//! direction helpers.
//!
//! Vectors are `glam::Vec2` (single precision).  The arena is a few thousand
//! units across, so `f32` keeps sub-millimetre precision everywhere.

use std::f32::consts::TAU;

use rand::Rng;

pub use glam::Vec2;

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The toroidal simulation area `[0, width) × [0, height)`.
///
/// Leaving one edge re-enters at the opposite edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub width:  f32,
    pub height: f32,
}

impl Arena {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wrap `pos` into `[0, width) × [0, height)`.
    #[inline]
    pub fn wrap(self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// `true` if `pos` already lies inside the arena.
    #[inline]
    pub fn contains(self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }

    /// Centre point of the arena.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// `rem_euclid` can return `len` itself for tiny negative inputs
/// (`-1e-9 % 800 == 800` after rounding); fold that back to zero.
#[inline]
fn wrap_axis(v: f32, len: f32) -> f32 {
    let w = v.rem_euclid(len);
    if w >= len { 0.0 } else { w }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Point containment is half-open: the left/top edges are inside, the
/// right/bottom edges are outside.  Adjacent rectangles therefore never both
/// claim the same point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min:  Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { min: Vec2::new(x, y), size: Vec2::new(width, height) }
    }

    /// A `size × size` square centred on `center`.
    #[inline]
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self { min: center - Vec2::splat(size * 0.5), size: Vec2::splat(size) }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Half-open point containment.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x
            && self.min.y < b_max.y && other.min.y < a_max.y
    }

    /// Closest point of the (closed) rectangle to `p`.  Equals `p` when `p`
    /// is inside.
    #[inline]
    pub fn closest_point(self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }
}

// ── Random directions ─────────────────────────────────────────────────────────

/// A unit vector with a uniformly distributed angle.
#[inline]
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

/// A vector with each component drawn from `[-amount, amount]`.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, amount: f32) -> Vec2 {
    if amount <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(rng.gen_range(-amount..=amount), rng.gen_range(-amount..=amount))
}

/// Normalize `v`, or return a random unit vector when `v` has no direction.
#[inline]
pub fn normalize_or_random<R: Rng + ?Sized>(v: Vec2, rng: &mut R) -> Vec2 {
    v.try_normalize().unwrap_or_else(|| random_unit(rng))
}
