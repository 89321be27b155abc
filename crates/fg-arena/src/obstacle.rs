//! Static rectangular obstacles.

use fg_core::{Rect, Vec2};

/// An immutable axis-aligned wall block.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    /// Obstacle with top-left corner `(x, y)`.
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { rect: Rect::new(x, y, width, height) }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.rect.contains(p)
    }

    /// Nearest point of the obstacle's surface (or interior) to `p`.
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        self.rect.closest_point(p)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width()
    }
}

impl From<Rect> for Obstacle {
    fn from(rect: Rect) -> Self {
        Self { rect }
    }
}

/// All obstacles of a run.  Built once at setup and only read afterwards.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// `true` if any obstacle contains `p`.
    #[inline]
    pub fn blocks(&self, p: Vec2) -> bool {
        self.obstacles.iter().any(|o| o.contains(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl FromIterator<Obstacle> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self { obstacles: iter.into_iter().collect() }
    }
}
