//! Fixed-length ring buffer of recent positions, used to detect circling.

use std::collections::VecDeque;

use fg_core::Vec2;

#[derive(Clone, Debug)]
pub struct MovementMemory {
    positions: VecDeque<Vec2>,
    capacity:  usize,
}

impl MovementMemory {
    pub fn new(capacity: usize) -> Self {
        Self { positions: VecDeque::with_capacity(capacity), capacity }
    }

    /// Record `p`, evicting the oldest entry once full.
    pub fn push(&mut self, p: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.positions.len() == self.capacity {
            self.positions.pop_front();
        }
        self.positions.push_back(p);
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.positions.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> + '_ {
        self.positions.iter()
    }

    /// Mean of the stored positions, `None` when empty.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.positions.is_empty() {
            return None;
        }
        let sum: Vec2 = self.positions.iter().copied().sum();
        Some(sum / self.positions.len() as f32)
    }

    /// Mean distance of the stored positions from their centroid.
    pub fn spread(&self) -> Option<f32> {
        let c = self.centroid()?;
        let total: f32 = self.positions.iter().map(|p| p.distance(c)).sum();
        Some(total / self.positions.len() as f32)
    }

    /// `true` once the buffer is full and the recorded path stays within
    /// `threshold` of its centroid on average.
    pub fn is_stuck(&self, threshold: f32) -> bool {
        self.is_full() && self.spread().is_some_and(|s| s < threshold)
    }
}
