//! A single scent marker.

use fg_core::Vec2;

/// What a marker points toward.
///
/// Foraging ants only ever lay `Food` markers.  `Home` is kept so that a
/// return-trail behavior can be added without changing the field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PheromoneKind {
    #[default]
    Food,
    Home,
}

impl PheromoneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PheromoneKind::Food => "food",
            PheromoneKind::Home => "home",
        }
    }
}

impl std::fmt::Display for PheromoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decaying marker laid by an ant.
///
/// Markers never move and are never merged; only their strength changes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pheromone {
    pub position: Vec2,
    pub strength: f32,
    pub kind:     PheromoneKind,
}

impl Pheromone {
    #[inline]
    pub fn new(position: Vec2, strength: f32, kind: PheromoneKind) -> Self {
        Self { position, strength, kind }
    }

    /// `true` once the marker has fully evaporated.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.strength <= 0.0
    }
}
