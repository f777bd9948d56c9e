//! Search configuration.

use crate::geom::Direction;

/// The fixed order in which a search tests a cell's neighbours.
///
/// The order decides which branch depth-first search commits to first and
/// which of several equally short routes breadth-first search reports, so
/// it is part of a search's observable output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborOrder {
    #[default]
    SouthEastWestNorth,
    SouthEastNorthWest,
}

impl NeighborOrder {
    /// Directions in testing order.
    pub const fn directions(self) -> [Direction; 4] {
        use Direction::*;
        match self {
            Self::SouthEastWestNorth => [South, East, West, North],
            Self::SouthEastNorthWest => [South, East, North, West],
        }
    }
}

/// Settings shared by both search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub neighbor_order: NeighborOrder,
}

impl SearchConfig {
    pub const fn new() -> Self {
        Self {
            neighbor_order: NeighborOrder::SouthEastWestNorth,
        }
    }

    /// Set the neighbour order (builder).
    pub const fn with_neighbor_order(mut self, order: NeighborOrder) -> Self {
        self.neighbor_order = order;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::new().with_neighbor_order(NeighborOrder::SouthEastNorthWest);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
