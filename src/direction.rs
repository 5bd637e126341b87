//! The eight compass directions used to probe lines from a cell.
//!
//! Order is fixed: northwest, north, northeast, east, west, southwest,
//! south, southeast. Rows grow southward and columns grow eastward.

/// A unit step on the grid. Both components are in `{-1, 0, 1}` and never
/// both zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Row offset
    pub dr: isize,
    /// Column offset
    pub dc: isize,
}

impl Direction {
    pub const NORTH_WEST: Direction = Direction { dr: -1, dc: -1 };
    pub const NORTH: Direction = Direction { dr: -1, dc: 0 };
    pub const NORTH_EAST: Direction = Direction { dr: -1, dc: 1 };
    pub const EAST: Direction = Direction { dr: 0, dc: 1 };
    pub const WEST: Direction = Direction { dr: 0, dc: -1 };
    pub const SOUTH_WEST: Direction = Direction { dr: 1, dc: -1 };
    pub const SOUTH: Direction = Direction { dr: 1, dc: 0 };
    pub const SOUTH_EAST: Direction = Direction { dr: 1, dc: 1 };

    /// All eight directions in table order.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH_WEST,
        Direction::NORTH,
        Direction::NORTH_EAST,
        Direction::EAST,
        Direction::WEST,
        Direction::SOUTH_WEST,
        Direction::SOUTH,
        Direction::SOUTH_EAST,
    ];

    /// Iterate over the table. Every call starts from the beginning.
    pub fn all() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }

    /// The direction pointing the other way.
    pub fn reversed(self) -> Direction {
        Direction {
            dr: -self.dr,
            dc: -self.dc,
        }
    }

    /// Lowercase compass name, e.g. `"northwest"`.
    pub fn name(self) -> &'static str {
        match (self.dr, self.dc) {
            (-1, -1) => "northwest",
            (-1, 0) => "north",
            (-1, 1) => "northeast",
            (0, 1) => "east",
            (0, -1) => "west",
            (1, -1) => "southwest",
            (1, 0) => "south",
            (1, 1) => "southeast",
            _ => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_eight_distinct_unit_steps() {
        let set: HashSet<Direction> = Direction::all().collect();
        assert_eq!(set.len(), 8);
        for d in Direction::all() {
            assert!((-1..=1).contains(&d.dr));
            assert!((-1..=1).contains(&d.dc));
            assert!((d.dr, d.dc) != (0, 0));
        }
    }

    #[test]
    fn test_order_is_stable() {
        let names: Vec<&str> = Direction::all().map(Direction::name).collect();
        assert_eq!(
            names,
            [
                "northwest",
                "north",
                "northeast",
                "east",
                "west",
                "southwest",
                "south",
                "southeast"
            ]
        );
        // A second pass yields the same sequence
        assert!(Direction::all().eq(Direction::ALL));
    }

    #[test]
    fn test_reversed_is_in_table() {
        for d in Direction::all() {
            assert!(Direction::ALL.contains(&d.reversed()));
            assert_eq!(d.reversed().reversed(), d);
        }
        assert_eq!(Direction::NORTH.reversed(), Direction::SOUTH);
    }
}
