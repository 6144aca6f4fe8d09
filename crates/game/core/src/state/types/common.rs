use std::fmt;

/// Tile address inside a map grid, `(row, col)`.
///
/// Row 0 is the top of the map; column 0 is its left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate in `direction`, or `None` past the
    /// top or left edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Chebyshev distance (king moves).
    pub fn distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement direction on the grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Handle to a map instance stored in a [`World`](crate::World).
///
/// Two maps with the same name are still two instances with independent
/// tile state; identity is the handle, never the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapId(pub u32);

impl MapId {
    /// The configured fallback map. Always present.
    pub const DEFAULT: Self = Self(0);

    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}

impl Default for MapId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn step_stops_at_negative_edge() {
        assert_eq!(Coordinate::ORIGIN.step(Direction::Up), None);
        assert_eq!(Coordinate::ORIGIN.step(Direction::Left), None);
        assert_eq!(
            Coordinate::ORIGIN.step(Direction::Down),
            Some(Coordinate::new(1, 0))
        );
        assert_eq!(
            Coordinate::new(1, 1).step(Direction::Right),
            Some(Coordinate::new(1, 2))
        );
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(Direction::from_str("UP").ok(), Some(Direction::Up));
        assert_eq!(Direction::from_str("left").ok(), Some(Direction::Left));
        assert!(Direction::from_str("north").is_err());
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn distance_is_chebyshev() {
        let center = Coordinate::new(2, 2);
        assert_eq!(center.distance(Coordinate::new(4, 3)), 2);
        assert_eq!(center.distance(center), 0);
    }
}
