//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// 2D position on the cell field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Apply toroidal wrapping for given field dimensions
    ///
    /// Uses mathematical modulo, so arbitrarily negative coordinates
    /// land in `[0, width) x [0, height)`.
    pub fn wrap(&self, width: i32, height: i32) -> Self {
        Self {
            x: ((self.x % width) + width) % width,
            y: ((self.y % height) + height) % height,
        }
    }
}

/// Direction towards one of the 8 surrounding cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wrap() {
        let pos = Position::new(5, 5);
        let wrapped = pos.wrap(10, 10);
        assert_eq!(wrapped, Position::new(5, 5));

        let pos = Position::new(-1, -1);
        let wrapped = pos.wrap(10, 10);
        assert_eq!(wrapped, Position::new(9, 9));

        let pos = Position::new(10, 10);
        let wrapped = pos.wrap(10, 10);
        assert_eq!(wrapped, Position::new(0, 0));
    }

    #[test]
    fn test_wrap_far_outside_range() {
        // Several full turns around the torus in both directions.
        let wrapped = Position::new(-37, 103).wrap(10, 10);
        assert_eq!(wrapped, Position::new(3, 3));

        for k in -3..=3 {
            let pos = Position::new(4 + k * 10, 7 + k * 10);
            assert_eq!(pos.wrap(10, 10), Position::new(4, 7));
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::North.to_delta(), (0, -1));
        assert_eq!(Direction::South.to_delta(), (0, 1));
        assert_eq!(Direction::East.to_delta(), (1, 0));
        assert_eq!(Direction::West.to_delta(), (-1, 0));
    }

    #[test]
    fn test_directions_cover_all_neighbours() {
        let deltas: Vec<(i32, i32)> = Direction::all().iter().map(|d| d.to_delta()).collect();
        assert_eq!(deltas.len(), 8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    assert!(!deltas.contains(&(dx, dy)));
                } else {
                    assert!(deltas.contains(&(dx, dy)));
                }
            }
        }
    }
}
