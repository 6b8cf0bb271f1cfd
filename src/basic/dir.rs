use std::ops::Neg;

use crate::basic::Point;
use Dir::*;

/// The four directions the snake can travel in
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

// the geometric opposite, turning to it would reverse the snake
impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, D, L, R].iter().copied()
    }

    /// Offset of a single unit move in this direction, y grows downwards
    pub fn offset(self) -> Point {
        match self {
            U => Point { x: 0, y: -1 },
            D => Point { x: 0, y: 1 },
            L => Point { x: -1, y: 0 },
            R => Point { x: 1, y: 0 },
        }
    }
}

#[test]
fn test_opposites() {
    for dir in Dir::iter() {
        assert_ne!(dir, -dir);
        assert_eq!(dir, -(-dir));
        assert_eq!(dir.offset() + (-dir).offset(), Point { x: 0, y: 0 });
    }
}
