use std::ops::Mul;

use derive_more::{Add, AddAssign, Sub, SubAssign};
use ggez::mint::Point2;

use crate::basic::Dir;

/// A position on the board in pixel units, always a whole
/// number of step units away from any other position
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x: x as f32, y: y as f32 }
    }
}

impl Mul<isize> for Point {
    type Output = Self;

    fn mul(self, rhs: isize) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Point {
    /// The position `dist` away in direction `dir`
    #[must_use]
    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        self + dir.offset() * dist
    }
}

#[test]
fn test_translate() {
    let start = Point { x: 100, y: 100 };
    assert_eq!(start.translate(Dir::R, 20), Point { x: 120, y: 100 });
    assert_eq!(start.translate(Dir::U, 20), Point { x: 100, y: 80 });
    assert_eq!(
        start.translate(Dir::L, 20).translate(Dir::D, 20),
        Point { x: 80, y: 120 }
    );
}
