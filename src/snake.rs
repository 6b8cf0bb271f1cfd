use std::collections::VecDeque;

use crate::basic::{Dir, Point};

/// The snake's segments, head first, and its direction of travel
pub struct Body {
    pub segments: VecDeque<Point>,
    /// Direction the snake is currently going
    pub dir: Dir,
}

impl Body {
    /// A straight body of `len` segments with the head at `head`,
    /// trailing off opposite to `dir`
    pub fn new(head: Point, dir: Dir, len: usize, step: isize) -> Self {
        assert!(len > 0);
        let segments = (0..len as isize)
            .map(|i| head + (-dir).offset() * (i * step))
            .collect();
        Self { segments, dir }
    }

    pub fn head(&self) -> Point {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Turn towards `dir` unless that would reverse the snake into its
    /// own neck, in which case the request is silently ignored
    pub fn turn(&mut self, dir: Dir) {
        if dir != -self.dir {
            self.dir = dir;
        }
    }

    /// Advance one step: the new head is prepended and, unless the
    /// snake grew this tick, the tail is dropped
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.segments.push_front(new_head);
        if !grow {
            self.segments.pop_back();
        }
    }

    /// Whether `pos` coincides with a non-head segment
    pub fn hits(&self, pos: Point) -> bool {
        self.segments.iter().skip(1).any(|&segment| segment == pos)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_new_body_spacing() {
        let body = Body::new(Point { x: 100, y: 100 }, Dir::R, 3, 20);
        assert_eq!(
            body.segments.iter().copied().collect_vec(),
            vec![
                Point { x: 100, y: 100 },
                Point { x: 80, y: 100 },
                Point { x: 60, y: 100 },
            ]
        );
        // adjacent segments are exactly one step apart along the direction
        for (&front, &back) in body.segments.iter().tuple_windows() {
            assert_eq!(front - back, Dir::R.offset() * 20);
        }
    }

    #[test]
    fn test_turn_matrix() {
        // a request is accepted iff it isn't the opposite of the
        // current direction
        for current in Dir::iter() {
            for requested in Dir::iter() {
                let mut body = Body::new(Point { x: 100, y: 100 }, current, 3, 20);
                body.turn(requested);
                let expected = if requested == -current { current } else { requested };
                assert_eq!(body.dir, expected, "{current:?} -> {requested:?}");
            }
        }
    }

    #[test]
    fn test_advance() {
        let mut body = Body::new(Point { x: 100, y: 100 }, Dir::R, 3, 20);

        body.advance(Point { x: 120, y: 100 }, false);
        assert_eq!(body.len(), 3);
        assert_eq!(body.head(), Point { x: 120, y: 100 });
        assert!(!body.segments.contains(&Point { x: 60, y: 100 }));

        body.advance(Point { x: 140, y: 100 }, true);
        assert_eq!(body.len(), 4);
        assert_eq!(body.head(), Point { x: 140, y: 100 });
    }

    #[test]
    fn test_hits_ignores_head() {
        let body = Body::new(Point { x: 100, y: 100 }, Dir::R, 3, 20);
        assert!(!body.hits(Point { x: 100, y: 100 }));
        assert!(body.hits(Point { x: 80, y: 100 }));
        assert!(body.hits(Point { x: 60, y: 100 }));
        assert!(!body.hits(Point { x: 40, y: 100 }));
    }
}
