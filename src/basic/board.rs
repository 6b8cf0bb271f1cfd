use itertools::Itertools;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::Point;

/// Edges of the playing field, a position on the edge is fatal
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        assert!(min.x < max.x && min.y < max.y, "degenerate bounds");
        Self { min, max }
    }

    pub fn on_edge(self, pos: Point) -> bool {
        pos.x == self.min.x
            || pos.x == self.max.x
            || pos.y == self.min.y
            || pos.y == self.max.y
    }

    /// Number of cell columns and rows strictly inside the bounds
    fn interior(self, step: isize) -> (isize, isize) {
        (
            (self.max.x - self.min.x) / step - 1,
            (self.max.y - self.min.y) / step - 1,
        )
    }
}

/// Uniformly pick an interior cell not in `occupied`. Samples from the
/// complement set directly instead of rejection sampling, so a crowded
/// board can't degrade into an endless retry loop. `None` if the board
/// is full.
pub fn random_free_cell(
    occupied: impl IntoIterator<Item = Point>,
    bounds: Bounds,
    step: isize,
    rng: &mut impl Rng,
) -> Option<Point> {
    let (w, h) = bounds.interior(step);
    let num_cells = (w * h) as usize;

    let occupied_indices = occupied
        .into_iter()
        .filter_map(|pos| cell_index(pos, bounds, step))
        .sorted_unstable()
        .dedup()
        .collect_vec();

    let free_cells = num_cells - occupied_indices.len();
    if free_cells == 0 {
        return None;
    }

    let mut new_idx = (0..free_cells).sample_single(rng);
    for idx in occupied_indices {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < num_cells);
    Some(Point {
        x: bounds.min.x + (new_idx as isize % w + 1) * step,
        y: bounds.min.y + (new_idx as isize / w + 1) * step,
    })
}

/// Row-major index of an interior cell, `None` for positions on or
/// outside the edge
fn cell_index(pos: Point, bounds: Bounds, step: isize) -> Option<usize> {
    let (w, h) = bounds.interior(step);
    let dx = pos.x - bounds.min.x;
    let dy = pos.y - bounds.min.y;
    if dx % step != 0 || dy % step != 0 {
        return None;
    }
    let col = dx / step - 1;
    let row = dy / step - 1;
    ((0..w).contains(&col) && (0..h).contains(&row)).then(|| (row * w + col) as usize)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn small_bounds() -> Bounds {
        // 2x2 interior cells at (20,20), (40,20), (20,40), (40,40)
        Bounds::new(Point { x: 0, y: 0 }, Point { x: 60, y: 60 })
    }

    #[test]
    fn test_on_edge() {
        let bounds = Bounds::new(Point { x: 0, y: 20 }, Point { x: 600, y: 620 });
        assert!(bounds.on_edge(Point { x: 0, y: 100 }));
        assert!(bounds.on_edge(Point { x: 600, y: 100 }));
        assert!(bounds.on_edge(Point { x: 100, y: 20 }));
        assert!(bounds.on_edge(Point { x: 100, y: 620 }));
        assert!(!bounds.on_edge(Point { x: 20, y: 40 }));
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let occupied = [
            Point { x: 20, y: 20 },
            Point { x: 40, y: 20 },
            Point { x: 40, y: 40 },
        ];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let free = random_free_cell(occupied.iter().copied(), small_bounds(), 20, &mut rng);
            assert_eq!(free, Some(Point { x: 20, y: 40 }));
        }
    }

    #[test]
    fn test_full_board() {
        let occupied = [
            Point { x: 20, y: 20 },
            Point { x: 40, y: 20 },
            Point { x: 20, y: 40 },
            Point { x: 40, y: 40 },
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let free = random_free_cell(occupied.iter().copied(), small_bounds(), 20, &mut rng);
        assert_eq!(free, None);
    }

    #[test]
    fn test_edge_positions_dont_count_as_occupied() {
        // edge and out-of-grid positions are ignored, duplicates collapse
        let occupied = [
            Point { x: 0, y: 20 },
            Point { x: 60, y: 40 },
            Point { x: 20, y: 20 },
            Point { x: 20, y: 20 },
            Point { x: 40, y: 20 },
            Point { x: 40, y: 40 },
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let free = random_free_cell(occupied.iter().copied(), small_bounds(), 20, &mut rng);
        assert_eq!(free, Some(Point { x: 20, y: 40 }));
    }

    #[test]
    fn test_free_cell_never_occupied() {
        let bounds = Bounds::new(Point { x: 0, y: 20 }, Point { x: 600, y: 620 });
        let occupied = vec![
            Point { x: 100, y: 100 },
            Point { x: 80, y: 100 },
            Point { x: 60, y: 100 },
        ];
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let free = random_free_cell(occupied.iter().copied(), bounds, 20, &mut rng)
                .expect("board is nearly empty");
            assert!(!occupied.contains(&free));
            assert!(!bounds.on_edge(free));
            assert_eq!(free.x % 20, 0);
            assert_eq!(free.y % 20, 0);
        }
    }
}
