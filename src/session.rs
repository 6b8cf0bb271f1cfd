use std::iter;

use rand::Rng;

use crate::basic::board::{random_free_cell, Bounds};
use crate::basic::{Dir, Point};
use crate::snake::Body;

/// Result of advancing the session by one tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StepOutcome {
    Playing,
    GameOver { score: u32 },
}

/// One playthrough, from pressing enter to game over. A finished
/// session is discarded, restarting always creates a fresh one.
pub struct GameSession {
    pub body: Body,
    pub food: Point,
    pub score: u32,
    /// Speed level in ticks per second, the tick interval is
    /// 1000 / this in milliseconds
    pub moves_per_second: u32,
    pub bounds: Bounds,
    pub step: isize,
    live: bool,
}

impl GameSession {
    pub const INITIAL_LEN: usize = 3;
    pub const INITIAL_MOVES_PER_SECOND: u32 = 15;
    /// Speed increase applied every `SPEEDUP_INTERVAL`th food
    const SPEEDUP_INCREMENT: u32 = 3;
    const SPEEDUP_INTERVAL: u32 = 5;

    pub fn new(bounds: Bounds, step: isize, rng: &mut impl Rng) -> Self {
        let head = Point {
            x: bounds.min.x + 5 * step,
            y: bounds.min.y + 4 * step,
        };
        let body = Body::new(head, Dir::R, Self::INITIAL_LEN, step);
        let food = random_free_cell(body.segments.iter().copied(), bounds, step, rng)
            .expect("board too small to place the initial food");

        Self {
            body,
            food,
            score: 0,
            moves_per_second: Self::INITIAL_MOVES_PER_SECOND,
            bounds,
            step,
            live: true,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Request a direction change, takes effect from the next tick.
    /// Reversals and repeats are silently ignored, players mash keys.
    pub fn set_direction(&mut self, dir: Dir) {
        self.body.turn(dir);
    }

    /// Advance the game by one tick
    pub fn step(&mut self, rng: &mut impl Rng) -> StepOutcome {
        assert!(self.live, "step called on a finished session");

        let head = self.body.head();
        let new_head = head.translate(self.body.dir, self.step);

        // the check looks at the pre-move head, so running into a wall
        // or into the body only ends the game on the following tick
        if self.bounds.on_edge(head) || self.body.hits(head) {
            self.live = false;
            return StepOutcome::GameOver { score: self.score };
        }

        let ate = new_head == self.food;
        if ate {
            self.score += 1;
            if self.score % Self::SPEEDUP_INTERVAL == 0 {
                self.moves_per_second += Self::SPEEDUP_INCREMENT;
            }
            self.relocate_food(new_head, rng);
        }

        self.body.advance(new_head, ate);
        StepOutcome::Playing
    }

    /// Move the food to a random cell that will still be free once
    /// this tick's move is applied
    fn relocate_food(&mut self, new_head: Point, rng: &mut impl Rng) {
        let occupied = iter::once(new_head).chain(self.body.segments.iter().copied());
        // on a completely full board the food stays where it is
        if let Some(food) = random_free_cell(occupied, self.bounds, self.step, rng) {
            self.food = food;
        }
    }
}
