use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    GameOver,
}

/// Paces game ticks independently of the graphics framerate and
/// combines that with game state management
pub struct FpsControl {
    game_fps: f64,
    game_frame_duration: Duration,
    last_update: Instant,

    // amount of time which game frames have not yet been
    // accounted for (will be included next time this is done)
    remainder: f64, // secs

    // number of game frames that still need to be performed
    // to catch up with the current time
    missed_updates: Option<usize>,

    game_state: State,

    // used to store the frame fraction when the game is paused
    frozen_frame_fraction: Option<f32>,
}

impl FpsControl {
    pub fn new(fps: f64) -> Self {
        Self {
            game_fps: fps,
            game_frame_duration: Duration::from_nanos((1_000_000_000.0 / fps) as u64),
            last_update: Instant::now(),
            remainder: 0.,
            missed_updates: None,
            game_state: State::Playing,
            frozen_frame_fraction: None,
        }
    }

    // adjust self.last_update to make it match the expected
    // frame_fraction, this is done when resuming a paused game
    // and when adjusting fps to ensure smoothness
    fn set_last_update_to_match_frame_fraction(&mut self, frac: f32) {
        let mut elapsed = (frac - self.remainder as f32) * self.game_frame_duration.as_secs_f32();
        // slight tolerance
        if (-0.01..0.).contains(&elapsed) {
            elapsed = 0.;
        } else {
            assert!(elapsed >= 0., "elapsed ({}s) < 0", elapsed);
        }

        self.last_update = Instant::now() - Duration::from_secs_f32(elapsed);
    }

    pub fn set_game_fps(&mut self, fps: f64) {
        if (self.game_fps - fps).abs() < f64::EPSILON {
            return;
        }

        // freeze frame fraction
        let frame_fraction = self.frame_fraction();

        self.game_fps = fps;
        self.game_frame_duration = Duration::from_nanos((1_000_000_000.0 / fps) as u64);

        // revert to saved frame fraction
        self.set_last_update_to_match_frame_fraction(frame_fraction);
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // calculate how many game frames should have occurred
                // since the last call to can_update
                let game_frames = self.last_update.elapsed().as_secs_f64()
                    / self.game_frame_duration.as_secs_f64()
                    + self.remainder;
                let missed_updates = game_frames as usize;

                if missed_updates > 0 {
                    self.remainder = game_frames % 1.;
                    self.last_update = Instant::now();
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn play(&mut self) {
        self.game_state = State::Playing;
        match self.frozen_frame_fraction.take() {
            None => (),
            Some(frac) => self.set_last_update_to_match_frame_fraction(frac),
        }
    }

    pub fn pause(&mut self) {
        self.game_state = State::Paused;
        self.frozen_frame_fraction = Some(self.frame_fraction());
        self.missed_updates = None;
    }

    /// Stops ticking, `can_update` never returns true again for a
    /// session that has ended
    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.frozen_frame_fraction = Some(self.frame_fraction());
        self.missed_updates = None;
    }

    // fraction of the current game frame that has elapsed
    pub fn frame_fraction(&self) -> f32 {
        match self.frozen_frame_fraction {
            Some(frac) => frac,
            None => {
                let frac = self.last_update.elapsed().as_secs_f32()
                    / self.game_frame_duration.as_secs_f32()
                    + self.remainder as f32;
                if frac > 1. {
                    eprintln!("warning: frame fraction > 1 ({})", frac);
                    1.
                } else {
                    frac
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_updates_after_game_over() {
        let mut control = FpsControl::new(1000.);
        control.game_over();
        std::thread::sleep(Duration::from_millis(10));
        assert!(!control.can_update());
        assert_eq!(control.state(), State::GameOver);
    }

    #[test]
    fn test_no_updates_while_paused() {
        let mut control = FpsControl::new(1000.);
        control.pause();
        std::thread::sleep(Duration::from_millis(10));
        assert!(!control.can_update());

        control.play();
        assert_eq!(control.state(), State::Playing);
    }

    #[test]
    fn test_catches_up_missed_updates() {
        let mut control = FpsControl::new(100.);
        std::thread::sleep(Duration::from_millis(50));
        // ~5 frames should have accumulated
        let mut updates = 0;
        while control.can_update() {
            updates += 1;
            assert!(updates < 100, "runaway update loop");
        }
        assert!(updates >= 3, "expected a few catch-up updates, got {}", updates);
    }
}
