use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Drawable, PxScale, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::app::game::Game;
use crate::app::palette::Palette;
use crate::app::{Screen, WINDOW_HEIGHT, WINDOW_WIDTH};

const TEXT_SCALE: f32 = 30.;

/// The screen shown before the first game and after each game over,
/// waits for the player to confirm with enter
pub struct MessageScreen {
    text: String,
    palette: Palette,
    confirmed: bool,
}

impl MessageScreen {
    pub fn start() -> Self {
        Self::with_text("This is a snake game.\nPress ENTER to start.".to_string())
    }

    pub fn game_over(score: u32) -> Self {
        Self::with_text(format!(
            "Game over! You scored {score}!\nPress enter to try again."
        ))
    }

    fn with_text(text: String) -> Self {
        Self {
            text,
            palette: Palette::DARK,
            confirmed: false,
        }
    }

    pub fn next_screen(&self) -> Option<Screen> {
        self.confirmed.then(|| Screen::Game(Game::new()))
    }
}

impl EventHandler for MessageScreen {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.message_background);

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(TEXT_SCALE));

        // center the message in the window
        let dest = match text.dimensions(ctx) {
            Some(dim) => Point2 {
                x: (WINDOW_WIDTH - dim.w) / 2.,
                y: (WINDOW_HEIGHT - dim.h) / 2.,
            },
            None => Point2 { x: 0., y: 0. },
        };
        canvas.draw(
            &text,
            DrawParam::default().dest(dest).color(self.palette.text),
        );

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        // both the main and the keypad enter confirm
        if let Some(KeyCode::Return | KeyCode::NumpadEnter) = input.keycode {
            self.confirmed = true;
        }
        Ok(())
    }
}
