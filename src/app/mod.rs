use std::ops::{Deref, DerefMut};

use ggez::conf::{FullscreenType, WindowMode, WindowSetup};
use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};

use crate::app::game::Game;
use crate::app::message_screen::MessageScreen;

mod fps_control;
mod game;
mod message_screen;
mod palette;
mod prefs;

pub const WINDOW_WIDTH: f32 = 600.;
pub const WINDOW_HEIGHT: f32 = 620.;

pub enum Screen {
    Message(MessageScreen),
    Game(Game),
}

impl Deref for Screen {
    type Target = dyn EventHandler;

    fn deref(&self) -> &Self::Target {
        use Screen::*;
        match self {
            Message(x) => x,
            Game(x) => x,
        }
    }
}

impl DerefMut for Screen {
    fn deref_mut(&mut self) -> &mut Self::Target {
        use Screen::*;
        match self {
            Message(x) => x,
            Game(x) => x,
        }
    }
}

/// The shell around the game: owns the window settings and the
/// current screen, swapping between the message screen and a live
/// game as either one signals it's done
pub struct App {
    screen: Screen,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Message(MessageScreen::start()),
        }
    }

    pub fn wm(&self) -> WindowMode {
        WindowMode::default()
            .dimensions(WINDOW_WIDTH, WINDOW_HEIGHT)
            .fullscreen_type(FullscreenType::Windowed)
            .resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake Game").vsync(true)
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let next_screen = match &self.screen {
            Screen::Message(message_screen) => message_screen.next_screen(),
            Screen::Game(game) => game.next_screen(),
        };
        if let Some(next_screen) = next_screen {
            self.screen = next_screen;
        }

        self.screen.update(ctx)
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.screen.draw(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        self.screen.key_down_event(ctx, input, repeated)
    }
}
