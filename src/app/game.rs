use ggez::event::EventHandler;
use ggez::graphics::{
    Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, PxScale, Rect, Text,
};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{Context, GameResult};
use rand::prelude::*;

use crate::app::fps_control::{FpsControl, State};
use crate::app::message_screen::MessageScreen;
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::{Screen, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::basic::board::Bounds;
use crate::basic::{Dir, Point};
use crate::session::{GameSession, StepOutcome};

/// Grid quantum in pixels, every position moves by this much per tick
pub const STEP: isize = 20;
/// Height of the strip above the board reserved for the score readout
const TOP_MARGIN: isize = 20;
/// Distance between the bounds and the drawn border rectangle
const BORDER_INSET: f32 = 7.;
const HUD_SCALE: f32 = 15.;

/// The active play screen: owns the session and the tick pacing,
/// tears itself down into a game-over message screen
pub struct Game {
    session: GameSession,
    control: FpsControl,

    /// Latest direction key pressed since the last tick, sampled once
    /// per tick so at most one turn happens per step
    queued_dir: Option<Dir>,
    /// Set exactly once, when the session dies
    final_score: Option<u32>,

    palette: Palette,
    prefs: Prefs,
    rng: ThreadRng,

    /// Cached, the board geometry never changes during a session
    border_mesh: Option<Mesh>,
    grid_mesh: Option<Mesh>,
}

impl Game {
    pub fn new() -> Self {
        let mut rng = thread_rng();
        let bounds = Bounds::new(
            Point { x: 0, y: TOP_MARGIN },
            Point {
                x: WINDOW_WIDTH as isize,
                y: WINDOW_HEIGHT as isize,
            },
        );
        let session = GameSession::new(bounds, STEP, &mut rng);
        let control = FpsControl::new(session.moves_per_second as f64);

        Self {
            session,
            control,
            queued_dir: None,
            final_score: None,
            palette: Palette::DARK,
            prefs: Prefs::default(),
            rng,
            border_mesh: None,
            grid_mesh: None,
        }
    }

    pub fn next_screen(&self) -> Option<Screen> {
        self.final_score
            .map(|score| Screen::Message(MessageScreen::game_over(score)))
    }

    fn queue_direction(&mut self, dir: Dir) {
        if self.control.state() == State::Playing {
            self.queued_dir = Some(dir);
        }
    }

    fn build_border_mesh(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let Bounds { min, max } = self.session.bounds;
        let rect = Rect::new(
            min.x as f32 + BORDER_INSET,
            min.y as f32 + BORDER_INSET,
            (max.x - min.x) as f32 - 2. * BORDER_INSET,
            (max.y - min.y) as f32 - 2. * BORDER_INSET,
        );
        Mesh::new_rectangle(ctx, DrawMode::stroke(1.), rect, self.palette.border)
    }

    fn build_grid_mesh(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let Bounds { min, max } = self.session.bounds;
        let mut builder = MeshBuilder::new();

        // lines along the cell edges, cells are centered on their positions
        let mut x = min.x + STEP / 2;
        while x < max.x {
            let points: [Point2<f32>; 2] =
                [Point { x, y: min.y }.into(), Point { x, y: max.y }.into()];
            builder.line(&points, 1., self.palette.grid)?;
            x += STEP;
        }
        let mut y = min.y + STEP / 2;
        while y < max.y {
            let points: [Point2<f32>; 2] =
                [Point { x: min.x, y }.into(), Point { x: max.x, y }.into()];
            builder.line(&points, 1., self.palette.grid)?;
            y += STEP;
        }

        Ok(Mesh::from_data(ctx, builder.build()))
    }

    /// Snake and food, rebuilt every frame
    fn build_field_mesh(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let mut builder = MeshBuilder::new();
        for &segment in &self.session.body.segments {
            builder.rectangle(DrawMode::fill(), cell_rect(segment), self.palette.snake)?;
        }
        builder.rectangle(DrawMode::fill(), cell_rect(self.session.food), self.palette.food)?;
        Ok(Mesh::from_data(ctx, builder.build()))
    }

    fn draw_hud(&self, canvas: &mut Canvas) {
        let mut hud = Text::new(format!(
            "Score: {}, Speed: {}",
            self.session.score, self.session.moves_per_second
        ));
        hud.set_scale(PxScale::from(HUD_SCALE));
        canvas.draw(
            &hud,
            DrawParam::default()
                .dest(Point2 { x: 10., y: 3. })
                .color(self.palette.text),
        );

        if self.control.state() == State::Paused {
            let mut paused = Text::new("Paused");
            paused.set_scale(PxScale::from(HUD_SCALE));
            canvas.draw(
                &paused,
                DrawParam::default()
                    .dest(Point2 { x: WINDOW_WIDTH - 60., y: 3. })
                    .color(self.palette.text),
            );
        }
    }
}

/// Positions name the center of a cell, the drawn square extends half
/// a step in each direction
fn cell_rect(pos: Point) -> Rect {
    let side = STEP as f32;
    Rect::new(pos.x as f32 - side / 2., pos.y as f32 - side / 2., side, side)
}

impl EventHandler for Game {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        while self.control.can_update() {
            if let Some(dir) = self.queued_dir.take() {
                self.session.set_direction(dir);
            }

            match self.session.step(&mut self.rng) {
                StepOutcome::Playing => {
                    // the session may have sped up after a food tick
                    self.control.set_game_fps(self.session.moves_per_second as f64);
                }
                StepOutcome::GameOver { score } => {
                    self.control.game_over();
                    self.final_score = Some(score);
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background);

        if self.prefs.draw_grid {
            if self.grid_mesh.is_none() {
                self.grid_mesh = Some(self.build_grid_mesh(ctx)?);
            }
            canvas.draw(self.grid_mesh.as_ref().unwrap(), DrawParam::default());
        }

        if self.prefs.draw_border {
            if self.border_mesh.is_none() {
                self.border_mesh = Some(self.build_border_mesh(ctx)?);
            }
            canvas.draw(self.border_mesh.as_ref().unwrap(), DrawParam::default());
        }

        let field_mesh = self.build_field_mesh(ctx)?;
        canvas.draw(&field_mesh, DrawParam::default());

        self.draw_hud(&mut canvas);

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        use KeyCode::*;

        match input.keycode {
            Some(Up) => self.queue_direction(Dir::U),
            Some(Down) => self.queue_direction(Dir::D),
            Some(Left) => self.queue_direction(Dir::L),
            Some(Right) => self.queue_direction(Dir::R),
            Some(Space) => match self.control.state() {
                State::Playing => self.control.pause(),
                State::Paused => self.control.play(),
                State::GameOver => {}
            },
            Some(G) => self.prefs.draw_grid = !self.prefs.draw_grid,
            _ => {}
        }

        Ok(())
    }
}
