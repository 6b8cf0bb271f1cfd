use ggez::{event, ContextBuilder};

use crate::app::App;
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod error;
mod session;
mod snake;

fn main() -> Result {
    let app = App::new();

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "author")
        .window_mode(app.wm())
        .window_setup(app.ws())
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    event::run(ctx, event_loop, app)
}
