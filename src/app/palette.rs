use ggez::graphics::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

/// Colors for the board and the message screen
#[derive(Copy, Clone)]
pub struct Palette {
    pub background: Color,
    pub message_background: Color,
    pub text: Color,
    pub snake: Color,
    pub food: Color,
    pub border: Color,
    pub grid: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        background: Color::BLACK,
        message_background: gray!(0.06),
        text: Color::WHITE,
        snake: Color { r: 0.2, g: 0.75, b: 0.35, a: 1. },
        food: Color { r: 0.86, g: 0.24, b: 0.24, a: 1. },
        border: Color { r: 0.32, g: 0.36, b: 0.41, a: 1. },
        grid: gray!(0.15),
    };
}
