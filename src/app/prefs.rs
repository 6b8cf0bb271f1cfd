/// Display preferences toggled at runtime
#[derive(Copy, Clone, Debug)]
pub struct Prefs {
    pub draw_grid: bool,
    pub draw_border: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            draw_grid: false,
            draw_border: true,
        }
    }
}
