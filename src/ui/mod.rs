mod button;
mod slider;
mod pattern_list;

pub use button::Button;
pub use slider::Slider;
pub use pattern_list::PatternList;

// UI constants - functions where the value depends on window size
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Width of one cell in world pixels at zoom 1.0
pub const CELL_SIZE: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Axis-aligned hit test shared by the panel widgets
fn hit(mouse_pos: (f32, f32), x: f32, y: f32, width: f32, height: f32) -> bool {
    mouse_pos.0 >= x && mouse_pos.0 <= x + width && mouse_pos.1 >= y && mouse_pos.1 <= y + height
}

/// Create UI buttons with standard layout. The first button doubles as the
/// play/pause toggle, so its label follows the running state.
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(
            px,
            20.0,
            PANEL_WIDTH,
            BUTTON_HEIGHT,
            if is_running { "Pause" } else { "Start" },
        ),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
    ]
}
