use crate::application::{Camera, Session, ZOOM_STEP};
use crate::ui::{grid_area_width, CELL_SIZE};
use macroquad::prelude::*;

/// Cursor travel in pixels beyond which a press counts as a pan, not a click
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Tracks the pointer across frames to tell clicks from drags
#[derive(Default)]
pub struct PointerState {
    press_origin: Option<(f32, f32)>,
    last_pos: Option<(f32, f32)>,
    dragging: bool,
}

/// Zoom with the mouse wheel, anchored on the cursor
pub fn handle_zoom(camera: &mut Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_at(mouse_pos.0, mouse_pos.1, ZOOM_STEP);
    } else if wheel < 0.0 {
        camera.zoom_at(mouse_pos.0, mouse_pos.1, -ZOOM_STEP);
    }
}

/// Left-button gestures over the grid area: a short press toggles the cell
/// under the cursor (or stamps the armed pattern), a longer drag pans the
/// camera. Right-click leaves stamp mode.
pub fn handle_pointer(
    mut session: Session,
    pointer: &mut PointerState,
    camera: &mut Camera,
    mouse_pos: (f32, f32),
) -> Session {
    if is_mouse_button_pressed(MouseButton::Right) {
        session = session.cancel_selection();
    }

    if is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < grid_area_width() {
        pointer.press_origin = Some(mouse_pos);
        pointer.last_pos = Some(mouse_pos);
        pointer.dragging = false;
    }

    if is_mouse_button_down(MouseButton::Left) {
        if let Some(origin) = pointer.press_origin {
            if !pointer.dragging
                && ((mouse_pos.0 - origin.0).abs() > DRAG_THRESHOLD
                    || (mouse_pos.1 - origin.1).abs() > DRAG_THRESHOLD)
            {
                pointer.dragging = true;
            }
            if pointer.dragging {
                if let Some(last) = pointer.last_pos {
                    camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
                }
            }
            pointer.last_pos = Some(mouse_pos);
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        if let Some(origin) = pointer.press_origin.take() {
            if !pointer.dragging {
                let cell = camera.screen_to_cell(origin.0, origin.1, CELL_SIZE);
                if session.selected_pattern.is_some() {
                    session = session.stamp_at(cell);
                } else {
                    session.world.toggle(cell);
                }
            }
            pointer.last_pos = None;
            pointer.dragging = false;
        }
    }

    session
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    session: Session,
    camera: &mut Camera,
    window_overlay: &mut bool,
) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::R, Session::reset),
        (KeyCode::Escape, Session::cancel_selection),
        (KeyCode::Up, |s| s.adjust_rate(1.0)),
        (KeyCode::Down, |s| s.adjust_rate(-1.0)),
    ];

    let new_session = actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    // Toggle the stepping-window overlay with 'D'
    if is_key_pressed(KeyCode::D) {
        *window_overlay = !*window_overlay;
    }

    new_session
}

/// Process button clicks functionally
pub fn process_button_clicks(
    session: Session,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32),
) -> Session {
    buttons.iter().enumerate().fold(session, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.toggle_running(),
            1 => s.reset(),
            _ => s,
        }
    })
}
