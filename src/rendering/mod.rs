use crate::application::{Camera, Session};
use crate::domain::{CellRect, Pattern, World};
use crate::ui::{
    grid_area_height, grid_area_width, panel_x, Button, PatternList, Slider, CELL_SIZE,
    PANEL_WIDTH,
};
use macroquad::prelude::*;

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the visible slice of the universe
pub fn draw_world(world: &World, camera: &Camera) {
    let cell_px = CELL_SIZE * camera.zoom;
    let area_width = grid_area_width();
    let area_height = grid_area_height();
    let visible = camera.visible_cell_rect(area_width, area_height, CELL_SIZE);

    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let grid_line_color = Color::from_rgba(40, 40, 40, 255); // Dark gray

    // Grid lines only once cells are large enough to resolve
    if cell_px >= 4.0 {
        for gx in visible.min.x..=visible.max.x + 1 {
            let (sx, _) = camera.world_to_screen(gx as f32 * CELL_SIZE, 0.0);
            draw_line(sx, 0.0, sx, area_height, 1.0, grid_line_color);
        }
        for gy in visible.min.y..=visible.max.y + 1 {
            let (_, sy) = camera.world_to_screen(0.0, gy as f32 * CELL_SIZE);
            draw_line(0.0, sy, area_width, sy, 1.0, grid_line_color);
        }
    }

    // Live cells, culled to the viewport. A half-pixel inset keeps
    // neighboring cells visually separate.
    let size = (CELL_SIZE - 1.0) * camera.zoom;
    for cell in world.live_cells().filter(|c| visible.contains(*c)) {
        let (sx, sy) = camera.world_to_screen(
            cell.x as f32 * CELL_SIZE + 0.5,
            cell.y as f32 * CELL_SIZE + 0.5,
        );
        draw_rectangle(sx, sy, size, size, alive_color);
    }
}

/// Draw a semi-transparent preview of a pattern at the cursor position
pub fn draw_pattern_preview(pattern: &Pattern, camera: &Camera, mouse_pos: (f32, f32)) {
    let cell_px = CELL_SIZE * camera.zoom;
    let anchor = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    let (cx, cy) = pattern.center();

    // Ghost cells
    for &(dx, dy) in &pattern.points {
        let (sx, sy) = camera.world_to_screen(
            (anchor.x + dx - cx) as f32 * CELL_SIZE,
            (anchor.y + dy - cy) as f32 * CELL_SIZE,
        );
        draw_rectangle(sx, sy, cell_px, cell_px, Color::from_rgba(0, 255, 150, 120));
        draw_rectangle_lines(sx, sy, cell_px, cell_px, 1.5, Color::from_rgba(0, 255, 150, 200));
    }

    // Bounding box around the whole footprint
    let (box_x, box_y) = camera.world_to_screen(
        (anchor.x - cx) as f32 * CELL_SIZE,
        (anchor.y - cy) as f32 * CELL_SIZE,
    );
    draw_rectangle_lines(
        box_x,
        box_y,
        pattern.width as f32 * cell_px,
        pattern.height as f32 * cell_px,
        2.0,
        Color::from_rgba(255, 255, 0, 180), // Yellow outline
    );
}

/// Debug overlay outlining the window the simulation steps inside
pub fn draw_active_window(window: CellRect, camera: &Camera) {
    if window.is_empty() {
        return;
    }
    let (sx, sy) = camera.world_to_screen(
        window.min.x as f32 * CELL_SIZE,
        window.min.y as f32 * CELL_SIZE,
    );
    let (ex, ey) = camera.world_to_screen(
        (window.max.x + 1) as f32 * CELL_SIZE,
        (window.max.y + 1) as f32 * CELL_SIZE,
    );
    draw_rectangle_lines(sx, sy, ex - sx, ey - sy, 2.0, Color::from_rgba(255, 165, 0, 200));
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with widgets, help text, and stats
pub fn draw_controls(
    session: &Session,
    camera: &Camera,
    buttons: &[Button],
    slider: &Slider,
    pattern_list: &PatternList,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    slider.draw(mouse_pos);
    pattern_list.draw(mouse_pos, session.selected_pattern);

    let px = panel_x();

    // Controls help - below the pattern browser
    let controls = [
        ("Controls:", px, 470.0, 14.0, WHITE),
        ("LMB: Toggle/Stamp", px, 485.0, 12.0, GRAY),
        ("Drag: Pan", px, 498.0, 12.0, GRAY),
        ("Wheel: Zoom", px, 511.0, 12.0, GRAY),
        ("RMB/Esc: Cancel", px, 524.0, 12.0, GRAY),
        ("Space: Run  R: Reset", px, 537.0, 12.0, GRAY),
        ("H: Home  D: Window", px, 550.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Define all stats declaratively
    let labels = [
        ("Generation:", px, 580.0, 16.0, WHITE),
        (
            &format!("{}", session.world.generation()),
            px,
            600.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Population:", px, 630.0, 16.0, WHITE),
        (
            &format_number(session.world.population()),
            px,
            650.0,
            16.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Speed:", px, 680.0, 16.0, WHITE),
        (
            &format!("{:.0} gen/s", session.generations_per_second),
            px,
            700.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Status:", px, 725.0, 16.0, WHITE),
        (
            if session.is_running { "Running" } else { "Paused" },
            px,
            745.0,
            16.0,
            if session.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("Zoom:", px, 770.0, 14.0, WHITE),
        (
            &format!("{:.1}x", camera.zoom),
            px,
            785.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });
}
