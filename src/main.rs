use infinite_life::{
    application::{MAX_RATE, MIN_RATE},
    input::{self, PointerState},
    rendering,
    ui::{self, PatternList, Slider},
    Camera, Session,
};
use macroquad::prelude::*;

/// Chunks of margin around the viewport that keep stepping off-screen
const BUFFER_CHUNKS: i64 = 10;

fn window_conf() -> Conf {
    Conf {
        window_title: "Infinite Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Start running right away
    let mut session = Session::new().start();
    let mut camera = Camera::new();
    let mut pointer = PointerState::default();
    let mut show_window_overlay = false;

    let px = ui::panel_x();
    let mut speed_slider = Slider::new(
        px,
        150.0,
        ui::PANEL_WIDTH,
        "Speed (gen/s)",
        MIN_RATE,
        MAX_RATE,
        session.generations_per_second,
    );
    let mut pattern_list = PatternList::new(px, 210.0, ui::PANEL_WIDTH, &session.patterns);

    info!(
        "world ready: {} patterns in the library, {} gen/s",
        session.patterns.len(),
        session.generations_per_second
    );

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        speed_slider.set_position(px, 150.0);
        pattern_list.set_position(px, 210.0);

        // Recreate buttons with current panel position and run state
        let buttons = ui::create_buttons(session.is_running);

        // Panel interaction
        session = input::process_button_clicks(session, &buttons, mouse_pos);
        if speed_slider.update(mouse_pos) {
            session = session.set_rate(speed_slider.value());
        }
        if let Some(index) = pattern_list.update(mouse_pos) {
            session = session.select_pattern(index);
        }

        // Grid interaction
        input::handle_zoom(&mut camera, mouse_pos);
        session = input::handle_pointer(session, &mut pointer, &mut camera, mouse_pos);
        session = input::process_keyboard_input(session, &mut camera, &mut show_window_overlay);
        speed_slider.set_value(session.generations_per_second);

        // Generate terrain for whatever scrolled on screen, then run one
        // frame of simulation inside the padded window
        let area_width = ui::grid_area_width();
        let area_height = ui::grid_area_height();
        let visible = camera.visible_cell_rect(area_width, area_height, ui::CELL_SIZE);
        session.ensure_chunks(visible);

        let window = camera.active_window(area_width, area_height, ui::CELL_SIZE, BUFFER_CHUNKS);
        session = session.tick(get_frame_time(), window);

        // Render
        clear_background(BLACK);
        rendering::draw_world(&session.world, &camera);

        if let Some(pattern) = session.selected() {
            if mouse_pos.0 < area_width {
                rendering::draw_pattern_preview(pattern, &camera, mouse_pos);
            }
        }
        if show_window_overlay {
            rendering::draw_active_window(window, &camera);
        }

        rendering::draw_controls(
            &session,
            &camera,
            &buttons,
            &speed_slider,
            &pattern_list,
            mouse_pos,
        );

        next_frame().await;
    }
}
