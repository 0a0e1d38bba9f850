use macroquad::prelude::*;

/// Horizontal slider snapped to whole numbers, with drag support
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    min: f32,
    max: f32,
    value: f32,
    label: String,
    dragging: bool,
}

impl Slider {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        min: f32,
        max: f32,
        value: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height: 20.0,
            min,
            max,
            value: value.clamp(min, max),
            label: label.into(),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move the handle from outside, e.g. when a hotkey changes the value
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Value the handle takes with the cursor at `mouse_x`
    fn value_at(&self, mouse_x: f32) -> f32 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        (self.min + t * (self.max - self.min)).round()
    }

    /// Handle dragging; returns true when the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left)
            && super::hit(mouse_pos, self.x, self.y, self.width, self.height)
        {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }

        if self.dragging {
            let new_value = self.value_at(mouse_pos.0);
            if new_value != self.value {
                self.value = new_value;
                return true;
            }
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(
            &format!("{}: {:.0}", self.label, self.value),
            self.x,
            self.y - 5.0,
            14.0,
            GRAY,
        );

        let track_y = self.y + self.height / 2.0 - 3.0;
        let t = (self.value - self.min) / (self.max - self.min);
        draw_rectangle(
            self.x,
            track_y,
            self.width,
            6.0,
            Color::from_rgba(45, 45, 45, 255),
        );
        draw_rectangle(
            self.x,
            track_y,
            self.width * t,
            6.0,
            Color::from_rgba(70, 130, 180, 255),
        );

        let handle_x = self.x + self.width * t - 5.0;
        let handle_color = if self.dragging
            || super::hit(mouse_pos, self.x, self.y, self.width, self.height)
        {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(handle_x, self.y, 10.0, self.height, handle_color);
        draw_rectangle_lines(handle_x, self.y, 10.0, self.height, 1.0, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_maps_across_track() {
        let slider = Slider::new(0.0, 0.0, 100.0, "Speed", 1.0, 60.0, 10.0);
        assert_eq!(slider.value_at(0.0), 1.0);
        assert_eq!(slider.value_at(100.0), 60.0);
        assert_eq!(slider.value_at(50.0), 31.0);
    }

    #[test]
    fn test_cursor_outside_track_clamps() {
        let slider = Slider::new(50.0, 0.0, 100.0, "Speed", 1.0, 60.0, 10.0);
        assert_eq!(slider.value_at(-400.0), 1.0);
        assert_eq!(slider.value_at(400.0), 60.0);
    }

    #[test]
    fn test_set_value_clamps_to_range() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, "Speed", 1.0, 60.0, 10.0);
        slider.set_value(999.0);
        assert_eq!(slider.value(), 60.0);
        slider.set_value(-3.0);
        assert_eq!(slider.value(), 1.0);
    }
}
