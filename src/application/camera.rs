use crate::domain::{CellCoord, CellRect, CHUNK_SIZE};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Camera manages panning and zoom for navigating the unbounded plane.
///
/// Screen position = world position * zoom + offset. World coordinates are
/// continuous; dividing by the cell size and flooring yields cell coordinates.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Pan by a raw screen-space delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Adjust zoom by `delta`, keeping the world point under the given
    /// screen position stationary
    pub fn zoom_at(&mut self, screen_x: f32, screen_y: f32, delta: f32) {
        let (world_x, world_y) = self.screen_to_world(screen_x, screen_y);
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset_x = screen_x - world_x * self.zoom;
        self.offset_y = screen_y - world_y * self.zoom;
    }

    /// Convert screen coordinates to world coordinates
    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.offset_x) / self.zoom,
            (screen_y - self.offset_y) / self.zoom,
        )
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, world_x: f32, world_y: f32) -> (f32, f32) {
        (
            world_x * self.zoom + self.offset_x,
            world_y * self.zoom + self.offset_y,
        )
    }

    /// Convert screen coordinates to the cell under them. Flooring keeps the
    /// mapping correct for negative world positions.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> CellCoord {
        let (world_x, world_y) = self.screen_to_world(screen_x, screen_y);
        CellCoord::new(
            (world_x / cell_size).floor() as i64,
            (world_y / cell_size).floor() as i64,
        )
    }

    /// Cell bounds currently on screen, for culling
    pub fn visible_cell_rect(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> CellRect {
        CellRect::new(
            self.screen_to_cell(0.0, 0.0, cell_size),
            self.screen_to_cell(viewport_width, viewport_height, cell_size),
        )
    }

    /// Visible bounds padded by `buffer_chunks` chunks on every side. The
    /// simulation steps cells inside this window and freezes the rest.
    pub fn active_window(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        cell_size: f32,
        buffer_chunks: i64,
    ) -> CellRect {
        self.visible_cell_rect(viewport_width, viewport_height, cell_size)
            .expand(buffer_chunks * CHUNK_SIZE)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_preserves_anchor_point() {
        let mut camera = Camera::new();
        camera.pan(37.0, -12.0);

        let (ax, ay) = (150.0, 90.0);
        let before = camera.screen_to_world(ax, ay);
        camera.zoom_at(ax, ay, ZOOM_STEP);
        let after = camera.screen_to_world(ax, ay);

        assert!((before.0 - after.0).abs() < 1e-3);
        assert!((before.1 - after.1).abs() < 1e-3);

        camera.zoom_at(ax, ay, -ZOOM_STEP);
        let restored = camera.screen_to_world(ax, ay);
        assert!((before.0 - restored.0).abs() < 1e-3);
        assert!((before.1 - restored.1).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_clamps_to_bounds() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_at(0.0, 0.0, ZOOM_STEP);
        }
        assert_eq!(camera.zoom, MAX_ZOOM);

        for _ in 0..200 {
            camera.zoom_at(0.0, 0.0, -ZOOM_STEP);
        }
        assert_eq!(camera.zoom, MIN_ZOOM);
        assert!(camera.offset_x.is_finite());
    }

    #[test]
    fn test_screen_to_cell_floors_negatives() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_cell(5.0, 5.0, 20.0), CellCoord::new(0, 0));
        assert_eq!(
            camera.screen_to_cell(-0.5, -0.5, 20.0),
            CellCoord::new(-1, -1)
        );
        assert_eq!(
            camera.screen_to_cell(-20.0, -41.0, 20.0),
            CellCoord::new(-1, -3)
        );
    }

    #[test]
    fn test_visible_rect_grows_when_zoomed_out() {
        let mut camera = Camera::new();
        let near = camera.visible_cell_rect(800.0, 600.0, 20.0);
        assert_eq!(near.min, CellCoord::new(0, 0));
        assert_eq!(near.max, CellCoord::new(40, 30));

        camera.zoom = 0.5;
        let far = camera.visible_cell_rect(800.0, 600.0, 20.0);
        assert_eq!(far.max, CellCoord::new(80, 60));
    }

    #[test]
    fn test_active_window_pads_by_buffer_chunks() {
        let camera = Camera::new();
        let window = camera.active_window(800.0, 600.0, 20.0, 10);
        let pad = 10 * CHUNK_SIZE;
        assert_eq!(window.min, CellCoord::new(-pad, -pad));
        assert_eq!(window.max, CellCoord::new(40 + pad, 30 + pad));
    }

    #[test]
    fn test_pan_shifts_view() {
        let mut camera = Camera::new();
        camera.pan(-40.0, 0.0);
        assert_eq!(camera.screen_to_cell(0.0, 0.0, 20.0), CellCoord::new(2, 0));
    }
}
