use super::scheduler::TickTimer;
use crate::domain::{presets, CellCoord, CellRect, Pattern, World};

pub const DEFAULT_RATE: f32 = 10.0;
pub const MIN_RATE: f32 = 1.0;
pub const MAX_RATE: f32 = 60.0;

/// Session orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct Session {
    pub world: World,
    pub patterns: Vec<Pattern>,
    pub is_running: bool,
    pub generations_per_second: f32,
    timer: TickTimer,
    /// Index of the pattern armed for stamping (None = normal mode)
    pub selected_pattern: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            patterns: presets::all_patterns(),
            is_running: false,
            generations_per_second: DEFAULT_RATE,
            timer: TickTimer::new(DEFAULT_RATE),
            selected_pattern: None,
        }
    }

    /// Start the simulation; the first generation steps on the next tick
    pub fn start(mut self) -> Self {
        if !self.is_running {
            self.is_running = true;
            self.timer.arm();
        }
        self
    }

    /// Pause the simulation
    pub fn stop(mut self) -> Self {
        self.is_running = false;
        self.timer.cancel();
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running {
            self.stop()
        } else {
            self.start()
        }
    }

    /// Set simulation speed, clamped to the supported range
    pub fn set_rate(mut self, generations_per_second: f32) -> Self {
        self.generations_per_second = generations_per_second.clamp(MIN_RATE, MAX_RATE);
        self.timer.set_rate(self.generations_per_second);
        self
    }

    /// Adjust simulation speed by a delta
    pub fn adjust_rate(self, delta: f32) -> Self {
        let rate = self.generations_per_second + delta;
        self.set_rate(rate)
    }

    /// Update simulation by one frame. Steps at most one generation,
    /// confined to the given window.
    pub fn tick(mut self, delta_time: f32, window: CellRect) -> Self {
        if !self.is_running {
            return self;
        }
        if self.timer.advance(delta_time) {
            self.world.step(window);
        }
        self
    }

    /// Populate any chunks in the region not yet generated
    pub fn ensure_chunks(&mut self, region: CellRect) {
        self.world.generate_chunks(region);
    }

    /// Stop and wipe the universe, including the generated-chunk record
    pub fn reset(mut self) -> Self {
        self = self.stop();
        self.world.clear();
        self
    }

    /// Arm a pattern for stamping
    pub fn select_pattern(mut self, index: usize) -> Self {
        if index < self.patterns.len() {
            self.selected_pattern = Some(index);
        }
        self
    }

    /// Leave stamp mode
    pub fn cancel_selection(mut self) -> Self {
        self.selected_pattern = None;
        self
    }

    pub fn selected(&self) -> Option<&Pattern> {
        self.selected_pattern.and_then(|i| self.patterns.get(i))
    }

    /// Stamp the armed pattern centered on `anchor`. Does nothing in normal
    /// mode; the selection stays armed for further stamps.
    pub fn stamp_at(mut self, anchor: CellCoord) -> Self {
        if let Some(index) = self.selected_pattern {
            self.patterns[index].stamp_onto(&mut self.world, anchor);
        }
        self
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> CellRect {
        CellRect::new(CellCoord::new(-50, -50), CellCoord::new(50, 50))
    }

    #[test]
    fn test_no_stepping_while_stopped() {
        let mut session = Session::new();
        session.world.set_alive(CellCoord::new(0, 0), true);
        session = session.tick(10.0, window());
        assert_eq!(session.world.generation(), 0);
    }

    #[test]
    fn test_start_steps_on_next_tick() {
        let mut session = Session::new().start();
        session = session.tick(0.0, window());
        assert_eq!(session.world.generation(), 1);

        // Subsequent ticks wait out the interval again
        session = session.tick(0.0, window());
        assert_eq!(session.world.generation(), 1);
    }

    #[test]
    fn test_toggle_running_round_trip() {
        let session = Session::new().toggle_running();
        assert!(session.is_running);
        let session = session.toggle_running();
        assert!(!session.is_running);
    }

    #[test]
    fn test_rate_is_clamped() {
        let session = Session::new().set_rate(500.0);
        assert_eq!(session.generations_per_second, MAX_RATE);
        let session = session.set_rate(0.0);
        assert_eq!(session.generations_per_second, MIN_RATE);
    }

    #[test]
    fn test_stamp_without_selection_is_noop() {
        let session = Session::new().stamp_at(CellCoord::new(3, 3));
        assert_eq!(session.world.population(), 0);
    }

    #[test]
    fn test_selection_persists_across_stamps() {
        let glider = Session::new()
            .patterns
            .iter()
            .position(|p| p.name == "Glider")
            .unwrap();

        let session = Session::new()
            .select_pattern(glider)
            .stamp_at(CellCoord::new(0, 0))
            .stamp_at(CellCoord::new(20, 20));

        assert_eq!(session.world.population(), 10);
        assert_eq!(session.selected_pattern, Some(glider));

        let session = session.cancel_selection();
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_selecting_out_of_range_is_ignored() {
        let session = Session::new().select_pattern(999);
        assert!(session.selected_pattern.is_none());
    }

    #[test]
    fn test_reset_stops_and_clears_everything() {
        let mut session = Session::new();
        session.ensure_chunks(window());
        session = session.start().tick(0.0, window());
        assert!(session.world.population() > 0);

        session = session.reset();
        assert!(!session.is_running);
        assert_eq!(session.world.population(), 0);
        assert_eq!(session.world.generation(), 0);
        assert_eq!(session.world.generated_chunk_count(), 0);

        // A fresh visit regenerates terrain
        session.ensure_chunks(window());
        assert!(session.world.population() > 0);
    }
}
