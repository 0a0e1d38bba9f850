// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{presets, CellCoord, CellRect, ChunkCoord, Pattern, World};
pub use application::{Camera, Session};
pub use ui::Button;
