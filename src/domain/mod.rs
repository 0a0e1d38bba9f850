mod coords;
mod world;
mod patterns;

pub use coords::{CellCoord, ChunkCoord, CellRect, CHUNK_SIZE};
pub use world::World;
pub use patterns::{Pattern, presets};
