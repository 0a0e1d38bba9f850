//! Sparse world state for the infinite plane.
//!
//! The entire simulation state is a hash set of live cell coordinates plus a
//! record of which chunks procedural generation has already filled. Stepping
//! only simulates cells inside the caller-supplied active window; everything
//! outside is carried over frozen, which bounds the work per tick no matter
//! how much of the plane has been explored.

use super::coords::{CHUNK_SIZE, CellCoord, CellRect, ChunkCoord};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Uniform draw above this threshold spawns a live cell (≈15% density).
const SPAWN_THRESHOLD: f64 = 0.85;

/// World manages the sparse cellular automaton state.
///
/// Owns the live set, the generated-chunk record, and the generation
/// counter; all mutation goes through `&mut self` methods.
pub struct World {
    live: HashSet<CellCoord>,
    generated: HashSet<ChunkCoord>,
    generation: u64,
}

impl World {
    /// Create an empty world: no live cells, no generated chunks.
    pub fn new() -> Self {
        Self {
            live: HashSet::new(),
            generated: HashSet::new(),
            generation: 0,
        }
    }

    pub fn is_alive(&self, cell: CellCoord) -> bool {
        self.live.contains(&cell)
    }

    /// Set a single cell. Clearing a dead cell or setting a live one is a
    /// no-op.
    pub fn set_alive(&mut self, cell: CellCoord, alive: bool) {
        if alive {
            self.live.insert(cell);
        } else {
            self.live.remove(&cell);
        }
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, cell: CellCoord) -> bool {
        if self.live.remove(&cell) {
            false
        } else {
            self.live.insert(cell);
            true
        }
    }

    /// Number of live cells across the whole plane.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Iterate over all live cells, in no particular order.
    pub fn live_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.live.iter().copied()
    }

    pub fn is_generated(&self, chunk: ChunkCoord) -> bool {
        self.generated.contains(&chunk)
    }

    pub fn generated_chunk_count(&self) -> usize {
        self.generated.len()
    }

    /// Clear the live set and the chunk record together and zero the
    /// generation counter. The next chunk-generation pass will repopulate
    /// whatever region the caller asks for.
    pub fn clear(&mut self) {
        self.live.clear();
        self.generated.clear();
        self.generation = 0;
    }

    /// Advance the automaton by one generation, simulating only cells inside
    /// `window` (B3/S23).
    ///
    /// Live cells outside the window are carried into the result unchanged:
    /// frozen, not simulated. In-window live cells tally a neighbor count for
    /// each of their 8 neighbors; a tallied coordinate is alive next
    /// generation if its count is exactly 3, or it is currently alive and its
    /// count is exactly 2. Tallies may land one cell outside the window, so
    /// births can occur just past the boundary, while frozen cells never
    /// contribute counts; the buffer margin keeps that seam off-screen.
    pub fn step(&mut self, window: CellRect) {
        let mut counts: HashMap<CellCoord, u8> = HashMap::new();
        let mut next: HashSet<CellCoord> = HashSet::new();

        for &cell in &self.live {
            if !window.contains(cell) {
                next.insert(cell);
                continue;
            }
            for neighbor in cell.neighbors() {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
        }

        for (cell, count) in counts {
            if count == 3 || (count == 2 && self.live.contains(&cell)) {
                next.insert(cell);
            }
        }

        self.live = next;
        self.generation += 1;
    }

    /// Populate every not-yet-generated chunk overlapping `region`, plus a
    /// one-chunk border around it. Draws from the thread-local RNG; see
    /// [`World::generate_chunks_with`] for the deterministic variant.
    pub fn generate_chunks(&mut self, region: CellRect) {
        let mut rng = rand::rng();
        self.generate_chunks_with(region, &mut rng);
    }

    /// Chunk generation with a caller-supplied RNG.
    ///
    /// Idempotent: a chunk already in the generated record is never re-rolled,
    /// so panning back over visited territory leaves edited cells alone. Each
    /// cell of a fresh chunk gets an independent uniform draw.
    pub fn generate_chunks_with(&mut self, region: CellRect, rng: &mut impl Rng) {
        if region.is_empty() {
            return;
        }
        let min_chunk = region.min.chunk();
        let max_chunk = region.max.chunk();

        for cy in (min_chunk.y - 1)..=(max_chunk.y + 1) {
            for cx in (min_chunk.x - 1)..=(max_chunk.x + 1) {
                let chunk = ChunkCoord::new(cx, cy);
                if self.generated.insert(chunk) {
                    self.populate_chunk(chunk, rng);
                }
            }
        }
    }

    fn populate_chunk(&mut self, chunk: ChunkCoord, rng: &mut impl Rng) {
        let origin = chunk.origin();
        for dy in 0..CHUNK_SIZE {
            for dx in 0..CHUNK_SIZE {
                if rng.random::<f64>() > SPAWN_THRESHOLD {
                    self.live.insert(CellCoord::new(origin.x + dx, origin.y + dy));
                }
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
