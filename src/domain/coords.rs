//! Coordinate types for the unbounded cell plane.
//!
//! Cells are addressed by signed integer pairs with value equality, so they
//! can key hash sets directly. Chunk coordinates address the 32×32 blocks
//! used by procedural generation.

/// Side length of a procedural-generation chunk, in cells.
pub const CHUNK_SIZE: i64 = 32;

/// A cell position on the infinite plane.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellCoord {
    pub x: i64,
    pub y: i64,
}

impl CellCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The chunk this cell belongs to. Floor division, so negative
    /// coordinates map correctly (cell -1 lives in chunk -1, not chunk 0).
    pub const fn chunk(self) -> ChunkCoord {
        ChunkCoord {
            x: self.x.div_euclid(CHUNK_SIZE),
            y: self.y.div_euclid(CHUNK_SIZE),
        }
    }

    /// Iterate over the 8 Moore neighbors of this cell.
    pub fn neighbors(self) -> impl Iterator<Item = CellCoord> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| CellCoord::new(self.x + dx, self.y + dy))
    }
}

/// A chunk position in block space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChunkCoord {
    pub x: i64,
    pub y: i64,
}

impl ChunkCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell coordinate of this chunk's top-left corner.
    pub const fn origin(self) -> CellCoord {
        CellCoord {
            x: self.x * CHUNK_SIZE,
            y: self.y * CHUNK_SIZE,
        }
    }
}

/// An axis-aligned rectangle in cell space, bounds inclusive.
///
/// Used for the active simulation window and for chunk-generation regions.
/// A rect with `max` below `min` on either axis is empty and contains no
/// cells; this is the degenerate case a zero-sized viewport produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellRect {
    pub min: CellCoord,
    pub max: CellCoord,
}

impl CellRect {
    pub const fn new(min: CellCoord, max: CellCoord) -> Self {
        Self { min, max }
    }

    pub const fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Grow the rect outward by `margin` cells on every side.
    pub const fn expand(&self, margin: i64) -> Self {
        Self {
            min: CellCoord::new(self.min.x - margin, self.min.y - margin),
            max: CellCoord::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
