use super::coords::CellCoord;
use super::world::World;

/// A named cell pattern that can be stamped onto the world.
///
/// Points are relative coordinates with the bounding box anchored at the
/// origin. The period is informational only (shown in the browser, never
/// enforced by the engine).
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub category: &'static str,
    /// Oscillation/translation period, if the pattern has one.
    pub period: Option<u32>,
    pub points: Vec<(i64, i64)>,
    pub width: i64,
    pub height: i64,
}

impl Pattern {
    /// Create a pattern from its live points, deriving the bounding box.
    pub fn new(
        name: &'static str,
        category: &'static str,
        period: Option<u32>,
        points: Vec<(i64, i64)>,
    ) -> Self {
        let width = points.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = points.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            category,
            period,
            points,
            width,
            height,
        }
    }

    /// Offset subtracted from the anchor so the stamp lands centered on it:
    /// half the bounding box, floored.
    pub fn center(&self) -> (i64, i64) {
        (self.width / 2, self.height / 2)
    }

    /// Merge this pattern into the world around `anchor`. Only ever adds
    /// cells; live cells under the footprint stay live.
    pub fn stamp_onto(&self, world: &mut World, anchor: CellCoord) {
        let (cx, cy) = self.center();
        for &(px, py) in &self.points {
            world.set_alive(CellCoord::new(anchor.x + px - cx, anchor.y + py - cy), true);
        }
    }
}

/// The classic pattern library, grouped the way the browser lists it.
pub mod presets {
    use super::*;

    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still Lifes",
            None,
            vec![(0, 0), (1, 0), (0, 1), (1, 1)],
        )
    }

    pub fn bee_hive() -> Pattern {
        Pattern::new(
            "Bee-Hive",
            "Still Lifes",
            None,
            vec![(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillators",
            Some(2),
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillators",
            Some(2),
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillators",
            Some(2),
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
                (2, 2), (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceships",
            Some(4),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Spaceships",
            Some(4),
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// All patterns, in browser order (still lifes, oscillators, spaceships).
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            bee_hive(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellRect;
    use std::collections::HashSet;

    #[test]
    fn test_bounding_box_from_points() {
        let lwss = presets::lwss();
        assert_eq!(lwss.width, 5);
        assert_eq!(lwss.height, 4);
        assert_eq!(lwss.center(), (2, 2));

        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));
        assert_eq!(blinker.center(), (1, 0));
    }

    #[test]
    fn test_stamp_centers_on_anchor() {
        let mut world = World::new();
        presets::blinker().stamp_onto(&mut world, CellCoord::new(0, 0));

        assert!(world.is_alive(CellCoord::new(-1, 0)));
        assert!(world.is_alive(CellCoord::new(0, 0)));
        assert!(world.is_alive(CellCoord::new(1, 0)));
        assert_eq!(world.population(), 3);
    }

    #[test]
    fn test_stamp_never_clears_existing_cells() {
        let mut world = World::new();
        let bystander = CellCoord::new(0, 1);
        world.set_alive(bystander, true);
        // Overlaps the block footprint as well
        world.set_alive(CellCoord::new(0, 0), true);

        presets::block().stamp_onto(&mut world, CellCoord::new(0, 0));

        assert!(world.is_alive(bystander));
        assert!(world.is_alive(CellCoord::new(0, 0)));
        // Block centered at the origin covers (-1,-1)..(0,0); bystander makes 5
        assert_eq!(world.population(), 5);
    }

    #[test]
    fn test_stamped_glider_walks_diagonally() {
        let mut world = World::new();
        presets::glider().stamp_onto(&mut world, CellCoord::new(0, 0));
        let start: HashSet<_> = world.live_cells().collect();

        let window = CellRect::new(CellCoord::new(-20, -20), CellCoord::new(20, 20));
        for _ in 0..4 {
            world.step(window);
        }

        // One full period translates the glider by (+1, +1).
        let expected: HashSet<_> = start
            .iter()
            .map(|c| CellCoord::new(c.x + 1, c.y + 1))
            .collect();
        assert_eq!(world.live_cells().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_library_matches_browser_grouping() {
        let patterns = presets::all_patterns();
        assert_eq!(patterns.len(), 7);
        assert!(patterns.iter().any(|p| p.name == "Glider"));
        // Categories appear contiguously, in browser order
        let mut cats: Vec<_> = patterns.iter().map(|p| p.category).collect();
        cats.dedup();
        assert_eq!(cats, vec!["Still Lifes", "Oscillators", "Spaceships"]);
    }
}
