use crate::domain::Pattern;
use macroquad::prelude::*;

const HEADER_HEIGHT: f32 = 22.0;
const ITEM_HEIGHT: f32 = 26.0;

enum Row {
    Header(&'static str),
    Item {
        index: usize,
        name: &'static str,
        period: Option<u32>,
    },
}

/// Pattern browser listing the library under its category headers.
/// Selection lives in the session; this widget only reports clicks.
pub struct PatternList {
    x: f32,
    y: f32,
    width: f32,
    rows: Vec<Row>,
}

impl PatternList {
    pub fn new(x: f32, y: f32, width: f32, patterns: &[Pattern]) -> Self {
        let mut rows = Vec::new();
        let mut last_category = None;
        for (index, pattern) in patterns.iter().enumerate() {
            if last_category != Some(pattern.category) {
                rows.push(Row::Header(pattern.category));
                last_category = Some(pattern.category);
            }
            rows.push(Row::Item {
                index,
                name: pattern.name,
                period: pattern.period,
            });
        }
        Self { x, y, width, rows }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Total height of the list
    pub fn height(&self) -> f32 {
        self.rows.iter().map(Self::row_height).sum()
    }

    fn row_height(row: &Row) -> f32 {
        match row {
            Row::Header(_) => HEADER_HEIGHT,
            Row::Item { .. } => ITEM_HEIGHT,
        }
    }

    fn item_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        let mut y = self.y;
        for row in &self.rows {
            let h = Self::row_height(row);
            if let Row::Item { index, .. } = row {
                if super::hit(mouse_pos, self.x, y, self.width, h) {
                    return Some(*index);
                }
            }
            y += h;
        }
        None
    }

    /// Handle clicks; returns the pattern index picked this frame
    pub fn update(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.item_at(mouse_pos)
        } else {
            None
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32), selected: Option<usize>) {
        let mut y = self.y;
        for row in &self.rows {
            let h = Self::row_height(row);
            match row {
                Row::Header(category) => {
                    draw_text(category, self.x, y + 16.0, 14.0, GRAY);
                }
                Row::Item {
                    index,
                    name,
                    period,
                } => {
                    let color = if super::hit(mouse_pos, self.x, y, self.width, h) {
                        Color::from_rgba(100, 149, 237, 255)
                    } else if selected == Some(*index) {
                        Color::from_rgba(50, 100, 150, 255)
                    } else {
                        Color::from_rgba(45, 45, 45, 255)
                    };

                    draw_rectangle(self.x, y, self.width, h - 2.0, color);
                    draw_rectangle_lines(
                        self.x,
                        y,
                        self.width,
                        h - 2.0,
                        1.0,
                        Color::from_rgba(80, 80, 80, 255),
                    );
                    draw_text(name, self.x + 8.0, y + 18.0, 16.0, WHITE);

                    if let Some(p) = period {
                        let tag = format!("p{}", p);
                        let size = measure_text(&tag, None, 12, 1.0);
                        draw_text(
                            &tag,
                            self.x + self.width - size.width - 8.0,
                            y + 18.0,
                            12.0,
                            GRAY,
                        );
                    }
                }
            }
            y += h;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_rows_group_by_category() {
        let patterns = presets::all_patterns();
        let list = PatternList::new(0.0, 0.0, 160.0, &patterns);
        let headers = list
            .rows
            .iter()
            .filter(|r| matches!(r, Row::Header(_)))
            .count();
        assert_eq!(headers, 3);
        assert_eq!(list.rows.len(), patterns.len() + 3);
    }

    #[test]
    fn test_height_counts_headers_and_items() {
        let patterns = presets::all_patterns();
        let list = PatternList::new(0.0, 0.0, 160.0, &patterns);
        let expected = 3.0 * HEADER_HEIGHT + patterns.len() as f32 * ITEM_HEIGHT;
        assert_eq!(list.height(), expected);
    }

    #[test]
    fn test_item_hit_skips_headers() {
        let patterns = presets::all_patterns();
        let list = PatternList::new(0.0, 0.0, 160.0, &patterns);
        // First row is a category header; the first item sits below it
        assert_eq!(list.item_at((5.0, HEADER_HEIGHT / 2.0)), None);
        assert_eq!(list.item_at((5.0, HEADER_HEIGHT + 1.0)), Some(0));
        assert_eq!(list.item_at((500.0, HEADER_HEIGHT + 1.0)), None);
    }
}
