//! Preview geometry for a panel list.
//!
//! A panel list is classified into one [`LayoutVariant`] by its length and
//! the split directions of panels 1 and 2. Each variant maps to a
//! [`GridLayout`]: a grid of named areas plus row and column size fractions,
//! the same information a CSS grid template carries.
//!
//! ```text
//!  Pair (vertical)     ColumnThenStack      RowThenSplit        Grid (5)
//! +-----+-----+        +-----+-----+        +-----------+       +---+---+---+
//! |  1  |  2  |        |  1  |  2  |        |     1     |       | 1 | 2 | 3 |
//! |     |     |        |     +-----+        +-----+-----+       +---+---+---+
//! |     |     |        |     |  3  |        |  2  |  3  |       | 4 | 5 |   |
//! +-----+-----+        +-----+-----+        +-----+-----+       +---+---+---+
//! ```
//!
//! Layout performs no validation and assumes the list already passed
//! [`crate::validate::validate`].

use crate::panel::{DEFAULT_SPLIT_SIZE, Panel, Split};
use std::fmt;

/// Default size of a stacked row when panels 1 and 2 both split horizontally.
pub const STACKED_ROW_SIZE: f64 = 0.33;

/// Smallest row fraction panel 0 keeps in the three-row layout.
pub const MIN_FRACTION: f64 = 0.05;

/// Share of the width pinned to panel 0 in the three-column layout.
pub const ANCHOR_COLUMN_SHARE: f64 = 0.5;

/// The closed set of preview arrangements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutVariant {
    /// One panel filling the whole area.
    Single,
    /// Two panels; `size` is panel 1's share.
    Pair { split: Split, size: f64 },
    /// Three side-by-side columns. Panel 0 keeps half the width and panels
    /// 1 and 2 share the rest in proportion to their sizes.
    ThreeColumns { first: f64, second: f64 },
    /// Panel 0 as a full-height left column; panels 1 and 2 stacked on the right.
    ColumnThenStack { column: f64, row: f64 },
    /// Three stacked rows.
    ThreeRows { first: f64, second: f64 },
    /// Panel 0 as a full-width top row; panels 1 and 2 side by side below.
    RowThenSplit { row: f64, column: f64 },
    /// Equal columns in one row, used when a three-panel list lacks a split.
    Strip { count: usize },
    /// Regular row-major grid for four or more panels.
    Grid { count: usize },
}

impl LayoutVariant {
    /// Pick the variant for a panel list. `None` for an empty list.
    pub fn classify(panels: &[Panel]) -> Option<Self> {
        let size_or = |panel: &Panel, default: f64| panel.size.unwrap_or(default);

        let variant = match panels {
            [] => return None,
            [_] => LayoutVariant::Single,
            [_, p1] => LayoutVariant::Pair {
                split: p1.split.unwrap_or(Split::Vertical),
                size: size_or(p1, DEFAULT_SPLIT_SIZE),
            },
            [_, p1, p2] => match (p1.split, p2.split) {
                (Some(Split::Vertical), Some(Split::Vertical)) => LayoutVariant::ThreeColumns {
                    first: size_or(p1, DEFAULT_SPLIT_SIZE),
                    second: size_or(p2, DEFAULT_SPLIT_SIZE),
                },
                (Some(Split::Vertical), Some(Split::Horizontal)) => {
                    LayoutVariant::ColumnThenStack {
                        column: size_or(p1, DEFAULT_SPLIT_SIZE),
                        row: size_or(p2, DEFAULT_SPLIT_SIZE),
                    }
                }
                (Some(Split::Horizontal), Some(Split::Horizontal)) => LayoutVariant::ThreeRows {
                    first: size_or(p1, STACKED_ROW_SIZE),
                    second: size_or(p2, STACKED_ROW_SIZE),
                },
                (Some(Split::Horizontal), Some(Split::Vertical)) => LayoutVariant::RowThenSplit {
                    row: size_or(p1, DEFAULT_SPLIT_SIZE),
                    column: size_or(p2, DEFAULT_SPLIT_SIZE),
                },
                _ => LayoutVariant::Strip { count: 3 },
            },
            _ => LayoutVariant::Grid {
                count: panels.len(),
            },
        };

        Some(variant)
    }

    /// Compute the grid for this variant.
    pub fn geometry(&self) -> GridLayout {
        match *self {
            LayoutVariant::Single => GridLayout {
                areas: vec![vec![Some(0)]],
                rows: vec![1.0],
                columns: vec![1.0],
            },
            LayoutVariant::Pair {
                split: Split::Horizontal,
                size,
            } => GridLayout {
                areas: vec![vec![Some(0)], vec![Some(1)]],
                rows: vec![1.0 - size, size],
                columns: vec![1.0],
            },
            LayoutVariant::Pair {
                split: Split::Vertical,
                size,
            } => GridLayout {
                areas: vec![vec![Some(0), Some(1)]],
                rows: vec![1.0],
                columns: vec![1.0 - size, size],
            },
            LayoutVariant::ThreeColumns { first, second } => {
                let remaining = 1.0 - ANCHOR_COLUMN_SHARE;
                let total = first + second;
                let (a, b) = if total > 0.0 {
                    (remaining * first / total, remaining * second / total)
                } else {
                    (remaining / 2.0, remaining / 2.0)
                };
                GridLayout {
                    areas: vec![vec![Some(0), Some(1), Some(2)]],
                    rows: vec![1.0],
                    columns: vec![ANCHOR_COLUMN_SHARE, a, b],
                }
            }
            LayoutVariant::ColumnThenStack { column, row } => GridLayout {
                areas: vec![vec![Some(0), Some(1)], vec![Some(0), Some(2)]],
                rows: vec![1.0 - row, row],
                columns: vec![1.0 - column, column],
            },
            LayoutVariant::ThreeRows { first, second } => GridLayout {
                areas: vec![vec![Some(0)], vec![Some(1)], vec![Some(2)]],
                rows: vec![(1.0 - first - second).max(MIN_FRACTION), first, second],
                columns: vec![1.0],
            },
            LayoutVariant::RowThenSplit { row, column } => GridLayout {
                areas: vec![vec![Some(0), Some(0)], vec![Some(1), Some(2)]],
                rows: vec![1.0 - row, row],
                columns: vec![1.0 - column, column],
            },
            LayoutVariant::Strip { count } => GridLayout {
                areas: vec![(0..count).map(Some).collect()],
                rows: vec![1.0],
                columns: vec![1.0 / count as f64; count],
            },
            LayoutVariant::Grid { count } => {
                let columns = grid_columns(count);
                let rows = count.div_ceil(columns);
                let areas = (0..rows)
                    .map(|r| {
                        (0..columns)
                            .map(|c| {
                                let index = r * columns + c;
                                (index < count).then_some(index)
                            })
                            .collect()
                    })
                    .collect();
                GridLayout {
                    areas,
                    rows: vec![1.0 / rows as f64; rows],
                    columns: vec![1.0 / columns as f64; columns],
                }
            }
        }
    }
}

/// Smallest `c` with `c * c >= count`, i.e. `ceil(sqrt(count))`.
fn grid_columns(count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < count {
        columns += 1;
    }
    columns
}

/// Compute the preview grid for a panel list. `None` for an empty list.
pub fn compute_layout(panels: &[Panel]) -> Option<GridLayout> {
    LayoutVariant::classify(panels).map(|variant| variant.geometry())
}

/// Normalized placement of one panel; all values are fractions of the whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A grid of panel areas with row and column size fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Row-major cells; `Some(i)` is panel `i`, `None` an empty cell.
    pub areas: Vec<Vec<Option<usize>>>,
    /// Height fraction of each row.
    pub rows: Vec<f64>,
    /// Width fraction of each column.
    pub columns: Vec<f64>,
}

impl GridLayout {
    /// Number of distinct panels placed in the grid.
    pub fn panel_count(&self) -> usize {
        self.areas
            .iter()
            .flatten()
            .flatten()
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Row and column span `(r0, r1, c0, c1)` (inclusive) covered by a panel.
    fn span(&self, index: usize) -> Option<(usize, usize, usize, usize)> {
        let mut span: Option<(usize, usize, usize, usize)> = None;
        for (r, row) in self.areas.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell != Some(index) {
                    continue;
                }
                span = Some(match span {
                    None => (r, r, c, c),
                    Some((r0, r1, c0, c1)) => (r0.min(r), r1.max(r), c0.min(c), c1.max(c)),
                });
            }
        }
        span
    }

    /// Where a panel sits, as fractions of the full area.
    pub fn bounds(&self, index: usize) -> Option<Bounds> {
        let (r0, r1, c0, c1) = self.span(index)?;
        let row_total: f64 = self.rows.iter().sum();
        let col_total: f64 = self.columns.iter().sum();

        Some(Bounds {
            x: self.columns[..c0].iter().sum::<f64>() / col_total,
            y: self.rows[..r0].iter().sum::<f64>() / row_total,
            width: self.columns[c0..=c1].iter().sum::<f64>() / col_total,
            height: self.rows[r0..=r1].iter().sum::<f64>() / row_total,
        })
    }

    /// Draw the grid as ASCII art with each area labelled by its 1-based
    /// panel number.
    ///
    /// The drawing is at least `width` x `height` characters; it grows when
    /// a track is too thin to draw.
    pub fn render_text(&self, width: usize, height: usize) -> String {
        let xs = track_edges(&self.columns, width);
        let ys = track_edges(&self.rows, height);
        let canvas_w = xs.last().map_or(1, |x| x + 1);
        let canvas_h = ys.last().map_or(1, |y| y + 1);
        let mut canvas = vec![vec![' '; canvas_w]; canvas_h];

        let rects: Vec<(usize, usize, usize, usize, usize)> = (0..self.panel_count())
            .filter_map(|i| {
                self.span(i)
                    .map(|(r0, r1, c0, c1)| (i, xs[c0], xs[c1 + 1], ys[r0], ys[r1 + 1]))
            })
            .collect();

        for &(_, x0, x1, y0, y1) in &rects {
            for x in x0..=x1 {
                canvas[y0][x] = '-';
                canvas[y1][x] = '-';
            }
            for row in canvas.iter_mut().take(y1 + 1).skip(y0) {
                row[x0] = '|';
                row[x1] = '|';
            }
        }

        for &(i, x0, x1, y0, y1) in &rects {
            for (x, y) in [(x0, y0), (x1, y0), (x0, y1), (x1, y1)] {
                canvas[y][x] = '+';
            }
            let label: Vec<char> = (i + 1).to_string().chars().collect();
            let inner = x1 - x0 - 1;
            if y1 > y0 + 1 && inner >= label.len() {
                let start = x0 + 1 + (inner - label.len()) / 2;
                let y = y0 + (y1 - y0) / 2;
                for (k, ch) in label.into_iter().enumerate() {
                    canvas[y][start + k] = ch;
                }
            }
        }

        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Character positions of the track boundaries, scaled to `length`.
///
/// Each track is at least two characters wide so its borders never merge.
fn track_edges(fractions: &[f64], length: usize) -> Vec<usize> {
    let total: f64 = fractions.iter().sum();
    let span = length.saturating_sub(1).max(1) as f64;
    let mut edges = Vec::with_capacity(fractions.len() + 1);
    edges.push(0);

    let mut acc = 0.0;
    for fraction in fractions {
        acc += fraction;
        let scaled = if total > 0.0 {
            (acc / total * span).round() as usize
        } else {
            0
        };
        let prev = edges.last().copied().unwrap_or(0);
        edges.push(scaled.max(prev + 2));
    }

    edges
}

impl fmt::Display for GridLayout {
    /// Formats the grid as CSS `grid-template-*` declarations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let areas: Vec<String> = self
            .areas
            .iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(i) => format!("panel{}", i),
                        None => ".".to_string(),
                    })
                    .collect();
                format!("\"{}\"", cells.join(" "))
            })
            .collect();
        let track = |fractions: &[f64]| {
            fractions
                .iter()
                .map(|fr| format!("{}fr", fr))
                .collect::<Vec<_>>()
                .join(" ")
        };

        writeln!(f, "grid-template-areas: {};", areas.join(" "))?;
        writeln!(f, "grid-template-rows: {};", track(&self.rows))?;
        write!(f, "grid-template-columns: {};", track(&self.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn panels(splits: &[(Split, Option<f64>)]) -> Vec<Panel> {
        let mut list = vec![Panel::anchor("P0", r"C:\", "#fff", "PowerShell")];
        for (i, (split, size)) in splits.iter().enumerate() {
            let mut p = Panel::anchor(&format!("P{}", i + 1), r"C:\", "#fff", "PowerShell");
            p.split = Some(*split);
            p.size = *size;
            list.push(p);
        }
        list
    }

    fn assert_fractions(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(compute_layout(&[]), None);
    }

    #[test]
    fn test_single() {
        let grid = compute_layout(&panels(&[])).unwrap();
        assert_eq!(grid.areas, vec![vec![Some(0)]]);
        assert_fractions(&grid.rows, &[1.0]);
        assert_fractions(&grid.columns, &[1.0]);
    }

    #[test]
    fn test_pair_vertical() {
        let grid = compute_layout(&panels(&[(Split::Vertical, Some(0.3))])).unwrap();
        assert_eq!(grid.areas, vec![vec![Some(0), Some(1)]]);
        assert_fractions(&grid.columns, &[0.7, 0.3]);
        assert_fractions(&grid.rows, &[1.0]);
    }

    #[test]
    fn test_pair_horizontal_default_size() {
        let grid = compute_layout(&panels(&[(Split::Horizontal, None)])).unwrap();
        assert_eq!(grid.areas, vec![vec![Some(0)], vec![Some(1)]]);
        assert_fractions(&grid.rows, &[0.5, 0.5]);
    }

    #[test]
    fn test_three_columns_proportional() {
        let grid = compute_layout(&panels(&[
            (Split::Vertical, Some(0.6)),
            (Split::Vertical, Some(0.4)),
        ]))
        .unwrap();
        assert_eq!(grid.areas, vec![vec![Some(0), Some(1), Some(2)]]);
        assert_eq!(grid.columns[0], 0.5);
        assert_fractions(&grid.columns, &[0.5, 0.3, 0.2]);
    }

    #[test]
    fn test_column_then_stack() {
        let grid = compute_layout(&panels(&[
            (Split::Vertical, Some(0.4)),
            (Split::Horizontal, Some(0.3)),
        ]))
        .unwrap();
        assert_eq!(
            grid.areas,
            vec![vec![Some(0), Some(1)], vec![Some(0), Some(2)]]
        );
        assert_fractions(&grid.columns, &[0.6, 0.4]);
        assert_fractions(&grid.rows, &[0.7, 0.3]);
    }

    #[test]
    fn test_three_rows_and_clamp() {
        let grid = compute_layout(&panels(&[
            (Split::Horizontal, Some(0.2)),
            (Split::Horizontal, Some(0.3)),
        ]))
        .unwrap();
        assert_fractions(&grid.rows, &[0.5, 0.2, 0.3]);

        let grid = compute_layout(&panels(&[
            (Split::Horizontal, Some(0.9)),
            (Split::Horizontal, Some(0.9)),
        ]))
        .unwrap();
        assert_fractions(&grid.rows, &[MIN_FRACTION, 0.9, 0.9]);

        let grid = compute_layout(&panels(&[(Split::Horizontal, None), (Split::Horizontal, None)]))
            .unwrap();
        assert_fractions(&grid.rows, &[0.34, 0.33, 0.33]);
    }

    #[test]
    fn test_row_then_split() {
        let grid = compute_layout(&panels(&[
            (Split::Horizontal, Some(0.6)),
            (Split::Vertical, Some(0.5)),
        ]))
        .unwrap();
        assert_eq!(
            grid.areas,
            vec![vec![Some(0), Some(0)], vec![Some(1), Some(2)]]
        );
        assert_fractions(&grid.rows, &[0.4, 0.6]);
        assert_fractions(&grid.columns, &[0.5, 0.5]);
    }

    #[test]
    fn test_strip_when_split_missing() {
        let mut list = panels(&[(Split::Vertical, None), (Split::Vertical, None)]);
        list[2].split = None;
        assert_eq!(
            LayoutVariant::classify(&list),
            Some(LayoutVariant::Strip { count: 3 })
        );
        let grid = compute_layout(&list).unwrap();
        assert_fractions(&grid.columns, &[1.0 / 3.0; 3]);
    }

    #[test]
    fn test_grid_fallback_ignores_sizes() {
        let grid = compute_layout(&panels(&[
            (Split::Horizontal, Some(0.9)),
            (Split::Vertical, Some(0.1)),
            (Split::Vertical, Some(0.2)),
            (Split::Horizontal, Some(0.7)),
        ]))
        .unwrap();
        assert_eq!(
            grid.areas,
            vec![
                vec![Some(0), Some(1), Some(2)],
                vec![Some(3), Some(4), None]
            ]
        );
        assert_fractions(&grid.rows, &[0.5, 0.5]);
        assert_fractions(&grid.columns, &[1.0 / 3.0; 3]);
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(grid_columns(4), 2);
        assert_eq!(grid_columns(5), 3);
        assert_eq!(grid_columns(6), 3);
        assert_eq!(grid_columns(9), 3);
        assert_eq!(grid_columns(10), 4);
    }

    #[test]
    fn test_bounds() {
        let grid = compute_layout(&panels(&[
            (Split::Horizontal, Some(0.25)),
            (Split::Vertical, Some(0.5)),
        ]))
        .unwrap();
        let top = grid.bounds(0).unwrap();
        assert!((top.width - 1.0).abs() < EPS);
        assert!((top.height - 0.75).abs() < EPS);
        let right = grid.bounds(2).unwrap();
        assert!((right.x - 0.5).abs() < EPS);
        assert!((right.y - 0.75).abs() < EPS);
        assert_eq!(grid.bounds(3), None);
    }

    #[test]
    fn test_display_css() {
        let grid = compute_layout(&panels(&[(Split::Vertical, Some(0.3))])).unwrap();
        assert_eq!(
            grid.to_string(),
            "grid-template-areas: \"panel0 panel1\";\n\
             grid-template-rows: 1fr;\n\
             grid-template-columns: 0.7fr 0.3fr;"
        );
    }

    #[test]
    fn test_render_text_pair() {
        let grid = compute_layout(&panels(&[(Split::Vertical, Some(0.5))])).unwrap();
        let expected = "\
+----+----+
|    |    |
| 1  | 2  |
|    |    |
+----+----+";
        assert_eq!(grid.render_text(11, 5), expected);
    }

    #[test]
    fn test_render_text_grows_thin_tracks() {
        let grid = compute_layout(&panels(&[
            (Split::Horizontal, Some(0.9)),
            (Split::Horizontal, Some(0.9)),
        ]))
        .unwrap();
        let text = grid.render_text(10, 4);
        assert!(text.lines().count() >= 4);
        assert!(text.contains('1') && text.contains('2') && text.contains('3'));
    }
}
