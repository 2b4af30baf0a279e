//! Category chart geometry shared by the CLI and the TUI.
//!
//! Bars are proportional to each category's share of the catalog, the
//! same proportions a pie chart would use.

use toolshelf_shared::filter::CategoryCount;

/// Segment colors, assigned to categories in order and reused cyclically
pub const PALETTE: [(u8, u8, u8); 10] = [
    (0x00, 0x88, 0xFE),
    (0x00, 0xC4, 0x9F),
    (0xFF, 0xBB, 0x28),
    (0xFF, 0x80, 0x42),
    (0x84, 0x5E, 0xC2),
    (0xD6, 0x5D, 0xB1),
    (0xFF, 0x6F, 0x91),
    (0xFF, 0x96, 0x71),
    (0xFF, 0xC7, 0x5F),
    (0xF9, 0xF8, 0x71),
];

/// One rendered chart segment
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub name: String,
    pub count: usize,
    pub percent: f64,
    /// Bar length in cells
    pub bar: usize,
    pub color: (u8, u8, u8),
}

/// Lay out `counts` as bars at most `width` cells long
pub fn chart_rows(counts: &[CategoryCount], width: usize) -> Vec<ChartRow> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let share = c.count as f64 / total as f64;
            let bar = ((share * width as f64).round() as usize).max(1).min(width);
            ChartRow {
                name: c.name.clone(),
                count: c.count,
                percent: share * 100.0,
                bar,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}
