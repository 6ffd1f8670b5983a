//! Plain-text rendering and coordinate parsing for the terminal front end.

use core::fmt::Write;

use crate::common::Coord;
use crate::config::GRID_SIZE;
use crate::grid::{Cell, Grid};

/// Format a cell as a column letter and 1-based row, e.g. `(2, 0)` -> `A3`.
pub fn coord_to_string((r, c): Coord) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A1`-style input (case-insensitive). Returns `None` for anything
/// off the grid.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    let cell = (row - 1, col);
    Grid::in_bounds(cell.0, cell.1).then_some(cell)
}

/// Render a grid with column letters and row numbers. With `reveal` unset,
/// intact ship cells are drawn as water.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let ch = match grid.get(r, c).unwrap_or_default() {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::Ship if reveal => 'S',
                Cell::Ship | Cell::Empty => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}
