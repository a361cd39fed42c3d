//! Calendar grid rendering.
//!
//! Occupied cells are painted with the project color as background; the
//! label text is black or white depending on the background luminance.
//! Rows have no separators, so consecutive cells of one session read as a
//! single block.

use crate::aggregation::{CalendarGrid, Cell, DAY_LABELS};
use crate::util::{is_light, parse_hex};


const MIN_DAY_WIDTH: usize = 5;
const TIME_WIDTH: usize = 5; // HH:MM


/// Print the weekly grid: a time column plus one column per weekday.
pub fn print_calendar(grid: &CalendarGrid) {
    let widths = column_widths(grid);

    println!("{}", border(&widths, "┌", "┬", "┐"));

    let mut header = vec![format!(" {:<5} ", "Time")];
    for (label, width) in DAY_LABELS.iter().zip(&widths) {
        header.push(format!(" {} ", center(label, *width)));
    }
    println!("│{}│", header.join("│"));
    println!("{}", border(&widths, "├", "┼", "┤"));

    for ((start, _), row) in grid.intervals.iter().zip(&grid.rows) {
        let mut cells = vec![format!(" {} ", start.format("%H:%M"))];
        for (cell, width) in row.iter().zip(&widths) {
            cells.push(paint(cell, *width + 2));
        }
        println!("│{}│", cells.join("│"));
    }

    println!("{}", border(&widths, "└", "┴", "┘"));
}


/// Each day column is as wide as its widest label, at least MIN_DAY_WIDTH.
fn column_widths(grid: &CalendarGrid) -> [usize; 7] {
    let mut widths = [MIN_DAY_WIDTH; 7];
    for row in &grid.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            if let Some(label) = &cell.label {
                *width = (*width).max(label.chars().count());
            }
        }
    }
    widths
}


/// Render one cell, background-painted when occupied. `width` includes the
/// one-space padding on each side so the paint covers the whole cell.
fn paint(cell: &Cell, width: usize) -> String {
    let Some(color) = &cell.color else {
        return " ".repeat(width);
    };

    let (r, g, b) = parse_hex(color).unwrap_or((128, 128, 128));
    let fg = if is_light(r, g, b) { 30 } else { 37 };
    let label = cell.label.as_deref().unwrap_or("");
    format!(
        "\x1b[48;2;{r};{g};{b}m\x1b[{fg}m{}\x1b[0m",
        center(label, width)
    )
}


fn center(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.chars().count());
    let left = gap / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
}


fn border(widths: &[usize; 7], left: &str, mid: &str, right: &str) -> String {
    let mut parts = vec!["─".repeat(TIME_WIDTH + 2)];
    parts.extend(widths.iter().map(|w| "─".repeat(w + 2)));
    format!("{left}{}{right}", parts.join(mid))
}
