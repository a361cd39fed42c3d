//! Terminal rendering: box-drawing tables and the calendar grid.

mod calendar;
mod table;

pub use calendar::print_calendar;
pub use table::{Column, Table, BLUE, DIM};
