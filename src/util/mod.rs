//! Shared time and color helpers.

mod color;
mod time;

pub use color::{is_light, parse_hex, random_color};
pub use time::{format_duration, is_same_iso_week, resolve_time, round_to_half_hour};
