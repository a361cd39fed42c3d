//! Project color helpers.

use anyhow::{bail, Result};
use rand::Rng;


/// Generate a random pastel project color as "#rrggbb".
///
/// Hue is drawn uniformly; saturation and value are fixed so colors stay
/// distinct but readable as cell backgrounds.
pub fn random_color(rng: &mut impl Rng) -> String {
    let hue: f64 = rng.gen();
    let (r, g, b) = hsv_to_rgb(hue, 0.5, 0.95);
    format!("#{r:02x}{g:02x}{b:02x}")
}


/// Parse a "#rrggbb" color string into its RGB components.
pub fn parse_hex(color: &str) -> Result<(u8, u8, u8)> {
    let hex = match color.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.is_ascii() => hex,
        _ => bail!("Invalid color \"{color}\", expected #rrggbb"),
    };
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| anyhow::anyhow!("Invalid color \"{color}\", expected #rrggbb"))
    };
    Ok((component(0..2)?, component(2..4)?, component(4..6)?))
}


/// Whether text on this background should be black rather than white.
pub fn is_light(r: u8, g: u8, b: u8) -> bool {
    let gray = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    gray >= 128.0
}


fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
