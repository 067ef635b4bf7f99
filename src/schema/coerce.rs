//! Cell coercion into the typed record fields.

use crate::reader::raw::RawCell;

/// Coerce a raw cell into a year
///
/// Integers pass through, integral floats are truncated, and text is trimmed
/// and parsed as an integer or an integral float (`"2020.0"`). Anything else,
/// including values outside the `i32` range, yields `None`.
#[must_use]
pub fn coerce_year(cell: &RawCell) -> Option<i32> {
    match cell {
        RawCell::Int(n) => i32::try_from(*n).ok(),
        RawCell::Float(x) => integral_float(*x),
        RawCell::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .and_then(|n| i32::try_from(n).ok())
                .or_else(|| s.parse::<f64>().ok().and_then(integral_float))
        }
        RawCell::Empty | RawCell::Bool(_) => None,
    }
}

fn integral_float(x: f64) -> Option<i32> {
    if x.is_finite() && x.fract() == 0.0 && x >= f64::from(i32::MIN) && x <= f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation)]
        Some(x as i32)
    } else {
        None
    }
}

/// Coerce a raw cell into a non-empty text label
///
/// Numeric cells are rendered as text. Blank results (after trimming, when
/// `trim` is set) yield `None`.
#[must_use]
pub fn coerce_label(cell: &RawCell, trim: bool) -> Option<String> {
    let text = cell.as_text()?;
    let text = if trim { text.trim().to_string() } else { text };
    if text.is_empty() { None } else { Some(text) }
}
