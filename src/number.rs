//! Reading and writing the decimal strings stored in metric attributes.
use crate::error::{Error, Result};

/// How rewritten values are written back into the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest decimal which round-trips, fractions kept.
    #[default]
    Exact,
    /// Rounded half-up to an integer, as font compilers do when storing
    /// metrics.
    Rounded,
}

/// Parse an attribute value as a finite number.
pub fn parse_number(element: &str, attribute: &str, value: Option<&str>) -> Result<f64> {
    let text = value.ok_or_else(|| Error::invalid_metric(element, attribute, None))?;
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::invalid_metric(element, attribute, Some(text))),
    }
}

/// Write a number the way it should appear in an attribute.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    let value = match format {
        NumberFormat::Exact => value,
        NumberFormat::Rounded => (value + 0.5).floor(),
    };
    // Avoid writing "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
