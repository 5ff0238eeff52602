use crate::error::{Error, Result};
use crate::node::Tree;
use crate::number::parse_number;
use crate::path::find_by_path;

/// Where the font's design-unit size is declared.
pub const UNITS_PER_EM_PATH: [&str; 3] = ["ttFont", "head", "unitsPerEm"];

/// Read the font's unitsPerEm from the `head` table.
pub fn units_per_em(tree: &Tree) -> Result<f64> {
    let element = find_by_path(tree, &UNITS_PER_EM_PATH)?;
    let value = element.attribute("value");
    let upem = parse_number(&element.name, "value", value)?;
    if upem <= 0.0 {
        return Err(Error::invalid_metric(&element.name, "value", value));
    }
    log::debug!("unitsPerEm = {}", upem);
    Ok(upem)
}
