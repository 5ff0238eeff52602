//! Add letter-spacing to a font by rewriting its horizontal metrics.
//!
//! The font is handled in its TTX (XML) form: [`ttx::parse`] builds a
//! [`Tree`], [`transform`] returns a new tree with every glyph advance widened
//! and the `hhea` summaries adjusted to match, and [`ttx::to_string`] writes it
//! back out for the font compiler.
//!
//! ```
//! let xml = r#"<ttFont>
//!   <head><unitsPerEm value="1000"/></head>
//!   <hmtx><mtx name="A" width="500" lsb="50"/></hmtx>
//! </ttFont>"#;
//! let tree = spacedfont::ttx::parse(xml).unwrap();
//! let spaced = spacedfont::transform(&tree, 0.1).unwrap();
//! let out = spacedfont::ttx::to_string(&spaced).unwrap();
//! assert!(out.contains(r#"<mtx name="A" width="600" lsb="100"/>"#));
//! ```
mod error;
pub mod metrics;
pub mod node;
pub mod number;
pub mod path;
pub mod rules;
mod transform;
pub mod ttx;

pub use crate::error::{Error, Result};
pub use crate::metrics::units_per_em;
pub use crate::node::{Attributes, Declaration, Element, Node, Tree};
pub use crate::number::NumberFormat;
pub use crate::path::find_by_path;
pub use crate::transform::{transform, transform_with, SpacingOptions};
