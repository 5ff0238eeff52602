use crate::error::{Error, Result};
use crate::metrics::units_per_em;
use crate::node::{Element, Node, Tree};
use crate::number::NumberFormat;
use crate::rules::{Rule, Spacing};

/// Options for a spacing run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpacingOptions {
    /// Amount of space to add to each glyph, in ems.
    pub letter_spacing: f64,
    pub number_format: NumberFormat,
}

impl SpacingOptions {
    pub fn new(letter_spacing: f64) -> Self {
        SpacingOptions {
            letter_spacing,
            ..Default::default()
        }
    }
}

/// Add `spacing_em` ems of letter-spacing to a decompiled font.
///
/// The input tree is not modified; a new tree of the same shape is returned
/// with the horizontal metrics adjusted.
pub fn transform(tree: &Tree, spacing_em: f64) -> Result<Tree> {
    transform_with(tree, &SpacingOptions::new(spacing_em))
}

/// As [`transform`], with control over how rewritten numbers are written.
pub fn transform_with(tree: &Tree, options: &SpacingOptions) -> Result<Tree> {
    if !options.letter_spacing.is_finite() {
        return Err(Error::InvalidSpacing(options.letter_spacing));
    }
    let upem = units_per_em(tree)?;
    let spacing = Spacing {
        units: options.letter_spacing * upem,
        format: options.number_format,
    };
    if !spacing.units.is_finite() {
        return Err(Error::InvalidSpacing(options.letter_spacing));
    }
    log::debug!(
        "Adding {}em = {} units of spacing",
        options.letter_spacing,
        spacing.units
    );
    Ok(Tree {
        declaration: tree.declaration.clone(),
        nodes: transform_nodes(&tree.nodes, None, &spacing)?,
    })
}

fn transform_nodes(nodes: &[Node], parent: Option<&str>, spacing: &Spacing) -> Result<Vec<Node>> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Element(element) => {
                Ok(Node::Element(transform_element(element, parent, spacing)?))
            }
            other => Ok(other.clone()),
        })
        .collect()
}

fn transform_element(element: &Element, parent: Option<&str>, spacing: &Spacing) -> Result<Element> {
    let rewritten = match Rule::lookup(&element.name, parent) {
        Some(rule) => rule.rewrite(element, spacing)?,
        None => None,
    };
    if rewritten.is_some() {
        log::trace!("Rewrote <{}> under {:?}", element.name, parent);
    }
    Ok(Element {
        name: element.name.clone(),
        attributes: rewritten.unwrap_or_else(|| element.attributes.clone()),
        children: transform_nodes(&element.children, Some(element.name.as_str()), spacing)?,
    })
}
