//! Per-table arithmetic applied to metric attributes.
//!
//! The advance of every glyph grows by the full spacing. Bearings only grow by
//! half of it, since the extra space is split between both sides of a glyph.
use crate::error::{Error, Result};
use crate::node::{Attributes, Element};
use crate::number::{format_number, parse_number, NumberFormat};

/// Spacing already converted to design units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub units: f64,
    pub format: NumberFormat,
}

impl Spacing {
    pub fn new(units: f64) -> Self {
        Spacing {
            units,
            format: NumberFormat::default(),
        }
    }

    fn half(&self) -> f64 {
        self.units / 2.0
    }
}

/// The rewrites that exist, keyed on an element's name and its parent's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// `hmtx/mtx`: advance width and left side bearing of a glyph.
    HorizontalMetric,
    /// `hhea/advanceWidthMax`
    AdvanceWidthMax,
    /// `hhea/minLeftSideBearing` and `hhea/minRightSideBearing`
    MinSideBearing,
}

impl Rule {
    /// Find the rule for an element, if there is one.
    pub fn lookup(name: &str, parent: Option<&str>) -> Option<Rule> {
        match (name, parent) {
            ("mtx", _) => Some(Rule::HorizontalMetric),
            ("advanceWidthMax", Some("hhea")) => Some(Rule::AdvanceWidthMax),
            ("minLeftSideBearing", Some("hhea")) | ("minRightSideBearing", Some("hhea")) => {
                Some(Rule::MinSideBearing)
            }
            _ => None,
        }
    }

    /// Compute the rewritten attributes of `element`.
    ///
    /// Returns `None` when the rule leaves the element as it is. Glyphs with
    /// no advance (combining marks and the like) are never spaced, and `mtx`
    /// entries without a `width` (as in `vmtx`) are not horizontal metrics.
    pub fn rewrite(self, element: &Element, spacing: &Spacing) -> Result<Option<Attributes>> {
        match self {
            Rule::HorizontalMetric => {
                if element.attribute("width").is_none() {
                    return Ok(None);
                }
                let width = read(element, "width")?;
                if width == 0.0 {
                    return Ok(None);
                }
                let lsb = read(element, "lsb")?;
                let mut attributes = element.attributes.clone();
                write(element, &mut attributes, "width", width + spacing.units, spacing.format)?;
                write(element, &mut attributes, "lsb", lsb + spacing.half(), spacing.format)?;
                Ok(Some(attributes))
            }
            Rule::AdvanceWidthMax => adjust_value(element, spacing.units, spacing.format),
            Rule::MinSideBearing => adjust_value(element, spacing.half(), spacing.format),
        }
    }
}

fn read(element: &Element, attribute: &str) -> Result<f64> {
    parse_number(&element.name, attribute, element.attribute(attribute))
}

fn write(
    element: &Element,
    attributes: &mut Attributes,
    attribute: &str,
    value: f64,
    format: NumberFormat,
) -> Result<()> {
    let text = format_number(value, format);
    if !value.is_finite() {
        return Err(Error::invalid_metric(&element.name, attribute, Some(&text)));
    }
    attributes.insert(attribute.to_string(), text);
    Ok(())
}

fn adjust_value(element: &Element, delta: f64, format: NumberFormat) -> Result<Option<Attributes>> {
    let value = read(element, "value")?;
    let mut attributes = element.attributes.clone();
    write(element, &mut attributes, "value", value + delta, format)?;
    Ok(Some(attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mtx(width: &str, lsb: &str) -> Element {
        Element::new("mtx")
            .with_attribute("name", "A")
            .with_attribute("width", width)
            .with_attribute("lsb", lsb)
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Rule::lookup("mtx", Some("hmtx")), Some(Rule::HorizontalMetric));
        assert_eq!(Rule::lookup("mtx", None), Some(Rule::HorizontalMetric));
        assert_eq!(
            Rule::lookup("advanceWidthMax", Some("hhea")),
            Some(Rule::AdvanceWidthMax)
        );
        assert_eq!(
            Rule::lookup("minRightSideBearing", Some("hhea")),
            Some(Rule::MinSideBearing)
        );
        assert_eq!(Rule::lookup("advanceWidthMax", Some("vhea")), None);
        assert_eq!(Rule::lookup("minLeftSideBearing", None), None);
        assert_eq!(Rule::lookup("ascent", Some("hhea")), None);
    }

    #[test]
    fn test_mtx() {
        let attrs = Rule::HorizontalMetric
            .rewrite(&mtx("500", "50"), &Spacing::new(100.0))
            .unwrap()
            .unwrap();
        assert_eq!(attrs["width"], "600");
        assert_eq!(attrs["lsb"], "100");
        assert_eq!(attrs["name"], "A");
    }

    #[test]
    fn test_zero_width_untouched() {
        let result = Rule::HorizontalMetric
            .rewrite(&mtx("0", "-120"), &Spacing::new(100.0))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_negative_spacing() {
        let attrs = Rule::HorizontalMetric
            .rewrite(&mtx("500", "50"), &Spacing::new(-75.0))
            .unwrap()
            .unwrap();
        assert_eq!(attrs["width"], "425");
        assert_eq!(attrs["lsb"], "12.5");
    }

    #[test]
    fn test_rounded() {
        let spacing = Spacing {
            units: 75.0,
            format: NumberFormat::Rounded,
        };
        let attrs = Rule::HorizontalMetric
            .rewrite(&mtx("500", "50"), &spacing)
            .unwrap()
            .unwrap();
        assert_eq!(attrs["width"], "575");
        assert_eq!(attrs["lsb"], "88");
    }

    #[test]
    fn test_hhea_values() {
        let spacing = Spacing::new(100.0);
        let adv = Element::new("advanceWidthMax").with_attribute("value", "700");
        let attrs = Rule::AdvanceWidthMax.rewrite(&adv, &spacing).unwrap().unwrap();
        assert_eq!(attrs["value"], "800");
        let lsb = Element::new("minLeftSideBearing").with_attribute("value", "10");
        let attrs = Rule::MinSideBearing.rewrite(&lsb, &spacing).unwrap().unwrap();
        assert_eq!(attrs["value"], "60");
    }

    #[test]
    fn test_vertical_metrics_untouched() {
        let vmtx = Element::new("mtx")
            .with_attribute("name", "A")
            .with_attribute("height", "1000")
            .with_attribute("tsb", "100");
        let result = Rule::HorizontalMetric
            .rewrite(&vmtx, &Spacing::new(100.0))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_overflow_rejected() {
        let err = Rule::HorizontalMetric
            .rewrite(&mtx("1e308", "50"), &Spacing::new(1e308))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMetric { ref attribute, .. } if attribute == "width"));
        let adv = Element::new("advanceWidthMax").with_attribute("value", "1e308");
        assert!(matches!(
            Rule::AdvanceWidthMax.rewrite(&adv, &Spacing::new(1e308)),
            Err(Error::InvalidMetric { .. })
        ));
    }

    #[test]
    fn test_malformed() {
        let err = Rule::HorizontalMetric
            .rewrite(&mtx("wide", "50"), &Spacing::new(1.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMetric { ref attribute, .. } if attribute == "width"));
        let err = Rule::HorizontalMetric
            .rewrite(&mtx("500", ""), &Spacing::new(1.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMetric { ref attribute, .. } if attribute == "lsb"));
        let empty = Element::new("advanceWidthMax");
        assert!(Rule::AdvanceWidthMax.rewrite(&empty, &Spacing::new(1.0)).is_err());
    }
}
