use std::str::Utf8Error;

use quick_xml::events::attributes::AttrError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find {path}")]
    StructureNotFound { path: String },

    #[error("Invalid {attribute} on <{element}>: {}", .value.as_deref().unwrap_or("missing"))]
    InvalidMetric {
        element: String,
        attribute: String,
        value: Option<String>,
    },

    #[error("Letter spacing must be a finite number, got {0}")]
    InvalidSpacing(f64),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Bad XML attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("Malformed TTX document: {0}")]
    MalformedDocument(String),
}

impl Error {
    pub(crate) fn invalid_metric(element: &str, attribute: &str, value: Option<&str>) -> Self {
        Error::InvalidMetric {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.map(|v| v.to_string()),
        }
    }
}
