//! Error types for the portfolio module
//!
//! Failures here are setup failures (content, template, mount point,
//! configuration). In-page interactions never fail: an unknown navigation
//! target or an unmatched scroll position is a silent no-op.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Embedded YAML content did not parse
    #[error("Failed to parse portfolio content: {0}")]
    Content(#[from] serde_yaml::Error),

    /// Content parsed but references something that does not exist
    #[error("Invalid portfolio content: {0}")]
    InvalidContent(String),

    #[error("Failed to render page template: {0}")]
    Template(#[from] mustache::Error),

    /// `window` or `document` is not available (not running in a browser)
    #[error("Browser environment unavailable: no {0}")]
    Environment(&'static str),

    #[error("Mount point #{0} not found")]
    MountPointMissing(String),

    #[error("Portfolio is already mounted")]
    AlreadyMounted,

    #[error("Portfolio is not mounted")]
    NotMounted,

    /// A web-sys call returned an exception
    #[error("DOM operation failed ({context}): {message}")]
    Dom { context: &'static str, message: String },

    #[error("Invalid page configuration: {0}")]
    Config(String),
}

impl PortfolioError {
    /// Build a mapper from a thrown JS value to a DOM error
    pub fn dom(context: &'static str) -> impl FnOnce(JsValue) -> PortfolioError {
        move |value| PortfolioError::Dom {
            context,
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
