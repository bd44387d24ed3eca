//! The access-control outcome for a resource request

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS class the presentation layer attaches to the rendered message
///
/// The sample application's pages locate their output by these two class
/// names, so they are part of the contract rather than a styling detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssClass {
    /// Successful request ("message")
    Message,
    /// Denied request ("error")
    Error,
}

impl CssClass {
    /// The literal class attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            CssClass::Message => "message",
            CssClass::Error => "error",
        }
    }
}

impl fmt::Display for CssClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating a resource request
///
/// Computed fresh per request and never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the resource may be rendered
    pub granted: bool,

    /// Message text shown to the caller
    pub display_message: String,

    /// Class the message is rendered under
    pub css_class: CssClass,
}

impl Decision {
    /// A granted decision with the given message
    pub fn granted(message: impl Into<String>) -> Self {
        Self { granted: true, display_message: message.into(), css_class: CssClass::Message }
    }

    /// A denied decision with the given message
    pub fn denied(message: impl Into<String>) -> Self {
        Self { granted: false, display_message: message.into(), css_class: CssClass::Error }
    }
}
