//! # Result Viewer
//!
//! The last captured outcome of a panel, rendered verbatim as pretty-printed
//! JSON. Success bodies and error descriptors share the same slot and the
//! same formatting; only the `error` key tells them apart.

use std::fmt;

use serde_json::Value;

use crate::errors::SubmitError;

/// Text shown before any submission
pub const PLACEHOLDER: &str = "—";

/// Last outcome of a panel's submissions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    /// Nothing submitted yet
    #[default]
    Placeholder,
    /// Decoded response body, whatever its HTTP status
    Body(Value),
    /// Transport or decode failure
    Error(SubmitError),
}

impl Outcome {
    /// Whether the last attempt failed
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// The JSON shown in the viewer, if any
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Outcome::Placeholder => None,
            Outcome::Body(body) => Some(body.clone()),
            Outcome::Error(error) => Some(error.to_descriptor()),
        }
    }

    /// Viewer text: 2-space indented JSON, or the placeholder
    pub fn render(&self) -> String {
        match self.to_json() {
            None => PLACEHOLDER.to_string(),
            Some(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
