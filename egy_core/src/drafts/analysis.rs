//! Market insight request (Analysis panel).
//!
//! Wire shape: `{ "topic": "...", "data": { "roas": 2.1, "ctr": 0.03 } }`

use serde::{Deserialize, Serialize};

use super::Draft;
use crate::api::Endpoint;
use crate::input::parse_decimal;

/// Topic a fresh Analysis panel starts with
pub const DEFAULT_TOPIC: &str = "August Performance";

/// Request for a market insight scored on ROAS and CTR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightRequest {
    /// What the insight is about
    pub topic: String,
    /// Scoring inputs
    pub data: InsightData,
}

/// Scoring inputs for an insight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightData {
    /// Return on ad spend
    pub roas: f64,
    /// Click-through rate (0.03 = 3%)
    pub ctr: f64,
}

impl Default for InsightData {
    fn default() -> Self {
        InsightData { roas: 2.1, ctr: 0.03 }
    }
}

impl Default for InsightRequest {
    fn default() -> Self {
        InsightRequest {
            topic: DEFAULT_TOPIC.to_string(),
            data: InsightData::default(),
        }
    }
}

/// Field edits for [`InsightRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum InsightEdit {
    Topic(String),
    Roas(String),
    Ctr(String),
}

impl InsightEdit {
    /// Wire name of the edited field
    pub fn field(&self) -> &'static str {
        match self {
            InsightEdit::Topic(_) => "topic",
            InsightEdit::Roas(_) => "roas",
            InsightEdit::Ctr(_) => "ctr",
        }
    }

    /// Raw text of a numeric edit
    pub fn numeric_input(&self) -> Option<&str> {
        match self {
            InsightEdit::Roas(raw) | InsightEdit::Ctr(raw) => Some(raw),
            InsightEdit::Topic(_) => None,
        }
    }
}

impl Draft for InsightRequest {
    type Edit = InsightEdit;

    const ENDPOINT: Endpoint = Endpoint::Insights;

    fn apply(&mut self, edit: InsightEdit) {
        match edit {
            InsightEdit::Topic(topic) => self.topic = topic,
            InsightEdit::Roas(raw) => self.data.roas = parse_decimal(&raw),
            InsightEdit::Ctr(raw) => self.data.ctr = parse_decimal(&raw),
        }
    }
}
