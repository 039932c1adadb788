//! # Draft Store
//!
//! In-progress records for the three panels. Each draft is a plain value owned
//! by its panel; fields change only through the draft's `…Edit` enum, one
//! field per edit, so merging never overwrites the whole record.
//!
//! ## Drafts
//!
//! - [`InsightRequest`] - Analysis panel
//! - [`CampaignDraft`] and [`MetricEntry`] - Marketing panel
//! - [`TransactionDraft`] - Accounting panel
//!
//! ## Example
//!
//! ```rust
//! use egy_core::drafts::{Account, Category, Draft, TransactionDraft, TransactionEdit};
//!
//! let mut draft = TransactionDraft::default();
//! draft.merge([
//!     TransactionEdit::Account(Some(Account::Bank)),
//!     TransactionEdit::Category(Some(Category::Rent)),
//!     TransactionEdit::Amount("500".to_string()),
//! ]);
//!
//! assert_eq!(draft.amount, 500.0);
//! assert_eq!(draft.counterparty, "");
//! ```

pub mod accounting;
pub mod analysis;
pub mod marketing;

pub use accounting::{
    Account, Category, Currency, TransactionDraft, TransactionEdit, TransactionType,
};
pub use analysis::{InsightData, InsightEdit, InsightRequest};
pub use marketing::{CampaignDraft, CampaignEdit, MetricEdit, MetricEntry, Objective, Platform};

use serde::Serialize;

use crate::api::Endpoint;
use crate::validation::Submittable;
use crate::workflow::ResetPolicy;

/// A record being prepared for submission.
pub trait Draft: Submittable + Serialize + Default + Clone + std::fmt::Debug {
    /// One field replacement, carrying raw user input
    type Edit;

    /// Where this draft is POSTed
    const ENDPOINT: Endpoint;

    /// What happens to the draft after a successful submission
    const RESET_POLICY: ResetPolicy = ResetPolicy::Never;

    /// Replace a single field, leaving every other field untouched.
    fn apply(&mut self, edit: Self::Edit);

    /// Replace one or more fields in order.
    fn merge<I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = Self::Edit>,
    {
        for edit in edits {
            self.apply(edit);
        }
    }
}

/// A closed set of options rendered as a drop-down.
///
/// `code` is the exact string sent over the wire.
pub trait Choice: Copy + PartialEq + std::fmt::Display + 'static {
    /// All options in display order
    const ALL: &'static [Self];

    /// Wire value (e.g. "LINK_CLICKS")
    fn code(&self) -> &'static str;

    /// Human-readable label (e.g. "Link Clicks")
    fn display_name(&self) -> &'static str;

    /// Look up an option by wire value, ignoring case and surrounding spaces
    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.code().eq_ignore_ascii_case(code))
    }
}

/// Current UTC date as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Helpers shared by the draft property tests
#[cfg(test)]
pub(crate) mod test_support {
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    /// Free-form input: mostly junk, sometimes a plausible number
    pub fn raw_input() -> impl Strategy<Value = String> {
        prop_oneof![
            "\\PC{0,12}",
            "-?[0-9]{1,6}(\\.[0-9]{1,3})?",
        ]
    }

    fn leaves(value: &Value, out: &mut Map<String, Value>) {
        if let Value::Object(map) = value {
            for (key, inner) in map {
                match inner {
                    Value::Object(_) => leaves(inner, out),
                    _ => {
                        out.insert(key.clone(), inner.clone());
                    }
                }
            }
        }
    }

    /// Leaf keys whose values differ between two serialized drafts.
    /// Nested objects are flattened, so `data.roas` reports as `roas`.
    pub fn changed_fields(before: &Value, after: &Value) -> Vec<String> {
        let (mut old, mut new) = (Map::new(), Map::new());
        leaves(before, &mut old);
        leaves(after, &mut new);
        old.keys()
            .chain(new.keys())
            .filter(|key| old.get(*key) != new.get(*key))
            .cloned()
            .collect()
    }
}

/// Serde adapter for optional choices that travel as `""` when unset.
pub(crate) mod blank {
    use serde::de::{DeserializeOwned, IntoDeserializer};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        T::deserialize(raw.as_str().into_deserializer()).map(Some)
    }
}
