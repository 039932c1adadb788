//! # Validation Gate
//!
//! Pure predicates deciding whether a draft may be submitted. Nothing here is
//! cached; callers re-evaluate against the current draft after every edit.
//!
//! | Draft              | Rule                                         |
//! |--------------------|----------------------------------------------|
//! | `InsightRequest`   | always submittable                           |
//! | `CampaignDraft`    | `name` non-empty                             |
//! | `MetricEntry`      | always submittable                           |
//! | `TransactionDraft` | account and category selected, amount ≠ 0    |

use crate::drafts::{CampaignDraft, InsightRequest, MetricEntry, TransactionDraft};

/// Gate rule for a draft.
pub trait Submittable {
    /// Requirements not yet met, in field order. Empty when submittable.
    fn missing(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Whether the draft currently passes its gate
    fn is_submittable(&self) -> bool {
        self.missing().is_empty()
    }
}

impl Submittable for InsightRequest {}

impl Submittable for MetricEntry {}

impl Submittable for CampaignDraft {
    fn missing(&self) -> Vec<&'static str> {
        if self.name.is_empty() {
            vec!["campaign name"]
        } else {
            Vec::new()
        }
    }
}

impl Submittable for TransactionDraft {
    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account.is_none() {
            missing.push("account");
        }
        if self.amount == 0.0 {
            missing.push("non-zero amount");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        missing
    }
}

/// Submit control state: enabled only when idle and the gate passes.
pub fn can_submit<D: Submittable + ?Sized>(draft: &D, busy: bool) -> bool {
    !busy && draft.is_submittable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::{Account, Category, Draft, TransactionEdit};

    fn transaction(
        account: Option<Account>,
        category: Option<Category>,
        amount: f64,
    ) -> TransactionDraft {
        TransactionDraft {
            account,
            category,
            amount,
            ..TransactionDraft::default()
        }
    }

    #[test]
    fn test_ungated_drafts() {
        assert!(InsightRequest::default().is_submittable());
        assert!(MetricEntry::default().is_submittable());
    }

    #[test]
    fn test_campaign_requires_name() {
        let mut draft = CampaignDraft::default();
        assert!(!draft.is_submittable());
        assert_eq!(draft.missing(), vec!["campaign name"]);

        draft.name = "Q4 Push".to_string();
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_transaction_gate() {
        assert!(transaction(Some(Account::Bank), Some(Category::Rent), 500.0).is_submittable());
        assert!(transaction(Some(Account::Bank), Some(Category::Rent), -20.0).is_submittable());
        assert!(!transaction(None, Some(Category::Rent), 500.0).is_submittable());
        assert!(!transaction(Some(Account::Bank), None, 500.0).is_submittable());
        assert!(!transaction(Some(Account::Bank), Some(Category::Rent), 0.0).is_submittable());
    }

    #[test]
    fn test_transaction_missing_lists_everything() {
        assert_eq!(
            TransactionDraft::default().missing(),
            vec!["account", "non-zero amount", "category"]
        );
    }

    #[test]
    fn test_gate_follows_latest_edit() {
        let mut draft = transaction(Some(Account::Cash), Some(Category::Meals), 12.0);
        assert!(draft.is_submittable());

        draft.apply(TransactionEdit::Amount("abc".to_string()));
        assert!(!draft.is_submittable());

        draft.apply(TransactionEdit::Amount("12".to_string()));
        assert!(draft.is_submittable());

        draft.apply(TransactionEdit::Account(None));
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_can_submit_respects_busy() {
        let draft = InsightRequest::default();
        assert!(can_submit(&draft, false));
        assert!(!can_submit(&draft, true));
    }
}
