//! Ad campaigns and campaign performance metrics (Marketing panel).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{today, Choice, Draft};
use crate::api::Endpoint;
use crate::input::{normalize_id, parse_count, parse_non_negative_decimal};

/// Advertising platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Meta,
    Google,
    Tiktok,
}

impl Choice for Platform {
    const ALL: &'static [Platform] = &[Platform::Meta, Platform::Google, Platform::Tiktok];

    fn code(&self) -> &'static str {
        match self {
            Platform::Meta => "meta",
            Platform::Google => "google",
            Platform::Tiktok => "tiktok",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Platform::Meta => "Meta (Facebook/Instagram)",
            Platform::Google => "Google Ads",
            Platform::Tiktok => "TikTok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Campaign objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Objective {
    #[default]
    LinkClicks,
    Conversions,
    Reach,
    BrandAwareness,
}

impl Choice for Objective {
    const ALL: &'static [Objective] = &[
        Objective::LinkClicks,
        Objective::Conversions,
        Objective::Reach,
        Objective::BrandAwareness,
    ];

    fn code(&self) -> &'static str {
        match self {
            Objective::LinkClicks => "LINK_CLICKS",
            Objective::Conversions => "CONVERSIONS",
            Objective::Reach => "REACH",
            Objective::BrandAwareness => "BRAND_AWARENESS",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Objective::LinkClicks => "Link Clicks",
            Objective::Conversions => "Conversions",
            Objective::Reach => "Reach",
            Objective::BrandAwareness => "Brand Awareness",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A new ad campaign.
///
/// Submit stays disabled until `name` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CampaignDraft {
    pub platform: Platform,
    pub name: String,
    pub objective: Objective,
    /// Daily budget, never negative
    pub budget_daily: f64,
    /// `YYYY-MM-DD` or empty
    pub start_date: String,
    /// `YYYY-MM-DD` or empty
    pub end_date: String,
}

/// Field edits for [`CampaignDraft`]
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignEdit {
    Platform(Platform),
    Name(String),
    Objective(Objective),
    BudgetDaily(String),
    StartDate(String),
    EndDate(String),
}

impl CampaignEdit {
    /// Wire name of the edited field
    pub fn field(&self) -> &'static str {
        match self {
            CampaignEdit::Platform(_) => "platform",
            CampaignEdit::Name(_) => "name",
            CampaignEdit::Objective(_) => "objective",
            CampaignEdit::BudgetDaily(_) => "budget_daily",
            CampaignEdit::StartDate(_) => "start_date",
            CampaignEdit::EndDate(_) => "end_date",
        }
    }

    /// Raw text of a numeric edit
    pub fn numeric_input(&self) -> Option<&str> {
        match self {
            CampaignEdit::BudgetDaily(raw) => Some(raw),
            _ => None,
        }
    }
}

impl Draft for CampaignDraft {
    type Edit = CampaignEdit;

    const ENDPOINT: Endpoint = Endpoint::Campaigns;

    fn apply(&mut self, edit: CampaignEdit) {
        match edit {
            CampaignEdit::Platform(platform) => self.platform = platform,
            CampaignEdit::Name(name) => self.name = name,
            CampaignEdit::Objective(objective) => self.objective = objective,
            CampaignEdit::BudgetDaily(raw) => self.budget_daily = parse_non_negative_decimal(&raw),
            CampaignEdit::StartDate(date) => self.start_date = date,
            CampaignEdit::EndDate(date) => self.end_date = date,
        }
    }
}

/// One day of performance numbers for a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricEntry {
    /// Digits only, or empty when the metric is not tied to a campaign
    pub campaign_id: String,
    /// `YYYY-MM-DD`, defaults to today
    pub date: String,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub conversions: u64,
    pub revenue: f64,
}

impl Default for MetricEntry {
    fn default() -> Self {
        MetricEntry {
            campaign_id: String::new(),
            date: today(),
            impressions: 0,
            clicks: 0,
            spend: 0.0,
            conversions: 0,
            revenue: 0.0,
        }
    }
}

/// Field edits for [`MetricEntry`]
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEdit {
    CampaignId(String),
    Date(String),
    Impressions(String),
    Clicks(String),
    Spend(String),
    Conversions(String),
    Revenue(String),
}

impl MetricEdit {
    /// Wire name of the edited field
    pub fn field(&self) -> &'static str {
        match self {
            MetricEdit::CampaignId(_) => "campaign_id",
            MetricEdit::Date(_) => "date",
            MetricEdit::Impressions(_) => "impressions",
            MetricEdit::Clicks(_) => "clicks",
            MetricEdit::Spend(_) => "spend",
            MetricEdit::Conversions(_) => "conversions",
            MetricEdit::Revenue(_) => "revenue",
        }
    }

    /// Raw text of a numeric edit
    pub fn numeric_input(&self) -> Option<&str> {
        match self {
            MetricEdit::Impressions(raw)
            | MetricEdit::Clicks(raw)
            | MetricEdit::Spend(raw)
            | MetricEdit::Conversions(raw)
            | MetricEdit::Revenue(raw) => Some(raw),
            MetricEdit::CampaignId(_) | MetricEdit::Date(_) => None,
        }
    }
}

impl Draft for MetricEntry {
    type Edit = MetricEdit;

    const ENDPOINT: Endpoint = Endpoint::Metrics;

    fn apply(&mut self, edit: MetricEdit) {
        match edit {
            MetricEdit::CampaignId(raw) => self.campaign_id = normalize_id(&raw),
            MetricEdit::Date(date) => self.date = date,
            MetricEdit::Impressions(raw) => self.impressions = parse_count(&raw),
            MetricEdit::Clicks(raw) => self.clicks = parse_count(&raw),
            MetricEdit::Spend(raw) => self.spend = parse_non_negative_decimal(&raw),
            MetricEdit::Conversions(raw) => self.conversions = parse_count(&raw),
            MetricEdit::Revenue(raw) => self.revenue = parse_non_negative_decimal(&raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::test_support::{changed_fields, raw_input};
    use proptest::prelude::*;
    use proptest::sample::select;
    use serde_json::json;

    fn campaign_edit() -> impl Strategy<Value = CampaignEdit> {
        prop_oneof![
            select(Platform::ALL).prop_map(CampaignEdit::Platform),
            raw_input().prop_map(CampaignEdit::Name),
            select(Objective::ALL).prop_map(CampaignEdit::Objective),
            raw_input().prop_map(CampaignEdit::BudgetDaily),
            raw_input().prop_map(CampaignEdit::StartDate),
            raw_input().prop_map(CampaignEdit::EndDate),
        ]
    }

    fn metric_edit() -> impl Strategy<Value = MetricEdit> {
        prop_oneof![
            raw_input().prop_map(MetricEdit::CampaignId),
            raw_input().prop_map(MetricEdit::Date),
            raw_input().prop_map(MetricEdit::Impressions),
            raw_input().prop_map(MetricEdit::Clicks),
            raw_input().prop_map(MetricEdit::Spend),
            raw_input().prop_map(MetricEdit::Conversions),
            raw_input().prop_map(MetricEdit::Revenue),
        ]
    }

    #[test]
    fn test_campaign_wire_shape() {
        let draft = CampaignDraft {
            name: "Q4 Push".to_string(),
            objective: Objective::BrandAwareness,
            budget_daily: 50.0,
            ..CampaignDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            json!({
                "platform": "meta",
                "name": "Q4 Push",
                "objective": "BRAND_AWARENESS",
                "budget_daily": 50.0,
                "start_date": "",
                "end_date": ""
            })
        );
    }

    #[test]
    fn test_campaign_merge_is_field_scoped() {
        let mut draft = CampaignDraft::default();
        draft.merge([
            CampaignEdit::Name("Spring".to_string()),
            CampaignEdit::Platform(Platform::Google),
        ]);
        draft.apply(CampaignEdit::BudgetDaily("oops".to_string()));

        assert_eq!(draft.name, "Spring");
        assert_eq!(draft.platform, Platform::Google);
        assert_eq!(draft.objective, Objective::LinkClicks);
        assert_eq!(draft.budget_daily, 0.0);
    }

    #[test]
    fn test_metric_defaults() {
        let metric = MetricEntry::default();
        assert_eq!(metric.date, today());
        assert_eq!(metric.campaign_id, "");
        assert_eq!(metric.impressions, 0);
    }

    #[test]
    fn test_metric_numeric_fallbacks() {
        let mut metric = MetricEntry::default();
        metric.merge([
            MetricEdit::Impressions("1200".to_string()),
            MetricEdit::Clicks("many".to_string()),
            MetricEdit::Spend("45.5".to_string()),
            MetricEdit::CampaignId("7x".to_string()),
        ]);
        assert_eq!(metric.impressions, 1200);
        assert_eq!(metric.clicks, 0);
        assert_eq!(metric.spend, 45.5);
        assert_eq!(metric.campaign_id, "");
    }

    #[test]
    fn test_metric_campaign_id_stays_a_string() {
        let mut metric = MetricEntry::default();
        metric.apply(MetricEdit::CampaignId("12".to_string()));
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["campaign_id"], json!("12"));
    }

    #[test]
    fn test_numeric_input_classification() {
        assert_eq!(MetricEdit::Spend("3".into()).numeric_input(), Some("3"));
        assert_eq!(MetricEdit::Date("2026-01-01".into()).numeric_input(), None);
        assert_eq!(CampaignEdit::Name("x".into()).numeric_input(), None);
    }

    proptest! {
        #[test]
        fn prop_campaign_merge_is_field_scoped(
            edits in prop::collection::vec(campaign_edit(), 0..12),
        ) {
            let start = CampaignDraft::default();
            let before = serde_json::to_value(&start).unwrap();
            let touched: Vec<&str> = edits.iter().map(|edit| edit.field()).collect();

            let mut draft = start.clone();
            draft.merge(edits);
            let after = serde_json::to_value(&draft).unwrap();

            for field in changed_fields(&before, &after) {
                prop_assert!(
                    touched.contains(&field.as_str()),
                    "{} changed without an edit to it",
                    field
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_metric_merge_is_field_scoped(
            edits in prop::collection::vec(metric_edit(), 0..12),
        ) {
            let start = MetricEntry::default();
            let before = serde_json::to_value(&start).unwrap();
            let touched: Vec<&str> = edits.iter().map(|edit| edit.field()).collect();

            let mut draft = start.clone();
            draft.merge(edits);
            let after = serde_json::to_value(&draft).unwrap();

            for field in changed_fields(&before, &after) {
                prop_assert!(
                    touched.contains(&field.as_str()),
                    "{} changed without an edit to it",
                    field
                );
            }
        }
    }
}
