//! Input view for the Marketing page
//!
//! Displays:
//! - Campaign form (platform, name, objective, daily budget, dates)
//! - Daily metrics form (campaign id, date, counts, spend, revenue)
//!
//! Both forms share one busy flag, so either request disables both buttons.

use iced::widget::{column, rule, text, Column, Space};
use iced::Element;

use egy_core::drafts::{CampaignEdit, MetricEdit};
use egy_core::panels::MarketingPanel;
use egy_core::{Form, Panel, PanelEdit};

use super::shared::fields::{
    labeled_input, labeled_input_with_placeholder, labeled_pick_list, section_title, submit_row,
};
use crate::{Message, NumericBuffers};

fn campaign(edit: CampaignEdit) -> Message {
    Message::Edit(PanelEdit::Campaign(edit))
}

fn metric(edit: MetricEdit) -> Message {
    Message::Edit(PanelEdit::Metric(edit))
}

/// Render both marketing forms
pub fn view<'a>(
    panel: &'a Panel,
    marketing: &'a MarketingPanel,
    buffers: &NumericBuffers,
) -> Column<'a, Message> {
    column![
        text("Marketing").size(20),
        Space::new().height(8),
        view_campaign_form(panel, marketing, buffers),
        Space::new().height(10),
        rule::horizontal(1),
        Space::new().height(10),
        view_metrics_form(panel, marketing, buffers),
    ]
}

fn view_campaign_form<'a>(
    panel: &'a Panel,
    marketing: &'a MarketingPanel,
    buffers: &NumericBuffers,
) -> Element<'a, Message> {
    let draft = &marketing.campaign;

    column![
        section_title("Create Campaign"),
        labeled_pick_list("Platform:", Some(draft.platform), "Platform", |p| {
            campaign(CampaignEdit::Platform(p))
        }),
        labeled_input_with_placeholder("Name:", "Campaign name", &draft.name, |v| {
            campaign(CampaignEdit::Name(v))
        }),
        labeled_pick_list("Objective:", Some(draft.objective), "Objective", |o| {
            campaign(CampaignEdit::Objective(o))
        }),
        labeled_input(
            "Daily Budget:",
            &buffers.decimal(Form::Campaign, "budget_daily", draft.budget_daily),
            |v| campaign(CampaignEdit::BudgetDaily(v)),
        ),
        labeled_input_with_placeholder("Start Date:", "YYYY-MM-DD", &draft.start_date, |v| {
            campaign(CampaignEdit::StartDate(v))
        }),
        labeled_input_with_placeholder("End Date:", "YYYY-MM-DD", &draft.end_date, |v| {
            campaign(CampaignEdit::EndDate(v))
        }),
        Space::new().height(6),
        submit_row(panel, Form::Campaign),
    ]
    .spacing(6)
    .into()
}

fn view_metrics_form<'a>(
    panel: &'a Panel,
    marketing: &'a MarketingPanel,
    buffers: &NumericBuffers,
) -> Element<'a, Message> {
    let draft = &marketing.metric;

    column![
        section_title("Daily Metrics"),
        labeled_input_with_placeholder("Campaign ID:", "Digits only", &draft.campaign_id, |v| {
            metric(MetricEdit::CampaignId(v))
        }),
        labeled_input_with_placeholder("Date:", "YYYY-MM-DD", &draft.date, |v| {
            metric(MetricEdit::Date(v))
        }),
        labeled_input(
            "Impressions:",
            &buffers.count(Form::Metric, "impressions", draft.impressions),
            |v| metric(MetricEdit::Impressions(v)),
        ),
        labeled_input(
            "Clicks:",
            &buffers.count(Form::Metric, "clicks", draft.clicks),
            |v| metric(MetricEdit::Clicks(v)),
        ),
        labeled_input(
            "Spend:",
            &buffers.decimal(Form::Metric, "spend", draft.spend),
            |v| metric(MetricEdit::Spend(v)),
        ),
        labeled_input(
            "Conversions:",
            &buffers.count(Form::Metric, "conversions", draft.conversions),
            |v| metric(MetricEdit::Conversions(v)),
        ),
        labeled_input(
            "Revenue:",
            &buffers.decimal(Form::Metric, "revenue", draft.revenue),
            |v| metric(MetricEdit::Revenue(v)),
        ),
        Space::new().height(6),
        submit_row(panel, Form::Metric),
    ]
    .spacing(6)
    .into()
}
