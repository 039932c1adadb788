//! Input view for the Analysis page
//!
//! One form: insight topic plus ROAS and CTR.

use iced::widget::{column, text, Column, Space};

use egy_core::drafts::InsightEdit;
use egy_core::panels::AnalysisPanel;
use egy_core::{Form, Panel, PanelEdit};

use super::shared::fields::{labeled_input, section_title, submit_row};
use crate::{Message, NumericBuffers};

fn edit(edit: InsightEdit) -> Message {
    Message::Edit(PanelEdit::Insight(edit))
}

/// Render the insight form
pub fn view<'a>(
    panel: &'a Panel,
    analysis: &'a AnalysisPanel,
    buffers: &NumericBuffers,
) -> Column<'a, Message> {
    let insight = &analysis.insight;

    column![
        text("Market Analysis").size(20),
        Space::new().height(8),
        section_title("Create Insight"),
        labeled_input("Topic:", &insight.topic, |v| edit(InsightEdit::Topic(v))),
        labeled_input(
            "ROAS:",
            &buffers.decimal(Form::Insight, "roas", insight.data.roas),
            |v| edit(InsightEdit::Roas(v)),
        ),
        labeled_input(
            "CTR:",
            &buffers.decimal(Form::Insight, "ctr", insight.data.ctr),
            |v| edit(InsightEdit::Ctr(v)),
        ),
        Space::new().height(8),
        submit_row(panel, Form::Insight),
    ]
    .spacing(6)
}
