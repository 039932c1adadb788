//! Results Panel (Right Side)
//!
//! Shows the mounted panel's last outcome as pretty-printed JSON, or a dash
//! before the first attempt. Failures render as `{"error": ...}` in red.

use iced::widget::{column, container, scrollable, text, Space};
use iced::{Element, Font, Length};

use egy_core::Workflow;

use crate::Message;

/// Render the result viewer
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(workflow: &Workflow, input_ratio: f32) -> Element<'static, Message> {
    let outcome = workflow.outcome();

    let body = text(outcome.render()).font(Font::MONOSPACE).size(12);
    let body = if outcome.is_error() { body.color([0.8, 0.2, 0.2]) } else { body };

    let heading = if workflow.is_busy() { "Result (waiting...)" } else { "Result" };

    let content = column![text(heading).size(14), Space::new().height(8), body];

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
