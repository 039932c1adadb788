//! Input Panel (Left Side)
//!
//! Dispatches to the editor of the mounted panel:
//! - Analysis -> input_analysis
//! - Marketing -> input_marketing
//! - Accounting -> input_accounting

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use egy_core::Panel;

use super::{input_accounting, input_analysis, input_marketing};
use crate::{Message, NumericBuffers};

/// Render the input side of a domain page
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel<'a>(
    panel: &'a Panel,
    buffers: &NumericBuffers,
    ratio: f32,
) -> Element<'a, Message> {
    let editor: Column<'a, Message> = match panel {
        Panel::Analysis(analysis) => input_analysis::view(panel, analysis, buffers),
        Panel::Marketing(marketing) => input_marketing::view(panel, marketing, buffers),
        Panel::Accounting(accounting) => input_accounting::view(panel, accounting, buffers),
    };

    // Scale to 0-100 for FillPortion precision
    let portion = (ratio * 100.0) as u16;

    container(scrollable(editor.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
