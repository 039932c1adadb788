//! Landing page: one card per domain page

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

use egy_core::Page;

use crate::Message;

const CARDS: [(Page, &str, &str); 3] = [
    (Page::Analysis, "Market Analysis", "Create insights from ROAS and CTR figures"),
    (Page::Marketing, "Marketing", "Launch campaigns and record daily metrics"),
    (Page::Accounting, "Accounting", "Book income and expense transactions"),
];

fn card(page: Page, title: &'static str, blurb: &'static str) -> Element<'static, Message> {
    button(
        column![
            text(title).size(16),
            Space::new().height(6),
            text(blurb).size(11).color([0.5, 0.5, 0.5]),
        ]
        .padding(8),
    )
    .on_press(Message::Navigate(page))
    .width(Length::Fixed(260.0))
    .style(button::secondary)
    .into()
}

/// Render the landing page
pub fn view() -> Element<'static, Message> {
    let mut cards = row![].spacing(12);
    for (page, title, blurb) in CARDS {
        cards = cards.push(card(page, title, blurb));
    }

    container(
        column![
            text("Welcome").size(24),
            text("Pick an area to start a new draft.").size(12).color([0.5, 0.5, 0.5]),
            Space::new().height(16),
            cards,
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(20)
    .into()
}
