//! Navigation bar
//!
//! Brand on the left (returns home), one button per domain page on the right.
//! The active page is highlighted.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use egy_core::Page;

use crate::Message;

/// Render the navigation bar
pub fn view_navbar(current: Page) -> Element<'static, Message> {
    let brand = button(text("Egy Discovery").size(22))
        .on_press(Message::Navigate(Page::Home))
        .padding(0)
        .style(button::text);

    let mut links = row![].spacing(4);
    for page in Page::ALL {
        links = links.push(
            button(text(page.display_name()).size(11))
                .on_press(Message::Navigate(page))
                .padding(Padding::from([4, 10]))
                .style(if page == current { button::primary } else { button::secondary }),
        );
    }

    row![brand, Space::new().width(Length::Fill), links]
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}
