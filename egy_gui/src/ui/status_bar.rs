//! Status Bar (Bottom)
//!
//! Displays:
//! - Backend base URL
//! - Health check result (click to re-check)
//! - Last action

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{Health, Message};

/// Render the status bar
pub fn view_status_bar<'a>(
    base_url: &'a str,
    health: &Health,
    status: &'a str,
) -> Element<'a, Message> {
    let (health_text, color) = match health {
        Health::Checking => ("Checking API...".to_string(), [0.5, 0.5, 0.5]),
        Health::Online => ("API online".to_string(), [0.2, 0.6, 0.2]),
        Health::Unreachable(reason) => (format!("API unreachable: {}", reason), [0.8, 0.2, 0.2]),
    };

    let health_button = button(text(health_text).size(10).color(color))
        .on_press(Message::CheckHealth)
        .padding(0)
        .style(button::text);

    row![
        text(base_url).size(10),
        text("  |  ").size(10).color([0.5, 0.5, 0.5]),
        health_button,
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
