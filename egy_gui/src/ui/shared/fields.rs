//! Form field widgets
//!
//! Every field is a row: fixed-width label on the left, control filling the
//! rest. Numeric fields are plain text inputs; parsing happens in `egy_core`.

use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Padding};

use egy_core::drafts::Choice;
use egy_core::{Form, Panel};

use crate::Message;

const LABEL_WIDTH: f32 = 120.0;

/// Section heading inside a panel
pub fn section_title(title: &str) -> Element<'_, Message> {
    text(title).size(14).into()
}

/// Label plus single-line text input
pub fn labeled_input<'a>(
    label: &'a str,
    value: &str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    labeled_input_with_placeholder(label, "", value, on_change)
}

/// Label plus text input showing a hint while empty
pub fn labeled_input_with_placeholder<'a>(
    label: &'a str,
    placeholder: &str,
    value: &str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Label plus drop-down over a closed option set.
///
/// `selected == None` shows `placeholder`.
pub fn labeled_pick_list<'a, T>(
    label: &'a str,
    selected: Option<T>,
    placeholder: &'a str,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: Choice,
{
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(T::ALL, selected, on_select)
            .placeholder(placeholder)
            .width(Length::Fill)
            .padding(4)
            .text_size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Like [`labeled_pick_list`] for optional selections, with a button that
/// clears a made selection back to the placeholder.
pub fn labeled_optional_pick_list<'a, T>(
    label: &'a str,
    selected: Option<T>,
    placeholder: &'a str,
    on_change: impl Fn(Option<T>) -> Message + 'a,
) -> Element<'a, Message>
where
    T: Choice,
{
    let clear = button(text("Clear").size(10))
        .on_press_maybe(selected.is_some().then(|| on_change(None)))
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(T::ALL, selected, move |option| on_change(Some(option)))
            .placeholder(placeholder)
            .width(Length::Fill)
            .padding(4)
            .text_size(11),
        clear,
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

/// Submit and listing buttons for one form, plus what is still missing.
///
/// Submit is disabled while the panel is busy or the draft fails its gate,
/// and shows the busy label during a request. "Recent" lists existing
/// records filtered by the draft's selections; it needs only an idle panel.
pub fn submit_row(panel: &Panel, form: Form) -> Element<'static, Message> {
    let busy = panel.workflow().is_busy();
    let label = if busy { form.busy_label() } else { form.action_label() };

    let submit = button(text(label).size(12))
        .on_press_maybe(panel.can_submit(form).then_some(Message::Submit(form)))
        .padding(Padding::from([6, 12]))
        .style(button::primary);

    let recent = button(text("Recent").size(12))
        .on_press_maybe((!busy).then_some(Message::List(form)))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);

    let mut submit_row = row![submit, recent].spacing(10).align_y(Alignment::Center);

    let missing = panel.missing(form);
    if !missing.is_empty() {
        submit_row = submit_row.push(
            text(format!("Requires {}", missing.join(", ")))
                .size(10)
                .color([0.6, 0.3, 0.0]),
        );
    }

    submit_row.into()
}
