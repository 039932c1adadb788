//! Input view for the Accounting page

use iced::widget::{column, text, Column, Space};

use egy_core::drafts::TransactionEdit;
use egy_core::panels::AccountingPanel;
use egy_core::{Form, Panel, PanelEdit};

use super::shared::fields::{
    labeled_input, labeled_input_with_placeholder, labeled_optional_pick_list, labeled_pick_list,
    section_title, submit_row,
};
use crate::{Message, NumericBuffers};

fn edit(edit: TransactionEdit) -> Message {
    Message::Edit(PanelEdit::Transaction(edit))
}

/// Render the transaction form
///
/// Account and category start unselected; the draft cannot be submitted
/// until both are picked and the amount is non-zero.
pub fn view<'a>(
    panel: &'a Panel,
    accounting: &'a AccountingPanel,
    buffers: &NumericBuffers,
) -> Column<'a, Message> {
    let draft = &accounting.transaction;

    column![
        text("Accounting").size(20),
        Space::new().height(8),
        section_title("New Transaction"),
        labeled_input_with_placeholder("Date:", "YYYY-MM-DD", &draft.date, |v| {
            edit(TransactionEdit::Date(v))
        }),
        labeled_pick_list("Type:", Some(draft.kind), "Type", |k| edit(TransactionEdit::Kind(k))),
        labeled_optional_pick_list("Account:", draft.account, "Select Account", |a| {
            edit(TransactionEdit::Account(a))
        }),
        labeled_input_with_placeholder(
            "Counterparty:",
            "Vendor or customer",
            &draft.counterparty,
            |v| edit(TransactionEdit::Counterparty(v)),
        ),
        labeled_pick_list("Currency:", Some(draft.currency), "Currency", |c| {
            edit(TransactionEdit::Currency(c))
        }),
        labeled_input(
            "Amount:",
            &buffers.decimal(Form::Transaction, "amount", draft.amount),
            |v| edit(TransactionEdit::Amount(v)),
        ),
        labeled_optional_pick_list("Category:", draft.category, "Select Category", |c| {
            edit(TransactionEdit::Category(c))
        }),
        labeled_input("Description:", &draft.description, |v| {
            edit(TransactionEdit::Description(v))
        }),
        Space::new().height(8),
        submit_row(panel, Form::Transaction),
    ]
    .spacing(6)
}
