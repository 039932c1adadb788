//! Accounting transactions (Accounting panel).
//!
//! The only draft that resets after a successful submission.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{blank, today, Choice, Draft};
use crate::api::Endpoint;
use crate::input::parse_decimal;
use crate::workflow::ResetPolicy;

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
    Transfer,
    Refund,
}

impl Choice for TransactionType {
    const ALL: &'static [TransactionType] = &[
        TransactionType::Expense,
        TransactionType::Income,
        TransactionType::Transfer,
        TransactionType::Refund,
    ];

    fn code(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Transfer => "transfer",
            TransactionType::Refund => "refund",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
            TransactionType::Transfer => "Transfer",
            TransactionType::Refund => "Refund",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ledger account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Ops,
    Marketing,
    Sales,
    Admin,
    Bank,
    Cash,
}

impl Choice for Account {
    const ALL: &'static [Account] = &[
        Account::Ops,
        Account::Marketing,
        Account::Sales,
        Account::Admin,
        Account::Bank,
        Account::Cash,
    ];

    fn code(&self) -> &'static str {
        match self {
            Account::Ops => "ops",
            Account::Marketing => "marketing",
            Account::Sales => "sales",
            Account::Admin => "admin",
            Account::Bank => "bank",
            Account::Cash => "cash",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Account::Ops => "Operations",
            Account::Marketing => "Marketing",
            Account::Sales => "Sales",
            Account::Admin => "Administrative",
            Account::Bank => "Bank Account",
            Account::Cash => "Cash",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Transaction currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Egp,
    Gbp,
}

impl Choice for Currency {
    const ALL: &'static [Currency] = &[Currency::Usd, Currency::Eur, Currency::Egp, Currency::Gbp];

    fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Egp => "EGP",
            Currency::Gbp => "GBP",
        }
    }

    fn display_name(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Expense/income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Advertising,
    Travel,
    Meals,
    Office,
    Software,
    Services,
    Rent,
    Salary,
    Other,
}

impl Choice for Category {
    const ALL: &'static [Category] = &[
        Category::Advertising,
        Category::Travel,
        Category::Meals,
        Category::Office,
        Category::Software,
        Category::Services,
        Category::Rent,
        Category::Salary,
        Category::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Category::Advertising => "advertising",
            Category::Travel => "travel",
            Category::Meals => "meals",
            Category::Office => "office",
            Category::Software => "software",
            Category::Services => "services",
            Category::Rent => "rent",
            Category::Salary => "salary",
            Category::Other => "other",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Category::Advertising => "Advertising",
            Category::Travel => "Travel",
            Category::Meals => "Meals & Entertainment",
            Category::Office => "Office Supplies",
            Category::Software => "Software & Tools",
            Category::Services => "Professional Services",
            Category::Rent => "Rent & Utilities",
            Category::Salary => "Salary & Wages",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A ledger transaction.
///
/// `account` and `category` start unselected and are sent as `""` until
/// chosen. Submit requires both plus a non-zero `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDraft {
    /// `YYYY-MM-DD`, defaults to today
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "blank")]
    pub account: Option<Account>,
    pub counterparty: String,
    pub currency: Currency,
    /// Signed amount; zero blocks submission
    pub amount: f64,
    #[serde(with = "blank")]
    pub category: Option<Category>,
    pub description: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        TransactionDraft {
            date: today(),
            kind: TransactionType::default(),
            account: None,
            counterparty: String::new(),
            currency: Currency::default(),
            amount: 0.0,
            category: None,
            description: String::new(),
        }
    }
}

/// Field edits for [`TransactionDraft`]
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionEdit {
    Date(String),
    Kind(TransactionType),
    Account(Option<Account>),
    Counterparty(String),
    Currency(Currency),
    Amount(String),
    Category(Option<Category>),
    Description(String),
}

impl TransactionEdit {
    /// Wire name of the edited field
    pub fn field(&self) -> &'static str {
        match self {
            TransactionEdit::Date(_) => "date",
            TransactionEdit::Kind(_) => "type",
            TransactionEdit::Account(_) => "account",
            TransactionEdit::Counterparty(_) => "counterparty",
            TransactionEdit::Currency(_) => "currency",
            TransactionEdit::Amount(_) => "amount",
            TransactionEdit::Category(_) => "category",
            TransactionEdit::Description(_) => "description",
        }
    }

    /// Raw text of a numeric edit
    pub fn numeric_input(&self) -> Option<&str> {
        match self {
            TransactionEdit::Amount(raw) => Some(raw),
            _ => None,
        }
    }
}

impl Draft for TransactionDraft {
    type Edit = TransactionEdit;

    const ENDPOINT: Endpoint = Endpoint::Transactions;

    const RESET_POLICY: ResetPolicy = ResetPolicy::OnSuccessStatus;

    fn apply(&mut self, edit: TransactionEdit) {
        match edit {
            TransactionEdit::Date(date) => self.date = date,
            TransactionEdit::Kind(kind) => self.kind = kind,
            TransactionEdit::Account(account) => self.account = account,
            TransactionEdit::Counterparty(counterparty) => self.counterparty = counterparty,
            TransactionEdit::Currency(currency) => self.currency = currency,
            TransactionEdit::Amount(raw) => self.amount = parse_decimal(&raw),
            TransactionEdit::Category(category) => self.category = category,
            TransactionEdit::Description(description) => self.description = description,
        }
    }
}
