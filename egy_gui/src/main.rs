//! # Egy Discovery Desk
//!
//! Desktop client for the Egy Discovery backend. Three domain pages
//! (Analysis, Marketing, Accounting) each hold in-progress drafts, gate their
//! submit buttons, and show the last JSON the backend returned.
//!
//! Built with Iced. All draft, validation and submission state lives in
//! `egy_core`; this crate only renders it and turns widget events into
//! [`egy_core::PanelEdit`]s and submissions.

mod ui;

use std::collections::HashMap;

use iced::widget::{column, row, rule};
use iced::{Element, Length, Task};
use tracing::{debug, info};

use egy_core::input::format_number;
use egy_core::{
    ApiClient, ApiResponse, ClientConfig, Form, Navigator, Page, PanelEdit, PendingListing,
    PendingSubmission, Resolution, SessionId, SubmitResult,
};

/// Share of the window width given to the input side of a page
const INPUT_RATIO: f32 = 0.55;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    egy_core::logging::init(egy_core::logging::DEFAULT_DIRECTIVES);

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    info!(base_url = %config.base_url, "starting Egy Discovery desk");

    iced::application(move || App::new(client.clone()), App::update, App::view)
        .title(App::title)
        .window_size((1100.0, 760.0))
        .run()?;

    Ok(())
}

/// Raw text of numeric fields exactly as typed.
///
/// Drafts store parsed numbers, so re-rendering from the draft would eat
/// partial input such as "2." or "-". The buffer wins while it exists.
#[derive(Debug, Default)]
pub struct NumericBuffers(HashMap<(Form, &'static str), String>);

impl NumericBuffers {
    fn record(&mut self, edit: &PanelEdit) {
        if let Some(raw) = edit.numeric_input() {
            self.0.insert((edit.form(), edit.field()), raw.to_string());
        }
    }

    fn forget(&mut self, form: Form) {
        self.0.retain(|(owner, _), _| *owner != form);
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    /// Text to show for a decimal field
    pub fn decimal(&self, form: Form, field: &'static str, value: f64) -> String {
        self.0
            .get(&(form, field))
            .cloned()
            .unwrap_or_else(|| format_number(value))
    }

    /// Text to show for a count field
    pub fn count(&self, form: Form, field: &'static str, value: u64) -> String {
        self.0
            .get(&(form, field))
            .cloned()
            .unwrap_or_else(|| value.to_string())
    }
}

/// Backend reachability as last checked
#[derive(Debug, Clone, PartialEq)]
pub enum Health {
    Checking,
    Online,
    Unreachable(String),
}

pub struct App {
    pub navigator: Navigator,
    pub client: ApiClient,
    pub buffers: NumericBuffers,
    pub health: Health,
    pub status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Edit(PanelEdit),
    Submit(Form),
    Resolved {
        session: SessionId,
        form: Form,
        result: SubmitResult<ApiResponse>,
    },
    List(Form),
    Listed {
        session: SessionId,
        form: Form,
        result: SubmitResult<ApiResponse>,
    },
    HealthChecked(SubmitResult<ApiResponse>),
    CheckHealth,
}

impl App {
    fn new(client: ApiClient) -> (Self, Task<Message>) {
        let app = Self {
            navigator: Navigator::new(),
            client,
            buffers: NumericBuffers::default(),
            health: Health::Checking,
            status: "Ready".to_string(),
        };
        let check = app.check_health();
        (app, check)
    }

    fn title(&self) -> String {
        match self.navigator.page() {
            Page::Home => "Egy Discovery".to_string(),
            page => format!("Egy Discovery - {}", page),
        }
    }

    fn check_health(&self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(async move { client.health().await }, Message::HealthChecked)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                if self.navigator.navigate(page) {
                    self.buffers.clear();
                    self.status = format!("{} opened", page);
                }
            }

            Message::Edit(edit) => {
                self.buffers.record(&edit);
                self.navigator.edit(edit);
            }

            Message::Submit(form) => {
                let enabled = self
                    .navigator
                    .panel()
                    .is_some_and(|panel| panel.can_submit(form));
                if !enabled {
                    debug!(?form, "submit ignored, control disabled");
                    return Task::none();
                }

                let Some(PendingSubmission { session, form, request }) =
                    self.navigator.begin(form)
                else {
                    return Task::none();
                };
                self.status = format!("{}...", form.endpoint());

                let client = self.client.clone();
                return Task::perform(
                    async move {
                        match request {
                            Ok(request) => client.post_json(request).await,
                            Err(error) => Err(error),
                        }
                    },
                    move |result| Message::Resolved { session, form, result },
                );
            }

            Message::Resolved { session, form, result } => {
                match self.navigator.resolve(session, form, result) {
                    Some(Resolution::Succeeded { status, reset }) => {
                        if reset {
                            self.buffers.forget(form);
                        }
                        self.status = format!("{} returned {}", form.endpoint(), status);
                    }
                    Some(Resolution::Failed) => {
                        self.status = format!("{} failed", form.endpoint());
                    }
                    None => {}
                }
            }

            Message::List(form) => {
                if self.navigator.panel().is_none_or(|panel| panel.workflow().is_busy()) {
                    debug!(?form, "listing ignored, panel busy or unmounted");
                    return Task::none();
                }

                let Some(PendingListing { session, form, query }) =
                    self.navigator.begin_listing(form)
                else {
                    return Task::none();
                };
                self.status = format!("GET {}...", form.endpoint().path());

                let client = self.client.clone();
                return Task::perform(
                    async move { client.list(query).await },
                    move |result| Message::Listed { session, form, result },
                );
            }

            Message::Listed { session, form, result } => {
                match self.navigator.resolve_listing(session, result) {
                    Some(Resolution::Succeeded { status, .. }) => {
                        self.status =
                            format!("GET {} returned {}", form.endpoint().path(), status);
                    }
                    Some(Resolution::Failed) => {
                        self.status = format!("GET {} failed", form.endpoint().path());
                    }
                    None => {}
                }
            }

            Message::CheckHealth => {
                self.health = Health::Checking;
                return self.check_health();
            }

            Message::HealthChecked(result) => {
                self.health = match result {
                    Ok(response) if response.is_success() => Health::Online,
                    Ok(response) => Health::Unreachable(format!("status {}", response.status)),
                    Err(error) => Health::Unreachable(error.message().to_string()),
                };
                info!(health = ?self.health, "health check finished");
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = ui::navbar::view_navbar(self.navigator.page());

        let body: Element<'_, Message> = match self.navigator.panel() {
            None => ui::home::view(),
            Some(panel) => row![
                ui::input_panel::view_input_panel(panel, &self.buffers, INPUT_RATIO),
                ui::results_panel::view_results_panel(panel.workflow(), INPUT_RATIO),
            ]
            .spacing(10)
            .height(Length::Fill)
            .into(),
        };

        let status_bar = ui::status_bar::view_status_bar(
            self.client.base_url().as_str(),
            &self.health,
            &self.status,
        );

        column![navbar, rule::horizontal(1), body, rule::horizontal(1), status_bar]
            .spacing(6)
            .padding(10)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egy_core::drafts::{InsightEdit, MetricEdit};

    #[test]
    fn test_buffer_keeps_partial_decimal() {
        let mut buffers = NumericBuffers::default();
        buffers.record(&PanelEdit::Insight(InsightEdit::Roas("2.".into())));
        assert_eq!(buffers.decimal(Form::Insight, "roas", 2.0), "2.");
        assert_eq!(buffers.decimal(Form::Insight, "ctr", 0.03), "0.03");
    }

    #[test]
    fn test_buffer_ignores_text_fields() {
        let mut buffers = NumericBuffers::default();
        buffers.record(&PanelEdit::Insight(InsightEdit::Topic("Q3".into())));
        assert!(buffers.0.is_empty());
    }

    #[test]
    fn test_forget_only_drops_one_form() {
        let mut buffers = NumericBuffers::default();
        buffers.record(&PanelEdit::Metric(MetricEdit::Clicks("12".into())));
        buffers.record(&PanelEdit::Insight(InsightEdit::Ctr("0.5".into())));

        buffers.forget(Form::Metric);
        assert_eq!(buffers.count(Form::Metric, "clicks", 0), "0");
        assert_eq!(buffers.decimal(Form::Insight, "ctr", 0.5), "0.5");
    }
}
