//! # Navigation Controller
//!
//! Holds the current page and the panel mounted for it. Every mount gets a new
//! [`SessionId`]; in-flight submissions carry the id of the session that
//! started them, and a resolution for a session that is gone is dropped.

use std::fmt;

use tracing::{debug, info};

use crate::api::{ApiRequest, ApiResponse, ListQuery};
use crate::errors::SubmitResult;
use crate::panels::{Form, Panel, PanelEdit};
use crate::workflow::Resolution;

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Analysis,
    Marketing,
    Accounting,
}

impl Page {
    /// All pages in menu order
    pub const ALL: [Page; 4] = [Page::Home, Page::Analysis, Page::Marketing, Page::Accounting];

    /// Menu label
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Analysis => "Analysis",
            Page::Marketing => "Marketing",
            Page::Accounting => "Accounting",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Identifies one mount of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A started submission, to be resolved later with [`Navigator::resolve`]
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub session: SessionId,
    pub form: Form,
    pub request: SubmitResult<ApiRequest>,
}

/// A started listing, to be resolved later with [`Navigator::resolve_listing`]
#[derive(Debug, Clone, PartialEq)]
pub struct PendingListing {
    pub session: SessionId,
    pub form: Form,
    pub query: ListQuery,
}

/// Current page plus its mounted panel
#[derive(Debug, Default)]
pub struct Navigator {
    page: Page,
    panel: Option<Panel>,
    session: SessionId,
}

impl Navigator {
    /// Start on the home page with nothing mounted
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Session of the mounted panel
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut Panel> {
        self.panel.as_mut()
    }

    /// Switch pages. Leaving a page drops its panel; entering one mounts a
    /// fresh panel from defaults. Selecting the current page changes nothing.
    ///
    /// Returns whether the page changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }

        if let Some(panel) = self.panel.take() {
            if panel.workflow().is_busy() {
                debug!(
                    page = %self.page,
                    session = %self.session,
                    "leaving panel with a submission in flight"
                );
            }
        }

        self.session = SessionId(self.session.0 + 1);
        self.page = page;
        self.panel = Panel::mount(page);
        info!(page = %page, session = %self.session, "navigated");
        true
    }

    /// Apply a field edit to the mounted panel
    pub fn edit(&mut self, edit: PanelEdit) -> bool {
        match self.panel.as_mut() {
            Some(panel) => panel.edit(edit),
            None => false,
        }
    }

    /// Start a submission on the mounted panel, tagged with the current session
    pub fn begin(&mut self, form: Form) -> Option<PendingSubmission> {
        let session = self.session;
        let request = self.panel.as_mut()?.begin(form)?;
        Some(PendingSubmission { session, form, request })
    }

    /// Deliver a finished request.
    ///
    /// Returns `None`, with no state touched, when the session that started it
    /// is no longer mounted.
    pub fn resolve(
        &mut self,
        session: SessionId,
        form: Form,
        result: SubmitResult<ApiResponse>,
    ) -> Option<Resolution> {
        if session != self.session {
            debug!(
                stale = %session,
                current = %self.session,
                ?form,
                "discarding result for an unmounted panel"
            );
            return None;
        }
        self.panel.as_mut()?.settle(form, result)
    }

    /// Start a listing on the mounted panel, tagged with the current session
    pub fn begin_listing(&mut self, form: Form) -> Option<PendingListing> {
        let session = self.session;
        let query = self.panel.as_mut()?.begin_listing(form)?;
        Some(PendingListing { session, form, query })
    }

    /// Deliver a finished listing; stale sessions are dropped as in
    /// [`Navigator::resolve`].
    pub fn resolve_listing(
        &mut self,
        session: SessionId,
        result: SubmitResult<ApiResponse>,
    ) -> Option<Resolution> {
        if session != self.session {
            debug!(
                stale = %session,
                current = %self.session,
                "discarding listing for an unmounted panel"
            );
            return None;
        }
        Some(self.panel.as_mut()?.settle_listing(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::{CampaignEdit, InsightEdit, TransactionEdit};
    use crate::errors::SubmitError;
    use serde_json::json;

    fn campaign_name(nav: &Navigator) -> String {
        match nav.panel() {
            Some(Panel::Marketing(p)) => p.campaign.name.clone(),
            _ => panic!("marketing not mounted"),
        }
    }

    #[test]
    fn test_starts_home_without_panel() {
        let nav = Navigator::new();
        assert_eq!(nav.page(), Page::Home);
        assert!(nav.panel().is_none());
    }

    #[test]
    fn test_navigate_away_and_back_resets_draft() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Marketing);
        nav.edit(PanelEdit::Campaign(CampaignEdit::Name("Q4 Push".into())));
        assert_eq!(campaign_name(&nav), "Q4 Push");

        nav.navigate(Page::Accounting);
        nav.navigate(Page::Marketing);
        assert_eq!(campaign_name(&nav), "");
    }

    #[test]
    fn test_selecting_current_page_keeps_draft() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Marketing);
        let session = nav.session();
        nav.edit(PanelEdit::Campaign(CampaignEdit::Name("Keep".into())));

        assert!(!nav.navigate(Page::Marketing));
        assert_eq!(nav.session(), session);
        assert_eq!(campaign_name(&nav), "Keep");
    }

    #[test]
    fn test_home_has_no_panel() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Analysis);
        nav.navigate(Page::Home);
        assert!(nav.panel().is_none());
        assert!(!nav.edit(PanelEdit::Insight(InsightEdit::Topic("x".into()))));
        assert!(nav.begin(Form::Insight).is_none());
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Accounting);
        nav.edit(PanelEdit::Transaction(TransactionEdit::Amount("10".into())));
        let pending = nav.begin(Form::Transaction).unwrap();
        assert!(nav.panel().unwrap().workflow().is_busy());

        nav.navigate(Page::Home);
        nav.navigate(Page::Accounting);
        assert!(!nav.panel().unwrap().workflow().is_busy());

        let applied = nav.resolve(
            pending.session,
            pending.form,
            Ok(ApiResponse { status: 201, body: json!({ "id": 9 }) }),
        );
        assert!(applied.is_none());

        let panel = nav.panel().unwrap();
        assert_eq!(panel.workflow().outcome().render(), "—");
        match panel {
            Panel::Accounting(p) => assert_eq!(p.transaction.amount, 0.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_current_resolution_is_applied() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Analysis);
        let pending = nav.begin(Form::Insight).unwrap();
        assert_eq!(pending.request.as_ref().unwrap().body["topic"], "August Performance");

        let resolution = nav
            .resolve(pending.session, pending.form, Err(SubmitError::decode("expected value")))
            .unwrap();
        assert_eq!(resolution, Resolution::Failed);
        let outcome = nav.panel().unwrap().workflow().outcome();
        assert_eq!(outcome.to_json(), Some(json!({ "error": "expected value" })));
    }

    #[test]
    fn test_stale_listing_is_discarded() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Marketing);
        let pending = nav.begin_listing(Form::Campaign).unwrap();
        assert_eq!(pending.query.filters, vec![("platform", "meta".to_string())]);

        nav.navigate(Page::Analysis);
        let listed = nav.resolve_listing(
            pending.session,
            Ok(ApiResponse { status: 200, body: json!([]) }),
        );
        assert!(listed.is_none());
        assert_eq!(nav.panel().unwrap().workflow().outcome().render(), "—");
    }

    #[test]
    fn test_current_listing_is_shown() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Analysis);
        let pending = nav.begin_listing(Form::Insight).unwrap();
        assert!(nav.panel().unwrap().workflow().is_busy());

        let response = ApiResponse { status: 200, body: json!([{ "id": 3 }]) };
        let listed = nav.resolve_listing(pending.session, Ok(response)).unwrap();
        assert_eq!(listed, Resolution::Succeeded { status: 200, reset: false });
        let shown = nav.panel().unwrap().workflow().outcome().to_json().unwrap();
        assert_eq!(shown[0]["id"], 3);
    }

    #[test]
    fn test_sessions_increase() {
        let mut nav = Navigator::new();
        let first = nav.session();
        nav.navigate(Page::Analysis);
        let second = nav.session();
        nav.navigate(Page::Home);
        assert!(first < second);
        assert!(second < nav.session());
    }
}
