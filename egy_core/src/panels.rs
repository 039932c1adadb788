//! # Panels
//!
//! A panel owns its drafts and one [`Workflow`]. Marketing holds two drafts
//! that share a busy flag and a result slot.
//!
//! Besides submitting, every form can list the records already on the
//! backend. The draft's selections double as filters, and the listing is
//! shown in the same result slot.
//!
//! Panels are created by [`crate::navigation::Navigator`] on mount and
//! dropped on navigation away.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::{ApiRequest, ApiResponse, Endpoint, ListQuery, Transport};
use crate::drafts::{
    CampaignDraft, CampaignEdit, Choice, Draft, InsightEdit, InsightRequest, MetricEdit,
    MetricEntry, TransactionDraft, TransactionEdit,
};
use crate::errors::SubmitResult;
use crate::navigation::Page;
use crate::validation::{can_submit, Submittable};
use crate::workflow::{ResetPolicy, Resolution, Workflow};

/// A submittable form inside a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Insight,
    Campaign,
    Metric,
    Transaction,
}

impl Form {
    pub const ALL: [Form; 4] = [Form::Insight, Form::Campaign, Form::Metric, Form::Transaction];

    /// Page hosting this form
    pub fn page(&self) -> Page {
        match self {
            Form::Insight => Page::Analysis,
            Form::Campaign | Form::Metric => Page::Marketing,
            Form::Transaction => Page::Accounting,
        }
    }

    /// Where this form is POSTed
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Form::Insight => InsightRequest::ENDPOINT,
            Form::Campaign => CampaignDraft::ENDPOINT,
            Form::Metric => MetricEntry::ENDPOINT,
            Form::Transaction => TransactionDraft::ENDPOINT,
        }
    }

    /// Submit button label
    pub fn action_label(&self) -> &'static str {
        match self {
            Form::Insight => "Create Insight",
            Form::Campaign => "Create Campaign",
            Form::Metric => "Add Metrics",
            Form::Transaction => "Create Transaction",
        }
    }

    /// Submit button label while busy
    pub fn busy_label(&self) -> &'static str {
        match self {
            Form::Metric => "Adding...",
            _ => "Creating...",
        }
    }
}

/// A field edit addressed to one form
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEdit {
    Insight(InsightEdit),
    Campaign(CampaignEdit),
    Metric(MetricEdit),
    Transaction(TransactionEdit),
}

impl PanelEdit {
    /// Form the edit targets
    pub fn form(&self) -> Form {
        match self {
            PanelEdit::Insight(_) => Form::Insight,
            PanelEdit::Campaign(_) => Form::Campaign,
            PanelEdit::Metric(_) => Form::Metric,
            PanelEdit::Transaction(_) => Form::Transaction,
        }
    }

    /// Wire name of the edited field
    pub fn field(&self) -> &'static str {
        match self {
            PanelEdit::Insight(edit) => edit.field(),
            PanelEdit::Campaign(edit) => edit.field(),
            PanelEdit::Metric(edit) => edit.field(),
            PanelEdit::Transaction(edit) => edit.field(),
        }
    }

    /// Raw text when the edit targets a numeric field
    pub fn numeric_input(&self) -> Option<&str> {
        match self {
            PanelEdit::Insight(edit) => edit.numeric_input(),
            PanelEdit::Campaign(edit) => edit.numeric_input(),
            PanelEdit::Metric(edit) => edit.numeric_input(),
            PanelEdit::Transaction(edit) => edit.numeric_input(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisPanel {
    pub insight: InsightRequest,
    pub workflow: Workflow,
}

#[derive(Debug, Clone, Default)]
pub struct MarketingPanel {
    pub campaign: CampaignDraft,
    pub metric: MetricEntry,
    pub workflow: Workflow,
}

#[derive(Debug, Clone, Default)]
pub struct AccountingPanel {
    pub transaction: TransactionDraft,
    pub workflow: Workflow,
}

/// The mounted panel of a domain page
#[derive(Debug, Clone)]
pub enum Panel {
    Analysis(AnalysisPanel),
    Marketing(MarketingPanel),
    Accounting(AccountingPanel),
}

impl Panel {
    /// Fresh panel for a page; `Home` has none
    pub fn mount(page: Page) -> Option<Panel> {
        match page {
            Page::Home => None,
            Page::Analysis => Some(Panel::Analysis(AnalysisPanel::default())),
            Page::Marketing => Some(Panel::Marketing(MarketingPanel::default())),
            Page::Accounting => Some(Panel::Accounting(AccountingPanel::default())),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Panel::Analysis(_) => Page::Analysis,
            Panel::Marketing(_) => Page::Marketing,
            Panel::Accounting(_) => Page::Accounting,
        }
    }

    /// Forms hosted by this panel, in display order
    pub fn forms(&self) -> &'static [Form] {
        match self {
            Panel::Analysis(_) => &[Form::Insight],
            Panel::Marketing(_) => &[Form::Campaign, Form::Metric],
            Panel::Accounting(_) => &[Form::Transaction],
        }
    }

    pub fn workflow(&self) -> &Workflow {
        match self {
            Panel::Analysis(panel) => &panel.workflow,
            Panel::Marketing(panel) => &panel.workflow,
            Panel::Accounting(panel) => &panel.workflow,
        }
    }

    /// Whether this panel hosts a form
    pub fn hosts(&self, form: Form) -> bool {
        form.page() == self.page()
    }

    /// Apply a field edit. Returns false when the form is not on this panel.
    pub fn edit(&mut self, edit: PanelEdit) -> bool {
        debug!(form = ?edit.form(), field = edit.field(), "draft edited");
        match (self, edit) {
            (Panel::Analysis(panel), PanelEdit::Insight(edit)) => panel.insight.apply(edit),
            (Panel::Marketing(panel), PanelEdit::Campaign(edit)) => panel.campaign.apply(edit),
            (Panel::Marketing(panel), PanelEdit::Metric(edit)) => panel.metric.apply(edit),
            (Panel::Accounting(panel), PanelEdit::Transaction(edit)) => {
                panel.transaction.apply(edit)
            }
            _ => return false,
        }
        true
    }

    /// Requirements the form's draft still misses
    pub fn missing(&self, form: Form) -> Vec<&'static str> {
        match (self, form) {
            (Panel::Analysis(panel), Form::Insight) => panel.insight.missing(),
            (Panel::Marketing(panel), Form::Campaign) => panel.campaign.missing(),
            (Panel::Marketing(panel), Form::Metric) => panel.metric.missing(),
            (Panel::Accounting(panel), Form::Transaction) => panel.transaction.missing(),
            _ => Vec::new(),
        }
    }

    /// Whether the form's submit control is enabled right now
    pub fn can_submit(&self, form: Form) -> bool {
        let busy = self.workflow().is_busy();
        match (self, form) {
            (Panel::Analysis(panel), Form::Insight) => can_submit(&panel.insight, busy),
            (Panel::Marketing(panel), Form::Campaign) => can_submit(&panel.campaign, busy),
            (Panel::Marketing(panel), Form::Metric) => can_submit(&panel.metric, busy),
            (Panel::Accounting(panel), Form::Transaction) => can_submit(&panel.transaction, busy),
            _ => false,
        }
    }

    /// Start an attempt: mark busy and serialize the draft.
    ///
    /// Returns `None` when the form is not on this panel.
    pub fn begin(&mut self, form: Form) -> Option<SubmitResult<ApiRequest>> {
        let prepared = match (&*self, form) {
            (Panel::Analysis(panel), Form::Insight) => prepare(&panel.insight),
            (Panel::Marketing(panel), Form::Campaign) => prepare(&panel.campaign),
            (Panel::Marketing(panel), Form::Metric) => prepare(&panel.metric),
            (Panel::Accounting(panel), Form::Transaction) => prepare(&panel.transaction),
            _ => return None,
        };
        info!(endpoint = %form.endpoint(), "submission started");
        self.workflow_mut().begin();
        Some(prepared)
    }

    /// Finish an attempt started with [`Panel::begin`].
    pub fn settle(&mut self, form: Form, result: SubmitResult<ApiResponse>) -> Option<Resolution> {
        let resolution = match (self, form) {
            (Panel::Analysis(panel), Form::Insight) => {
                settle_draft(&mut panel.insight, &mut panel.workflow, result)
            }
            (Panel::Marketing(panel), Form::Campaign) => {
                settle_draft(&mut panel.campaign, &mut panel.workflow, result)
            }
            (Panel::Marketing(panel), Form::Metric) => {
                settle_draft(&mut panel.metric, &mut panel.workflow, result)
            }
            (Panel::Accounting(panel), Form::Transaction) => {
                settle_draft(&mut panel.transaction, &mut panel.workflow, result)
            }
            _ => return None,
        };
        Some(resolution)
    }

    /// Run a full attempt in place, awaiting the transport.
    pub async fn submit<T>(&mut self, form: Form, transport: &T) -> Option<Resolution>
    where
        T: Transport + ?Sized,
    {
        let resolution = match (self, form) {
            (Panel::Analysis(panel), Form::Insight) => {
                submit_draft(&mut panel.insight, &mut panel.workflow, transport).await
            }
            (Panel::Marketing(panel), Form::Campaign) => {
                submit_draft(&mut panel.campaign, &mut panel.workflow, transport).await
            }
            (Panel::Marketing(panel), Form::Metric) => {
                submit_draft(&mut panel.metric, &mut panel.workflow, transport).await
            }
            (Panel::Accounting(panel), Form::Transaction) => {
                submit_draft(&mut panel.transaction, &mut panel.workflow, transport).await
            }
            _ => return None,
        };
        Some(resolution)
    }

    /// Listing for a form, filtered by the draft's current selections:
    /// account and category for transactions, platform for campaigns,
    /// campaign id for metrics.
    pub fn list_query(&self, form: Form) -> Option<ListQuery> {
        let query = ListQuery::new(form.endpoint());
        let query = match (self, form) {
            (Panel::Analysis(_), Form::Insight) => query,
            (Panel::Marketing(panel), Form::Campaign) => {
                query.filter("platform", panel.campaign.platform.code())
            }
            (Panel::Marketing(panel), Form::Metric) => {
                query.filter("campaign_id", panel.metric.campaign_id.as_str())
            }
            (Panel::Accounting(panel), Form::Transaction) => {
                let draft = &panel.transaction;
                query
                    .filter("account", draft.account.map(|a| a.code()).unwrap_or_default())
                    .filter("category", draft.category.map(|c| c.code()).unwrap_or_default())
            }
            _ => return None,
        };
        Some(query)
    }

    /// Start a listing: mark busy and build the query.
    pub fn begin_listing(&mut self, form: Form) -> Option<ListQuery> {
        let query = self.list_query(form)?;
        info!(endpoint = %form.endpoint().path(), "listing started");
        self.workflow_mut().begin();
        Some(query)
    }

    /// Finish a listing started with [`Panel::begin_listing`]. Drafts are
    /// never reset by a listing.
    pub fn settle_listing(&mut self, result: SubmitResult<ApiResponse>) -> Resolution {
        self.workflow_mut().settle(result, ResetPolicy::Never)
    }

    /// Run a full listing in place, awaiting the transport.
    pub async fn list<T>(&mut self, form: Form, transport: &T) -> Option<Resolution>
    where
        T: Transport + ?Sized,
    {
        let query = self.list_query(form)?;
        Some(self.workflow_mut().fetch(transport, query).await)
    }

    /// Replace a form's draft with one decoded from JSON.
    ///
    /// Missing fields take their defaults. Returns `Ok(false)`, leaving the
    /// panel untouched, when the form is not on this panel.
    pub fn load(&mut self, form: Form, value: Value) -> Result<bool, serde_json::Error> {
        match (self, form) {
            (Panel::Analysis(panel), Form::Insight) => {
                panel.insight = serde_json::from_value(value)?
            }
            (Panel::Marketing(panel), Form::Campaign) => {
                panel.campaign = serde_json::from_value(value)?
            }
            (Panel::Marketing(panel), Form::Metric) => {
                panel.metric = serde_json::from_value(value)?
            }
            (Panel::Accounting(panel), Form::Transaction) => {
                panel.transaction = serde_json::from_value(value)?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn workflow_mut(&mut self) -> &mut Workflow {
        match self {
            Panel::Analysis(panel) => &mut panel.workflow,
            Panel::Marketing(panel) => &mut panel.workflow,
            Panel::Accounting(panel) => &mut panel.workflow,
        }
    }
}

fn prepare<D: Draft>(draft: &D) -> SubmitResult<ApiRequest> {
    ApiRequest::from_draft(D::ENDPOINT, draft)
}

fn settle_draft<D: Draft>(
    draft: &mut D,
    workflow: &mut Workflow,
    result: SubmitResult<ApiResponse>,
) -> Resolution {
    let resolution = workflow.settle(result, D::RESET_POLICY);
    reset_if_due(draft, resolution);
    resolution
}

async fn submit_draft<D, T>(draft: &mut D, workflow: &mut Workflow, transport: &T) -> Resolution
where
    D: Draft,
    T: Transport + ?Sized,
{
    let resolution = workflow.run(transport, prepare(draft), D::RESET_POLICY).await;
    reset_if_due(draft, resolution);
    resolution
}

fn reset_if_due<D: Draft>(draft: &mut D, resolution: Resolution) {
    if resolution.reset_due() {
        info!(endpoint = %D::ENDPOINT, "draft reset after successful submission");
        *draft = D::default();
    }
}
