//! # egy_core - Draft and Submission Engine
//!
//! `egy_core` is the UI-independent heart of the Egy Discovery desk. It holds
//! the in-progress drafts of the Analysis, Marketing and Accounting panels,
//! decides when they may be submitted, POSTs them to the backend and keeps
//! the last outcome for display.
//!
//! ## Design Philosophy
//!
//! - **Value-owned state**: each panel owns its drafts; nothing is shared
//! - **Field-scoped edits**: drafts change one field at a time
//! - **Opaque responses**: bodies are shown as JSON, never typed
//! - **Two error kinds**: transport or decode, both shown in the result slot
//!
//! ## Quick Start
//!
//! ```rust
//! use egy_core::navigation::{Navigator, Page};
//! use egy_core::panels::{Form, PanelEdit};
//! use egy_core::drafts::CampaignEdit;
//!
//! let mut nav = Navigator::new();
//! nav.navigate(Page::Marketing);
//! nav.edit(PanelEdit::Campaign(CampaignEdit::Name("Q4 Push".to_string())));
//!
//! let panel = nav.panel().unwrap();
//! assert!(panel.can_submit(Form::Campaign));
//! assert_eq!(panel.workflow().outcome().render(), "—");
//! ```
//!
//! ## Modules
//!
//! - [`drafts`] - Draft Store: entities, choices and field edits
//! - [`validation`] - Validation Gate
//! - [`workflow`] - Submission Workflow state machine
//! - [`outcome`] - Result Viewer rendering
//! - [`panels`] - Per-panel drafts plus workflow
//! - [`navigation`] - Navigation Controller and session tagging
//! - [`api`] - HTTP transport
//! - [`config`] - Client configuration
//! - [`errors`] - Structured error types
//! - [`input`] - Permissive numeric parsing
//! - [`logging`] - Tracing subscriber setup

pub mod api;
pub mod config;
pub mod drafts;
pub mod errors;
pub mod input;
pub mod logging;
pub mod navigation;
pub mod outcome;
pub mod panels;
pub mod validation;
pub mod workflow;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiClient, ApiRequest, ApiResponse, Endpoint, ListQuery, Transport};
pub use config::ClientConfig;
pub use errors::{ConfigError, SubmitError, SubmitResult};
pub use navigation::{Navigator, Page, PendingListing, PendingSubmission, SessionId};
pub use outcome::Outcome;
pub use panels::{Form, Panel, PanelEdit};
pub use workflow::{Resolution, ResetPolicy, Workflow};
