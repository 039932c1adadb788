//! # Submission Workflow
//!
//! One request/response cycle per attempt:
//!
//! ```text
//! Idle --begin--> Pending --settle(Ok)--> Succeeded
//!                         \-settle(Err)-> Failed
//! ```
//!
//! Succeeded and Failed are display states only; a new attempt can start
//! right away. The busy flag is set for exactly the Pending window.
//!
//! Two ways to drive it:
//! - [`Workflow::begin`] / [`Workflow::settle`] when the request runs as a
//!   detached task (the GUI event loop).
//! - [`Workflow::run`] when the caller can await in place. The busy flag is
//!   held by a guard, so it is released even if the future is dropped.
//!
//! Listings ([`Workflow::fetch`]) go through the same cycle and land in the
//! same result slot; they never reset a draft.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::api::{ApiRequest, ApiResponse, ListQuery, Transport};
use crate::errors::SubmitResult;
use crate::outcome::Outcome;

/// What happens to a draft after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Leave the draft as it is
    #[default]
    Never,
    /// Replace the draft with defaults when the response status is 2xx
    OnSuccessStatus,
}

impl ResetPolicy {
    /// Whether this response triggers a reset
    pub fn should_reset(&self, response: &ApiResponse) -> bool {
        match self {
            ResetPolicy::Never => false,
            ResetPolicy::OnSuccessStatus => response.is_success(),
        }
    }
}

/// How an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A JSON body came back (any status)
    Succeeded { status: u16, reset: bool },
    /// Transport or decode failure
    Failed,
}

impl Resolution {
    /// Whether the owning draft must be replaced with defaults
    pub fn reset_due(&self) -> bool {
        matches!(self, Resolution::Succeeded { reset: true, .. })
    }
}

/// Busy flag and last outcome of one panel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workflow {
    busy: bool,
    outcome: Outcome,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a request is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Last captured outcome
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Idle -> Pending. Does not refuse a second attempt; callers gate the
    /// submit control on [`Workflow::is_busy`].
    pub fn begin(&mut self) {
        if self.busy {
            debug!("submission started while another is pending");
        }
        self.busy = true;
    }

    /// Pending -> Succeeded | Failed. Always clears the busy flag.
    pub fn settle(&mut self, result: SubmitResult<ApiResponse>, policy: ResetPolicy) -> Resolution {
        self.busy = false;
        match result {
            Ok(response) => {
                let reset = policy.should_reset(&response);
                info!(status = response.status, reset, "submission succeeded");
                let status = response.status;
                self.outcome = Outcome::Body(response.body);
                Resolution::Succeeded { status, reset }
            }
            Err(error) => {
                warn!(code = error.error_code(), error = %error, "submission failed");
                self.outcome = Outcome::Error(error);
                Resolution::Failed
            }
        }
    }

    /// Run one full attempt, awaiting the transport in place.
    pub async fn run<T>(
        &mut self,
        transport: &T,
        prepared: SubmitResult<ApiRequest>,
        policy: ResetPolicy,
    ) -> Resolution
    where
        T: Transport + ?Sized,
    {
        let pending = async move {
            match prepared {
                Ok(request) => transport.send(request).await,
                Err(error) => Err(error),
            }
        };
        self.drive(pending, policy).await
    }

    /// Run one listing, awaiting the transport in place.
    pub async fn fetch<T>(&mut self, transport: &T, query: ListQuery) -> Resolution
    where
        T: Transport + ?Sized,
    {
        self.drive(transport.fetch(query), ResetPolicy::Never).await
    }

    async fn drive<F>(&mut self, pending: F, policy: ResetPolicy) -> Resolution
    where
        F: Future<Output = SubmitResult<ApiResponse>>,
    {
        let result = {
            let _busy = BusyGuard::acquire(&mut self.busy);
            pending.await
        };
        self.settle(result, policy)
    }
}

/// Holds the busy flag for the duration of a request
struct BusyGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a mut bool) -> Self {
        *flag = true;
        BusyGuard { flag }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
