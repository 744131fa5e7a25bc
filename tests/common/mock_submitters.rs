//! Submission collaborators with scripted behaviour

use async_trait::async_trait;
use exhibitor_registration::models::{BrochureFile, RegistrationPayload};
use exhibitor_registration::{RegistrationSubmitter, SubmissionFailure, SubmissionReceipt};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn receipt(registration_id: &str) -> SubmissionReceipt {
    SubmissionReceipt {
        data: json!({ "registrationId": registration_id, "status": "pending" }),
        message: "Registration submitted successfully!".to_string(),
    }
}

/// Returns the same outcome on every call and records what it received
pub struct ScriptedSubmitter {
    outcome: Result<SubmissionReceipt, SubmissionFailure>,
    calls: AtomicUsize,
    last_call: Mutex<Option<(RegistrationPayload, Option<BrochureFile>)>>,
}

impl ScriptedSubmitter {
    pub fn succeeding() -> Arc<Self> {
        Self::with_outcome(Ok(receipt("MF-TEST000001")))
    }

    pub fn failing(failure: SubmissionFailure) -> Arc<Self> {
        Self::with_outcome(Err(failure))
    }

    pub fn with_outcome(outcome: Result<SubmissionReceipt, SubmissionFailure>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(RegistrationPayload, Option<BrochureFile>)> {
        self.last_call.lock().clone()
    }
}

#[async_trait]
impl RegistrationSubmitter for ScriptedSubmitter {
    async fn submit(
        &self,
        payload: RegistrationPayload,
        brochure: Option<BrochureFile>,
    ) -> Result<SubmissionReceipt, SubmissionFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock() = Some((payload, brochure));
        self.outcome.clone()
    }
}

/// Holds every submission until released
pub struct GatedSubmitter {
    started: Notify,
    release: Notify,
    entered: AtomicUsize,
}

impl GatedSubmitter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            started: Notify::new(),
            release: Notify::new(),
            entered: AtomicUsize::new(0),
        })
    }

    /// Wait until at least `count` submissions are parked
    pub async fn wait_for_entered(&self, count: usize) {
        loop {
            let notified = self.started.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.entered.load(Ordering::SeqCst) >= count {
                return;
            }
            notified.await;
        }
    }

    pub fn release_all(&self) {
        self.release.notify_waiters();
    }
}

#[async_trait]
impl RegistrationSubmitter for GatedSubmitter {
    async fn submit(
        &self,
        _payload: RegistrationPayload,
        _brochure: Option<BrochureFile>,
    ) -> Result<SubmissionReceipt, SubmissionFailure> {
        let released = self.release.notified();
        tokio::pin!(released);
        released.as_mut().enable();

        self.entered.fetch_add(1, Ordering::SeqCst);
        self.started.notify_waiters();
        released.await;
        Ok(receipt("MF-GATED00001"))
    }
}

pub struct PanickingSubmitter;

#[async_trait]
impl RegistrationSubmitter for PanickingSubmitter {
    async fn submit(
        &self,
        _payload: RegistrationPayload,
        _brochure: Option<BrochureFile>,
    ) -> Result<SubmissionReceipt, SubmissionFailure> {
        panic!("backend client exploded")
    }
}

/// Never completes
pub struct PendingSubmitter;

#[async_trait]
impl RegistrationSubmitter for PendingSubmitter {
    async fn submit(
        &self,
        _payload: RegistrationPayload,
        _brochure: Option<BrochureFile>,
    ) -> Result<SubmissionReceipt, SubmissionFailure> {
        std::future::pending().await
    }
}
