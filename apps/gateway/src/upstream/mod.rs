//! Client side of the spreadsheet-backed family-record service.
//!
//! The service speaks a query protocol: every call names an `action`, carries
//! the shared `api_key`, and answers with an envelope
//! `{"status": "success" | ..., "message": ..., "data": ...}`.

pub mod gas;
pub mod payload;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use gas::GasClient;
pub use payload::PersonPayload;

/// Read actions understood by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAction {
    Family,
    ById,
    All,
}

impl FetchAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchAction::Family => "getFamily",
            FetchAction::ById => "getById",
            FetchAction::All => "getAll",
        }
    }
}

/// Write actions understood by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    AddPerson,
    UpdatePerson,
    DeletePerson,
}

impl SubmitAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmitAction::AddPerson => "addPerson",
            SubmitAction::UpdatePerson => "updatePerson",
            SubmitAction::DeletePerson => "deletePerson",
        }
    }
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },
    #[error("upstream rejected action {action}: {message}")]
    Rejected { action: &'static str, message: String },
}

/// Narrow interface the HTTP layer uses to reach family records.
#[async_trait]
pub trait FamilyRecords: Send + Sync {
    /// Connectivity check used at startup.
    async fn ping(&self) -> Result<(), UpstreamError>;

    /// Run a read action; returns the envelope's `data`.
    async fn fetch(&self, action: FetchAction, id: Option<&str>) -> Result<Value, UpstreamError>;

    /// Run a write action; returns the whole envelope.
    async fn submit(
        &self,
        action: SubmitAction,
        payload: &PersonPayload,
    ) -> Result<Value, UpstreamError>;
}
