//! In-memory stand-in for the family-record service

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gateway::upstream::{FamilyRecords, FetchAction, PersonPayload, SubmitAction, UpstreamError};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch {
        action: &'static str,
        id: Option<String>,
    },
    Submit {
        action: &'static str,
        payload: PersonPayload,
    },
}

/// Records every call; answers with canned data or a failure.
#[derive(Default)]
pub struct StubRecords {
    calls: Mutex<Vec<Call>>,
    count: AtomicUsize,
    fail: bool,
}

impl StubRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FamilyRecords for StubRecords {
    async fn ping(&self) -> Result<(), UpstreamError> {
        Ok(())
    }

    async fn fetch(&self, action: FetchAction, id: Option<&str>) -> Result<Value, UpstreamError> {
        self.record(Call::Fetch {
            action: action.as_str(),
            id: id.map(str::to_owned),
        });
        if self.fail {
            return Err(UpstreamError::Status { status: 503 });
        }
        Ok(json!([{ "person_id": id.unwrap_or("P-001"), "nama_lengkap": "Ahmad Dalhar" }]))
    }

    async fn submit(
        &self,
        action: SubmitAction,
        payload: &PersonPayload,
    ) -> Result<Value, UpstreamError> {
        self.record(Call::Submit {
            action: action.as_str(),
            payload: payload.clone(),
        });
        if self.fail {
            return Err(UpstreamError::Rejected {
                action: action.as_str(),
                message: "internal sheet error".to_string(),
            });
        }
        Ok(json!({ "status": "success", "message": "ok" }))
    }
}
