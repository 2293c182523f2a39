use serde_json::{Map, Value};
use tracing::{error, info};

use crate::error::AppError;
use crate::upstream::{FamilyRecords, FetchAction, PersonPayload, SubmitAction};

/// Client-facing message when a read action fails.
pub fn fetch_failure_message(action: FetchAction) -> &'static str {
    match action {
        FetchAction::Family => "Failed to retrieve data family",
        FetchAction::ById => "Failed to retrieve data",
        FetchAction::All => "Failed to retrieve all data",
    }
}

/// Client-facing message when a write action fails.
pub fn submit_failure_message(action: SubmitAction) -> &'static str {
    match action {
        SubmitAction::AddPerson => "Failed to add person data",
        SubmitAction::UpdatePerson => "Failed to update person data",
        SubmitAction::DeletePerson => "Failed to delete person data",
    }
}

/// Run a read action and return the upstream `data`.
pub async fn fetch(
    records: &dyn FamilyRecords,
    action: FetchAction,
    id: Option<&str>,
) -> Result<Value, AppError> {
    match records.fetch(action, id).await {
        Ok(data) => {
            info!(action = action.as_str(), id = ?id, "family data retrieved");
            Ok(data)
        }
        Err(e) => {
            error!(action = action.as_str(), id = ?id, error = %e, "family data fetch failed");
            Err(AppError::upstream(fetch_failure_message(action), e.to_string()))
        }
    }
}

/// Whitelist `body` and run a write action, returning the upstream envelope.
pub async fn submit(
    records: &dyn FamilyRecords,
    action: SubmitAction,
    body: &Map<String, Value>,
) -> Result<Value, AppError> {
    let payload = PersonPayload::from_body(body);

    match records.submit(action, &payload).await {
        Ok(result) => {
            info!(action = action.as_str(), person_id = %payload.person_id, "person data submitted");
            Ok(result)
        }
        Err(e) => {
            error!(action = action.as_str(), error = %e, "person data submit failed");
            Err(AppError::upstream(submit_failure_message(action), e.to_string()))
        }
    }
}
