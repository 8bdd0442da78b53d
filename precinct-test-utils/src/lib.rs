//! Precinct Test Utilities
//!
//! Shared fixtures and proptest generators for the precinct workspace:
//! fresh services over empty stores, payload builders, and strategies for
//! the value domains the validators accept.

pub use precinct_service::RecordsService;
pub use precinct_storage::{InMemoryAgentStore, InMemoryCaseStore};

use chrono::NaiveDate;
use precinct_core::{AgentPayload, CasePayload};
use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// FIXTURES
// ============================================================================

/// A service over fresh, empty in-memory stores. One per test keeps state
/// isolated.
pub fn fresh_service() -> RecordsService {
    RecordsService::in_memory()
}

/// Full agent payload with every field supplied.
pub fn agent_payload(name: &str, date_joined: &str, role: &str) -> AgentPayload {
    AgentPayload {
        id: None,
        name: Some(name.to_string()),
        date_joined: Some(date_joined.to_string()),
        role: Some(role.to_string()),
    }
}

/// Full case payload with every field supplied.
pub fn case_payload(title: &str, description: &str, status: &str, agent_id: Uuid) -> CasePayload {
    CasePayload {
        id: None,
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        status: Some(status.to_string()),
        agent_id: Some(agent_id.to_string()),
    }
}

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Names the validator accepts: non-blank after trimming.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,24}[A-Za-z]"
}

/// Past calendar dates in wire form (`YYYY-MM-DD`).
pub fn date_joined_strategy() -> impl Strategy<Value = String> {
    (1970i32..=2020, 1u32..=12, 1u32..=28).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .format("%Y-%m-%d")
            .to_string()
    })
}

/// One of the accepted role wire strings.
pub fn role_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("inspector".to_string()),
        Just("delegate".to_string()),
        Just("agent".to_string()),
    ]
}

/// One of the accepted status wire strings.
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("open".to_string()), Just("solved".to_string())]
}

/// Full agent payloads that always pass full-mode validation.
pub fn valid_agent_payload_strategy() -> impl Strategy<Value = AgentPayload> {
    (name_strategy(), date_joined_strategy(), role_strategy())
        .prop_map(|(name, date_joined, role)| agent_payload(&name, &date_joined, &role))
}
