//! Field validation for agent and case payloads.
//!
//! Pure functions: a raw payload goes in, a normalized draft or patch comes
//! out, or the first violation as a `(field, reason)` pair. Validation is
//! fail-fast, and it never looks past the payload: whether a referenced
//! agent actually exists is the service's concern.
//!
//! Field names in violations use the wire spelling (`dateJoined`,
//! `agentId`) because callers surface them verbatim.

use crate::error::{RecordsError, RecordsResult};
use crate::payload::{AgentDraft, AgentPatch, AgentPayload, CaseDraft, CasePatch, CasePayload};
use crate::{AgentRole, CaseStatus};
use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static DATE_WIRE_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex"));

// ============================================================================
// FIELD RULES
// ============================================================================

fn required<'a>(value: &'a Option<String>, field: &str) -> RecordsResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| RecordsError::validation(field, "field is required"))
}

fn non_empty(raw: &str, field: &str) -> RecordsResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecordsError::validation(field, "must be non-empty"));
    }
    Ok(trimmed.to_string())
}

fn parse_date_joined(raw: &str, field: &str) -> RecordsResult<NaiveDate> {
    if !DATE_WIRE_FORM.is_match(raw) {
        return Err(RecordsError::validation(field, "must match 'YYYY-MM-DD'"));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| RecordsError::validation(field, "is not a real calendar date"))?;
    if date > Utc::now().date_naive() {
        return Err(RecordsError::validation(field, "must not be in the future"));
    }
    Ok(date)
}

fn parse_role(raw: &str, field: &str) -> RecordsResult<AgentRole> {
    AgentRole::from_wire_str(raw).map_err(|e| RecordsError::validation(field, e.to_string()))
}

fn parse_status(raw: &str, field: &str) -> RecordsResult<CaseStatus> {
    CaseStatus::from_wire_str(raw).map_err(|e| RecordsError::validation(field, e.to_string()))
}

// Syntax check only; resolution against the agent store happens later.
fn parse_agent_ref(raw: &str, field: &str) -> RecordsResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| RecordsError::validation(field, "must be a well-formed UUID"))
}

// ============================================================================
// AGENT PAYLOADS
// ============================================================================

/// Validate a full-mode (POST/PUT) agent payload. Every data field must be
/// present and pass its rule.
pub fn validate_agent_full(payload: &AgentPayload) -> RecordsResult<AgentDraft> {
    let name = non_empty(required(&payload.name, "name")?, "name")?;
    let date_joined = parse_date_joined(required(&payload.date_joined, "dateJoined")?, "dateJoined")?;
    let role = parse_role(required(&payload.role, "role")?, "role")?;
    Ok(AgentDraft {
        name,
        date_joined,
        role,
    })
}

/// Validate a partial-mode (PATCH) agent payload. Any subset of fields is
/// allowed, each supplied field must pass its rule, and at least one
/// updatable field must be present.
pub fn validate_agent_partial(payload: &AgentPayload) -> RecordsResult<AgentPatch> {
    let mut patch = AgentPatch::default();
    if let Some(raw) = &payload.name {
        patch.name = Some(non_empty(raw, "name")?);
    }
    if let Some(raw) = &payload.date_joined {
        patch.date_joined = Some(parse_date_joined(raw, "dateJoined")?);
    }
    if let Some(raw) = &payload.role {
        patch.role = Some(parse_role(raw, "role")?);
    }
    if patch.is_empty() {
        return Err(RecordsError::EmptyPatch);
    }
    Ok(patch)
}

// ============================================================================
// CASE PAYLOADS
// ============================================================================

/// Validate a full-mode (POST/PUT) case payload.
pub fn validate_case_full(payload: &CasePayload) -> RecordsResult<CaseDraft> {
    let title = non_empty(required(&payload.title, "title")?, "title")?;
    let description = non_empty(required(&payload.description, "description")?, "description")?;
    let status = parse_status(required(&payload.status, "status")?, "status")?;
    let agent_id = parse_agent_ref(required(&payload.agent_id, "agentId")?, "agentId")?;
    Ok(CaseDraft {
        title,
        description,
        status,
        agent_id,
    })
}

/// Validate a partial-mode (PATCH) case payload.
pub fn validate_case_partial(payload: &CasePayload) -> RecordsResult<CasePatch> {
    let mut patch = CasePatch::default();
    if let Some(raw) = &payload.title {
        patch.title = Some(non_empty(raw, "title")?);
    }
    if let Some(raw) = &payload.description {
        patch.description = Some(non_empty(raw, "description")?);
    }
    if let Some(raw) = &payload.status {
        patch.status = Some(parse_status(raw, "status")?);
    }
    if let Some(raw) = &payload.agent_id {
        patch.agent_id = Some(parse_agent_ref(raw, "agentId")?);
    }
    if patch.is_empty() {
        return Err(RecordsError::EmptyPatch);
    }
    Ok(patch)
}

// =============================================================================
// TESTS
// =============================================================================
