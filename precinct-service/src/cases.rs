//! Case operations.
//!
//! The one real invariant lives here: a case never persists with an
//! `agentId` that does not resolve to a stored agent at the moment of the
//! write. Resolution always runs against the agent store as it is right
//! now, never against a cached view. A merge that does not touch `agentId`
//! does not re-check the existing reference, so a case can keep pointing at
//! an agent deleted after the fact.

use crate::query::CaseQuery;
use crate::{parse_id, reject_foreign_id, RecordsService, UpdateMode};
use precinct_core::{
    new_entity_id, validation, Agent, AgentId, Case, CasePayload, EntityKind, RecordsError,
    RecordsResult,
};
use tracing::debug;

impl RecordsService {
    /// List cases, optionally filtered by holder and status (ANDed).
    pub fn list_cases(&self, query: &CaseQuery) -> RecordsResult<Vec<Case>> {
        let filter = query.to_filter()?;
        Ok(self.cases().list(&filter)?)
    }

    /// Free-text search over titles and descriptions, case-insensitive.
    pub fn search_cases(&self, text: &str) -> RecordsResult<Vec<Case>> {
        Ok(self.cases().search(text)?)
    }

    /// Fetch one case by its path identifier.
    pub fn get_case(&self, id: &str) -> RecordsResult<Case> {
        let id = parse_id(id)?;
        self.cases().get(id)?.ok_or(RecordsError::NotFound {
            entity: EntityKind::Case,
            id,
        })
    }

    /// Fetch the agent responsible for a case. Fails `NotFound` for a
    /// missing case, and also for a since-deleted agent.
    pub fn agent_for_case(&self, case_id: &str) -> RecordsResult<Agent> {
        let case = self.get_case(case_id)?;
        self.agents()
            .get(case.agent_id)?
            .ok_or(RecordsError::NotFound {
                entity: EntityKind::Agent,
                id: case.agent_id,
            })
    }

    /// Create a case from a full payload. Validation runs before the
    /// reference resolves, so a missing `title` wins over an unknown agent.
    pub fn create_case(&self, payload: &CasePayload) -> RecordsResult<Case> {
        let draft = validation::validate_case_full(payload)?;
        self.resolve_agent_ref(draft.agent_id)?;
        let case = Case {
            case_id: new_entity_id(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            agent_id: draft.agent_id,
        };
        let stored = self.cases().create(case)?;
        debug!(case_id = %stored.case_id, "case created");
        Ok(stored)
    }

    /// Full replace (PUT semantics). The reference always re-resolves.
    pub fn replace_case(&self, id: &str, payload: &CasePayload) -> RecordsResult<Case> {
        self.update_case(id, payload, UpdateMode::Replace)
    }

    /// Partial merge (PATCH semantics). The reference resolves only when
    /// the payload supplies `agentId`.
    pub fn merge_case(&self, id: &str, payload: &CasePayload) -> RecordsResult<Case> {
        self.update_case(id, payload, UpdateMode::Merge)
    }

    /// Delete a case. A second delete of the same id reports `NotFound`.
    pub fn delete_case(&self, id: &str) -> RecordsResult<()> {
        let id = parse_id(id)?;
        self.cases().delete(id)?;
        debug!(case_id = %id, "case deleted");
        Ok(())
    }

    fn resolve_agent_ref(&self, agent_id: AgentId) -> RecordsResult<()> {
        if self.agents().get(agent_id)?.is_none() {
            return Err(RecordsError::UnknownReference { agent_id });
        }
        Ok(())
    }

    // Ordering rule, applied identically to PUT and PATCH: existence check
    // of the case, field validation, foreign-key resolution, identifier
    // immutability, mutation.
    fn update_case(&self, id: &str, payload: &CasePayload, mode: UpdateMode) -> RecordsResult<Case> {
        let id = parse_id(id)?;
        let existing = self.cases().get(id)?.ok_or(RecordsError::NotFound {
            entity: EntityKind::Case,
            id,
        })?;
        let updated = match mode {
            UpdateMode::Replace => {
                let draft = validation::validate_case_full(payload)?;
                self.resolve_agent_ref(draft.agent_id)?;
                reject_foreign_id(payload.id.as_deref(), existing.case_id)?;
                self.cases().replace(
                    id,
                    Case {
                        case_id: id,
                        title: draft.title,
                        description: draft.description,
                        status: draft.status,
                        agent_id: draft.agent_id,
                    },
                )?
            }
            UpdateMode::Merge => {
                let patch = match validation::validate_case_partial(payload) {
                    Ok(patch) => patch,
                    // An id-only payload supplies no updatable field, but a
                    // foreign id in it is still an identifier change
                    // attempt and outranks the emptiness report.
                    Err(RecordsError::EmptyPatch) => {
                        reject_foreign_id(payload.id.as_deref(), existing.case_id)?;
                        return Err(RecordsError::EmptyPatch);
                    }
                    Err(e) => return Err(e),
                };
                if let Some(agent_id) = patch.agent_id {
                    self.resolve_agent_ref(agent_id)?;
                }
                reject_foreign_id(payload.id.as_deref(), existing.case_id)?;
                self.cases().merge(id, &patch)?
            }
        };
        debug!(case_id = %id, ?mode, "case updated");
        Ok(updated)
    }
}
