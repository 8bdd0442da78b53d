//! Agent operations.
//!
//! Agents carry no outgoing reference, so their writes skip foreign-key
//! resolution but otherwise follow the same ordering as case writes.
//! Deleting or replacing an agent performs no cascading check against
//! existing cases; cases holding the removed id keep it.

use crate::query::AgentQuery;
use crate::{parse_id, reject_foreign_id, RecordsService, UpdateMode};
use precinct_core::{
    new_entity_id, validation, Agent, AgentPayload, EntityKind, RecordsError, RecordsResult,
};
use tracing::debug;

impl RecordsService {
    /// List agents, optionally filtered by role and sorted by `dateJoined`.
    pub fn list_agents(&self, query: &AgentQuery) -> RecordsResult<Vec<Agent>> {
        let filter = query.to_filter()?;
        Ok(self.agents().list(&filter)?)
    }

    /// Fetch one agent by its path identifier.
    pub fn get_agent(&self, id: &str) -> RecordsResult<Agent> {
        let id = parse_id(id)?;
        self.agents()
            .get(id)?
            .ok_or(RecordsError::NotFound {
                entity: EntityKind::Agent,
                id,
            })
    }

    /// Create an agent from a full payload. The identifier is generated
    /// here; any id supplied in the payload is ignored.
    pub fn create_agent(&self, payload: &AgentPayload) -> RecordsResult<Agent> {
        let draft = validation::validate_agent_full(payload)?;
        let agent = Agent {
            agent_id: new_entity_id(),
            name: draft.name,
            date_joined: draft.date_joined,
            role: draft.role,
        };
        let stored = self.agents().create(agent)?;
        debug!(agent_id = %stored.agent_id, "agent created");
        Ok(stored)
    }

    /// Full replace (PUT semantics).
    pub fn replace_agent(&self, id: &str, payload: &AgentPayload) -> RecordsResult<Agent> {
        self.update_agent(id, payload, UpdateMode::Replace)
    }

    /// Partial merge (PATCH semantics).
    pub fn merge_agent(&self, id: &str, payload: &AgentPayload) -> RecordsResult<Agent> {
        self.update_agent(id, payload, UpdateMode::Merge)
    }

    /// Delete an agent. A second delete of the same id reports `NotFound`.
    pub fn delete_agent(&self, id: &str) -> RecordsResult<()> {
        let id = parse_id(id)?;
        self.agents().delete(id)?;
        debug!(agent_id = %id, "agent deleted");
        Ok(())
    }

    // Ordering: existence, field validation, identifier immutability,
    // mutation. Same sequence as case updates minus the foreign key.
    fn update_agent(
        &self,
        id: &str,
        payload: &AgentPayload,
        mode: UpdateMode,
    ) -> RecordsResult<Agent> {
        let id = parse_id(id)?;
        let existing = self.agents().get(id)?.ok_or(RecordsError::NotFound {
            entity: EntityKind::Agent,
            id,
        })?;
        let updated = match mode {
            UpdateMode::Replace => {
                let draft = validation::validate_agent_full(payload)?;
                reject_foreign_id(payload.id.as_deref(), existing.agent_id)?;
                self.agents().replace(
                    id,
                    Agent {
                        agent_id: id,
                        name: draft.name,
                        date_joined: draft.date_joined,
                        role: draft.role,
                    },
                )?
            }
            UpdateMode::Merge => {
                let patch = match validation::validate_agent_partial(payload) {
                    Ok(patch) => patch,
                    // An id-only payload supplies no updatable field, but a
                    // foreign id in it is still an identifier change
                    // attempt and outranks the emptiness report.
                    Err(RecordsError::EmptyPatch) => {
                        reject_foreign_id(payload.id.as_deref(), existing.agent_id)?;
                        return Err(RecordsError::EmptyPatch);
                    }
                    Err(e) => return Err(e),
                };
                reject_foreign_id(payload.id.as_deref(), existing.agent_id)?;
                self.agents().merge(id, &patch)?
            }
        };
        debug!(agent_id = %id, ?mode, "agent updated");
        Ok(updated)
    }
}
