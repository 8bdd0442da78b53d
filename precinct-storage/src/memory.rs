//! In-memory stores backed by `RwLock<Vec<_>>`.
//!
//! A Vec rather than a map: insertion order is part of the list contract.
//! One lock per store covers the whole read-modify-write, which is the only
//! mutual-exclusion discipline these collections need. A poisoned lock
//! surfaces as `StoreError::LockPoisoned`, never a panic.

use crate::{AgentFilter, AgentStore, CaseFilter, CaseStore, StoreResult};
use precinct_core::{
    Agent, AgentId, AgentPatch, AgentSortKey, Case, CaseId, CasePatch, EntityKind, StoreError,
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// AGENT STORE
// ============================================================================

/// In-memory agent collection.
#[derive(Debug, Default)]
pub struct InMemoryAgentStore {
    agents: RwLock<Vec<Agent>>,
}

impl InMemoryAgentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Agent>>> {
        self.agents.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Agent>>> {
        self.agents.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl AgentStore for InMemoryAgentStore {
    fn list(&self, filter: &AgentFilter) -> StoreResult<Vec<Agent>> {
        let agents = self.read()?;
        let mut result: Vec<Agent> = agents
            .iter()
            .filter(|a| filter.role.map_or(true, |role| a.role == role))
            .cloned()
            .collect();
        if let Some(sort) = filter.sort {
            // Stable sort, so equal dates keep insertion order ascending.
            // Descending is the exact reverse of that sequence, ties
            // included.
            result.sort_by_key(|a| a.date_joined);
            if sort == AgentSortKey::DateJoinedDesc {
                result.reverse();
            }
        }
        Ok(result)
    }

    fn get(&self, id: AgentId) -> StoreResult<Option<Agent>> {
        Ok(self.read()?.iter().find(|a| a.agent_id == id).cloned())
    }

    fn create(&self, agent: Agent) -> StoreResult<Agent> {
        let mut agents = self.write()?;
        if agents.iter().any(|a| a.agent_id == agent.agent_id) {
            return Err(StoreError::AlreadyExists {
                entity: EntityKind::Agent,
                id: agent.agent_id,
            });
        }
        agents.push(agent.clone());
        Ok(agent)
    }

    fn replace(&self, id: AgentId, mut agent: Agent) -> StoreResult<Agent> {
        let mut agents = self.write()?;
        let slot = agents
            .iter_mut()
            .find(|a| a.agent_id == id)
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Agent,
                id,
            })?;
        agent.agent_id = id;
        *slot = agent.clone();
        Ok(agent)
    }

    fn merge(&self, id: AgentId, patch: &AgentPatch) -> StoreResult<Agent> {
        let mut agents = self.write()?;
        let slot = agents
            .iter_mut()
            .find(|a| a.agent_id == id)
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Agent,
                id,
            })?;
        if let Some(name) = &patch.name {
            slot.name = name.clone();
        }
        if let Some(date_joined) = patch.date_joined {
            slot.date_joined = date_joined;
        }
        if let Some(role) = patch.role {
            slot.role = role;
        }
        Ok(slot.clone())
    }

    fn delete(&self, id: AgentId) -> StoreResult<()> {
        let mut agents = self.write()?;
        let index = agents
            .iter()
            .position(|a| a.agent_id == id)
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Agent,
                id,
            })?;
        agents.remove(index);
        Ok(())
    }
}

// ============================================================================
// CASE STORE
// ============================================================================

/// In-memory case collection.
#[derive(Debug, Default)]
pub struct InMemoryCaseStore {
    cases: RwLock<Vec<Case>>,
}

impl InMemoryCaseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Case>>> {
        self.cases.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Case>>> {
        self.cases.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl CaseStore for InMemoryCaseStore {
    fn list(&self, filter: &CaseFilter) -> StoreResult<Vec<Case>> {
        let cases = self.read()?;
        Ok(cases
            .iter()
            .filter(|c| filter.agent_id.map_or(true, |id| c.agent_id == id))
            .filter(|c| filter.status.map_or(true, |status| c.status == status))
            .cloned()
            .collect())
    }

    fn search(&self, text: &str) -> StoreResult<Vec<Case>> {
        let needle = text.to_lowercase();
        let cases = self.read()?;
        Ok(cases
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    fn get(&self, id: CaseId) -> StoreResult<Option<Case>> {
        Ok(self.read()?.iter().find(|c| c.case_id == id).cloned())
    }

    fn create(&self, case: Case) -> StoreResult<Case> {
        let mut cases = self.write()?;
        if cases.iter().any(|c| c.case_id == case.case_id) {
            return Err(StoreError::AlreadyExists {
                entity: EntityKind::Case,
                id: case.case_id,
            });
        }
        cases.push(case.clone());
        Ok(case)
    }

    fn replace(&self, id: CaseId, mut case: Case) -> StoreResult<Case> {
        let mut cases = self.write()?;
        let slot = cases
            .iter_mut()
            .find(|c| c.case_id == id)
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Case,
                id,
            })?;
        case.case_id = id;
        *slot = case.clone();
        Ok(case)
    }

    fn merge(&self, id: CaseId, patch: &CasePatch) -> StoreResult<Case> {
        let mut cases = self.write()?;
        let slot = cases
            .iter_mut()
            .find(|c| c.case_id == id)
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Case,
                id,
            })?;
        if let Some(title) = &patch.title {
            slot.title = title.clone();
        }
        if let Some(description) = &patch.description {
            slot.description = description.clone();
        }
        if let Some(status) = patch.status {
            slot.status = status;
        }
        if let Some(agent_id) = patch.agent_id {
            slot.agent_id = agent_id;
        }
        Ok(slot.clone())
    }

    fn delete(&self, id: CaseId) -> StoreResult<()> {
        let mut cases = self.write()?;
        let index = cases
            .iter()
            .position(|c| c.case_id == id)
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Case,
                id,
            })?;
        cases.remove(index);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use precinct_core::{new_entity_id, AgentRole, CaseStatus};
    use proptest::prelude::*;

    fn agent(name: &str, date: (i32, u32, u32), role: AgentRole) -> Agent {
        Agent {
            agent_id: new_entity_id(),
            name: name.to_string(),
            date_joined: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            role,
        }
    }

    fn case(title: &str, description: &str, status: CaseStatus, agent_id: AgentId) -> Case {
        Case {
            case_id: new_entity_id(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            agent_id,
        }
    }

    fn seeded_agents() -> (InMemoryAgentStore, Vec<Agent>) {
        let store = InMemoryAgentStore::new();
        let records = vec![
            agent("Meire", (2015, 6, 1), AgentRole::Inspector),
            agent("Otavio", (2010, 2, 20), AgentRole::Delegate),
            agent("Paula", (2020, 11, 5), AgentRole::Inspector),
        ];
        for record in &records {
            store.create(record.clone()).unwrap();
        }
        (store, records)
    }

    #[test]
    fn test_list_without_filter_keeps_insertion_order() {
        let (store, records) = seeded_agents();
        let listed = store.list(&AgentFilter::default()).unwrap();
        assert_eq!(listed, records);
    }

    #[test]
    fn test_list_filters_by_role() {
        let (store, _) = seeded_agents();
        let filter = AgentFilter {
            role: Some(AgentRole::Inspector),
            sort: None,
        };
        let listed = store.list(&filter).unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|a| a.role == AgentRole::Inspector));
    }

    #[test]
    fn test_list_sorts_by_date_joined() {
        let (store, _) = seeded_agents();
        let asc = store
            .list(&AgentFilter {
                role: None,
                sort: Some(AgentSortKey::DateJoinedAsc),
            })
            .unwrap();
        let dates: Vec<_> = asc.iter().map(|a| a.date_joined).collect();
        let mut expected = dates.clone();
        expected.sort();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_descending_is_exact_reverse_of_ascending() {
        let store = InMemoryAgentStore::new();
        // Duplicate dates so tie ordering matters.
        for record in [
            agent("A", (2012, 1, 1), AgentRole::Agent),
            agent("B", (2012, 1, 1), AgentRole::Agent),
            agent("C", (2008, 7, 9), AgentRole::Agent),
        ] {
            store.create(record).unwrap();
        }
        let asc = store
            .list(&AgentFilter {
                role: None,
                sort: Some(AgentSortKey::DateJoinedAsc),
            })
            .unwrap();
        let desc = store
            .list(&AgentFilter {
                role: None,
                sort: Some(AgentSortKey::DateJoinedDesc),
            })
            .unwrap();
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_list_returns_a_snapshot() {
        let (store, records) = seeded_agents();
        let before = store.list(&AgentFilter::default()).unwrap();
        store.delete(records[0].agent_id).unwrap();
        assert_eq!(before.len(), 3);
        assert_eq!(store.list(&AgentFilter::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_get_absent_is_none_not_error() {
        let store = InMemoryAgentStore::new();
        assert_eq!(store.get(new_entity_id()).unwrap(), None);
    }

    #[test]
    fn test_create_rejects_colliding_id() {
        let store = InMemoryAgentStore::new();
        let record = agent("Meire", (2015, 6, 1), AgentRole::Inspector);
        store.create(record.clone()).unwrap();
        assert!(matches!(
            store.create(record),
            Err(StoreError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_replace_keeps_the_stored_id() {
        let (store, records) = seeded_agents();
        let target = records[1].agent_id;
        let replacement = agent("Otavio Filho", (2011, 3, 3), AgentRole::Agent);
        let foreign_id = replacement.agent_id;
        let updated = store.replace(target, replacement).unwrap();
        assert_eq!(updated.agent_id, target);
        assert_eq!(updated.name, "Otavio Filho");
        assert_eq!(store.get(foreign_id).unwrap(), None);
    }

    #[test]
    fn test_merge_touches_only_supplied_fields() {
        let (store, records) = seeded_agents();
        let target = records[0].clone();
        let patch = AgentPatch {
            role: Some(AgentRole::Delegate),
            ..AgentPatch::default()
        };
        let updated = store.merge(target.agent_id, &patch).unwrap();
        assert_eq!(updated.role, AgentRole::Delegate);
        assert_eq!(updated.name, target.name);
        assert_eq!(updated.date_joined, target.date_joined);
        assert_eq!(updated.agent_id, target.agent_id);
    }

    #[test]
    fn test_second_delete_reports_not_found() {
        let (store, records) = seeded_agents();
        let id = records[2].agent_id;
        store.delete(id).unwrap();
        assert_eq!(
            store.delete(id),
            Err(StoreError::NotFound {
                entity: EntityKind::Agent,
                id
            })
        );
    }

    #[test]
    fn test_case_list_filters_are_anded() {
        let store = InMemoryCaseStore::new();
        let holder = new_entity_id();
        let other = new_entity_id();
        store
            .create(case("a", "d", CaseStatus::Open, holder))
            .unwrap();
        store
            .create(case("b", "d", CaseStatus::Solved, holder))
            .unwrap();
        store
            .create(case("c", "d", CaseStatus::Open, other))
            .unwrap();

        let both = store
            .list(&CaseFilter {
                agent_id: Some(holder),
                status: Some(CaseStatus::Open),
            })
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "a");

        let by_holder = store
            .list(&CaseFilter {
                agent_id: Some(holder),
                status: None,
            })
            .unwrap();
        assert_eq!(by_holder.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let store = InMemoryCaseStore::new();
        let holder = new_entity_id();
        store
            .create(case(
                "Homicídio",
                "Disparos reportados no bairro União",
                CaseStatus::Open,
                holder,
            ))
            .unwrap();
        store
            .create(case(
                "Furto",
                "Carteira desaparecida na praça",
                CaseStatus::Open,
                holder,
            ))
            .unwrap();

        let by_title = store.search("homic").unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Homicídio");

        let by_description = store.search("PRAÇA").unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].title, "Furto");
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let store = InMemoryCaseStore::new();
        let holder = new_entity_id();
        store
            .create(case("a", "d", CaseStatus::Open, holder))
            .unwrap();
        store
            .create(case("b", "d", CaseStatus::Solved, holder))
            .unwrap();
        assert_eq!(store.search("").unwrap().len(), 2);
    }

    #[test]
    fn test_search_no_match_is_empty_sequence() {
        let store = InMemoryCaseStore::new();
        store
            .create(case("a", "d", CaseStatus::Open, new_entity_id()))
            .unwrap();
        assert!(store.search("zzz").unwrap().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_descending_always_reverses_ascending(
            dates in prop::collection::vec((1980i32..=2020, 1u32..=12, 1u32..=28), 0..12)
        ) {
            let store = InMemoryAgentStore::new();
            for (i, date) in dates.iter().enumerate() {
                store
                    .create(agent(&format!("agent-{}", i), *date, AgentRole::Agent))
                    .unwrap();
            }
            let asc = store
                .list(&AgentFilter { role: None, sort: Some(AgentSortKey::DateJoinedAsc) })
                .unwrap();
            let desc = store
                .list(&AgentFilter { role: None, sort: Some(AgentSortKey::DateJoinedDesc) })
                .unwrap();
            let mut reversed = asc;
            reversed.reverse();
            prop_assert_eq!(desc, reversed);
        }
    }

    #[test]
    fn test_case_merge_can_repoint_agent() {
        let store = InMemoryCaseStore::new();
        let original = new_entity_id();
        let next = new_entity_id();
        let stored = store
            .create(case("a", "d", CaseStatus::Open, original))
            .unwrap();
        let patch = CasePatch {
            agent_id: Some(next),
            ..CasePatch::default()
        };
        let updated = store.merge(stored.case_id, &patch).unwrap();
        assert_eq!(updated.agent_id, next);
        assert_eq!(updated.status, CaseStatus::Open);
    }
}
