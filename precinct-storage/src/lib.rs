//! Precinct Storage - Store Contracts and In-Memory Implementation
//!
//! Defines the repository abstraction for agent and case records. Each
//! store exclusively owns its backing collection; nothing outside a store
//! mutates collection contents directly. Collections live for the process
//! lifetime only.
//!
//! Stores never coordinate across entity kinds: the case store does not
//! check that an `agent_id` resolves. That cross-store check belongs to the
//! service layer, where it runs against the current agent store state at
//! the moment of the write.

pub mod memory;

pub use memory::{InMemoryAgentStore, InMemoryCaseStore};

use precinct_core::{
    Agent, AgentId, AgentPatch, AgentRole, AgentSortKey, Case, CaseId, CasePatch, CaseStatus,
    StoreError,
};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// FILTERS
// ============================================================================

/// Listing filter for agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentFilter {
    /// Exact-match role filter.
    pub role: Option<AgentRole>,
    /// Sort order; absent means insertion order.
    pub sort: Option<AgentSortKey>,
}

/// Listing filter for cases. Both filters are exact-match and ANDed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub agent_id: Option<AgentId>,
    pub status: Option<CaseStatus>,
}

// ============================================================================
// STORE CONTRACTS
// ============================================================================

/// Repository contract for agent records.
pub trait AgentStore: Send + Sync {
    /// Filtered, ordered listing. Returns a snapshot: later mutations are
    /// never observable through a previously returned sequence.
    fn list(&self, filter: &AgentFilter) -> StoreResult<Vec<Agent>>;

    /// Lookup by id. Absence is a query result, not an error.
    fn get(&self, id: AgentId) -> StoreResult<Option<Agent>>;

    /// Store a new record. The caller pre-generates a unique id; a
    /// collision is reported as `AlreadyExists`.
    fn create(&self, agent: Agent) -> StoreResult<Agent>;

    /// Overwrite all fields except the id.
    fn replace(&self, id: AgentId, agent: Agent) -> StoreResult<Agent>;

    /// Shallow-merge the supplied fields. Never alters the id.
    fn merge(&self, id: AgentId, patch: &AgentPatch) -> StoreResult<Agent>;

    /// Remove the record. A second delete of the same id reports `NotFound`.
    fn delete(&self, id: AgentId) -> StoreResult<()>;
}

/// Repository contract for case records.
pub trait CaseStore: Send + Sync {
    /// Filtered listing in insertion order. Returns a snapshot.
    fn list(&self, filter: &CaseFilter) -> StoreResult<Vec<Case>>;

    /// Every case whose title or description contains `text`
    /// case-insensitively. The empty query matches everything. Always a
    /// sequence, possibly empty - never an absence signal.
    fn search(&self, text: &str) -> StoreResult<Vec<Case>>;

    /// Lookup by id. Absence is a query result, not an error.
    fn get(&self, id: CaseId) -> StoreResult<Option<Case>>;

    /// Store a new record. The caller pre-generates a unique id.
    fn create(&self, case: Case) -> StoreResult<Case>;

    /// Overwrite all fields except the id.
    fn replace(&self, id: CaseId, case: Case) -> StoreResult<Case>;

    /// Shallow-merge the supplied fields. Never alters the id.
    fn merge(&self, id: CaseId, patch: &CasePatch) -> StoreResult<Case>;

    /// Remove the record. A second delete of the same id reports `NotFound`.
    fn delete(&self, id: CaseId) -> StoreResult<()>;
}
