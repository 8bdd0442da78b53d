//! Enum types for precinct entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ENTITY KIND
// ============================================================================

/// Entity kind discriminator used in errors and store diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Agent,
    Case,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Agent => write!(f, "agent"),
            EntityKind::Case => write!(f, "case"),
        }
    }
}

// ============================================================================
// AGENT ROLE
// ============================================================================

/// Role held by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Inspector,
    Delegate,
    Agent,
}

impl AgentRole {
    /// Convert to the wire string representation.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            AgentRole::Inspector => "inspector",
            AgentRole::Delegate => "delegate",
            AgentRole::Agent => "agent",
        }
    }

    /// Parse from the wire string representation.
    /// Exact match; role strings are case-sensitive.
    pub fn from_wire_str(s: &str) -> Result<Self, AgentRoleParseError> {
        match s {
            "inspector" => Ok(AgentRole::Inspector),
            "delegate" => Ok(AgentRole::Delegate),
            "agent" => Ok(AgentRole::Agent),
            _ => Err(AgentRoleParseError(s.to_string())),
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for AgentRole {
    type Err = AgentRoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_str(s)
    }
}

/// Error when parsing an invalid agent role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRoleParseError(pub String);

impl fmt::Display for AgentRoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a role (expected 'inspector', 'delegate' or 'agent')",
            self.0
        )
    }
}

impl std::error::Error for AgentRoleParseError {}

// ============================================================================
// CASE STATUS
// ============================================================================

/// Status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Open,
    Solved,
}

impl CaseStatus {
    /// Convert to the wire string representation.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::Solved => "solved",
        }
    }

    /// Parse from the wire string representation.
    /// Exact match; status strings are case-sensitive.
    pub fn from_wire_str(s: &str) -> Result<Self, CaseStatusParseError> {
        match s {
            "open" => Ok(CaseStatus::Open),
            "solved" => Ok(CaseStatus::Solved),
            _ => Err(CaseStatusParseError(s.to_string())),
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CaseStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_str(s)
    }
}

/// Error when parsing an invalid case status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStatusParseError(pub String);

impl fmt::Display for CaseStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a status (expected 'open' or 'solved')", self.0)
    }
}

impl std::error::Error for CaseStatusParseError {}

// ============================================================================
// AGENT SORT KEY
// ============================================================================

/// Sort key accepted by agent listings.
///
/// The descending variant returns the exact reverse of the ascending
/// sequence for the same input set, ties included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentSortKey {
    DateJoinedAsc,
    DateJoinedDesc,
}

impl AgentSortKey {
    /// Convert to the wire string representation.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            AgentSortKey::DateJoinedAsc => "dateJoined",
            AgentSortKey::DateJoinedDesc => "-dateJoined",
        }
    }

    /// Parse from the wire string representation.
    pub fn from_wire_str(s: &str) -> Result<Self, AgentSortKeyParseError> {
        match s {
            "dateJoined" => Ok(AgentSortKey::DateJoinedAsc),
            "-dateJoined" => Ok(AgentSortKey::DateJoinedDesc),
            _ => Err(AgentSortKeyParseError(s.to_string())),
        }
    }
}

impl fmt::Display for AgentSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for AgentSortKey {
    type Err = AgentSortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_str(s)
    }
}

/// Error when parsing an invalid sort key string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSortKeyParseError(pub String);

impl fmt::Display for AgentSortKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a sort key (expected 'dateJoined' or '-dateJoined')",
            self.0
        )
    }
}

impl std::error::Error for AgentSortKeyParseError {}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_round_trip() {
        for role in [AgentRole::Inspector, AgentRole::Delegate, AgentRole::Agent] {
            assert_eq!(AgentRole::from_wire_str(role.as_wire_str()), Ok(role));
        }
    }

    #[test]
    fn test_role_parse_is_case_sensitive() {
        assert!(AgentRole::from_wire_str("Inspector").is_err());
        assert!(AgentRole::from_wire_str("INSPECTOR").is_err());
        assert!(AgentRole::from_wire_str("chief").is_err());
    }

    #[test]
    fn test_status_wire_round_trip() {
        assert_eq!(CaseStatus::from_wire_str("open"), Ok(CaseStatus::Open));
        assert_eq!(CaseStatus::from_wire_str("solved"), Ok(CaseStatus::Solved));
        assert!(CaseStatus::from_wire_str("Solved").is_err());
        assert!(CaseStatus::from_wire_str("closed").is_err());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(
            AgentSortKey::from_wire_str("dateJoined"),
            Ok(AgentSortKey::DateJoinedAsc)
        );
        assert_eq!(
            AgentSortKey::from_wire_str("-dateJoined"),
            Ok(AgentSortKey::DateJoinedDesc)
        );
        assert!(AgentSortKey::from_wire_str("datejoined").is_err());
        assert!(AgentSortKey::from_wire_str("name").is_err());
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::Open).unwrap(),
            "\"open\""
        );
        assert_eq!(
            serde_json::from_str::<AgentRole>("\"delegate\"").unwrap(),
            AgentRole::Delegate
        );
    }
}
