//! Incident lifecycle states
//!
//! The state space mirrors the classic ITSM incident table: it is an
//! explicit enumeration with gaps (wire values 4 and 5 are undefined), so it
//! must never be treated as a contiguous integer range.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a synthesized incident record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentState {
    /// State 1: freshly opened, not yet worked
    New,
    /// State 2: actively being worked
    InProgress,
    /// State 3: waiting on caller or vendor
    OnHold,
    /// State 6: fix delivered, awaiting confirmation
    Resolved,
    /// State 7: confirmed and closed
    Closed,
    /// State 8: abandoned without resolution
    Canceled,
}

impl IncidentState {
    /// All defined states, in wire-value order
    pub const ALL: [IncidentState; 6] = [
        IncidentState::New,
        IncidentState::InProgress,
        IncidentState::OnHold,
        IncidentState::Resolved,
        IncidentState::Closed,
        IncidentState::Canceled,
    ];

    /// Numeric wire value used by the record store
    pub fn value(&self) -> u8 {
        match self {
            IncidentState::New => 1,
            IncidentState::InProgress => 2,
            IncidentState::OnHold => 3,
            IncidentState::Resolved => 6,
            IncidentState::Closed => 7,
            IncidentState::Canceled => 8,
        }
    }

    /// Decode a raw wire value. Values 4 and 5 are undefined gaps in the
    /// enumeration and remap to `InProgress`; anything else out of range is
    /// `None`.
    pub fn from_value(value: u8) -> Option<IncidentState> {
        match value {
            1 => Some(IncidentState::New),
            2 => Some(IncidentState::InProgress),
            3 => Some(IncidentState::OnHold),
            4 | 5 => Some(IncidentState::InProgress),
            6 => Some(IncidentState::Resolved),
            7 => Some(IncidentState::Closed),
            8 => Some(IncidentState::Canceled),
            _ => None,
        }
    }

    /// Is this a terminal state (no further transitions expected)?
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            IncidentState::Resolved | IncidentState::Closed | IncidentState::Canceled
        )
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            IncidentState::New => "New",
            IncidentState::InProgress => "In Progress",
            IncidentState::OnHold => "On Hold",
            IncidentState::Resolved => "Resolved",
            IncidentState::Closed => "Closed",
            IncidentState::Canceled => "Canceled",
        }
    }
}

impl std::fmt::Display for IncidentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Tests
// ============================================================================
