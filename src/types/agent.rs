//! Operator-supplied reference to a remote agent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Which remote agent to call: an agent id plus one of its aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReference {
    pub agent_id: String,
    pub agent_alias_id: String,
}

impl AgentReference {
    pub fn new(agent_id: impl Into<String>, agent_alias_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            agent_alias_id: agent_alias_id.into(),
        }
    }

    /// Check that both fields are filled in. Whitespace-only counts as blank.
    ///
    /// The agent id is checked first, so with both blank the error names it.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.agent_id.trim().is_empty() {
            return Err(GatewayError::missing_field("agent id"));
        }
        if self.agent_alias_id.trim().is_empty() {
            return Err(GatewayError::missing_field("agent alias id"));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for AgentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset(s: &str) -> &str {
            if s.trim().is_empty() {
                "<unset>"
            } else {
                s
            }
        }
        write!(f, "{}/{}", or_unset(&self.agent_id), or_unset(&self.agent_alias_id))
    }
}
