//! Configuration system (layered: code > env > `.env` file).

use std::path::Path;

use crate::error::{ChatError, Result};
use crate::types::AgentReference;

pub const AGENT_ID_VAR: &str = "BEDROCK_AGENT_ID";
pub const AGENT_ALIAS_ID_VAR: &str = "BEDROCK_AGENT_ALIAS_ID";
pub const REGION_VAR: &str = "AWS_REGION";
pub const PROFILE_VAR: &str = "AWS_PROFILE";

/// Startup configuration for a chat session.
///
/// The agent reference stays editable at runtime; region and profile only
/// feed the AWS client built at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatConfig {
    pub agent: AgentReference,
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl ChatConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load an explicit env file, then the process environment.
    ///
    /// Unlike [`from_env`](Self::from_env), a missing or malformed file is an error.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        dotenvy::from_path(path).map_err(|e| {
            ChatError::Configuration(format!("cannot load {}: {e}", path.display()))
        })?;
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            agent: AgentReference::new(
                get(AGENT_ID_VAR).unwrap_or_default(),
                get(AGENT_ALIAS_ID_VAR).unwrap_or_default(),
            ),
            region: get(REGION_VAR),
            profile: get(PROFILE_VAR),
        }
    }

    /// Layer explicit values (e.g. command-line flags) over this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        if let Some(id) = present(overrides.agent_id) {
            self.agent.agent_id = id;
        }
        if let Some(alias) = present(overrides.agent_alias_id) {
            self.agent.agent_alias_id = alias;
        }
        if let Some(region) = present(overrides.region) {
            self.region = Some(region);
        }
        if let Some(profile) = present(overrides.profile) {
            self.profile = Some(profile);
        }
        self
    }
}

/// Explicit values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub agent_id: Option<String>,
    pub agent_alias_id: Option<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
}
